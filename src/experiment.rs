// Energy Routing: Comparing energy-aware routing strategies in ad-hoc networks
// Copyright (C) 2023 Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Export the results of an experiment to a json file, including all parameters.

use std::{
    fs::{create_dir_all, remove_file, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use adhocsim::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{format_description, OffsetDateTime};

use crate::strategy::{RoutingReport, RunOutcome};

/// Error thrown while storing an experiment
#[derive(Debug, Error)]
pub enum ExperimentError {
    /// Cannot write the results
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Cannot serialize the results
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// Cannot format the current time
    #[error("{0}")]
    TimeFormat(#[from] time::error::Format),
    /// The time format description is invalid
    #[error("{0}")]
    TimeDescription(#[from] time::error::InvalidFormatDescription),
}

/// Result of a single strategy within an experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// The report of the run
    pub report: RoutingReport,
    /// Number of transmitters below the depletion threshold after the run.
    pub depleted_nodes: usize,
    /// Energy left in the network after the run.
    pub remaining_energy: Energy,
}

impl StrategyResult {
    /// Summarize the outcome of a run, counting transmitters below `depletion_threshold` as
    /// depleted.
    pub fn new(outcome: &RunOutcome, depletion_threshold: Energy) -> Self {
        Self {
            report: outcome.report.clone(),
            depleted_nodes: outcome.network.depleted_nodes(depletion_threshold),
            remaining_energy: outcome.network.total_energy(),
        }
    }
}

/// Structure to store an experiment result to file
#[derive(Debug, Serialize)]
pub struct Experiment<'a> {
    /// Parameters used to generate the network
    pub params: &'a NetworkParams,
    /// The generated requests, in the order of generation.
    pub requests: &'a RequestSet,
    /// Whether the generated network was connected.
    pub connected: bool,
    /// Threshold below which a transmitter is considered depleted.
    pub depletion_threshold: Energy,
    /// Results of every strategy
    pub results: Vec<StrategyResult>,
}

impl<'a> Experiment<'a> {
    /// Collect the results of all strategies run on `net`.
    pub fn new(
        net: &'a AdHocNetwork,
        requests: &'a RequestSet,
        outcomes: &[RunOutcome],
        depletion_threshold: Energy,
    ) -> Self {
        Self {
            params: net.params(),
            requests,
            connected: net.is_initially_connected(),
            depletion_threshold,
            results: outcomes
                .iter()
                .map(|o| StrategyResult::new(o, depletion_threshold))
                .collect(),
        }
    }

    /// Write the content of the experiment to a json file.
    ///
    /// This function will overwrite any existing file.
    pub fn write_json(&self, file: impl AsRef<Path>) -> Result<(), ExperimentError> {
        let exp_str = serde_json::to_string_pretty(self)?;

        let file = file.as_ref();
        if file.exists() {
            remove_file(file)?;
        }
        let mut file = OpenOptions::new().create(true).write(true).open(file)?;
        writeln!(file, "{exp_str}")?;
        Ok(())
    }
}

/// Create a new folder `{base}/{prefix}_{DATE}` and return its path. If the folder already exists,
/// an increasing number is appended.
pub fn generate_folder(
    base: impl AsRef<Path>,
    prefix: impl AsRef<str>,
) -> Result<PathBuf, ExperimentError> {
    let base = base.as_ref();
    create_dir_all(base)?;
    let cur_time = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(&format_description::parse(
            "[year]-[month]-[day]_[hour]-[minute]-[second]",
        )?)?;

    let mut offset: Option<usize> = None;
    let path = loop {
        let name = match offset {
            Some(offset) => format!("{}_{cur_time}_{offset}", prefix.as_ref()),
            None => format!("{}_{cur_time}", prefix.as_ref()),
        };
        let path = base.join(name);
        if !path.exists() {
            break path;
        }
        offset = Some(offset.unwrap_or_default() + 1);
    };
    create_dir_all(&path)?;
    Ok(path)
}
