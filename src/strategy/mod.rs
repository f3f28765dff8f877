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

//! # Routing strategies
//!
//! All strategies take ownership of a clone of the network and of the request sequence, route the
//! requests one after the other, and stop as soon as a request cannot be satisfied anymore. Being
//! unable to find a path is not an error. It simply ends the run, and the report lists all requests
//! that were left unsatisfied. Any other error is an invariant violation and is returned.

use adhocsim::prelude::*;
use clap::ValueEnum;
use log::*;
use rayon::prelude::*;

pub mod gdp;
pub mod mecbe;
pub mod oml;

use gdp::Gdp;
use mecbe::Mecbe;
use oml::Oml;

/// Common interface of all routing strategies.
pub trait RoutingStrategy {
    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Route all requests. Requests are consumed by the run, so calling this function a second time
    /// yields an empty report.
    fn run(&mut self) -> Result<RoutingReport, NetworkError>;

    /// The network as left by the strategy, with all energy consumed so far.
    fn network(&self) -> &AdHocNetwork;
}

/// The available routing strategies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, ValueEnum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    /// Two-phase routing that penalizes links close to the bottleneck energy.
    Oml,
    /// Routing along the path with the smallest sum of inverse transmitter energy.
    Mecbe,
    /// Global greedy routing with an exploration penalty.
    Gdp,
}

impl StrategyKind {
    /// All strategies, in the order in which they are usually run.
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Oml, StrategyKind::Mecbe, StrategyKind::Gdp];

    /// Name of the strategy
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Oml => "OML",
            StrategyKind::Mecbe => "MECBE",
            StrategyKind::Gdp => "GDP",
        }
    }

    /// Create the strategy, operating on its own clone of `net`.
    pub fn build(
        &self,
        net: &AdHocNetwork,
        requests: &RequestSet,
    ) -> Box<dyn RoutingStrategy + Send> {
        match self {
            StrategyKind::Oml => Box::new(Oml::new(net.clone(), requests)),
            StrategyKind::Mecbe => Box::new(Mecbe::new(net.clone(), requests)),
            StrategyKind::Gdp => Box::new(Gdp::new(net.clone(), requests)),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A satisfied request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The request that was routed
    pub request: Request,
    /// The committed path, starting at the source and ending at the destination.
    pub path: Path,
    /// Energy consumed by all transmitters on the path.
    pub energy: Energy,
}

/// Result of a single run of a routing strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingReport {
    /// Strategy that produced this report
    pub strategy: StrategyKind,
    /// Satisfied requests, in the order in which they were committed.
    pub solutions: Vec<Solution>,
    /// Requests that were not satisfied because the run stopped early.
    pub unsatisfied: Vec<Request>,
    /// Sum of the energy consumed by all solutions.
    pub total_energy: Energy,
}

impl RoutingReport {
    /// Create an empty report
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            solutions: Vec::new(),
            unsatisfied: Vec::new(),
            total_energy: 0.0,
        }
    }

    /// Add a satisfied request.
    pub fn push(&mut self, request: Request, path: Path, energy: Energy) {
        info!(
            "{}: satisfied {request} consuming {energy:.1}",
            self.strategy
        );
        self.total_energy += energy;
        self.solutions.push(Solution {
            request,
            path,
            energy,
        });
    }

    /// Number of satisfied requests
    pub fn satisfied(&self) -> usize {
        self.solutions.len()
    }

    /// All satisfied requests, in the order in which they were committed.
    pub fn satisfied_requests(&self) -> Vec<Request> {
        self.solutions.iter().map(|s| s.request).collect()
    }
}

/// Final state of a strategy after routing all requests.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The report of the run
    pub report: RoutingReport,
    /// The network as left by the strategy
    pub network: AdHocNetwork,
}

/// Run each strategy on its own clone of `net`. Strategies are executed in parallel on the global
/// rayon thread pool. The outcomes are returned in the same order as `strategies`.
pub fn run_strategies(
    net: &AdHocNetwork,
    requests: &RequestSet,
    strategies: &[StrategyKind],
) -> Result<Vec<RunOutcome>, NetworkError> {
    strategies
        .par_iter()
        .map(|kind| -> Result<RunOutcome, NetworkError> {
            let mut strategy = kind.build(net, requests);
            let report = strategy.run()?;
            info!(
                "{kind}: {} of {} requests satisfied, {:.1} energy consumed",
                report.satisfied(),
                requests.len(),
                report.total_energy
            );
            Ok(RunOutcome {
                report,
                network: strategy.network().clone(),
            })
        })
        .collect()
}

/// Shortest path, where a missing path is not an error but `None`.
pub(crate) fn try_path<F>(
    net: &AdHocNetwork,
    request: &Request,
    metric: F,
) -> Result<Option<(f64, Path)>, NetworkError>
where
    F: FnMut(NodeRef, NodeRef, &Link) -> f64,
{
    match net.shortest_path_by(request.src, request.dst, metric) {
        Ok(x) => Ok(Some(x)),
        Err(NetworkError::NoPathFound(_, _)) => Ok(None),
        Err(e) => Err(e),
    }
}
