// AdHocSim: Energy-Constrained Ad-Hoc Network Simulator written in Rust
// Copyright (C) 2022-2023 Tibor Schneider <sctibor@ethz.ch>
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

//! Parameters used to generate a random ad-hoc network.

use std::path::Path;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::types::{Energy, NetworkError};

/// Parameters of a random ad-hoc network. Energy values are in nanojoules, and the packet size is
/// in bits.
///
/// Missing fields in a serialized configuration are taken from [`NetworkParams::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkParams {
    /// Number of physical nodes.
    pub node_count: usize,
    /// Nodes are placed at integer coordinates in `0..=width`.
    pub width: u32,
    /// Nodes are placed at integer coordinates in `0..=height`.
    pub height: u32,
    /// Maximum euclidean length of a link.
    pub transmission_range: f64,
    /// Lower bound of the initial energy of each node.
    pub min_energy: Energy,
    /// Upper bound of the initial energy of each node.
    pub max_energy: Energy,
    /// Bits per transmission.
    pub packet_size: u32,
    /// Number of requests to generate.
    pub number_of_requests: usize,
    /// Seed of the random number generator. If `None`, the generator is seeded from the
    /// operating system.
    pub seed: Option<u64>,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            node_count: 100,
            width: 1000,
            height: 1000,
            transmission_range: 200.0,
            min_energy: 5_000_000_000.0,
            max_energy: 5_000_000_000.0,
            packet_size: 512,
            number_of_requests: 10,
            seed: None,
        }
    }
}

impl NetworkParams {
    /// Check that the parameters describe a network that can be generated.
    pub fn validate(&self) -> Result<(), NetworkError> {
        let invalid = |msg: String| Err(NetworkError::InvalidConfiguration(msg));

        if self.node_count == 0 {
            return invalid("node_count must be positive".to_string());
        }
        if self.width == 0 || self.height == 0 {
            return invalid(format!(
                "width and height must be positive (got {}x{})",
                self.width, self.height
            ));
        }
        if !(self.transmission_range.is_finite() && self.transmission_range > 0.0) {
            return invalid(format!(
                "transmission_range must be positive (got {})",
                self.transmission_range
            ));
        }
        if !(self.min_energy.is_finite() && self.max_energy.is_finite()) {
            return invalid("min_energy and max_energy must be finite".to_string());
        }
        if self.min_energy < 0.0 {
            return invalid(format!(
                "min_energy must not be negative (got {})",
                self.min_energy
            ));
        }
        if self.min_energy > self.max_energy {
            return invalid(format!(
                "min_energy ({}) is larger than max_energy ({})",
                self.min_energy, self.max_energy
            ));
        }
        if self.packet_size == 0 {
            return invalid("packet_size must be positive".to_string());
        }
        let num_coords = (self.width as u128 + 1) * (self.height as u128 + 1);
        if self.node_count as u128 > num_coords {
            return invalid(format!(
                "cannot place {} nodes on {} distinct coordinates",
                self.node_count, num_coords
            ));
        }
        if self.number_of_requests > 0 && self.node_count < 2 {
            return invalid("requests need at least two nodes".to_string());
        }
        Ok(())
    }

    /// Random number generator for these parameters: seeded with [`NetworkParams::seed`] if
    /// present, and from the operating system otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Read the parameters from a json file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse the parameters from a json string.
    pub fn from_json_str(s: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(s)?)
    }
}
