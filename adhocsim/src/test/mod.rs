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

use crate::{
    builder::NetworkBuilder,
    config::NetworkParams,
    network::AdHocNetwork,
    types::{Energy, Position},
};

mod test_builder;
mod test_draw;

/// Packet size used in the hand-made test networks.
pub(crate) const PACKET_SIZE: u32 = 4096;

/// Parameters of a square of 100x100 with a node in each corner.
pub(crate) fn corner_params(range: f64) -> NetworkParams {
    NetworkParams {
        node_count: 4,
        width: 100,
        height: 100,
        transmission_range: range,
        min_energy: 1e9,
        max_energy: 1e9,
        packet_size: PACKET_SIZE,
        number_of_requests: 1,
        seed: Some(0),
    }
}

/// Four nodes placed at `(0, 0)`, `(100, 0)`, `(0, 100)` and `(100, 100)`, each with `1e9` energy.
pub(crate) fn corner_network(range: f64) -> AdHocNetwork {
    AdHocNetwork::build_from_positions(
        corner_params(range),
        vec![
            Position::new(0, 0),
            Position::new(100, 0),
            Position::new(0, 100),
            Position::new(100, 100),
        ],
        vec![1e9; 4],
    )
    .unwrap()
}

/// Nodes on a horizontal line, `spacing` apart, where only neighbors on the line are within range.
pub(crate) fn line_network(energies: Vec<Energy>, spacing: u32) -> AdHocNetwork {
    let n = energies.len();
    let params = NetworkParams {
        node_count: n,
        width: spacing * n as u32,
        height: 10,
        transmission_range: spacing as f64,
        min_energy: 0.0,
        max_energy: 1e12,
        packet_size: PACKET_SIZE,
        number_of_requests: 0,
        seed: None,
    };
    let positions = (0..n as u32).map(|i| Position::new(i * spacing, 0)).collect();
    AdHocNetwork::build_from_positions(params, positions, energies).unwrap()
}
