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

use adhocsim::prelude::*;

mod scenario;

/// Packet size used in the hand-made test networks.
const PACKET_SIZE: u32 = 4096;

/// Cost of a link of length 100 with [`PACKET_SIZE`].
fn cost_100() -> Energy {
    transmission_cost(PACKET_SIZE, 100.0)
}

/// Cost of a link of length 50 with [`PACKET_SIZE`].
fn cost_50() -> Energy {
    transmission_cost(PACKET_SIZE, 50.0)
}

/// Four nodes placed at `(0, 0)`, `(100, 0)`, `(0, 100)` and `(100, 100)`, each with `1e9` energy.
/// Diagonal corners are not connected.
fn corner_network() -> AdHocNetwork {
    let params = NetworkParams {
        node_count: 4,
        width: 100,
        height: 100,
        transmission_range: 100.0,
        min_energy: 1e9,
        max_energy: 1e9,
        packet_size: PACKET_SIZE,
        number_of_requests: 1,
        seed: Some(0),
    };
    AdHocNetwork::build_from_positions(
        params,
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

/// Nodes on a horizontal line, 50 apart, where only neighbors on the line are within range.
fn line_network(energies: Vec<Energy>) -> AdHocNetwork {
    let n = energies.len();
    let params = NetworkParams {
        node_count: n,
        width: 50 * n as u32,
        height: 10,
        transmission_range: 50.0,
        min_energy: 1e9,
        max_energy: 1e9,
        packet_size: PACKET_SIZE,
        number_of_requests: 0,
        seed: None,
    };
    let positions = (0..n as u32).map(|i| Position::new(i * 50, 0)).collect();
    AdHocNetwork::build_from_positions(params, positions, energies).unwrap()
}

/// Two nodes placed out of range of each other.
fn disconnected_network() -> AdHocNetwork {
    let params = NetworkParams {
        node_count: 2,
        width: 500,
        height: 10,
        transmission_range: 100.0,
        number_of_requests: 1,
        ..Default::default()
    };
    AdHocNetwork::build_from_positions(
        params,
        vec![Position::new(0, 0), Position::new(500, 0)],
        vec![1e9, 1e9],
    )
    .unwrap()
}

/// Requests between the given pairs of physical nodes.
fn requests<const N: usize>(pairs: [(NodeId, NodeId); N]) -> RequestSet {
    RequestSet::from_pairs(pairs).unwrap()
}

/// Sum of the cost of all external links on the path.
fn path_cost(net: &AdHocNetwork, path: &[NodeRef]) -> Energy {
    path.windows(2)
        .map(|hop| net.link(hop[0], hop[1]).unwrap())
        .filter(|l| l.is_external())
        .map(|l| l.cost)
        .sum()
}
