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

//! Module for generating networks, either randomly according to parameters, or from an explicit
//! placement of nodes.

use std::collections::HashSet;

use log::*;
use rand::{
    distributions::{Distribution, Uniform},
    prelude::*,
};

use crate::{
    config::NetworkParams,
    network::{raw_index, AdHocNetwork},
    request::RequestSet,
    types::{Energy, Link, NetworkError, NodeRef, Position},
};

/// Energy consumed by the transmitter electronics, in nanojoules per bit.
pub const ELECTRONICS_ENERGY: Energy = 50.0;
/// Energy consumed by the transmit amplifier, in nanojoules per bit and square meter.
pub const AMPLIFIER_ENERGY: Energy = 0.1;

/// Energy needed to transmit a packet of `packet_size` bits over `distance` meters, in nanojoules:
/// `E = E_elec * k + e_amp * k * d^2`.
pub fn transmission_cost(packet_size: u32, distance: f64) -> Energy {
    let k = packet_size as f64;
    ELECTRONICS_ENERGY * k + AMPLIFIER_ENERGY * k * distance * distance
}

/// Trait for generating ad-hoc networks. The following example generates a random network and a
/// set of requests using a fixed seed:
///
/// ```
/// use adhocsim::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let params = NetworkParams {
///     node_count: 20,
///     number_of_requests: 5,
///     seed: Some(42),
///     ..Default::default()
/// };
/// let (net, requests) = AdHocNetwork::build_scenario(&params)?;
/// assert_eq!(net.node_count(), 20);
/// assert_eq!(requests.len(), 5);
///
/// // the same seed generates the same network.
/// let (net_b, requests_b) = AdHocNetwork::build_scenario(&params)?;
/// assert_eq!(net.positions(), net_b.positions());
/// assert_eq!(requests, requests_b);
/// # Ok(())
/// # }
/// ```
pub trait NetworkBuilder: Sized {
    /// Generate a random network. Nodes are placed on distinct integer coordinates by rejection
    /// sampling, and each node receives an initial energy drawn uniformly from
    /// `min_energy..=max_energy`. Then, all links are computed. If the resulting network is not
    /// connected, a warning is logged.
    fn build_random<R: Rng + ?Sized>(params: NetworkParams, rng: &mut R)
        -> Result<Self, NetworkError>;

    /// Generate a network from explicit positions and initial energies. The number of positions
    /// and energies must match `params.node_count`, and all positions must be distinct.
    fn build_from_positions(
        params: NetworkParams,
        positions: Vec<Position>,
        energies: Vec<Energy>,
    ) -> Result<Self, NetworkError>;

    /// Generate a random network and its requests with the generator from
    /// [`NetworkParams::rng`]. The network is generated first, and the requests are drawn from
    /// the same generator afterwards.
    fn build_scenario(params: &NetworkParams) -> Result<(Self, RequestSet), NetworkError> {
        let mut rng = params.rng();
        Self::build_scenario_seeded(params, &mut rng)
    }

    /// Generate a random network and its requests from the given generator.
    fn build_scenario_seeded<R: Rng + ?Sized>(
        params: &NetworkParams,
        rng: &mut R,
    ) -> Result<(Self, RequestSet), NetworkError>;
}

impl NetworkBuilder for AdHocNetwork {
    fn build_random<R: Rng + ?Sized>(
        params: NetworkParams,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        params.validate()?;

        let x_range = Uniform::new_inclusive(0, params.width);
        let y_range = Uniform::new_inclusive(0, params.height);
        let energy_range = Uniform::new_inclusive(params.min_energy, params.max_energy);

        let mut taken: HashSet<Position> = HashSet::with_capacity(params.node_count);
        let mut positions = Vec::with_capacity(params.node_count);
        let mut energies = Vec::with_capacity(params.node_count);
        for _ in 0..params.node_count {
            let pos = loop {
                let pos = Position::new(x_range.sample(rng), y_range.sample(rng));
                if taken.insert(pos) {
                    break pos;
                }
            };
            positions.push(pos);
            energies.push(energy_range.sample(rng));
        }

        Ok(finalize(AdHocNetwork::new(params, positions, energies)))
    }

    fn build_from_positions(
        params: NetworkParams,
        positions: Vec<Position>,
        energies: Vec<Energy>,
    ) -> Result<Self, NetworkError> {
        params.validate()?;

        if positions.len() != params.node_count || energies.len() != params.node_count {
            return Err(NetworkError::InvalidConfiguration(format!(
                "expected {} nodes, got {} positions and {} energies",
                params.node_count,
                positions.len(),
                energies.len()
            )));
        }
        let mut taken = HashSet::new();
        if let Some(pos) = positions.iter().find(|p| !taken.insert(**p)) {
            return Err(NetworkError::InvalidConfiguration(format!(
                "two nodes are placed at {pos}"
            )));
        }
        if let Some(e) = energies.iter().find(|e| !(e.is_finite() && **e >= 0.0)) {
            return Err(NetworkError::InvalidConfiguration(format!(
                "invalid initial energy: {e}"
            )));
        }

        Ok(finalize(AdHocNetwork::new(params, positions, energies)))
    }

    fn build_scenario_seeded<R: Rng + ?Sized>(
        params: &NetworkParams,
        rng: &mut R,
    ) -> Result<(Self, RequestSet), NetworkError> {
        let net = Self::build_random(params.clone(), rng)?;
        let requests = RequestSet::generate(rng, params.node_count, params.number_of_requests)?;
        Ok((net, requests))
    }
}

/// Add all links to a network that contains only endpoints, and check its connectivity.
fn finalize(mut net: AdHocNetwork) -> AdHocNetwork {
    add_links(&mut net);
    net.connected = net.is_connected();
    if net.connected {
        info!(
            "Generated a connected network with {} nodes and {} links",
            net.node_count(),
            net.edge_count()
        );
    } else {
        warn!(
            "Generated network with {} nodes is not connected!",
            net.node_count()
        );
    }
    net
}

/// Add an external link from every transmit endpoint to every receive endpoint of another node
/// within transmission range, and the internal link of every node.
fn add_links(net: &mut AdHocNetwork) {
    let n = net.node_count();
    let range = net.params.transmission_range;
    let packet_size = net.params.packet_size;

    for src in 0..n {
        for dst in 0..n {
            if src == dst {
                continue;
            }
            let distance = net.positions[src].distance(&net.positions[dst]);
            if distance <= range {
                let cost = transmission_cost(packet_size, distance);
                net.graph.add_edge(
                    raw_index(NodeRef::tx(src)),
                    raw_index(NodeRef::rx(dst)),
                    Link::external(distance, cost),
                );
            }
        }
    }

    for id in 0..n {
        net.graph.add_edge(
            raw_index(NodeRef::rx(id)),
            raw_index(NodeRef::tx(id)),
            Link::internal(),
        );
    }
}
