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

#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # AdHocSim
//!
//! This is a library for simulating energy-constrained wireless ad-hoc networks. It generates a
//! random network of battery-powered nodes on a plane, connects every pair of nodes that are within
//! transmission range, and tracks how much energy each node has left while traffic is routed
//! through the network.
//!
//! ## Main Concepts
//!
//! The [`network::AdHocNetwork`] is the main datastructure to operate on. Every physical node of
//! the network plays two roles (see [`types::Role`]): a *receive endpoint* that accepts traffic,
//! and a *transmit endpoint* that carries the node's battery and forwards traffic to other nodes.
//! Both are vertices of a directed graph (see
//! [Petgraph](https://docs.rs/petgraph/latest/petgraph/index.html)):
//!
//! - An *external* link connects the transmit endpoint of one node to the receive endpoint of
//!   another node within transmission range. It has a fixed energy `cost` that depends on the
//!   packet size and the distance, and a mutable `weight` used by routing algorithms.
//! - An *internal* link connects the receive endpoint of a node to its own transmit endpoint. It is
//!   free and never removed.
//!
//! Routing a request along a path consumes energy at every transmit endpoint on it
//! ([`network::AdHocNetwork::update_along_path`]). Links whose transmitter can no longer afford
//! them are removed with [`network::AdHocNetwork::prune_edges`].
//!
//! Networks are generated with the [`builder::NetworkBuilder`] trait, either from
//! [`config::NetworkParams`] and a random number generator, or from explicit positions. A
//! [`request::RequestSet`] holds the source-destination pairs that should be routed.
//!
//! ## Example usage
//!
//! ```
//! use adhocsim::prelude::*;
//!
//! fn main() -> Result<(), NetworkError> {
//!     let params = NetworkParams {
//!         node_count: 4,
//!         width: 100,
//!         height: 100,
//!         transmission_range: 100.0,
//!         min_energy: 1e9,
//!         max_energy: 1e9,
//!         packet_size: 4096,
//!         number_of_requests: 1,
//!         seed: Some(0),
//!     };
//!     let positions = vec![
//!         Position::new(0, 0),
//!         Position::new(100, 0),
//!         Position::new(0, 100),
//!         Position::new(100, 100),
//!     ];
//!     let mut net = AdHocNetwork::build_from_positions(params, positions, vec![1e9; 4])?;
//!
//!     // there is no direct link between the two diagonal corners.
//!     let path = net.shortest_path(NodeRef::rx(0), NodeRef::rx(3), Metric::Cost)?;
//!     assert_eq!(path.len(), 5);
//!
//!     // route the traffic, which consumes energy at node 0 and at the relay.
//!     let consumed = net.update_along_path(&path)?;
//!     assert_eq!(consumed, 2.0 * transmission_cost(4096, 100.0));
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod draw;
#[cfg(not(tarpaulin_include))]
pub mod formatter;
pub mod network;
pub mod prelude;
pub mod request;
pub mod types;

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod test;
