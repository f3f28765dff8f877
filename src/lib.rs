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

//! # Energy Routing: Comparing energy-aware routing strategies in ad-hoc networks
//!
//! This crate routes a sequence of requests through a wireless ad-hoc network of battery-powered
//! nodes, simulated with [`adhocsim`]. Every transmission drains the battery of the transmitting
//! node. Once a node can no longer afford a link, the link disappears from the network. The goal of
//! each routing strategy is to satisfy as many requests as possible before the network partitions,
//! without spending more energy than necessary.
//!
//! ## Strategies
//! The module [`strategy`] contains three strategies, all implementing [`RoutingStrategy`]:
//!
//! - [`strategy::gdp::Gdp`]: among all remaining requests, route the one with the globally shortest
//!   path first. After each request, the weight of every link on the path is multiplied by a
//!   constant `β > 1` to explore different links for the next request.
//! - [`strategy::mecbe::Mecbe`]: route each request on the path that minimizes the sum of
//!   `1 / energy` over all transmitters, avoiding nodes with little energy left.
//! - [`strategy::oml::Oml`]: first find the bottleneck of the cheapest path. Then, remove all links
//!   that would leave less energy than that bottleneck, and route on weights that grow
//!   exponentially as the energy of a transmitter approaches the bottleneck.
//!
//! Every strategy operates on its own clone of the network, such that all of them can be compared
//! on the same initial state. The result of a run is a [`RoutingReport`].
//!
//! ## Example
//!
//! ```
//! use adhocsim::prelude::*;
//! use energy_routing::strategy::{run_strategies, StrategyKind};
//!
//! # fn main() -> Result<(), NetworkError> {
//! let params = NetworkParams {
//!     node_count: 30,
//!     width: 500,
//!     height: 500,
//!     number_of_requests: 5,
//!     seed: Some(1),
//!     ..Default::default()
//! };
//! let (net, requests) = AdHocNetwork::build_scenario(&params)?;
//! let outcomes = run_strategies(&net, &requests, &StrategyKind::ALL)?;
//!
//! for outcome in outcomes.iter() {
//!     assert!(outcome.report.satisfied() <= requests.len());
//! }
//! // the original network is never modified.
//! assert_eq!(net.total_energy(), 30.0 * 5e9);
//! # Ok(())
//! # }
//! ```

#![deny(
    missing_docs,
    clippy::missing_docs_in_private_items,
    missing_debug_implementations,
    rust_2018_idioms
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "experiment")]
#[cfg_attr(docsrs, doc(cfg(feature = "experiment")))]
pub mod experiment;
pub mod formatter;
pub mod strategy;
#[cfg(test)]
mod test;

pub use strategy::{RoutingReport, RoutingStrategy, Solution, StrategyKind};
