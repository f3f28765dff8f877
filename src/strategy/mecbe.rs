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

//! Minimum energy cost with bottleneck estimation.
//!
//! Requests are served last generated, first served. Before each request, all links that can no
//! longer be afforded are pruned, and the request is routed along the path that minimizes
//! `1 / energy` summed over all transmitters on the path. Internal links are free.

use std::collections::HashMap;

use adhocsim::prelude::*;
use log::*;

use super::{try_path, RoutingReport, RoutingStrategy, StrategyKind};

/// Metric of every link in the network.
pub type MetricMap = HashMap<(NodeRef, NodeRef), f64>;

/// Compute the metric of every link from the current energy of the network: `1 / energy(src)` for
/// external links, and `0` for internal links.
pub fn energy_metric(net: &AdHocNetwork) -> Result<MetricMap, NetworkError> {
    net.links()
        .into_iter()
        .map(|(src, dst, link)| -> Result<_, NetworkError> {
            let metric = if link.is_external() {
                1.0 / net.energy(src)?
            } else {
                0.0
            };
            Ok(((src, dst), metric))
        })
        .collect()
}

/// MECBE routing strategy
#[derive(Debug, Clone)]
pub struct Mecbe {
    /// Working copy of the network
    net: AdHocNetwork,
    /// Requests that are not yet routed. The last one is served first.
    requests: Vec<Request>,
}

impl Mecbe {
    /// Create the strategy on `net`.
    pub fn new(net: AdHocNetwork, requests: &RequestSet) -> Self {
        Self {
            net,
            requests: requests.to_vec(),
        }
    }
}

impl RoutingStrategy for Mecbe {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Mecbe
    }

    fn run(&mut self) -> Result<RoutingReport, NetworkError> {
        let mut report = RoutingReport::new(StrategyKind::Mecbe);

        while let Some(request) = self.requests.pop() {
            self.net.prune_edges(None);

            // the metric depends on the energy, so it must be computed for every request.
            let metric = energy_metric(&self.net)?;
            let lookup = |src: NodeRef, dst: NodeRef, _: &Link| {
                metric
                    .get(&(src, dst))
                    .copied()
                    .unwrap_or(f64::INFINITY)
            };

            let Some((_, path)) = try_path(&self.net, &request, lookup)? else {
                warn!("MECBE: Stopping, cannot satisfy request: {request}");
                report.unsatisfied.push(request);
                report.unsatisfied.extend(self.requests.drain(..).rev());
                break;
            };

            let energy = self.net.update_along_path(&path)?;
            report.push(request, path, energy);
        }

        Ok(report)
    }

    fn network(&self) -> &AdHocNetwork {
        &self.net
    }
}
