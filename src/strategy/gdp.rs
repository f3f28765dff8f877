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

//! Global greedy routing with an exploration penalty.
//!
//! In each round, the strategy computes the shortest path (by weight) of every remaining request,
//! and commits the globally shortest one. Afterwards, the weight of every link on that path is
//! multiplied by `β = m^(1 / (ε + 1))`, where `m` is the number of links and `ε` is the average
//! initial energy. This makes links that were just used slightly less attractive for the next
//! round.

use adhocsim::prelude::*;
use log::*;

use super::{try_path, RoutingReport, RoutingStrategy, StrategyKind};

/// Global greedy routing strategy
#[derive(Debug, Clone)]
pub struct Gdp {
    /// Working copy of the network
    net: AdHocNetwork,
    /// Requests that are not yet routed
    requests: Vec<Request>,
    /// Penalty factor
    beta: f64,
}

impl Gdp {
    /// Create the strategy on `net`. The penalty factor is computed from the network at this point.
    pub fn new(net: AdHocNetwork, requests: &RequestSet) -> Self {
        let beta = Self::compute_beta(&net);
        debug!("GDP: beta = {beta}");
        Self {
            net,
            requests: requests.to_vec(),
            beta,
        }
    }

    /// Compute `β = m^(1 / (ε + 1))`, where `m` is the number of links in the network, and `ε` is the
    /// mean of the minimum and maximum initial energy.
    pub fn compute_beta(net: &AdHocNetwork) -> f64 {
        let m = net.edge_count() as f64;
        let epsilon = (net.params().min_energy + net.params().max_energy) / 2.0;
        m.powf(1.0 / (epsilon + 1.0))
    }

    /// The penalty factor applied to the links of each committed path.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Among all `remaining` requests, find the one with the shortest path by weight. On ties, the
    /// request that comes first in `remaining` wins. Returns `None` if no request can be routed.
    fn minimum_weighted_path(
        &self,
        remaining: &[Request],
    ) -> Result<Option<(usize, Path)>, NetworkError> {
        let mut best: Option<(usize, f64, Path)> = None;
        for (i, request) in remaining.iter().enumerate() {
            let Some((length, path)) = try_path(&self.net, request, |_, _, l| l.weight)? else {
                continue;
            };
            if best.as_ref().map(|(_, b, _)| length < *b).unwrap_or(true) {
                best = Some((i, length, path));
            }
        }
        Ok(best.map(|(i, _, path)| (i, path)))
    }

    /// Multiply the weight of every link on the path by beta. Links that were pruned in the
    /// meantime are skipped.
    fn penalize_path(&mut self, path: &[NodeRef]) -> Result<(), NetworkError> {
        for hop in path.windows(2) {
            let (src, dst) = (hop[0], hop[1]);
            let weight = match self.net.weight(src, dst) {
                Ok(w) => w,
                Err(NetworkError::LinkNotFound(_, _)) => continue,
                Err(e) => return Err(e),
            };
            self.net.set_weight(src, dst, weight * self.beta)?;
        }
        Ok(())
    }
}

impl RoutingStrategy for Gdp {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Gdp
    }

    fn run(&mut self) -> Result<RoutingReport, NetworkError> {
        let mut report = RoutingReport::new(StrategyKind::Gdp);
        let mut remaining = std::mem::take(&mut self.requests);

        while !remaining.is_empty() {
            let Some((idx, path)) = self.minimum_weighted_path(&remaining)? else {
                warn!("GDP: Stopping, cannot satisfy any more requests");
                break;
            };
            let request = remaining.remove(idx);

            let energy = self.net.update_along_path(&path)?;
            self.net.prune_edges(None);
            self.penalize_path(&path)?;

            report.push(request, path, energy);
        }

        report.unsatisfied = remaining;
        Ok(report)
    }

    fn network(&self) -> &AdHocNetwork {
        &self.net
    }
}
