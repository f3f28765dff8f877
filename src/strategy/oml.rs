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

//! Online maximum lifetime routing.
//!
//! Requests are served last generated, first served, in two phases:
//!
//! 1. On the network `net_prime`, prune all links that cannot be afforded, and find the cheapest
//!    path `p'` by cost. The smallest residual energy on `p'` (`min_re`) estimates how much energy
//!    the bottleneck of the network has left.
//! 2. Clone `net_prime` into `net_double_prime` and prune all links whose transmitter has less than
//!    `min_re` energy. Then, penalize every external link `(u, v)`:
//!    `w'' = (w + ρ) · (λ^α - 1)`, where `α = min_re / energy(u)`, and `ρ = c` if transmitting over
//!    the link would leave `u` with no more energy than its cheapest link weighs (`ρ = 0`
//!    otherwise). The request is routed along the shortest path `p''` by these weights.
//!
//! The path `p''` is committed on both networks, such that the next request sees the correct
//! energy in both phases. If the network was not connected right after construction, no request is
//! routed at all.

use std::collections::HashMap;

use adhocsim::prelude::*;
use log::*;

use super::{try_path, RoutingReport, RoutingStrategy, StrategyKind};

/// Fixed penalty `c` added to links that would exhaust their transmitter.
pub const CONGESTION_PENALTY: f64 = 1000.0;
/// Base `λ` of the exponential penalty.
pub const PENALTY_BASE: f64 = 10000.0;

/// Recompute the weight of every external link for the second phase, given the bottleneck residual
/// energy `min_re`. All new weights are computed from the weights before the update. Internal links
/// are not changed.
pub fn penalize(
    net: &mut AdHocNetwork,
    min_re: Energy,
    c: f64,
    lambda: f64,
) -> Result<(), NetworkError> {
    let links: Vec<(NodeRef, NodeRef, Link)> = net
        .links()
        .into_iter()
        .filter(|(_, _, l)| l.is_external())
        .collect();

    // weight of the cheapest link of every transmitter
    let mut e_min: HashMap<NodeRef, f64> = HashMap::new();
    for (src, _, link) in links.iter() {
        e_min
            .entry(*src)
            .and_modify(|w| *w = w.min(link.weight))
            .or_insert(link.weight);
    }

    for (src, dst, link) in links {
        let energy = net.energy(src)?;
        let alpha = min_re / energy;
        let cheapest = e_min.get(&src).copied().unwrap_or(link.weight);
        let rho = if energy - link.weight > cheapest {
            0.0
        } else {
            c
        };
        let weight = (link.weight + rho) * (lambda.powf(alpha) - 1.0);
        debug!(
            "OML: weight of {src} -> {dst}: {:.1} -> {weight:.1} (alpha: {alpha:.3}, rho: {rho})",
            link.weight
        );
        net.set_weight(src, dst, weight)?;
    }
    Ok(())
}

/// OML routing strategy
#[derive(Debug, Clone)]
pub struct Oml {
    /// The network as handed to the strategy. It is never modified.
    net: AdHocNetwork,
    /// Requests that are not yet routed. The last one is served first.
    requests: Vec<Request>,
    /// Congestion penalty
    c: f64,
    /// Base of the exponential penalty
    lambda: f64,
    /// Network of the first phase, created on the first request.
    net_prime: Option<AdHocNetwork>,
    /// Network of the second phase of the latest request.
    net_double_prime: Option<AdHocNetwork>,
}

impl Oml {
    /// Create the strategy on `net`, using [`CONGESTION_PENALTY`] and [`PENALTY_BASE`].
    pub fn new(net: AdHocNetwork, requests: &RequestSet) -> Self {
        Self {
            net,
            requests: requests.to_vec(),
            c: CONGESTION_PENALTY,
            lambda: PENALTY_BASE,
            net_prime: None,
            net_double_prime: None,
        }
    }

    /// Use a different congestion penalty `c` and penalty base `lambda`. `lambda` should be larger
    /// than 1, such that all weights remain non-negative.
    pub fn with_constants(mut self, c: f64, lambda: f64) -> Self {
        self.c = c;
        self.lambda = lambda;
        self
    }

    /// Network of the first phase, if any request was processed.
    pub fn net_prime(&self) -> Option<&AdHocNetwork> {
        self.net_prime.as_ref()
    }

    /// Network of the second phase of the last satisfied request.
    pub fn net_double_prime(&self) -> Option<&AdHocNetwork> {
        self.net_double_prime.as_ref()
    }
}

impl RoutingStrategy for Oml {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Oml
    }

    fn run(&mut self) -> Result<RoutingReport, NetworkError> {
        let mut report = RoutingReport::new(StrategyKind::Oml);

        if !self.net.is_initially_connected() {
            warn!("OML: the network is not connected, no request is routed");
            report.unsatisfied = self.requests.drain(..).rev().collect();
            return Ok(report);
        }

        while let Some(request) = self.requests.pop() {
            // phase 1
            let net_prime = self.net_prime.get_or_insert_with(|| self.net.clone());
            net_prime.prune_edges(None);
            let Some((_, p_prime)) = try_path(net_prime, &request, |_, _, l| l.cost)? else {
                warn!("OML: Cannot satisfy request: {request}");
                report.unsatisfied.push(request);
                report.unsatisfied.extend(self.requests.drain(..).rev());
                break;
            };

            let ((min_src, min_dst), min_re) = net_prime.min_residual_energy(&p_prime)?;
            debug!("OML: bottleneck of {request} is {min_src} -> {min_dst} with {min_re:.1}");

            // phase 2
            let mut net_double_prime = net_prime.clone();
            net_double_prime.prune_edges(Some(min_re));
            penalize(&mut net_double_prime, min_re, self.c, self.lambda)?;
            let Some((_, p_double_prime)) =
                try_path(&net_double_prime, &request, |_, _, l| l.weight)?
            else {
                warn!("OML: Cannot satisfy request on net_double_prime: {request}");
                report.unsatisfied.push(request);
                report.unsatisfied.extend(self.requests.drain(..).rev());
                break;
            };

            net_double_prime.update_along_path(&p_double_prime)?;
            let energy = net_prime.update_along_path(&p_double_prime)?;
            self.net_double_prime = Some(net_double_prime);

            report.push(request, p_double_prime, energy);
        }

        Ok(report)
    }

    fn network(&self) -> &AdHocNetwork {
        self.net_prime.as_ref().unwrap_or(&self.net)
    }
}
