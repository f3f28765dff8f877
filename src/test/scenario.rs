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
use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use test_log::test;

use super::{corner_network, cost_100, disconnected_network, path_cost, requests};
use crate::strategy::{run_strategies, StrategyKind};

fn random_scenario() -> (AdHocNetwork, RequestSet) {
    let params = NetworkParams {
        node_count: 40,
        width: 600,
        height: 600,
        transmission_range: 200.0,
        min_energy: 2e7,
        max_energy: 4e7,
        packet_size: 4096,
        number_of_requests: 30,
        seed: Some(7),
    };
    AdHocNetwork::build_scenario(&params).unwrap()
}

#[test]
fn corner_all_strategies() {
    let net = corner_network();
    let requests = requests([(0, 3)]);
    let outcomes = run_strategies(&net, &requests, &StrategyKind::ALL).unwrap();
    assert_eq!(outcomes.len(), 3);
    for (outcome, kind) in outcomes.iter().zip(StrategyKind::ALL) {
        assert_eq!(outcome.report.strategy, kind);
        assert_eq!(outcome.report.satisfied(), 1);
        let path = &outcome.report.solutions[0].path;
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], NodeRef::rx(0));
        assert_eq!(path[4], NodeRef::rx(3));
        assert_relative_eq!(outcome.report.total_energy, 2.0 * cost_100());
        assert_eq!(outcome.network.depleted_nodes(net.min_transmission_cost()), 0);
    }
    assert_eq!(net.total_energy(), 4e9);
}

#[test]
fn disconnected_all_strategies() {
    let net = disconnected_network();
    let requests = requests([(0, 1)]);
    let outcomes = run_strategies(&net, &requests, &StrategyKind::ALL).unwrap();
    for outcome in outcomes {
        assert_eq!(outcome.report.satisfied(), 0);
        assert_eq!(outcome.report.unsatisfied, vec![Request::new(0, 1)]);
        assert_eq!(outcome.report.total_energy, 0.0);
    }
}

#[test]
fn random_network_properties() {
    let (net, requests) = random_scenario();
    let initial_energy = net.total_energy();
    let outcomes = run_strategies(&net, &requests, &StrategyKind::ALL).unwrap();

    for outcome in outcomes.iter() {
        let report = &outcome.report;
        assert_eq!(report.satisfied() + report.unsatisfied.len(), requests.len());

        let mut sum = 0.0;
        for solution in report.solutions.iter() {
            let path = &solution.path;
            assert_eq!(path.first(), Some(&solution.request.src));
            assert_eq!(path.last(), Some(&solution.request.dst));
            // roles alternate along the path
            for (i, node) in path.iter().enumerate() {
                assert_eq!(node.is_receive(), i % 2 == 0);
            }
            // the consumed energy is exactly the cost of all transmissions
            assert_relative_eq!(solution.energy, path_cost(&net, path), max_relative = 1e-9);
            sum += solution.energy;
        }
        assert_relative_eq!(report.total_energy, sum, max_relative = 1e-9);
        assert_relative_eq!(
            initial_energy - outcome.network.total_energy(),
            report.total_energy,
            max_relative = 1e-6
        );
        assert!(outcome.network.energies().iter().all(|e| *e >= 0.0));
    }

    // the original network is not touched.
    assert_eq!(net.total_energy(), initial_energy);
}

#[test]
fn deterministic() {
    let (net_a, requests_a) = random_scenario();
    let (net_b, requests_b) = random_scenario();
    let a = run_strategies(&net_a, &requests_a, &StrategyKind::ALL).unwrap();
    let b = run_strategies(&net_b, &requests_b, &StrategyKind::ALL).unwrap();
    for (a, b) in a.iter().zip(b.iter()) {
        assert_eq!(a.report, b.report);
        assert_eq!(a.network.energies(), b.network.energies());
    }
}

#[test]
fn subset_of_strategies() {
    let (net, requests) = random_scenario();
    let outcomes = run_strategies(&net, &requests, &[StrategyKind::Gdp]).unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].report.strategy, StrategyKind::Gdp);
    assert!(run_strategies(&net, &requests, &[]).unwrap().is_empty());
}
