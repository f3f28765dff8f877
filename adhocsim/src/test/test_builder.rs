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

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};
use test_log::test;

use super::{corner_network, corner_params};
use crate::{
    builder::{transmission_cost, NetworkBuilder},
    config::NetworkParams,
    network::AdHocNetwork,
    types::{LinkKind, NetworkError, NodeRef, Position},
};

fn random_params() -> NetworkParams {
    NetworkParams {
        node_count: 30,
        width: 300,
        height: 300,
        transmission_range: 100.0,
        min_energy: 1e6,
        max_energy: 2e6,
        packet_size: 512,
        number_of_requests: 10,
        seed: Some(3),
    }
}

#[test]
fn random_network_structure() {
    let params = random_params();
    let mut rng = StdRng::seed_from_u64(3);
    let net = AdHocNetwork::build_random(params.clone(), &mut rng).unwrap();

    assert_eq!(net.node_count(), 30);
    let distinct: HashSet<Position> = net.positions().iter().copied().collect();
    assert_eq!(distinct.len(), 30);
    for pos in net.positions() {
        assert!(pos.x <= params.width && pos.y <= params.height);
    }
    for e in net.energies() {
        assert!((params.min_energy..=params.max_energy).contains(e));
    }

    let links = net.links();
    let mut num_internal = 0;
    for (src, dst, link) in links.iter() {
        match link.kind {
            LinkKind::Internal => {
                num_internal += 1;
                assert_eq!(*src, NodeRef::rx(src.id));
                assert_eq!(*dst, NodeRef::tx(src.id));
                assert_eq!(link.cost, 0.0);
                assert_eq!(link.weight, 0.0);
            }
            LinkKind::External => {
                assert!(src.is_transmit());
                assert!(dst.is_receive());
                assert_ne!(src.id, dst.id);
                let distance = net.distance_between(*src, *dst).unwrap();
                assert_eq!(link.distance, distance);
                assert!(link.distance <= params.transmission_range);
                assert_eq!(link.cost, transmission_cost(params.packet_size, distance));
                assert_eq!(link.weight, link.cost);
            }
        }
    }
    assert_eq!(num_internal, 30);

    // every node has exactly one internal link, and never the reverse one.
    for id in 0..30 {
        assert!(net.link(NodeRef::rx(id), NodeRef::tx(id)).unwrap().is_internal());
        assert_eq!(
            net.link(NodeRef::tx(id), NodeRef::rx(id)),
            Err(NetworkError::LinkNotFound(NodeRef::tx(id), NodeRef::rx(id)))
        );
    }

    // every pair in range is connected
    for a in 0..30 {
        for b in 0..30 {
            let d = net.positions()[a].distance(&net.positions()[b]);
            let exists = net.link(NodeRef::tx(a), NodeRef::rx(b)).is_ok();
            assert_eq!(exists, a != b && d <= params.transmission_range);
        }
    }
}

#[test]
fn same_seed_same_scenario() {
    let params = random_params();
    let (net_a, req_a) = AdHocNetwork::build_scenario(&params).unwrap();
    let (net_b, req_b) = AdHocNetwork::build_scenario(&params).unwrap();
    assert_eq!(net_a.positions(), net_b.positions());
    assert_eq!(net_a.energies(), net_b.energies());
    assert_eq!(net_a.links(), net_b.links());
    assert_eq!(req_a, req_b);
    assert_eq!(req_a.len(), 10);

    let other = NetworkParams {
        seed: Some(4),
        ..params
    };
    let (net_c, _) = AdHocNetwork::build_scenario(&other).unwrap();
    assert_ne!(net_a.positions(), net_c.positions());
}

#[test]
fn equal_energy_bounds() {
    let params = NetworkParams {
        min_energy: 42.0,
        max_energy: 42.0,
        ..random_params()
    };
    let (net, _) = AdHocNetwork::build_scenario(&params).unwrap();
    assert!(net.energies().iter().all(|e| *e == 42.0));
}

#[test]
fn dense_placement() {
    // all 9 coordinates of a 2x2 area must be used.
    let params = NetworkParams {
        node_count: 9,
        width: 2,
        height: 2,
        number_of_requests: 3,
        seed: Some(1),
        ..Default::default()
    };
    let (net, _) = AdHocNetwork::build_scenario(&params).unwrap();
    let distinct: HashSet<Position> = net.positions().iter().copied().collect();
    assert_eq!(distinct.len(), 9);
    assert!(net.is_initially_connected());
}

#[test]
fn corner_links() {
    let net = corner_network(100.0);
    assert_eq!(net.external_links().len(), 8);
    assert_eq!(net.edge_count(), 12);
    assert!(net.link(NodeRef::tx(0), NodeRef::rx(3)).is_err());
    assert!(net.link(NodeRef::tx(1), NodeRef::rx(2)).is_err());
    assert!(net.is_initially_connected());

    // the diagonal is 141.4 long
    let net = corner_network(150.0);
    assert_eq!(net.external_links().len(), 12);
    assert!(net.link(NodeRef::tx(0), NodeRef::rx(3)).is_ok());
}

#[test]
fn disconnected_network() {
    let params = NetworkParams {
        node_count: 2,
        width: 500,
        height: 10,
        transmission_range: 100.0,
        number_of_requests: 1,
        ..Default::default()
    };
    let net = AdHocNetwork::build_from_positions(
        params,
        vec![Position::new(0, 0), Position::new(500, 0)],
        vec![1e9, 1e9],
    )
    .unwrap();
    assert!(!net.is_initially_connected());
    assert!(!net.is_connected());
    assert!(net.external_links().is_empty());
    assert_eq!(net.edge_count(), 2);
}

#[test]
fn invalid_params() {
    let base = random_params();
    let invalid = [
        NetworkParams {
            node_count: 0,
            ..base.clone()
        },
        NetworkParams {
            width: 0,
            ..base.clone()
        },
        NetworkParams {
            height: 0,
            ..base.clone()
        },
        NetworkParams {
            transmission_range: 0.0,
            ..base.clone()
        },
        NetworkParams {
            transmission_range: f64::NAN,
            ..base.clone()
        },
        NetworkParams {
            min_energy: -1.0,
            ..base.clone()
        },
        NetworkParams {
            min_energy: 3e6,
            max_energy: 2e6,
            ..base.clone()
        },
        NetworkParams {
            max_energy: f64::INFINITY,
            ..base.clone()
        },
        NetworkParams {
            packet_size: 0,
            ..base.clone()
        },
        NetworkParams {
            node_count: 5,
            width: 1,
            height: 1,
            ..base.clone()
        },
        NetworkParams {
            node_count: 1,
            number_of_requests: 1,
            ..base.clone()
        },
    ];
    for params in invalid {
        let result = AdHocNetwork::build_scenario(&params);
        assert!(
            matches!(result, Err(NetworkError::InvalidConfiguration(_))),
            "{params:?} should be invalid"
        );
    }

    // a single node without requests is fine
    let params = NetworkParams {
        node_count: 1,
        number_of_requests: 0,
        ..base
    };
    let (net, requests) = AdHocNetwork::build_scenario(&params).unwrap();
    assert_eq!(net.node_count(), 1);
    assert!(requests.is_empty());
    assert!(net.is_initially_connected());
}

#[test]
fn invalid_positions() {
    let duplicate = AdHocNetwork::build_from_positions(
        corner_params(100.0),
        vec![
            Position::new(0, 0),
            Position::new(100, 0),
            Position::new(0, 0),
            Position::new(100, 100),
        ],
        vec![1e9; 4],
    );
    assert!(matches!(
        duplicate,
        Err(NetworkError::InvalidConfiguration(_))
    ));

    let too_few = AdHocNetwork::build_from_positions(
        corner_params(100.0),
        vec![Position::new(0, 0)],
        vec![1e9],
    );
    assert!(matches!(too_few, Err(NetworkError::InvalidConfiguration(_))));

    let negative = AdHocNetwork::build_from_positions(
        corner_params(100.0),
        vec![
            Position::new(0, 0),
            Position::new(100, 0),
            Position::new(0, 100),
            Position::new(100, 100),
        ],
        vec![1e9, -1.0, 1e9, 1e9],
    );
    assert!(matches!(negative, Err(NetworkError::InvalidConfiguration(_))));
}

#[test]
fn params_from_json() {
    let params = NetworkParams::from_json_str(r#"{"node_count": 12, "seed": 7}"#).unwrap();
    assert_eq!(
        params,
        NetworkParams {
            node_count: 12,
            seed: Some(7),
            ..Default::default()
        }
    );
    assert!(matches!(
        NetworkParams::from_json_str("{\"node_count\": -1}"),
        Err(NetworkError::JsonError(_))
    ));
}
