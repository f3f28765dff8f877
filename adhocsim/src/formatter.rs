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

//! Module that introduces a formatter to display all types containing `NodeRef`, together with the
//! state stored in the network.

use std::fmt::Write;

use itertools::Itertools;

use crate::{
    network::AdHocNetwork,
    request::Request,
    types::{Link, LinkKind, NetworkError, NodeRef},
};

/// Trait to format a type that contains endpoints, showing information from the network.
pub trait NetworkFormatter<'a, 'n> {
    /// Type that is returned, which implements `std::fmt::Display`.
    type Formatter;

    /// Return a struct that can be formatted and displayed.
    fn fmt(&'a self, net: &'n AdHocNetwork) -> Self::Formatter;
}

impl<'a, 'n> NetworkFormatter<'a, 'n> for NodeRef {
    type Formatter = String;

    fn fmt(&'a self, net: &'n AdHocNetwork) -> Self::Formatter {
        let pos = net
            .position(self.id)
            .map(|p| p.to_string())
            .unwrap_or_else(|_| "?".to_string());
        match net.energy(*self) {
            Ok(e) => format!("{self} at {pos}, energy: {e:.1}"),
            Err(_) => format!("{self} at {pos}"),
        }
    }
}

impl<'a, 'n> NetworkFormatter<'a, 'n> for [NodeRef] {
    type Formatter = String;

    fn fmt(&'a self, _net: &'n AdHocNetwork) -> Self::Formatter {
        self.iter().join(" -> ")
    }
}

impl<'a, 'n> NetworkFormatter<'a, 'n> for Vec<NodeRef> {
    type Formatter = String;

    fn fmt(&'a self, net: &'n AdHocNetwork) -> Self::Formatter {
        self.as_slice().fmt(net)
    }
}

impl<'a, 'n> NetworkFormatter<'a, 'n> for (NodeRef, NodeRef) {
    type Formatter = String;

    fn fmt(&'a self, net: &'n AdHocNetwork) -> Self::Formatter {
        let (src, dst) = *self;
        match net.link(src, dst) {
            Ok(link) => format!("{src} -> {dst}: {}", fmt_link(link)),
            Err(_) => format!("{src} -> {dst}: missing"),
        }
    }
}

impl<'a, 'n> NetworkFormatter<'a, 'n> for Request {
    type Formatter = String;

    fn fmt(&'a self, net: &'n AdHocNetwork) -> Self::Formatter {
        let pos = |n: NodeRef| {
            net.position(n.id)
                .map(|p| p.to_string())
                .unwrap_or_else(|_| "?".to_string())
        };
        format!(
            "{} {} -> {} {}",
            self.src,
            pos(self.src),
            self.dst,
            pos(self.dst)
        )
    }
}

impl<'a, 'n> NetworkFormatter<'a, 'n> for NetworkError {
    type Formatter = String;

    fn fmt(&'a self, net: &'n AdHocNetwork) -> Self::Formatter {
        match self {
            NetworkError::NegativeResidualEnergy { path, src, dst, .. } => format!(
                "Negative residual energy on {}, along {}",
                (*src, *dst).fmt(net),
                path.fmt(net)
            ),
            NetworkError::NodeNotFound(n) => format!("Endpoint was not found: {n}"),
            e => e.to_string(),
        }
    }
}

/// Format the attributes of a link.
fn fmt_link(link: &Link) -> String {
    match link.kind {
        LinkKind::Internal => "internal".to_string(),
        LinkKind::External => format!(
            "external, distance: {:.2}, cost: {:.1}, weight: {:.1}",
            link.distance, link.cost, link.weight
        ),
    }
}

impl AdHocNetwork {
    /// Describe the network as a multi-line string, listing all endpoints (if `nodes` is set) and
    /// all links (if `edges` is set).
    pub fn describe(&self, nodes: bool, edges: bool) -> String {
        let mut s = String::new();
        if nodes {
            for node in self
                .receive_endpoints()
                .interleave(self.transmit_endpoints())
            {
                // writing into a string cannot fail
                let _ = writeln!(s, "Node {}", node.fmt(self));
            }
        }
        if edges {
            for (src, dst, link) in self.links() {
                let _ = writeln!(s, "Edge {src} -> {dst}: {}", fmt_link(&link));
            }
        }
        s
    }
}
