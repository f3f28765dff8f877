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

//! Module containing all type definitions

use petgraph::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) type IndexType = u32;
/// Index of an endpoint in the underlying graph.
pub(crate) type GraphIndex = NodeIndex<IndexType>;
/// Directed graph of endpoints and links.
pub(crate) type AdHocGraph = StableGraph<NodeRef, Link, Directed, IndexType>;

/// Identifier of a physical node, in `0..node_count`.
pub type NodeId = usize;

/// Energy in nanojoules.
pub type Energy = f64;

/// A sequence of endpoints, starting at the source and ending at the destination.
pub type Path = Vec<NodeRef>;

/// Role of an endpoint. Every physical node has exactly one endpoint of each role.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Role {
    /// Receives traffic from other nodes. Carries no energy.
    Receive,
    /// Transmits traffic to other nodes, and carries the battery of the node.
    Transmit,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Receive => f.write_str("in"),
            Role::Transmit => f.write_str("out"),
        }
    }
}

/// Reference to one endpoint of a physical node. Ordering is by node id first, then by role, such
/// that the receive endpoint comes before the transmit endpoint.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeRef {
    /// Physical node
    pub id: NodeId,
    /// Role of the endpoint
    pub role: Role,
}

impl NodeRef {
    /// Create a new reference
    pub const fn new(id: NodeId, role: Role) -> Self {
        Self { id, role }
    }

    /// Receive endpoint of the physical node `id`.
    pub const fn rx(id: NodeId) -> Self {
        Self::new(id, Role::Receive)
    }

    /// Transmit endpoint of the physical node `id`.
    pub const fn tx(id: NodeId) -> Self {
        Self::new(id, Role::Transmit)
    }

    /// Returns `true` if this is a receive endpoint.
    pub const fn is_receive(&self) -> bool {
        matches!(self.role, Role::Receive)
    }

    /// Returns `true` if this is a transmit endpoint.
    pub const fn is_transmit(&self) -> bool {
        matches!(self.role, Role::Transmit)
    }

    /// The other endpoint of the same physical node.
    pub const fn peer(&self) -> Self {
        match self.role {
            Role::Receive => Self::tx(self.id),
            Role::Transmit => Self::rx(self.id),
        }
    }
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.role)
    }
}

/// Integer coordinate of a physical node.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: u32,
    /// Vertical coordinate
    pub y: u32,
}

impl Position {
    /// Create a new position
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Kind of a link
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum LinkKind {
    /// Wireless link from a transmit endpoint to the receive endpoint of another node.
    External,
    /// Link from the receive endpoint of a node to its own transmit endpoint.
    Internal,
}

/// Attributes of a directed link.
#[derive(PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Link {
    /// Kind of the link
    pub kind: LinkKind,
    /// Euclidean distance between both nodes (zero for internal links).
    pub distance: f64,
    /// Energy consumed by the transmitter when sending one packet. Fixed at construction.
    pub cost: Energy,
    /// Routing metric, free to be changed by routing algorithms. Initialized to `cost`.
    pub weight: f64,
}

impl Link {
    /// Create an external link with both `cost` and `weight` set to `cost`.
    pub fn external(distance: f64, cost: Energy) -> Self {
        Self {
            kind: LinkKind::External,
            distance,
            cost,
            weight: cost,
        }
    }

    /// Create an internal link with zero distance, cost and weight.
    pub fn internal() -> Self {
        Self {
            kind: LinkKind::Internal,
            distance: 0.0,
            cost: 0.0,
            weight: 0.0,
        }
    }

    /// Returns `true` if the link is external.
    pub fn is_external(&self) -> bool {
        matches!(self.kind, LinkKind::External)
    }

    /// Returns `true` if the link is internal.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, LinkKind::Internal)
    }
}

/// Network Errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Endpoint is not present in the topology
    #[error("Endpoint was not found in the topology: {0}")]
    NodeNotFound(NodeRef),
    /// There is no link between both endpoints
    #[error("No link from {0} to {1}")]
    LinkNotFound(NodeRef, NodeRef),
    /// The endpoint does not carry the requested attribute
    #[error("No {1} set for endpoint {0}")]
    MissingAttribute(NodeRef, &'static str),
    /// The destination cannot be reached from the source.
    #[error("No path from {0} to {1}")]
    NoPathFound(NodeRef, NodeRef),
    /// The parameters used to construct the network are invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A path was committed that its transmitters could not afford. This is an invariant
    /// violation, which means that a link was not pruned when it should have been.
    #[error(
        "Negative residual energy on {src} -> {dst} (energy: {energy}, cost: {cost}) along path {path:?}"
    )]
    NegativeResidualEnergy {
        /// The complete path
        path: Path,
        /// Transmitter of the bottleneck link
        src: NodeRef,
        /// Receiver of the bottleneck link
        dst: NodeRef,
        /// Energy of the transmitter
        energy: Energy,
        /// Cost of the bottleneck link
        cost: Energy,
    },
    /// The path contains no external link.
    #[error("Path contains no external link: {0:?}")]
    NoExternalLink(Path),
    /// Json error
    #[error("{0}")]
    JsonError(Box<serde_json::Error>),
    /// IO error while reading a file
    #[error("{0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for NetworkError {
    fn from(value: serde_json::Error) -> Self {
        Self::JsonError(Box::new(value))
    }
}

impl PartialEq for NetworkError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NodeNotFound(l0), Self::NodeNotFound(r0)) => l0 == r0,
            (Self::LinkNotFound(l0, l1), Self::LinkNotFound(r0, r1)) => l0 == r0 && l1 == r1,
            (Self::MissingAttribute(l0, l1), Self::MissingAttribute(r0, r1)) => {
                l0 == r0 && l1 == r1
            }
            (Self::NoPathFound(l0, l1), Self::NoPathFound(r0, r1)) => l0 == r0 && l1 == r1,
            (Self::InvalidConfiguration(l0), Self::InvalidConfiguration(r0)) => l0 == r0,
            (
                Self::NegativeResidualEnergy {
                    path: lp,
                    src: ls,
                    dst: ld,
                    ..
                },
                Self::NegativeResidualEnergy {
                    path: rp,
                    src: rs,
                    dst: rd,
                    ..
                },
            ) => lp == rp && ls == rs && ld == rd,
            (Self::NoExternalLink(l0), Self::NoExternalLink(r0)) => l0 == r0,
            (Self::JsonError(l), Self::JsonError(r)) => l.to_string() == r.to_string(),
            (Self::IoError(l), Self::IoError(r)) => l.kind() == r.kind(),
            _ => false,
        }
    }
}
