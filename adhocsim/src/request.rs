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

//! Source-destination demands that should be routed through the network.

use rand::{seq::index::sample, Rng};
use serde::{Deserialize, Serialize};

use crate::types::{NetworkError, NodeId, NodeRef};

/// A request to route one packet from the receive endpoint of `src` to the receive endpoint of
/// `dst`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Request {
    /// Source (a receive endpoint)
    pub src: NodeRef,
    /// Destination (a receive endpoint)
    pub dst: NodeRef,
}

impl Request {
    /// Create a request between the receive endpoints of two physical nodes.
    pub fn new(src: NodeId, dst: NodeId) -> Self {
        Self {
            src: NodeRef::rx(src),
            dst: NodeRef::rx(dst),
        }
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.src, self.dst)
    }
}

impl From<(NodeId, NodeId)> for Request {
    fn from((src, dst): (NodeId, NodeId)) -> Self {
        Self::new(src, dst)
    }
}

/// Ordered sequence of requests, in the order in which they were generated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestSet {
    requests: Vec<Request>,
}

impl RequestSet {
    /// Draw `number_of_requests` requests. For each request, two distinct physical nodes are picked
    /// uniformly at random. The same pair may appear in multiple requests.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        node_count: usize,
        number_of_requests: usize,
    ) -> Result<Self, NetworkError> {
        if number_of_requests > 0 && node_count < 2 {
            return Err(NetworkError::InvalidConfiguration(format!(
                "cannot draw requests from {node_count} nodes"
            )));
        }
        let requests = (0..number_of_requests)
            .map(|_| {
                let pair = sample(rng, node_count, 2);
                Request::new(pair.index(0), pair.index(1))
            })
            .collect();
        Ok(Self { requests })
    }

    /// Create a request set from explicit pairs of physical nodes. Source and destination of each
    /// pair must differ.
    pub fn from_pairs<I, T>(pairs: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Request>,
    {
        let requests: Vec<Request> = pairs.into_iter().map(Into::into).collect();
        if let Some(r) = requests.iter().find(|r| r.src.id == r.dst.id) {
            return Err(NetworkError::InvalidConfiguration(format!(
                "request {r} has the same source and destination"
            )));
        }
        Ok(Self { requests })
    }

    /// Number of requests
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns `true` if there are no requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Iterate over all requests in the order of generation.
    pub fn iter(&self) -> std::slice::Iter<'_, Request> {
        self.requests.iter()
    }

    /// All requests in the order of generation.
    pub fn as_slice(&self) -> &[Request] {
        &self.requests
    }

    /// Get the requests as a vector.
    pub fn to_vec(&self) -> Vec<Request> {
        self.requests.clone()
    }
}

impl<'a> IntoIterator for &'a RequestSet {
    type Item = &'a Request;
    type IntoIter = std::slice::Iter<'a, Request>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}
