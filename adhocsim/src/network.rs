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

//! # Top-level Network module
//!
//! This module represents the topology of the ad-hoc network, and the energy left at every
//! transmit endpoint. Routing algorithms query the network for shortest paths, commit paths to
//! consume energy, and prune links that can no longer be afforded.

use log::*;
use petgraph::{
    algo::astar,
    unionfind::UnionFind,
    visit::{EdgeRef, IntoEdgeReferences},
};
use serde::{Deserialize, Serialize};

use crate::{
    builder::ELECTRONICS_ENERGY,
    config::NetworkParams,
    types::{
        AdHocGraph, Energy, GraphIndex, IndexType, Link, NetworkError, NodeId, NodeRef, Path,
        Position, Role,
    },
};

/// Graph index of an endpoint, without checking that the node exists.
pub(crate) fn raw_index(node: NodeRef) -> GraphIndex {
    let offset = match node.role {
        Role::Receive => 0,
        Role::Transmit => 1,
    };
    GraphIndex::new(2 * node.id + offset)
}

/// Link attribute used as metric for shortest path computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// The fixed energy cost of the link.
    Cost,
    /// The routing weight of the link.
    Weight,
}

impl Metric {
    /// Get the value of the metric for the given link.
    pub fn of(&self, link: &Link) -> f64 {
        match self {
            Metric::Cost => link.cost,
            Metric::Weight => link.weight,
        }
    }
}

/// # Ad-hoc network
/// The struct stores the directed graph of endpoints and links (see the crate documentation), the
/// position of every physical node, and the energy of every transmit endpoint.
///
/// Cloning the network yields a completely independent copy, including weights and energy. Every
/// routing algorithm must operate on its own copy.
///
/// ```rust
/// use adhocsim::prelude::*;
///
/// fn main() -> Result<(), NetworkError> {
///     let params = NetworkParams {
///         node_count: 2,
///         width: 10,
///         height: 10,
///         number_of_requests: 0,
///         ..Default::default()
///     };
///     let positions = vec![Position::new(0, 0), Position::new(10, 0)];
///     let mut net = AdHocNetwork::build_from_positions(params, positions, vec![1e6; 2])?;
///
///     assert_eq!(net.cost(NodeRef::rx(0), NodeRef::tx(0))?, 0.0);
///     assert_eq!(net.cost(NodeRef::tx(0), NodeRef::rx(1))?, transmission_cost(512, 10.0));
///
///     // drain the energy of node 0, such that it cannot reach node 1 anymore.
///     net.set_energy(NodeRef::tx(0), 1.0)?;
///     assert_eq!(net.prune_edges(None), 1);
///     assert!(net.link(NodeRef::tx(0), NodeRef::rx(1)).is_err());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdHocNetwork {
    pub(crate) graph: AdHocGraph,
    pub(crate) params: NetworkParams,
    pub(crate) positions: Vec<Position>,
    pub(crate) energy: Vec<Energy>,
    pub(crate) connected: bool,
}

impl AdHocNetwork {
    /// Create a network that contains both endpoints of every node, but no links. Endpoints are
    /// added in order of their node id, receive endpoint first, such that their graph index can be
    /// computed from the [`NodeRef`] alone.
    pub(crate) fn new(params: NetworkParams, positions: Vec<Position>, energy: Vec<Energy>) -> Self {
        let mut graph = AdHocGraph::with_capacity(2 * positions.len(), 0);
        for id in 0..positions.len() {
            graph.add_node(NodeRef::rx(id));
            graph.add_node(NodeRef::tx(id));
        }
        Self {
            graph,
            params,
            positions,
            energy,
            connected: false,
        }
    }

    /// Get the graph index of an endpoint.
    pub(crate) fn index(&self, node: NodeRef) -> Result<GraphIndex, NetworkError> {
        if node.id >= self.positions.len() {
            return Err(NetworkError::NodeNotFound(node));
        }
        Ok(raw_index(node))
    }

    /// Get the edge index of a link.
    fn edge(
        &self,
        src: NodeRef,
        dst: NodeRef,
    ) -> Result<petgraph::graph::EdgeIndex<IndexType>, NetworkError> {
        self.graph
            .find_edge(self.index(src)?, self.index(dst)?)
            .ok_or(NetworkError::LinkNotFound(src, dst))
    }

    /// Parameters used to construct the network.
    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    /// Number of physical nodes.
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of directed links (both external and internal) that are currently present.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Position of all physical nodes, indexed by their id.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Position of a physical node.
    pub fn position(&self, id: NodeId) -> Result<Position, NetworkError> {
        self.positions
            .get(id)
            .copied()
            .ok_or(NetworkError::NodeNotFound(NodeRef::rx(id)))
    }

    /// Get the physical node placed at the given coordinate.
    pub fn node_at(&self, x: u32, y: u32) -> Option<NodeId> {
        let target = Position::new(x, y);
        self.positions.iter().position(|p| *p == target)
    }

    /// Euclidean distance between the physical nodes of both endpoints.
    pub fn distance_between(&self, a: NodeRef, b: NodeRef) -> Result<f64, NetworkError> {
        self.index(a)?;
        self.index(b)?;
        Ok(self.positions[a.id].distance(&self.positions[b.id]))
    }

    /// Whether the network was connected right after construction.
    pub fn is_initially_connected(&self) -> bool {
        self.connected
    }

    /// All receive endpoints, sorted by node id.
    pub fn receive_endpoints(&self) -> impl Iterator<Item = NodeRef> {
        (0..self.node_count()).map(NodeRef::rx)
    }

    /// All transmit endpoints, sorted by node id.
    pub fn transmit_endpoints(&self) -> impl Iterator<Item = NodeRef> {
        (0..self.node_count()).map(NodeRef::tx)
    }

    /// All links that are currently present, sorted by source and destination.
    pub fn links(&self) -> Vec<(NodeRef, NodeRef, Link)> {
        let mut links: Vec<_> = self
            .graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()], *e.weight()))
            .collect();
        links.sort_by_key(|(src, dst, _)| (*src, *dst));
        links
    }

    /// All external links that are currently present, sorted by source and destination.
    pub fn external_links(&self) -> Vec<(NodeRef, NodeRef)> {
        self.links()
            .into_iter()
            .filter(|(_, _, l)| l.is_external())
            .map(|(src, dst, _)| (src, dst))
            .collect()
    }

    /// All endpoints reachable from `node` over a single link, sorted.
    pub fn neighbors(&self, node: NodeRef) -> Result<Vec<NodeRef>, NetworkError> {
        let idx = self.index(node)?;
        let mut neighbors: Vec<NodeRef> =
            self.graph.neighbors(idx).map(|n| self.graph[n]).collect();
        neighbors.sort();
        Ok(neighbors)
    }

    /// Get the attributes of a link.
    pub fn link(&self, src: NodeRef, dst: NodeRef) -> Result<&Link, NetworkError> {
        let edge = self.edge(src, dst)?;
        Ok(&self.graph[edge])
    }

    /// Fixed energy cost of a link.
    pub fn cost(&self, src: NodeRef, dst: NodeRef) -> Result<Energy, NetworkError> {
        Ok(self.link(src, dst)?.cost)
    }

    /// Routing weight of a link.
    pub fn weight(&self, src: NodeRef, dst: NodeRef) -> Result<f64, NetworkError> {
        Ok(self.link(src, dst)?.weight)
    }

    /// Set the routing weight of a link, and return the old weight.
    pub fn set_weight(
        &mut self,
        src: NodeRef,
        dst: NodeRef,
        weight: f64,
    ) -> Result<f64, NetworkError> {
        let edge = self.edge(src, dst)?;
        Ok(std::mem::replace(&mut self.graph[edge].weight, weight))
    }

    /// Energy left at a transmit endpoint. Receive endpoints carry no energy.
    pub fn energy(&self, node: NodeRef) -> Result<Energy, NetworkError> {
        self.index(node)?;
        if node.is_receive() {
            return Err(NetworkError::MissingAttribute(node, "energy"));
        }
        Ok(self.energy[node.id])
    }

    /// Overwrite the energy of a transmit endpoint, and return the old energy.
    pub fn set_energy(&mut self, node: NodeRef, energy: Energy) -> Result<Energy, NetworkError> {
        self.index(node)?;
        if node.is_receive() {
            return Err(NetworkError::MissingAttribute(node, "energy"));
        }
        Ok(std::mem::replace(&mut self.energy[node.id], energy))
    }

    /// Energy of all transmit endpoints, indexed by node id.
    pub fn energies(&self) -> &[Energy] {
        &self.energy
    }

    /// Sum of the energy left in the entire network.
    pub fn total_energy(&self) -> Energy {
        self.energy.iter().sum()
    }

    /// Energy that would be left at `src` after transmitting once over the link to `dst`.
    pub fn residual_energy(&self, src: NodeRef, dst: NodeRef) -> Result<Energy, NetworkError> {
        Ok(self.energy(src)? - self.cost(src, dst)?)
    }

    /// Cheapest possible transmission in the network: the energy of the electronics alone,
    /// without any amplification.
    pub fn min_transmission_cost(&self) -> Energy {
        ELECTRONICS_ENERGY * self.params.packet_size as f64
    }

    /// Number of transmit endpoints whose energy has fallen below `threshold`.
    pub fn depleted_nodes(&self, threshold: Energy) -> usize {
        self.energy.iter().filter(|e| **e < threshold).count()
    }

    /// Compute the shortest path from `src` to `dst`, using the given link attribute as metric.
    pub fn shortest_path(
        &self,
        src: NodeRef,
        dst: NodeRef,
        metric: Metric,
    ) -> Result<Path, NetworkError> {
        self.shortest_path_by(src, dst, |_, _, link| metric.of(link))
            .map(|(_, path)| path)
    }

    /// Compute the length of the shortest path from `src` to `dst`, using the given link attribute
    /// as metric.
    pub fn shortest_path_length(
        &self,
        src: NodeRef,
        dst: NodeRef,
        metric: Metric,
    ) -> Result<f64, NetworkError> {
        self.shortest_path_by(src, dst, |_, _, link| metric.of(link))
            .map(|(length, _)| length)
    }

    /// Compute the shortest path from `src` to `dst` and its length, where the metric of each link
    /// is computed by `metric`. The metric must not be negative. If the destination can only be
    /// reached with an infinite metric, then this function returns
    /// [`NetworkError::NoPathFound`].
    pub fn shortest_path_by<F>(
        &self,
        src: NodeRef,
        dst: NodeRef,
        mut metric: F,
    ) -> Result<(f64, Path), NetworkError>
    where
        F: FnMut(NodeRef, NodeRef, &Link) -> f64,
    {
        let start = self.index(src)?;
        let goal = self.index(dst)?;
        let g = &self.graph;
        match astar(
            g,
            start,
            |n| n == goal,
            |e| metric(g[e.source()], g[e.target()], e.weight()),
            |_| 0.0,
        ) {
            Some((length, path)) if length.is_finite() => {
                Ok((length, path.into_iter().map(|n| g[n]).collect()))
            }
            _ => Err(NetworkError::NoPathFound(src, dst)),
        }
    }

    /// Commit a path: every transmit endpoint on an external link of the path pays the cost of
    /// that link. Internal links are free. Returns the total energy consumed.
    ///
    /// If any link of the path does not exist, then nothing is changed.
    pub fn update_along_path(&mut self, path: &[NodeRef]) -> Result<Energy, NetworkError> {
        let mut payments = Vec::new();
        for hop in path.windows(2) {
            let link = self.link(hop[0], hop[1])?;
            if link.is_external() {
                payments.push((hop[0], link.cost));
            }
        }

        let mut total = 0.0;
        for (src, cost) in payments {
            self.energy[src.id] -= cost;
            total += cost;
            debug!(
                "{src} pays {cost:.1}, remaining energy: {:.1}",
                self.energy[src.id]
            );
        }
        Ok(total)
    }

    /// Remove every external link that its transmitter can no longer afford, i.e., where
    /// `energy(src) < max(cost, threshold)`. Without a threshold, only links that cannot be used
    /// even once are removed. Returns the number of removed links.
    pub fn prune_edges(&mut self, threshold: Option<Energy>) -> usize {
        let to_remove: Vec<_> = self
            .graph
            .edge_references()
            .filter(|e| e.weight().is_external())
            .filter(|e| {
                let src = self.graph[e.source()];
                let cost = e.weight().cost;
                let edge_threshold = threshold.map(|t| t.max(cost)).unwrap_or(cost);
                self.energy[src.id] < edge_threshold
            })
            .map(|e| (e.id(), self.graph[e.source()], self.graph[e.target()]))
            .collect();

        for (edge, src, dst) in to_remove.iter() {
            debug!(
                "Removing link {src} -> {dst} (energy: {:.1}, threshold: {:?})",
                self.energy[src.id], threshold
            );
            self.graph.remove_edge(*edge);
        }

        to_remove.len()
    }

    /// Find the bottleneck of a path: the external link with the smallest residual energy at its
    /// transmitter. On ties, the first such link on the path is returned.
    ///
    /// A negative residual energy means that a path was committed past the pruning guard. This is
    /// reported as [`NetworkError::NegativeResidualEnergy`], including the entire path.
    pub fn min_residual_energy(
        &self,
        path: &[NodeRef],
    ) -> Result<((NodeRef, NodeRef), Energy), NetworkError> {
        let mut min: Option<((NodeRef, NodeRef), Energy)> = None;
        for hop in path.windows(2) {
            let (src, dst) = (hop[0], hop[1]);
            if self.link(src, dst)?.is_external() {
                let value = self.residual_energy(src, dst)?;
                if min.map(|(_, min_value)| value < min_value).unwrap_or(true) {
                    min = Some(((src, dst), value));
                }
            }
        }

        let Some(((src, dst), value)) = min else {
            return Err(NetworkError::NoExternalLink(path.to_vec()));
        };

        if value < 0.0 {
            let energy = self.energy(src)?;
            let cost = self.cost(src, dst)?;
            error!(
                "Negative residual energy on {src} -> {dst}: energy {energy}, cost {cost}, path {}",
                path.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" -> ")
            );
            return Err(NetworkError::NegativeResidualEnergy {
                path: path.to_vec(),
                src,
                dst,
                energy,
                cost,
            });
        }

        Ok(((src, dst), value))
    }

    /// Check if the network is connected when ignoring the direction of links and the role of
    /// endpoints.
    pub fn is_connected(&self) -> bool {
        let n = self.node_count();
        if n == 0 {
            return true;
        }
        let mut components = UnionFind::<usize>::new(n);
        for e in self.graph.edge_references() {
            components.union(self.graph[e.source()].id, self.graph[e.target()].id);
        }
        let root = components.find(0);
        (1..n).all(|id| components.find(id) == root)
    }
}
