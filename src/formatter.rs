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

//! Formatting the results of a routing strategy.

use std::fmt::Write;

use adhocsim::{formatter::NetworkFormatter, network::AdHocNetwork};
use itertools::Itertools;

use crate::strategy::{RoutingReport, Solution};

/// Line separating the output of different strategies.
pub const SEPARATOR: &str =
    "**************************************************************************************";

/// Trait to print the trace of a routing run, optionally including the committed paths.
pub trait TraceFormatter {
    /// Format the trace. If `show_path` is set, the path of every solution is included.
    fn fmt_trace(&self, net: &AdHocNetwork, show_path: bool) -> String;
}

impl TraceFormatter for Solution {
    fn fmt_trace(&self, net: &AdHocNetwork, show_path: bool) -> String {
        let mut s = format!("Request: {}\n", self.request);
        if show_path {
            let _ = writeln!(s, "Path: {}", self.path.fmt(net));
        }
        let _ = writeln!(s, "Energy Consumed: {}", self.energy);
        s
    }
}

impl TraceFormatter for RoutingReport {
    fn fmt_trace(&self, net: &AdHocNetwork, show_path: bool) -> String {
        let mut s = String::new();
        if !self.solutions.is_empty() {
            s.push_str("Satisfied requests:\n");
        }
        s.push_str(
            &self
                .solutions
                .iter()
                .map(|solution| format!("\n{}", solution.fmt_trace(net, show_path)))
                .join(""),
        );
        let _ = writeln!(s, "\n{SEPARATOR}");
        let _ = writeln!(s, "Total Requests Satisfied: {}", self.satisfied());
        let _ = writeln!(s, "Total Energy Consumed: {}", self.total_energy);
        s
    }
}

impl<'a, 'n> NetworkFormatter<'a, 'n> for Solution {
    type Formatter = String;

    fn fmt(&'a self, net: &'n AdHocNetwork) -> Self::Formatter {
        format!(
            "{}: {} (energy: {:.1})",
            self.request,
            self.path.fmt(net),
            self.energy
        )
    }
}
