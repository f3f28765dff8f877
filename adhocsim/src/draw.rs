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

//! This module draws the network using graphviz. Nodes are pinned to their coordinates, so the
//! drawing should be rendered with `neato -n`.

use std::{
    fs::{remove_file, OpenOptions},
    io::{self, Write},
    path::PathBuf,
    process::Command,
};

use log::*;

use crate::{
    network::AdHocNetwork,
    request::Request,
    types::{NodeRef, Role},
};

/// Color of links leaving a transmit endpoint.
const TRANSMIT_COLOR: &str = "cyan";
/// Color of links leaving a receive endpoint.
const RECEIVE_COLOR: &str = "magenta";
/// Color of the requests drawn on top of the network.
const REQUEST_COLOR: &str = "green";

/// Name of an endpoint in the dot file.
fn dot_name(node: NodeRef) -> String {
    match node.role {
        Role::Receive => format!("r{}", node.id),
        Role::Transmit => format!("t{}", node.id),
    }
}

/// Write the network in the graphviz dot format into `output`. Transmit endpoints are placed at the
/// position of their node, and receive endpoints are shifted by `width / 40` and `height / 40`.
/// Links are colored by the role of their source endpoint. Each request is drawn as an additional
/// link from its source to its destination.
pub fn write_dot<W: Write>(
    net: &AdHocNetwork,
    requests: &[Request],
    output: &mut W,
) -> io::Result<()> {
    let x_offset = net.params().width as f64 / 40.0;
    let y_offset = net.params().height as f64 / 40.0;

    writeln!(output, "digraph adhoc {{")?;
    writeln!(output, "  graph [outputorder=edgesfirst];")?;
    writeln!(output, "  node [shape=point, width=0.05];")?;
    writeln!(output, "  edge [arrowsize=0.3];")?;

    for (id, pos) in net.positions().iter().enumerate() {
        writeln!(
            output,
            "  {} [pos=\"{},{}!\", color={TRANSMIT_COLOR}];",
            dot_name(NodeRef::tx(id)),
            pos.x,
            pos.y
        )?;
        writeln!(
            output,
            "  {} [pos=\"{},{}!\", color={RECEIVE_COLOR}];",
            dot_name(NodeRef::rx(id)),
            pos.x as f64 + x_offset,
            pos.y as f64 + y_offset
        )?;
    }

    for (src, dst, _) in net.links() {
        let color = match src.role {
            Role::Transmit => TRANSMIT_COLOR,
            Role::Receive => RECEIVE_COLOR,
        };
        writeln!(
            output,
            "  {} -> {} [color={color}];",
            dot_name(src),
            dot_name(dst)
        )?;
    }

    for r in requests {
        writeln!(
            output,
            "  {} -> {} [color={REQUEST_COLOR}, penwidth=2];",
            dot_name(r.src),
            dot_name(r.dst)
        )?;
    }

    writeln!(output, "}}")
}

/// Draw the network into `{filename_base}.dot`. If `render` is set, the drawing is also rendered
/// into `{filename_base}.svg` by calling `neato`, and the dot file is removed afterwards. Returns
/// the path of the resulting file.
pub fn draw(
    net: &AdHocNetwork,
    requests: &[Request],
    filename_base: impl Into<String>,
    render: bool,
) -> io::Result<PathBuf> {
    let filename_base: String = filename_base.into();
    let dot_path = PathBuf::from(format!("{filename_base}.dot"));
    let svg_path = PathBuf::from(format!("{filename_base}.svg"));

    if dot_path.exists() {
        remove_file(&dot_path)?;
    }

    let mut dot_file = OpenOptions::new()
        .create(true)
        .write(true)
        .open(&dot_path)?;
    write_dot(net, requests, &mut dot_file)?;

    if !render {
        return Ok(dot_path);
    }

    if svg_path.exists() {
        remove_file(&svg_path)?;
    }
    let out = Command::new("neato")
        .arg("-n")
        .arg("-Tsvg")
        .arg("-o")
        .arg(&svg_path)
        .arg(&dot_path)
        .output()?;
    if !out.status.success() {
        warn!(
            "neato failed to render {}: {}",
            dot_path.display(),
            String::from_utf8_lossy(&out.stderr)
        );
        return Ok(dot_path);
    }

    remove_file(&dot_path)?;
    Ok(svg_path)
}
