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

use pretty_assertions::assert_eq;
use test_log::test;

use super::corner_network;
use crate::{
    draw::{draw, write_dot},
    request::Request,
};

#[test]
fn dot_output() {
    let net = corner_network(100.0);
    let mut buffer: Vec<u8> = Vec::new();
    write_dot(&net, &[Request::new(0, 3)], &mut buffer).unwrap();
    let dot = String::from_utf8(buffer).unwrap();

    assert!(dot.starts_with("digraph adhoc {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("t0 [pos=\"0,0!\", color=cyan];"));
    assert!(dot.contains("r0 [pos=\"2.5,2.5!\", color=magenta];"));
    assert!(dot.contains("t0 -> r1 [color=cyan];"));
    assert!(dot.contains("r0 -> t0 [color=magenta];"));
    assert!(dot.contains("r0 -> r3 [color=green, penwidth=2];"));
    assert!(!dot.contains("t0 -> r3"));
    assert_eq!(dot.lines().filter(|l| l.contains("->")).count(), 12 + 1);
}

#[test]
fn draw_dot_file() {
    let net = corner_network(100.0);
    let base = std::env::temp_dir().join(format!("adhocsim-draw-{}", std::process::id()));
    let base = base.to_string_lossy().to_string();
    let path = draw(&net, &[], base.clone(), false).unwrap();
    assert_eq!(path.to_string_lossy(), format!("{base}.dot"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("t3 -> r1 [color=cyan];"));
    std::fs::remove_file(path).unwrap();
}
