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

use std::path::PathBuf;

use adhocsim::{draw::draw, prelude::*};
use clap::Parser;
use energy_routing::{
    experiment::{generate_folder, Experiment},
    formatter::{TraceFormatter, SEPARATOR},
    strategy::{run_strategies, StrategyKind},
};
use log::*;

/// Number of nanojoules per joule
const NANOJOULES_PER_JOULE: f64 = 1_000_000_000.0;

/// Compare energy-aware routing strategies on a random ad-hoc network.
#[derive(Debug, Parser)]
struct Cli {
    /// Number of physical nodes
    #[clap(short = 'n', long, default_value_t = 100)]
    node_count: usize,
    /// Width of the area in which nodes are placed
    #[clap(long, default_value_t = 1000)]
    width: u32,
    /// Height of the area in which nodes are placed
    #[clap(long, default_value_t = 1000)]
    height: u32,
    /// Maximum distance between two nodes that can communicate directly
    #[clap(short = 'r', long, default_value_t = 200.0)]
    transmission_range: f64,
    /// Minimum initial energy of each node, in joules
    #[clap(long, default_value_t = 0.04)]
    min_energy: f64,
    /// Maximum initial energy of each node, in joules
    #[clap(long, default_value_t = 0.04)]
    max_energy: f64,
    /// Size of each packet, in bytes
    #[clap(short = 'k', long, default_value_t = 512)]
    packet_size: u32,
    /// Number of requests to route
    #[clap(short = 'q', long = "requests", default_value_t = 20)]
    number_of_requests: usize,
    /// Seed of the random number generator
    #[clap(short, long, default_value_t = 0)]
    seed: u64,
    /// Draw a random seed instead of using `--seed`. The seed is printed, such that the run can be
    /// reproduced.
    #[clap(long)]
    random_seed: bool,
    /// Read the network parameters from a json file instead (energy in nanojoules, packet size in
    /// bits).
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Strategies to run. If not specified, all strategies are run.
    #[clap(long = "strategy", value_enum)]
    strategies: Vec<StrategyKind>,
    /// Print the path of every satisfied request.
    #[clap(short = 'p', long)]
    output_path: bool,
    /// Nodes with less energy than this threshold (in nanojoules) are counted as depleted. If not
    /// specified, the cheapest possible transmission is used.
    #[clap(long)]
    depletion_threshold: Option<f64>,
    /// Draw the network of every strategy into `{DOT}-{STRATEGY}-{REQUESTS}-requests.dot`.
    #[clap(long)]
    dot: Option<String>,
    /// Render the drawings as svg using `neato`.
    #[clap(long, requires = "dot")]
    svg: bool,
    /// Store the results as json in `results/routing_{DATE}/`.
    #[clap(long)]
    json: bool,
    /// Number of workers to use in parallel. If not specified, it will use all available workers.
    #[clap(short, long)]
    threads: Option<usize>,
}

impl Cli {
    /// Get the network parameters, either from the config file, or from the command-line
    /// arguments converted to nanojoules and bits.
    fn params(&self) -> Result<NetworkParams, Box<dyn std::error::Error>> {
        if let Some(config) = self.config.as_ref() {
            return Ok(NetworkParams::from_json_file(config)?);
        }
        let seed = if self.random_seed {
            let seed: u64 = rand::random();
            println!("Using seed {seed}");
            seed
        } else {
            self.seed
        };
        let packet_size = self
            .packet_size
            .checked_mul(8)
            .ok_or("packet size is too large")?;
        Ok(NetworkParams {
            node_count: self.node_count,
            width: self.width,
            height: self.height,
            transmission_range: self.transmission_range,
            min_energy: self.min_energy * NANOJOULES_PER_JOULE,
            max_energy: self.max_energy * NANOJOULES_PER_JOULE,
            packet_size,
            number_of_requests: self.number_of_requests,
            seed: Some(seed),
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_timed();

    let args = Cli::parse();

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let params = args.params()?;
    let (net, requests) = AdHocNetwork::build_scenario(&params)?;

    let strategies = if args.strategies.is_empty() {
        StrategyKind::ALL.to_vec()
    } else {
        args.strategies.clone()
    };
    let threshold = args
        .depletion_threshold
        .unwrap_or_else(|| net.min_transmission_cost());

    let outcomes = run_strategies(&net, &requests, &strategies)?;

    for outcome in outcomes.iter() {
        let kind = outcome.report.strategy;
        println!("{SEPARATOR}");
        println!("Running {kind}");
        println!("{SEPARATOR}");
        print!("{}", outcome.report.fmt_trace(&outcome.network, args.output_path));
        println!(
            "Total Depleted Nodes: {}",
            outcome.network.depleted_nodes(threshold)
        );
        println!();

        if let Some(prefix) = args.dot.as_ref() {
            let filename = format!(
                "{prefix}-{}-{}-requests",
                kind.name().to_lowercase(),
                params.number_of_requests
            );
            let file = draw(
                &outcome.network,
                &outcome.report.satisfied_requests(),
                filename,
                args.svg,
            )?;
            info!("Network of {kind} drawn into {}", file.display());
        }
    }

    if args.json {
        let folder = generate_folder("results", "routing")?;
        let file = folder.join("results.json");
        Experiment::new(&net, &requests, &outcomes, threshold).write_json(&file)?;
        info!("Results stored in {}", file.display());
    }

    Ok(())
}
