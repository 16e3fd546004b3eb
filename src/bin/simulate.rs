//! Autopilot simulator CLI.
//!
//! Plays seeded rounds headlessly and prints score statistics, useful when
//! tuning `config.json` values.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # 200 rounds
//!   cargo run --bin simulate -- -n 50 -s 42    # 50 reproducible rounds

use flappberry::config::GameConfig;
use flappberry::simulator::{run_simulation, SimConfig};
use std::env;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              FLAPPBERRY AUTOPILOT SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Frames:     {}", config.max_frames);
    println!("  Frame Time:     {:.2} ms", config.frame_ms);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }
    Ok(())
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig {
        game: GameConfig::load(),
        ..SimConfig::default()
    };
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-f" | "--frames" => {
                if i + 1 < args.len() {
                    config.max_frames = args[i + 1].parse().unwrap_or(config.max_frames);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {
                write_json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, write_json)
}

fn print_help() {
    println!("Flappberry Autopilot Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of rounds (default: 200)");
    println!("    -s, --seed <S>      Base seed for reproducibility");
    println!("    -f, --frames <F>    Frame limit per round (default: 36000)");
    println!("    -v, --verbose       Print every round");
    println!("    -q, --quiet         No progress lines, report only");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
}
