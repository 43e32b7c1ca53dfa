//! Arena simulator CLI
//!
//! Seed a population, play it out, and print the record distribution.

use anyhow::{bail, Context, Result};
use arena_core::ScanOrder;
use arena_sim::{render, OutputFormat, Simulation, SimulationConfig};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Arena Record Distribution Simulator");
    println!();
    println!("Usage:");
    println!("  arena_sim [run] [options]");
    println!("  arena_sim help");
    println!();
    println!("Options:");
    println!("  --config PATH         - TOML configuration file");
    println!("  --population N, -n N  - Entrants seeded at 0-0 (default 65536)");
    println!("  --max-wins W          - Wins that end a run (default 12)");
    println!("  --max-losses L        - Losses that end a run (default 3)");
    println!("  --scan ORDER          - insertion, ascending, descending or shuffled");
    println!("  --seed S              - Seed for the shuffled scan order (default 0)");
    println!("  --format FORMAT       - text or json (default text)");
    println!("  --json PATH           - Also save the results as JSON");
    println!();
    println!("Examples:");
    println!("  arena_sim");
    println!("  arena_sim run --population 1024 --max-wins 7 --max-losses 2");
    println!("  arena_sim run --scan shuffled --seed 7 --json results.json");
}

/// Options collected from the command line
#[derive(Debug, Default)]
struct RunArgs {
    config_path: Option<PathBuf>,
    population: Option<usize>,
    max_wins: Option<u16>,
    max_losses: Option<u16>,
    scan: Option<String>,
    seed: Option<u64>,
    format: OutputFormat,
    json_path: Option<PathBuf>,
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} requires a value", flag))
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value for {}: {}", flag, value))
}

fn parse_run_args(args: &[String]) -> Result<RunArgs> {
    let mut parsed = RunArgs::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" | "-c" => {
                parsed.config_path = Some(PathBuf::from(flag_value(args, i, flag)?));
                i += 1;
            }
            "--population" | "-n" => {
                parsed.population = Some(parse_number(flag_value(args, i, flag)?, flag)?);
                i += 1;
            }
            "--max-wins" => {
                parsed.max_wins = Some(parse_number(flag_value(args, i, flag)?, flag)?);
                i += 1;
            }
            "--max-losses" => {
                parsed.max_losses = Some(parse_number(flag_value(args, i, flag)?, flag)?);
                i += 1;
            }
            "--scan" => {
                parsed.scan = Some(flag_value(args, i, flag)?.to_lowercase());
                i += 1;
            }
            "--seed" => {
                parsed.seed = Some(parse_number(flag_value(args, i, flag)?, flag)?);
                i += 1;
            }
            "--format" | "-f" => {
                parsed.format = flag_value(args, i, flag)?.parse()?;
                i += 1;
            }
            "--json" => {
                parsed.json_path = Some(PathBuf::from(flag_value(args, i, flag)?));
                i += 1;
            }
            _ => bail!("Unknown option: {}", flag),
        }
        i += 1;
    }

    Ok(parsed)
}

fn scan_order(name: &str, seed: Option<u64>) -> Result<ScanOrder> {
    match name {
        "insertion" => Ok(ScanOrder::Insertion),
        "ascending" | "asc" => Ok(ScanOrder::Ascending),
        "descending" | "desc" => Ok(ScanOrder::Descending),
        "shuffled" | "random" => Ok(ScanOrder::Shuffled {
            seed: seed.unwrap_or(0),
        }),
        _ => bail!("Unknown scan order: {}", name),
    }
}

fn build_config(args: &RunArgs) -> Result<SimulationConfig> {
    let mut config = match &args.config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(population) = args.population {
        config.population = population;
    }
    if let Some(max_wins) = args.max_wins {
        config.rules.max_wins = max_wins;
    }
    if let Some(max_losses) = args.max_losses {
        config.rules.max_losses = max_losses;
    }
    match (&args.scan, args.seed) {
        (Some(name), seed) => config.scan_order = scan_order(name, seed)?,
        (None, Some(seed)) => config.scan_order = ScanOrder::Shuffled { seed },
        (None, None) => {}
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &[String]) -> Result<()> {
    let args = parse_run_args(args)?;
    let config = build_config(&args)?;

    let results = Simulation::new(config)?.run()?;
    print!("{}", render(&results, args.format)?);

    if let Some(path) = &args.json_path {
        results.save(path)?;
        tracing::info!(path = %path.display(), "saved results");
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run(&[]),
        Some("run") => run(&args[2..]),
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(arg) if arg.starts_with('-') => run(&args[1..]),
        Some(command) => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            bail!("Unknown command: {}", command)
        }
    }
}
