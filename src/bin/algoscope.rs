//! Command-line front-end.
//!
//! Usage:
//!   algoscope serve [--config PATH] [--addr ADDR]   # Start the HTTP API
//!   algoscope run ALGORITHM [--shape S] [--size N]  # Run one algorithm
//!   algoscope compare A,B,C [--csv PATH]            # Compare algorithms
//!   algoscope --list                                # List available algorithms
//!   algoscope --help                                # Show help

use algoscope::config::Config;
use algoscope::data::Element;
use algoscope::generator::{generate, DataShape, GenerateOptions};
use algoscope::manager::AlgorithmManager;
use algoscope::registry::{build_registry, RunOptions};
use algoscope::utils::report::{export_csv, ReportRow};
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Serve,
    Run,
    Compare,
}

struct Args {
    command: Option<Command>,
    algorithms: Vec<String>,
    show_list: bool,
    show_help: bool,
    config_path: Option<PathBuf>,
    addr: Option<String>,
    shape: DataShape,
    size: usize,
    target: Option<Element>,
    seed: Option<u64>,
    csv_path: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args {
        command: None,
        algorithms: Vec::new(),
        show_list: false,
        show_help: false,
        config_path: None,
        addr: None,
        shape: DataShape::Random,
        size: 1000,
        target: None,
        seed: None,
        csv_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => parsed.show_list = true,
            "--help" | "-h" => parsed.show_help = true,
            flag @ ("--config" | "--addr" | "--shape" | "--size" | "--target" | "--seed"
            | "--csv") => {
                i += 1;
                let value = args
                    .get(i)
                    .with_context(|| format!("{} requires a value", flag))?;
                match flag {
                    "--config" => parsed.config_path = Some(PathBuf::from(value)),
                    "--addr" => parsed.addr = Some(value.clone()),
                    "--shape" => parsed.shape = value.parse()?,
                    "--size" => {
                        parsed.size = value
                            .parse()
                            .with_context(|| format!("invalid --size '{}'", value))?
                    }
                    "--target" => {
                        parsed.target = Some(value.parse().unwrap_or_else(|never| match never {}))
                    }
                    "--seed" => {
                        parsed.seed = Some(
                            value
                                .parse()
                                .with_context(|| format!("invalid --seed '{}'", value))?,
                        )
                    }
                    _ => parsed.csv_path = Some(value.clone()),
                }
            }
            "serve" if parsed.command.is_none() => parsed.command = Some(Command::Serve),
            "run" if parsed.command.is_none() => parsed.command = Some(Command::Run),
            "compare" if parsed.command.is_none() => parsed.command = Some(Command::Compare),
            arg if !arg.starts_with('-') && parsed.command.is_some() => {
                parsed.algorithms.extend(
                    arg.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from),
                );
            }
            other => bail!("Unknown option: {}", other),
        }
        i += 1;
    }

    Ok(parsed)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C, running until killed: {}", err);
        std::future::pending::<()>().await;
    }
}

fn serve(mut config: Config, addr: Option<String>) -> Result<()> {
    if let Some(addr) = addr {
        config.server.addr = addr
            .parse()
            .with_context(|| format!("invalid --addr '{}'", addr))?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    runtime.block_on(algoscope::server::run(&config, shutdown_signal()))
}

fn run_options(args: &Args) -> RunOptions {
    RunOptions {
        target: args.target.clone(),
        include_steps: false,
    }
}

fn generate_input(args: &Args, max_size: usize) -> Result<algoscope::data::Dataset> {
    let options = GenerateOptions {
        seed: args.seed,
        max_size,
        ..GenerateOptions::default()
    };
    Ok(generate(args.shape, args.size, &options)?)
}

fn run_one(manager: &AlgorithmManager, args: &Args) -> Result<()> {
    let [algorithm] = args.algorithms.as_slice() else {
        bail!("run expects exactly one algorithm");
    };
    let data = generate_input(args, manager.max_input_size())?;

    algoscope::tui::print_header();
    let result = manager.execute(algorithm, &data, &run_options(args))?;
    algoscope::tui::print_run_result(algorithm, &result);

    if let Some(path) = &args.csv_path {
        let row = ReportRow::from_result(algorithm, data.len(), &Ok(result));
        export_rows(path, &[row]);
    }
    Ok(())
}

fn compare(manager: &AlgorithmManager, args: &Args) -> Result<()> {
    let data = generate_input(args, manager.max_input_size())?;
    let entries = manager.compare(&args.algorithms, &data, &run_options(args))?;

    let rows: Vec<ReportRow> = entries
        .iter()
        .map(|e| ReportRow::from_result(&e.algorithm, data.len(), &e.outcome))
        .collect();

    algoscope::tui::print_header();
    println!("  Shape: {}", args.shape);
    algoscope::tui::print_comparison_table(&rows);

    if let Some(path) = &args.csv_path {
        export_rows(path, &rows);
    }
    println!("Note: Speedup is relative to the first successful algorithm.");
    Ok(())
}

fn export_rows(path: &str, rows: &[ReportRow]) {
    match export_csv(path, rows) {
        Ok(()) => println!("  Results exported to: {}", path),
        Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Run 'algoscope --help' for usage.");
            std::process::exit(1);
        }
    };

    if args.show_help {
        algoscope::tui::print_help();
        return Ok(());
    }

    if args.show_list {
        algoscope::tui::print_available_algorithms(&build_registry());
        return Ok(());
    }

    let config = Config::load(args.config_path.as_deref())?;
    init_tracing(&config);

    match args.command {
        Some(Command::Serve) => serve(config, args.addr.clone()),
        Some(Command::Run) => run_one(&AlgorithmManager::from_config(&config.engine), &args),
        Some(Command::Compare) => {
            if args.algorithms.is_empty() {
                bail!("compare expects a comma-separated list of algorithms");
            }
            compare(&AlgorithmManager::from_config(&config.engine), &args)
        }
        None => {
            algoscope::tui::print_help();
            Ok(())
        }
    }
}
