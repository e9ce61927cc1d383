// src/main.rs
use anyhow::Result;
use check_elasticsearch::{
    config::{normalize_args, Args, CheckConfig},
    run_check,
    timeout::run_detached,
};
use clap::{error::ErrorKind, Parser};
use nagiosplugin::{Resource, Runner};
use std::error::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// Usage errors report as UNKNOWN.
const USAGE_EXIT_CODE: i32 = 3;

fn main() {
    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => USAGE_EXIT_CODE,
            };
            std::process::exit(code);
        }
    };

    if let Err(e) = init_tracing(args.verbose) {
        eprintln!("failed to initialise logging: {}", e);
    }

    let config = CheckConfig::from(args);
    debug!(?config, "Starting cluster health check");

    Runner::new()
        .safe_run(move || do_check(&config))
        .print_and_exit()
}

fn do_check(config: &CheckConfig) -> Result<Resource, Box<dyn Error>> {
    let result = run_detached(run_check(config))?;
    Ok(result.into_resource())
}

// Diagnostics go to stderr; stdout carries only the plugin line.
fn init_tracing(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("off")
            .add_directive(format!("check_elasticsearch={}", default_level).parse()?)
            .add_directive("reqwest=warn".parse()?),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
