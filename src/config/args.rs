// src/config/args.rs
use super::models::{CheckConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};
use clap::{ArgAction, Parser};
use std::ffi::OsString;

#[derive(Debug, Parser)]
#[command(name = "check_elasticsearch")]
#[command(about = "Monitoring plugin reporting Elasticsearch cluster health")]
#[command(version)]
pub struct Args {
    /// Target host
    #[arg(short = 'H', long = "host", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Target port
    #[arg(
        short = 'p',
        long = "port",
        default_value_t = DEFAULT_PORT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    /// Plugin timeout in seconds
    #[arg(
        long = "timeout",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Diagnostics on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<Args> for CheckConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            timeout_secs: args.timeout,
        }
    }
}

/// Rewrites the single-dash `-timeout` spelling into `--timeout` so clap
/// does not read it as `-t imeout`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-timeout") => OsString::from("--timeout"),
            Some(s) if s.starts_with("-timeout=") => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}
