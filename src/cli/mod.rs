/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface.
//!
//! Each subcommand lives in its own module, with a `CliArgs` structure
//! describing its arguments and a `run` function executing it and writing
//! its results to a [`Write`].

use anyhow::{anyhow, bail, ensure, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::time::Duration;

pub mod distance;
pub mod edge_list;
pub mod exact;
pub mod sample;

/// Parses the number of threads from a string.
///
/// This function is meant to be used with `#[arg(...,  value_parser =
/// num_threads_parser)]`.
pub fn num_threads_parser(arg: &str) -> Result<usize> {
    let num_threads = arg.parse::<usize>()?;
    ensure!(num_threads > 0, "Number of threads must be greater than 0");
    Ok(num_threads)
}

/// Shared CLI arguments for commands that specify a number of threads.
#[derive(Args, Debug)]
pub struct NumThreadsArg {
    #[arg(short = 'j', long, default_value_t = rayon::current_num_threads().max(1), value_parser = num_threads_parser)]
    /// The number of threads to use.
    pub num_threads: usize,
}

/// Parses a duration from a string.
///
/// If no suffix is given, the value is assumed to be in milliseconds.
/// Available suffixes are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` this is parsed as: 1 day, 2 hours, 3 minutes, 4 seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

/// Initializes the `env_logger` logger with a custom format including the
/// time elapsed since initialization.
pub fn init_env_logger() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        writeln!(
            buf,
            "{:>10.3}s {style}{}{style:#} [{:?}] {} - {}",
            start.elapsed().as_secs_f64(),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes "s"
    /// for seconds, "m" for minutes, "h" for hours, and "d" for days. If no
    /// suffix is provided it is assumed to be in milliseconds.
    /// Example: "1d2h3m4s567" is parsed as 1 day + 2 hours + 3 minutes + 4
    /// seconds + 567 milliseconds = 93784567 milliseconds.
    pub log_interval: Option<Duration>,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    Exact(exact::CliArgs),
    Sample(sample::CliArgs),
    Distance(distance::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "graph-distances", version)]
/// Distance statistics of undirected graphs stored as edge lists.
///
/// Distances are computed only between nodes in the same connected
/// component: the mean distance is the average over all ordered pairs of
/// nodes in the same component, self pairs included.
///
/// Noteworthy environment variables:
///
/// - RUST_LOG: configuration for env_logger
///   <https://docs.rs/env_logger/latest/env_logger/>
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

/// The entry point of the command-line interface.
///
/// Results are written on standard output.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    run(cli, &mut std::io::stdout().lock())
}

/// Runs a parsed command line, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let start = std::time::Instant::now();
    match cli.command {
        SubCommands::Exact(args) => {
            exact::run(cli.args, args, out)?;
        }
        SubCommands::Sample(args) => {
            sample::run(cli.args, args, out)?;
        }
        SubCommands::Distance(args) => {
            distance::run(cli.args, args, out)?;
        }
    }
    out.flush()?;

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty-prints seconds in a human-readable format.
fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let days = elapsed_seconds / (60 * 60 * 24);
    elapsed_seconds %= 60 * 60 * 24;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    for (value, unit) in [(days, "day"), (hours, "hour"), (minutes, "minute")] {
        match value {
            0 => {}
            1 => result.push_str(&format!("1 {unit} ")),
            _ => result.push_str(&format!("{value} {unit}s ")),
        }
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_duration() -> Result<()> {
        assert_eq!(parse_duration("1500")?, Duration::from_millis(1500));
        assert_eq!(parse_duration("2m3s")?, Duration::from_secs(123));
        assert_eq!(
            parse_duration("1d2h3m4s567")?,
            Duration::from_millis(93784567)
        );
        assert!(parse_duration("").is_err());
        assert!(parse_duration("3x").is_err());
        Ok(())
    }

    #[test]
    fn test_pretty_print_elapsed() {
        assert_eq!(pretty_print_elapsed(1.5), "1.500 seconds (1.5s)");
        assert_eq!(
            pretty_print_elapsed(3723.0),
            "1 hour 2 minutes 3.000 seconds (3723s)"
        );
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
