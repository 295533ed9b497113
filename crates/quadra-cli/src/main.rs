use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
mod commands;

use commands::reduce::{self, ReduceArgs};
use commands::version::{self, VersionArgs};

#[derive(Parser, Debug)]
#[command(name = "quadra", about = "Quadratisation of pseudo-Boolean polynomials")]
struct Cli {
    /// Logging level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce a polynomial to a bounded degree and write the result.
    Reduce(ReduceArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result: Result<(), Box<dyn Error>> = match &cli.command {
        Command::Reduce(args) => reduce::run(args),
        Command::Version(args) => version::run(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
