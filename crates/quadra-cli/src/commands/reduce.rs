use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use quadra_core::errors::{ErrorInfo, QuadError};
use quadra_core::poly_from_json;
use quadra_reduce::{reduce_with, ReduceOpts};
use tracing::info;

#[derive(Args, Debug)]
pub struct ReduceArgs {
    /// JSON term list describing the polynomial to reduce.
    #[arg(long)]
    pub input: PathBuf,
    /// Output directory for reduced.json, penalty.json and report.json.
    #[arg(long)]
    pub out: PathBuf,
    /// Optional YAML file with reduction options.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Overrides the configured degree bound.
    #[arg(long)]
    pub max_degree: Option<usize>,
    /// Overrides the configured selection quantile.
    #[arg(long)]
    pub quantile: Option<f64>,
    /// Overrides the configured cap on graph fusions.
    #[arg(long)]
    pub fusion_limit: Option<usize>,
}

pub fn run(args: &ReduceArgs) -> Result<(), Box<dyn Error>> {
    let opts = resolve_opts(args)?;
    let poly = poly_from_json(&fs::read_to_string(&args.input)?)?;
    let reduction = reduce_with(&poly, &opts)?;

    fs::create_dir_all(&args.out)?;
    write_json(args.out.join("reduced.json"), &reduction.reduced)?;
    write_json(args.out.join("penalty.json"), &reduction.penalty)?;
    write_json(args.out.join("report.json"), &reduction.report)?;
    info!(
        out = %args.out.display(),
        report_hash = %reduction.report.report_hash,
        "wrote reduction artefacts"
    );
    println!("{}", reduction.report.report_hash);
    Ok(())
}

fn resolve_opts(args: &ReduceArgs) -> Result<ReduceOpts, QuadError> {
    let mut opts = match &args.config {
        Some(path) => load_config(path)?,
        None => ReduceOpts::default(),
    };
    if let Some(max_degree) = args.max_degree {
        opts.max_degree = max_degree;
    }
    if let Some(quantile) = args.quantile {
        opts.selection_quantile = quantile;
    }
    if args.fusion_limit.is_some() {
        opts.fusion_limit = args.fusion_limit;
    }
    opts.validate()?;
    Ok(opts)
}

fn load_config(path: &Path) -> Result<ReduceOpts, QuadError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        QuadError::Config(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display()),
        )
    })?;
    serde_yaml::from_str(&contents).map_err(|err| {
        QuadError::Config(
            ErrorInfo::new("config-parse", err.to_string())
                .with_context("path", path.display())
                .with_hint("expected keys: max_degree, selection_quantile, fusion_limit, penalty_merge"),
        )
    })
}

fn write_json<P: AsRef<Path>, T: serde::Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
