use std::error::Error;

use clap::Args;
use quadra_reduce::REPORT_SCHEMA;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    report_schema: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        report_schema: format!(
            "{}.{}.{}",
            REPORT_SCHEMA.major, REPORT_SCHEMA.minor, REPORT_SCHEMA.patch
        ),
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
