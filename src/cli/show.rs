//! Show command - prints one microservice as JSON

use std::io::{self, Write};

use clap::Args;
use serde_json::json;

use crate::infrastructure::MicroservicePool;

use super::Cli;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Name of the microservice
    pub name: String,
}

pub fn run(cli: &Cli, args: &ShowArgs) -> anyhow::Result<()> {
    let pool = super::bootstrap(cli)?;
    execute(&pool, args, &mut io::stdout().lock())
}

pub fn execute(
    pool: &MicroservicePool,
    args: &ShowArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let microservice = pool.get(&args.name)?;

    let view = json!({
        "name": microservice.name(),
        "base_uri": microservice.base_uri(),
        "api_path": microservice.api_path(),
        "format": microservice.format(),
        "endpoint": microservice.endpoint(),
        "mime_type": microservice.format_kind().map(|format| format.mime_type()),
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;

    Ok(())
}
