//! CLI module for the microservice pool
//!
//! Provides subcommands for inspecting configured microservices:
//! - `list`: print every microservice in declaration order
//! - `show`: print one validated microservice as JSON
//! - `check`: validate every microservice and report each result

pub mod check;
pub mod list;
pub mod show;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::MicroservicePool;

/// Microservice Pool - validated registry of remote API endpoints
#[derive(Parser)]
#[command(name = "microservice-pool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Extra configuration file layered over config/default and config/local
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List configured microservices in declaration order
    List,

    /// Show a single microservice
    Show(show::ShowArgs),

    /// Validate every configured microservice
    Check,
}

/// Load configuration, initialize logging and build the pool
pub(crate) fn bootstrap(cli: &Cli) -> anyhow::Result<MicroservicePool> {
    dotenvy::dotenv().ok();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };

    logging::init_logging(&config.logging).context("failed to initialize logging")?;
    tracing::debug!(
        microservices = config.microservices.len(),
        "Configuration loaded"
    );

    Ok(crate::create_pool(&config))
}
