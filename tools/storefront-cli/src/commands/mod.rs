//! CLI command implementations.

pub mod catalog;
pub mod categories;
pub mod config;
pub mod run;
pub mod shell;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use storefront_commerce::dispatch::{Command, CommandDispatcher, Outcome};
use storefront_commerce::CatalogSource;

use crate::context::Context;

/// Dispatcher over whichever source the config selects.
pub type Session = CommandDispatcher<Box<dyn CatalogSource>>;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show this category ("all" for everything).
    #[arg(long)]
    pub category: Option<String>,

    /// Sort by price: asc or desc.
    #[arg(short, long)]
    pub sort: Option<String>,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Script with one intent per line (default: stdin).
    pub script: Option<PathBuf>,

    /// Print the cart after every step.
    #[arg(long)]
    pub trace_steps: bool,
}

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {
    /// Skip the catalog listing before the first prompt.
    #[arg(long)]
    pub no_catalog: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default storefront.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Build a dispatcher and load the catalog into it.
///
/// A failed initial load is fatal here; later reloads inside a session are
/// not.
pub async fn open_session(ctx: &Context) -> Result<Session> {
    let source = ctx.catalog_source();
    let description = source.describe();
    ctx.output.debug(&format!("Catalog source: {}", description));

    let mut session = CommandDispatcher::new(source);
    let spinner = ctx.output.spinner(&format!("Loading catalog from {}", description));
    let loaded = session.dispatch(Command::Reload).await;
    spinner.finish_and_clear();

    if let Outcome::ReloadFailed(e) = loaded.outcome {
        bail!("Failed to load catalog from {}: {}", description, e);
    }
    let products = session.engine().catalog().state().len();
    tracing::debug!(source = %description, products, "session opened");
    ctx.output.debug(&format!("Loaded {} products", products));
    Ok(session)
}

/// One-line description of an outcome, for step-by-step output.
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Applied => "ok".to_string(),
        Outcome::NoChange => "no change".to_string(),
        Outcome::Rejected(e) => format!("rejected: {}", e),
        Outcome::ReloadFailed(e) => format!("reload failed: {}", e),
    }
}
