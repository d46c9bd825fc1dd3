//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, LogFormat, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let source = &ctx.config.source;
    ctx.output.info("[source]");
    ctx.output.kv("url", &source.url);
    if let Some(ref file) = source.file {
        ctx.output.kv("file", file);
    }
    ctx.output.kv("timeout_secs", &source.timeout_secs.to_string());
    ctx.output.kv("active", &ctx.catalog_source().describe());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv(
        "format",
        match ctx.config.logging.format {
            LogFormat::Human => "human",
            LogFormat::Json => "json",
        },
    );
    if let Ok(filter) = std::env::var("RUST_LOG") {
        ctx.output.kv("RUST_LOG", &filter);
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    tokio::fs::write(&config_path, generate_default_config()).await?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
