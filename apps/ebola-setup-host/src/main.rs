//! Ebola setup host
//!
//! Starts the Ebola setup module against an in-process platform seeded like
//! a fresh reference application install, then prints the resulting state.
//! Useful for checking a configuration file before deploying it.
//!
//! # Usage
//!
//! ```bash
//! ebola-setup-host --config ebola-setup.yaml
//! ebola-setup-host --json --simulate-missing-resource-provider
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;

use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use ebola_setup::infra::memory::{InMemoryPlatform, PlatformSnapshot};
use ebola_setup::{EbolaSetupModule, ModuleActivator, ServiceHub};
use ebola_setup_sdk::ModuleStatus;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ebola-setup-host")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file; catalog defaults apply when omitted
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the final platform state as JSON
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. `info` or `ebola_setup=debug`. Takes precedence
    /// over `RUST_LOG`; `info` when neither is set.
    #[arg(long)]
    log_level: Option<String>,

    /// Leave the UI resource provider uninitialized, as in component tests
    #[arg(long)]
    simulate_missing_resource_provider: bool,
}

const DEFAULT_LOG_FILTER: &str = "info";

fn log_filter(cli_level: Option<&str>) -> anyhow::Result<EnvFilter> {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?,
    };
    Ok(filter)
}

fn init_logging(cli_level: Option<&str>) -> anyhow::Result<()> {
    let filter = log_filter(cli_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level.as_deref()) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the module failed to start.
async fn run(cli: &Cli) -> anyhow::Result<bool> {
    let cfg = config::load_config(cli.config.as_deref())?;
    info!(module = %cfg.module_id, "Loaded configuration");

    let platform = InMemoryPlatform::seeded();
    if cli.simulate_missing_resource_provider {
        platform.form_resolver.set_provider_available(false);
    }
    let hub = Arc::new(ServiceHub::new());
    platform.register_into(&hub);
    let module = EbolaSetupModule::new(cfg, hub);
    // A custom module id must be known to the host to be stoppable.
    platform.modules.load(module.module_id());
    let started = match module.started().await {
        Ok(()) => true,
        Err(e) => {
            eprintln!("error: {e}");
            let mut cause = e.source();
            while let Some(err) = cause {
                eprintln!("  caused by: {err}");
                cause = err.source();
            }
            false
        }
    };

    print_state(&platform.snapshot(), cli.json)?;
    Ok(started)
}

fn print_state(snapshot: &PlatformSnapshot, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!("Installed bundles: {}", snapshot.installed_bundles.join(", "));
    println!("Global properties:");
    for gp in &snapshot.global_properties {
        println!("  {} ({} chars)", gp.name, gp.value.len());
    }
    println!("Forms:");
    for form in &snapshot.forms {
        println!("  {} <- {}", form.name, form.resource_path);
    }
    println!("Apps:");
    for app in &snapshot.apps {
        let state = if app.enabled { "enabled" } else { "disabled" };
        println!("  {:<55} {state}", app.key);
    }
    println!("Locations:");
    for location in &snapshot.locations {
        let tags: Vec<&str> = location.tags().map(|t| t.name.as_str()).collect();
        println!("  {}: [{}]", location.name, tags.join(", "));
    }
    println!("Modules:");
    for module in &snapshot.modules {
        let state = match module.status {
            ModuleStatus::Started => "started",
            ModuleStatus::Stopped => "stopped",
        };
        println!("  {} {state}", module.id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_wins_over_rust_log() {
        temp_env::with_var("RUST_LOG", Some("debug"), || {
            let filter = log_filter(Some("warn")).unwrap();
            assert_eq!(filter.to_string(), "warn");
        });
    }

    #[test]
    fn rust_log_applies_without_cli_level() {
        temp_env::with_var("RUST_LOG", Some("ebola_setup=debug"), || {
            let filter = log_filter(None).unwrap();
            assert_eq!(filter.to_string(), "ebola_setup=debug");
        });
    }

    #[test]
    fn defaults_to_info() {
        temp_env::with_var_unset("RUST_LOG", || {
            let filter = log_filter(None).unwrap();
            assert_eq!(filter.to_string(), "info");
        });
    }

    #[test]
    fn invalid_cli_level_is_rejected() {
        assert!(log_filter(Some("ebola_setup=loud")).is_err());
    }
}
