//! carbon-slots entry point: CLI wiring and config-driven server startup.

use std::net::SocketAddr;
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use carbon_slots::api::{self, AppState, DurationLimits};
use carbon_slots::config::AppConfig;
use carbon_slots::slots::engine::SlotEngine;
use carbon_slots::upstream::CarbonIntensityApi;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    port: Option<u16>,
    base_url: Option<String>,
    debug: bool,
}

fn print_help() {
    eprintln!("carbon-slots - carbon-aware slot recommendation service");
    eprintln!();
    eprintln!("Usage: carbon-slots [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>     Load configuration from TOML file");
    eprintln!("  --port <u16>        Override the listen port");
    eprintln!("  --base-url <url>    Override the upstream intensity API base URL");
    eprintln!("  --debug             Enable debug logging");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --config is given, the built-in defaults are used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        port: None,
        base_url: None,
        debug: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = Some(p);
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            "--base-url" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --base-url requires a URL argument");
                    process::exit(1);
                }
                cli.base_url = Some(args[i].clone());
            }
            "--debug" => {
                cli.debug = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

#[tokio::main]
async fn main() {
    let cli = parse_args();

    let log_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("carbon_slots={log_level},warn"))
        .with_target(false)
        .init();

    // Load config, then apply CLI overrides
    let mut config = if let Some(ref path) = cli.config_path {
        match AppConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        AppConfig::default()
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(base_url) = cli.base_url {
        config.upstream.base_url = base_url;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let source = match CarbonIntensityApi::new(
        config.upstream.base_url.clone(),
        Duration::from_secs(config.upstream.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    info!(base_url = %config.upstream.base_url, "forecast source configured");

    let state = Arc::new(AppState {
        engine: SlotEngine::new(source, config.slots.slot_width_minutes),
        limits: DurationLimits {
            min_minutes: config.slots.min_duration_minutes,
            max_minutes: config.slots.max_duration_minutes,
        },
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    api::serve(state, addr).await;
}
