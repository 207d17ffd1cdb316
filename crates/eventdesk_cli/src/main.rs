//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `eventdesk_core` wiring.
//! - Apply an optional TOML config, including its `[logging]` section.
//! - Load the fixture source and print the first page deterministically.

use clap::Parser;
use eventdesk_core::{EventManager, FixtureSource, ManagerConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "eventdesk", version, about = "Event manager core smoke check")]
struct Cli {
    /// TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<ManagerConfig, String> {
    let config = match &cli.config {
        Some(path) => ManagerConfig::load(path)
            .map_err(|err| format!("{}: {err}", path.display()))?,
        None => ManagerConfig::default(),
    };
    config.start_logging().map_err(|err| err.to_string())?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("eventdesk: {message}");
            return ExitCode::FAILURE;
        }
    };

    let source = FixtureSource::new(config.fixture_delay());
    let mut manager = EventManager::new(config);
    manager.load(&source).await;

    let view = manager.view();
    println!("eventdesk_core version={}", eventdesk_core::core_version());
    if let Some(error) = view.error {
        println!("error={error}");
        return ExitCode::FAILURE;
    }
    println!(
        "page={}/{} rows={}",
        view.page_index + 1,
        view.page_count,
        view.total_rows
    );
    for event in &view.rows {
        println!(
            "{} {} [{}] {} {}",
            event.id, event.date, event.category, event.status, event.name
        );
    }
    ExitCode::SUCCESS
}
