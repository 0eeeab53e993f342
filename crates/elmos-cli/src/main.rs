use std::fs;
use std::path;
use std::process;

use anyhow::{Context, Result};
use elmos_term::application::cli;
use elmos_term::configuration::{Config, ConfigKey};
use log::LevelFilter;

mod console;

fn init_logger() -> Result<()> {
    let log_level_filter = Config::get(ConfigKey::LogLevel)
        .parse()
        .unwrap_or(LevelFilter::Info);

    // Logs go to a file so they never land on the console's screen.
    let log_path = path::PathBuf::from(Config::get(ConfigKey::LogFile));
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

async fn run() -> Result<()> {
    let command = cli::build();
    let matches = command.clone().get_matches();

    if let Some(("config", config_matches)) = matches.subcommand() {
        if config_matches.subcommand_name() == Some("default") {
            println!("{}", Config::serialize_default(cli::build()));
        }
        return Ok(());
    }

    Config::load(command, vec![&matches]).await?;
    init_logger()?;

    console::run().await
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
