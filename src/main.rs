use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod api;
mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod strength;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::session::GeneratorSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    if let Some(wordlist) = args.wordlist.clone() {
        config.wordlist_path = Some(wordlist);
    }
    if let Some(CliCommand::Serve { port, address }) = &args.command {
        if let Some(port) = port {
            config.web_port = *port;
        }
        if let Some(address) = address {
            config.web_address = address.clone();
        }
    }

    logging::init_logging(&config).context("failed to initialize logging")?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    config.ensure_directories_exist();
    log::debug!("Loaded config: {:?}", config);

    let mut session = GeneratorSession::from_config(&config).context("failed to prepare generator")?;
    let output = args.output.as_deref();

    match args.command {
        Some(CliCommand::Serve { .. }) => {
            log::info!("🔒 API-only mode active. CLI interface disabled.");
            api::start_server(session, config)
                .await
                .context("API server failed")?;
        }
        Some(CliCommand::Password(password_args)) => {
            let text = cli::handlers::handle_password(&mut session, &config, &password_args, args.json, output)
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("{}", text);
        }
        Some(CliCommand::Passphrase(passphrase_args)) => {
            let text = cli::handlers::handle_passphrase(&mut session, &config, &passphrase_args, args.json, output)
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("{}", text);
        }
        Some(CliCommand::Analyze { password }) => {
            let text = cli::handlers::handle_analyze(&password, args.json)
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("{}", text);
        }
        None => {
            cli::menu::run_cli_menu(&mut session, &config).map_err(|e| {
                log::error!("CLI menu error: {:?}", e);
                anyhow::anyhow!("{}", e)
            })?;
        }
    }

    Ok(())
}
