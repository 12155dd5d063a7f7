use anyhow::Context;
use clap::{Parser, Subcommand};
use dashboard_core::{Config, DashboardAssembler};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Hazard/weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store Meteomatics API credentials.
    Configure,

    /// Fetch everything and print the dashboard.
    Show,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show => show().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let username = inquire::Text::new("Meteomatics username:")
        .prompt()
        .context("Failed to read username")?;
    let password = inquire::Password::new("Meteomatics password:")
        .without_confirmation()
        .prompt()
        .context("Failed to read password")?;

    config.set_credentials(username, password);
    config.save()?;

    println!("Credentials saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show() -> anyhow::Result<()> {
    let config = Config::load()?;
    let assembler = DashboardAssembler::from_config(&config)?;

    tracing::info!("assembling dashboard");
    let data = assembler.build().await;
    print!("{}", render::render(&data));

    Ok(())
}
