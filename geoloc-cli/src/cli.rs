use anyhow::Context;
use clap::{Parser, Subcommand};
use geoloc_core::{Config, LocationResolver, provider_from_config};
use inquire::Password;
use tracing::debug;

use crate::output;

/// Top-level CLI struct.
#[derive(Parser)]
#[command(
    name = "geoloc",
    version,
    about = "Resolve US zip codes and \"City, ST\" pairs to coordinates",
    after_help = "Examples:\n  geoloc \"12345\"\n  geoloc \"New York, NY\"\n  geoloc \"Chicago, IL\" \"90210\" \"Miami, FL\"",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Zip codes or "City, ST" combinations.
    #[arg(required = true, num_args = 1..)]
    pub locations: Vec<String>,

    /// OpenWeather API key; overrides the configured one.
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Geocoding endpoint root; overrides the configured one.
    #[arg(long, env = "GEOLOC_BASE_URL")]
    pub base_url: Option<String>,

    /// Print results as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an OpenWeather API key in the config file.
    Configure,
}

impl std::fmt::Debug for Cli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("command", &self.command)
            .field("locations", &self.locations)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("json", &self.json)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => self.lookup().await,
        }
    }

    async fn lookup(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let provider =
            provider_from_config(&config, self.api_key.as_deref(), self.base_url.as_deref())?;
        let resolver = LocationResolver::from_boxed(provider);

        debug!(count = self.locations.len(), "resolving locations");
        let records = resolver.resolve_many(&self.locations).await;

        let rendered = if self.json {
            serde_json::to_string_pretty(&records).context("Failed to serialize results to JSON")?
        } else {
            output::render_text(&records)
        };
        println!("{rendered}");

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    let api_key = api_key.trim();
    if api_key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }

    config.set_api_key(api_key.to_string());
    let path = config.save()?;
    println!("Saved API key to {}", path.display());

    Ok(())
}
