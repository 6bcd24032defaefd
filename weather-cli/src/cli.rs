use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use weather_core::{Config, Unit, Url, WeatherClient, WeatherState, WeatherView};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherstack access key used by the proxy.
    Configure,

    /// Show current weather for a location, with an interactive unit toggle.
    Show {
        /// Location name, e.g. "Barcelona, Spain".
        location: String,

        /// Unit system: m (metric) or f (imperial).
        #[arg(long, default_value_t = Unit::Metric)]
        unit: Unit,

        /// Proxy base URL; defaults to the configured one.
        #[arg(long)]
        proxy: Option<String>,

        /// Print once and exit instead of prompting for actions.
        #[arg(long)]
        once: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, unit, proxy, once } => {
                show(location, unit, proxy, once).await
            }
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key = Text::new("Weatherstack access key:")
        .prompt()
        .context("Configuration aborted")?;
    config.set_access_key(key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(location: String, unit: Unit, proxy: Option<String>, once: bool) -> Result<()> {
    let config = Config::load()?;
    let base = proxy.unwrap_or_else(|| config.proxy_url().to_string());
    let base: Url = base.parse().with_context(|| format!("Invalid proxy URL: {base}"))?;

    let mut client = WeatherClient::new(base, location, unit)?;
    let view = WeatherView::full();

    let pending = WeatherState { loading: true, data: None, error: None };
    println!("{}", view.render(&pending));
    let mut state = client.refresh().await;

    loop {
        println!("{}", view.render(&state));
        if once {
            break;
        }

        let toggle = client.unit().toggle_label();
        // A cancelled prompt or a non-interactive terminal ends the session.
        let Ok(choice) = Select::new("Action:", vec![toggle, "Refresh", "Quit"]).prompt() else {
            break;
        };

        state = match choice {
            "Refresh" => client.refresh().await,
            c if c == toggle => client.toggle_unit().await,
            _ => break,
        };
    }

    Ok(())
}
