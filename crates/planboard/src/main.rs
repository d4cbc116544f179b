use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use planboard::commands::{self, ListRequest};
use planboard::config::{PlanboardConfig, CONFIG_ENV, LOG_ENV};
use planboard::fixtures;
use planboard::forms::FormSelect;
use planboard::render::{render_list, render_select, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "planboard", version, about = "Browse dashboard projects and team")]
struct Cli {
    /// Config file (YAML)
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Output format [default: from config, else text]
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List projects
    Projects(ListRequest),
    /// List team members
    Team(ListRequest),
    /// Show the choices a form select offers
    Options {
        /// Which select to open
        #[arg(value_enum)]
        list: FormSelect,
        /// Text typed into the select's search box
        #[arg(short, long)]
        search: Option<String>,
    },
}

fn init_tracing(config: &PlanboardConfig) {
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| config.log_filter.clone());
    let filter = tracing_subscriber::EnvFilter::from_str(&directive)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PlanboardConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config);
    debug!(config = ?config, "configuration loaded");

    let format = cli.format.unwrap_or(config.format);
    let output = match &cli.command {
        Commands::Projects(request) => {
            let view = commands::list(fixtures::projects(), config.projects_descriptor()?, request)?;
            render_list(&view, format)?
        }
        Commands::Team(request) => {
            let view = commands::list(fixtures::team(), config.team_descriptor()?, request)?;
            render_list(&view, format)?
        }
        Commands::Options { list, search } => {
            let view = commands::options(*list, search.as_deref());
            render_select(&view, format)?
        }
    };
    print!("{output}");
    Ok(())
}
