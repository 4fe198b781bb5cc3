//! Liber Control - console front end for the library service desk.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "liberctl")]
#[command(about = "Library service desk - domain-gated query responder", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to /etc/liber/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the desk one question
    Ask {
        /// The question
        query: String,

        /// Caller name
        #[arg(long, default_value = "Guest")]
        name: String,

        /// Member ID, if registered
        #[arg(long)]
        member_id: Option<String>,
    },

    /// Run the scripted walkthrough scenarios
    Demo,

    /// List the catalog, or look up one title
    Catalog {
        /// Exact title to look up (case-insensitive)
        title: Option<String>,
    },

    /// Show opening hours
    Hours,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            query,
            name,
            member_id,
        } => commands::ask(cli.config.as_deref(), &query, &name, member_id.as_deref()).await,
        Commands::Demo => commands::demo(cli.config.as_deref()).await,
        Commands::Catalog { title } => commands::catalog(title.as_deref()),
        Commands::Hours => commands::hours(),
    }
}
