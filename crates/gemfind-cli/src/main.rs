mod recommend;
mod store;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gemfind")]
#[command(about = "Venue recommendations from a loosely-structured feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank venues against the given filters and print the top picks
    Recommend {
        /// Vibe tag to match (repeatable)
        #[arg(long = "vibe")]
        vibes: Vec<String>,

        /// Venue category to match (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,

        /// Budget ceiling, max per person
        #[arg(long)]
        budget: Option<u32>,

        /// Override the configured result cap
        #[arg(long)]
        cap: Option<usize>,

        /// Also print the shareable URL query for these filters
        #[arg(long)]
        share: bool,
    },
    /// List the normalized venue working set and its vocabularies
    Venues,
    /// Join the waitlist with an email address
    Join {
        #[arg(long)]
        email: String,
    },
    /// Add a venue id to the saved set
    Save { id: String },
    /// List saved venue ids
    Saved,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = gemfind_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Recommend {
            vibes,
            types,
            budget,
            cap,
            share,
        } => recommend::run_recommend(&config, vibes, types, budget, cap, share).await,
        Commands::Venues => recommend::run_venues(&config).await,
        Commands::Join { email } => store::run_join(&config, &email),
        Commands::Save { id } => store::run_save(&config, &id),
        Commands::Saved => store::run_saved(&config),
    }
}
