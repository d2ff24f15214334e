//! Raceday CLI: today's race activity and calendar race lists as JSON.

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use raceday_engine::SiteClient;
use raceday_logging::{initialize, LogDestination};

#[derive(Parser)]
#[command(name = "raceday")]
#[command(version, about = "Race-status records scraped from the results site", long_about = None)]
struct Cli {
    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Live, soon-to-finish and recently finished races from the homepage
    Today,

    /// Race URLs from the calendar for one date
    Calendar {
        /// Date in YYYY-MM-DD form; defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Print a JSON array instead of one URL per line
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize(LogDestination::Terminal, cli.log_level);

    let client = SiteClient::new()?;
    match cli.command {
        Commands::Today => {
            let homepage = client.homepage().await?;
            println!("{}", serde_json::to_string_pretty(&homepage.report())?);
        }
        Commands::Calendar { date, json } => {
            let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
            let urls = client.race_urls_for_date(&date).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&urls)?);
            } else {
                for url in &urls {
                    println!("{url}");
                }
            }
        }
    }
    Ok(())
}
