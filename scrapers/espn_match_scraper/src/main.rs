use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use espn_match_scraper::{
    config::ScraperConfig,
    espn_scraper::{reference_year, EspnScraper},
    event_feed::{extract_from_feed, parse_feed},
    fetcher::WebHtmlFetcher,
    match_detail::MatchDetailParser,
    match_list::{ListKind, MatchListParser, ReferenceYear},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch fixtures, results and match details and write them to the output directory
    Scrape {
        /// Pick the year closest to today instead of the current year
        #[arg(long)]
        infer_year: bool,

        /// Only write matches.json
        #[arg(long)]
        skip_details: bool,
    },
    /// Extract matches from a saved results or fixtures page
    ParseList {
        /// Path to the HTML file to process
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, value_enum)]
        kind: ListKind,

        /// Maximum number of matches to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Year to attach to the site's dates (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Extract lineups and formations from a saved match page
    ParseDetail {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Split a saved JSON event feed into upcoming and completed matches
    ParseFeed {
        #[arg(short, long)]
        file: PathBuf,

        /// Team whose matches to keep (defaults to ESPN_TEAM_FILTER)
        #[arg(short, long)]
        team: Option<String>,
    },
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = ScraperConfig::from_env();
    let today = Utc::now().date_naive();

    match cli.command {
        Commands::Scrape { infer_year, skip_details } => {
            config.infer_year |= infer_year;
            let year = reference_year(&config, today);
            let fetcher = WebHtmlFetcher::new(&config.scraping)?;
            let scraper = EspnScraper::new(fetcher, config, year);

            let rt = tokio::runtime::Runtime::new()?;
            let summary = rt.block_on(scraper.run(!skip_details))?;
            info!("Done: {:?}", summary);
        }
        Commands::ParseList { file, kind, limit, year } => {
            let html = read_input(&file)?;
            let parser = MatchListParser::new(ReferenceYear::Fixed(year.unwrap_or(today.year())));
            let matches = parser.parse(&html, kind, limit)?;
            print_json(&matches)?;
        }
        Commands::ParseDetail { file } => {
            let html = read_input(&file)?;
            let detail = MatchDetailParser::new().parse(&html)?;
            print_json(&detail)?;
        }
        Commands::ParseFeed { file, team } => {
            let json = read_input(&file)?;
            let feed = parse_feed(&json)?;
            let team = team.unwrap_or(config.team_filter);
            let split = extract_from_feed(&feed, &team);
            print_json(&split.into_matches_file())?;
        }
    }

    Ok(())
}
