use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::{collections::BTreeSet, path::Path};
use tracing::{info, warn};

use crate::{
    config::ScraperConfig,
    fetcher::HtmlFetcher,
    match_detail::MatchDetailParser,
    match_list::{ListKind, MatchListParser, ReferenceYear},
    output,
    types::{Match, MatchDetail, MatchesFile},
};

/// Counts reported after a full scrape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub next_matches: usize,
    pub results: usize,
    pub details_written: usize,
    pub details_failed: usize,
}

pub fn reference_year(config: &ScraperConfig, today: NaiveDate) -> ReferenceYear {
    if config.infer_year {
        ReferenceYear::NearestTo(today)
    } else {
        ReferenceYear::Fixed(today.year())
    }
}

/// Fetches the listing and detail pages for one team and hands the markup to
/// the extractors. Requests are made one at a time.
pub struct EspnScraper<F: HtmlFetcher> {
    fetcher: F,
    config: ScraperConfig,
    list_parser: MatchListParser,
    detail_parser: MatchDetailParser,
}

impl<F: HtmlFetcher> EspnScraper<F> {
    pub fn new(fetcher: F, config: ScraperConfig, reference_year: ReferenceYear) -> Self {
        Self {
            fetcher,
            config,
            list_parser: MatchListParser::new(reference_year),
            detail_parser: MatchDetailParser::new(),
        }
    }

    pub async fn fetch_next_matches(&self) -> Result<Vec<Match>> {
        info!("Fetching upcoming fixtures");
        let html = self.fetcher.fetch_html(&self.config.sources.fixtures_url).await?;
        self.list_parser
            .parse(&html, ListKind::Fixtures, self.config.limits.fixtures)
            .context("Failed to parse fixtures page")
    }

    pub async fn fetch_last_results(&self) -> Result<Vec<Match>> {
        info!("Fetching latest results");
        let html = self.fetcher.fetch_html(&self.config.sources.results_url).await?;
        self.list_parser
            .parse(&html, ListKind::Results, self.config.limits.results)
            .context("Failed to parse results page")
    }

    pub async fn fetch_match_detail(&self, game_id: &str) -> Result<MatchDetail> {
        let html = self
            .fetcher
            .fetch_html(&self.config.sources.detail_url(game_id))
            .await?;
        self.detail_parser
            .parse(&html)
            .with_context(|| format!("Failed to parse detail page for game {}", game_id))
    }

    /// Scrape both listings, write a detail file for every match that links
    /// to one, then write `matches.json`. A failed detail page is logged and
    /// skipped.
    pub async fn run(&self, with_details: bool) -> Result<RunSummary> {
        let next_matches = self.fetch_next_matches().await?;
        let results = self.fetch_last_results().await?;
        let output_dir = Path::new(&self.config.output_dir);

        let mut summary = RunSummary {
            next_matches: next_matches.len(),
            results: results.len(),
            ..Default::default()
        };

        if with_details {
            // A game can be listed as both fixture and result; fetch it once.
            let game_ids: BTreeSet<&str> = next_matches.iter().chain(&results).filter_map(Match::game_id).collect();
            for game_id in game_ids {
                info!("Fetching details for game {}", game_id);
                let written = match self.fetch_match_detail(game_id).await {
                    Ok(detail) => {
                        if detail.home.is_empty() && detail.away.is_empty() {
                            warn!("Detail page for game {} has no lineups or formations", game_id);
                        }
                        output::write_detail(output_dir, game_id, &detail)
                    }
                    Err(e) => Err(e),
                };
                match written {
                    Ok(_) => summary.details_written += 1,
                    Err(e) => {
                        warn!("Could not save details for game {}: {:#}", game_id, e);
                        summary.details_failed += 1;
                    }
                }
            }
        }

        let file = MatchesFile { next_matches, results };
        output::write_matches(output_dir, &file)?;

        info!(
            "Scrape finished: {} fixtures, {} results, {} detail files ({} failed)",
            summary.next_matches, summary.results, summary.details_written, summary.details_failed
        );
        Ok(summary)
    }
}
