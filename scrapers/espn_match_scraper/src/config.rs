use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrapingConfig {
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            request_timeout_secs: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceUrls {
    pub results_url: String,
    pub fixtures_url: String,
    /// `{game_id}` is replaced with the match identifier.
    pub detail_url_template: String,
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            results_url: "https://www.espn.com/soccer/team/results/_/id/208/colombia".to_string(),
            fixtures_url: "https://www.espn.com/soccer/team/fixtures/_/id/208/colombia".to_string(),
            detail_url_template: "https://www.espn.com/soccer/lineups/_/gameId/{game_id}".to_string(),
        }
    }
}

impl SourceUrls {
    pub fn detail_url(&self, game_id: &str) -> String {
        self.detail_url_template.replace("{game_id}", game_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Limits {
    pub fixtures: usize,
    pub results: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            fixtures: 5,
            results: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScraperConfig {
    pub scraping: ScrapingConfig,
    pub sources: SourceUrls,
    pub limits: Limits,
    pub output_dir: String,
    pub team_filter: String,
    pub infer_year: bool,
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}

impl ScraperConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(user_agent) = env::var("SCRAPER_USER_AGENT") {
            config.scraping.user_agent = user_agent;
        }
        if let Some(timeout) = parse_env("SCRAPER_TIMEOUT_SECS") {
            config.scraping.request_timeout_secs = timeout;
        }
        if let Ok(url) = env::var("ESPN_RESULTS_URL") {
            config.sources.results_url = url;
        }
        if let Ok(url) = env::var("ESPN_FIXTURES_URL") {
            config.sources.fixtures_url = url;
        }
        if let Ok(template) = env::var("ESPN_DETAIL_URL") {
            config.sources.detail_url_template = template;
        }
        if let Some(limit) = parse_env("ESPN_FIXTURES_LIMIT") {
            config.limits.fixtures = limit;
        }
        if let Some(limit) = parse_env("ESPN_RESULTS_LIMIT") {
            config.limits.results = limit;
        }
        if let Ok(dir) = env::var("ESPN_OUTPUT_DIR") {
            config.output_dir = dir;
        }
        if let Ok(team) = env::var("ESPN_TEAM_FILTER") {
            config.team_filter = team;
        }
        if let Some(infer) = parse_env("ESPN_INFER_YEAR") {
            config.infer_year = infer;
        }

        config
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            scraping: ScrapingConfig::default(),
            sources: SourceUrls::default(),
            limits: Limits::default(),
            output_dir: "data".to_string(),
            team_filter: "Colombia".to_string(),
            infer_year: false,
        }
    }
}
