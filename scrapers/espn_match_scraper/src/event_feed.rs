//! Alternate source: ESPN's JSON scoreboard/schedule feed.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::ExtractResult,
    types::{FeedMatch, MatchesFile, Score},
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFeed {
    #[serde(default)]
    pub events: Vec<FeedEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedEvent {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub competitions: Vec<FeedCompetition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedCompetition {
    #[serde(default)]
    pub competitors: Vec<FeedCompetitor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedCompetitor {
    #[serde(default)]
    pub team: FeedTeam,
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>,
    /// Sent as a string, a number or a `{value, displayValue}` object.
    pub score: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedTeam {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub abbreviation: String,
}

/// Feed events split by whether a final score is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSplit {
    pub upcoming: Vec<FeedMatch>,
    pub completed: Vec<FeedMatch>,
}

impl FeedSplit {
    pub fn into_matches_file(self) -> MatchesFile<FeedMatch> {
        MatchesFile {
            next_matches: self.upcoming,
            results: self.completed,
        }
    }
}

pub fn parse_feed(json: &str) -> ExtractResult<EventFeed> {
    Ok(serde_json::from_str(json)?)
}

fn score_value(value: &Value) -> Option<u32> {
    match value {
        Value::String(text) => text.trim().parse().ok(),
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::Object(fields) => fields
            .get("value")
            .and_then(score_value)
            .or_else(|| fields.get("displayValue").and_then(score_value)),
        _ => None,
    }
}

fn order_home_away(competitors: &[FeedCompetitor]) -> (&FeedCompetitor, &FeedCompetitor) {
    let (first, second) = (&competitors[0], &competitors[1]);
    match (first.home_away.as_deref(), second.home_away.as_deref()) {
        (Some("away"), Some("home")) => (second, first),
        _ => (first, second),
    }
}

/// Keep events involving `team_filter` (case-insensitive substring of either
/// display name) and split them into upcoming and completed matches.
pub fn extract_from_feed(feed: &EventFeed, team_filter: &str) -> FeedSplit {
    let filter = team_filter.to_lowercase();
    let mut split = FeedSplit::default();

    for event in &feed.events {
        let Some(competition) = event.competitions.first() else {
            debug!("Skipping event on {}: no competition", event.date);
            continue;
        };
        if competition.competitors.len() != 2 {
            debug!(
                "Skipping event on {}: {} competitors",
                event.date,
                competition.competitors.len()
            );
            continue;
        }

        let (home, away) = order_home_away(&competition.competitors);
        let involves_team = [home, away]
            .iter()
            .any(|c| c.team.display_name.to_lowercase().contains(&filter));
        if !involves_team {
            continue;
        }

        let score = match (&home.score, &away.score) {
            (Some(home_score), Some(away_score)) => match (score_value(home_score), score_value(away_score)) {
                (Some(home), Some(away)) => Some(Score { home, away }),
                _ => {
                    debug!(
                        "Skipping event on {}: unreadable score {} / {}",
                        event.date, home_score, away_score
                    );
                    continue;
                }
            },
            _ => None,
        };

        let record = FeedMatch {
            home_team: home.team.display_name.clone(),
            home_team_code: home.team.abbreviation.clone(),
            away_team: away.team.display_name.clone(),
            away_team_code: away.team.abbreviation.clone(),
            date: event.date.clone(),
            score,
        };

        if record.is_completed() {
            split.completed.push(record);
        } else {
            split.upcoming.push(record);
        }
    }

    info!(
        "Feed gave {} upcoming and {} completed matches for {:?}",
        split.upcoming.len(),
        split.completed.len(),
        team_filter
    );
    split
}
