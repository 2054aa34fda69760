use serde::{Deserialize, Serialize, Serializer};

use crate::{competition::MatchType, teams::team_code};

/// Final score of a completed match. Both sides are always known together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// A fixture or result extracted from a listing page.
///
/// Fields are private so a record cannot change after extraction. Flag codes
/// are derived from the team names on every access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    home_team: String,
    away_team: String,
    date: String,
    score: Option<Score>,
    match_type: Option<MatchType>,
    game_id: Option<String>,
}

impl Match {
    pub fn fixture(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        date: impl Into<String>,
        match_type: Option<MatchType>,
        game_id: Option<String>,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            date: date.into(),
            score: None,
            match_type,
            game_id,
        }
    }

    pub fn result(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        date: impl Into<String>,
        score: Score,
        match_type: Option<MatchType>,
        game_id: Option<String>,
    ) -> Self {
        Self {
            score: Some(score),
            ..Self::fixture(home_team, away_team, date, match_type, game_id)
        }
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_code(&self) -> &'static str {
        team_code(&self.home_team)
    }

    pub fn away_code(&self) -> &'static str {
        team_code(&self.away_team)
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn match_type(&self) -> Option<MatchType> {
        self.match_type
    }

    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.score.is_some()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchRecord<'a> {
    home_team: &'a str,
    home_team_code: &'a str,
    away_team: &'a str,
    away_team_code: &'a str,
    date: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    home_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    away_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    match_type: Option<MatchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_id: Option<&'a str>,
}

impl Serialize for Match {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatchRecord {
            home_team: &self.home_team,
            home_team_code: self.home_code(),
            away_team: &self.away_team,
            away_team_code: self.away_code(),
            date: &self.date,
            home_score: self.score.map(|s| s.home),
            away_score: self.score.map(|s| s.away),
            match_type: self.match_type,
            game_id: self.game_id.as_deref(),
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub number: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub formation: Option<String>,
    pub starters: Vec<Player>,
    pub substitutes: Vec<Player>,
}

impl Side {
    pub fn is_empty(&self) -> bool {
        self.formation.is_none() && self.starters.is_empty() && self.substitutes.is_empty()
    }
}

/// Lineups and formations for one game. The caller keys it by game id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub home: Side,
    pub away: Side,
}

/// Record built from the JSON event feed. Codes come straight from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMatch {
    pub home_team: String,
    pub home_team_code: String,
    pub away_team: String,
    pub away_team_code: String,
    pub date: String,
    pub score: Option<Score>,
}

impl FeedMatch {
    pub fn is_completed(&self) -> bool {
        self.score.is_some()
    }
}

impl Serialize for FeedMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatchRecord {
            home_team: &self.home_team,
            home_team_code: &self.home_team_code,
            away_team: &self.away_team,
            away_team_code: &self.away_team_code,
            date: &self.date,
            home_score: self.score.map(|s| s.home),
            away_score: self.score.map(|s| s.away),
            match_type: None,
            game_id: None,
        }
        .serialize(serializer)
    }
}

/// Layout of `matches.json` as read by the mobile client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesFile<T> {
    pub next_matches: Vec<T>,
    pub results: Vec<T>,
}
