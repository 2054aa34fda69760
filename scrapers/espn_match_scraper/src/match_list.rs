use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    competition::classify,
    dates::{infer_year, is_clock_time, normalize, DateDirection},
    error::{ExtractError, ExtractResult},
    types::Match,
    utils::{element_text, extract_game_id, parse_score},
};

const MIN_CELLS: usize = 4;

/// Which listing page a document comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListKind {
    Results,
    Fixtures,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Results => f.write_str("results"),
            ListKind::Fixtures => f.write_str("fixtures"),
        }
    }
}

/// Where the year for a yearless site date comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceYear {
    /// Use this year for every row.
    Fixed(i32),
    /// Infer the year relative to this day: results are placed on or before
    /// it, fixtures on or after it.
    NearestTo(NaiveDate),
}

impl ReferenceYear {
    fn resolve(&self, date_text: &str, direction: DateDirection) -> ExtractResult<i32> {
        match self {
            ReferenceYear::Fixed(year) => Ok(*year),
            ReferenceYear::NearestTo(today) => infer_year(date_text, *today, direction),
        }
    }
}

/// Why a row did not produce a match. Never surfaced to list callers.
#[derive(Debug, Error)]
pub enum RowSkip {
    #[error("row has {0} cells, need at least 4")]
    TooFewCells(usize),

    #[error("row is missing a team name")]
    MissingTeam,

    #[error(transparent)]
    Format(#[from] ExtractError),
}

/// The date/time/competition columns of a row once its layout is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFields<'a> {
    pub date: &'a str,
    pub time: Option<&'a str>,
    pub competition: Option<&'a str>,
}

/// Meaning of columns 4 and 5 on a fixtures row.
///
/// Some layouts put the kickoff time in column 4 and the competition in
/// column 5; others put the competition straight into column 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureColumns<'a> {
    Timed {
        time: &'a str,
        competition: Option<&'a str>,
    },
    Untimed {
        competition: Option<&'a str>,
    },
}

impl<'a> FixtureColumns<'a> {
    pub fn resolve(cells: &'a [String]) -> Self {
        let non_empty = |i: usize| cells.get(i).map(String::as_str).filter(|text| !text.is_empty());

        match cells.get(4) {
            Some(column) if is_clock_time(column) => FixtureColumns::Timed {
                time: column,
                competition: non_empty(5),
            },
            _ => FixtureColumns::Untimed {
                competition: non_empty(4),
            },
        }
    }

    pub fn time(&self) -> Option<&'a str> {
        match self {
            FixtureColumns::Timed { time, .. } => Some(*time),
            FixtureColumns::Untimed { .. } => None,
        }
    }

    pub fn competition(&self) -> Option<&'a str> {
        match self {
            FixtureColumns::Timed { competition, .. } | FixtureColumns::Untimed { competition } => *competition,
        }
    }
}

/// Turns one listing row into a [`Match`].
pub trait RowParser {
    fn parse_row(&self, cells: &[String], row: &ElementRef, year: ReferenceYear) -> Result<Match, RowSkip>;
}

fn teams(cells: &[String]) -> Result<(&str, &str), RowSkip> {
    if cells.len() < MIN_CELLS {
        return Err(RowSkip::TooFewCells(cells.len()));
    }
    let home = cells[1].trim();
    let away = cells[3].trim();
    if home.is_empty() || away.is_empty() {
        return Err(RowSkip::MissingTeam);
    }
    Ok((home, away))
}

fn normalize_row_date(fields: &RowFields, year: ReferenceYear, direction: DateDirection) -> ExtractResult<String> {
    let year = year.resolve(fields.date, direction)?;
    normalize(fields.date, fields.time, year)
}

/// Columns: date, home, score, away, status, competition.
pub struct ResultsRowParser;

impl RowParser for ResultsRowParser {
    fn parse_row(&self, cells: &[String], row: &ElementRef, year: ReferenceYear) -> Result<Match, RowSkip> {
        let (home, away) = teams(cells)?;
        let score = parse_score(&cells[2])?;

        let fields = RowFields {
            date: &cells[0],
            time: None,
            competition: cells.get(5).map(String::as_str).filter(|text| !text.is_empty()),
        };
        let date = normalize_row_date(&fields, year, DateDirection::Past)?;

        Ok(Match::result(
            home,
            away,
            date,
            score,
            fields.competition.map(classify),
            extract_game_id(row),
        ))
    }
}

/// Columns: date, home, "v", away, then either time + competition or just
/// competition.
pub struct FixturesRowParser;

impl RowParser for FixturesRowParser {
    fn parse_row(&self, cells: &[String], row: &ElementRef, year: ReferenceYear) -> Result<Match, RowSkip> {
        let (home, away) = teams(cells)?;

        let columns = FixtureColumns::resolve(cells);
        let fields = RowFields {
            date: &cells[0],
            time: columns.time(),
            competition: columns.competition(),
        };
        let date = normalize_row_date(&fields, year, DateDirection::Upcoming)?;

        Ok(Match::fixture(
            home,
            away,
            date,
            fields.competition.map(classify),
            extract_game_id(row),
        ))
    }
}

pub struct MatchListParser {
    reference_year: ReferenceYear,
}

impl MatchListParser {
    pub fn new(reference_year: ReferenceYear) -> Self {
        Self { reference_year }
    }

    /// Extract up to `limit` matches from the first `table.Table` of a
    /// listing page. Rows that cannot be read are skipped; rows after the
    /// limit is reached are not looked at.
    pub fn parse(&self, html: &str, kind: ListKind, limit: usize) -> ExtractResult<Vec<Match>> {
        if html.trim().is_empty() {
            return Err(ExtractError::UnparseableDocument(format!("empty {} page", kind)));
        }

        let document = Html::parse_document(html);
        let table_selector = Selector::parse("table.Table").unwrap();
        let row_selector = Selector::parse("tbody tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        let mut matches = Vec::new();

        let Some(table) = document.select(&table_selector).next() else {
            debug!("No match table found on {} page", kind);
            return Ok(matches);
        };

        let row_parser: &dyn RowParser = match kind {
            ListKind::Results => &ResultsRowParser,
            ListKind::Fixtures => &FixturesRowParser,
        };

        for (index, row) in table.select(&row_selector).enumerate() {
            if matches.len() >= limit {
                break;
            }

            let cells: Vec<String> = row.select(&cell_selector).map(|cell| element_text(&cell)).collect();

            match row_parser.parse_row(&cells, &row, self.reference_year) {
                Ok(parsed) => matches.push(parsed),
                Err(reason) => debug!("Skipping {} row {}: {}", kind, index, reason),
            }
        }

        info!("Extracted {} {} from listing", matches.len(), kind);
        Ok(matches)
    }
}
