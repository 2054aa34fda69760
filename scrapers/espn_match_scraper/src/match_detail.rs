use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{
    error::{ExtractError, ExtractResult},
    types::{MatchDetail, Player},
    utils::element_text,
};

static FORMATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d-\d-\d(?:-\d)?").unwrap());

/// Parses a match lineups page.
///
/// The page is read positionally: the first two formation-looking strings
/// are home then away, and the first four tables are home starters, away
/// starters, home substitutes and away substitutes in that order.
pub struct MatchDetailParser;

impl MatchDetailParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, html: &str) -> ExtractResult<MatchDetail> {
        if html.trim().is_empty() {
            return Err(ExtractError::UnparseableDocument("empty detail page".to_string()));
        }

        let document = Html::parse_document(html);
        let mut detail = MatchDetail::default();

        let (home_formation, away_formation) = self.extract_formations(&document);
        detail.home.formation = home_formation;
        detail.away.formation = away_formation;

        let table_selector = Selector::parse("table").unwrap();
        let tables: Vec<ElementRef> = document.select(&table_selector).collect();
        debug!("Detail page has {} tables", tables.len());

        if tables.len() >= 2 {
            detail.home.starters = self.extract_players(&tables[0]);
            detail.away.starters = self.extract_players(&tables[1]);
        }
        if tables.len() >= 4 {
            detail.home.substitutes = self.extract_players(&tables[2]);
            detail.away.substitutes = self.extract_players(&tables[3]);
        }

        Ok(detail)
    }

    fn extract_formations(&self, document: &Html) -> (Option<String>, Option<String>) {
        // Joined without separators so a formation split across inline tags still matches.
        let text = document.root_element().text().collect::<String>();
        let mut found = FORMATION_RE.find_iter(&text).map(|m| m.as_str().to_string());
        (found.next(), found.next())
    }

    fn extract_players(&self, table: &ElementRef) -> Vec<Player> {
        let row_selector = Selector::parse("tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        table
            .select(&row_selector)
            .filter_map(|row| {
                let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
                if cells.len() < 2 {
                    return None;
                }
                Some(Player {
                    number: element_text(&cells[0]),
                    name: element_text(&cells[1]),
                })
            })
            .collect()
    }
}

impl Default for MatchDetailParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lineup_table(players: &[(&str, &str)]) -> String {
        let rows: String = players
            .iter()
            .map(|(number, name)| format!("<tr><td>{}</td><td>{}</td></tr>", number, name))
            .collect();
        format!("<table><thead><tr><th>No</th><th>Name</th></tr></thead><tbody>{}</tbody></table>", rows)
    }

    #[test]
    fn test_single_formation() {
        let html = "<html><body><p>Colombia 4-4-2</p></body></html>";
        let detail = MatchDetailParser::new().parse(html).unwrap();
        assert_eq!(detail.home.formation.as_deref(), Some("4-4-2"));
        assert_eq!(detail.away.formation, None);
        assert!(detail.home.starters.is_empty());
        assert!(detail.away.is_empty());
    }

    #[test]
    fn test_two_tables_only_fill_starters() {
        let html = format!(
            "<html><body>{}{}</body></html>",
            lineup_table(&[("1", "Camilo Vargas")]),
            lineup_table(&[("12", "Michael Woud")]),
        );
        let detail = MatchDetailParser::new().parse(&html).unwrap();
        assert_eq!(
            detail.home.starters,
            vec![Player {
                number: "1".to_string(),
                name: "Camilo Vargas".to_string()
            }]
        );
        assert_eq!(detail.away.starters.len(), 1);
        assert!(detail.home.substitutes.is_empty());
        assert!(detail.away.substitutes.is_empty());
    }

    #[test]
    fn test_one_table_gives_no_starters() {
        let html = format!("<html><body>{}</body></html>", lineup_table(&[("1", "Keeper")]));
        let detail = MatchDetailParser::new().parse(&html).unwrap();
        assert!(detail.home.starters.is_empty());
        assert!(detail.away.starters.is_empty());
    }

    #[test]
    fn test_short_rows_skipped_and_numbers_kept_as_text() {
        let html = format!(
            "<html><body>{}{}</body></html>",
            "<table><tr><td>only one cell</td></tr><tr><td>-</td><td>Unknown Player</td></tr></table>",
            lineup_table(&[]),
        );
        let detail = MatchDetailParser::new().parse(&html).unwrap();
        assert_eq!(
            detail.home.starters,
            vec![Player {
                number: "-".to_string(),
                name: "Unknown Player".to_string()
            }]
        );
        assert!(detail.away.starters.is_empty());
    }

    #[test]
    fn test_formation_split_across_inline_tags() {
        let html = "<html><body><p><b>4</b>-<b>3</b>-<b>3</b></p><p>3-<i>5</i>-2</p></body></html>";
        let detail = MatchDetailParser::new().parse(html).unwrap();
        assert_eq!(detail.home.formation.as_deref(), Some("4-3-3"));
        assert_eq!(detail.away.formation.as_deref(), Some("3-5-2"));
    }

    #[test]
    fn test_empty_markup_is_error() {
        assert!(matches!(
            MatchDetailParser::new().parse("  \n"),
            Err(ExtractError::UnparseableDocument(_))
        ));
    }
}
