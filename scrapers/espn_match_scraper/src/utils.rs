use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::{
    error::{ExtractError, ExtractResult},
    types::Score,
};

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").unwrap());
static GAME_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/gameId/(\d+)").unwrap());

/// Find the first `<int> - <int>` in `text`. Surrounding text such as
/// `"FT"` or penalty notes is ignored. Each side must fit in a `u32`; a
/// larger number is a format error.
pub fn parse_score(text: &str) -> ExtractResult<Score> {
    let caps = SCORE_RE
        .captures(text)
        .ok_or_else(|| ExtractError::format("score", text))?;

    let home = caps[1]
        .parse::<u32>()
        .map_err(|_| ExtractError::format("score", text))?;
    let away = caps[2]
        .parse::<u32>()
        .map_err(|_| ExtractError::format("score", text))?;

    Ok(Score { home, away })
}

/// Game id from the first link in `row` whose target contains `/gameId/<digits>`.
pub fn extract_game_id(row: &ElementRef) -> Option<String> {
    let link_selector = Selector::parse("a[href]").unwrap();
    row.select(&link_selector)
        .filter_map(|link| link.value().attr("href"))
        .find_map(|href| GAME_ID_RE.captures(href).map(|caps| caps[1].to_string()))
}

/// Text of an element with every run of whitespace collapsed to one space.
pub fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("2 - 1").unwrap(), Score { home: 2, away: 1 });
        assert_eq!(parse_score("0-0").unwrap(), Score { home: 0, away: 0 });
        assert_eq!(parse_score("FT 10  -  3 (a.e.t.)").unwrap(), Score { home: 10, away: 3 });
        assert!(parse_score("vs").is_err());
        assert!(parse_score("v").unwrap_err().is_format());
        assert!(parse_score("").is_err());
    }

    #[test]
    fn test_parse_score_overflow() {
        assert_eq!(parse_score("4294967295 - 0").unwrap(), Score { home: u32::MAX, away: 0 });
        assert!(parse_score("4294967296 - 0").unwrap_err().is_format());
    }

    #[test]
    fn test_extract_game_id_first_match_wins() {
        let doc = parse(
            r#"<table><tr>
                <td><a href="/soccer/team/_/id/208/colombia">Colombia</a></td>
                <td><a href="/soccer/match/_/gameId/401234567/colombia-new-zealand">2 - 1</a></td>
                <td><a href="/soccer/match/_/gameId/999">later</a></td>
            </tr></table>"#,
        );
        let row = doc.select(&Selector::parse("tr").unwrap()).next().unwrap();
        assert_eq!(extract_game_id(&row), Some("401234567".to_string()));
    }

    #[test]
    fn test_extract_game_id_absent() {
        let doc = parse(
            r#"<table><tr><td><a href="/soccer/gameId/abc">x</a></td><td><a>no href</a></td></tr></table>"#,
        );
        let row = doc.select(&Selector::parse("tr").unwrap()).next().unwrap();
        assert_eq!(extract_game_id(&row), None);
    }

    #[test]
    fn test_element_text_collapses_whitespace() {
        let doc = parse("<table><tr><td>  New\n   <span>Zealand</span> </td></tr></table>");
        let cell = doc.select(&Selector::parse("td").unwrap()).next().unwrap();
        assert_eq!(element_text(&cell), "New Zealand");
    }
}
