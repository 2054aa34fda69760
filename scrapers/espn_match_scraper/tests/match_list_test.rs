use pretty_assertions::assert_eq;
use serde_json::json;

use espn_match_scraper::{
    competition::MatchType,
    error::ExtractError,
    match_list::{ListKind, MatchListParser, ReferenceYear},
    types::Score,
};

fn row(cells: &[&str]) -> String {
    let tds: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
    format!("<tr>{}</tr>", tds)
}

fn page(rows: &[String]) -> String {
    format!(
        r#"<html><body>
        <div class="ResponsiveTable">
          <table class="Table">
            <thead><tr><th>Date</th><th>Match</th><th></th><th></th><th>Result</th><th>Competition</th></tr></thead>
            <tbody>{}</tbody>
          </table>
        </div>
        <table class="Table"><tbody>{}</tbody></table>
        </body></html>"#,
        rows.join("\n"),
        row(&["Sat, Jan 3", "Second", "9 - 9", "Table", "FT", "Friendly"]),
    )
}

fn parser() -> MatchListParser {
    MatchListParser::new(ReferenceYear::Fixed(2025))
}

#[test]
fn test_results_page() {
    let html = page(&[
        row(&[
            "Sat, Nov 15",
            r#"<a href="/soccer/team/_/id/208/colombia">Colombia</a>"#,
            r#"<a href="/soccer/match/_/gameId/704512/colombia-new-zealand">2 - 1</a>"#,
            "New Zealand",
            "FT",
            "CONMEBOL Qualifying",
        ]),
        row(&["Tue, Nov 18", "Australia", "0 - 3", "Colombia", "FT", "International Friendly"]),
    ]);

    let matches = parser().parse(&html, ListKind::Results, 10).unwrap();
    assert_eq!(matches.len(), 2);

    let first = &matches[0];
    assert_eq!(first.score(), Some(Score { home: 2, away: 1 }));
    assert_eq!(first.game_id(), Some("704512"));
    assert_eq!(
        serde_json::to_value(first).unwrap(),
        json!({
            "homeTeam": "Colombia",
            "homeTeamCode": "co",
            "awayTeam": "New Zealand",
            "awayTeamCode": "nz",
            "date": "2025-11-15T00:00:00Z",
            "homeScore": 2,
            "awayScore": 1,
            "matchType": "Qualifiers",
            "gameId": "704512",
        })
    );

    let second = &matches[1];
    assert_eq!(second.home_code(), "xx");
    assert_eq!(second.match_type(), Some(MatchType::Friendly));
}

#[test]
fn test_only_first_table_is_read() {
    let html = page(&[row(&["Sat, Nov 15", "Colombia", "2 - 1", "New Zealand", "FT", "Friendly"])]);
    let matches = parser().parse(&html, ListKind::Results, 10).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].home_team(), "Colombia");
}

#[test]
fn test_malformed_rows_are_skipped() {
    let html = page(&[
        row(&["Sat, Nov 15", "Colombia", "2 - 1"]),
        row(&["Sat, Nov 15", "Colombia", "Postponed", "Chile", "", ""]),
        row(&["Someday", "Colombia", "1 - 0", "Chile"]),
        row(&["Sun, Nov 16", "Colombia", "1 - 0", "Chile"]),
    ]);
    let matches = parser().parse(&html, ListKind::Results, 10).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].away_team(), "Chile");
    assert_eq!(matches[0].date(), "2025-11-16T00:00:00Z");
    assert_eq!(matches[0].match_type(), None);
}

#[test]
fn test_limit_is_respected() {
    let rows: Vec<String> = (1..=9)
        .map(|day| {
            let date = format!("Mon, Sep {}", day);
            row(&[date.as_str(), "Colombia", "1 - 0", "Peru", "FT"])
        })
        .collect();
    let html = page(&rows);

    let matches = parser().parse(&html, ListKind::Results, 3).unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[2].date(), "2025-09-03T00:00:00Z");

    assert!(parser().parse(&html, ListKind::Results, 0).unwrap().is_empty());
}

#[test]
fn test_fixtures_page() {
    let html = page(&[
        row(&["Fri, Mar 21", "Argentina", "vs", "Peru", "18:00", "Friendly"]),
        row(&[
            "Tue, Mar 25",
            "Colombia",
            "v",
            "Paraguay",
            r#"<a href="/soccer/match/_/gameId/99887">FIFA World Cup Qualifying</a>"#,
        ]),
        row(&["Sat, Jun 6", "Colombia", "v", "Spain"]),
    ]);

    let matches = parser().parse(&html, ListKind::Fixtures, 5).unwrap();
    assert_eq!(matches.len(), 3);

    assert_eq!(matches[0].date(), "2025-03-21T18:00:00Z");
    assert_eq!(matches[0].match_type(), Some(MatchType::Friendly));
    assert_eq!(matches[0].away_code(), "pe");
    assert!(!matches[0].is_completed());

    assert_eq!(matches[1].date(), "2025-03-25T00:00:00Z");
    assert_eq!(matches[1].match_type(), Some(MatchType::Qualifiers));
    assert_eq!(matches[1].game_id(), Some("99887"));

    assert_eq!(matches[2].match_type(), None);
    let value = serde_json::to_value(&matches[2]).unwrap();
    assert!(value.get("homeScore").is_none());
    assert!(value.get("matchType").is_none());
}

#[test]
fn test_missing_table_and_empty_document() {
    let matches = parser()
        .parse("<html><body><p>No matches scheduled</p></body></html>", ListKind::Fixtures, 5)
        .unwrap();
    assert!(matches.is_empty());

    assert!(matches!(
        parser().parse("   ", ListKind::Results, 5),
        Err(ExtractError::UnparseableDocument(_))
    ));
}
