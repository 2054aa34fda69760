use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to a free-text competition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    Friendly,
    Qualifiers,
    #[serde(rename = "Copa América")]
    CopaAmerica,
    #[serde(rename = "World Cup")]
    WorldCup,
    International,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Friendly => "Friendly",
            MatchType::Qualifiers => "Qualifiers",
            MatchType::CopaAmerica => "Copa América",
            MatchType::WorldCup => "World Cup",
            MatchType::International => "International",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Checked in order; the first rule with a matching needle wins.
const RULES: &[(&[&str], MatchType)] = &[
    (&["friendly"], MatchType::Friendly),
    (&["qualifying", "conmebol"], MatchType::Qualifiers),
    (&["copa américa", "copa america"], MatchType::CopaAmerica),
    (&["world cup"], MatchType::WorldCup),
];

pub fn classify(label: &str) -> MatchType {
    let label = label.to_lowercase();
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| label.contains(needle)))
        .map(|(_, match_type)| *match_type)
        .unwrap_or(MatchType::International)
}
