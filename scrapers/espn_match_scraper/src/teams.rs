use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Code returned for any team name missing from the table.
pub const UNKNOWN_TEAM_CODE: &str = "xx";

// Keys are matched exactly, so accented and translated spellings need their own entry.
const TEAM_CODES: &[(&str, &str)] = &[
    ("Colombia", "co"),
    ("Argentina", "ar"),
    ("Peru", "pe"),
    ("Perú", "pe"),
    ("Brazil", "br"),
    ("Brasil", "br"),
    ("Uruguay", "uy"),
    ("Chile", "cl"),
    ("Ecuador", "ec"),
    ("Bolivia", "bo"),
    ("Paraguay", "py"),
    ("Venezuela", "ve"),
    ("Mexico", "mx"),
    ("México", "mx"),
    ("United States", "us"),
    ("USA", "us"),
    ("Estados Unidos", "us"),
    ("Costa Rica", "cr"),
    ("Panama", "pa"),
    ("Panamá", "pa"),
    ("Spain", "es"),
    ("España", "es"),
    ("Romania", "ro"),
    ("Rumania", "ro"),
    ("New Zealand", "nz"),
    ("Nueva Zelanda", "nz"),
    ("Canada", "ca"),
    ("Canadá", "ca"),
];

static TEAM_CODE_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TEAM_CODES.iter().copied().collect());

/// Resolve a team display name to its two-letter flag code.
pub fn team_code(name: &str) -> &'static str {
    TEAM_CODE_MAP
        .get(name.trim())
        .copied()
        .unwrap_or(UNKNOWN_TEAM_CODE)
}
