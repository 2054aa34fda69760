use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::types::{MatchDetail, MatchesFile};

pub const MATCHES_FILE: &str = "matches.json";
pub const DETAILS_DIR: &str = "details";

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

/// Write `<dir>/matches.json`.
pub fn write_matches<T: Serialize>(dir: &Path, file: &MatchesFile<T>) -> Result<PathBuf> {
    let path = dir.join(MATCHES_FILE);
    write_json(&path, file)?;
    info!("Wrote {:?}", path);
    Ok(path)
}

/// Write `<dir>/details/game_<id>.json`.
pub fn write_detail(dir: &Path, game_id: &str, detail: &MatchDetail) -> Result<PathBuf> {
    let path = dir.join(DETAILS_DIR).join(format!("game_{}.json", game_id));
    write_json(&path, detail)?;
    info!("Wrote {:?}", path);
    Ok(path)
}
