// Player stat CSV loading.
//
// Expects a header row with at least Player, Season, PTS, AST, REB, FG%, 3P%
// and FT%. `Name` and `TRB` stand in for `Player` and `REB` when those are
// absent. Other columns are ignored. Rows that fail to parse or carry
// non-finite numbers are skipped with a warning rather than failing the load.

use crate::stats::{PlayerSeasonRecord, StatTable};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StatsLoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    #[serde(rename = "Player")]
    player: String,
    #[serde(rename = "Season")]
    season: String,
    #[serde(rename = "PTS")]
    pts: f64,
    #[serde(rename = "AST")]
    ast: f64,
    #[serde(rename = "REB")]
    reb: f64,
    #[serde(rename = "FG%")]
    fg_pct: f64,
    #[serde(rename = "3P%")]
    three_pct: f64,
    #[serde(rename = "FT%")]
    ft_pct: f64,
}

impl RawPlayerRow {
    fn numbers(&self) -> [f64; 6] {
        [
            self.pts,
            self.ast,
            self.reb,
            self.fg_pct,
            self.three_pct,
            self.ft_pct,
        ]
    }
}

// ---------------------------------------------------------------------------
// Header normalization
// ---------------------------------------------------------------------------

const REQUIRED_COLUMNS: [&str; 8] = ["Player", "Season", "PTS", "AST", "REB", "FG%", "3P%", "FT%"];

/// (alternate, canonical) header names.
const HEADER_ALIASES: [(&str, &str); 2] = [("Name", "Player"), ("TRB", "REB")];

/// Rename alternate headers to their canonical names, but only when the
/// canonical column is absent. Returns the first required column still
/// missing as the error.
fn normalize_headers(headers: &csv::StringRecord) -> Result<csv::StringRecord, &'static str> {
    let mut names: Vec<String> = headers.iter().map(str::to_string).collect();

    for (alias, canonical) in HEADER_ALIASES {
        if names.iter().any(|h| h == canonical) {
            continue;
        }
        if let Some(header) = names.iter_mut().find(|h| h.as_str() == alias) {
            *header = canonical.to_string();
        }
    }

    match REQUIRED_COLUMNS
        .into_iter()
        .find(|col| !names.iter().any(|h| h == col))
    {
        Some(missing) => Err(missing),
        None => Ok(csv::StringRecord::from(names)),
    }
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn load_records_from_reader<R: Read>(
    rdr: R,
    source: &str,
) -> Result<Vec<PlayerSeasonRecord>, StatsLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader.headers().map_err(|e| StatsLoadError::Csv {
        path: source.to_string(),
        source: e,
    })?;
    let headers = normalize_headers(headers).map_err(|col| {
        StatsLoadError::Validation(format!("{source} is missing required column '{col}'"))
    })?;

    let mut records = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for result in reader.records() {
        let raw: RawPlayerRow = match result.and_then(|row| row.deserialize(Some(&headers))) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed player row in {}: {}", source, e);
                continue;
            }
        };

        if raw.player.is_empty() || raw.season.is_empty() {
            warn!("skipping row with empty Player or Season");
            continue;
        }
        if !raw.numbers().iter().all(|v| v.is_finite()) {
            warn!(
                "skipping '{}' ({}): non-finite stat value",
                raw.player, raw.season
            );
            continue;
        }
        if !seen.insert((raw.player.clone(), raw.season.clone())) {
            // Lookups match the first row; later duplicates still count for
            // ordinal positions within the season.
            warn!(
                "duplicate row for '{}' in {}, lookups will use the first one",
                raw.player, raw.season
            );
        }

        records.push(PlayerSeasonRecord {
            player: raw.player,
            season: raw.season,
            pts: raw.pts,
            ast: raw.ast,
            reb: raw.reb,
            fg_pct: raw.fg_pct,
            three_pct: raw.three_pct,
            ft_pct: raw.ft_pct,
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Public loaders
// ---------------------------------------------------------------------------

/// Build a `StatTable` from any CSV reader. Fails if no valid rows remain.
pub fn load_table_from_reader<R: Read>(rdr: R, source: &str) -> Result<StatTable, StatsLoadError> {
    let records = load_records_from_reader(rdr, source)?;

    if records.is_empty() {
        return Err(StatsLoadError::Validation(format!(
            "{source} produced zero valid player rows"
        )));
    }

    Ok(StatTable::new(records))
}

/// Load the stat table from a CSV file on disk.
pub fn load_stat_table(path: &Path) -> Result<StatTable, StatsLoadError> {
    let file = std::fs::File::open(path).map_err(|e| StatsLoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let table = load_table_from_reader(file, &path.display().to_string())?;
    info!(
        "Loaded {} player-season rows ({} players, {} seasons) from {}",
        table.len(),
        table.players().len(),
        table.seasons().len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
