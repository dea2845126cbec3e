// Per-season player stat records and the immutable table that holds them.

use serde::Serialize;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// StatLabel
// ---------------------------------------------------------------------------

/// One of the six tracked per-game statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatLabel {
    #[serde(rename = "PTS")]
    Points,
    #[serde(rename = "AST")]
    Assists,
    #[serde(rename = "REB")]
    Rebounds,
    #[serde(rename = "FG%")]
    FieldGoalPct,
    #[serde(rename = "3P%")]
    ThreePointPct,
    #[serde(rename = "FT%")]
    FreeThrowPct,
}

impl StatLabel {
    /// Every chart lines its series up against this order.
    pub const ALL: [StatLabel; 6] = [
        StatLabel::Points,
        StatLabel::Assists,
        StatLabel::Rebounds,
        StatLabel::FieldGoalPct,
        StatLabel::ThreePointPct,
        StatLabel::FreeThrowPct,
    ];

    /// Column header used in the CSV and as the axis label in charts.
    pub fn as_str(self) -> &'static str {
        match self {
            StatLabel::Points => "PTS",
            StatLabel::Assists => "AST",
            StatLabel::Rebounds => "REB",
            StatLabel::FieldGoalPct => "FG%",
            StatLabel::ThreePointPct => "3P%",
            StatLabel::FreeThrowPct => "FT%",
        }
    }
}

impl std::fmt::Display for StatLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PlayerSeasonRecord
// ---------------------------------------------------------------------------

/// Per-game averages for one player in one season.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonRecord {
    pub player: String,
    pub season: String,
    pub pts: f64,
    pub ast: f64,
    pub reb: f64,
    pub fg_pct: f64,
    pub three_pct: f64,
    pub ft_pct: f64,
}

impl PlayerSeasonRecord {
    pub fn stat(&self, label: StatLabel) -> f64 {
        match label {
            StatLabel::Points => self.pts,
            StatLabel::Assists => self.ast,
            StatLabel::Rebounds => self.reb,
            StatLabel::FieldGoalPct => self.fg_pct,
            StatLabel::ThreePointPct => self.three_pct,
            StatLabel::FreeThrowPct => self.ft_pct,
        }
    }

    /// All six stats in `StatLabel::ALL` order.
    pub fn stat_line(&self) -> [f64; 6] {
        StatLabel::ALL.map(|label| self.stat(label))
    }
}

// ---------------------------------------------------------------------------
// StatTable
// ---------------------------------------------------------------------------

/// The full record set, loaded once and never mutated afterwards.
///
/// Row order is the order of the source file. The resolver's ordinal
/// fallback depends on it, so nothing here sorts `records`.
#[derive(Debug, Clone, Default)]
pub struct StatTable {
    records: Vec<PlayerSeasonRecord>,
}

impl StatTable {
    pub fn new(records: Vec<PlayerSeasonRecord>) -> Self {
        StatTable { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows for one season, in file order.
    pub fn season_rows(&self, season: &str) -> Vec<&PlayerSeasonRecord> {
        self.records.iter().filter(|r| r.season == season).collect()
    }

    /// Distinct player names, sorted. These are the selector options.
    pub fn players(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.player.as_str()))
    }

    /// Distinct season labels, sorted.
    pub fn seasons(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.season.as_str()))
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
