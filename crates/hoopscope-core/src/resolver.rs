// Comparison resolver: turns two player selections and a season into the
// datasets behind the radar, grouped bar, and scoring trend charts.
//
// Resolution rules:
// - Same player picked twice: B is displayed as "<name> (dup)" but both
//   series come from the same row.
// - Either name missing from the season: both sides fall back to the
//   season's first and second rows, discarding any valid match.
// - The trend is synthetic: a fixed oscillation around the season PTS.

use crate::stats::{PlayerSeasonRecord, StatLabel, StatTable};
use serde::Serialize;
use tracing::{debug, warn};

/// Appended to player B's display name when both selections are identical.
pub const DUP_SUFFIX: &str = " (dup)";

/// Number of synthetic games in each trend series.
pub const TREND_GAMES: usize = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The three selector values for one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub player_a: String,
    pub player_b: String,
    pub season: String,
}

impl ComparisonRequest {
    pub fn new(
        player_a: impl Into<String>,
        player_b: impl Into<String>,
        season: impl Into<String>,
    ) -> Self {
        ComparisonRequest {
            player_a: player_a.into(),
            player_b: player_b.into(),
            season: season.into(),
        }
    }
}

/// Everything the chart layer needs for one comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub season: String,
    pub stat_labels: [StatLabel; 6],
    pub series_a: [f64; 6],
    pub series_b: [f64; 6],
    pub trend_a: [f64; TREND_GAMES],
    pub trend_b: [f64; TREND_GAMES],
    pub display_name_a: String,
    pub display_name_b: String,
    /// Both selectors named the same player.
    pub is_duplicate_selection: bool,
    /// At least one name had no row in the season, so the season's first two
    /// rows were used instead.
    pub used_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("no data for season {season}: need at least 2 player rows, found {rows}")]
    DataUnavailable { season: String, rows: usize },
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a request against the table.
pub fn resolve_request(
    table: &StatTable,
    request: &ComparisonRequest,
) -> Result<ComparisonResult, ResolveError> {
    resolve(table, &request.player_a, &request.player_b, &request.season)
}

/// Resolve two player selections and a season into chart data.
///
/// Returns `DataUnavailable` only when the ordinal fallback is needed and
/// the season has fewer than two rows.
pub fn resolve(
    table: &StatTable,
    player_a: &str,
    player_b: &str,
    season: &str,
) -> Result<ComparisonResult, ResolveError> {
    let season_rows = table.season_rows(season);

    let is_duplicate_selection = player_a == player_b;
    let display_name_a = player_a.to_string();
    let display_name_b = if is_duplicate_selection {
        debug!("'{}' selected on both sides, marking B as duplicate", player_b);
        format!("{player_b}{DUP_SUFFIX}")
    } else {
        player_b.to_string()
    };

    let row_a = find_row(&season_rows, &strip_dup_suffix(&display_name_a));
    let row_b = find_row(&season_rows, &strip_dup_suffix(&display_name_b));

    let (row_a, row_b, used_fallback) = match (row_a, row_b) {
        (Some(a), Some(b)) => (a, b, false),
        _ => {
            warn!(
                "'{}' or '{}' has no row in {}, falling back to the season's first two rows",
                display_name_a, display_name_b, season
            );
            match (season_rows.first(), season_rows.get(1)) {
                (Some(a), Some(b)) => (*a, *b, true),
                _ => {
                    return Err(ResolveError::DataUnavailable {
                        season: season.to_string(),
                        rows: season_rows.len(),
                    })
                }
            }
        }
    };

    Ok(ComparisonResult {
        season: season.to_string(),
        stat_labels: StatLabel::ALL,
        series_a: row_a.stat_line(),
        series_b: row_b.stat_line(),
        trend_a: synthetic_trend(row_a.pts, 5, 2),
        trend_b: synthetic_trend(row_b.pts, 4, 1),
        display_name_a,
        display_name_b,
        is_duplicate_selection,
        used_fallback,
    })
}

/// Remove every occurrence of the duplicate marker from a working label.
fn strip_dup_suffix(label: &str) -> String {
    label.replace(DUP_SUFFIX, "")
}

fn find_row<'a>(rows: &[&'a PlayerSeasonRecord], player: &str) -> Option<&'a PlayerSeasonRecord> {
    rows.iter().find(|r| r.player == player).copied()
}

/// `base + ((i mod modulus) - shift)` for games i = 1..=10.
fn synthetic_trend(base: f64, modulus: i64, shift: i64) -> [f64; TREND_GAMES] {
    std::array::from_fn(|idx| {
        let game = idx as i64 + 1;
        base + ((game % modulus) - shift) as f64
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(player: &str, season: &str, stats: [f64; 6]) -> PlayerSeasonRecord {
        PlayerSeasonRecord {
            player: player.to_string(),
            season: season.to_string(),
            pts: stats[0],
            ast: stats[1],
            reb: stats[2],
            fg_pct: stats[3],
            three_pct: stats[4],
            ft_pct: stats[5],
        }
    }

    fn sample_table() -> StatTable {
        StatTable::new(vec![
            record("Joel Embiid", "2022-23", [33.1, 4.2, 10.2, 54.8, 33.0, 85.7]),
            record("Luka Doncic", "2022-23", [32.4, 8.0, 8.6, 49.6, 34.2, 74.2]),
            record("LeBron James", "2022-23", [28.9, 6.8, 8.3, 50.0, 32.1, 76.8]),
            record("Stephen Curry", "2022-23", [29.4, 6.3, 6.1, 49.3, 42.7, 91.5]),
            record("LeBron James", "2021-22", [30.3, 6.2, 8.2, 52.4, 35.9, 75.6]),
            record("Giannis Antetokounmpo", "2019-20", [29.5, 5.6, 13.6, 55.3, 30.4, 63.3]),
        ])
    }

    #[test]
    fn distinct_players_use_their_own_rows() {
        let table = sample_table();
        let result = resolve(&table, "LeBron James", "Stephen Curry", "2022-23").unwrap();

        assert_eq!(result.series_a, [28.9, 6.8, 8.3, 50.0, 32.1, 76.8]);
        assert_eq!(result.series_b, [29.4, 6.3, 6.1, 49.3, 42.7, 91.5]);
        assert_eq!(result.display_name_a, "LeBron James");
        assert_eq!(result.display_name_b, "Stephen Curry");
        assert_eq!(result.stat_labels, StatLabel::ALL);
        assert_eq!(result.season, "2022-23");
        assert!(!result.used_fallback);
        assert!(!result.is_duplicate_selection);
    }

    #[test]
    fn season_filter_picks_matching_row() {
        let table = sample_table();
        let result = resolve(&table, "LeBron James", "Stephen Curry", "2022-23").unwrap();
        assert!((result.series_a[0] - 28.9).abs() < f64::EPSILON);

        // 2021-22 only has one row, and Curry is missing there.
        let err = resolve(&table, "LeBron James", "Stephen Curry", "2021-22").unwrap_err();
        assert!(matches!(err, ResolveError::DataUnavailable { rows: 1, .. }));
    }

    #[test]
    fn resolve_is_idempotent() {
        let table = sample_table();
        let first = resolve(&table, "Luka Doncic", "Joel Embiid", "2022-23").unwrap();
        let second = resolve(&table, "Luka Doncic", "Joel Embiid", "2022-23").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn self_comparison_marks_duplicate() {
        let table = sample_table();
        let result = resolve(&table, "Stephen Curry", "Stephen Curry", "2022-23").unwrap();

        assert_eq!(result.display_name_a, "Stephen Curry");
        assert_eq!(result.display_name_b, "Stephen Curry (dup)");
        assert_eq!(result.series_a, result.series_b);
        assert_eq!(result.trend_a[0], 29.4 - 1.0);
        assert!(result.is_duplicate_selection);
        assert!(!result.used_fallback);
    }

    #[test]
    fn self_comparison_in_single_row_season_succeeds() {
        let table = sample_table();
        let result = resolve(&table, "LeBron James", "LeBron James", "2021-22").unwrap();
        assert_eq!(result.series_a, result.series_b);
        assert!(!result.used_fallback);
    }

    #[test]
    fn missing_a_falls_back_to_first_two_rows() {
        let table = sample_table();
        let result = resolve(&table, "Michael Jordan", "Stephen Curry", "2022-23").unwrap();

        // Curry matched, but the fallback discards it.
        assert_eq!(result.series_a, [33.1, 4.2, 10.2, 54.8, 33.0, 85.7]);
        assert_eq!(result.series_b, [32.4, 8.0, 8.6, 49.6, 34.2, 74.2]);
        assert!(result.used_fallback);
        // Display names still reflect the request.
        assert_eq!(result.display_name_a, "Michael Jordan");
        assert_eq!(result.display_name_b, "Stephen Curry");
    }

    #[test]
    fn missing_b_falls_back_to_first_two_rows() {
        let table = sample_table();
        let result = resolve(&table, "LeBron James", "Giannis Antetokounmpo", "2022-23").unwrap();
        assert_eq!(result.series_a[0], 33.1);
        assert_eq!(result.series_b[0], 32.4);
        assert!(result.used_fallback);
    }

    #[test]
    fn missing_self_comparison_falls_back() {
        let table = sample_table();
        let result = resolve(&table, "Nobody", "Nobody", "2022-23").unwrap();
        assert_eq!(result.display_name_b, "Nobody (dup)");
        assert_ne!(result.series_a, result.series_b);
        assert!(result.used_fallback);
    }

    #[test]
    fn trend_formula_for_player_a() {
        let table = StatTable::new(vec![
            record("Scorer", "2022-23", [25.0, 1.0, 1.0, 50.0, 30.0, 80.0]),
            record("Other", "2022-23", [10.0, 1.0, 1.0, 50.0, 30.0, 80.0]),
        ]);
        let result = resolve(&table, "Scorer", "Other", "2022-23").unwrap();
        assert_eq!(
            result.trend_a,
            [24.0, 25.0, 26.0, 27.0, 23.0, 24.0, 25.0, 26.0, 27.0, 23.0]
        );
    }

    #[test]
    fn trend_formula_for_player_b() {
        let table = StatTable::new(vec![
            record("Scorer", "2022-23", [25.0, 1.0, 1.0, 50.0, 30.0, 80.0]),
            record("Other", "2022-23", [10.0, 1.0, 1.0, 50.0, 30.0, 80.0]),
        ]);
        let result = resolve(&table, "Scorer", "Other", "2022-23").unwrap();
        // (i % 4) - 1 for i = 1..=10: 0, 1, 2, -1, 0, 1, 2, -1, 0, 1
        assert_eq!(
            result.trend_b,
            [10.0, 11.0, 12.0, 9.0, 10.0, 11.0, 12.0, 9.0, 10.0, 11.0]
        );
    }

    #[test]
    fn duplicate_rows_use_first_match_and_count_for_fallback() {
        let table = StatTable::new(vec![
            record("Twice", "2022-23", [20.0, 1.0, 1.0, 50.0, 30.0, 80.0]),
            record("Twice", "2022-23", [10.0, 2.0, 2.0, 40.0, 20.0, 70.0]),
            record("Other", "2022-23", [15.0, 3.0, 3.0, 45.0, 25.0, 75.0]),
        ]);

        let matched = resolve(&table, "Twice", "Other", "2022-23").unwrap();
        assert!(!matched.used_fallback);
        assert_eq!(matched.series_a, [20.0, 1.0, 1.0, 50.0, 30.0, 80.0]);
        assert_eq!(matched.series_b[0], 15.0);

        // The second "Twice" row is ordinal position 1.
        let fallback = resolve(&table, "Nobody", "Other", "2022-23").unwrap();
        assert!(fallback.used_fallback);
        assert_eq!(fallback.series_a[0], 20.0);
        assert_eq!(fallback.series_b[0], 10.0);
    }

    #[test]
    fn single_row_season_with_miss_is_data_unavailable() {
        let table = StatTable::new(vec![record(
            "Lonely",
            "2010-11",
            [20.0, 1.0, 1.0, 50.0, 30.0, 80.0],
        )]);
        let err = resolve(&table, "Lonely", "Someone Else", "2010-11").unwrap_err();
        assert_eq!(
            err,
            ResolveError::DataUnavailable {
                season: "2010-11".to_string(),
                rows: 1,
            }
        );
    }

    #[test]
    fn unknown_season_is_data_unavailable() {
        let table = sample_table();
        let err = resolve(&table, "LeBron James", "Stephen Curry", "1984-85").unwrap_err();
        assert!(matches!(err, ResolveError::DataUnavailable { rows: 0, .. }));
    }

    #[test]
    fn literal_dup_suffix_is_stripped_for_lookup() {
        let table = sample_table();
        let result = resolve(&table, "LeBron James (dup)", "Stephen Curry", "2022-23").unwrap();
        assert_eq!(result.series_a[0], 28.9);
        assert_eq!(result.display_name_a, "LeBron James (dup)");
        assert!(!result.used_fallback);
    }

    #[test]
    fn resolve_request_matches_resolve() {
        let table = sample_table();
        let request = ComparisonRequest::new("LeBron James", "Stephen Curry", "2022-23");
        assert_eq!(
            resolve_request(&table, &request).unwrap(),
            resolve(&table, "LeBron James", "Stephen Curry", "2022-23").unwrap()
        );
    }
}
