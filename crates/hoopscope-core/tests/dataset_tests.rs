// Checks that the bundled dataset and default config work together.

use std::path::{Path, PathBuf};

use hoopscope_core::charts::build_charts;
use hoopscope_core::config::load_config_from;
use hoopscope_core::loader::load_stat_table;
use hoopscope_core::resolver::resolve;

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Base dir holding only `config/dashboard.toml`, copied from defaults.
fn config_base(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(base.join("config")).unwrap();
    std::fs::copy(
        project_root().join("defaults/dashboard.toml"),
        base.join("config/dashboard.toml"),
    )
    .unwrap();
    base
}

#[test]
fn bundled_csv_loads() {
    let table = load_stat_table(&project_root().join("data/players.csv")).unwrap();
    assert_eq!(table.len(), 24);
    assert_eq!(table.players().len(), 8);
    assert_eq!(table.seasons(), vec!["2021-22", "2022-23", "2023-24"]);
}

#[test]
fn every_season_has_every_player() {
    let table = load_stat_table(&project_root().join("data/players.csv")).unwrap();
    for season in table.seasons() {
        assert_eq!(
            table.season_rows(&season).len(),
            table.players().len(),
            "season {season} is missing players"
        );
    }
}

#[test]
fn default_selection_resolves_without_fallback() {
    let base = config_base("hoopscope_dataset_defaults");
    let config = load_config_from(&base).unwrap();
    let table = load_stat_table(&project_root().join(&config.data_paths.players)).unwrap();

    let result = resolve(
        &table,
        &config.dashboard.default_player_a,
        &config.dashboard.default_player_b,
        &config.dashboard.default_season,
    )
    .unwrap();
    assert!(!result.used_fallback);
    assert!(!result.is_duplicate_selection);

    let charts = build_charts(&result);
    assert_eq!(charts.radar.traces.len(), 2);
    assert_eq!(charts.trend.traces[0].y.len(), 10);

    let _ = std::fs::remove_dir_all(&base);
}

#[test]
fn every_pair_in_every_season_resolves() {
    let table = load_stat_table(&project_root().join("data/players.csv")).unwrap();
    for season in table.seasons() {
        for a in table.players() {
            for b in table.players() {
                let result = resolve(&table, &a, &b, &season).unwrap();
                assert!(!result.used_fallback, "{a} vs {b} in {season} fell back");
                assert_eq!(result.is_duplicate_selection, a == b);
            }
        }
    }
}
