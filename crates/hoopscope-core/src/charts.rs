// Renderer-agnostic chart figures built from a comparison result.
//
// Each figure carries its title, axis titles and one trace per player. The
// terminal dashboard draws them directly and the exporter serializes them to
// JSON for any other renderer.

use crate::resolver::{ComparisonResult, TREND_GAMES};
use serde::Serialize;

pub const RADAR_LEGEND_TITLE: &str = "Players";
pub const BAR_TITLE: &str = "Stat Averages Comparison";
pub const TREND_TITLE: &str = "Scoring Trend (sample values)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Polar chart, one filled trace per player.
    Radar,
    /// Bars grouped by stat label.
    GroupedBar,
    /// Lines with markers over game index.
    Line,
}

/// A trace's category or numeric x position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValue {
    Category(String),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    /// Category labels (theta for radar) or game indices.
    pub x: Vec<AxisValue>,
    /// Values (r for radar).
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub kind: ChartKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
    pub traces: Vec<Trace>,
}

impl Figure {
    /// Largest y value across all traces, or 0.0 when empty.
    pub fn max_value(&self) -> f64 {
        self.traces
            .iter()
            .flat_map(|t| t.y.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Smallest y value across all traces, or 0.0 when empty.
    pub fn min_value(&self) -> f64 {
        let min = self
            .traces
            .iter()
            .flat_map(|t| t.y.iter().copied())
            .fold(f64::INFINITY, f64::min);
        if min.is_finite() {
            min
        } else {
            0.0
        }
    }
}

/// The three figures shown for one comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub season: String,
    pub radar: Figure,
    pub bar: Figure,
    pub trend: Figure,
}

pub fn radar_title(season: &str) -> String {
    format!("Skill Profile — {season}")
}

/// Build the radar, grouped bar and trend figures for a comparison.
pub fn build_charts(result: &ComparisonResult) -> ChartSet {
    let labels: Vec<AxisValue> = result
        .stat_labels
        .iter()
        .map(|l| AxisValue::Category(l.as_str().to_string()))
        .collect();
    let games: Vec<AxisValue> = (1..=TREND_GAMES)
        .map(|g| AxisValue::Number(g as f64))
        .collect();

    let stat_trace = |name: &str, values: &[f64], filled: bool| Trace {
        name: name.to_string(),
        x: labels.clone(),
        y: values.to_vec(),
        filled,
    };
    let trend_trace = |name: &str, values: &[f64]| Trace {
        name: name.to_string(),
        x: games.clone(),
        y: values.to_vec(),
        filled: false,
    };

    let radar = Figure {
        kind: ChartKind::Radar,
        title: radar_title(&result.season),
        x_axis_title: None,
        y_axis_title: None,
        legend_title: Some(RADAR_LEGEND_TITLE.to_string()),
        traces: vec![
            stat_trace(&result.display_name_a, &result.series_a, true),
            stat_trace(&result.display_name_b, &result.series_b, true),
        ],
    };

    let bar = Figure {
        kind: ChartKind::GroupedBar,
        title: BAR_TITLE.to_string(),
        x_axis_title: None,
        y_axis_title: Some("Value".to_string()),
        legend_title: None,
        traces: vec![
            stat_trace(&result.display_name_a, &result.series_a, false),
            stat_trace(&result.display_name_b, &result.series_b, false),
        ],
    };

    let trend = Figure {
        kind: ChartKind::Line,
        title: TREND_TITLE.to_string(),
        x_axis_title: Some("Game".to_string()),
        y_axis_title: Some("Points".to_string()),
        legend_title: None,
        traces: vec![
            trend_trace(&result.display_name_a, &result.trend_a),
            trend_trace(&result.display_name_b, &result.trend_b),
        ],
    };

    ChartSet {
        season: result.season.clone(),
        radar,
        bar,
        trend,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatLabel;

    fn sample_result() -> ComparisonResult {
        ComparisonResult {
            season: "2022-23".to_string(),
            stat_labels: StatLabel::ALL,
            series_a: [28.9, 6.8, 8.3, 50.0, 32.1, 76.8],
            series_b: [29.4, 6.3, 6.1, 49.3, 42.7, 91.5],
            trend_a: [27.9, 28.9, 29.9, 30.9, 26.9, 27.9, 28.9, 29.9, 30.9, 26.9],
            trend_b: [29.4, 30.4, 31.4, 28.4, 29.4, 30.4, 31.4, 28.4, 29.4, 30.4],
            display_name_a: "LeBron James".to_string(),
            display_name_b: "Stephen Curry".to_string(),
            is_duplicate_selection: false,
            used_fallback: false,
        }
    }

    #[test]
    fn radar_uses_stat_labels_and_season_title() {
        let charts = build_charts(&sample_result());
        assert_eq!(charts.radar.kind, ChartKind::Radar);
        assert_eq!(charts.radar.title, "Skill Profile — 2022-23");
        assert_eq!(charts.radar.legend_title.as_deref(), Some("Players"));
        assert_eq!(charts.radar.traces.len(), 2);

        let theta: Vec<&AxisValue> = charts.radar.traces[0].x.iter().collect();
        assert_eq!(theta.len(), 6);
        assert_eq!(*theta[3], AxisValue::Category("FG%".to_string()));
        assert!(charts.radar.traces.iter().all(|t| t.filled));
    }

    #[test]
    fn trace_names_are_display_names() {
        let mut result = sample_result();
        result.display_name_b = "LeBron James (dup)".to_string();
        let charts = build_charts(&result);
        for fig in [&charts.radar, &charts.bar, &charts.trend] {
            assert_eq!(fig.traces[0].name, "LeBron James");
            assert_eq!(fig.traces[1].name, "LeBron James (dup)");
        }
    }

    #[test]
    fn bar_series_align_with_labels() {
        let charts = build_charts(&sample_result());
        assert_eq!(charts.bar.kind, ChartKind::GroupedBar);
        assert_eq!(charts.bar.title, BAR_TITLE);
        assert_eq!(charts.bar.y_axis_title.as_deref(), Some("Value"));
        assert_eq!(charts.bar.traces[1].y, vec![29.4, 6.3, 6.1, 49.3, 42.7, 91.5]);
        assert_eq!(
            charts.bar.traces[1].x[0],
            AxisValue::Category("PTS".to_string())
        );
    }

    #[test]
    fn trend_spans_ten_games() {
        let charts = build_charts(&sample_result());
        let trace = &charts.trend.traces[0];
        assert_eq!(trace.x.len(), 10);
        assert_eq!(trace.x[0], AxisValue::Number(1.0));
        assert_eq!(trace.x[9], AxisValue::Number(10.0));
        assert_eq!(charts.trend.x_axis_title.as_deref(), Some("Game"));
        assert_eq!(charts.trend.y_axis_title.as_deref(), Some("Points"));
    }

    #[test]
    fn value_extents() {
        let charts = build_charts(&sample_result());
        assert!((charts.bar.max_value() - 91.5).abs() < f64::EPSILON);
        assert!((charts.trend.min_value() - 26.9).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_to_json() {
        let charts = build_charts(&sample_result());
        let json = serde_json::to_value(&charts).unwrap();
        assert_eq!(json["radar"]["kind"], "radar");
        assert_eq!(json["bar"]["kind"], "grouped_bar");
        assert_eq!(json["trend"]["traces"][0]["x"][0], 1.0);
        assert_eq!(json["radar"]["traces"][0]["x"][0], "PTS");
        assert_eq!(json["radar"]["traces"][0]["filled"], true);
        assert!(json["bar"]["traces"][0].get("filled").is_none());
    }
}
