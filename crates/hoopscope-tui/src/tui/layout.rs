// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Title Bar (1 row)                                 |
// +----------------+----------------+----------------+
// | Player A       | Player B       | Season         |  (3 rows)
// +----------------+-+--------------+----------------+
// | Radar (50%)      | Grouped Bar (50%)              |  (55%)
// +------------------+--------------------------------+
// | Scoring Trend                                     |  (45%)
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub title_bar: Rect,
    /// Row holding the three selectors.
    pub selectors: Rect,
    /// Union of the three chart areas, used for error/placeholder text.
    pub charts: Rect,
    pub radar: Rect,
    pub bars: Rect,
    pub trend: Rect,
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(3), // selectors
            Constraint::Min(10),   // charts
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let title_bar = vertical[0];
    let selectors = vertical[1];
    let charts = vertical[2];
    let help_bar = vertical[3];

    let chart_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(charts);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chart_rows[0]);

    AppLayout {
        title_bar,
        selectors,
        charts,
        radar: top[0],
        bars: top[1],
        trend: chart_rows[1],
        help_bar,
    }
}

/// Split the selector row into three equal columns (A, B, Season).
pub fn selector_columns(area: Rect) -> [Rect; 3] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [cols[0], cols[1], cols[2]]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
