// Messages exchanged between the app orchestrator and the TUI.

use std::path::PathBuf;

use hoopscope_core::charts::ChartSet;
use hoopscope_core::resolver::ComparisonRequest;

/// The three dropdown-style selectors on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorId {
    PlayerA,
    PlayerB,
    Season,
}

impl SelectorId {
    /// Left-to-right order on screen, also the Tab focus order.
    pub const ALL: [SelectorId; 3] = [SelectorId::PlayerA, SelectorId::PlayerB, SelectorId::Season];

    pub fn label(self) -> &'static str {
        match self {
            SelectorId::PlayerA => "Select Player A",
            SelectorId::PlayerB => "Select Player B",
            SelectorId::Season => "Select Season",
        }
    }

    pub fn next(self) -> SelectorId {
        match self {
            SelectorId::PlayerA => SelectorId::PlayerB,
            SelectorId::PlayerB => SelectorId::Season,
            SelectorId::Season => SelectorId::PlayerA,
        }
    }

    pub fn prev(self) -> SelectorId {
        match self {
            SelectorId::PlayerA => SelectorId::Season,
            SelectorId::PlayerB => SelectorId::PlayerA,
            SelectorId::Season => SelectorId::PlayerB,
        }
    }
}

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// A selector changed value; triggers one comparison.
    Select { selector: SelectorId, value: String },
    /// Write the current charts to the export directory.
    Export,
    Quit,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Selector option lists (distinct players and seasons, sorted).
    Options {
        players: Vec<String>,
        seasons: Vec<String>,
    },
    /// The selector values the app is currently comparing.
    Selection(ComparisonRequest),
    /// Fresh charts for the current selection.
    Comparison(Box<ChartSet>),
    /// The current selection could not be resolved.
    ComparisonFailed(String),
    Exported(PathBuf),
    ExportFailed(String),
}
