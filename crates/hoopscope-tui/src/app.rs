// Application state and orchestration logic.
//
// Owns the current selection and the shared stat table. Every selector change
// from the TUI runs one comparison and pushes the resulting charts (or the
// failure) back over the UI channel. Commands are handled one at a time, so
// comparisons never overlap.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use hoopscope_core::charts::{build_charts, ChartSet};
use hoopscope_core::config::Config;
use hoopscope_core::export::write_chart_set;
use hoopscope_core::resolver::{resolve_request, ComparisonRequest};
use hoopscope_core::stats::StatTable;

use crate::protocol::{SelectorId, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub config: Config,
    pub table: Arc<StatTable>,
    pub request: ComparisonRequest,
    /// Charts from the last successful comparison; cleared on failure.
    pub charts: Option<ChartSet>,
}

impl AppState {
    /// Start from the configured default selections.
    pub fn new(config: Config, table: Arc<StatTable>) -> Self {
        let request = ComparisonRequest::new(
            config.dashboard.default_player_a.clone(),
            config.dashboard.default_player_b.clone(),
            config.dashboard.default_season.clone(),
        );
        AppState {
            config,
            table,
            request,
            charts: None,
        }
    }

    pub fn apply_selection(&mut self, selector: SelectorId, value: String) {
        match selector {
            SelectorId::PlayerA => self.request.player_a = value,
            SelectorId::PlayerB => self.request.player_b = value,
            SelectorId::Season => self.request.season = value,
        }
    }

    /// Resolve the current request and rebuild the charts.
    pub fn compare(&mut self) -> UiUpdate {
        match resolve_request(&self.table, &self.request) {
            Ok(result) => {
                debug!(
                    "Compared {} vs {} in {} (fallback: {}, duplicate: {})",
                    result.display_name_a,
                    result.display_name_b,
                    result.season,
                    result.used_fallback,
                    result.is_duplicate_selection
                );
                let charts = build_charts(&result);
                self.charts = Some(charts.clone());
                UiUpdate::Comparison(Box::new(charts))
            }
            Err(e) => {
                warn!("Comparison failed: {}", e);
                self.charts = None;
                UiUpdate::ComparisonFailed(e.to_string())
            }
        }
    }

    /// Export the last charts to the configured directory.
    pub fn export(&self) -> UiUpdate {
        let Some(charts) = &self.charts else {
            return UiUpdate::ExportFailed("nothing to export".to_string());
        };
        match write_chart_set(Path::new(&self.config.export.dir), charts) {
            Ok(path) => UiUpdate::Exported(path),
            Err(e) => {
                warn!("Export failed: {}", e);
                UiUpdate::ExportFailed(e.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the application event loop.
///
/// Sends the selector options, the initial selection and its comparison,
/// then handles user commands until `Quit` or the command channel closes.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    let _ = ui_tx
        .send(UiUpdate::Options {
            players: state.table.players(),
            seasons: state.table.seasons(),
        })
        .await;
    let _ = ui_tx.send(UiUpdate::Selection(state.request.clone())).await;
    let initial = state.compare();
    let _ = ui_tx.send(initial).await;

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            UserCommand::Quit => {
                info!("Quit command received, shutting down");
                break;
            }
            cmd => handle_user_command(&mut state, cmd, &ui_tx).await,
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

/// Handle a user command from the TUI.
async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::Select { selector, value } => {
            info!("{:?} -> {}", selector, value);
            state.apply_selection(selector, value);
            let update = state.compare();
            let _ = ui_tx.send(update).await;
        }
        UserCommand::Export => {
            let update = state.export();
            let _ = ui_tx.send(update).await;
        }
        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
