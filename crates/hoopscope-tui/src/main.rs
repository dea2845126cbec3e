// Dashboard entry point.
//
// Startup sequence:
// 1. Load config (copying defaults on first run)
// 2. Initialize tracing (log to file, not terminal)
// 3. Load the player stat table
// 4. Create mpsc channels
// 5. Spawn app logic task
// 6. Run the TUI until the user quits
// 7. Cleanup on exit

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

use hoopscope_core::config::{self, LoggingConfig};
use hoopscope_core::loader;
use hoopscope_tui::{app, tui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;
    info!("Hoopscope starting up");
    info!(
        "Config loaded: defaults {} vs {} ({}), data at {}",
        config.dashboard.default_player_a,
        config.dashboard.default_player_b,
        config.dashboard.default_season,
        config.data_paths.players
    );

    // 3. Load the stat table
    let table = loader::load_stat_table(Path::new(&config.data_paths.players))
        .context("failed to load player stats")?;
    info!(
        "{} players across {} seasons",
        table.players().len(),
        table.seasons().len()
    );

    // 4. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    let title = config.dashboard.title.clone();
    let app_state = app::AppState::new(config, Arc::new(table));

    // 5. Spawn app logic task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 6. Run the TUI (blocks until 'q' or Ctrl+C)
    if let Err(e) = tui::run(title, ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    // 7. Wait for the app task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Hoopscope shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
///
/// `RUST_LOG` overrides the configured filter.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = Path::new(&logging.dir);
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join("hoopscope.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
