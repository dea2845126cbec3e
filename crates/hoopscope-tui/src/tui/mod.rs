// TUI dashboard: layout, input handling, and chart rendering.
//
// The TUI owns a `ViewState` holding the selector options, the current
// selection and the latest charts. The app orchestrator pushes `UiUpdate`
// messages over an mpsc channel; the TUI applies them and re-renders at
// ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::warn;

use hoopscope_core::charts::ChartSet;
use hoopscope_core::resolver::ComparisonRequest;

use crate::protocol::{SelectorId, UiUpdate, UserCommand};

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state, updated from `UiUpdate` messages and key presses.
pub struct ViewState {
    pub title: String,
    /// Selector options for both player selectors.
    pub players: Vec<String>,
    /// Selector options for the season selector.
    pub seasons: Vec<String>,
    /// Current selector values. `None` until the app sends them.
    pub selection: Option<ComparisonRequest>,
    /// Which selector arrow keys act on.
    pub focus: SelectorId,
    pub charts: Option<ChartSet>,
    /// Set when the current selection could not be resolved.
    pub error: Option<String>,
    /// One-line feedback shown in the help bar (export results).
    pub status_message: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            title: String::new(),
            players: Vec::new(),
            seasons: Vec::new(),
            selection: None,
            focus: SelectorId::PlayerA,
            charts: None,
            error: None,
            status_message: None,
        }
    }
}

impl ViewState {
    pub fn new(title: impl Into<String>) -> Self {
        ViewState {
            title: title.into(),
            ..ViewState::default()
        }
    }

    pub fn options(&self, selector: SelectorId) -> &[String] {
        match selector {
            SelectorId::PlayerA | SelectorId::PlayerB => &self.players,
            SelectorId::Season => &self.seasons,
        }
    }

    pub fn selected_value(&self, selector: SelectorId) -> Option<&str> {
        let selection = self.selection.as_ref()?;
        Some(match selector {
            SelectorId::PlayerA => &selection.player_a,
            SelectorId::PlayerB => &selection.player_b,
            SelectorId::Season => &selection.season,
        })
    }

    /// Move the selector `delta` options forward (wrapping) and return the
    /// new value. A value that is not among the options steps from the start
    /// of the list.
    pub fn step_selection(&mut self, selector: SelectorId, delta: isize) -> Option<String> {
        let options = self.options(selector);
        if options.is_empty() {
            return None;
        }
        let len = options.len() as isize;
        let current = self
            .selected_value(selector)
            .and_then(|v| options.iter().position(|o| o == v));
        let next_idx = match current {
            Some(idx) => (idx as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        let value = options[next_idx as usize].clone();

        let selection = self.selection.as_mut()?;
        match selector {
            SelectorId::PlayerA => selection.player_a = value.clone(),
            SelectorId::PlayerB => selection.player_b = value.clone(),
            SelectorId::Season => selection.season = value.clone(),
        }
        Some(value)
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Options { players, seasons } => {
            state.players = players;
            state.seasons = seasons;
        }
        UiUpdate::Selection(request) => {
            state.selection = Some(request);
        }
        UiUpdate::Comparison(charts) => {
            state.charts = Some(*charts);
            state.error = None;
        }
        UiUpdate::ComparisonFailed(message) => {
            state.charts = None;
            state.error = Some(message);
        }
        UiUpdate::Exported(path) => {
            state.status_message = Some(format!("Exported to {}", path.display()));
        }
        UiUpdate::ExportFailed(message) => {
            state.status_message = Some(format!("Export failed: {message}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    render_title_bar(frame, &layout, state);
    widgets::selectors::render(frame, layout.selectors, state);

    match (&state.charts, &state.error) {
        (_, Some(message)) => render_error(frame, &layout, message),
        (Some(charts), None) => {
            widgets::radar::render(frame, layout.radar, &charts.radar);
            widgets::bars::render(frame, layout.bars, &charts.bar);
            widgets::trend::render(frame, layout.trend, &charts.trend);
        }
        (None, None) => render_placeholder(frame, &layout),
    }

    widgets::status_bar::render(frame, layout.help_bar, state);
}

fn render_title_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {}", state.title),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.title_bar);
}

fn render_error(frame: &mut Frame, layout: &AppLayout, message: &str) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            " Cannot compare this selection",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(" {message}")),
    ])
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title("Charts"));
    frame.render_widget(paragraph, layout.charts);
}

fn render_placeholder(frame: &mut Frame, layout: &AppLayout) {
    let paragraph = Paragraph::new("  Loading comparison...")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Charts"));
    frame.render_widget(paragraph, layout.charts);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Runs an async select loop over UI updates, keyboard input and render
///    ticks until the user quits or the app closes the update channel.
/// 4. Restores the terminal.
pub async fn run(
    title: String,
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(title);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // App is shutting down
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            if cmd_tx.send(cmd).await.is_err() {
                                warn!("Command channel closed");
                                break;
                            }
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal input error: {}", e);
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
