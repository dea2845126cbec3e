// Help bar widget: focused selector, key hints, and export feedback.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::SelectorId;
use crate::tui::ViewState;

pub const HELP_TEXT: &str = " Tab:Next selector | ←/→:Change | e:Export | q:Quit";

/// Render the help bar into the given area.
///
/// Layout: [focused selector] [status message or key hints]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![focus_span(state.focus)];

    match &state.status_message {
        Some(message) => spans.push(Span::styled(
            format!(" {message}"),
            message_style(message),
        )),
        None => spans.push(Span::styled(HELP_TEXT, Style::default().fg(Color::Gray))),
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Highlighted tag naming the selector that arrow keys act on.
pub fn focus_span(focus: SelectorId) -> Span<'static> {
    let label = match focus {
        SelectorId::PlayerA => "Player A",
        SelectorId::PlayerB => "Player B",
        SelectorId::Season => "Season",
    };
    Span::styled(
        format!("[{label}]"),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn message_style(message: &str) -> Style {
    if message.starts_with("Export failed") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    }
}
