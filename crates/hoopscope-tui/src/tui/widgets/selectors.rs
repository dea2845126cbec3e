// Selector row: Player A, Player B and Season, dropdown-style.
//
// Each box shows its current value between arrows and its position in the
// option list. The focused box has a cyan border.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::focused_border_style;
use crate::protocol::SelectorId;
use crate::tui::layout::selector_columns;
use crate::tui::ViewState;

/// Render all three selectors into the selector row.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    for (selector, column) in SelectorId::ALL.into_iter().zip(selector_columns(area)) {
        render_one(frame, column, state, selector);
    }
}

fn render_one(frame: &mut Frame, area: Rect, state: &ViewState, selector: SelectorId) {
    let focused = state.focus == selector;
    let border = focused_border_style(focused, Style::default());

    let paragraph = Paragraph::new(selector_line(state, selector, focused)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(selector.label()),
    );
    frame.render_widget(paragraph, area);
}

/// Build the content line: `◀ value ▶  (i/n)`.
fn selector_line(state: &ViewState, selector: SelectorId, focused: bool) -> Line<'static> {
    let Some(value) = state.selected_value(selector) else {
        return Line::from(Span::styled(" --", Style::default().fg(Color::DarkGray)));
    };

    let options = state.options(selector);
    let position = options
        .iter()
        .position(|o| o == value)
        .map(|i| format!("  ({}/{})", i + 1, options.len()))
        .unwrap_or_default();

    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(" ◀ ", arrow_style),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▶", arrow_style),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
