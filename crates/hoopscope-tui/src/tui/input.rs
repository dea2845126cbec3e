// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into local ViewState changes (selector
// focus) and UserCommand messages for the app orchestrator (selection
// changes, export, quit).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::UserCommand;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator, `None` when it was handled locally or ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // On Windows crossterm emits both Press and Release for each keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Tab => {
            view_state.focus = view_state.focus.next();
            None
        }
        KeyCode::BackTab => {
            view_state.focus = view_state.focus.prev();
            None
        }

        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            select_step(view_state, 1)
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            select_step(view_state, -1)
        }

        KeyCode::Char('e') => Some(UserCommand::Export),
        KeyCode::Char('q') => Some(UserCommand::Quit),

        _ => None,
    }
}

/// Step the focused selector and emit the resulting selection.
fn select_step(view_state: &mut ViewState, delta: isize) -> Option<UserCommand> {
    let selector = view_state.focus;
    let value = view_state.step_selection(selector, delta)?;
    view_state.status_message = None;
    Some(UserCommand::Select { selector, value })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
