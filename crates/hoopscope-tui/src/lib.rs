// Library root: exposes the app orchestrator, the message protocol and the
// TUI so the binary and integration tests share one code path.

pub mod app;
pub mod protocol;
pub mod tui;
