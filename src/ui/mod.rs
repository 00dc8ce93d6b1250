//! UI rendering for repostats.
//!
//! Two screens: the welcome card (Home) and the stats card (Stats). The
//! renderers are pure functions of `App`; all state transitions happen
//! in the view-model.

mod home;
mod stats;
pub mod theme;

use ratatui::Frame;

use crate::app::{App, Screen};

/// Spinner animation frames for the loading state.
pub const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Render the UI for the current screen.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Home => home::render(frame, app),
        Screen::Stats => stats::render(frame, app),
    }
}
