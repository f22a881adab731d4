//! # Actions
//!
//! Everything that can happen in agenda becomes an `Action`. User presses
//! `c`? That's `Action::SwitchScreen(Screen::Calendar)`. The terminal
//! reports a new size? That's `Action::Resized`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. No I/O happens here beyond the `log` crate
//! macros; every arm completes in bounded time, so the render loop can
//! drain an arbitrary backlog of events between frames without stalling.

use log::{debug, info};

use crate::core::state::{App, MousePosition, Screen};

/// A state transition request, produced by the event translation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch to the given screen (the `n`/`c`/`m` bindings).
    SwitchScreen(Screen),
    /// Record the latest mouse event, replacing any previous one.
    MouseMoved(MousePosition),
    /// The terminal reported new dimensions. The root rectangle itself is
    /// re-read from the terminal on the next draw.
    Resized { width: u16, height: u16 },
    /// Ctrl+C: ask the render loop to stop after the current cycle.
    Quit,
}

/// Apply `action` to `app`.
pub fn update(app: &mut App, action: Action) {
    match action {
        Action::SwitchScreen(target) => {
            let from = app.screen;
            app.screen = target;
            info!("screen transition: {from} → {target}");
            app.log.append(format!("{from} → {target}"));
        }
        Action::MouseMoved(position) => {
            app.mouse = Some(position);
        }
        Action::Resized { width, height } => {
            debug!("terminal resized to {width}x{height}");
        }
        Action::Quit => {
            info!("quit requested");
            app.should_quit = true;
        }
    }
}
