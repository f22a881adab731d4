//! # TUI Adapter
//!
//! The ratatui-specific layer: terminal setup and teardown, the render
//! cycle, and translation of raw terminal events into core actions. This
//! is the only module that knows about ratatui and crossterm.
//!
//! ## Render cycle
//!
//! Each iteration blocks until the terminal has at least one event, drains
//! everything already queued without blocking further, applies the
//! resulting actions to the `App`, then repaints the whole screen and
//! flushes. Draining before drawing guarantees the frame reflects every
//! event received since the previous frame, never a stale prefix. The quit
//! flag is checked once per cycle, after the drain; an in-flight draw
//! always completes.
//!
//! There is no retry anywhere: a failing poll, draw, or flush propagates
//! out of [`run`] and ends the process after the mode guard and ratatui's
//! restore hook have unwound the terminal state.

mod component;
mod components;
pub mod event;
pub mod layout;
pub mod pointer;
pub mod ui;

use std::io::{self, stdout};

use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::info;
use ratatui::DefaultTerminal;

use crate::core::action::update;
use crate::core::state::App;
use crate::tui::pointer::{MouseShape, SetMouseShape};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // The enhancement flags are pushed unconditionally: terminals that
        // don't speak the protocol ignore them, and with them we receive
        // key release events instead of guessing.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            EnableFocusChange,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("terminal modes enabled (mouse, bracketed paste, focus, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            SetMouseShape(MouseShape::Default),
            PopKeyboardEnhancementFlags,
            DisableFocusChange,
            DisableBracketedPaste,
            DisableMouseCapture
        );
    }
}

pub fn run() -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = session(&mut terminal);
    ratatui::restore();
    result
}

fn session(terminal: &mut DefaultTerminal) -> io::Result<()> {
    let _mode_guard = TerminalModeGuard::new()?;

    let mut app = App::new();
    app.log.append("welcome to agenda");

    // First frame before any input arrives.
    draw_frame(terminal, &mut app)?;

    loop {
        // Polling: block until the terminal has something for us.
        dispatch(event::poll_event()?, &mut app);

        // Draining: apply everything already queued before drawing, so the
        // frame reflects the whole backlog.
        while let Some(raw) = event::try_event()? {
            dispatch(raw, &mut app);
        }

        if app.should_quit {
            info!("render loop stopped");
            return Ok(());
        }

        draw_frame(terminal, &mut app)?;
    }
}

fn dispatch(raw: Event, app: &mut App) {
    if let Some(action) = event::translate(raw) {
        update(app, action);
    }
}

/// Drawing and flushing: full repaint, then pointer-shape feedback from
/// whatever the hit-testing decided this frame.
fn draw_frame(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    let mut shape = MouseShape::Default;
    terminal.draw(|frame| shape = ui::draw_ui(frame, app))?;
    execute!(stdout(), SetMouseShape(shape))
}
