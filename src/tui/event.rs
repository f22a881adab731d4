//! Terminal event retrieval and translation.
//!
//! `poll_event` blocks until the terminal has at least one event queued;
//! `try_event` drains whatever is already queued without blocking. The
//! render loop calls the former once per cycle and then the latter until
//! empty, so every frame reflects the full backlog rather than a stale
//! prefix.
//!
//! `translate` is a total match over crossterm's event union. Variants with
//! no effect in this application (focus, paste, key release/repeat) land in
//! explicit no-op arms so the match stays exhaustive as crossterm grows.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::state::{MousePosition, Screen};

/// Block until the terminal delivers the next event.
pub fn poll_event() -> io::Result<Event> {
    event::read()
}

/// Return the next already-queued event, or `None` when the queue is empty.
pub fn try_event() -> io::Result<Option<Event>> {
    if event::poll(Duration::ZERO)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Map a raw terminal event to an application action, if it has one.
pub fn translate(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press => {
                // The control modifier is checked before the character:
                // plain `c` switches to the calendar while Ctrl+C quits,
                // the one collision in the binding table.
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('c') => Some(Action::Quit),
                        _ => None,
                    }
                } else {
                    match key.code {
                        KeyCode::Char('n') => Some(Action::SwitchScreen(Screen::NewTask)),
                        KeyCode::Char('c') => Some(Action::SwitchScreen(Screen::Calendar)),
                        KeyCode::Char('m') => Some(Action::SwitchScreen(Screen::MainMenu)),
                        _ => None,
                    }
                }
            }
            // Release and repeat arrive because the keyboard-enhancement
            // flags are pushed; only presses drive commands.
            KeyEventKind::Release | KeyEventKind::Repeat => None,
        },
        Event::Mouse(mouse) => Some(Action::MouseMoved(MousePosition {
            column: mouse.column,
            row: mouse.row,
        })),
        Event::Resize(width, height) => Some(Action::Resized { width, height }),
        // Reserved for features outside the current screens.
        Event::FocusGained | Event::FocusLost => None,
        Event::Paste(_) => None,
    }
}
