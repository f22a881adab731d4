//! # Application State
//!
//! Core state for agenda. This module contains domain data only - no
//! TUI-specific types. Presentation concerns live in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen                 // current application mode
//! ├── log: LogFeed                   // recent activity messages
//! ├── mouse: Option<MousePosition>   // last observed mouse event
//! └── should_quit: bool              // render loop exit flag
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! with one exception: the draw path *consumes* `mouse` (`Option::take`)
//! when a hit-tested region claims the event, so hover feedback is applied
//! at most once per frame.

use std::fmt;

use crate::core::log_feed::LogFeed;

/// One of the named modes the user can switch between. Exactly one is
/// current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    NewTask,
    Calendar,
}

impl Screen {
    /// Human-readable name, used in transition feed entries and the title
    /// bar.
    pub fn label(self) -> &'static str {
        match self {
            Screen::MainMenu => "main menu",
            Screen::NewTask => "new task",
            Screen::Calendar => "calendar",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Absolute cell position of the last mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MousePosition {
    pub column: u16,
    pub row: u16,
}

pub struct App {
    pub screen: Screen,
    pub log: LogFeed,
    /// Last observed mouse event. Overwritten on every mouse event, cleared
    /// by the first drawn region whose rectangle contains it.
    pub mouse: Option<MousePosition>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::MainMenu,
            log: LogFeed::new(),
            mouse: None,
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
