//! # TUI Components
//!
//! Presentational building blocks, one file per component. All three are
//! stateless props-in-struct renderers: they receive what they show from
//! the caller and keep nothing between frames.
//!
//! - `TitleBar`: top status line (app name, screen, date, key hints)
//! - `MainMenu`: menu entries with key badges and hover highlight
//! - `LogPanel`: activity feed, newest first, bounded display

mod log_panel;
mod main_menu;
mod title_bar;

pub use log_panel::LogPanel;
pub use main_menu::MainMenu;
pub use title_bar::TitleBar;
