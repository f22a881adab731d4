//! # TitleBar Component
//!
//! Single-line status bar at the top of every screen: application name,
//! the current screen, today's date, and the key bindings. Purely
//! presentational - all fields are props from the caller, so the same
//! instance is never reused across frames.

use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::Screen;
use crate::tui::component::Component;

pub struct TitleBar {
    pub screen: Screen,
    pub today: NaiveDate,
}

impl TitleBar {
    pub fn new(screen: Screen, today: NaiveDate) -> Self {
        Self { screen, today }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                "agenda",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" · {}", self.screen)),
            Span::raw(format!(" · {}", self.today.format("%a %d %b"))),
            Span::styled(
                "   n new task · c calendar · m main menu · ctrl+c quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(screen: Screen) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        terminal
            .draw(|f| TitleBar::new(screen, today).render(f, f.area()))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_screen_and_date() {
        let text = render_to_text(Screen::Calendar);
        assert!(text.contains("agenda"));
        assert!(text.contains("calendar"));
        assert!(text.contains("Thu 06 Aug"));
    }

    #[test]
    fn test_title_bar_lists_key_bindings() {
        let text = render_to_text(Screen::MainMenu);
        assert!(text.contains("n new task"));
        assert!(text.contains("c calendar"));
        assert!(text.contains("m main menu"));
        assert!(text.contains("ctrl+c quit"));
    }
}
