//! # MainMenu Component
//!
//! The main-menu entries, one row each with a blank spacer row between.
//! Every entry publishes the [`Region`] it is drawn into, relative to the
//! menu area, so the composition layer can hit-test the mouse against
//! exactly the cells the label occupies. Hover state comes back in as a
//! prop and switches the entry to an inverted style.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::layout::{self, Extent, Region};

struct MenuEntry {
    key: char,
    label: &'static str,
}

// `m` (main menu) is not listed: it is where these entries already live.
const ENTRIES: &[MenuEntry] = &[
    MenuEntry { key: 'n', label: "New task" },
    MenuEntry { key: 'c', label: "Calendar" },
];

// Rows between consecutive entry baselines.
const ROW_SPACING: u16 = 2;

pub struct MainMenu {
    pub hovered: Option<usize>,
}

impl MainMenu {
    pub fn new(hovered: Option<usize>) -> Self {
        Self { hovered }
    }

    pub fn entry_count() -> usize {
        ENTRIES.len()
    }

    /// Rows the menu needs: an entry row per entry plus the gaps between.
    pub fn required_height() -> u16 {
        (ENTRIES.len() as u16 * ROW_SPACING).saturating_sub(ROW_SPACING - 1)
    }

    /// Hit region of entry `index`, relative to the menu area. Sized to the
    /// display width of the drawn text so hover tracks the visible label.
    pub fn entry_region(index: usize) -> Region {
        let width = Self::entry_text(&ENTRIES[index]).width() as u16;
        Region::new(
            0,
            index as u16 * ROW_SPACING,
            Extent::Cells(width),
            Extent::Cells(1),
        )
    }

    fn entry_text(entry: &MenuEntry) -> String {
        format!("[{}] {}", entry.key, entry.label)
    }
}

impl Component for MainMenu {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (index, entry) in ENTRIES.iter().enumerate() {
            let rect = layout::resolve(area, &Self::entry_region(index)).intersection(frame.area());
            if rect.is_empty() {
                continue;
            }

            let style = if self.hovered == Some(index) {
                Style::default()
                    .fg(Color::Cyan)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            frame.render_widget(Span::styled(Self::entry_text(entry), style), rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_entry_regions_are_stacked_with_spacers() {
        assert_eq!(
            MainMenu::entry_region(0),
            Region::new(0, 0, Extent::Cells(12), Extent::Cells(1))
        );
        assert_eq!(
            MainMenu::entry_region(1),
            Region::new(0, 2, Extent::Cells(12), Extent::Cells(1))
        );
    }

    #[test]
    fn test_required_height_covers_all_entries() {
        assert_eq!(MainMenu::required_height(), 3);
    }

    #[test]
    fn test_render_shows_key_badges() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| MainMenu::new(None).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("[n] New task"));
        assert!(text.contains("[c] Calendar"));
    }

    #[test]
    fn test_hovered_entry_gets_background() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| MainMenu::new(Some(1)).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        // Entry 1 sits on row 2 (row 1 is the spacer).
        assert_eq!(buffer[(0, 2)].bg, Color::DarkGray);
        assert_eq!(buffer[(0, 0)].bg, Color::Reset);
    }
}
