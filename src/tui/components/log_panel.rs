//! # LogPanel Component
//!
//! Bordered panel showing the activity feed, most recent entry on top.
//! The display never exceeds `MAX_LOG_MESSAGES` rows no matter how much
//! the feed has accumulated, and shrinks further to whatever the panel
//! interior has room for.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::log_feed::{LogFeed, MAX_LOG_MESSAGES};
use crate::tui::component::Component;

pub struct LogPanel<'a> {
    feed: &'a LogFeed,
}

impl<'a> LogPanel<'a> {
    pub fn new(feed: &'a LogFeed) -> Self {
        Self { feed }
    }
}

impl Component for LogPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title("Activity")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.is_empty() {
            return;
        }

        let lines: Vec<Line> = if self.feed.is_empty() {
            vec![Line::styled(
                "nothing yet",
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            let rows = MAX_LOG_MESSAGES.min(inner.height as usize);
            self.feed.iterate_recent(rows).map(Line::raw).collect()
        };
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
