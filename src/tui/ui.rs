//! Per-frame composition: resolve the window tree from the frame area,
//! dispatch to the current screen's draw routine, and claim the pending
//! mouse event for hover feedback.
//!
//! Everything here is recomputed from scratch every frame. Resolved
//! rectangles are intersected with the frame area before any widget sees
//! them, so descriptors that stick past the root on a tiny terminal
//! degrade to skipped draws instead of panics.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::state::{App, MousePosition, Screen};
use crate::tui::component::Component;
use crate::tui::components::{LogPanel, MainMenu, TitleBar};
use crate::tui::layout::{self, Extent, Region};
use crate::tui::pointer::MouseShape;

// Left inset of the main-menu column and the activity panel.
const BODY_INSET: u16 = 2;

/// Draw one full frame and report the pointer shape the hit-testing
/// decided on.
pub fn draw_ui(frame: &mut Frame, app: &mut App) -> MouseShape {
    let root = frame.area();
    let title_area = layout::resolve(root, &Region::new(0, 0, Extent::Fill, Extent::Cells(1)));
    let body = layout::resolve(root, &Region::new(0, 1, Extent::Fill, Extent::Fill));

    if let Some(area) = clipped(frame, title_area) {
        TitleBar::new(app.screen, Local::now().date_naive()).render(frame, area);
    }

    match app.screen {
        Screen::MainMenu => draw_main_menu(frame, body, app),
        Screen::NewTask => {
            draw_placeholder(
                frame,
                body,
                "New task",
                "Task capture is not built yet. Press m for the main menu.",
            );
            MouseShape::Default
        }
        Screen::Calendar => {
            let detail = format!(
                "{} is not drawn yet. Press m for the main menu.",
                Local::now().format("%B %Y")
            );
            draw_placeholder(frame, body, "Calendar", &detail);
            MouseShape::Default
        }
    }
}

fn draw_main_menu(frame: &mut Frame, body: Rect, app: &mut App) -> MouseShape {
    let menu_area = layout::resolve(
        body,
        &Region::new(
            BODY_INSET,
            1,
            Extent::Fill,
            Extent::Cells(MainMenu::required_height()),
        ),
    );
    let hovered = claim_hovered_entry(menu_area, &mut app.mouse);

    if let Some(area) = clipped(frame, menu_area) {
        MainMenu::new(hovered).render(frame, area);
    }

    let feed_area = layout::resolve(
        body,
        &Region::new(
            BODY_INSET,
            1 + MainMenu::required_height() + 1,
            Extent::Fill,
            Extent::Fill,
        ),
    );
    if let Some(area) = clipped(frame, feed_area) {
        LogPanel::new(&app.log).render(frame, area);
    }

    if hovered.is_some() {
        MouseShape::Pointer
    } else {
        MouseShape::Default
    }
}

/// Hit-test the pending mouse event against the menu entries in draw
/// order. The first entry whose rectangle contains it claims the event:
/// the position is cleared so no later region can claim it again this
/// frame.
fn claim_hovered_entry(menu_area: Rect, mouse: &mut Option<MousePosition>) -> Option<usize> {
    let position = (*mouse)?;
    for index in 0..MainMenu::entry_count() {
        let rect = layout::resolve(menu_area, &MainMenu::entry_region(index));
        if layout::hit_test(rect, position.column, position.row) {
            *mouse = None;
            return Some(index);
        }
    }
    None
}

fn draw_placeholder(frame: &mut Frame, body: Rect, name: &str, detail: &str) {
    // Three text rows, vertically centered in the body.
    let banner = Region::new(
        0,
        body.height.saturating_sub(3) / 2,
        Extent::Fill,
        Extent::Cells(3),
    );
    let Some(area) = clipped(frame, layout::resolve(body, &banner)) else {
        return;
    };

    let lines = vec![
        Line::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(detail.to_string(), Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

/// Clip a resolved rectangle to the frame; degenerate results are skipped
/// by the caller.
fn clipped(frame: &Frame, rect: Rect) -> Option<Rect> {
    let area = rect.intersection(frame.area());
    (!area.is_empty()).then_some(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App) -> (String, MouseShape) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut shape = MouseShape::Default;
        terminal.draw(|f| shape = draw_ui(f, app)).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        (text, shape)
    }

    #[test]
    fn test_main_menu_screen_shows_entries_and_feed() {
        let mut app = App::new();
        app.log.append("hello");

        let (text, shape) = draw(&mut app);
        assert!(text.contains("[n] New task"));
        assert!(text.contains("[c] Calendar"));
        assert!(text.contains("Activity"));
        assert!(text.contains("hello"));
        assert_eq!(shape, MouseShape::Default);
    }

    #[test]
    fn test_placeholder_screens_acknowledge_the_switch() {
        let mut app = App::new();

        app.screen = Screen::NewTask;
        let (text, _) = draw(&mut app);
        assert!(text.contains("New task"));

        app.screen = Screen::Calendar;
        let (text, _) = draw(&mut app);
        assert!(text.contains("Calendar"));
    }

    #[test]
    fn test_mouse_over_entry_is_claimed_and_turns_pointer() {
        let mut app = App::new();
        // Title row is y=0, menu starts one row into the body: entry 0
        // occupies (2..14, 2).
        app.mouse = Some(MousePosition { column: 3, row: 2 });

        let (_, shape) = draw(&mut app);
        assert_eq!(shape, MouseShape::Pointer);
        assert!(app.mouse.is_none(), "claimed events must be cleared");
    }

    #[test]
    fn test_mouse_outside_entries_is_left_pending() {
        let mut app = App::new();
        app.mouse = Some(MousePosition { column: 50, row: 15 });

        let (_, shape) = draw(&mut app);
        assert_eq!(shape, MouseShape::Default);
        assert_eq!(app.mouse, Some(MousePosition { column: 50, row: 15 }));
    }

    #[test]
    fn test_draw_survives_tiny_terminals() {
        let mut app = App::new();
        for (width, height) in [(0, 0), (1, 1), (5, 2), (12, 3)] {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal.draw(|f| { draw_ui(f, &mut app); }).unwrap();
        }
    }
}
