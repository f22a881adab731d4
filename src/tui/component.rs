use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI element rendered into a caller-resolved area.
///
/// Components receive their data as struct fields ("props"), so the render
/// signature stays uniform across the crate. `render` takes `&mut self` to
/// line up with ratatui's stateful-widget convention and leave room for
/// internal caches.
pub trait Component {
    /// Render the component into the given area. The area is already
    /// clipped to the frame; components never see out-of-bounds rectangles.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
