use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;

/// A presentational component: props in, lines out.
///
/// `lines` must be pure. Calling it twice with the same props, width and theme yields the same
/// lines.
pub trait Component {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>>;

    fn height(&self, width: u16, theme: &Theme) -> u16 {
        self.lines(width, theme).len().min(u16::MAX as usize) as u16
    }

    /// Draws the component's lines at the top of `area`, clipped to it.
    fn render_ref(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let lines = self.lines(area.width, theme);
        render::render_lines(area, buf, &lines, 0, 0, theme.text_primary);
    }
}
