use crate::page_view::PageKeymap;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

const SEPARATOR: &str = " • ";

/// Footer row listing what the page viewer's keys do, e.g. `q quit • j/↓ down`.
///
/// Built from a [`PageKeymap`], so the hints always match the bound commands.
#[derive(Clone, Debug)]
pub struct HelpBar {
    spans: Vec<Span<'static>>,
    style: Style,
}

impl HelpBar {
    pub fn new(keymap: &PageKeymap, theme: &Theme) -> Self {
        let style = theme.text_muted;
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (keys, desc) in keymap.commands().into_iter().filter_map(|c| c.hint()) {
            if !spans.is_empty() {
                spans.push(Span::styled(SEPARATOR, style));
            }
            spans.push(Span::styled(keys, theme.accent));
            spans.push(Span::styled(format!(" {desc}"), style));
        }
        Self { spans, style }
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        buf.set_style(area, self.style);
        render::render_spans_clipped(area.x, area.y, 0, area.width, buf, &self.spans, self.style);
    }
}
