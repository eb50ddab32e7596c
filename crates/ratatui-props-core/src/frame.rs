use crate::text;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderKind {
    #[default]
    Plain,
    Rounded,
}

impl BorderKind {
    fn glyphs(self) -> [&'static str; 6] {
        // top-left, top-right, bottom-left, bottom-right, horizontal, vertical
        match self {
            BorderKind::Plain => ["┌", "┐", "└", "┘", "─", "│"],
            BorderKind::Rounded => ["╭", "╮", "╰", "╯", "─", "│"],
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FrameOptions {
    pub border: BorderKind,
    pub border_style: Style,
    /// Fill style for padding cells and the space right of short lines.
    pub fill_style: Style,
    pub padding_x: u16,
    pub padding_y: u16,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            border: BorderKind::Plain,
            border_style: Style::default(),
            fill_style: Style::default(),
            padding_x: 1,
            padding_y: 0,
        }
    }
}

impl FrameOptions {
    /// Columns left for content once borders and padding are taken out of `width`.
    pub fn inner_width(&self, width: u16) -> u16 {
        width.saturating_sub(2 + self.padding_x.saturating_mul(2))
    }
}

/// Wraps `content` in a border `width` columns wide.
///
/// Content lines wider than the inner width are truncated. When `width` leaves no room for
/// content the lines are returned unframed, truncated to `width`.
pub fn framed(content: Vec<Line<'static>>, width: u16, options: &FrameOptions) -> Vec<Line<'static>> {
    let inner = options.inner_width(width) as usize;
    if inner == 0 {
        return content
            .into_iter()
            .map(|l| text::truncate_line(l, width as usize))
            .collect();
    }

    let [tl, tr, bl, br, h, v] = options.border.glyphs();
    let span_w = width as usize - 2;
    let pad_x = " ".repeat(options.padding_x as usize);

    let edge = |left: &'static str, right: &'static str| {
        Line::from(vec![
            Span::styled(left, options.border_style),
            Span::styled(h.repeat(span_w), options.border_style),
            Span::styled(right, options.border_style),
        ])
    };
    let row = |body: Line<'static>| {
        let body = text::pad_line(text::truncate_line(body, inner), inner, options.fill_style);
        let mut spans = Vec::with_capacity(body.spans.len() + 4);
        spans.push(Span::styled(v, options.border_style));
        spans.push(Span::styled(pad_x.clone(), options.fill_style));
        let body_style = body.style;
        spans.extend(
            body.spans
                .into_iter()
                .map(|s| Span::styled(s.content, body_style.patch(s.style))),
        );
        spans.push(Span::styled(pad_x.clone(), options.fill_style));
        spans.push(Span::styled(v, options.border_style));
        Line::from(spans)
    };

    let mut out = Vec::with_capacity(content.len() + 2 + options.padding_y as usize * 2);
    out.push(edge(tl, tr));
    for _ in 0..options.padding_y {
        out.push(row(Line::default()));
    }
    for line in content {
        out.push(row(line));
    }
    for _ in 0..options.padding_y {
        out.push(row(Line::default()));
    }
    out.push(edge(bl, br));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_and_pads_to_width() {
        let lines = framed(vec![Line::from("hi")], 8, &FrameOptions::default());
        let plain = text::lines_to_plain(&lines);
        assert_eq!(plain, vec!["┌──────┐", "│ hi   │", "└──────┘"]);
        assert!(lines.iter().all(|l| text::line_width(l) == 8));
    }

    #[test]
    fn rounded_border_with_vertical_padding() {
        let opts = FrameOptions {
            border: BorderKind::Rounded,
            padding_y: 1,
            ..FrameOptions::default()
        };
        let plain = text::lines_to_plain(&framed(vec![Line::from("x")], 5, &opts));
        assert_eq!(plain, vec!["╭───╮", "│   │", "│ x │", "│   │", "╰───╯"]);
    }

    #[test]
    fn truncates_wide_content() {
        let plain = text::lines_to_plain(&framed(
            vec![Line::from("abcdef")],
            6,
            &FrameOptions::default(),
        ));
        assert_eq!(plain[1], "│ ab │");
    }

    #[test]
    fn too_narrow_returns_content_unframed() {
        let plain = text::lines_to_plain(&framed(vec![Line::from("abc")], 4, &FrameOptions::default()));
        assert_eq!(plain, vec!["abc"]);
    }

    #[test]
    fn too_narrow_still_fits_width() {
        let content = vec![Line::from("abcdef"), Line::from("你好")];
        for width in 0..=4u16 {
            let lines = framed(content.clone(), width, &FrameOptions::default());
            assert!(
                lines.iter().all(|l| text::line_width(l) <= width as usize),
                "width {width}: {:?}",
                text::lines_to_plain(&lines)
            );
        }
        let plain = text::lines_to_plain(&framed(content, 2, &FrameOptions::default()));
        assert_eq!(plain, vec!["ab", "你"]);
    }
}
