use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// Display width of a line in terminal columns.
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
        .sum()
}

/// Concatenated span contents, styles dropped.
pub fn line_to_plain(line: &Line<'_>) -> String {
    line.spans
        .iter()
        .map(|s| s.content.as_ref())
        .collect::<Vec<_>>()
        .join("")
}

pub fn lines_to_plain(lines: &[Line<'_>]) -> Vec<String> {
    lines.iter().map(line_to_plain).collect()
}

/// Cuts `line` to at most `max_cols` columns. A wide char that would straddle the limit is
/// dropped rather than split.
pub fn truncate_line(line: Line<'static>, max_cols: usize) -> Line<'static> {
    if line_width(&line) <= max_cols {
        return line;
    }

    let mut out: Vec<Span<'static>> = Vec::new();
    let mut cols = 0usize;
    'spans: for span in line.spans {
        // Measured as a string so emoji presentation sequences count the same as in `line_width`.
        let mut kept = String::new();
        for ch in span.content.chars() {
            kept.push(ch);
            if cols + UnicodeWidthStr::width(kept.as_str()) > max_cols {
                kept.pop();
                if !kept.is_empty() {
                    out.push(Span::styled(kept, span.style));
                }
                break 'spans;
            }
        }
        cols += UnicodeWidthStr::width(kept.as_str());
        out.push(Span::styled(kept, span.style));
    }

    Line::from(out).style(line.style)
}

/// Pads `line` with `style`d spaces up to `cols` columns. Lines already at least that wide are
/// returned unchanged.
pub fn pad_line(mut line: Line<'static>, cols: usize, style: Style) -> Line<'static> {
    let w = line_width(&line);
    if w < cols {
        line.spans.push(Span::styled(" ".repeat(cols - w), style));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_drops_straddling_wide_char() {
        let line = Line::from(vec![Span::raw("ab"), Span::raw("你好")]);
        let cut = truncate_line(line, 3);
        assert_eq!(line_to_plain(&cut), "ab");
        assert_eq!(line_width(&cut), 2);
    }

    #[test]
    fn truncated_emoji_sequence_fits() {
        for max in 0..=3 {
            let cut = truncate_line(Line::from("⚠️ Alert"), max);
            assert!(line_width(&cut) <= max, "max {max}: {:?}", line_to_plain(&cut));
        }
    }

    #[test]
    fn pad_line_fills_to_width() {
        let line = pad_line(Line::from("abc"), 6, Style::default());
        assert_eq!(line_to_plain(&line), "abc   ");
        let line = pad_line(Line::from("abcdef"), 3, Style::default());
        assert_eq!(line_to_plain(&line), "abcdef");
    }
}
