use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

use crate::viewport::ViewportState;

pub fn render_scrollbar(area: Rect, buf: &mut Buffer, state: &ViewportState, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }
    if state.content_h <= state.viewport_h as u32 || state.content_h == 0 {
        for dy in 0..area.height {
            buf.set_stringn(area.x, area.y + dy, " ", 1, style);
        }
        return;
    }

    let track_h = area.height as f64;
    let thumb_h = ((state.viewport_h as f64 / state.content_h as f64) * track_h)
        .round()
        .clamp(1.0, track_h) as u16;

    let max_y = state
        .content_h
        .saturating_sub(state.viewport_h as u32)
        .max(1) as f64;
    let thumb_top = ((state.y as f64 / max_y) * (track_h - thumb_h as f64))
        .round()
        .clamp(0.0, (track_h - thumb_h as f64).max(0.0)) as u16;

    for dy in 0..area.height {
        let ch = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            " "
        };
        buf.set_stringn(area.x, area.y + dy, ch, 1, style);
    }
}

/// Draws `spans` on row `y` starting at `x`, skipping the first `start_col` columns and writing
/// at most `max_cols`. Unstyled spans take `fallback_style`.
pub fn render_spans_clipped(
    x: u16,
    y: u16,
    start_col: u32,
    max_cols: u16,
    buf: &mut Buffer,
    spans: &[Span<'_>],
    fallback_style: Style,
) {
    if max_cols == 0 {
        return;
    }

    let start_col = start_col as usize;
    let max_cols = max_cols as usize;
    let mut col = 0usize;
    let mut out_cols = 0usize;
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for span in spans {
        let style = if span.style == Style::default() {
            fallback_style
        } else {
            fallback_style.patch(span.style)
        };
        for ch in span.content.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if w == 0 {
                continue;
            }
            if col + w <= start_col {
                col += w;
                continue;
            }
            if col < start_col && col + w > start_col {
                col += w;
                continue;
            }
            if out_cols + w > max_cols {
                return;
            }

            let s = ch.encode_utf8(&mut tmp);
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol(s);
            }
            dx += 1;
            out_cols += 1;
            col += w;

            if w == 2 {
                if out_cols >= max_cols {
                    return;
                }
                if let Some(cell) = buf.cell_mut((x + dx, y)) {
                    cell.set_style(style);
                    cell.set_symbol("");
                }
                dx += 1;
                out_cols += 1;
            }
        }
    }
}

/// Draws `lines[first_line..]` into `area`, one per row, clipped horizontally after skipping
/// `start_col` columns. Rows without a line are filled with `base_style`.
pub fn render_lines(
    area: Rect,
    buf: &mut Buffer,
    lines: &[Line<'_>],
    first_line: usize,
    start_col: u32,
    base_style: Style,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    for row in 0..area.height {
        let y = area.y + row;
        buf.set_style(Rect::new(area.x, y, area.width, 1), base_style);
        if let Some(line) = lines.get(first_line.saturating_add(row as usize)) {
            render_spans_clipped(
                area.x,
                y,
                start_col,
                area.width,
                buf,
                &line.spans,
                base_style.patch(line.style),
            );
        }
    }
}

/// Plain text of row `y` in `buf` within `area`, trailing spaces trimmed.
pub fn buffer_row_text(buf: &Buffer, area: Rect, y: u16) -> String {
    let mut out = String::new();
    for x in area.x..area.x + area.width {
        if let Some(cell) = buf.cell((x, y)) {
            out.push_str(cell.symbol());
        }
    }
    out.trim_end().to_string()
}
