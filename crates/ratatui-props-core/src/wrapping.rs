use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Word-wraps `raw` to `width` columns.
///
/// Breaks prefer whitespace and trailing punctuation; a run with no break opportunity is split
/// hard at the limit. Tabs expand to four spaces. An empty input yields one empty line so that
/// an empty prop still occupies its row. A `width` of 0 disables wrapping.
pub fn word_wrap(raw: &str, width: u16) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for raw_line in raw.split('\n') {
        let raw_line = normalize_tabs(raw_line);
        if width == 0 || raw_line.is_empty() {
            out.push(raw_line);
            continue;
        }
        wrap_line(&raw_line, width as usize, &mut out);
    }
    out
}

fn wrap_line(raw: &str, max_cols: usize, out: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_cols = 0usize;
    let mut last_soft_idx: Option<usize> = None;

    for ch in raw.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if line_cols.saturating_add(w) > max_cols {
            if let Some(split) = last_soft_idx {
                let (prefix, rest) = line.split_at(split);
                out.push(prefix.trim_end().to_string());
                line = rest.trim_start().to_string();
                last_soft_idx = None;
            } else if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
        }

        if line.is_empty() && ch.is_whitespace() {
            line_cols = 0;
            continue;
        }

        if ch.is_whitespace() {
            last_soft_idx = Some(line.len());
        }

        line.push(ch);

        if matches!(
            ch,
            ',' | ';' | '.' | ':' | ')' | ']' | '}' | '|' | '/' | '?' | '!' | '-' | '_'
        ) {
            last_soft_idx = Some(line.len());
        }

        line_cols = UnicodeWidthStr::width(line.as_str());
    }

    if !line.is_empty() {
        out.push(line);
    }
}

fn normalize_tabs(s: &str) -> String {
    if s.contains('\t') {
        s.replace('\t', "    ")
    } else {
        s.to_string()
    }
}
