use crate::color;
use crate::component::Component;
use crate::text;
use crate::theme::Theme;
use crate::wrapping;
use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::text::Span;

const PADDING_X: usize = 2;

/// A full-width message on a coloured background.
///
/// `color` is kept verbatim as given. If it does not name a colour the alert is drawn without a
/// background rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertBox {
    pub message: String,
    pub color: String,
}

impl AlertBox {
    pub fn new(message: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            color: color.into(),
        }
    }

    pub fn background(&self) -> Option<Color> {
        color::resolve_color(&self.color)
    }
}

impl Component for AlertBox {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let width = width as usize;
        let style = match self.background() {
            Some(bg) => theme.alert_text.bg(bg),
            None => theme.alert_text,
        };
        let inner = width.saturating_sub(PADDING_X * 2);
        let pad = " ".repeat(PADDING_X);

        wrapping::word_wrap(&self.message, inner.min(u16::MAX as usize) as u16)
            .into_iter()
            .map(|l| {
                let line = Line::from(vec![
                    Span::styled(pad.clone(), style),
                    Span::styled(l, style),
                ]);
                text::pad_line(text::truncate_line(line, width), width, style)
            })
            .collect()
    }
}
