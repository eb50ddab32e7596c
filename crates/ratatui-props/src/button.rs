use crate::component::Component;
use crate::text;
use crate::theme::Theme;
use ratatui::text::Line;
use ratatui::text::Span;

const LEFT_CAP: &str = "▐";
const RIGHT_CAP: &str = "▌";
const LABEL_PAD: &str = "  ";

/// A pill-shaped label. Purely presentational: it has no click behaviour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Button {
    pub text: String,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Component for Button {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let line = Line::from(vec![
            Span::styled(LEFT_CAP, theme.button_cap),
            Span::styled(format!("{LABEL_PAD}{}{LABEL_PAD}", self.text), theme.button),
            Span::styled(RIGHT_CAP, theme.button_cap),
        ]);
        vec![text::truncate_line(line, width as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_padded_label_with_caps() {
        let theme = Theme::default();
        let lines = Button::new("Click Me").lines(40, &theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(text::line_to_plain(&lines[0]), "▐  Click Me  ▌");
        assert_eq!(lines[0].spans[1].style, theme.button);
    }

    #[test]
    fn narrow_width_clips_label() {
        let lines = Button::new("Submit").lines(5, &Theme::default());
        assert_eq!(text::line_to_plain(&lines[0]), "▐  Su");
    }
}
