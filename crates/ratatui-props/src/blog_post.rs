use crate::component::Component;
use crate::frame;
use crate::frame::BorderKind;
use crate::frame::FrameOptions;
use crate::theme::Theme;
use crate::wrapping;
use ratatui::text::Line;
use ratatui::text::Span;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlogPost {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl BlogPost {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            content: content.into(),
        }
    }
}

impl Component for BlogPost {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let options = FrameOptions {
            border: BorderKind::Plain,
            border_style: theme.post_border,
            padding_x: 2,
            ..FrameOptions::default()
        };
        let inner = options.inner_width(width);

        let mut content: Vec<Line<'static>> = Vec::new();
        content.extend(
            wrapping::word_wrap(&self.title, inner)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, theme.title))),
        );
        content.extend(
            wrapping::word_wrap(&format!("By {}", self.author), inner)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, theme.subheading))),
        );
        content.push(Line::default());
        content.extend(
            wrapping::word_wrap(&self.content, inner)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, theme.text_primary))),
        );

        frame::framed(content, width, &options)
    }
}
