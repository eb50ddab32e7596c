use crate::alert::AlertBox;
use crate::blog_post::BlogPost;
use crate::button::Button;
use crate::component::Component;
use crate::list::ListRenderer;
use crate::text;
use crate::theme::Theme;
use crate::user_card::UserCard;
use ratatui::text::Line;
use ratatui::text::Span;

/// One block of a [`Page`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Section {
    Title { text: String },
    Heading { text: String },
    Divider,
    Spacer,
    UserCard(UserCard),
    Button(Button),
    BlogPost(BlogPost),
    List(ListRenderer),
    Alert(AlertBox),
}

impl Section {
    pub fn title(text: impl Into<String>) -> Self {
        Section::Title { text: text.into() }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Section::Heading { text: text.into() }
    }
}

impl Component for Section {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        match self {
            Section::Title { text } => vec![heading_line(text, width, theme.title)],
            Section::Heading { text } => vec![heading_line(text, width, theme.heading)],
            Section::Divider => vec![Line::from(Span::styled(
                "─".repeat(width as usize),
                theme.divider,
            ))],
            Section::Spacer => vec![Line::default()],
            Section::UserCard(card) => card.lines(width, theme),
            Section::Button(button) => button.lines(width, theme),
            Section::BlogPost(post) => post.lines(width, theme),
            Section::List(list) => list.lines(width, theme),
            Section::Alert(alert) => alert.lines(width, theme),
        }
    }
}

fn heading_line(s: &str, width: u16, style: ratatui::style::Style) -> Line<'static> {
    text::truncate_line(Line::from(Span::styled(s.to_string(), style)), width as usize)
}

/// An ordered stack of sections, rendered top to bottom with one blank row between sections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    #[cfg_attr(feature = "serde", serde(default))]
    pub sections: Vec<Section>,
}

impl Page {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// The user list / blog post / list / alert showcase.
    pub fn showcase() -> Self {
        let fruits = ["Apple", "Banana", "Cherry"];

        Self::new(vec![
            Section::title("👤 User List"),
            Section::UserCard(UserCard::new(
                "Chhoton Choudhury",
                "chhoton@example.com",
                "Admin",
            )),
            Section::Button(Button::new("Click Me")),
            Section::UserCard(UserCard::new("Riya Das", "riya@example.com", "Editor")),
            Section::Button(Button::new("Submit")),
            Section::Divider,
            Section::heading("📝 Blog Post"),
            Section::BlogPost(BlogPost::new(
                "Getting Started with React",
                "Chhoton Choudhury",
                "React is a powerful library for building user interfaces...",
            )),
            Section::Divider,
            Section::heading("📋 List Renderer"),
            Section::List(ListRenderer::new(fruits)),
            Section::Divider,
            Section::heading("⚠️ Alert Box"),
            Section::Alert(AlertBox::new("This is a success message!", "green")),
            Section::Alert(AlertBox::new("This is an error message!", "red")),
        ])
    }

    /// Replaces the marker of every list section.
    pub fn set_list_marker(&mut self, marker: &str) {
        for section in &mut self.sections {
            if let Section::List(list) = section {
                list.marker = marker.to_string();
            }
        }
    }
}

impl Component for Page {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let mut out: Vec<Line<'static>> = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push(Line::default());
            }
            out.extend(section.lines(width, theme));
        }
        out
    }
}
