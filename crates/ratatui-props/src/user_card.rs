use crate::component::Component;
use crate::frame;
use crate::frame::BorderKind;
use crate::frame::FrameOptions;
use crate::theme::Theme;
use ratatui::text::Line;
use ratatui::text::Span;

/// A bordered card showing a user's name, email and role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserCard {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserCard {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

impl Component for UserCard {
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let options = FrameOptions {
            border: BorderKind::Plain,
            border_style: theme.card_border,
            ..FrameOptions::default()
        };
        let content = vec![
            Line::from(Span::styled(self.name.clone(), theme.heading)),
            Line::from(vec![
                Span::styled("Email: ", theme.text_muted),
                Span::styled(self.email.clone(), theme.text_primary),
            ]),
            Line::from(vec![
                Span::styled("Role: ", theme.text_muted),
                Span::styled(self.role.clone(), theme.text_primary),
            ]),
        ];
        frame::framed(content, width, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    #[test]
    fn renders_props_verbatim() {
        let card = UserCard::new("Riya Das", "riya@example.com", "Editor");
        let plain = text::lines_to_plain(&card.lines(30, &Theme::default()));
        assert_eq!(
            plain,
            vec![
                "┌────────────────────────────┐",
                "│ Riya Das                   │",
                "│ Email: riya@example.com    │",
                "│ Role: Editor               │",
                "└────────────────────────────┘",
            ]
        );
    }

    #[test]
    fn empty_props_render_as_empty_text() {
        let card = UserCard::default();
        let plain = text::lines_to_plain(&card.lines(12, &Theme::default()));
        assert_eq!(plain[1], "│          │");
        assert_eq!(plain[2], "│ Email:   │");
        assert_eq!(plain[3], "│ Role:    │");
    }

    #[test]
    fn too_narrow_for_border_stays_within_width() {
        let card = UserCard::new("Riya Das", "riya@example.com", "Editor");
        let plain = text::lines_to_plain(&card.lines(4, &Theme::default()));
        assert_eq!(plain, vec!["Riya", "Emai", "Role"]);
    }

    #[test]
    fn name_uses_heading_style() {
        let theme = Theme::default();
        let card = UserCard::new("Ann", "a@b.c", "Admin");
        let lines = card.lines(20, &theme);
        let name = lines[1]
            .spans
            .iter()
            .find(|s| s.content == "Ann")
            .expect("name span");
        assert_eq!(name.style, theme.heading);
    }
}
