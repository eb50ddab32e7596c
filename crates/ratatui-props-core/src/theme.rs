use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

/// Button blue (`#007bff`).
pub const BUTTON_BG: Color = Color::Rgb(0x00, 0x7b, 0xff);

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub title: Style,
    pub heading: Style,
    pub subheading: Style,
    pub accent: Style,
    pub card_border: Style,
    pub post_border: Style,
    pub divider: Style,
    pub bullet: Style,
    pub button: Style,
    pub button_cap: Style,
    pub alert_text: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            title: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            heading: Style::default().bold(),
            subheading: Style::default().bold().dark_gray(),
            accent: Style::default().cyan(),
            card_border: Style::default().fg(Color::Rgb(0xcc, 0xcc, 0xcc)),
            post_border: Style::default().fg(Color::Rgb(0xdd, 0xdd, 0xdd)),
            divider: Style::default().dark_gray(),
            bullet: Style::default(),
            button: Style::default().fg(Color::White).bg(BUTTON_BG).bold(),
            button_cap: Style::default().fg(BUTTON_BG),
            alert_text: Style::default().fg(Color::White).bold(),
        }
    }
}
