use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui_props::alert::AlertBox;
use ratatui_props::component::Component;
use ratatui_props::list::DEFAULT_MARKER;
use ratatui_props::list::ListRenderer;
use ratatui_props::list::render_rows;
use ratatui_props::page::Page;
use ratatui_props::render;
use ratatui_props::text;
use ratatui_props::theme::Theme;
use ratatui_props::user_card::UserCard;

fn showcase_plain(width: u16) -> Vec<String> {
    text::lines_to_plain(&Page::showcase().lines(width, &Theme::default()))
        .into_iter()
        .map(|l| l.trim_end().to_string())
        .collect()
}

fn position(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("missing {needle:?} in:\n{}", lines.join("\n")))
}

#[test]
fn fruit_list_renders_in_order() {
    let rows = render_rows(&["Apple", "Banana", "Cherry"], DEFAULT_MARKER);
    let values: Vec<String> = rows.into_iter().map(|r| r.value).collect();
    assert_eq!(values, ["🍎 Apple", "🍎 Banana", "🍎 Cherry"]);
}

#[test]
fn empty_list_renders_nothing() {
    let list = ListRenderer::new(Vec::<&str>::new());
    assert!(list.rows().is_empty());
    assert_eq!(list.height(80, &Theme::default()), 0);
}

#[test]
fn user_card_shows_props_verbatim() {
    let card = UserCard::new("Riya Das", "riya@example.com", "Editor");
    let plain = text::lines_to_plain(&card.lines(40, &Theme::default()));
    assert!(plain[1].contains("Riya Das"));
    assert!(plain[2].contains("Email: riya@example.com"));
    assert!(plain[3].contains("Role: Editor"));
}

#[test]
fn error_alert_is_drawn_on_red() {
    let alert = AlertBox::new("This is an error message!", "red");
    let area = Rect::new(0, 0, 40, 1);
    let mut buf = Buffer::empty(area);
    alert.render_ref(area, &mut buf, &Theme::default());
    assert_eq!(
        render::buffer_row_text(&buf, area, 0).trim(),
        "This is an error message!"
    );
    for x in 0..area.width {
        assert_eq!(buf[(x, 0u16)].bg, Color::Red);
    }
}

#[test]
fn showcase_page_reads_top_to_bottom() {
    let lines = showcase_plain(60);
    let order = [
        "👤 User List",
        "Chhoton Choudhury",
        "Email: chhoton@example.com",
        "Role: Admin",
        "Click Me",
        "Riya Das",
        "Role: Editor",
        "Submit",
        "📝 Blog Post",
        "Getting Started with React",
        "By Chhoton Choudhury",
        "React is a powerful library",
        "📋 List Renderer",
        "🍎 Apple",
        "🍎 Banana",
        "🍎 Cherry",
        "Alert Box",
        "This is a success message!",
        "This is an error message!",
    ];
    let mut last = 0;
    for needle in order {
        let at = position(&lines[last..], needle) + last;
        last = at;
    }
}

#[test]
fn showcase_is_stable_across_renders() {
    assert_eq!(showcase_plain(50), showcase_plain(50));
}

#[test]
fn showcase_fits_requested_width() {
    let theme = Theme::default();
    for width in (0..=6u16).chain([20, 45, 80]) {
        for line in Page::showcase().lines(width, &theme) {
            assert!(
                text::line_width(&line) <= width as usize,
                "width {width}: {:?}",
                text::line_to_plain(&line)
            );
        }
    }
}
