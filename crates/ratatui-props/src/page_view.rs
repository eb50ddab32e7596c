use crate::component::Component;
use crate::input::InputEvent;
use crate::input::Key;
use crate::input::KeyCode;
use crate::page::Page;
use crate::render;
use crate::theme::Theme;
use crate::viewport::ViewportState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    None,
    Redraw,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCommand {
    Quit,
    Down,
    Up,
    PageDown,
    PageUp,
    Top,
    Bottom,
}

impl PageCommand {
    /// `(keys, description)` for the help bar. Paging is left out to keep the bar short.
    pub fn hint(self) -> Option<(&'static str, &'static str)> {
        match self {
            PageCommand::Quit => Some(("q", "quit")),
            PageCommand::Down => Some(("j/↓", "down")),
            PageCommand::Up => Some(("k/↑", "up")),
            PageCommand::Top => Some(("g", "top")),
            PageCommand::Bottom => Some(("G", "bottom")),
            PageCommand::PageDown | PageCommand::PageUp => None,
        }
    }
}

/// Key to command table. Earlier entries win when a key is listed twice.
#[derive(Clone, Debug)]
pub struct PageKeymap {
    bindings: Vec<(Key, PageCommand)>,
}

impl Default for PageKeymap {
    fn default() -> Self {
        use PageCommand::*;

        Self {
            bindings: vec![
                (Key::char('q'), Quit),
                (Key::plain(KeyCode::Esc), Quit),
                (Key::ctrl('c'), Quit),
                (Key::char('j'), Down),
                (Key::plain(KeyCode::Down), Down),
                (Key::char('k'), Up),
                (Key::plain(KeyCode::Up), Up),
                (Key::plain(KeyCode::PageDown), PageDown),
                (Key::char(' '), PageDown),
                (Key::ctrl('d'), PageDown),
                (Key::plain(KeyCode::PageUp), PageUp),
                (Key::ctrl('u'), PageUp),
                (Key::char('g'), Top),
                (Key::plain(KeyCode::Home), Top),
                (Key::char('G'), Bottom),
                (Key::plain(KeyCode::End), Bottom),
            ],
        }
    }
}

impl PageKeymap {
    pub fn command_for(&self, key: &Key) -> Option<PageCommand> {
        self.bindings
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, command)| *command)
    }

    /// Bound commands, each once, in the order they first appear.
    pub fn commands(&self) -> Vec<PageCommand> {
        let mut out: Vec<PageCommand> = Vec::new();
        for (_, command) in &self.bindings {
            if !out.contains(command) {
                out.push(*command);
            }
        }
        out
    }
}

#[derive(Clone, Debug)]
pub struct PageViewOptions {
    pub show_scrollbar: bool,
    pub style: Style,
    pub scrollbar_style: Style,
    pub keymap: PageKeymap,
}

impl Default for PageViewOptions {
    fn default() -> Self {
        Self {
            show_scrollbar: true,
            style: Style::default(),
            scrollbar_style: Style::default(),
            keymap: PageKeymap::default(),
        }
    }
}

/// A scrollable view over a [`Page`].
///
/// Page lines are cached per content width; resizing re-renders the page, scrolling does not.
pub struct PageView {
    pub viewport: ViewportState,
    options: PageViewOptions,
    page: Page,
    cached_width: Option<u16>,
    lines: Vec<Line<'static>>,
}

impl PageView {
    pub fn new(page: Page) -> Self {
        Self::with_options(page, PageViewOptions::default())
    }

    pub fn with_options(page: Page, options: PageViewOptions) -> Self {
        Self {
            viewport: ViewportState::default(),
            options,
            page,
            cached_width: None,
            lines: Vec::new(),
        }
    }

    pub fn keymap(&self) -> &PageKeymap {
        &self.options.keymap
    }

    /// Rendered page lines for `width`, re-rendering only when the width changed.
    pub fn lines_for_width(&mut self, width: u16, theme: &Theme) -> &[Line<'static>] {
        if self.cached_width != Some(width) {
            self.lines = self.page.lines(width, theme);
            self.cached_width = Some(width);
        }
        &self.lines
    }

    pub fn handle_event(&mut self, event: InputEvent) -> PageAction {
        match event {
            InputEvent::Resize { .. } => PageAction::Redraw,
            InputEvent::Key(key) => {
                let Some(command) = self.options.keymap.command_for(&key) else {
                    return PageAction::None;
                };

                let before = self.viewport.y;
                match command {
                    PageCommand::Quit => return PageAction::Quit,
                    PageCommand::Down => self.viewport.scroll_y_by(1),
                    PageCommand::Up => self.viewport.scroll_y_by(-1),
                    PageCommand::PageDown => self.viewport.page_down(),
                    PageCommand::PageUp => self.viewport.page_up(),
                    PageCommand::Top => self.viewport.to_top(),
                    PageCommand::Bottom => self.viewport.to_bottom(),
                }

                if self.viewport.y != before {
                    PageAction::Redraw
                } else {
                    PageAction::None
                }
            }
        }
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (content_area, scrollbar_x) = if self.options.show_scrollbar && area.width >= 2 {
            (
                Rect::new(area.x, area.y, area.width - 1, area.height),
                Some(area.x + area.width - 1),
            )
        } else {
            (area, None)
        };

        self.lines_for_width(content_area.width, theme);
        self.viewport
            .set_viewport(content_area.width, content_area.height);
        self.viewport.set_content(
            content_area.width as u32,
            self.lines.len().min(u32::MAX as usize) as u32,
        );

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        render::render_lines(
            content_area,
            buf,
            &self.lines,
            self.viewport.y as usize,
            0,
            base_style,
        );

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, area.y, 1, area.height),
                buf,
                &self.viewport,
                self.options.scrollbar_style,
            );
        }
    }
}
