use anyhow::Context;
use anyhow::Result;
use crossterm::cursor::Show;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui_props::component::Component;
use ratatui_props::crossterm_input::input_event_from_crossterm;
use ratatui_props::help::HelpBar;
use ratatui_props::page::Page;
use ratatui_props::page_view::PageAction;
use ratatui_props::page_view::PageView;
use ratatui_props::page_view::PageViewOptions;
use ratatui_props::text;
use ratatui_props::theme::Theme;
use std::io;
use std::io::Write;
use std::time::Duration;

use crate::config::UiConfig;

/// Writes `page` as plain text, one rendered line per output line.
pub fn dump(page: &Page, width: u16, out: &mut impl Write) -> Result<()> {
    let theme = Theme::default();
    for line in page.lines(width, &theme) {
        writeln!(out, "{}", text::line_to_plain(&line).trim_end())?;
    }
    out.flush()?;
    Ok(())
}

/// Runs `F` when dropped, so terminal state is put back on every exit path.
struct RestoreOnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

fn restore_terminal() {
    if let Err(err) = crossterm::execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!(%err, "failed to leave alternate screen");
    }
    if let Err(err) = disable_raw_mode() {
        tracing::warn!(%err, "failed to disable raw mode");
    }
}

pub fn run_tui(page: Page, ui: &UiConfig) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let _restore = RestoreOnDrop(restore_terminal);

    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    event_loop(&mut terminal, page, ui)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    page: Page,
    ui: &UiConfig,
) -> Result<()> {
    let theme = Theme::default();
    let mut view = PageView::with_options(
        page,
        PageViewOptions {
            show_scrollbar: ui.show_scrollbar,
            scrollbar_style: theme.text_muted,
            ..PageViewOptions::default()
        },
    );
    let help = HelpBar::new(view.keymap(), &theme);
    tracing::info!("tui started");

    loop {
        terminal.draw(|f| {
            let [body, footer] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(f.area());
            view.render_ref(body, f.buffer_mut(), &theme);
            help.render_ref(footer, f.buffer_mut());
        })?;

        if !crossterm::event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Some(ev) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        match view.handle_event(ev) {
            PageAction::Quit => {
                tracing::info!("quit requested");
                return Ok(());
            }
            PageAction::Redraw | PageAction::None => {}
        }
    }
}
