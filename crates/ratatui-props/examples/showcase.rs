use crossterm::event::Event;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui_props::crossterm_input::input_event_from_crossterm;
use ratatui_props::help::HelpBar;
use ratatui_props::page::Page;
use ratatui_props::page_view::PageAction;
use ratatui_props::page_view::PageView;
use ratatui_props::theme::Theme;
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let theme = Theme::default();
    let mut view = PageView::new(Page::showcase());
    let help = HelpBar::new(view.keymap(), &theme);

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
        let ev: Event = crossterm::event::read()?;
        let Some(ev) = input_event_from_crossterm(ev) else {
            continue;
        };
        if view.handle_event(ev) == PageAction::Quit {
            return Ok(());
        }
    }
}
