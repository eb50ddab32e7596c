mod app;
mod config;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::DemoConfig;

#[derive(Parser, Debug)]
#[command(name = "props-demo")]
#[command(version)]
#[command(about = "Showcase of prop-driven ratatui components")]
struct Args {
    /// Config file (TOML). Defaults to <config dir>/ratatui-props/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the page as plain text instead of opening the TUI
    #[arg(short, long)]
    dump: bool,

    /// Width used by --dump
    #[arg(short, long, default_value_t = 80)]
    width: u16,

    /// Hide the scrollbar
    #[arg(long)]
    no_scrollbar: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DemoConfig::load_from(path)?,
        None => DemoConfig::load()?,
    };
    if args.no_scrollbar {
        config.ui.show_scrollbar = false;
    }

    let page = config.page();
    tracing::debug!(sections = page.sections.len(), "page assembled");

    if args.dump {
        let stdout = std::io::stdout();
        return app::dump(&page, args.width, &mut stdout.lock());
    }

    app::run_tui(page, &config.ui)
}
