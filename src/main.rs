use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tracing::{error, info};

use profile_dashboard::config::{DashConfig, resolve_profile};
use profile_dashboard::icons::GlyphTable;
use profile_dashboard::logging;
use profile_dashboard::model::ProfileData;
use profile_dashboard::screen::ui;

struct App {
    data: ProfileData,
    icons: GlyphTable,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    fn new(data: ProfileData, tick_rate: Duration) -> Self {
        let icons = GlyphTable::from(&data.glyphs);
        Self {
            data,
            icons,
            tick_rate,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
        }
    }
}

fn main() -> Result<()> {
    let config = DashConfig::from_env(std::env::args().nth(1).map(PathBuf::from));
    logging::init(config.log_path.as_deref())?;

    let data = resolve_profile(&config)?;
    let mut app = App::new(data, config.tick_rate);

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    info!("dashboard started");
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "dashboard exited with error");
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app.data, &app.icons))?;

        if event::poll(app.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
