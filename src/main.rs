mod cli;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use pow_app::{App, EventHandler, Session};
use pow_buffer::FsPersistence;
use pow_clipboard::SystemClipboard;
use pow_config::Config;
use pow_logger::LogLevel;
use pow_render::Renderer;
use pow_theme::{set_themes_dir, Theme};

use crate::cli::Cli;

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn init_logger(config: &Config, level_override: Option<&str>) {
    let Ok(log_path) = config.log_file_path() else {
        return;
    };
    let level = level_override
        .unwrap_or(config.logging.min_level.as_str())
        .parse()
        .unwrap_or(LogLevel::Info);
    pow_logger::init(log_path, level);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match load_config(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logger(&config, cli.log_level.as_deref());
    pow_logger::info("pow started");
    if let Some(err) = config_error {
        pow_logger::warn(format!("Using default config: {:#}", err));
    }
    if let Some(level) = cli.log_level.as_deref() {
        if LogLevel::from_str(level).is_err() {
            pow_logger::warn(format!("Unknown log level '{}', using info", level));
        }
    }

    // Initialize theme system with themes directory from config
    if let Ok(themes_dir) = Config::get_themes_dir() {
        set_themes_dir(themes_dir);
    }
    let theme = Theme::get_by_name(&config.general.theme);

    let mut session =
        Session::open(&FsPersistence, cli.file, 0).with_tab_size(config.editor.tab_size);
    let clipboard = SystemClipboard::new(Duration::from_millis(config.clipboard.timeout_ms));
    let mut app = App::new(
        Box::new(FsPersistence),
        Box::new(clipboard),
        Box::new(EventHandler::new()),
        config.editor.redraw_interval,
    );
    let mut renderer = Renderer::new(theme);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut session, &mut terminal, |frame, session| {
        renderer.render(frame, session);
    });

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print error if there was one
    if let Err(err) = result {
        pow_logger::error(format!("Fatal: {:#}", err));
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
