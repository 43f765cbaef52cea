mod app;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tile_compositor::logging::{init_logging, LoggingConfig};
use tile_compositor::pipeline::RenderConfig;

/// Render GeoJSON features as a layered terminal map
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// GeoJSON files to render together
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Append log records to this file (logging is off without it)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter in env_logger syntax, defaults to RUST_LOG or "info"
    #[arg(long, requires = "log_file")]
    log_filter: Option<String>,

    /// Start with settlement labels hidden
    #[arg(long)]
    no_labels: bool,

    /// Pixels kept clear around the map
    #[arg(long, default_value_t = 2.0)]
    padding: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.log_file.is_some() {
        init_logging(LoggingConfig {
            env_filter: args.log_filter.clone(),
            file: args.log_file.clone(),
        })?;
    }

    let config = RenderConfig {
        padding: args.padding,
        show_labels: !args.no_labels,
        ..RenderConfig::default()
    };
    let (width, height) = crossterm::terminal::size()?;
    // Load before taking over the terminal so errors reach stderr
    let mut app = App::new(args.paths, config, width as usize, height as usize)?;

    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear()?;

    let result = run(&mut terminal, &mut app);

    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events (not release)
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                            KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_labels(),
                            KeyCode::Char('r') | KeyCode::Char('R') => app.reload(),
                            _ => {}
                        }
                    }
                }
                Event::Resize(width, height) => {
                    app.resize(width as usize, height as usize);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
