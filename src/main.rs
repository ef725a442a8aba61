use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use afv::buffer::TextBuffer;
use afv::config::ViewerConfig;
use afv::loader::{self, DEFAULT_BLOCK_SIZE};
use afv::ui::{self, viewport::Viewport};

/// A terminal file viewer backed by a piece table
#[derive(Parser, Debug)]
#[command(name = "afv", version, about, long_about = None)]
struct Cli {
    /// File to view
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Bytes read per chunk when loading the file
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// First line to show (0-based)
    #[arg(long, value_name = "N", default_value_t = 0)]
    start_line: usize,

    /// Write log output to a file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl From<Cli> for ViewerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            path: Some(cli.file),
            block_size: cli.block_size,
            start_line: cli.start_line,
            log_file: cli.log_file,
        }
    }
}

struct App {
    should_quit: bool,
    buffer: TextBuffer,
    viewport: Viewport,
    title: String,
}

impl App {
    fn load(config: &ViewerConfig) -> Result<Self> {
        let mut app = Self {
            should_quit: false,
            buffer: TextBuffer::new(),
            viewport: Viewport::new(config.start_line, 0, 0),
            title: String::from("afv"),
        };

        if let Some(path) = &config.path {
            app.buffer = loader::load_path(path, config.block_size)
                .with_context(|| format!("failed to load {}", path.display()))?;
            app.title = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
                .to_string();
        }
        app.viewport.clamp(app.buffer.total_lines());

        Ok(app)
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let total_lines = self.buffer.total_lines();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.viewport.scroll_down_page(total_lines)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.viewport.scroll_up_page()
            }
            KeyCode::Char('j') | KeyCode::Down => self.viewport.scroll_down(total_lines),
            KeyCode::Char('k') | KeyCode::Up => self.viewport.scroll_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.viewport.scroll_down_page(total_lines),
            KeyCode::PageUp => self.viewport.scroll_up_page(),
            _ => {}
        }
    }
}

/// Filter from `RUST_LOG`-style directives; `warn` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = log_filter(&std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    // stderr is hidden behind the alternate screen, so logs go to a file or nowhere.
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.show_cursor()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn run(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    loop {
        let size = terminal.size()?;
        let area = ui::text_area(ratatui::layout::Rect::new(0, 0, size.width, size.height));
        app.viewport
            .resize(usize::from(area.height), usize::from(area.width));

        terminal.draw(|frame| ui::render(frame, &app.buffer, &app.viewport, &app.title))?;

        if app.should_quit {
            break;
        }

        // Block until the next key; nothing changes on screen in between.
        let event = event::read()?;
        app.handle_event(event);
        debug!(start_line = app.viewport.start_line, "redraw");
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = ViewerConfig::from(Cli::parse());
    config.validate()?;
    init_logging(config.log_file.as_ref())?;

    let mut app = App::load(&config)?;
    info!(
        lines = app.buffer.total_lines(),
        pieces = app.buffer.piece_count(),
        "starting viewer"
    );

    // Set up panic hook to restore terminal
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
        default_panic(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run(&mut app, &mut terminal);
    restore_terminal(terminal)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_keeps_bare_level() {
        assert_eq!(log_filter("debug").to_string(), "debug");
        assert_eq!(log_filter("trace").to_string(), "trace");
    }

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter("").to_string(), "warn");
    }

    #[test]
    fn test_log_filter_keeps_target_directive() {
        assert!(log_filter("afv=debug").to_string().contains("afv=debug"));
    }
}
