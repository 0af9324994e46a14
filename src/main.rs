//! Tag label demo - Entry Point

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, MouseButton, MouseEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
    text::Line,
    widgets::Paragraph,
};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use tracing::info;

use taglabel::config::load_config;
use taglabel::layout::GridLayout;
use taglabel::model::{StyledText, TagKind};
use taglabel::state::TouchPhase;
use taglabel::widget::TagLabel;

const DEMO_TEXT: &str =
    "Shipped #rustconf notes with @alice: https://docs.rs and www.example.com. Tap around!";

/// Interactive demo for the tappable tag label
#[derive(Parser, Debug)]
#[command(name = "taglabel")]
#[command(version)]
#[command(about = "TUI demo: tap hashtags, mentions, and URLs in a text label")]
pub struct Args {
    /// Text to display (a built-in sample if not provided)
    pub text: Option<String>,

    /// Additional custom regex pattern to detect (repeatable)
    #[arg(short, long)]
    pub pattern: Vec<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Errors that can occur while running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// IO error during terminal operations
    #[error("terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] taglabel::config::ConfigError),

    /// Logging setup error
    #[error(transparent)]
    Logging(#[from] taglabel::logging::LoggingError),
}

fn main() -> Result<(), DemoError> {
    let args = Args::parse();

    let config = load_config(args.config.clone())?;
    let log_file = args.log_file.clone().unwrap_or_else(|| config.log_file.clone());
    taglabel::logging::init(&log_file)?;

    info!(?args, "demo starting");

    let mut kinds = vec![TagKind::Mention, TagKind::Hashtag, TagKind::Url];
    kinds.extend(args.pattern.iter().cloned().map(TagKind::Custom));

    let mut label = TagLabel::new(kinds, &config);
    let text = args.text.unwrap_or_else(|| DEMO_TEXT.to_string());
    label.set_text(StyledText::new(&text));

    let status: Rc<RefCell<String>> = Rc::new(RefCell::new("tap a tag (q to quit)".to_string()));
    let tag_status = Rc::clone(&status);
    label.on_tag_tapped(move |text, kind| {
        *tag_status.borrow_mut() = format!("tapped {kind}: {text}");
    });
    let empty_status = Rc::clone(&status);
    label.on_empty_tapped(move |context| {
        *empty_status.borrow_mut() = match context {
            Some(row) => format!("empty tap (context {row})"),
            None => "empty tap".to_string(),
        };
    });

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut label, &text, &status);
    restore_terminal()?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, DemoError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(crossterm::event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), DemoError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    label: &mut TagLabel,
    text: &str,
    status: &Rc<RefCell<String>>,
) -> Result<(), DemoError> {
    loop {
        let size = terminal.size()?;
        let text_area = Rect::new(0, 0, size.width, size.height.saturating_sub(1));
        let layout = GridLayout::new(text, text_area);

        let lines = label.render_lines(&layout);
        let status_line = Line::from(status.borrow().clone());
        terminal.draw(|frame| {
            frame.render_widget(Paragraph::new(lines), text_area);
            let status_area = Rect::new(0, text_area.height, size.width, 1);
            frame.render_widget(Paragraph::new(status_line), status_area);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                    return Ok(());
                }
                Event::Mouse(mouse) => {
                    let phase = match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => Some(TouchPhase::Began),
                        MouseEventKind::Drag(MouseButton::Left) => Some(TouchPhase::Moved),
                        MouseEventKind::Up(MouseButton::Left) => Some(TouchPhase::Ended),
                        _ => None,
                    };
                    if let Some(phase) = phase {
                        let point = Position::new(mouse.column, mouse.row);
                        label.touch(phase, point, &layout, Instant::now());
                    }
                }
                _ => {}
            }
        }
        label.tick(Instant::now());
    }
}
