mod app;
mod bridge;
mod doc;
mod event;
mod input;
mod spsc;
mod ui;

use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::doc::Document;

#[derive(Parser)]
#[command(name = "textview", about = "Scrollable terminal text viewer")]
struct Cli {
    /// Text file to view
    file: PathBuf,

    /// Worker loop cadence in milliseconds between event drains
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.file.is_file() {
        bail!("{} is not a readable file", cli.file.display());
    }

    // ── Terminal setup ──────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Panic hook: restore terminal before printing the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(info);
    }));

    // ── Run ─────────────────────────────────────────────────────
    let result = run(&mut terminal, &cli);

    // ── Terminal teardown ───────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, cli: &Cli) -> Result<()> {
    let doc = Document::load(&cli.file)?;

    let size = terminal.size()?;
    let mut app = App::new(u32::from(size.width), u32::from(size.height));

    // The bridge pair bounds the two threads' lifetimes: the input
    // thread owns the poster, this loop owns the receiver. Dropping the
    // receiver on return is what stops the input thread.
    let (poster, events) = bridge::channel();
    input::spawn(poster);

    let tick = Duration::from_millis(cli.tick_ms);

    // ── Worker loop ─────────────────────────────────────────────
    terminal.draw(|frame| ui::draw(frame, &mut app, &doc))?;

    loop {
        // Drain to exhaustion, then terminate or draw.
        if app.drain(&events) {
            break;
        }
        // A size change reconfigures the output surface before drawing.
        if app.needs_layout {
            terminal.autoresize()?;
        }
        terminal.draw(|frame| ui::draw(frame, &mut app, &doc))?;
        thread::sleep(tick);
    }

    Ok(())
}
