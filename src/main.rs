//! # door-tui
//!
//! A terminal monitor for the EAA690 clubhouse RFID door: one window with a
//! scrollable roster list and a quit button, filled by a single fetch of the
//! door-status page at startup.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use door_tui::app::{AppState, handle_key_event, handle_mouse_event};
use door_tui::{fetch, scrape, theme, ui};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Title of the fetch-enabled door monitor window.
const DOOR_TITLE: &str = "EAA690 RFID Door";
/// Title of the fetch-less variant.
const SAMPLE_TITLE: &str = "Sample application";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "door-tui: a terminal monitor for the EAA690 clubhouse RFID door.\n\
                  Fetches the door-status page once at startup and lists everyone currently badged in."
)]
struct Args {
    /// Path to a saved door-status page, scraped instead of fetching
    #[arg(short, long)]
    file: Option<String>,

    /// URL of the door-status page
    #[arg(long, default_value = fetch::DOOR_STATUS_URL)]
    url: String,

    /// Skip the startup fetch and open an empty window
    #[arg(long)]
    offline: bool,

    /// Print the scraped roster to stdout and exit without opening a window
    #[arg(long)]
    print: bool,

    /// UI theme (dracula, solarized)
    #[arg(short, long, default_value = "dracula")]
    theme: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let theme = theme::by_name(&args.theme)
        .ok_or_else(|| anyhow::anyhow!("Unknown theme: {}", args.theme))?;

    let mut app = if args.offline {
        AppState::new(
            Vec::new(),
            theme,
            SAMPLE_TITLE.to_string(),
            String::new(),
            "offline".to_string(),
        )
    } else {
        let (html, source) = match &args.file {
            Some(path) => (fetch::load_page(path)?, path.clone()),
            None => (fetch::fetch_page(&args.url)?, args.url.clone()),
        };

        let diagnostic = scrape::diagnostic(&html);
        println!("{}", diagnostic);

        let entries = scrape::scan_roster(&html);
        if args.print {
            for entry in &entries {
                println!("{}", entry.display_line());
            }
            return Ok(());
        }

        AppState::new(entries, theme, DOOR_TITLE.to_string(), diagnostic, source)
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|f| ui::ui(f, app))?;

    loop {
        if app.should_quit {
            break;
        }

        match event::read()? {
            Event::Key(key) => {
                handle_key_event(app, key);
                terminal.draw(|f| ui::ui(f, app))?;
            }
            Event::Mouse(mouse) => {
                if handle_mouse_event(app, mouse) {
                    terminal.draw(|f| ui::ui(f, app))?;
                }
            }
            Event::Resize(_, _) => {
                terminal.draw(|f| ui::ui(f, app))?;
            }
            _ => {}
        }
    }
    Ok(())
}
