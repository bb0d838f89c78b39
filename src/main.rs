//! Kamayan - Restaurant Reservations
//!
//! A terminal front end for Kamayan Filipino Restaurant: home and about
//! screens plus table reservations that are kept on this device.

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

use kamayan::application::{App, AppMode};
use kamayan::domain::ReservationStore;
use kamayan::infrastructure::{init_logging, FileStorage, KamayanConfig};
use kamayan::presentation::{render_ui, InputHandler};

/// Entry point for the Kamayan terminal application.
///
/// Loads configuration, opens the reservation store in the configured data
/// directory, sets up the terminal and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the log file cannot be
/// opened, or terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = KamayanConfig::load()?;
    init_logging(&config.logging)?;
    info!(
        data_dir = %config.storage.data_dir.display(),
        slot = %config.storage.slot,
        "starting kamayan"
    );

    let storage = FileStorage::new(&config.storage.data_dir);
    let store = ReservationStore::with_slot(Box::new(storage), config.storage.slot.clone());
    let mut app = App::new(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "terminal loop failed");
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Redraws after every key press. 'q' quits while browsing; in the form
/// it is ordinary text.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Browse => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
