//! neumorph - Soft UI Demo Screen
//!
//! A terminal rendition of a neumorphic ("soft UI") screen: a light/dark
//! mode toggle, a gradient title, and three vertical sliders with gradient
//! fill that adjust with a mouse drag. Built with ratatui; purely
//! decorative, with no state beyond what the screen shows.

use crate::app::App;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::error::Error;
use std::io;
use std::time::Duration;

mod app;
mod handlers;
mod models;
mod ui;

/// Application entry point: sets up the terminal (raw mode, alternate
/// screen, mouse capture), runs the event loop, and restores the terminal
/// on the way out.
fn main() -> Result<(), Box<dyn Error>> {
    color_eyre::install()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let mut should_quit = false;

    while !should_quit {
        // The completed frame's area is what the mouse handler hit-tests
        // against, so layout and input always see the same geometry.
        let area = terminal.draw(|frame| app.render(frame))?.area;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    should_quit = handlers::keys::handle_key_events(key, &mut app);
                }
                Event::Mouse(mouse) => {
                    handlers::mouse::handle_mouse_event(mouse, &mut app, area);
                }
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
