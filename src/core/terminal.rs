//! Terminal rendering and event loop for the globber.
//!
//! Handles setup/teardown of raw mode and the alternate screen, and runs the
//! turn based loop: size, list, lay out, paint, then block on one key.

use crate::app::{KeypressResult, Session, input_from_key};
use crate::core::layout::Viewport;
use crate::core::proc::open_with_default_handler;
use crate::ui;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;

/// Initializes the terminal in raw mode and alternate sceen and runs the main event loop.
///
/// Blocks until quit. Returns an std::io::Error if terminal setup or teardown fails.
pub fn run_terminal(session: &mut Session) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// One frame per key event. Returns on quit.
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, session: &mut Session) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        let size = terminal.size()?;
        let viewport = Viewport::new(size.height as usize, size.width as usize);
        let listing = session.begin_frame(viewport);

        terminal.draw(|f| ui::render(f, session, &listing))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match session.handle_input(input_from_key(key), &listing) {
                    KeypressResult::Quit => break,
                    KeypressResult::Open(path) => {
                        if let Err(e) = open_with_default_handler(&path) {
                            tracing::warn!(path = %path.display(), error = %e, "cannot open file");
                        }
                    }
                    KeypressResult::Continue => {}
                }
            }
            // Resize and everything else just start the next frame.
            _ => {}
        }
    }
    Ok(())
}
