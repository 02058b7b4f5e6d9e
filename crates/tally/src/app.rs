//! Interactive terminal binding
//!
//! The display mirrors `count` through a single store subscription; key
//! presses only ever dispatch actions.

use crate::keymap::{command_for_key, Command};
use crate::views;
use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use tally_config::AppConfig;
use tally_store::{counter_store, CounterState, Store, Unsubscribe};

/// Mirror `count` into a display cell through one subscription
pub fn bind_display(store: &Store<CounterState>) -> (Rc<Cell<i64>>, Unsubscribe) {
    let display = Rc::new(Cell::new(store.get_state().count));
    let observer = store.clone();
    let mirror = Rc::clone(&display);
    let unsubscribe = store.subscribe(move || mirror.set(observer.get_state().count));
    (display, unsubscribe)
}

/// Run the interactive counter until the quit key is pressed
pub fn run(config: &AppConfig) -> Result<()> {
    let store = counter_store();
    let (display, _unsubscribe) = bind_display(&store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &store, &display, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("Final state: {}", store.get_state());
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &Store<CounterState>,
    display: &Cell<i64>,
    config: &AppConfig,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(display.get(), config, area, frame);
        })?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match command_for_key(&key, &config.keys) {
                Some(Command::Dispatch(action)) => store.dispatch(action),
                Some(Command::Quit) => break,
                None => log::trace!("Unbound key: {:?}", key.code),
            }
        }
    }

    Ok(())
}
