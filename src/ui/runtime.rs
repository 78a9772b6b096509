use crate::config::Config;
use crate::mutators::ListMutators;
use crate::settings::SettingsManager;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the interactive UI until the user quits.
///
/// Pending debounced saves are flushed before returning, also when the loop
/// ends because the input thread died.
pub fn run(config: &Config, mutators: ListMutators, settings: SettingsManager) -> io::Result<()> {
    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);

    let saved_tx = events.sender();
    mutators.store().subscribe(move |_| {
        let _ = saved_tx.send(AppEvent::StateSaved);
    });

    let mut app = App::new(mutators, settings, config);
    let (mut terminal, guard) = setup_terminal()?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!("UI started");

    let result = event_loop(&mut terminal, &mut app, &events, tick_rate);

    app.mutators().flush();
    drop(guard);
    tracing::info!("UI stopped");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventHandler,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        let mut hits = None;
        terminal.draw(|frame| hits = Some(draw(frame, app)))?;
        if let Some(hits) = hits {
            app.set_hit_map(hits);
        }
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(app, mouse),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::StateSaved) => app.on_state_saved(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
