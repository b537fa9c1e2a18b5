use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod actions;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use dapp_shell_config::AppConfig;
use middleware::{ContactsMiddleware, KeyboardMiddleware, LoggingMiddleware, SnackbarMiddleware};
use state::AppState;
use store::Store;
use views::LoadingIndicator;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting dapp-shell, logging to {}", log_file.display());

    let config = AppConfig::load();
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));

    let mut store = Store::new(AppState::default().with_indicator(indicator_from_config(&config)));

    // Middleware runs in insertion order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(ContactsMiddleware::new(
        config.contacts_file.as_ref().map(PathBuf::from),
    )));
    store.add_middleware(Box::new(SnackbarMiddleware::new(config.snackbar_auto_close)));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    store.dispatch(Action::Bootstrap(BootstrapAction::Start));
    let result = run_app(&mut terminal, &mut store, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {}", err);
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting dapp-shell");
    Ok(())
}

/// Indicator parameters from config; non-positive sizes fall back to the default
fn indicator_from_config(config: &AppConfig) -> LoadingIndicator {
    let default = LoadingIndicator::default();
    let size = if config.indicator_size.is_finite() && config.indicator_size > 0.0 {
        config.indicator_size
    } else {
        log::warn!(
            "Ignoring indicator_size = {}, using {}",
            config.indicator_size,
            default.size
        );
        default.size
    };
    LoadingIndicator::new(config.indicator_class.clone(), size)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            store.dispatch(Action::Global(GlobalAction::Tick));
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_from_config() {
        let config = AppConfig {
            indicator_class: "bordered".to_string(),
            indicator_size: 3.0,
            ..AppConfig::default()
        };
        let indicator = indicator_from_config(&config);
        assert_eq!(indicator.display_size(), 180.0);
        assert!(indicator.node().has_class("bordered"));
    }

    #[test]
    fn test_indicator_rejects_non_positive_size() {
        for size in [0.0, -1.0, f64::NAN] {
            let config = AppConfig {
                indicator_size: size,
                ..AppConfig::default()
            };
            assert_eq!(indicator_from_config(&config).size, 2.0);
        }
    }
}
