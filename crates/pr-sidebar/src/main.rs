use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod context;
mod dispatcher;
mod domain_models;
mod error;
mod logger;
mod middleware;
mod reducers;
mod router;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::{Action, GlobalAction, PullRequestAction};
use middleware::{
    keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware,
    mouse_middleware::MouseMiddleware, navigation_middleware::NavigationMiddleware,
    pull_request_middleware::PullRequestMiddleware, sidebar_middleware::SidebarMiddleware,
};
use pr_sidebar_config::AppConfig;
use state::AppState;
use store::Store;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting pr-sidebar (logging to {})", log_file.display());

    let app_config = AppConfig::load();

    // Initialize store with middleware (they execute in this order)
    let mut store = Store::new(AppState::new(app_config));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(MouseMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(SidebarMiddleware::new()));
    store.add_middleware(Box::new(PullRequestMiddleware::new()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting pr-sidebar");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize {
        width: size.width,
        height: size.height,
    }));
    store.dispatch(Action::PullRequest(PullRequestAction::Load));

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Mouse(mouse) => {
                    store.dispatch(Action::Global(GlobalAction::Mouse(mouse)));
                }
                Event::Resize(width, height) => {
                    store.dispatch(Action::Global(GlobalAction::Resize { width, height }));
                }
                _ => {}
            }
        }
    }

    Ok(())
}
