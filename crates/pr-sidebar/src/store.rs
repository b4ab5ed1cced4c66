use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }

        // Process any actions dispatched by middleware
        let pending: Vec<Action> = self.action_rx.try_iter().collect();
        for action in pending {
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ContextAction, GlobalAction, SidebarAction};
    use crate::domain_models::{Author, Project, PullRequest};
    use crate::middleware::{
        keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware,
        mouse_middleware::MouseMiddleware, navigation_middleware::NavigationMiddleware,
        pull_request_middleware::PullRequestMiddleware, sidebar_middleware::SidebarMiddleware,
    };
    use crate::view_models::{SidebarContentViewModel, SidebarViewModel};
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    fn store() -> Store {
        let mut state = AppState::default();
        state.project = Some(Project::new("proj1"));
        state.router.current_path = "/proj1".to_string();

        let mut store = Store::new(state);
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(KeyboardMiddleware::new()));
        store.add_middleware(Box::new(MouseMiddleware::new()));
        store.add_middleware(Box::new(NavigationMiddleware::new()));
        store.add_middleware(Box::new(SidebarMiddleware::new()));
        store.add_middleware(Box::new(PullRequestMiddleware::new()));

        store.dispatch(Action::PullRequest(crate::actions::PullRequestAction::Loaded(vec![
            PullRequest::new(42, "Fix bug").with_author(
                Author::named("Alice").with_gravatar_url("http://x/a.png"),
            ),
            PullRequest::new(7, "No author"),
        ])));
        store
    }

    fn key(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn selected_flags(state: &AppState) -> Vec<bool> {
        match SidebarViewModel::from_state(state).content {
            SidebarContentViewModel::Entries(rows) => {
                rows.iter().map(|r| r.entry.props.selected).collect()
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_enter_navigates_and_selects() {
        let mut store = store();
        assert_eq!(selected_flags(store.state()), vec![false, false]);

        store.dispatch(key(KeyCode::Char('j')));
        store.dispatch(key(KeyCode::Enter));

        assert_eq!(store.state().sidebar.cursor, 1);
        assert_eq!(store.state().router.current_path, "/proj1/pull/7");
        assert_eq!(selected_flags(store.state()), vec![false, true]);
    }

    #[test]
    fn test_back_restores_selection() {
        let mut store = store();
        store.dispatch(Action::Sidebar(SidebarAction::EntryPressed(0)));
        store.dispatch(Action::Sidebar(SidebarAction::EntryPressed(1)));
        assert_eq!(store.state().router.current_path, "/proj1/pull/7");

        store.dispatch(Action::ViewContext(ContextAction::Back));
        assert_eq!(store.state().router.current_path, "/proj1/pull/42");
        assert_eq!(selected_flags(store.state()), vec![true, false]);
    }

    #[test]
    fn test_mouse_press_navigates() {
        let mut store = store();
        store.dispatch(Action::Global(GlobalAction::Resize {
            width: 100,
            height: 30,
        }));

        // First entry: inside the sidebar border
        store.dispatch(Action::Global(GlobalAction::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 1,
            modifiers: KeyModifiers::NONE,
        })));

        assert_eq!(store.state().router.current_path, "/proj1/pull/42");
        assert_eq!(store.state().sidebar.cursor, 0);
    }

    #[test]
    fn test_quit_key() {
        let mut store = store();
        store.dispatch(key(KeyCode::Char('q')));
        assert!(!store.state().running);
    }
}
