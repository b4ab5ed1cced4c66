//! Router Reducer
//!
//! Keeps the current path and a bounded back-history.

use crate::actions::RouterAction;
use crate::state::RouterState;

pub fn reduce(mut state: RouterState, action: &RouterAction) -> RouterState {
    match action {
        RouterAction::Navigate(path) => {
            if *path == state.current_path {
                log::debug!("Already at {}, ignoring navigation", path);
                return state;
            }
            let previous = std::mem::replace(&mut state.current_path, path.clone());
            state.history.push(previous);
            if state.history.len() > state.history_limit {
                let overflow = state.history.len() - state.history_limit;
                state.history.drain(..overflow);
            }
            log::info!("Route changed to {}", state.current_path);
        }
        RouterAction::Back => match state.history.pop() {
            Some(previous) => {
                log::info!("Route back to {}", previous);
                state.current_path = previous;
            }
            None => log::debug!("Route history empty, staying at {}", state.current_path),
        },
    }

    state
}
