//! Navigation service
//!
//! Views never touch router state directly. They get something that can
//! `navigate`, and the router reducer does the rest.

use crate::actions::{Action, RouterAction};
use crate::dispatcher::Dispatcher;

/// Client-side route change. Fire-and-forget.
pub trait Navigator {
    fn navigate(&self, url: &str);
}

impl Navigator for Dispatcher {
    fn navigate(&self, url: &str) {
        log::debug!("Navigating to {}", url);
        self.dispatch(Action::Router(RouterAction::Navigate(url.to_string())));
    }
}
