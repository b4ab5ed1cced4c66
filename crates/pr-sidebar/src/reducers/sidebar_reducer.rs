//! Sidebar Reducer
//!
//! Cursor movement over the loaded pull requests.

use crate::actions::SidebarAction;
use crate::state::SidebarState;

pub fn reduce(mut state: SidebarState, action: &SidebarAction) -> SidebarState {
    let len = state.pull_requests.len();
    if len == 0 {
        return state;
    }

    match action {
        SidebarAction::CursorNext => {
            state.cursor = (state.cursor + 1) % len;
        }
        SidebarAction::CursorPrevious => {
            state.cursor = if state.cursor == 0 {
                len - 1
            } else {
                state.cursor - 1
            };
        }
        SidebarAction::CursorToTop => {
            state.cursor = 0;
        }
        SidebarAction::CursorToBottom => {
            state.cursor = len - 1;
        }
        SidebarAction::EntryPressed(index) => {
            state.cursor = (*index).min(len - 1);
        }
    }

    state
}
