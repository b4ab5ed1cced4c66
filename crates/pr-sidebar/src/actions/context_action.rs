//! Context-sensitive actions
//!
//! Semantic actions that represent user intent, not specific operations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on the focused item (Enter key).
    /// For the sidebar this is the same as clicking the entry.
    Confirm,
    /// Go back to the previous route (Backspace, b)
    Back,
}
