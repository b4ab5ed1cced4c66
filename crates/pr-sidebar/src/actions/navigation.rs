//! Navigation actions
//!
//! Generic, vim-style movement. The navigation middleware translates them
//! into sidebar cursor actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (j, down arrow)
    Next,
    /// Navigate to previous item (k, up arrow)
    Previous,
    /// Navigate to top (g)
    ToTop,
    /// Navigate to bottom (G)
    ToBottom,
}
