//! Router actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterAction {
    /// Change the current route path
    Navigate(String),
    /// Return to the previous route path
    Back,
}
