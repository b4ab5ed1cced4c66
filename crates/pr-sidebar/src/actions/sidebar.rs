//! Sidebar actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    CursorNext,
    CursorPrevious,
    CursorToTop,
    CursorToBottom,
    /// Primary press on the entry at this index (mouse down or Enter)
    EntryPressed(usize),
}
