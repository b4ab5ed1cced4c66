//! Screen layout and sidebar geometry
//!
//! Shared by rendering and mouse hit testing, so a press always lands on the
//! entry that was drawn there.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::Block;

/// Terminal rows per sidebar entry (title line, author line)
pub const ENTRY_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub sidebar: Rect,
    pub detail: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, sidebar_width: u16) -> Self {
        let [main, status_bar] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [sidebar, detail] =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(main);

        Self {
            sidebar,
            detail,
            status_bar,
        }
    }

    /// Area inside the sidebar border where entries are drawn
    pub fn sidebar_list(&self) -> Rect {
        Block::bordered().inner(self.sidebar)
    }
}

/// Number of entries that fit completely into `list`
pub fn visible_entries(list: Rect) -> usize {
    (list.height / ENTRY_HEIGHT) as usize
}

/// First entry to draw so that the cursor stays visible
pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 || cursor < visible {
        0
    } else {
        cursor + 1 - visible
    }
}

/// Rect of the `slot`-th visible entry
pub fn entry_area(list: Rect, slot: usize) -> Rect {
    Rect {
        y: list.y + slot as u16 * ENTRY_HEIGHT,
        height: ENTRY_HEIGHT,
        ..list
    }
}

/// Entry index under a terminal cell, if the cell is on a fully drawn entry
pub fn entry_index_at(list: Rect, column: u16, row: u16, offset: usize) -> Option<usize> {
    if !list.contains(Position::new(column, row)) {
        return None;
    }
    let slot = ((row - list.y) / ENTRY_HEIGHT) as usize;
    (slot < visible_entries(list)).then_some(slot + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_split() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30), 40);
        assert_eq!(layout.sidebar, Rect::new(0, 0, 40, 29));
        assert_eq!(layout.detail, Rect::new(40, 0, 60, 29));
        assert_eq!(layout.status_bar, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.sidebar_list(), Rect::new(1, 1, 38, 27));
    }

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(9, 5), 5);
        assert_eq!(scroll_offset(3, 0), 0);
    }

    #[test]
    fn test_entry_index_at() {
        let list = Rect::new(1, 1, 38, 5); // two full entries, one spare row
        assert_eq!(entry_index_at(list, 1, 1, 0), Some(0));
        assert_eq!(entry_index_at(list, 38, 2, 0), Some(0));
        assert_eq!(entry_index_at(list, 10, 3, 0), Some(1));
        assert_eq!(entry_index_at(list, 10, 3, 4), Some(5));
        // Spare row below the last full entry
        assert_eq!(entry_index_at(list, 10, 5, 0), None);
        // Border and outside
        assert_eq!(entry_index_at(list, 0, 1, 0), None);
        assert_eq!(entry_index_at(list, 39, 1, 0), None);
        assert_eq!(entry_index_at(list, 10, 0, 0), None);
    }

    #[test]
    fn test_entry_area() {
        let list = Rect::new(1, 1, 38, 10);
        assert_eq!(entry_area(list, 0), Rect::new(1, 1, 38, 2));
        assert_eq!(entry_area(list, 2), Rect::new(1, 5, 38, 2));
    }
}
