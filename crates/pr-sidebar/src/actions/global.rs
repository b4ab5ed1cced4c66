//! Global actions - not tied to any specific part of the screen

use ratatui::crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Raw mouse event (before hit testing)
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize { width: u16, height: u16 },
    /// Quit the application
    Quit,
}
