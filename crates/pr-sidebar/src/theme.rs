use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,

    // Entry colors
    /// Entry whose route is the current route
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// Entry under the keyboard cursor
    pub cursor_bg: Color,

    /// Avatar badge backgrounds, picked by name
    pub avatar_palette: [Color; 6],
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,

            selected_bg: tailwind::BLUE.c600,
            selected_fg: Color::White,
            cursor_bg: tailwind::SLATE.c800,

            avatar_palette: [
                tailwind::PURPLE.c600,
                tailwind::ORANGE.c600,
                tailwind::GREEN.c700,
                tailwind::BLUE.c700,
                tailwind::AMBER.c600,
                tailwind::RED.c600,
            ],
        }
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the entry matching the current route
    pub fn entry_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the entry under the cursor
    pub fn entry_cursor(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.cursor_bg)
    }

    /// Style for badges (local, applied, remotes)
    pub fn badge(&self, bg_color: Color) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(bg_color)
            .add_modifier(Modifier::BOLD)
    }

    /// Badge style for an avatar, stable for the same name
    pub fn avatar(&self, name: &str) -> Style {
        let hash = name.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
        self.badge(self.avatar_palette[hash % self.avatar_palette.len()])
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
