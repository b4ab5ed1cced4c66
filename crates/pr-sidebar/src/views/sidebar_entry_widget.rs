//! Generic sidebar entry widget
//!
//! Draws any [`EntryProps`], not only pull requests:
//!
//! ```text
//! ▌Fix bug                  local applied
//!  A  Alice · 2024-03-01 12:30
//! ```
//!
//! Terminals can't show avatar images, so the avatar group renders one
//! colored initial per avatar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::Theme;
use crate::view_models::{Avatar, EntryProps};

const SELECTED_MARKER: &str = "▌";

pub struct SidebarEntryWidget<'a> {
    props: &'a EntryProps,
    is_cursor: bool,
    theme: &'a Theme,
    timestamp_format: &'a str,
}

impl<'a> SidebarEntryWidget<'a> {
    pub fn new(props: &'a EntryProps, theme: &'a Theme, timestamp_format: &'a str) -> Self {
        Self {
            props,
            is_cursor: false,
            theme,
            timestamp_format,
        }
    }

    pub fn cursor(mut self, is_cursor: bool) -> Self {
        self.is_cursor = is_cursor;
        self
    }

    fn base_style(&self) -> Style {
        if self.props.selected {
            self.theme.entry_selected()
        } else if self.is_cursor {
            self.theme.entry_cursor()
        } else {
            self.theme.text()
        }
    }

    fn title_line(&self) -> Line<'a> {
        let props = self.props;
        let marker = if props.selected {
            Span::styled(SELECTED_MARKER, Style::default().fg(self.theme.accent_primary))
        } else {
            Span::raw(" ")
        };

        let mut spans = vec![
            marker,
            Span::styled(
                props.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];

        let badges = props
            .local
            .then_some(("local", self.theme.accent_secondary))
            .into_iter()
            .chain(props.applied.then_some(("applied", self.theme.status_success)));
        for (label, color) in badges {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", label), self.theme.badge(color)));
        }
        for remote in &props.remotes {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(remote.as_str(), self.theme.muted()));
        }
        if props.pull_request.is_some() {
            spans.push(Span::styled(" PR", Style::default().fg(self.theme.accent_secondary)));
        }

        Line::from(spans)
    }

    fn detail_line(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(avatar_group(&self.props.avatars, self.theme));
        if !self.props.avatars.is_empty() {
            spans.push(Span::raw(" "));
        }
        if let Some(last_commit) = &self.props.last_commit {
            let style = if self.props.selected {
                Style::default()
            } else {
                self.theme.muted()
            };
            spans.push(Span::styled(
                last_commit.describe(self.timestamp_format),
                style,
            ));
        }
        Line::from(spans)
    }
}

/// One badge per avatar: the uppercased initial of its name
pub fn avatar_group<'a>(avatars: &[Avatar], theme: &Theme) -> Vec<Span<'a>> {
    avatars
        .iter()
        .map(|avatar| {
            let initial = avatar
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect::<String>())
                .unwrap_or_else(|| "?".to_string());
            Span::styled(format!(" {} ", initial), theme.avatar(&avatar.name))
        })
        .collect()
}

impl Widget for SidebarEntryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        buf.set_style(area, self.base_style());
        self.title_line().render(Rect { height: 1, ..area }, buf);

        if area.height > 1 {
            let detail_area = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            self.detail_line().render(detail_area, buf);
        }
    }
}
