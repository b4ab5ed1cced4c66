//! Detail pane: the routed pull request

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

use crate::state::AppState;
use crate::view_models::DetailViewModel;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = DetailViewModel::from_state(state);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.muted());

    let paragraph = match vm {
        DetailViewModel::PullRequest {
            heading,
            title,
            author,
            modified,
            avatar,
            url,
        } => {
            let label = theme.muted();
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(heading, theme.panel_title()),
                    Span::raw(" "),
                    Span::styled(title, theme.text().add_modifier(Modifier::BOLD)),
                ]),
                Line::default(),
                Line::from(vec![Span::styled("Author   ", label), Span::raw(author)]),
                Line::from(vec![Span::styled("Updated  ", label), Span::raw(modified)]),
                Line::from(vec![
                    Span::styled("Route    ", label),
                    Span::styled(url, Style::default().fg(theme.accent_secondary)),
                ]),
            ];
            if let Some(avatar) = avatar {
                lines.push(Line::from(vec![
                    Span::styled("Avatar   ", label),
                    Span::styled(avatar, theme.muted()),
                ]));
            }
            Paragraph::new(lines).wrap(Wrap { trim: false })
        }
        DetailViewModel::Hint(hint) => Paragraph::new(hint)
            .style(theme.muted())
            .alignment(Alignment::Center),
    };

    f.render_widget(paragraph.block(block), area);
}
