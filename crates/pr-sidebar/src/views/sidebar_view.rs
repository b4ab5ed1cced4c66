//! Sidebar view
//!
//! Bordered list of sidebar entries, scrolled so the cursor stays visible.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Paragraph, Widget},
    Frame,
};

use crate::context::ViewContext;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{SidebarContentViewModel, SidebarViewModel};
use crate::views::layout::{entry_area, scroll_offset, visible_entries};
use crate::views::sidebar_entry_widget::SidebarEntryWidget;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = SidebarViewModel::from_state(state);
    let ctx = ViewContext::from_state(state);
    f.render_widget(
        SidebarWidget {
            vm: &vm,
            theme: &state.theme,
            timestamp_format: ctx.timestamp_format(),
        },
        area,
    );
}

pub struct SidebarWidget<'a> {
    pub vm: &'a SidebarViewModel,
    pub theme: &'a Theme,
    pub timestamp_format: &'a str,
}

impl Widget for SidebarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.vm.border_style)
            .title(self.vm.title.as_str())
            .title_style(self.theme.panel_title());
        let list = block.inner(area);
        block.render(area, buf);

        match &self.vm.content {
            SidebarContentViewModel::Message { text, style } => {
                Paragraph::new(text.as_str())
                    .style(*style)
                    .alignment(Alignment::Center)
                    .render(list, buf);
            }
            SidebarContentViewModel::Entries(rows) => {
                let visible = visible_entries(list);
                let cursor = rows.iter().position(|r| r.is_cursor).unwrap_or(0);
                let offset = scroll_offset(cursor, visible);

                for (slot, row) in rows.iter().skip(offset).take(visible).enumerate() {
                    SidebarEntryWidget::new(&row.entry.props, self.theme, self.timestamp_format)
                        .cursor(row.is_cursor)
                        .render(entry_area(list, slot), buf);
                }
            }
        }
    }
}
