//! Status bar: route, load state, last error and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

use crate::state::AppState;
use crate::view_models::StatusBarViewModel;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&vm), area);
}

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        let mut left = vec![
            Span::raw(" "),
            Span::raw(vm.route.as_str()),
            Span::raw("  "),
            Span::styled(vm.load_status.as_str(), vm.load_style),
        ];
        if let Some(error) = &vm.error {
            left.push(Span::raw("  "));
            left.push(Span::styled(error.as_str(), vm.error_style));
        }

        Line::from(left).render(area, buf);
        Line::from(format!("{} ", vm.hints))
            .right_aligned()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[test]
    fn test_status_bar_widget() {
        let vm = StatusBarViewModel {
            route: "/p/pull/1".to_string(),
            load_status: "Loaded".to_string(),
            load_style: Style::default(),
            error: None,
            error_style: Style::default(),
            hints: "q quit".to_string(),
        };
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget(&vm).render(area, &mut buf);

        let text: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.starts_with(" /p/pull/1  Loaded"));
        assert!(text.ends_with("q quit "));
    }
}
