use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let state = app.handle.state();

        let mode_str = if state.is_transitioning {
            "MOVING"
        } else if state.is_autoplaying {
            "PLAYING"
        } else {
            "PAUSED"
        };

        let (status_text, status_fg) = if let Some(msg) = &app.status_message {
            (format!(" {}", msg), theme.error)
        } else {
            let text = format!(
                " {} | Slide {}/{}",
                mode_str,
                state.current_index + 1,
                app.slides.len()
            );
            (text, theme.fg0)
        };

        let help_hint = " q:quit h/l:prev/next space:play f:fullscreen ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(status_fg).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
