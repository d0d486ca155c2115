use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
    Frame,
};

use crate::layout::Button;
use crate::surfaces::ViewModel;
use crate::theme::Theme;

pub struct ControlsWidget;

impl ControlsWidget {
    /// Draw the button bar. Disabled buttons are dimmed as a group.
    pub fn render(
        frame: &mut Frame,
        row: Rect,
        buttons: &[(Button, Rect)],
        view: &ViewModel,
        theme: &Theme,
    ) {
        let buf = frame.buffer_mut();
        Block::default()
            .style(Style::default().bg(theme.bg0))
            .render(row, buf);

        let style = if view.controls_enabled {
            Style::default().fg(theme.fg1).bg(theme.bg2)
        } else {
            Style::default().fg(theme.disabled).bg(theme.bg1)
        };

        for (button, rect) in buttons {
            let mut button_style = style;
            if view.controls_enabled && *button == Button::PlayPause && view.playing {
                button_style = button_style.fg(theme.accent).add_modifier(Modifier::BOLD);
            }
            Paragraph::new(Line::from(format!("[ {} ]", button.label(view.playing))))
                .alignment(Alignment::Center)
                .style(button_style)
                .render(*rect, buf);
        }
    }
}
