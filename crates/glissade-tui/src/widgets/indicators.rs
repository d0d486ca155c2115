use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::theme::Theme;

pub struct IndicatorsWidget;

impl IndicatorsWidget {
    /// Draw one dot per hit cell; the active one filled
    pub fn render(frame: &mut Frame, row: Rect, cells: &[Rect], active: usize, theme: &Theme) {
        let buf = frame.buffer_mut();
        Block::default()
            .style(Style::default().bg(theme.bg0))
            .render(row, buf);

        for (i, cell) in cells.iter().enumerate() {
            let (symbol, color) = if i == active {
                ("●", theme.accent)
            } else {
                ("○", theme.grey0)
            };
            buf.set_string(cell.x, cell.y, symbol, Style::default().fg(color).bg(theme.bg0));
        }
    }
}
