use glissade_core::SlideSet;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use crate::theme::Theme;

/// Draws every slide at its current horizontal offset
pub struct SlidesWidget;

impl SlidesWidget {
    pub fn render(frame: &mut Frame, area: Rect, slides: &SlideSet, offsets: &[f64], theme: &Theme) {
        Self::render_to(frame.buffer_mut(), area, slides, offsets, theme);
    }

    /// Render into a plain buffer. Each slide is drawn full-size off-screen
    /// and then copied over, shifted by its offset and clipped to `area`.
    pub fn render_to(buf: &mut Buffer, area: Rect, slides: &SlideSet, offsets: &[f64], theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        Block::default()
            .style(Style::default().bg(theme.bg0))
            .render(area, buf);

        for (index, slide) in slides.iter().enumerate() {
            let percent = offsets.get(index).copied().unwrap_or(0.0);
            let shift = column_shift(percent, area.width);
            if shift.unsigned_abs() >= area.width as u32 {
                continue;
            }

            let card = Rect::new(0, 0, area.width, area.height);
            let mut scratch = Buffer::empty(card);
            slide_paragraph(index, slides.len(), &slide.title, &slide.body, theme)
                .render(card, &mut scratch);

            blit_shifted(&scratch, buf, area, shift);
        }
    }
}

/// Offset in percent of viewport width to whole columns
pub fn column_shift(percent: f64, width: u16) -> i32 {
    (percent / 100.0 * width as f64).round() as i32
}

fn slide_paragraph<'a>(
    index: usize,
    total: usize,
    title: &'a str,
    body: &'a str,
    theme: &Theme,
) -> Paragraph<'a> {
    let block = Block::default()
        .title(format!(" {}/{} ", index + 1, total))
        .title_alignment(Alignment::Right)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.grey0))
        .style(Style::default().bg(theme.bg1));

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            title,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(
        body.lines()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.fg0)))),
    );

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
}

/// Copy `src` onto `dst` inside `area`, moved right by `shift` columns (left if negative)
fn blit_shifted(src: &Buffer, dst: &mut Buffer, area: Rect, shift: i32) {
    for y in 0..area.height {
        for x in 0..area.width {
            let target = x as i32 + shift;
            if target < 0 || target >= area.width as i32 {
                continue;
            }
            let Some(cell) = src.cell((x, y)) else {
                continue;
            };
            if let Some(out) = dst.cell_mut((area.x + target as u16, area.y + y)) {
                *out = cell.clone();
            }
        }
    }
}
