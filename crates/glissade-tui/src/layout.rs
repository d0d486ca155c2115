//! Screen layout and mouse hit regions.
//!
//! Computed once per frame before drawing so the same rectangles serve
//! both rendering and click handling.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Navigation buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    First,
    Prev,
    PlayPause,
    Next,
    Last,
    Fullscreen,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::First,
        Button::Prev,
        Button::PlayPause,
        Button::Next,
        Button::Last,
        Button::Fullscreen,
    ];

    pub fn label(&self, playing: bool) -> &'static str {
        match self {
            Button::First => "⏮ First",
            Button::Prev => "◀ Prev",
            Button::PlayPause if playing => "⏸ Pause",
            Button::PlayPause => "▶ Play",
            Button::Next => "Next ▶",
            Button::Last => "Last ⏭",
            Button::Fullscreen => "⛶ Full",
        }
    }

    /// Cell width wide enough for every label this button can show
    pub fn width(&self) -> u16 {
        let widest = self.label(true).width().max(self.label(false).width());
        widest as u16 + 4 // "[ " + " ]"
    }
}

/// Where everything goes on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub slides: Rect,
    pub indicators: Option<Rect>,
    pub controls: Option<Rect>,
    pub status: Option<Rect>,
    /// Hit rectangle of each indicator dot, by slide index
    pub indicator_hits: Vec<Rect>,
    /// Hit rectangle of each button
    pub button_hits: Vec<(Button, Rect)>,
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Indicator(usize),
    Button(Button),
    Slides,
}

impl ScreenLayout {
    /// Lay out `area` for `slide_count` slides. In fullscreen the slides take everything.
    pub fn compute(
        area: Rect,
        slide_count: usize,
        fullscreen: bool,
        show_indicators: bool,
        show_controls: bool,
    ) -> Self {
        if fullscreen {
            return Self {
                slides: area,
                ..Default::default()
            };
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),                                      // Slides
                Constraint::Length(if show_indicators { 1 } else { 0 }), // Indicators
                Constraint::Length(if show_controls { 1 } else { 0 }),   // Controls
                Constraint::Length(1),                                   // Status bar
            ])
            .split(area);

        let indicators = show_indicators.then_some(chunks[1]);
        let controls = show_controls.then_some(chunks[2]);

        Self {
            slides: chunks[0],
            indicator_hits: indicators
                .map(|row| indicator_cells(row, slide_count))
                .unwrap_or_default(),
            button_hits: controls.map(button_cells).unwrap_or_default(),
            indicators,
            controls,
            status: Some(chunks[3]),
        }
    }

    /// Resolve a mouse position to the element under it
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if let Some(index) = self.indicator_hits.iter().position(|r| r.contains(pos)) {
            return Some(Hit::Indicator(index));
        }
        if let Some((button, _)) = self.button_hits.iter().find(|(_, r)| r.contains(pos)) {
            return Some(Hit::Button(*button));
        }
        if self.slides.contains(pos) {
            return Some(Hit::Slides);
        }
        None
    }
}

/// One 1-cell dot per slide, separated by a space, centered in `row`.
/// Dots that do not fit are dropped.
fn indicator_cells(row: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || row.width == 0 {
        return Vec::new();
    }
    let fit = (((row.width as usize) + 1) / 2).min(count);
    let used = (fit * 2 - 1) as u16;
    let start = row.x + (row.width - used) / 2;
    (0..fit)
        .map(|i| Rect::new(start + (i as u16) * 2, row.y, 1, 1))
        .collect()
}

/// Buttons left to right with one space between, centered in `row`
fn button_cells(row: Rect) -> Vec<(Button, Rect)> {
    let total: u16 = Button::ALL.iter().map(|b| b.width()).sum::<u16>() + Button::ALL.len() as u16 - 1;
    let mut x = row.x + row.width.saturating_sub(total) / 2;
    let right = row.x + row.width;

    let mut cells = Vec::with_capacity(Button::ALL.len());
    for button in Button::ALL {
        let width = button.width();
        if x + width > right {
            break;
        }
        cells.push((button, Rect::new(x, row.y, width, 1)));
        x += width + 1;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullscreen_uses_whole_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ScreenLayout::compute(area, 4, true, true, true);
        assert_eq!(layout.slides, area);
        assert!(layout.indicators.is_none());
        assert!(layout.button_hits.is_empty());
        assert!(layout.status.is_none());
    }

    #[test]
    fn test_regular_layout_rows() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ScreenLayout::compute(area, 4, false, true, true);
        assert_eq!(layout.slides.height, 21);
        assert_eq!(layout.indicators.unwrap().y, 21);
        assert_eq!(layout.controls.unwrap().y, 22);
        assert_eq!(layout.status.unwrap().y, 23);
        assert_eq!(layout.indicator_hits.len(), 4);
        assert_eq!(layout.button_hits.len(), Button::ALL.len());
    }

    #[test]
    fn test_hidden_chrome() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ScreenLayout::compute(area, 4, false, false, false);
        assert_eq!(layout.slides.height, 23);
        assert!(layout.indicator_hits.is_empty());
        assert!(layout.button_hits.is_empty());
    }

    #[test]
    fn test_indicator_cells_are_centered() {
        let cells = indicator_cells(Rect::new(0, 5, 11, 1), 3);
        // 5 cells used ("● ● ●"), 3 cells of margin on each side
        assert_eq!(
            cells,
            vec![Rect::new(3, 5, 1, 1), Rect::new(5, 5, 1, 1), Rect::new(7, 5, 1, 1)]
        );
    }

    #[test]
    fn test_indicator_cells_truncate() {
        let cells = indicator_cells(Rect::new(0, 0, 5, 1), 10);
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn test_hit_testing() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ScreenLayout::compute(area, 3, false, true, true);

        let dot = layout.indicator_hits[2];
        assert_eq!(layout.hit(dot.x, dot.y), Some(Hit::Indicator(2)));

        let (button, rect) = layout.button_hits[3];
        assert_eq!(button, Button::Next);
        assert_eq!(layout.hit(rect.x + 1, rect.y), Some(Hit::Button(Button::Next)));

        assert_eq!(layout.hit(10, 3), Some(Hit::Slides));
        assert_eq!(layout.hit(0, 23), None);
    }

    #[test]
    fn test_buttons_drop_when_narrow() {
        let cells = button_cells(Rect::new(0, 0, 20, 1));
        assert!(cells.len() < Button::ALL.len());
        for (_, rect) in cells {
            assert!(rect.x + rect.width <= 20);
        }
    }
}
