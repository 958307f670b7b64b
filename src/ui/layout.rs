use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use unicode_width::UnicodeWidthStr;

pub const BUTTON_LABEL: &str = "॥ naya doha ॥";

/// The three display regions plus the clickable button, computed from the
/// frame area. Shared by the renderer and the mouse hit-test so the two
/// can never disagree. Any region may come out zero-area on a small
/// terminal; callers skip those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub hindi: Rect,
    pub transliteration: Rect,
    pub meaning: Rect,
    pub button: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let inner = area.inner(Margin::new(1, 1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Length(3),
        ])
        .split(inner);

    Regions {
        hindi: chunks[0],
        transliteration: chunks[1],
        meaning: chunks[2],
        button: button_rect(chunks[3]),
    }
}

fn button_rect(row: Rect) -> Rect {
    let width = (BUTTON_LABEL.width() as u16 + 4).min(row.width);
    let x = row.x + row.width.saturating_sub(width) / 2;
    Rect::new(x, row.y, width, row.height.min(3))
}
