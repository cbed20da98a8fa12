//! Slider Rendering Module
//!
//! Draws one slider column: the raised track capsule, the gradient fill
//! anchored to its bottom, and the circular icon button underneath. Also
//! owns the projection between the slider's point geometry and terminal
//! cells, which the mouse handler reuses to turn row travel back into point
//! translations.

use crate::models::SliderBar;
use crate::models::slider::TRACK_HEIGHT;
use crate::ui::colors::{Palette, lerp};
use crate::ui::components::{render_soft_button, render_soft_surface};
use ratatui::{buffer::Buffer, layout::Rect};

/// Track width in cells.
pub const TRACK_COLS: u16 = 4;

/// Track height in cells.
pub const TRACK_ROWS: u16 = 10;

/// Icon button width in cells.
pub const BUTTON_COLS: u16 = 7;

/// Icon button height in cells.
pub const BUTTON_ROWS: u16 = 3;

/// How many points of track one cell row covers.
pub const POINTS_PER_ROW: f32 = TRACK_HEIGHT / TRACK_ROWS as f32;

/// Cell rectangles for one slider column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderLayout {
    pub track: Rect,
    pub button: Rect,
}

/// Number of track rows the fill covers at the given height in points.
/// Always at least one row so the fill stays visible and grabbable.
pub fn fill_rows(fill_height: f32) -> u16 {
    let rows = (fill_height / TRACK_HEIGHT * TRACK_ROWS as f32).round() as u16;
    rows.clamp(1, TRACK_ROWS)
}

/// The filled portion of the track, anchored to its bottom edge. This is
/// also the drag hit region: a gesture must start on the fill itself.
pub fn fill_rect(track: Rect, fill_height: f32) -> Rect {
    let rows = fill_rows(fill_height).min(track.height);
    Rect::new(
        track.x,
        track.y + track.height - rows,
        track.width,
        rows,
    )
}

/// Renders one slider column into the buffer.
pub fn render(
    buf: &mut Buffer,
    layout: &SliderLayout,
    bar: &SliderBar,
    palette: &Palette,
    button_pressed: bool,
) {
    render_soft_surface(buf, layout.track, palette, false);

    let fill = fill_rect(layout.track, bar.fill_height);
    let span = (fill.height.saturating_sub(1)).max(1) as f32;
    for (i, y) in (fill.top()..fill.bottom()).enumerate() {
        let color = lerp(
            palette.gradient_start,
            palette.gradient_end,
            i as f32 / span,
        );
        for x in fill.left()..fill.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                if y == fill.top() {
                    // Half-block cap rounds off the top of the fill.
                    cell.set_char('▄');
                    cell.set_fg(color);
                    cell.set_bg(palette.main);
                } else {
                    cell.set_char(' ');
                    cell.set_bg(color);
                }
            }
        }
    }

    render_soft_button(buf, layout.button, bar.icon, palette, button_pressed);
}
