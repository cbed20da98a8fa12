//! Shared Soft-UI Treatments
//!
//! The reusable visual treatments every control on the screen is built
//! from: an embossed "raised" surface, an engraved "pressed" surface, and
//! gradient-colored text. All three are pure functions of the palette and
//! the interaction state; nothing here holds state of its own.
//!
//! Depth is faked the neumorphic way: the surface is filled with the
//! background-matching main color, then its top/left edges take the
//! highlight color and its bottom/right edges the shade color (light source
//! top-left). The pressed treatment swaps the two edge colors so the same
//! shape reads as inset instead of extruded.

use crate::ui::colors::{Palette, lerp};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Paints a soft surface over `area`: main-color fill plus highlight and
/// shade edges. `pressed` selects the engraved variant.
pub fn render_soft_surface(buf: &mut Buffer, area: Rect, palette: &Palette, pressed: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (near_edge, far_edge) = if pressed {
        (palette.bottom_right_shadow, palette.top_left_shadow)
    } else {
        (palette.top_left_shadow, palette.bottom_right_shadow)
    };

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
                cell.set_bg(palette.main);
                cell.set_fg(palette.main);

                if y == area.top() {
                    cell.set_char('▔');
                    cell.set_fg(near_edge);
                } else if y == area.bottom() - 1 {
                    cell.set_char('▁');
                    cell.set_fg(far_edge);
                } else if x == area.left() {
                    cell.set_char('▏');
                    cell.set_fg(near_edge);
                } else if x == area.right() - 1 {
                    cell.set_char('▕');
                    cell.set_fg(far_edge);
                }
            }
        }
    }
}

/// Paints a circular soft button: the raised/pressed surface with a glyph
/// centered on its middle row.
pub fn render_soft_button(
    buf: &mut Buffer,
    area: Rect,
    icon: &str,
    palette: &Palette,
    pressed: bool,
) {
    render_soft_surface(buf, area, palette, pressed);

    if area.height < 3 || area.width < 3 {
        return;
    }

    let icon_width = UnicodeWidthStr::width(icon) as u16;
    let inner_width = area.width.saturating_sub(2);
    let x = area.left() + 1 + inner_width.saturating_sub(icon_width) / 2;
    let y = area.top() + area.height / 2;
    buf.set_string(x, y, icon, Style::default().fg(palette.icon).bg(palette.main));
}

/// Builds a line whose glyphs are colored by interpolating from `from` to
/// `to` across the string's display columns. Wide glyphs advance the
/// interpolation by their full width.
pub fn gradient_line(text: &str, from: Color, to: Color) -> Line<'static> {
    let total = UnicodeWidthStr::width(text) as f32;
    let span_end = (total - 1.0).max(1.0);
    let mut col = 0.0f32;

    let spans: Vec<Span<'static>> = text
        .chars()
        .map(|ch| {
            let t = col / span_end;
            col += UnicodeWidthChar::width(ch).unwrap_or(0) as f32;
            Span::styled(ch.to_string(), Style::default().fg(lerp(from, to, t)))
        })
        .collect();

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::colors::Palette;

    fn cell_at(buf: &Buffer, x: u16, y: u16) -> &ratatui::buffer::Cell {
        buf.cell((x, y)).expect("cell in bounds")
    }

    #[test]
    fn raised_surface_lights_the_top_edge() {
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        render_soft_surface(&mut buf, area, &Palette::LIGHT, false);

        assert_eq!(cell_at(&buf, 3, 0).symbol(), "▔");
        assert_eq!(cell_at(&buf, 3, 0).fg, Palette::LIGHT.top_left_shadow);
        assert_eq!(cell_at(&buf, 3, 2).symbol(), "▁");
        assert_eq!(cell_at(&buf, 3, 2).fg, Palette::LIGHT.bottom_right_shadow);
        assert_eq!(cell_at(&buf, 3, 1).bg, Palette::LIGHT.main);
    }

    #[test]
    fn pressed_surface_swaps_the_edge_colors() {
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        render_soft_surface(&mut buf, area, &Palette::LIGHT, true);

        assert_eq!(cell_at(&buf, 3, 0).fg, Palette::LIGHT.bottom_right_shadow);
        assert_eq!(cell_at(&buf, 3, 2).fg, Palette::LIGHT.top_left_shadow);
    }

    #[test]
    fn side_edges_carry_the_depth_too() {
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        render_soft_surface(&mut buf, area, &Palette::LIGHT, false);

        assert_eq!(cell_at(&buf, 0, 1).symbol(), "▏");
        assert_eq!(cell_at(&buf, 0, 1).fg, Palette::LIGHT.top_left_shadow);
        assert_eq!(cell_at(&buf, 6, 1).symbol(), "▕");
        assert_eq!(cell_at(&buf, 6, 1).fg, Palette::LIGHT.bottom_right_shadow);
    }

    #[test]
    fn button_centers_its_icon() {
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        render_soft_button(&mut buf, area, "☀", &Palette::LIGHT, false);

        assert_eq!(cell_at(&buf, 3, 1).symbol(), "☀");
        assert_eq!(cell_at(&buf, 3, 1).fg, Palette::LIGHT.icon);
    }

    #[test]
    fn gradient_line_hits_both_endpoint_colors() {
        let from = Color::Rgb(0, 122, 255);
        let to = Color::Rgb(175, 82, 222);
        let line = gradient_line("Neumorphic", from, to);

        assert_eq!(line.spans.len(), "Neumorphic".chars().count());
        assert_eq!(line.spans.first().unwrap().style.fg, Some(from));
        assert_eq!(line.spans.last().unwrap().style.fg, Some(to));
    }

    #[test]
    fn single_glyph_gradient_takes_the_start_color() {
        let from = Color::Rgb(10, 20, 30);
        let to = Color::Rgb(200, 100, 50);
        let line = gradient_line("☀", from, to);

        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, Some(from));
    }
}
