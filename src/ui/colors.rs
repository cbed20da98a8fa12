//! Neumorphic Color Palette Module
//!
//! Two mode-keyed palettes for the soft-UI look: a background-matching main
//! color plus a paired highlight ("TopLeftShadow") and shade
//! ("BottomRightShadow") that fake the extruded/engraved depth, and the
//! blue→purple gradient endpoints used by the title and the slider fill.
//!
//! The three shadow/background assets are also resolvable by name, mirroring
//! how the original screen looked them up from a mode-aware asset catalog.

use crate::models::Appearance;
use ratatui::style::Color;

/// All colors the screen draws with, for one appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background and surface fill ("MainColor").
    pub main: Color,
    /// Highlight edge, as if lit from the top-left ("TopLeftShadow").
    pub top_left_shadow: Color,
    /// Shade edge opposite the light source ("BottomRightShadow").
    pub bottom_right_shadow: Color,
    /// Plain foreground text.
    pub text: Color,
    /// Button icon glyphs.
    pub icon: Color,
    /// Top/leading end of the accent gradient.
    pub gradient_start: Color,
    /// Bottom/trailing end of the accent gradient.
    pub gradient_end: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        main: Color::Rgb(224, 229, 236),
        top_left_shadow: Color::Rgb(255, 255, 255),
        bottom_right_shadow: Color::Rgb(163, 177, 198),
        text: Color::Rgb(60, 64, 72),
        icon: Color::Rgb(128, 128, 128),
        gradient_start: Color::Rgb(0, 122, 255),
        gradient_end: Color::Rgb(175, 82, 222),
    };

    pub const DARK: Palette = Palette {
        main: Color::Rgb(38, 40, 48),
        top_left_shadow: Color::Rgb(58, 62, 75),
        bottom_right_shadow: Color::Rgb(18, 19, 24),
        text: Color::Rgb(214, 218, 226),
        icon: Color::Rgb(150, 150, 150),
        gradient_start: Color::Rgb(10, 132, 255),
        gradient_end: Color::Rgb(191, 90, 242),
    };

    /// Palette for the given appearance mode.
    pub fn for_appearance(mode: Appearance) -> &'static Palette {
        match mode {
            Appearance::Light => &Palette::LIGHT,
            Appearance::Dark => &Palette::DARK,
        }
    }

    /// Resolves one of the named color assets the screen references.
    pub fn named(&self, name: &str) -> Option<Color> {
        match name {
            "MainColor" => Some(self.main),
            "TopLeftShadow" => Some(self.top_left_shadow),
            "BottomRightShadow" => Some(self.bottom_right_shadow),
            _ => None,
        }
    }
}

/// Linear interpolation between two RGB colors, `t` clamped to [0, 1].
///
/// Non-RGB colors (indexed/ANSI) cannot be mixed; `from` is returned
/// unchanged for those.
pub fn lerp(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| -> u8 {
                (a as f32 + (b as f32 - a as f32) * t).round() as u8
            };
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ => from,
    }
}
