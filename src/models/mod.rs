//! Data Model Module
//!
//! The screen's entire data model: an appearance mode and three slider bars.
//! There is no persistence and no derived state beyond what each control
//! tracks for itself.

pub mod slider;

pub use slider::SliderBar;

/// Global appearance mode for the screen subtree.
///
/// Toggled by the header button; every render function resolves its colors
/// through the palette for the current mode, so flipping this restyles all
/// descendants on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Returns the opposite mode. Toggling twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance::Light
    }
}
