//! Slider Bar Model
//!
//! Geometry and drag arithmetic for one vertical slider, kept in abstract
//! points so the numbers are independent of how many terminal cells the
//! track happens to occupy. The track is 40x200 points; the fill never
//! shrinks below 40 points.
//!
//! The bound percentage influences the fill exactly once, at construction,
//! through the affine mapping `height = 1.6 * percent + 40`. Dragging
//! mutates the fill height directly and never writes back to the
//! percentage.

/// Track height in points. The fill can reach but not exceed this.
pub const TRACK_HEIGHT: f32 = 200.0;

/// Minimum fill height in points. Dragging cannot empty the bar past this.
pub const MIN_FILL: f32 = 40.0;

/// One vertical slider: a write-once percentage, a live fill height, and
/// the glyph shown on the button below the track.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderBar {
    /// Initial value in [0, 100]. Read once at construction, display-only
    /// afterwards: drags never propagate back into it.
    pub percent: f32,
    /// Current fill height in points, clamped to [MIN_FILL, TRACK_HEIGHT].
    pub fill_height: f32,
    /// Glyph for the circular button under the track.
    pub icon: &'static str,
}

impl SliderBar {
    /// Creates a slider with its fill derived from the percentage.
    pub fn new(percent: f32, icon: &'static str) -> Self {
        Self {
            percent,
            fill_height: Self::initial_height(percent),
            icon,
        }
    }

    /// The affine percentage-to-points mapping, clamped to the track.
    pub fn initial_height(percent: f32) -> f32 {
        (1.6 * percent + 40.0).clamp(MIN_FILL, TRACK_HEIGHT)
    }

    /// Applies a drag in progress.
    ///
    /// `start_height` is the fill height captured at gesture start and
    /// `translation` is the pointer's total vertical travel since then, in
    /// points, positive downward. Translation is measured from press start
    /// on every event, not accumulated per event, so intermediate moves
    /// never compound.
    pub fn drag(&mut self, start_height: f32, translation: f32) {
        self.fill_height = (start_height - translation).clamp(MIN_FILL, TRACK_HEIGHT);
    }
}
