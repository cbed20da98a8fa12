//! Application State Container
//!
//! `App` owns everything the screen displays: the appearance mode, the
//! three slider bars, and the pointer press/drag state. Handlers mutate it
//! through the methods here; rendering is a pure function of it, rebuilt
//! every frame, so a state change restyles the whole subtree on the next
//! draw with no separate notification step.

use crate::models::{Appearance, SliderBar};
use crate::ui;
use crate::ui::colors::Palette;
use crate::ui::screen::SLIDER_COUNT;
use crate::ui::slider::POINTS_PER_ROW;
use ratatui::Frame;

/// Identifies one interactive control for hit testing and pressed-state
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    /// The sun button in the header.
    ModeToggle,
    /// The filled portion of a slider track.
    SliderFill(usize),
    /// The icon button under a slider.
    SliderButton(usize),
}

/// A drag in progress on one slider fill.
///
/// Captures the fill height and pointer row at gesture start so every move
/// event can apply translation-since-press instead of accumulating deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub slider: usize,
    pub origin_row: u16,
    pub start_height: f32,
}

/// Main application state container.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub appearance: Appearance,
    pub sliders: [SliderBar; SLIDER_COUNT],
    /// Control currently under a held-down pointer, if any. Purely visual
    /// except that the mode toggle fires on release inside its region.
    pub pressed: Option<ControlId>,
    pub drag: Option<DragState>,
}

impl App {
    /// Initial screen state: light mode, sliders at 30, 20, and 80 percent.
    pub fn new() -> Self {
        Self {
            appearance: Appearance::Light,
            sliders: [
                SliderBar::new(30.0, "☁"),
                SliderBar::new(20.0, "☾"),
                SliderBar::new(80.0, "🌀"),
            ],
            pressed: None,
            drag: None,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        ui::screen::render(frame, self);
    }

    /// Palette for the current appearance mode.
    pub fn palette(&self) -> &'static Palette {
        Palette::for_appearance(self.appearance)
    }

    pub fn toggle_appearance(&mut self) {
        self.appearance = self.appearance.toggled();
    }

    /// Whether the given control should render with the pressed treatment.
    pub fn is_pressed(&self, id: ControlId) -> bool {
        self.pressed == Some(id)
    }

    /// Pointer-down inside a control's hit region: enter the pressed state,
    /// and begin a drag gesture if the target is a slider fill.
    pub fn press(&mut self, id: ControlId, row: u16) {
        self.pressed = Some(id);
        if let ControlId::SliderFill(i) = id {
            self.drag = Some(DragState {
                slider: i,
                origin_row: row,
                start_height: self.sliders[i].fill_height,
            });
        }
    }

    /// Pointer moved while held down. Only an active slider drag reacts;
    /// rows below the gesture origin translate to positive (downward) point
    /// travel.
    pub fn pointer_moved(&mut self, row: u16) {
        if let Some(drag) = self.drag {
            let translation = (row as f32 - drag.origin_row as f32) * POINTS_PER_ROW;
            self.sliders[drag.slider].drag(drag.start_height, translation);
        }
    }

    /// Pointer-up anywhere: back to idle. `hit` is the control under the
    /// pointer at release time; the mode toggle only fires when the press
    /// and the release land on it.
    pub fn release(&mut self, hit: Option<ControlId>) {
        if self.pressed == Some(ControlId::ModeToggle) && hit == Some(ControlId::ModeToggle) {
            self.toggle_appearance();
        }
        self.pressed = None;
        self.drag = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slider::{MIN_FILL, TRACK_HEIGHT};

    #[test]
    fn initial_sliders_carry_the_mapped_heights() {
        let app = App::new();
        assert_eq!(app.sliders[0].fill_height, 88.0);
        assert_eq!(app.sliders[1].fill_height, 72.0);
        assert_eq!(app.sliders[2].fill_height, 168.0);
    }

    #[test]
    fn toggling_twice_restores_the_mode() {
        let mut app = App::new();
        let original = app.appearance;
        app.toggle_appearance();
        assert_ne!(app.appearance, original);
        app.toggle_appearance();
        assert_eq!(app.appearance, original);
    }

    #[test]
    fn pressed_iff_pointer_is_down_on_the_control() {
        let mut app = App::new();
        assert!(!app.is_pressed(ControlId::ModeToggle));

        app.press(ControlId::ModeToggle, 2);
        assert!(app.is_pressed(ControlId::ModeToggle));
        assert!(!app.is_pressed(ControlId::SliderButton(0)));

        app.release(Some(ControlId::ModeToggle));
        assert!(!app.is_pressed(ControlId::ModeToggle));
    }

    #[test]
    fn toggle_fires_only_on_release_inside() {
        let mut app = App::new();
        let original = app.appearance;

        app.press(ControlId::ModeToggle, 2);
        app.release(None); // released outside the button
        assert_eq!(app.appearance, original);
        assert_eq!(app.pressed, None);

        app.press(ControlId::ModeToggle, 2);
        app.release(Some(ControlId::ModeToggle));
        assert_eq!(app.appearance, original.toggled());
    }

    #[test]
    fn slider_button_release_changes_nothing_but_the_press_state() {
        let mut app = App::new();
        let before = app.clone();

        app.press(ControlId::SliderButton(1), 20);
        app.release(Some(ControlId::SliderButton(1)));
        assert_eq!(app, before);
    }

    #[test]
    fn drag_moves_against_the_pointer_rows() {
        let mut app = App::new();
        app.press(ControlId::SliderFill(0), 20);

        // Two rows up from the origin raises the fill by two rows of points.
        app.pointer_moved(18);
        assert_eq!(app.sliders[0].fill_height, 88.0 + 2.0 * POINTS_PER_ROW);

        // Moves keep measuring from the press origin, not the last event.
        app.pointer_moved(19);
        assert_eq!(app.sliders[0].fill_height, 88.0 + POINTS_PER_ROW);
    }

    #[test]
    fn drag_is_clamped_to_the_track() {
        let mut app = App::new();
        app.press(ControlId::SliderFill(0), 200);

        app.pointer_moved(0);
        assert_eq!(app.sliders[0].fill_height, TRACK_HEIGHT);

        app.press(ControlId::SliderFill(0), 0);
        app.pointer_moved(200);
        assert_eq!(app.sliders[0].fill_height, MIN_FILL);
    }

    #[test]
    fn moves_without_an_active_drag_are_ignored() {
        let mut app = App::new();
        let before = app.sliders.clone();
        app.pointer_moved(5);
        assert_eq!(app.sliders, before);

        app.press(ControlId::ModeToggle, 2);
        app.pointer_moved(5);
        assert_eq!(app.sliders, before);
    }

    #[test]
    fn release_ends_the_drag() {
        let mut app = App::new();
        app.press(ControlId::SliderFill(2), 15);
        assert!(app.drag.is_some());

        app.release(None);
        assert_eq!(app.drag, None);

        let height = app.sliders[2].fill_height;
        app.pointer_moved(3);
        assert_eq!(app.sliders[2].fill_height, height);
    }
}
