//! Pointer Input Handling Module
//!
//! Drives the per-control press/release state machine and the slider drag
//! gesture. Hit regions come from the same pure layout the renderer uses,
//! recomputed here from the terminal area, so handler and renderer always
//! agree on where the controls are.
//!
//! A drag sticks to the control it started on: move events route to the
//! active gesture regardless of where the pointer wanders, and release
//! anywhere returns the control to idle.

use crate::app::{App, ControlId};
use crate::ui::screen::{self, ScreenLayout};
use crate::ui::slider::fill_rect;
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Processes one mouse event against the screen layout for `area`.
pub fn handle_mouse_event(event: MouseEvent, app: &mut App, area: Rect) {
    let layout = screen::layout(area);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(id) = hit_test(&layout, app, event.column, event.row) {
                app.press(id, event.row);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.pointer_moved(event.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let hit = hit_test(&layout, app, event.column, event.row);
            app.release(hit);
        }
        _ => {}
    }
}

/// Which control, if any, is under the pointer. The slider drag surface is
/// the filled part of the track only, so its extent depends on the current
/// fill height.
fn hit_test(layout: &ScreenLayout, app: &App, column: u16, row: u16) -> Option<ControlId> {
    let pos = Position::new(column, row);

    if layout.toggle.contains(pos) {
        return Some(ControlId::ModeToggle);
    }

    for (i, slider) in layout.sliders.iter().enumerate() {
        if fill_rect(slider.track, app.sliders[i].fill_height).contains(pos) {
            return Some(ControlId::SliderFill(i));
        }
        if slider.button.contains(pos) {
            return Some(ControlId::SliderButton(i));
        }
    }

    None
}
