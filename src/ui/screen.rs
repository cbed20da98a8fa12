//! Root Screen Module
//!
//! Lays out and renders the whole screen: the mode-toggle button in the
//! header, the gradient title, and the row of three sliders. The layout is
//! a pure function of the terminal area, so the mouse handler can recompute
//! the same hit regions the renderer drew with.

use crate::app::{App, ControlId};
use crate::ui::components::{gradient_line, render_soft_button};
use crate::ui::slider::{
    BUTTON_COLS, BUTTON_ROWS, SliderLayout, TRACK_COLS, TRACK_ROWS, render as render_slider,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

/// Number of slider columns on the screen.
pub const SLIDER_COUNT: usize = 3;

const TITLE: &str = "Neumorphic Design";
const TOGGLE_ICON: &str = "☀";

/// Horizontal gap between slider columns, in cells.
const COLUMN_GAP: u16 = 4;

/// Right-hand margin of the header toggle, in cells.
const HEADER_MARGIN: u16 = 3;

/// Hit regions and placement for everything on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub toggle: Rect,
    pub title: Rect,
    pub sliders: [SliderLayout; SLIDER_COUNT],
}

/// Computes the screen layout for a terminal area. Deterministic: the event
/// loop and the renderer call this with the same area and must agree.
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::vertical([
        Constraint::Length(1),           // top padding
        Constraint::Length(BUTTON_ROWS), // header row with the toggle
        Constraint::Length(1),
        Constraint::Length(1),           // title
        Constraint::Length(2),
        Constraint::Length(TRACK_ROWS),  // slider tracks
        Constraint::Length(2),
        Constraint::Length(BUTTON_ROWS), // icon buttons
        Constraint::Fill(1),
    ])
    .split(area);

    let header = chunks[1];
    let toggle_x = header
        .right()
        .saturating_sub(HEADER_MARGIN + BUTTON_COLS)
        .max(header.left());
    let toggle = Rect::new(toggle_x, header.y, BUTTON_COLS, BUTTON_ROWS)
        .intersection(header);

    let row_width = SLIDER_COUNT as u16 * BUTTON_COLS + (SLIDER_COUNT as u16 - 1) * COLUMN_GAP;
    let row_x = area.x + area.width.saturating_sub(row_width) / 2;

    let sliders = std::array::from_fn(|i| {
        let column_x = row_x + i as u16 * (BUTTON_COLS + COLUMN_GAP);
        // Track centered over the wider button below it.
        let track_x = column_x + (BUTTON_COLS - TRACK_COLS) / 2;
        SliderLayout {
            track: Rect::new(track_x, chunks[5].y, TRACK_COLS, TRACK_ROWS).intersection(area),
            button: Rect::new(column_x, chunks[7].y, BUTTON_COLS, BUTTON_ROWS)
                .intersection(area),
        }
    });

    ScreenLayout {
        toggle,
        title: chunks[3],
        sliders,
    }
}

/// Renders the screen for the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.palette();
    let screen = layout(area);
    let buf = frame.buffer_mut();

    let background = palette.named("MainColor").unwrap_or(palette.main);
    buf.set_style(area, Style::default().bg(background).fg(palette.text));

    render_soft_button(
        buf,
        screen.toggle,
        TOGGLE_ICON,
        palette,
        app.is_pressed(ControlId::ModeToggle),
    );

    let title = gradient_line(TITLE, palette.gradient_start, palette.gradient_end);
    Paragraph::new(title)
        .alignment(Alignment::Center)
        .render(screen.title, buf);

    for (i, slider_layout) in screen.sliders.iter().enumerate() {
        render_slider(
            buf,
            slider_layout,
            &app.sliders[i],
            palette,
            app.is_pressed(ControlId::SliderButton(i)),
        );
    }
}
