//! User Interface Module
//!
//! Rendering for the neumorphic screen: the shared soft-UI treatments, the
//! mode-keyed palettes, and the screen/slider layout and drawing code.

pub mod colors;
pub mod components;
pub mod screen;
pub mod slider;
