//! Event Handling Module
//!
//! Translates raw terminal events into application state changes.
//!
//! # Module Organization
//!
//! - **`keys`**: keyboard input (quit, mode toggle shortcut)
//! - **`mouse`**: pointer input (press/release state machine, slider drags)

pub mod keys;
pub mod mouse;
