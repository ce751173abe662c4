//! calcpad: a small desktop calculator built with GPUI.
//!
//! The calculator logic in [`calculator`] and the button table in [`keypad`]
//! are plain Rust and carry no UI types; [`ui`] renders them.

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod ui;
