//! Presentation layer
//!
//! Styles resolved from class names, and the ratatui widgets that draw
//! render targets.

pub mod styles;
pub mod widgets;

pub use styles::Styles;
