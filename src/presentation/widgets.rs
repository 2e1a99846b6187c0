//! Widgets that draw components into a frame

pub mod item;
pub mod status_bar;

pub use item::ItemWidget;
pub use status_bar::StatusBarWidget;
