//! # Flicker - blinking indicators for terminal UIs
//!
//! A component that re-renders a value into its render target immediately on
//! start and then at a fixed interval, to draw attention to it.
//!
//! ## Architecture Overview
//!
//! - **Component base** (`component`): render targets and the shared item
//!   handle every component mounts
//! - **Flicker** (`flicker`): the start/stop timer loop and its render
//!   strategies
//! - **Host** (`app`, `infrastructure`, `presentation`): a terminal runner
//!   that loads configuration, draws the item and pairs its lifecycle with
//!   `start`/`stop`
//!
//! ## Example Usage
//!
//! ```rust
//! use flicker::{component::Item, Flicker, FlickerConfig};
//!
//! let config = FlickerConfig::new()
//!     .with_value("ALERT")
//!     .with_interval(500)
//!     .expect("500ms is a valid interval");
//! let alert = Flicker::new(Item::new(), config).expect("value is set");
//! assert!(!alert.is_active());
//! ```
//!
//! ## Modules
//!
//! - [`component`] - Component base and render targets
//! - [`flicker`] - The flicker component
//! - [`validation`] - Strict/lenient contract checking
//! - [`app`] - Terminal runner
//! - [`infrastructure`] - CLI, configuration and terminal backends
//! - [`presentation`] - Styles and widgets
//! - [`utils`] - Logging, panic handling and paths

pub mod app;
pub mod component;
pub mod error;
pub mod flicker;
pub mod infrastructure;
pub mod presentation;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub use error::FlickerError;
pub use flicker::{Flicker, FlickerConfig, Interval, RenderRegistry};
pub use validation::Validation;

/// Result type used by the application layer
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
