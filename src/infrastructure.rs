//! Infrastructure layer
//!
//! This module handles external integrations:
//! - CLI argument processing
//! - Configuration files
//! - Terminal backends (real and test)

pub mod cli;
pub mod config;
pub mod tui;
