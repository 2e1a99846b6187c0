//! Errors raised while configuring a flicker.

use thiserror::Error;

/// Contract violations detected at construction or property assignment.
///
/// None of these are recoverable: they surface immediately to the caller and
/// the offending construction or assignment does not take effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlickerError {
    #[error("wrong config type: expected a record")]
    NotARecord,
    #[error("wrong or empty config.className")]
    InvalidClassName,
    #[error("nothing to render (absent value)")]
    NothingToRender,
    #[error("wrong config.render type: {0:?} is not a registered render strategy")]
    RenderNotCallable(String),
    #[error("wrong interval value: {0}")]
    InvalidInterval(String),
    #[error("no tokio runtime available to schedule ticks")]
    NoRuntime,
}

pub type Result<T> = std::result::Result<T, FlickerError>;
