//! Contract checking mode.

use serde::Deserialize;
use strum::{Display, EnumString};

/// How strictly configuration records are checked.
///
/// `Strict` rejects malformed records with a [`crate::FlickerError`];
/// `Lenient` substitutes defaults and logs a warning instead. Debug builds
/// default to `Strict`, release builds to `Lenient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Validation {
    Strict,
    Lenient,
}

impl Validation {
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

impl Default for Validation {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}
