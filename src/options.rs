use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// How much of a `DD-MM-YYYY` string is checked beyond its shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Digit/hyphen shape only; day and month values are taken as written.
    #[default]
    #[display(fmt = "loose")]
    Loose,
    /// Shape, plus month in 1-12 and day within that month's length.
    #[display(fmt = "strict")]
    Strict,
}

/// Settings for [`crate::diff_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    pub validation: Validation,
}

impl DiffOptions {
    pub const fn strict() -> Self {
        Self {
            validation: Validation::Strict,
        }
    }

    #[must_use]
    pub const fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}
