// 👟 Shoe Entity - Describable footwear item
//
// A plain mutable struct. The description is derived from the current
// field values on every call, never cached.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SHOE ENTITY
// ============================================================================

/// Footwear item with a human-readable description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    /// Color name, used verbatim in the description
    pub color: String,

    pub size: i64,

    pub has_laces: bool,
}

impl Shoe {
    /// Create new shoe (no validation, any combination is accepted)
    pub fn new(color: String, size: i64, has_laces: bool) -> Self {
        Shoe {
            color,
            size,
            has_laces,
        }
    }

    pub fn lace_phrase(&self) -> &'static str {
        if self.has_laces {
            "with"
        } else {
            "without"
        }
    }

    /// Describe this shoe, e.g. "blacked shoe of size 7 with laces"
    ///
    /// The "ed" suffix is appended to the color as-is.
    pub fn describe(&self) -> String {
        format!(
            "{}ed shoe of size {} {} laces",
            self.color,
            self.size,
            self.lace_phrase()
        )
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
