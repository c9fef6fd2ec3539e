//! Boolean literal tables and the truth classifier
//!
//! PostgreSQL accepts a fixed set of spellings for boolean input. `classify`
//! is the only place those tables are consulted: the interpreted cast calls
//! it directly and generated code calls it by path.

use serde::{Deserialize, Serialize};

/// Spellings accepted as `true`, already normalized
pub const TRUE_STRINGS: [&str; 5] = ["t", "true", "y", "yes", "1"];

/// Spellings accepted as `false`, already normalized
pub const FALSE_STRINGS: [&str; 5] = ["f", "false", "n", "no", "0"];

/// Classification of a string against the boolean tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruthValue {
    True,
    False,
    Invalid,
}

impl TruthValue {
    /// The boolean this classification stands for, if any
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Invalid => None,
        }
    }
}

/// Trim surrounding whitespace and lowercase
///
/// Inner whitespace is left alone, so `"tr ue"` stays invalid.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classify `raw` as a PostgreSQL boolean literal
pub fn classify(raw: &str) -> TruthValue {
    let normalized = normalize(raw);
    let s = normalized.as_str();
    if TRUE_STRINGS.contains(&s) {
        TruthValue::True
    } else if FALSE_STRINGS.contains(&s) {
        TruthValue::False
    } else {
        TruthValue::Invalid
    }
}
