//! Zone ids
//!
//! A `ZoneId` names the timezone used to turn a zone-less timestamp literal
//! into an instant. Only UTC aliases and fixed offsets are understood; region
//! ids such as `Europe/Paris` need a timezone database, which pgcast does not
//! ship.

use chrono::{FixedOffset, Offset, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors produced while parsing a zone id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// Empty id
    #[error("zone id is empty")]
    Empty,

    /// Offset outside +-18:00 or malformed minutes
    #[error("zone offset out of range: {id}")]
    OffsetOutOfRange { id: String },

    /// Region ids need a timezone database
    #[error("unsupported zone id: {id}")]
    Unsupported { id: String },
}

static OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:UTC|GMT|UT)?([+-])(\d{1,2})(?::?(\d{2}))?$").expect("valid offset regex")
});

const UTC_ALIASES: [&str; 6] = ["UTC", "Z", "GMT", "UT", "Etc/UTC", "Etc/GMT"];

/// A timezone identifier resolved to a fixed offset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneId {
    id: String,
    offset_seconds: i32,
}

impl ZoneId {
    /// The UTC zone
    pub fn utc() -> Self {
        Self {
            id: "UTC".to_string(),
            offset_seconds: 0,
        }
    }

    /// Parse a zone id
    pub fn parse(id: &str) -> Result<Self, ZoneError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ZoneError::Empty);
        }

        if UTC_ALIASES.iter().any(|alias| alias.eq_ignore_ascii_case(id)) {
            return Ok(Self {
                id: id.to_string(),
                offset_seconds: 0,
            });
        }

        let caps = OFFSET_RE
            .captures(id)
            .ok_or_else(|| ZoneError::Unsupported { id: id.to_string() })?;
        let out_of_range = || ZoneError::OffsetOutOfRange { id: id.to_string() };

        let hours: i32 = caps[2].parse().map_err(|_| out_of_range())?;
        let minutes: i32 = match caps.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| out_of_range())?,
            None => 0,
        };
        if hours > 18 || minutes > 59 || (hours == 18 && minutes > 0) {
            return Err(out_of_range());
        }

        let magnitude = hours * 3600 + minutes * 60;
        let offset_seconds = if &caps[1] == "-" { -magnitude } else { magnitude };

        Ok(Self {
            id: id.to_string(),
            offset_seconds,
        })
    }

    /// The id as given
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Offset east of UTC in seconds
    pub fn offset_seconds(&self) -> i32 {
        self.offset_seconds
    }

    /// Offset as a chrono `FixedOffset`
    pub fn offset(&self) -> FixedOffset {
        // Offsets are validated to +-18:00 on construction, well inside chrono's +-24h.
        FixedOffset::east_opt(self.offset_seconds).unwrap_or_else(|| Utc.fix())
    }
}

impl Default for ZoneId {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for ZoneId {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ZoneId {
    type Error = ZoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ZoneId> for String {
    fn from(value: ZoneId) -> Self {
        value.id
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
