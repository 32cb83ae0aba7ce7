//! Validated value types shared by several entities.
//!
//! # Example
//!
//! ```ignore
//! use samaysetu_models::value_types::RoomNumber;
//!
//! let room: RoomNumber = "h202".parse().unwrap();
//! assert_eq!(room.as_str(), "H202");
//! assert_eq!(room.wing(), "H");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const ROOM_NUMBER_FORMAT_MESSAGE: &str =
    "Room number must be in format: Letter + 3 digits (e.g., H202, A101)";

static ROOM_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\d{3}$").expect("valid room number regex"));

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    InvalidRoomNumber(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRoomNumber(_) => f.write_str(ROOM_NUMBER_FORMAT_MESSAGE),
        }
    }
}

/// Whether `value` is a wing letter followed by three digits.
pub fn is_room_number(value: &str) -> bool {
    ROOM_NUMBER.is_match(value)
}

// ============================================================================
// RoomNumber
// ============================================================================

/// A room number: one upper-case wing letter and three digits, e.g. `H202`.
///
/// Input is upper-cased before validation, the same way the room form treats
/// what the user types.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomNumber(String);

impl RoomNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueTypeError> {
        let value = value.into().trim().to_uppercase();
        if !is_room_number(&value) {
            return Err(ValueTypeError::InvalidRoomNumber(value));
        }
        Ok(Self(value))
    }

    /// Wraps a value without validation. Used for data read back from the
    /// backend, which may predate the format rule.
    #[inline]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The building wing, i.e. the leading letter.
    pub fn wing(&self) -> &str {
        self.0.get(..1).unwrap_or("")
    }
}

impl fmt::Debug for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoomNumber({})", self.0)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoomNumber {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for RoomNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RoomNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new_unchecked)
    }
}

// ============================================================================
// IdRef
// ============================================================================

/// A `{ "id": n }` reference, the shape the backend expects for relations
/// in create and update payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef<T> {
    pub id: T,
}

impl<T> IdRef<T> {
    pub fn new(id: T) -> Self {
        Self { id }
    }
}
