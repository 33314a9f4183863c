use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Longest accepted numeric sender or recipient, in digits.
pub(crate) const NUMERIC_MAX_LEN: usize = 14;
/// Longest accepted alphanumeric sender, in characters.
pub(crate) const ALPHANUMERIC_MAX_LEN: usize = 13;
/// Values must be strictly longer than this.
pub(crate) const MIN_LEN_EXCLUSIVE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pre-flight rejection of a message payload.
///
/// Each variant carries a fixed message. Serialized with `serde` it becomes
/// `{"error":"<message>"}`, the shape Infobip itself uses for error bodies.
pub enum ValidationError {
    /// Numeric `from` outside of `(3, 14]` digits (includes the empty string).
    NonAlphanumericFrom,
    /// Alphanumeric `from` outside of `(3, 13]` characters.
    AlphanumericFrom,
    /// Numeric `to` outside of `(3, 14]` digits.
    NonAlphanumericTo,
    /// Numeric `destinations[].to` outside of `(3, 14]` digits.
    NonAlphanumericDestination,
}

impl ValidationError {
    /// The fixed human-readable message for this error.
    pub fn message(self) -> &'static str {
        match self {
            Self::NonAlphanumericFrom => {
                "non-alphanumeric 'From' value must be between 3 and 14 numbers"
            }
            Self::AlphanumericFrom => {
                "alphanumeric 'From' value must be between 3 and 13 characters"
            }
            Self::NonAlphanumericTo => {
                "non-alphanumeric 'To' value must be between 3 and 14 numbers"
            }
            Self::NonAlphanumericDestination => {
                "non-alphanumeric 'Destination' value must be between 3 and 14 numbers"
            }
        }
    }

    /// Render as `{"error":"<message>"}`.
    pub fn to_json(self) -> String {
        serde_json::json!({ "error": self.message() }).to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ValidationError", 1)?;
        state.serialize_field("error", self.message())?;
        state.end()
    }
}

/// `true` when every byte is an ASCII digit. The empty string is numeric.
pub(crate) fn is_numeric(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

/// `true` when `min < len(value) <= max`.
pub(crate) fn len_in_range(value: &str, min: usize, max: usize) -> bool {
    let len = value.len();
    len > min && len <= max
}

pub(crate) fn check_from(from: &str) -> Result<(), ValidationError> {
    if is_numeric(from) && !len_in_range(from, MIN_LEN_EXCLUSIVE, NUMERIC_MAX_LEN) {
        return Err(ValidationError::NonAlphanumericFrom);
    }
    if !len_in_range(from, MIN_LEN_EXCLUSIVE, ALPHANUMERIC_MAX_LEN) {
        return Err(ValidationError::AlphanumericFrom);
    }
    Ok(())
}

pub(crate) fn check_destination(to: &str) -> Result<(), ValidationError> {
    if is_numeric(to) && !len_in_range(to, MIN_LEN_EXCLUSIVE, NUMERIC_MAX_LEN) {
        return Err(ValidationError::NonAlphanumericDestination);
    }
    Ok(())
}

// An empty `to` means "not provided"; destinations get no such pass.
pub(crate) fn check_to(to: Option<&str>) -> Result<(), ValidationError> {
    let Some(to) = to.filter(|to| !to.is_empty()) else {
        return Ok(());
    };
    if is_numeric(to) && !len_in_range(to, MIN_LEN_EXCLUSIVE, NUMERIC_MAX_LEN) {
        return Err(ValidationError::NonAlphanumericTo);
    }
    Ok(())
}
