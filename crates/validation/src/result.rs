//! Validation result returned by every check

use serde::{Serialize, Serializer};

use crate::error::{ValidationCode, ValidationError};

/// Outcome of a single check
///
/// # Invariant
/// `error` is `Some` iff `valid` is false. Enforced by the constructors.
///
/// Serializes as `{"valid": false, "error": "<message>"}` for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    #[serde(
        serialize_with = "serialize_message",
        skip_serializing_if = "Option::is_none"
    )]
    error: Option<ValidationError>,
}

impl ValidationResult {
    /// A passing result
    pub const fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A failing result carrying the violated rule
    pub fn fail(error: ValidationError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The violated rule, if any
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Tag of the violated rule, if any
    pub fn code(&self) -> Option<ValidationCode> {
        self.error.as_ref().map(ValidationError::code)
    }

    /// User-facing message, if any
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Convert into a `Result` so checks can be chained with `?`
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(error) => Self::fail(error),
        }
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(error: ValidationError) -> Self {
        Self::fail(error)
    }
}

fn serialize_message<S: Serializer>(
    error: &Option<ValidationError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.collect_str(error),
        None => serializer.serialize_none(),
    }
}
