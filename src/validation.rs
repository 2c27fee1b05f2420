/*!
Address validation resources.

A validation is created by POSTing a candidate address, tracked through the
three lifecycle states, and mutated only through a merge-patch of its
`state` field. The client never deletes one.
*/
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deserializers::bool_from_str_or_bool;
use crate::GeographicAddress;

/// Lifecycle state of an [`AddressValidation`].
///
/// The backend only ever returns these three values; the client does not
/// invent others.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    InProgress,
    Completed,
    Failed,
}

impl ValidationState {
    pub fn as_str(&self) -> &'static str {
        use self::ValidationState::*;
        match *self {
            InProgress => "InProgress",
            Completed => "Completed",
            Failed => "Failed",
        }
    }
}

impl std::fmt::Display for ValidationState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An asynchronous check of a submitted address against authoritative data,
/// optionally returning alternates.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressValidation {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub state: ValidationState,
    /// Free-text outcome description.
    #[serde(default)]
    pub validation_result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "bool_from_str_or_bool")]
    pub provide_alternative: bool,
    pub submitted_geographic_address: GeographicAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_geographic_address: Option<GeographicAddress>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_geographic_address: Vec<GeographicAddress>,
}

/// Body of a validation creation request.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub provide_alternative: bool,
    pub submitted_geographic_address: GeographicAddress,
}

/// Merge-patch body for a validation. Only fields present here are changed
/// server-side, so absent fields must not be serialized.
#[derive(Debug, Serialize, Default, Clone, PartialEq, Eq)]
pub struct ValidationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ValidationState>,
}

impl ValidationPatch {
    /// Patch that transitions the validation to the given state.
    pub fn state(state: ValidationState) -> Self {
        ValidationPatch { state: Some(state) }
    }
}
