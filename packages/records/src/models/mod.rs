//! # Record models and the [`Resource`] trait
//!
//! Every REST resource the front end manages is a type implementing
//! [`Resource`]. The trait ties together everything the generic list view and
//! the network client need to know about it:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `PATH` | Wire resource name, e.g. `"users"` in `GET /users/:id`. |
//! | `NOUN` | Singular display name used in prompts ("delete this user?"). |
//! | `Draft` | Payload for `POST`/`PUT`: the record without its `id`. |
//! | [`Resource::search_fields`] | Query parameters the search box filters on. |
//! | [`Resource::form_fields`] / [`Resource::to_form`] / [`Resource::draft_from_form`] | Modal form layout, edit pre-fill, and schema validation. |
//! | [`Resource::columns`] / [`Resource::cells`] | Table layout. |
//!
//! Two resources exist: [`UserRecord`] (`users`) and [`ProductRecord`]
//! (`products`).

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::form::{FieldSpec, FormErrors, FormValues};

mod product;
mod user;

pub use product::{ProductDraft, ProductRecord};
pub use user::{UserDraft, UserRecord};

/// Server-assigned record identifier.
///
/// Servers send ids either as JSON strings or numbers; both land here and
/// always serialize back as a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Integer(i64),
}

impl From<WireId> for RecordId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => RecordId(s),
            WireId::Integer(n) => RecordId(n.to_string()),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads an explicit `null` as the field's default, like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A single table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    /// Image URL, rendered as a thumbnail.
    Image(String),
}

/// A REST resource managed by a list view.
pub trait Resource: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    type Draft: Clone + PartialEq + Serialize + Validate + 'static;

    const PATH: &'static str;
    const NOUN: &'static str;

    fn id(&self) -> &RecordId;

    /// Query parameters matched against the search text.
    fn search_fields() -> &'static [&'static str];

    fn form_fields() -> &'static [FieldSpec];

    /// Current values as form input, used to pre-fill the edit modal.
    fn to_form(&self) -> FormValues;

    /// Validate raw form input into a draft payload.
    fn draft_from_form(values: &FormValues) -> Result<Self::Draft, FormErrors>;

    fn columns() -> &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_string_and_number() {
        let from_str: RecordId = serde_json::from_str("\"17\"").unwrap();
        let from_num: RecordId = serde_json::from_str("17").unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(from_num.as_str(), "17");
        assert_eq!(serde_json::to_string(&from_num).unwrap(), "\"17\"");
    }
}
