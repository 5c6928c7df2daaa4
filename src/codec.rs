//! Request encoding: typed options structs to query strings and JSON bodies.
//!
//! Optional fields use `Option<T>` plus `skip_serializing_if` so an absent
//! field is omitted from the wire entirely, never sent as `null` or an empty
//! string. Encoding is pure: the same input always yields the same output.

use crate::{Error, Result};
use serde::ser::Serializer;
use serde::Serialize;

/// Encodes an options struct as a URL query string.
///
/// Returns `None` when the struct serializes to nothing, so callers can skip
/// attaching an empty `?` to the URL.
pub(crate) fn encode_query<T: Serialize>(params: &T) -> Result<Option<String>> {
    let encoded =
        serde_urlencoded::to_string(params).map_err(|e| Error::Encoding(e.to_string()))?;
    if encoded.is_empty() {
        Ok(None)
    } else {
        Ok(Some(encoded))
    }
}

/// Encodes a body struct as a JSON value.
pub(crate) fn encode_body<T: Serialize>(body: &T) -> Result<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| Error::Encoding(e.to_string()))
}

/// Serializes a sequence as a single comma-joined query parameter.
///
/// The API expects `terms=a,b,c` rather than a repeated key; `serde_urlencoded`
/// rejects sequences outright, so list-valued parameters opt in with
/// `#[serde(serialize_with = "comma_separated")]`.
pub fn comma_separated<S, T>(values: &[T], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<str>,
{
    let joined = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}
