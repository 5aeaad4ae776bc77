//! Wire types for the PetFriends API.
//!
//! The service answers every call with an HTTP status and a body that is JSON
//! on success and usually an HTML page on failure. [`ApiResponse`] keeps both
//! as-is so callers can assert on exactly what the service sent, and offers
//! typed views ([`Pet`], [`PetList`], [`AuthKey`]) on top.

use core::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Error;

/// Which pets `GET /api/pets` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PetFilter {
    /// Every pet on the service. Sent as an empty filter.
    #[default]
    All,
    /// Only pets owned by the authenticated account.
    MyPets,
}

impl PetFilter {
    /// Returns the value of the `filter` query parameter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

impl fmt::Display for PetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque token issued by `GET /api/key`.
///
/// The token is sent verbatim in the `auth_key` header. It has no expiry
/// handling on the client side.
#[derive(Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct AuthKey {
    key: String,
}

impl AuthKey {
    /// Wraps a raw key string.
    ///
    /// Any string is accepted, including the empty one; the service decides
    /// whether it is valid.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the raw key.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Extracts the key from a `GET /api/key` response.
    ///
    /// Returns `None` unless the response is successful and its body carries
    /// a string `key` field.
    pub fn from_response(response: &ApiResponse) -> Option<Self> {
        if !response.is_success() {
            return None;
        }
        response.decode::<AuthKey>().ok()
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthKey(<{} bytes redacted>)", self.key.len())
    }
}

/// A pet record as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    /// Free-form; the service stores whatever string it was given.
    #[serde(deserialize_with = "lenient_string")]
    pub age: String,
    /// Data URI of the photo, empty or absent when the pet has none.
    #[serde(default)]
    pub pet_photo: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub created_at: Option<String>,
}

impl Pet {
    /// Returns `true` if the record carries a non-empty photo.
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Body of `GET /api/pets`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    /// Returns `true` if a pet with the given ID is listed.
    pub fn contains_id(&self, pet_id: &str) -> bool {
        self.pets.iter().any(|p| p.id == pet_id)
    }
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The body was not JSON (e.g. the HTML error page served with a 403).
    Text(String),
}

impl ResponseBody {
    /// Decodes raw bytes, falling back to text when they are not JSON.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }

    /// Looks up a top-level field of a JSON object body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json()?.get(key)
    }

    /// Returns `true` if the body is a JSON object with the given field.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// HTTP status paired with the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// Returns `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decodes a JSON body into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        match &self.body {
            ResponseBody::Json(value) => Ok(T::deserialize(value)?),
            ResponseBody::Text(text) => Err(Error::UnexpectedBody(text.clone())),
        }
    }

    /// Splits the response into its `(status, body)` pair.
    pub fn into_parts(self) -> (StatusCode, ResponseBody) {
        (self.status, self.body)
    }
}

/// Accepts `"2"` as well as `2`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
