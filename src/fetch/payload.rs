//! Loosely-typed API payloads
//!
//! API responses are kept as [`serde_json::Value`] only at the boundary.
//! [`Fields`] gives path lookups with defaults so the normalizers can turn a
//! payload into typed entities without caring which keys were omitted.

use serde_json::Value;

/// A parsed JSON response body
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(Value);

impl Payload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parses a response body; anything that is not JSON is an error
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body).map(Self)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Borrowed accessor view over the whole payload
    pub fn fields(&self) -> Fields<'_> {
        Fields(&self.0)
    }

    /// The entries of the top-level `items` array (empty if absent)
    pub fn items(&self) -> impl Iterator<Item = Fields<'_>> {
        self.fields().items()
    }

    /// The continuation cursor, if the API returned a non-empty one
    pub fn next_page_token(&self) -> Option<String> {
        self.fields()
            .str_at(&["nextPageToken"])
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }

    /// The API's error message, if the body is an error document
    ///
    /// The Data API answers failures with `{"error": {"message": ...}}`.
    pub fn api_error(&self) -> Option<String> {
        let error = self.0.get("error")?;
        if error.is_null() {
            return None;
        }
        Some(
            error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()),
        )
    }
}

/// Borrowed view over a JSON value with defaulting accessors
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a>(&'a Value);

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// Follows a path of object keys
    pub fn get(&self, path: &[&str]) -> Option<&'a Value> {
        path.iter().try_fold(self.0, |value, key| value.get(key))
    }

    /// Sub-view at `path`; a missing path yields a view over `null`
    pub fn at(&self, path: &[&str]) -> Fields<'a> {
        Fields(self.get(path).unwrap_or(&Value::Null))
    }

    /// String at `path`, if present and a string
    pub fn str_at(&self, path: &[&str]) -> Option<&'a str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Owned string at `path`
    pub fn string_at(&self, path: &[&str]) -> Option<String> {
        self.str_at(path).map(str::to_string)
    }

    /// Non-negative count at `path`
    ///
    /// The API encodes counters as decimal strings. Missing, negative or
    /// non-numeric values count as zero.
    pub fn count_at(&self, path: &[&str]) -> u64 {
        match self.get(path) {
            Some(Value::Number(number)) => number.as_u64().unwrap_or(0),
            Some(Value::String(text)) => text.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Entries of the `items` array below this view
    pub fn items(&self) -> impl Iterator<Item = Fields<'a>> {
        self.0
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.as_slice())
            .unwrap_or_default()
            .iter()
            .map(Fields)
    }
}
