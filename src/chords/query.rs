//! Flat key/value form of [`Settings`] and the link helpers built on it.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::settings::{Settings, Toggle, COUNT_KEY, OFF, ON};

/// String map with one value per key, kept sorted so that the query strings
/// built from it are canonical.
///
/// Deserializes from a query string (for example through axum's `Query`).
/// Repeated keys keep the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FlatMap(BTreeMap<String, String>);

impl FlatMap {
    pub fn new() -> Self {
        FlatMap(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Link to the full page carrying these parameters.
    pub fn href(&self) -> String {
        format!("/?{}", self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = FlatMap::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Encodes `settings` with the boolean `key` inverted.
///
/// A key missing from the encoded form counts as off. Keys that are not
/// toggles, `count` included, leave the encoded form untouched.
pub fn flip_toggle(settings: &Settings, key: &str) -> FlatMap {
    let mut params = settings.encode();
    if Toggle::from_key(key).is_none() {
        return params;
    }
    let flipped = if params.get(key) == Some(ON) { OFF } else { ON };
    params.insert(key, flipped);
    params
}

/// Encodes `settings` with `count` replaced by `count`.
///
/// The value is written as is; an out of range count only goes back to the
/// default once the link is decoded.
pub fn set_count(settings: &Settings, count: i64) -> FlatMap {
    let mut params = settings.encode();
    params.insert(COUNT_KEY, count.to_string());
    params
}
