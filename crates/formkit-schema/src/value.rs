//! Loosely typed property values and ordered property maps.
//!
//! Administrator-submitted configuration arrives as string/boolean/array data
//! and stays loosely typed until reconciled. Maps preserve insertion order
//! because it is also display order.

use crate::key::{FixedProperty, PropertyKey, PropertySuffix};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

///
/// PropertyValue
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Text(String),
    List(Vec<PropertyValue>),
    Map(ValueMap),
}

impl PropertyValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Truthiness of a raw toggle input. Empty text and the literal `"0"`
    /// are falsy, as are empty collections.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => !s.is_empty() && s != "0",
            Self::List(items) => !items.is_empty(),
            Self::Map(map) => !map.is_empty(),
        }
    }

    /// Normalized boolean form of this value.
    #[must_use]
    pub fn coerced_bool(&self) -> Self {
        Self::Bool(self.is_truthy())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<ValueMap> for PropertyValue {
    fn from(map: ValueMap) -> Self {
        Self::Map(map)
    }
}

///
/// ValueMap
///
/// Insertion-ordered string-keyed value mapping. Used for the composite's
/// own `default_value` slot and for generated value rows.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueMap {
    entries: Vec<(String, PropertyValue)>,
}

impl ValueMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace, preserving the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for ValueMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = ValueMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string-keyed value map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = ValueMap::new();
                while let Some((key, value)) = access.next_entry::<String, PropertyValue>()? {
                    map.insert(key, value);
                }

                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }

        map
    }
}

///
/// PropertyMap
///
/// Insertion-ordered property set keyed by structured property keys. This is
/// both the derived default schema and the per-instance configuration set;
/// flattening to string names happens only through serde.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyMap {
    entries: Vec<(PropertyKey, PropertyValue)>,
}

impl PropertyMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a flat submitted set into structured keys. Unknown names are
    /// kept as [`PropertyKey::Other`] and survive every transformation.
    pub fn from_flat<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, PropertyValue)>,
        K: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|(key, value)| (PropertyKey::parse(key.as_ref()), value))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &PropertyKey) -> Option<&PropertyValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn get_fixed(&self, fixed: FixedProperty) -> Option<&PropertyValue> {
        self.get(&PropertyKey::Fixed(fixed))
    }

    #[must_use]
    pub fn get_sub(&self, key: &str, suffix: PropertySuffix) -> Option<&PropertyValue> {
        self.get(&PropertyKey::sub(key, suffix))
    }

    #[must_use]
    pub fn contains_key(&self, key: &PropertyKey) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace, preserving the original position on replace.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, value: impl Into<PropertyValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &PropertyKey) -> Option<PropertyValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;

        Some(self.entries.remove(index).1)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&PropertyKey, &PropertyValue) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&PropertyKey, &mut PropertyValue)> {
        self.entries.iter_mut().map(|(k, v)| (&*k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl FromIterator<(PropertyKey, PropertyValue)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (PropertyKey, PropertyValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }

        map
    }
}

impl IntoIterator for PropertyMap {
    type Item = (PropertyKey, PropertyValue);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = PropertyMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat property map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = PropertyMap::new();
                while let Some((key, value)) = access.next_entry::<String, PropertyValue>()? {
                    map.insert(PropertyKey::parse(&key), value);
                }

                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_of_raw_inputs() {
        assert!(PropertyValue::Bool(true).is_truthy());
        assert!(!PropertyValue::Bool(false).is_truthy());
        assert!(PropertyValue::text("1").is_truthy());
        assert!(PropertyValue::text("yes").is_truthy());
        assert!(!PropertyValue::text("").is_truthy());
        assert!(!PropertyValue::text("0").is_truthy());
        assert!(!PropertyValue::Map(ValueMap::new()).is_truthy());
    }

    #[test]
    fn coercion_is_idempotent_per_value() {
        for value in [
            PropertyValue::text("0"),
            PropertyValue::text("on"),
            PropertyValue::Bool(true),
        ] {
            let once = value.coerced_bool();
            assert_eq!(once.coerced_bool(), once);
        }
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut map = PropertyMap::new();
        map.insert(FixedProperty::Title, "a");
        map.insert(FixedProperty::Required, false);
        map.insert(FixedProperty::Title, "b");

        let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["title", "required"]);
        assert_eq!(
            map.get_fixed(FixedProperty::Title),
            Some(&PropertyValue::text("b"))
        );
    }

    #[test]
    fn from_flat_parses_structured_keys() {
        let map = PropertyMap::from_flat([
            ("required", PropertyValue::Bool(true)),
            ("first__required", PropertyValue::text("1")),
            ("mystery", PropertyValue::text("x")),
        ]);

        assert!(map.get_fixed(FixedProperty::Required).is_some());
        assert!(map.get_sub("first", PropertySuffix::Required).is_some());
        assert!(
            map.contains_key(&PropertyKey::Other("mystery".to_string())),
            "unknown keys must be preserved"
        );
    }

    #[test]
    fn serde_round_trips_flat_names() {
        let mut map = PropertyMap::new();
        map.insert(FixedProperty::MultipleHeader, false);
        map.insert(PropertyKey::sub("first", PropertySuffix::Access), true);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"multiple__header":false,"first__access":true}"#);

        let back: PropertyMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
