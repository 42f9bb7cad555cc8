use crate::{localize::Label, types::SubElementKind};
use serde::Serialize;

///
/// SubElementList
///
/// Ordered sub-element declarations; declaration order is display order.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SubElementList {
    pub items: &'static [SubElement],
}

impl SubElementList {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SubElement> {
        self.items.iter().find(|sub| sub.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubElement> {
        self.items.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a SubElementList {
    type Item = &'a SubElement;
    type IntoIter = std::slice::Iter<'a, SubElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

///
/// SubElement
///
/// One sub-field's static declaration. The key is reused verbatim as the
/// prefix of every derived property name, so it must never contain the
/// property separator; see [`crate::validate`].
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SubElement {
    pub key: &'static str,

    /// Absent for purely structural rows, which expose no per-field
    /// configuration beyond the access toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SubElementKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Label>,

    /// Explicit reference to an externally stored named option set. Only
    /// meaningful for options-based kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_set: Option<&'static str>,
}

impl SubElement {
    #[must_use]
    pub const fn new(key: &'static str, kind: SubElementKind) -> Self {
        Self {
            key,
            kind: Some(kind),
            title: None,
            options_set: None,
        }
    }

    /// A structural/decorative row with no declared kind.
    #[must_use]
    pub const fn structural(key: &'static str) -> Self {
        Self {
            key,
            kind: None,
            title: None,
            options_set: None,
        }
    }

    #[must_use]
    pub const fn with_title(mut self, title: Label) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options_set: &'static str) -> Self {
        self.options_set = Some(options_set);
        self
    }

    /// Whether this sub-element exposes per-field configuration.
    #[must_use]
    pub const fn is_configurable(&self) -> bool {
        self.kind.is_some()
    }
}
