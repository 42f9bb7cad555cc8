use crate::{
    MAX_SUB_KEY_LEN, PROPERTY_SEPARATOR, err,
    error::ErrorTree,
    node::{Composite, SubElement},
    validate::ValidateNode,
};
use std::collections::BTreeMap;

impl ValidateNode for SubElement {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        let key = self.key;

        if key.is_empty() {
            err!(errs, "sub-element key must not be empty");
        }
        if key.len() > MAX_SUB_KEY_LEN {
            err!(errs, "sub-element key exceeds {MAX_SUB_KEY_LEN} characters");
        }
        if key.contains(PROPERTY_SEPARATOR) {
            err!(
                errs,
                "sub-element key '{key}' contains the property separator '{PROPERTY_SEPARATOR}'"
            );
        }
        if !key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            err!(
                errs,
                "sub-element key '{key}' must be lowercase ascii, digits, and underscores"
            );
        }

        if self.options_set.is_some() && !self.kind.is_some_and(|k| k.supports_options()) {
            err!(
                errs,
                "sub-element '{key}' declares an option set but its kind is not options-based"
            );
        }

        errs.result()
    }
}

/// Reject duplicate sub-element keys within one composite.
pub fn validate_sub_keys(composite: &Composite, errs: &mut ErrorTree) {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();

    for (position, sub) in composite.sub_elements.iter().enumerate() {
        if let Some(prev) = seen.insert(sub.key, position) {
            err!(
                errs,
                "duplicate sub-element key '{}' at positions {prev} and {position}",
                sub.key
            );
        }
    }
}
