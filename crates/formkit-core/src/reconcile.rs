//! Submitted-configuration reconciliation.
//!
//! Normalizes an administrator-submitted property set before persistence:
//! toggle properties are coerced to booleans, and a composite-level required
//! flag overrides every individual required flag. Total over its input;
//! unknown keys pass through unchanged.

use formkit_schema::{
    key::{FixedProperty, PropertySuffix},
    value::{PropertyMap, PropertyValue},
};

/// Reconcile a raw submitted property set into the set to persist.
///
/// Suffix checks are exact: only keys whose final `__`-separated segment is
/// `access` or `required` are treated as toggles. Pure and idempotent.
#[must_use]
pub fn reconcile(mut props: PropertyMap) -> PropertyMap {
    for (key, value) in props.iter_mut() {
        if matches!(
            key.suffix(),
            Some(PropertySuffix::Access | PropertySuffix::Required)
        ) {
            *value = value.coerced_bool();
        }
    }

    // Once the whole composite is marked required, the individual required
    // flags are meaningless.
    let composite_required = props
        .get_fixed(FixedProperty::Required)
        .is_some_and(PropertyValue::is_truthy);
    if composite_required {
        props.retain(|key, _| key.suffix() != Some(PropertySuffix::Required));
    }

    props
}
