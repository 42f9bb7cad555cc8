//! Property-schema synthesis.
//!
//! Derives the flat configurable-property map for a composite from its
//! declaration: fixed composite-level properties first, then the per-sub
//! derived properties in declaration order. Pure and recomputed on demand.

use crate::{
    key::{FixedProperty, PropertyKey, PropertySuffix},
    localize::Localizer,
    node::Composite,
    types::{FlexboxMode, TitleDisplay},
    value::{PropertyMap, PropertyValue, ValueMap},
};

impl Composite {
    /// Derive the full default property map for this composite.
    ///
    /// Labels are resolved to plain text here; nothing downstream localizes.
    /// Same descriptor and localizer always yield the same map.
    #[must_use]
    pub fn default_properties(&self, localizer: &dyn Localizer) -> PropertyMap {
        let mut props = PropertyMap::new();
        let mut default_value = ValueMap::new();

        // Composite-level properties.
        props.insert(FixedProperty::Title, "");
        props.insert(FixedProperty::Multiple, false);
        props.insert(FixedProperty::MultipleHeader, false);
        props.insert(FixedProperty::MultipleHeaderLabel, "");
        props.insert(FixedProperty::Description, "");
        props.insert(FixedProperty::DefaultValue, ValueMap::new());
        props.insert(
            FixedProperty::TitleDisplay,
            TitleDisplay::Invisible.to_string(),
        );
        props.insert(FixedProperty::DescriptionDisplay, "");
        props.insert(FixedProperty::Required, false);
        props.insert(FixedProperty::Flexbox, FlexboxMode::Automatic.as_token());

        // Generic base properties shared by every element kind.
        props.insert(FixedProperty::AdminTitle, "");
        props.insert(FixedProperty::Private, false);
        props.insert(FixedProperty::Disabled, false);

        for sub in &self.sub_elements {
            if let Some(kind) = sub.kind {
                props.insert(PropertyKey::sub(sub.key, PropertySuffix::Type), kind.as_str());
            }
            if let Some(title) = &sub.title {
                props.insert(
                    PropertyKey::sub(sub.key, PropertySuffix::Title),
                    title.resolve(localizer),
                );
            }
            if let Some(options_set) = sub.options_set {
                props.insert(PropertyKey::sub(sub.key, PropertySuffix::Options), options_set);
            }

            if sub.is_configurable() {
                default_value.insert(sub.key, "");
                props.insert(PropertyKey::sub(sub.key, PropertySuffix::Description), false);
                props.insert(PropertyKey::sub(sub.key, PropertySuffix::Required), false);
                props.insert(PropertyKey::sub(sub.key, PropertySuffix::Placeholder), "");
            }

            // Structural rows are still toggle-able.
            props.insert(PropertyKey::sub(sub.key, PropertySuffix::Access), true);
        }

        props.insert(FixedProperty::DefaultValue, default_value);

        props
    }
}
