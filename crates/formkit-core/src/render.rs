//! Render-tree preparation.
//!
//! A [`RenderNode`] is the per-submission, per-instance view of an element:
//! descriptor defaults with the persisted configuration applied. It carries
//! no markup; turning the tree into output is the rendering engine's job.

use crate::registry::FormContext;
use formkit_schema::{
    key::{FixedProperty, PropertySuffix},
    localize::Localizer,
    node::Composite,
    types::{FlexboxMode, SubElementKind, TitleDisplay},
    value::{PropertyMap, PropertyValue},
};
use serde::Serialize;

///
/// RenderNode
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SubElementKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_display: Option<TitleDisplay>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    /// Effective flex layout; populated by [`prepare`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flexbox: Option<FlexboxMode>,

    /// Set when repeated rows hoist sub-element labels into column headers.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub header: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<(String, RenderNode)>,

    /// Per-row template slot used by the headered multiple-value layout.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_template: Vec<(String, RenderNode)>,
}

impl RenderNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Self> {
        self.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    #[must_use]
    pub fn has_child(&self, key: &str) -> bool {
        self.child(key).is_some()
    }

    pub fn child_keys(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(k, _)| k.as_str())
    }
}

/// Materialize one fully initialized instance of the sub-element tree:
/// descriptor defaults with the persisted configuration applied, in
/// declaration order. Sub-elements toggled off via their access property and
/// structural rows without a kind are excluded.
#[must_use]
pub fn initialize_composite(
    composite: &Composite,
    config: &PropertyMap,
    localizer: &dyn Localizer,
) -> Vec<(String, RenderNode)> {
    let mut children = Vec::new();

    for sub in &composite.sub_elements {
        if !sub.is_configurable() {
            continue;
        }

        let accessible = config
            .get_sub(sub.key, PropertySuffix::Access)
            .is_none_or(PropertyValue::is_truthy);
        if !accessible {
            continue;
        }

        // Administrator kind override, falling back to the declared kind.
        let kind = config
            .get_sub(sub.key, PropertySuffix::Type)
            .and_then(PropertyValue::as_text)
            .and_then(|raw| raw.parse::<SubElementKind>().ok())
            .or(sub.kind);

        let title = config
            .get_sub(sub.key, PropertySuffix::Title)
            .and_then(PropertyValue::as_text)
            .filter(|text| !text.is_empty())
            .map(ToString::to_string)
            .or_else(|| sub.title.as_ref().map(|label| label.resolve(localizer)))
            .unwrap_or_else(|| sub.key.to_string());

        let placeholder = config
            .get_sub(sub.key, PropertySuffix::Placeholder)
            .and_then(PropertyValue::as_text)
            .filter(|text| !text.is_empty())
            .map(ToString::to_string);

        let description = config
            .get_sub(sub.key, PropertySuffix::Description)
            .and_then(PropertyValue::as_text)
            .filter(|text| !text.is_empty())
            .map(ToString::to_string);

        let required = config
            .get_sub(sub.key, PropertySuffix::Required)
            .is_some_and(PropertyValue::is_truthy);

        children.push((
            sub.key.to_string(),
            RenderNode {
                kind,
                title: Some(title),
                placeholder,
                description,
                required,
                ..RenderNode::new()
            },
        ));
    }

    children
}

/// Resolve the effective flexbox mode for a prepared instance. The automatic
/// mode defers to whether the owning form uses a flexbox layout at all.
pub fn prepare(node: &mut RenderNode, config: &PropertyMap, form: &dyn FormContext) {
    let configured = config
        .get_fixed(FixedProperty::Flexbox)
        .and_then(PropertyValue::as_text)
        .and_then(|raw| raw.parse::<FlexboxMode>().ok())
        .unwrap_or_default();

    let effective = match configured {
        FlexboxMode::Automatic => {
            if form.has_flexbox_layout() {
                FlexboxMode::Yes
            } else {
                FlexboxMode::No
            }
        }
        mode => mode,
    };

    node.flexbox = Some(effective);
}
