//! Multiple-value wrapping.
//!
//! Decides how a composite configured to accept multiple instances lays out
//! its repeated rows: plain rows, or a headered grid where sub-element
//! labels are hoisted to column headers. The transform is per-render; the
//! descriptor itself is never mutated.

use crate::render::{RenderNode, initialize_composite};
use formkit_schema::{
    key::FixedProperty,
    localize::Localizer,
    node::Composite,
    types::TitleDisplay,
    value::{PropertyMap, PropertyValue},
};

/// Apply the multiple-value layout to a prepared render tree.
///
/// No-op unless the instance's multiple flag is set and the composite kind
/// supports multiple values at all. When the header layout is also
/// requested, every initialized sub-element is relocated into the per-row
/// template with its title display forced invisible, because the label then
/// lives in the column header instead of each row.
pub fn wrap_for_multiple_values(
    node: &mut RenderNode,
    composite: &Composite,
    config: &PropertyMap,
    localizer: &dyn Localizer,
) {
    let multiple = config
        .get_fixed(FixedProperty::Multiple)
        .is_some_and(PropertyValue::is_truthy);
    if !multiple || !composite.supports_multiple_values() {
        return;
    }

    let header = config
        .get_fixed(FixedProperty::MultipleHeader)
        .is_some_and(PropertyValue::is_truthy);
    if !header {
        return;
    }

    node.header = true;

    for (key, mut child) in initialize_composite(composite, config, localizer) {
        child.title_display = Some(TitleDisplay::Invisible);
        node.row_template.push((key, child));
    }

    // The relocated sub-elements must no longer appear as direct children.
    node.children
        .retain(|(key, _)| !composite.sub_elements.contains(key));
}
