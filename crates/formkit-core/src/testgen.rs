//! Synthetic test-value generation.
//!
//! Produces complete value rows for QA previews by delegating every
//! sub-element to the external per-field generator. No caching; determinism
//! is whatever the generator provides.

use crate::{
    registry::{FormContext, GenerateOptions, ValueGenerator},
    render::initialize_composite,
};
use formkit_schema::{localize::Localizer, node::Composite, value::PropertyMap, value::ValueMap};

/// Number of value rows produced per request.
pub const TEST_VALUE_ROWS: usize = 3;

/// Generate synthetic complete value rows for a composite instance.
///
/// Always returns exactly [`TEST_VALUE_ROWS`] rows, each with one entry per
/// sub-element present on the initialized composite.
#[must_use]
pub fn test_values(
    composite: &Composite,
    config: &PropertyMap,
    form: &dyn FormContext,
    generator: &dyn ValueGenerator,
    options: &GenerateOptions,
    localizer: &dyn Localizer,
) -> Vec<ValueMap> {
    let children = initialize_composite(composite, config, localizer);

    (0..TEST_VALUE_ROWS)
        .map(|_| {
            children
                .iter()
                .map(|(key, node)| {
                    (
                        key.clone(),
                        generator.generate(form.id(), key, node, options),
                    )
                })
                .collect()
        })
        .collect()
}
