//! Runtime derivations over composite descriptors.
//!
//! Everything here is a synchronous, single-pass transformation over
//! in-memory descriptors and property maps. External collaborators (option
//! sets, element-kind labels, value generation, localization) enter through
//! the traits in [`registry`]; a failed collaborator degrades the affected
//! sub-element, it never fails a derivation.

pub mod reconcile;
pub mod registry;
pub mod render;
pub mod surface;
pub mod testgen;
pub mod trace;
pub mod wrapper;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        reconcile::reconcile,
        registry::{
            ElementKindRegistry, FormContext, GenerateOptions, OptionsRegistry, OptionsSet,
            RegistryError, ValueGenerator,
        },
        render::{RenderNode, initialize_composite, prepare},
        surface::{ConfigurationSurface, SurfaceBuilder},
        testgen::test_values,
        wrapper::wrap_for_multiple_values,
    };
    pub use formkit_schema::prelude::*;
}
