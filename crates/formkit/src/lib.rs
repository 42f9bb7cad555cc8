//! FormKit — composite form-element descriptors and derivations.
//!
//! This is the public meta-crate. Downstream users depend on **formkit**
//! only.
//!
//! It re-exports the stable public API from:
//!   - `formkit-schema` (composite descriptors, property keys and values)
//!   - `formkit-core`   (synthesis, surface building, reconciliation)

pub use formkit_core as core;
pub use formkit_schema as schema;

pub use formkit_schema::{Error, err};

//
// Prelude
//

pub mod prelude {
    pub use formkit_core::prelude::*;
}
