//! Declarative composite descriptors.
//!
//! Descriptors are defined once per composite kind, usually as `static`
//! items, and shared by every instance of that kind. Nothing here mutates
//! after construction; all derivation happens in [`crate::synthesize`].

mod composite;
mod sub_element;

pub use composite::Composite;
pub use sub_element::{SubElement, SubElementList};
