//! Collaborator interfaces.
//!
//! The core consumes these, it never implements them: named option sets,
//! element-kind display labels, per-field synthetic value generation, and
//! the owning form's context.

use crate::render::RenderNode;
use formkit_schema::{
    node::SubElement,
    value::{PropertyValue, ValueMap},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// RegistryError
///
/// Collaborator-reported failure. The core defines no retry policy; a failed
/// lookup degrades the affected sub-element's options to empty.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("option-set registry unavailable: {0}")]
    Unavailable(String),
}

///
/// OptionsSet
///
/// Externally stored, named list of selectable key/label pairs.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OptionsSet {
    pub id: String,
    pub label: String,
    pub entries: Vec<(String, String)>,
}

impl OptionsSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

///
/// OptionsRegistry
///

pub trait OptionsRegistry {
    /// Resolve a named option set by its declared identifier. `Ok(None)`
    /// when no set with that identifier exists.
    fn options_set(&self, id: &str) -> Result<Option<OptionsSet>, RegistryError>;
}

///
/// ElementKindRegistry
///

pub trait ElementKindRegistry {
    /// Display label of the element plugin backing a sub-element.
    fn label_for(&self, sub: &SubElement) -> String;
}

///
/// GenerateOptions
///
/// Shared options passed through to the per-field value generator.
///

#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
    pub seed: Option<u64>,
    pub extras: ValueMap,
}

///
/// ValueGenerator
///

pub trait ValueGenerator {
    /// Produce one synthetic value for a sub-element's live configuration.
    fn generate(
        &self,
        form_id: &str,
        key: &str,
        node: &RenderNode,
        options: &GenerateOptions,
    ) -> PropertyValue;
}

///
/// FormContext
///
/// The owning form, as far as this core needs to know it.
///

pub trait FormContext {
    fn id(&self) -> &str;

    /// Whether the form already contains a flexbox layout element.
    fn has_flexbox_layout(&self) -> bool;
}
