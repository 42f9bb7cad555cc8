//! Composite element descriptors and their derived property schemas.

mod macros;

pub mod error;
pub mod key;
pub mod localize;
pub mod node;
pub mod synthesize;
pub mod types;
pub mod validate;
pub mod value;

/// Separator token between a sub-element key and a derived property suffix.
pub const PROPERTY_SEPARATOR: &str = "__";

/// Maximum length for sub-element keys.
pub const MAX_SUB_KEY_LEN: usize = 64;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        key::{FixedProperty, PropertyKey, PropertySuffix},
        localize::{IdentityLocalizer, Label, Localizer},
        node::{Composite, SubElement, SubElementList},
        types::{FlexboxMode, SubElementKind, TitleDisplay},
        value::{PropertyMap, PropertyValue, ValueMap},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(error::ErrorTree),
}
