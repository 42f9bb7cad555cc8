//! Structured property keys.
//!
//! Property names are a flattened namespace at the persistence/UI boundary
//! (`{sub_key}__{suffix}`), but internally every key is a structured value so
//! suffix checks are exact and never confuse a fixed name that happens to
//! contain the separator (`multiple__header`).

use crate::{PROPERTY_SEPARATOR, macros::impl_token_serde, types::UnknownToken};
use derive_more::Display;
use std::{fmt, str::FromStr};

///
/// PropertySuffix
///
/// Per-sub-element derived property suffixes.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum PropertySuffix {
    #[display("access")]
    Access,
    #[display("description")]
    Description,
    #[display("options")]
    Options,
    #[display("placeholder")]
    Placeholder,
    #[display("required")]
    Required,
    #[display("title")]
    Title,
    #[display("type")]
    Type,
}

impl FromStr for PropertySuffix {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(Self::Access),
            "description" => Ok(Self::Description),
            "options" => Ok(Self::Options),
            "placeholder" => Ok(Self::Placeholder),
            "required" => Ok(Self::Required),
            "title" => Ok(Self::Title),
            "type" => Ok(Self::Type),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

impl_token_serde!(PropertySuffix);

///
/// FixedProperty
///
/// Composite-level properties independent of any sub-element, including the
/// generic base properties shared by every element kind.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum FixedProperty {
    #[display("admin_title")]
    AdminTitle,
    #[display("default_value")]
    DefaultValue,
    #[display("description")]
    Description,
    #[display("description_display")]
    DescriptionDisplay,
    #[display("disabled")]
    Disabled,
    #[display("flexbox")]
    Flexbox,
    #[display("multiple")]
    Multiple,
    #[display("multiple__header")]
    MultipleHeader,
    #[display("multiple__header_label")]
    MultipleHeaderLabel,
    #[display("private")]
    Private,
    #[display("required")]
    Required,
    #[display("title")]
    Title,
    #[display("title_display")]
    TitleDisplay,
}

impl FromStr for FixedProperty {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin_title" => Ok(Self::AdminTitle),
            "default_value" => Ok(Self::DefaultValue),
            "description" => Ok(Self::Description),
            "description_display" => Ok(Self::DescriptionDisplay),
            "disabled" => Ok(Self::Disabled),
            "flexbox" => Ok(Self::Flexbox),
            "multiple" => Ok(Self::Multiple),
            "multiple__header" => Ok(Self::MultipleHeader),
            "multiple__header_label" => Ok(Self::MultipleHeaderLabel),
            "private" => Ok(Self::Private),
            "required" => Ok(Self::Required),
            "title" => Ok(Self::Title),
            "title_display" => Ok(Self::TitleDisplay),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

impl_token_serde!(FixedProperty);

///
/// PropertyKey
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PropertyKey {
    /// A composite-level property.
    Fixed(FixedProperty),

    /// A derived per-sub-element property.
    Sub { key: String, suffix: PropertySuffix },

    /// Anything else; carried through untouched.
    Other(String),
}

impl PropertyKey {
    pub fn sub(key: impl Into<String>, suffix: PropertySuffix) -> Self {
        Self::Sub {
            key: key.into(),
            suffix,
        }
    }

    /// Parse a flat property name. Fixed names win over suffix derivation so
    /// that `multiple__header` never parses as a sub-element key. A suffix
    /// only matches when the full segment after the *last* separator is a
    /// known suffix and a non-empty prefix remains.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Ok(fixed) = raw.parse::<FixedProperty>() {
            return Self::Fixed(fixed);
        }

        if let Some((prefix, rest)) = raw.rsplit_once(PROPERTY_SEPARATOR) {
            if !prefix.is_empty() {
                if let Ok(suffix) = rest.parse::<PropertySuffix>() {
                    return Self::Sub {
                        key: prefix.to_string(),
                        suffix,
                    };
                }
            }
        }

        Self::Other(raw.to_string())
    }

    /// Suffix of a derived key; `None` for fixed and unknown keys.
    #[must_use]
    pub const fn suffix(&self) -> Option<PropertySuffix> {
        match self {
            Self::Sub { suffix, .. } => Some(*suffix),
            Self::Fixed(_) | Self::Other(_) => None,
        }
    }

    /// Sub-element key of a derived key.
    #[must_use]
    pub fn sub_key(&self) -> Option<&str> {
        match self {
            Self::Sub { key, .. } => Some(key),
            Self::Fixed(_) | Self::Other(_) => None,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(fixed) => write!(f, "{fixed}"),
            Self::Sub { key, suffix } => write!(f, "{key}{PROPERTY_SEPARATOR}{suffix}"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

impl FromStr for PropertyKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<FixedProperty> for PropertyKey {
    fn from(fixed: FixedProperty) -> Self {
        Self::Fixed(fixed)
    }
}

impl_token_serde!(PropertyKey);
