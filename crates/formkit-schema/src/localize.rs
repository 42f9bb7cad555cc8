//! Localization seam.
//!
//! Labels are resolved to plain text during schema synthesis and surface
//! building; nothing downstream carries a deferred translation.

use serde::Serialize;

/// Placeholder/value pairs substituted into a template.
pub type LocalizeArgs<'a> = &'a [(&'a str, &'a str)];

///
/// Localizer
///
/// External resolver turning a label template plus arguments into plain text.
///

pub trait Localizer {
    fn translate(&self, template: &str, args: LocalizeArgs<'_>) -> String;
}

///
/// IdentityLocalizer
///
/// Pass-through resolver: substitutes arguments into the template verbatim.
/// The default for hosts without a translation layer.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn translate(&self, template: &str, args: LocalizeArgs<'_>) -> String {
        let mut text = template.to_string();
        for (placeholder, value) in args {
            text = text.replace(placeholder, value);
        }

        text
    }
}

///
/// Label
///
/// Human-readable title, either plain text or a localizable template.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Label {
    Plain(&'static str),
    Template(&'static str),
}

impl Label {
    /// Resolve to plain text through the given localizer.
    #[must_use]
    pub fn resolve(&self, localizer: &dyn Localizer) -> String {
        match self {
            Self::Plain(text) => (*text).to_string(),
            Self::Template(template) => localizer.translate(template, &[]),
        }
    }
}
