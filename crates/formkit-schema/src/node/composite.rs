use crate::{localize::Label, node::SubElementList};
use serde::Serialize;

///
/// Composite
///
/// Static declaration of a composite element kind: a single logical field
/// internally composed of several primitive sub-fields.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Composite {
    /// Stable identifier of the composite kind.
    pub ident: &'static str,

    /// Display label of the composite kind.
    pub label: Label,

    pub sub_elements: SubElementList,

    /// Whether instances of this kind may collect multiple value rows.
    pub multiple_values: bool,
}

impl Composite {
    #[must_use]
    pub const fn new(ident: &'static str, label: Label, items: &'static [super::SubElement]) -> Self {
        Self {
            ident,
            label,
            sub_elements: SubElementList { items },
            multiple_values: true,
        }
    }

    #[must_use]
    pub const fn single_valued(mut self) -> Self {
        self.multiple_values = false;
        self
    }

    #[must_use]
    pub const fn supports_multiple_values(&self) -> bool {
        self.multiple_values
    }
}
