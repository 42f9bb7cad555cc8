//! Descriptor validation orchestration and shared helpers.

pub mod naming;

use crate::{error::ErrorTree, node::Composite};

///
/// ValidateNode
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

/// Run full descriptor validation in a staged, deterministic order.
pub fn validate_composite(composite: &Composite) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    // Phase 1: validate each node (structural + local invariants).
    for sub in &composite.sub_elements {
        if let Err(errs) = ValidateNode::validate(sub) {
            errors.child(sub.key).merge(errs);
        }
    }

    // Phase 2: enforce composite-wide invariants.
    naming::validate_sub_keys(composite, &mut errors);

    errors.result()
}

#[cfg(test)]
mod tests {
    use super::validate_composite;
    use crate::{
        localize::Label,
        node::{Composite, SubElement},
        types::SubElementKind,
    };

    #[test]
    fn well_formed_composite_passes() {
        static SUBS: &[SubElement] = &[
            SubElement::new("first", SubElementKind::TextField),
            SubElement::new("last", SubElementKind::TextField),
            SubElement::structural("spacer"),
        ];
        static NAME: Composite = Composite::new("name", Label::Plain("Name"), SUBS);

        assert!(validate_composite(&NAME).is_ok());
    }

    #[test]
    fn separator_in_sub_key_is_rejected() {
        static SUBS: &[SubElement] = &[SubElement::new("first__name", SubElementKind::TextField)];
        static BAD: Composite = Composite::new("bad", Label::Plain("Bad"), SUBS);

        let errs = validate_composite(&BAD).unwrap_err();
        assert!(errs.to_string().contains("separator"));
    }

    #[test]
    fn duplicate_sub_keys_are_rejected() {
        static SUBS: &[SubElement] = &[
            SubElement::new("first", SubElementKind::TextField),
            SubElement::new("first", SubElementKind::TextArea),
        ];
        static BAD: Composite = Composite::new("bad", Label::Plain("Bad"), SUBS);

        let errs = validate_composite(&BAD).unwrap_err();
        assert!(errs.to_string().contains("duplicate"));
    }

    #[test]
    fn empty_sub_key_is_rejected() {
        static SUBS: &[SubElement] = &[SubElement::new("", SubElementKind::TextField)];
        static BAD: Composite = Composite::new("bad", Label::Plain("Bad"), SUBS);

        assert!(validate_composite(&BAD).is_err());
    }

    #[test]
    fn options_reference_requires_an_options_kind() {
        static SUBS: &[SubElement] =
            &[SubElement::new("first", SubElementKind::TextField).with_options("salutations")];
        static BAD: Composite = Composite::new("bad", Label::Plain("Bad"), SUBS);

        let errs = validate_composite(&BAD).unwrap_err();
        assert!(errs.to_string().contains("option"));
    }

    #[test]
    fn select_without_options_reference_is_allowed() {
        // Falls back to the plain-text path at surface-build time.
        static SUBS: &[SubElement] = &[SubElement::new("title", SubElementKind::Select)];
        static OK: Composite = Composite::new("ok", Label::Plain("Ok"), SUBS);

        assert!(validate_composite(&OK).is_ok());
    }
}
