use crate::{
    registry::{ElementKindRegistry, OptionsRegistry, OptionsSet, RegistryError},
    surface::{
        Cell, ControlOverride, Predicate, StateEffect, SurfaceBuilder, Widget,
    },
    trace::{SurfaceTraceEvent, SurfaceTraceSink},
};
use formkit_schema::{
    key::{FixedProperty, PropertyKey, PropertySuffix},
    localize::{IdentityLocalizer, Label},
    node::{Composite, SubElement},
    types::SubElementKind,
    value::{PropertyMap, PropertyValue},
};
use std::sync::Mutex;

static CONTACT_SUBS: &[SubElement] = &[
    SubElement::new("salutation", SubElementKind::Select)
        .with_title(Label::Plain("Salutation"))
        .with_options("salutations"),
    SubElement::new("first", SubElementKind::TextField).with_title(Label::Plain("First name")),
    SubElement::new("phone", SubElementKind::Telephone).with_title(Label::Plain("Phone")),
    SubElement::structural("divider"),
];

static CONTACT: Composite = Composite::new("contact", Label::Plain("Contact"), CONTACT_SUBS);

struct StaticOptions;

impl OptionsRegistry for StaticOptions {
    fn options_set(&self, id: &str) -> Result<Option<OptionsSet>, RegistryError> {
        if id == "salutations" {
            Ok(Some(OptionsSet {
                id: id.to_string(),
                label: "Salutations".to_string(),
                entries: vec![
                    ("mr".to_string(), "Mr.".to_string()),
                    ("ms".to_string(), "Ms.".to_string()),
                ],
            }))
        } else {
            Ok(None)
        }
    }
}

struct EmptyOptions;

impl OptionsRegistry for EmptyOptions {
    fn options_set(&self, _id: &str) -> Result<Option<OptionsSet>, RegistryError> {
        Ok(None)
    }
}

struct BrokenOptions;

impl OptionsRegistry for BrokenOptions {
    fn options_set(&self, _id: &str) -> Result<Option<OptionsSet>, RegistryError> {
        Err(RegistryError::Unavailable("registry offline".to_string()))
    }
}

struct KindLabels;

impl ElementKindRegistry for KindLabels {
    fn label_for(&self, sub: &SubElement) -> String {
        match sub.kind {
            Some(SubElementKind::TextField) => "Text field".to_string(),
            Some(kind) => kind.to_string(),
            None => "Markup".to_string(),
        }
    }
}

#[derive(Default)]
struct CapturingSink {
    events: Mutex<Vec<SurfaceTraceEvent>>,
}

impl SurfaceTraceSink for CapturingSink {
    fn on_event(&self, event: SurfaceTraceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn build_contact(options: &dyn OptionsRegistry) -> crate::surface::ConfigurationSurface {
    SurfaceBuilder::new(&CONTACT, options, &KindLabels, &IdentityLocalizer).build()
}

#[test]
fn one_row_per_sub_element_in_declaration_order() {
    let surface = build_contact(&StaticOptions);
    let keys: Vec<&str> = surface
        .settings
        .elements
        .rows
        .iter()
        .map(|row| row.key.as_str())
        .collect();

    assert_eq!(keys, vec!["salutation", "first", "phone", "divider"]);
    assert_eq!(surface.settings.elements.header.len(), 5);
}

#[test]
fn key_cell_is_a_static_label() {
    let surface = build_contact(&StaticOptions);
    let row = surface.settings.elements.row("first").unwrap();

    match &row.cells[0].controls[0].widget {
        Widget::Markup { text } => assert_eq!(text, "first"),
        other => panic!("expected markup, got {other:?}"),
    }
}

#[test]
fn title_group_exists_only_for_configurable_rows() {
    let surface = build_contact(&StaticOptions);

    let first = surface.settings.elements.row("first").unwrap();
    let names: Vec<String> = first.cells[1]
        .controls
        .iter()
        .filter_map(|c| c.name.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(
        names,
        vec!["first__title", "first__placeholder", "first__description"]
    );

    let divider = surface.settings.elements.row("divider").unwrap();
    assert!(divider.cells[1].is_empty());
}

#[test]
fn title_group_is_disabled_while_access_is_unchecked() {
    let surface = build_contact(&StaticOptions);
    let row = surface.settings.elements.row("first").unwrap();

    for control in &row.cells[1].controls {
        let rule = &control.states[0];
        assert_eq!(rule.effect, StateEffect::Disabled);
        assert_eq!(
            rule.when.control,
            PropertyKey::sub("first", PropertySuffix::Access)
        );
        assert_eq!(rule.when.predicate, Predicate::Checked(false));
    }
}

#[test]
fn telephone_rows_get_a_two_option_kind_selector() {
    let surface = build_contact(&StaticOptions);
    let row = surface.settings.elements.row("phone").unwrap();
    let selector = row
        .control(&PropertyKey::sub("phone", PropertySuffix::Type))
        .unwrap();

    assert!(selector.required);
    match &selector.widget {
        Widget::Select { options } => {
            let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values, vec!["tel", "textfield"]);
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn select_rows_with_options_get_kind_and_options_selectors() {
    let surface = build_contact(&StaticOptions);
    let row = surface.settings.elements.row("salutation").unwrap();

    let kind = row
        .control(&PropertyKey::sub("salutation", PropertySuffix::Type))
        .unwrap();
    match &kind.widget {
        Widget::Select { options } => {
            let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values, vec!["select", "select_other", "textfield"]);
        }
        other => panic!("expected select, got {other:?}"),
    }

    let options = row
        .control(&PropertyKey::sub("salutation", PropertySuffix::Options))
        .unwrap();
    assert!(options.required);
    match &options.widget {
        Widget::Select { options } => {
            let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values, vec!["mr", "ms"]);
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn options_selector_hides_while_kind_is_plain_text() {
    let surface = build_contact(&StaticOptions);
    let row = surface.settings.elements.row("salutation").unwrap();
    let options = row
        .control(&PropertyKey::sub("salutation", PropertySuffix::Options))
        .unwrap();

    let invisible = options
        .states
        .iter()
        .find(|rule| rule.effect == StateEffect::Invisible)
        .unwrap();
    assert_eq!(
        invisible.when.control,
        PropertyKey::sub("salutation", PropertySuffix::Type)
    );
    assert_eq!(
        invisible.when.predicate,
        Predicate::Equals("textfield".to_string())
    );

    // The binding evaluates against a live snapshot.
    let snapshot = PropertyMap::from_flat([("salutation__type", PropertyValue::text("textfield"))]);
    assert!(invisible.when.evaluate(&snapshot));

    let snapshot = PropertyMap::from_flat([("salutation__type", PropertyValue::text("select"))]);
    assert!(!invisible.when.evaluate(&snapshot));
}

fn assert_fallback_cell(cell: &Cell, expected_label: &str) {
    let hidden = &cell.controls[0];
    assert!(!hidden.access);
    assert_eq!(hidden.widget, Widget::TextField);

    match &cell.controls[1].widget {
        Widget::Markup { text } => assert_eq!(text, expected_label),
        other => panic!("expected markup, got {other:?}"),
    }
}

#[test]
fn select_row_without_options_falls_back_to_plain_text() {
    let sink = CapturingSink::default();
    let surface = SurfaceBuilder::new(&CONTACT, &EmptyOptions, &KindLabels, &IdentityLocalizer)
        .with_trace(&sink)
        .build();

    let row = surface.settings.elements.row("salutation").unwrap();
    assert!(
        row.control(&PropertyKey::sub("salutation", PropertySuffix::Options))
            .is_none(),
        "no options selector on the fallback path"
    );
    assert_fallback_cell(&row.cells[2], "select");

    let events = sink.events.lock().unwrap();
    assert!(events.contains(&SurfaceTraceEvent::OptionsFallback { key: "salutation" }));
}

#[test]
fn registry_failure_degrades_to_the_fallback_path() {
    let sink = CapturingSink::default();
    let surface = SurfaceBuilder::new(&CONTACT, &BrokenOptions, &KindLabels, &IdentityLocalizer)
        .with_trace(&sink)
        .build();

    let row = surface.settings.elements.row("salutation").unwrap();
    assert_fallback_cell(&row.cells[2], "select");

    let events = sink.events.lock().unwrap();
    assert!(events.iter().any(|event| matches!(
        event,
        SurfaceTraceEvent::OptionsLookupFailed { key: "salutation", .. }
    )));
}

#[test]
fn plain_kinds_show_the_plugin_label() {
    let surface = build_contact(&StaticOptions);
    let row = surface.settings.elements.row("first").unwrap();

    assert_fallback_cell(&row.cells[2], "Text field");
}

#[test]
fn required_toggle_only_for_configurable_rows() {
    let surface = build_contact(&StaticOptions);

    let first = surface.settings.elements.row("first").unwrap();
    let required = first
        .control(&PropertyKey::sub("first", PropertySuffix::Required))
        .unwrap();
    assert_eq!(required.widget, Widget::Checkbox);

    let divider = surface.settings.elements.row("divider").unwrap();
    assert!(divider.cells[3].is_empty());
}

#[test]
fn access_toggle_is_always_present() {
    let surface = build_contact(&StaticOptions);

    for key in ["salutation", "first", "phone", "divider"] {
        let row = surface.settings.elements.row(key).unwrap();
        let access = row
            .control(&PropertyKey::sub(key, PropertySuffix::Access))
            .unwrap();
        assert_eq!(access.widget, Widget::Checkbox);
    }
}

#[test]
fn settings_title_comes_from_the_plugin_label() {
    let surface = build_contact(&StaticOptions);
    assert_eq!(surface.settings.title, "Contact settings");
}

#[test]
fn flexbox_selector_offers_the_three_layout_modes() {
    let surface = build_contact(&StaticOptions);
    let flexbox = &surface.settings.flexbox;

    assert_eq!(
        flexbox.name,
        Some(PropertyKey::Fixed(FixedProperty::Flexbox))
    );
    match &flexbox.widget {
        Widget::Select { options } => {
            let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values, vec!["", "0", "1"]);
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn inherited_controls_receive_the_expected_patches() {
    let surface = build_contact(&StaticOptions);

    let mut saw_default_value = false;
    let mut saw_required = false;
    let mut saw_header_label = false;

    for patch in &surface.overrides {
        match patch {
            ControlOverride::Help { key, append, .. }
                if *key == PropertyKey::Fixed(FixedProperty::DefaultValue) =>
            {
                assert!(!append);
                saw_default_value = true;
            }
            ControlOverride::Help { key, append, .. }
                if *key == PropertyKey::Fixed(FixedProperty::Required) =>
            {
                assert!(append);
                saw_required = true;
            }
            ControlOverride::State { key, rule }
                if *key == PropertyKey::Fixed(FixedProperty::MultipleHeaderLabel) =>
            {
                assert_eq!(rule.effect, StateEffect::Visible);
                assert_eq!(
                    rule.when.control,
                    PropertyKey::Fixed(FixedProperty::MultipleHeader)
                );
                assert_eq!(rule.when.predicate, Predicate::Checked(false));
                saw_header_label = true;
            }
            _ => {}
        }
    }

    assert!(saw_default_value && saw_required && saw_header_label);
}

#[test]
fn state_dependency_graph_is_inspectable() {
    let surface = build_contact(&StaticOptions);
    let edges = surface.state_dependencies();

    let has_edge = |from: &str, to: &str| {
        edges
            .iter()
            .any(|(a, b)| a.to_string() == from && b.to_string() == to)
    };

    assert!(has_edge("first__title", "first__access"));
    assert!(has_edge("salutation__options", "salutation__type"));
    assert!(has_edge("multiple__header_label", "multiple__header"));
}

#[test]
fn surface_serializes_with_flat_control_names() {
    let surface = build_contact(&StaticOptions);
    let json = serde_json::to_value(&surface).unwrap();

    let rows = json["settings"]["elements"]["rows"].as_array().unwrap();
    let first_row = rows
        .iter()
        .find(|row| row["key"] == "first")
        .unwrap();
    let title_control = &first_row["cells"][1]["controls"][0];

    assert_eq!(title_control["name"], "first__title");
}
