use crate::{
    registry::{ElementKindRegistry, OptionsRegistry, OptionsSet},
    surface::{
        Cell, CompositeSettings, ConfigurationSurface, Condition, Control, ControlOverride,
        ElementsTable, SelectOption, StateEffect, StateRule, TableRow,
    },
    trace::{SurfaceTraceEvent, SurfaceTraceSink},
};
use formkit_schema::{
    key::{FixedProperty, PropertyKey, PropertySuffix},
    localize::Localizer,
    node::{Composite, SubElement},
    types::{SubElementKind, TitleDisplay},
};

///
/// SurfaceBuilder
///
/// Derives the administrator-facing configuration surface for one composite
/// kind. Collaborator lookups are read-only; a failed or empty option-set
/// lookup degrades that sub-element to the plain-text path.
///

pub struct SurfaceBuilder<'a> {
    composite: &'a Composite,
    options: &'a dyn OptionsRegistry,
    kinds: &'a dyn ElementKindRegistry,
    localizer: &'a dyn Localizer,
    trace: Option<&'a dyn SurfaceTraceSink>,
}

impl<'a> SurfaceBuilder<'a> {
    #[must_use]
    pub const fn new(
        composite: &'a Composite,
        options: &'a dyn OptionsRegistry,
        kinds: &'a dyn ElementKindRegistry,
        localizer: &'a dyn Localizer,
    ) -> Self {
        Self {
            composite,
            options,
            kinds,
            localizer,
            trace: None,
        }
    }

    #[must_use]
    pub const fn with_trace(mut self, trace: &'a dyn SurfaceTraceSink) -> Self {
        self.trace = Some(trace);
        self
    }

    #[must_use]
    pub fn build(&self) -> ConfigurationSurface {
        let label = self.composite.label.resolve(self.localizer);
        let title = self
            .localizer
            .translate("@title settings", &[("@title", &label)]);

        ConfigurationSurface {
            settings: CompositeSettings {
                title,
                elements: self.build_table(),
                flexbox: self.flexbox_control(),
            },
            overrides: self.build_overrides(),
        }
    }

    fn t(&self, template: &str) -> String {
        self.localizer.translate(template, &[])
    }

    fn trace_event(&self, event: SurfaceTraceEvent) {
        if let Some(sink) = self.trace {
            sink.on_event(event);
        }
    }

    fn build_table(&self) -> ElementsTable {
        let header = vec![
            self.t("Key"),
            self.t("Title/Description/Placeholder"),
            self.t("Type/Options"),
            self.t("Required"),
            self.t("Visible"),
        ];

        let rows = self
            .composite
            .sub_elements
            .iter()
            .map(|sub| self.build_row(sub))
            .collect();

        ElementsTable { header, rows }
    }

    fn build_row(&self, sub: &SubElement) -> TableRow {
        let cells = vec![
            // Key: always a static label.
            Cell::of(vec![Control::markup(sub.key)]),
            self.title_group_cell(sub),
            self.kind_cell(sub),
            self.required_cell(sub),
            // Access: always editable.
            Cell::of(vec![Control::checkbox(PropertyKey::sub(
                sub.key,
                PropertySuffix::Access,
            ))]),
        ];

        TableRow {
            key: sub.key.to_string(),
            cells,
        }
    }

    /// Title, placeholder, and description controls; empty for structural
    /// rows. All three are disabled while the row's access toggle is
    /// unchecked.
    fn title_group_cell(&self, sub: &SubElement) -> Cell {
        if !sub.is_configurable() {
            return Cell::empty();
        }

        let sub_title = self.sub_title(sub);
        let t_args: &[(&str, &str)] = &[("@title", &sub_title)];

        let title = Control::text_field(PropertyKey::sub(sub.key, PropertySuffix::Title))
            .with_title(self.localizer.translate("@title title", t_args))
            .with_title_display(TitleDisplay::Invisible)
            .with_placeholder(self.t("Enter title..."))
            .with_state(self.disabled_while_hidden(sub));

        let placeholder =
            Control::text_field(PropertyKey::sub(sub.key, PropertySuffix::Placeholder))
                .with_title(self.localizer.translate("@title placeholder", t_args))
                .with_title_display(TitleDisplay::Invisible)
                .with_placeholder(self.t("Enter placeholder..."))
                .with_state(self.disabled_while_hidden(sub));

        let description =
            Control::text_area(PropertyKey::sub(sub.key, PropertySuffix::Description), 2)
                .with_title(self.localizer.translate("@title description", t_args))
                .with_title_display(TitleDisplay::Invisible)
                .with_placeholder(self.t("Enter description..."))
                .with_state(self.disabled_while_hidden(sub));

        Cell::of(vec![title, placeholder, description])
    }

    /// Kind/options cell; one handler per kind variant.
    fn kind_cell(&self, sub: &SubElement) -> Cell {
        match sub.kind {
            Some(SubElementKind::Telephone) => self.telephone_cell(sub),
            Some(SubElementKind::Select) => self.select_cell(sub),
            _ => self.fallback_cell(sub),
        }
    }

    fn telephone_cell(&self, sub: &SubElement) -> Cell {
        let selector = Control::select(
            PropertyKey::sub(sub.key, PropertySuffix::Type),
            vec![
                SelectOption::new("tel", self.t("Telephone")),
                SelectOption::new("textfield", self.t("Text field")),
            ],
        )
        .required()
        .with_state(self.disabled_while_hidden(sub));

        Cell::of(vec![selector])
    }

    fn select_cell(&self, sub: &SubElement) -> Cell {
        let Some(set) = self.resolve_options(sub).filter(|set| !set.is_empty()) else {
            self.trace_event(SurfaceTraceEvent::OptionsFallback { key: sub.key });

            return self.fallback_cell(sub);
        };

        let kind_key = PropertyKey::sub(sub.key, PropertySuffix::Type);

        let kind_selector = Control::select(
            kind_key.clone(),
            vec![
                SelectOption::new("select", self.t("Select")),
                SelectOption::new("select_other", self.t("Select other")),
                SelectOption::new("textfield", self.t("Text field")),
            ],
        )
        .required()
        .with_state(self.disabled_while_hidden(sub));

        let entries = set
            .entries
            .iter()
            .map(|(value, label)| SelectOption::new(value.clone(), label.clone()))
            .collect();

        // The options selector is pointless while the kind selector says
        // plain text.
        let options_selector =
            Control::select(PropertyKey::sub(sub.key, PropertySuffix::Options), entries)
                .required()
                .with_state(self.disabled_while_hidden(sub))
                .with_state(StateRule::new(
                    StateEffect::Invisible,
                    Condition::equals(kind_key, "textfield"),
                ));

        Cell::of(vec![kind_selector, options_selector])
    }

    /// Hidden placeholder control plus the element plugin's display name.
    fn fallback_cell(&self, sub: &SubElement) -> Cell {
        let placeholder =
            Control::text_field(PropertyKey::sub(sub.key, PropertySuffix::Type)).hidden();
        let label = Control::markup(self.kinds.label_for(sub));

        Cell::of(vec![placeholder, label])
    }

    fn required_cell(&self, sub: &SubElement) -> Cell {
        if !sub.is_configurable() {
            return Cell::empty();
        }

        Cell::of(vec![Control::checkbox(PropertyKey::sub(
            sub.key,
            PropertySuffix::Required,
        ))])
    }

    fn resolve_options(&self, sub: &SubElement) -> Option<OptionsSet> {
        let id = sub.options_set?;

        match self.options.options_set(id) {
            Ok(set) => set,
            Err(err) => {
                self.trace_event(SurfaceTraceEvent::OptionsLookupFailed {
                    key: sub.key,
                    message: err.to_string(),
                });

                None
            }
        }
    }

    fn sub_title(&self, sub: &SubElement) -> String {
        sub.title
            .as_ref()
            .map_or_else(|| sub.key.to_string(), |label| label.resolve(self.localizer))
    }

    fn disabled_while_hidden(&self, sub: &SubElement) -> StateRule {
        StateRule::disabled_while_unchecked(PropertyKey::sub(sub.key, PropertySuffix::Access))
    }

    fn flexbox_control(&self) -> Control {
        Control::select(
            PropertyKey::Fixed(FixedProperty::Flexbox),
            vec![
                SelectOption::new("", self.t("Automatic")),
                SelectOption::new("0", self.t("No")),
                SelectOption::new("1", self.t("Yes")),
            ],
        )
        .with_title(self.t("Use Flexbox"))
        .with_help(self.t(
            "If 'Automatic' is selected, the flexbox layout is only used when the form already contains a flexbox element.",
        ))
    }

    fn build_overrides(&self) -> Vec<ControlOverride> {
        vec![
            ControlOverride::Help {
                key: PropertyKey::Fixed(FixedProperty::DefaultValue),
                text: self.t("The default value of the composite element as YAML."),
                append: false,
            },
            ControlOverride::Help {
                key: PropertyKey::Fixed(FixedProperty::Required),
                text: self.t(
                    "Checking this option only displays the required indicator next to this element's label. Choose which sub-elements should be required below.",
                ),
                append: true,
            },
            // The header label is only meaningful while the header toggle
            // is off; hoisted headers take their labels from the
            // sub-elements themselves.
            ControlOverride::State {
                key: PropertyKey::Fixed(FixedProperty::MultipleHeaderLabel),
                rule: StateRule::new(
                    StateEffect::Visible,
                    Condition::checked(
                        PropertyKey::Fixed(FixedProperty::MultipleHeader),
                        false,
                    ),
                ),
            },
        ]
    }
}
