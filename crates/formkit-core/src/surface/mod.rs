//! Declarative configuration surface.
//!
//! The administrator-facing configuration UI is produced as data: controls,
//! widgets, and UI-state bindings expressed as predicates over sibling
//! controls. The rendering layer re-evaluates bindings live; nothing here
//! renders markup or talks to a request lifecycle.

mod build;

#[cfg(test)]
mod tests;

pub use build::SurfaceBuilder;

use formkit_schema::{
    key::PropertyKey,
    types::TitleDisplay,
    value::{PropertyMap, PropertyValue},
};
use serde::Serialize;

fn is_true(b: &bool) -> bool {
    *b
}

///
/// ConfigurationSurface
///
/// The composite's contribution to a larger field-configuration form: the
/// per-sub-element settings table plus patches to inherited controls.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigurationSurface {
    pub settings: CompositeSettings,
    pub overrides: Vec<ControlOverride>,
}

impl ConfigurationSurface {
    /// The explicit dependency graph of UI-state bindings: one edge per
    /// `(dependent control, controlling property)` pair. Inspectable and
    /// testable without a rendering layer.
    #[must_use]
    pub fn state_dependencies(&self) -> Vec<(PropertyKey, PropertyKey)> {
        let mut edges = Vec::new();

        let mut collect = |control: &Control| {
            let Some(name) = &control.name else {
                return;
            };
            for rule in &control.states {
                edges.push((name.clone(), rule.when.control.clone()));
            }
        };

        for row in &self.settings.elements.rows {
            for cell in &row.cells {
                for control in &cell.controls {
                    collect(control);
                }
            }
        }
        collect(&self.settings.flexbox);

        for patch in &self.overrides {
            if let ControlOverride::State { key, rule } = patch {
                edges.push((key.clone(), rule.when.control.clone()));
            }
        }

        edges
    }
}

///
/// CompositeSettings
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompositeSettings {
    /// Fieldset title, already localized.
    pub title: String,
    pub elements: ElementsTable,
    pub flexbox: Control,
}

///
/// ElementsTable
///
/// One row per sub-element; columns are fixed.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementsTable {
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl ElementsTable {
    #[must_use]
    pub fn row(&self, key: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.key == key)
    }
}

///
/// TableRow
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<Cell>,
}

impl TableRow {
    /// Find a named control anywhere in this row.
    #[must_use]
    pub fn control(&self, name: &PropertyKey) -> Option<&Control> {
        self.cells
            .iter()
            .flat_map(|cell| cell.controls.iter())
            .find(|control| control.name.as_ref() == Some(name))
    }
}

///
/// Cell
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<Control>,
}

impl Cell {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            controls: Vec::new(),
        }
    }

    #[must_use]
    pub fn of(controls: Vec<Control>) -> Self {
        Self { controls }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

///
/// Control
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Control {
    /// Property this control edits; read-only markup has no name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<PropertyKey>,

    pub widget: Widget,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_display: Option<TitleDisplay>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    /// Hidden/inert when false.
    #[serde(default, skip_serializing_if = "is_true")]
    pub access: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<StateRule>,
}

impl Control {
    fn with_widget(name: Option<PropertyKey>, widget: Widget) -> Self {
        Self {
            name,
            widget,
            title: None,
            title_display: None,
            placeholder: None,
            help: None,
            required: false,
            access: true,
            states: Vec::new(),
        }
    }

    #[must_use]
    pub fn markup(text: impl Into<String>) -> Self {
        Self::with_widget(None, Widget::Markup { text: text.into() })
    }

    #[must_use]
    pub fn text_field(name: PropertyKey) -> Self {
        Self::with_widget(Some(name), Widget::TextField)
    }

    #[must_use]
    pub fn text_area(name: PropertyKey, rows: u8) -> Self {
        Self::with_widget(Some(name), Widget::TextArea { rows })
    }

    #[must_use]
    pub fn checkbox(name: PropertyKey) -> Self {
        Self::with_widget(Some(name), Widget::Checkbox)
    }

    #[must_use]
    pub fn select(name: PropertyKey, options: Vec<SelectOption>) -> Self {
        Self::with_widget(Some(name), Widget::Select { options })
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_title_display(mut self, display: TitleDisplay) -> Self {
        self.title_display = Some(display);
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.access = false;
        self
    }

    #[must_use]
    pub fn with_state(mut self, rule: StateRule) -> Self {
        self.states.push(rule);
        self
    }
}

///
/// Widget
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[remain::sorted]
pub enum Widget {
    Checkbox,
    Markup { text: String },
    Select { options: Vec<SelectOption> },
    TextArea { rows: u8 },
    TextField,
}

///
/// SelectOption
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

///
/// StateRule
///
/// Declarative UI-state binding: apply `effect` while `when` holds.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateRule {
    pub effect: StateEffect,
    pub when: Condition,
}

impl StateRule {
    #[must_use]
    pub const fn new(effect: StateEffect, when: Condition) -> Self {
        Self { effect, when }
    }

    /// Disable a control while another control's toggle is unchecked.
    #[must_use]
    pub const fn disabled_while_unchecked(control: PropertyKey) -> Self {
        Self::new(StateEffect::Disabled, Condition::checked(control, false))
    }
}

///
/// StateEffect
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum StateEffect {
    Disabled,
    Invisible,
    Visible,
}

///
/// Condition
///
/// Predicate over another named control's current value.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Condition {
    pub control: PropertyKey,
    pub predicate: Predicate,
}

impl Condition {
    #[must_use]
    pub const fn checked(control: PropertyKey, checked: bool) -> Self {
        Self {
            control,
            predicate: Predicate::Checked(checked),
        }
    }

    #[must_use]
    pub fn equals(control: PropertyKey, value: impl Into<String>) -> Self {
        Self {
            control,
            predicate: Predicate::Equals(value.into()),
        }
    }

    /// Evaluate against a property snapshot. The rendering layer evaluates
    /// the same predicate live; this form exists so bindings stay testable
    /// on their own.
    #[must_use]
    pub fn evaluate(&self, props: &PropertyMap) -> bool {
        let value = props.get(&self.control);

        match &self.predicate {
            Predicate::Checked(want) => value.is_some_and(PropertyValue::is_truthy) == *want,
            Predicate::Equals(want) => {
                value.and_then(PropertyValue::as_text) == Some(want.as_str())
            }
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Predicate {
    /// The referenced toggle is (un)checked.
    Checked(bool),
    /// The referenced control's value equals the given token.
    Equals(String),
}

///
/// ControlOverride
///
/// Patch to a control inherited from the generic element-configuration
/// form, contributed by the composite surface.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ControlOverride {
    /// Replace or append to a control's help text.
    Help {
        key: PropertyKey,
        text: String,
        append: bool,
    },

    /// Attach a UI-state binding to a control.
    State { key: PropertyKey, rule: StateRule },
}
