use crate::macros::impl_token_serde;
use derive_more::Display;
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// UnknownToken
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown token: '{0}'")]
pub struct UnknownToken(pub String);

///
/// SubElementKind
///
/// Rendering/validation kind a sub-element may declare. Sub-elements without
/// a kind are structural rows and expose no per-field configuration.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum SubElementKind {
    #[display("date")]
    Date,
    #[display("email")]
    Email,
    #[display("number")]
    Number,
    #[display("select")]
    Select,
    #[display("select_other")]
    SelectOther,
    #[display("tel")]
    Telephone,
    #[display("textarea")]
    TextArea,
    #[display("textfield")]
    TextField,
}

impl SubElementKind {
    /// Kinds whose values come from a named option set.
    #[must_use]
    pub const fn supports_options(self) -> bool {
        matches!(self, Self::Select | Self::SelectOther)
    }

    #[must_use]
    pub const fn supports_placeholder(self) -> bool {
        !self.supports_options()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Email => "email",
            Self::Number => "number",
            Self::Select => "select",
            Self::SelectOther => "select_other",
            Self::Telephone => "tel",
            Self::TextArea => "textarea",
            Self::TextField => "textfield",
        }
    }
}

impl FromStr for SubElementKind {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "email" => Ok(Self::Email),
            "number" => Ok(Self::Number),
            "select" => Ok(Self::Select),
            "select_other" => Ok(Self::SelectOther),
            "tel" => Ok(Self::Telephone),
            "textarea" => Ok(Self::TextArea),
            "textfield" => Ok(Self::TextField),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

impl_token_serde!(SubElementKind);

///
/// TitleDisplay
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum TitleDisplay {
    #[default]
    #[display("before")]
    Before,
    #[display("after")]
    After,
    #[display("inline")]
    Inline,
    #[display("invisible")]
    Invisible,
}

impl FromStr for TitleDisplay {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            "inline" => Ok(Self::Inline),
            "invisible" => Ok(Self::Invisible),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

impl_token_serde!(TitleDisplay);

///
/// FlexboxMode
///
/// Composite flex layout mode. `Automatic` defers to the owning form; the
/// persisted token is the empty string so that an unset property and the
/// automatic mode coincide.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum FlexboxMode {
    #[default]
    #[display("automatic")]
    Automatic,
    #[display("no")]
    No,
    #[display("yes")]
    Yes,
}

impl FlexboxMode {
    /// Persisted token form.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Automatic => "",
            Self::No => "0",
            Self::Yes => "1",
        }
    }
}

impl FromStr for FlexboxMode {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "automatic" => Ok(Self::Automatic),
            "0" | "no" => Ok(Self::No),
            "1" | "yes" => Ok(Self::Yes),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

impl_token_serde!(FlexboxMode);
