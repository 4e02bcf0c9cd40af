/// Declarative description of one control on a plugin settings page.
///
/// The host renders the control and reports edits back as
/// [`FieldChange`] values keyed by `id`; the plugin owns what happens to
/// the reported value.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelField {
    /// Stable identifier the host echoes back in change reports.
    pub id: &'static str,

    /// Label shown next to the control.
    pub name: &'static str,

    /// Supporting text shown under the label.
    pub description: &'static str,

    /// Widget the host should render.
    pub control: FieldControl,

    /// Current value, used to pre-fill the control.
    pub value: FieldValue,
}

/// Widget kind for a settings field.
///
/// Slider bounds and text placeholders are presentation affordances only;
/// plugins accept reported values without enforcing them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldControl {
    /// Free-text input.
    Text {
        /// Hint shown while the input is empty.
        placeholder: &'static str,
    },

    /// Numeric slider with inclusive bounds.
    Slider { min: f64, max: f64, step: f64 },
}

impl FieldControl {
    /// The value kind this control produces, as used in error messages.
    #[must_use]
    pub fn value_kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Slider { .. } => "number",
        }
    }
}

/// A value carried by a settings field, either current or edited.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// The kind name for this value, matching [`FieldControl::value_kind`].
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
        }
    }
}

/// A single user edit reported by the host settings UI.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    /// Identifier of the edited field.
    pub id: String,

    /// The value the user entered.
    pub value: FieldValue,
}

impl FieldChange {
    /// Report a text edit.
    #[must_use]
    pub fn text(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: FieldValue::Text(value.into()),
        }
    }

    /// Report a numeric edit.
    #[must_use]
    pub fn number(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value: FieldValue::Number(value),
        }
    }
}
