//! Form control view models
//!
//! Every control carries a [`Binding`] naming what an edit to it changes, so
//! a front end can turn user input back into the matching [`crate::Message`].

use aboutpages_core::{ResourceName, SettingKey};
use serde::Serialize;

use crate::settings_model::SettingsReadModel;

/// What a control edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Binding {
    /// A preference in the settings store (`change-setting`)
    Setting(SettingKey),
    /// A feature default (`toggle-resource`)
    Resource(ResourceName),
    AdControl,
    CookieControl,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "kebab-case")]
pub enum Control {
    Checkbox(CheckboxView),
    Select(SelectView),
    TextInput(TextInputView),
    Link(LinkView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxView {
    pub l10n_id: &'static str,
    pub binding: Binding,
    pub checked: bool,
    pub disabled: bool,
    /// Hidden checkboxes keep their slot in the layout
    pub visible: bool,
}

impl CheckboxView {
    /// Checkbox bound to a boolean preference
    pub fn setting(l10n_id: &'static str, key: SettingKey, settings: &SettingsReadModel) -> Self {
        Self::new(l10n_id, Binding::Setting(key), settings.is_enabled(key))
    }

    /// Checkbox reflecting a feature default; unset reads as unchecked
    pub fn resource(l10n_id: &'static str, resource: ResourceName, value: Option<bool>) -> Self {
        Self::new(l10n_id, Binding::Resource(resource), value.unwrap_or(false))
    }

    fn new(l10n_id: &'static str, binding: Binding, checked: bool) -> Self {
        Self {
            l10n_id,
            binding,
            checked,
            disabled: false,
            visible: true,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl From<CheckboxView> for Control {
    fn from(view: CheckboxView) -> Self {
        Self::Checkbox(view)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l10n_id: Option<String>,
    /// Literal label for options that are not localized (engine names)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SelectOption {
    pub fn localized(value: impl Into<String>, l10n_id: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            l10n_id: Some(l10n_id.into()),
            label: None,
        }
    }

    pub fn labeled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            l10n_id: None,
            label: Some(label.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectView {
    pub l10n_id: &'static str,
    pub binding: Binding,
    /// Selected option value; `None` when nothing is known yet
    pub value: Option<String>,
    pub options: Vec<SelectOption>,
    /// `"number"` when option values must be parsed before storing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<&'static str>,
}

impl SelectView {
    pub fn new(l10n_id: &'static str, binding: Binding, value: Option<String>) -> Self {
        Self {
            l10n_id,
            binding,
            value,
            options: Vec::new(),
            value_type: None,
        }
    }

    /// Select bound to a preference, showing its current or default value
    pub fn setting(l10n_id: &'static str, key: SettingKey, settings: &SettingsReadModel) -> Self {
        let value = settings.value_or_default(key).map(|v| v.display());
        Self::new(l10n_id, Binding::Setting(key), value)
    }

    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn numeric(mut self) -> Self {
        self.value_type = Some("number");
        self
    }
}

impl From<SelectView> for Control {
    fn from(view: SelectView) -> Self {
        Self::Select(view)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputView {
    pub l10n_id: &'static str,
    pub binding: Binding,
    pub value: String,
}

impl TextInputView {
    pub fn setting(l10n_id: &'static str, key: SettingKey, settings: &SettingsReadModel) -> Self {
        Self {
            l10n_id,
            binding: Binding::Setting(key),
            value: settings
                .value_or_default(key)
                .map(|v| v.display())
                .unwrap_or_default(),
        }
    }
}

impl From<TextInputView> for Control {
    fn from(view: TextInputView) -> Self {
        Self::TextInput(view)
    }
}

/// A clickable text that triggers an action
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkView {
    pub l10n_id: &'static str,
    /// `action` name of the message this link sends
    pub action: &'static str,
}

impl From<LinkView> for Control {
    fn from(view: LinkView) -> Self {
        Self::Link(view)
    }
}

/// A titled group of controls
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_l10n_id: Option<&'static str>,
    pub items: Vec<Control>,
}

impl SettingsSection {
    pub fn untitled() -> Self {
        Self {
            title_l10n_id: None,
            items: Vec::new(),
        }
    }

    pub fn titled(title_l10n_id: &'static str) -> Self {
        Self {
            title_l10n_id: Some(title_l10n_id),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, control: impl Into<Control>) -> Self {
        self.items.push(control.into());
        self
    }

    pub fn item_if(self, include: bool, control: impl Into<Control>) -> Self {
        if include {
            self.item(control)
        } else {
            self
        }
    }
}
