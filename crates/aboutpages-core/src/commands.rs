//! Outbound commands sent from the page to the browser process
//!
//! Commands are fire-and-forget: the page never waits for an acknowledgment.
//! The authoritative result, if any, comes back later as a push event.

use serde::Serialize;

use crate::settings::{SettingKey, SettingValue};
use crate::types::{PermissionName, ResourceName};

/// Properties of a frame opened with [`UpstreamCommand::NewFrame`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameProps {
    pub location: String,
}

/// A command addressed to the browser process by verb
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verb", rename_all = "kebab-case")]
pub enum UpstreamCommand {
    /// Persist a preference value
    ChangeSetting { key: SettingKey, value: SettingValue },

    /// Enable or disable a global resource
    SetResourceEnabled {
        resource: ResourceName,
        enabled: bool,
    },

    /// Record (or clear, with `None`) a per-host permission decision
    ChangeSiteSetting {
        #[serde(rename = "hostPattern")]
        host_pattern: String,
        permission: PermissionName,
        value: Option<bool>,
    },

    /// Trust a certificate that failed validation
    AcceptCertError { url: String },

    /// Navigate the frame identified by `frame_key`
    DispatchSetUrl {
        location: String,
        #[serde(rename = "frameKey")]
        frame_key: Option<i64>,
    },

    /// Open a new frame, optionally in the foreground
    NewFrame { props: FrameProps, foreground: bool },

    /// Ask whether the flash plugin is installed; answered by `flash-installed-updated`
    CheckFlashInstalled,
}

impl UpstreamCommand {
    /// Verb as it appears on the wire (for logging)
    pub fn verb(&self) -> &'static str {
        match self {
            Self::ChangeSetting { .. } => "change-setting",
            Self::SetResourceEnabled { .. } => "set-resource-enabled",
            Self::ChangeSiteSetting { .. } => "change-site-setting",
            Self::AcceptCertError { .. } => "accept-cert-error",
            Self::DispatchSetUrl { .. } => "dispatch-set-url",
            Self::NewFrame { .. } => "new-frame",
            Self::CheckFlashInstalled => "check-flash-installed",
        }
    }

    pub fn change_setting(key: SettingKey, value: impl Into<SettingValue>) -> Self {
        Self::ChangeSetting {
            key,
            value: value.into(),
        }
    }

    pub fn set_resource_enabled(resource: ResourceName, enabled: bool) -> Self {
        Self::SetResourceEnabled { resource, enabled }
    }

    pub fn clear_site_setting(host_pattern: impl Into<String>, permission: PermissionName) -> Self {
        Self::ChangeSiteSetting {
            host_pattern: host_pattern.into(),
            permission,
            value: None,
        }
    }

    pub fn set_url(location: impl Into<String>, frame_key: Option<i64>) -> Self {
        Self::DispatchSetUrl {
            location: location.into(),
            frame_key,
        }
    }

    pub fn new_frame(location: impl Into<String>, foreground: bool) -> Self {
        Self::NewFrame {
            props: FrameProps {
                location: location.into(),
            },
            foreground,
        }
    }
}
