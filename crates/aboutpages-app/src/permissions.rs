//! Aggregation of per-host permission decisions for the Shields tab

use aboutpages_core::{PermissionName, SiteSettings, UpstreamCommand};
use serde::Serialize;

/// One host's explicit decision for a permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRow {
    pub host_pattern: String,
    pub granted: bool,
}

/// Read-only view over a site-settings snapshot
#[derive(Debug, Clone, Copy)]
pub struct PermissionView<'a> {
    site_settings: &'a SiteSettings,
}

impl<'a> PermissionView<'a> {
    pub fn new(site_settings: &'a SiteSettings) -> Self {
        Self { site_settings }
    }

    /// Some host has an explicit allow or deny for `name`
    pub fn has_entry_for_permission(&self, name: PermissionName) -> bool {
        self.site_settings
            .iter()
            .any(|(_, entry)| entry.decision(name).is_some())
    }

    /// Some host has an explicit decision for any known permission
    pub fn is_non_empty(&self) -> bool {
        PermissionName::ALL
            .iter()
            .any(|name| self.has_entry_for_permission(*name))
    }

    /// Rows for `name`, in host order. Hosts with no fields at all, or with
    /// no decision for `name`, are skipped.
    pub fn rows_for(&self, name: PermissionName) -> Vec<PermissionRow> {
        self.site_settings
            .iter()
            .filter(|(_, entry)| !entry.is_empty())
            .filter_map(|(host, entry)| {
                entry.decision(name).map(|granted| PermissionRow {
                    host_pattern: host.to_string(),
                    granted,
                })
            })
            .collect()
    }

    /// Permissions to list, in display order
    pub fn listed_permissions(&self) -> Vec<PermissionName> {
        PermissionName::ALL
            .iter()
            .copied()
            .filter(|name| self.has_entry_for_permission(*name))
            .collect()
    }
}

/// Clear a recorded decision upstream.
///
/// The local snapshot is left alone; the browser confirms by pushing a new
/// site-settings snapshot.
pub fn delete_permission(name: PermissionName, host_pattern: &str) -> UpstreamCommand {
    UpstreamCommand::clear_site_setting(host_pattern, name)
}
