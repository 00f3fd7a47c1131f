//! One builder per preferences tab

use aboutpages_core::{
    AdControl, CookieControl, PermissionName, PreferenceTab, ResourceName, SettingKey,
};
use serde::Serialize;

use crate::config::PageConfig;
use crate::state::PreferencesState;

use super::controls::{
    Binding, CheckboxView, LinkView, SelectOption, SelectView, SettingsSection, TextInputView,
};
use super::ledger::{build_ledger, LedgerView};

/// Startup modes offered on the General tab, as (value, l10n id)
const STARTUP_MODES: [(&str, &str); 3] = [
    ("lastTime", "startsWithOptionLastTime"),
    ("homePage", "startsWithOptionHomePage"),
    ("newTabPage", "startsWithOptionNewTabPage"),
];

/// Search engines offered on the Search tab, as (value, label)
const SEARCH_ENGINES: [(&str, &str); 2] = [
    ("content/search/google.xml", "Google"),
    ("content/search/duckduckgo.xml", "DuckDuckGo"),
];

const TABS_PER_PAGE: [i64; 4] = [6, 8, 10, 20];

/// Body of the active tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    pub tab: PreferenceTab,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SettingsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionsView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<LedgerView>,
    /// Text shown for tabs that have no settings yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl TabView {
    fn with_sections(tab: PreferenceTab, sections: Vec<SettingsSection>) -> Self {
        Self {
            tab,
            sections,
            permissions: None,
            ledger: None,
            placeholder: None,
        }
    }

    fn coming_soon(tab: PreferenceTab, text: &'static str) -> Self {
        Self {
            placeholder: Some(text),
            ..Self::with_sections(tab, Vec::new())
        }
    }
}

/// Site permissions block on the Shields tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsView {
    pub title_l10n_id: &'static str,
    pub groups: Vec<PermissionGroupView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGroupView {
    pub permission: PermissionName,
    pub rows: Vec<PermissionRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRowView {
    pub host_pattern: String,
    pub granted: bool,
    pub status_l10n_id: &'static str,
}

/// Dispatch to exactly one builder
pub fn build_tab(prefs: &PreferencesState, config: &PageConfig) -> TabView {
    match prefs.navigation.active() {
        PreferenceTab::General => general_tab(prefs, config),
        PreferenceTab::Search => search_tab(prefs),
        PreferenceTab::Tabs => tabs_tab(prefs),
        PreferenceTab::Security => security_tab(prefs),
        PreferenceTab::Shields => shields_tab(prefs),
        PreferenceTab::Payments => payments_tab(prefs),
        PreferenceTab::Sync => TabView::coming_soon(PreferenceTab::Sync, "Sync settings coming soon"),
        PreferenceTab::Advanced => {
            TabView::coming_soon(PreferenceTab::Advanced, "Advanced settings coming soon")
        }
    }
}

pub fn general_tab(prefs: &PreferencesState, config: &PageConfig) -> TabView {
    let settings = &prefs.settings;

    let language = settings
        .value_or_default(SettingKey::Language)
        .map(|v| v.display())
        .unwrap_or_else(|| prefs.default_language(&config.navigator_language));
    let language_select = SelectView::new(
        "selectedLanguage",
        Binding::Setting(SettingKey::Language),
        Some(language),
    )
    .options(
        prefs
            .language_codes
            .iter()
            .map(|code| SelectOption::localized(code.as_str(), code.as_str())),
    );

    let startup_select = SelectView::setting("startsWith", SettingKey::StartupMode, settings)
        .options(
            STARTUP_MODES
                .iter()
                .map(|(value, l10n_id)| SelectOption::localized(*value, *l10n_id)),
        );

    let show_favicon = settings.is_enabled(SettingKey::ShowBookmarksToolbarFavicon);

    TabView::with_sections(
        PreferenceTab::General,
        vec![
            SettingsSection::untitled()
                .item(language_select)
                .item(startup_select)
                .item(TextInputView::setting(
                    "myHomepage",
                    SettingKey::Homepage,
                    settings,
                )),
            SettingsSection::titled("bookmarkToolbarSettings")
                .item(CheckboxView::setting(
                    "bookmarkToolbar",
                    SettingKey::ShowBookmarksToolbar,
                    settings,
                ))
                .item(CheckboxView::setting(
                    "bookmarkToolbarShowFavicon",
                    SettingKey::ShowBookmarksToolbarFavicon,
                    settings,
                ))
                .item(
                    CheckboxView::setting(
                        "bookmarkToolbarShowOnlyFavicon",
                        SettingKey::ShowBookmarksToolbarOnlyFavicon,
                        settings,
                    )
                    .visible(show_favicon),
                ),
            SettingsSection::titled("appearanceSettings")
                .item(CheckboxView::setting(
                    "showHomeButton",
                    SettingKey::ShowHomeButton,
                    settings,
                ))
                .item_if(
                    config.platform.supports_menu_autohide(),
                    CheckboxView::setting("autoHideMenuBar", SettingKey::AutoHideMenu, settings),
                )
                .item(CheckboxView::setting(
                    "disableTitleMode",
                    SettingKey::DisableTitleMode,
                    settings,
                )),
        ],
    )
}

pub fn search_tab(prefs: &PreferencesState) -> TabView {
    let settings = &prefs.settings;
    TabView::with_sections(
        PreferenceTab::Search,
        vec![
            SettingsSection::untitled().item(
                SelectView::setting(
                    "defaultSearchEngine",
                    SettingKey::DefaultSearchEngine,
                    settings,
                )
                .options(
                    SEARCH_ENGINES
                        .iter()
                        .map(|(value, label)| SelectOption::labeled(*value, *label)),
                ),
            ),
            SettingsSection::titled("suggestionTypes")
                .item(CheckboxView::setting(
                    "history",
                    SettingKey::HistorySuggestions,
                    settings,
                ))
                .item(CheckboxView::setting(
                    "bookmarks",
                    SettingKey::BookmarkSuggestions,
                    settings,
                ))
                .item(CheckboxView::setting(
                    "openedTabs",
                    SettingKey::OpenedTabSuggestions,
                    settings,
                )),
        ],
    )
}

pub fn tabs_tab(prefs: &PreferencesState) -> TabView {
    let settings = &prefs.settings;
    let per_page = SelectView::setting("tabsPerTabPage", SettingKey::TabsPerPage, settings)
        .numeric()
        .options(
            TABS_PER_PAGE
                .iter()
                .map(|n| SelectOption::labeled(n.to_string(), n.to_string())),
        );

    TabView::with_sections(
        PreferenceTab::Tabs,
        vec![SettingsSection::untitled()
            .item(per_page)
            .item(CheckboxView::setting(
                "switchToNewTabs",
                SettingKey::SwitchToNewTabs,
                settings,
            ))
            .item(CheckboxView::setting(
                "paintTabs",
                SettingKey::PaintTabs,
                settings,
            ))
            .item(CheckboxView::setting(
                "showTabPreviews",
                SettingKey::ShowTabPreviews,
                settings,
            ))],
    )
}

pub fn security_tab(prefs: &PreferencesState) -> TabView {
    let settings = &prefs.settings;
    TabView::with_sections(
        PreferenceTab::Security,
        vec![
            SettingsSection::untitled()
                .item(CheckboxView::setting(
                    "usePasswordManager",
                    SettingKey::PasswordManagerEnabled,
                    settings,
                ))
                .item(CheckboxView::setting(
                    "useOnePassword",
                    SettingKey::OnePasswordEnabled,
                    settings,
                ))
                .item(CheckboxView::setting(
                    "useDashlane",
                    SettingKey::DashlaneEnabled,
                    settings,
                )),
            SettingsSection::titled("pluginSettings").item(
                CheckboxView::resource(
                    "enableFlash",
                    ResourceName::Flash,
                    prefs.bravery_defaults.flash,
                )
                .disabled(!prefs.flash_installed),
            ),
            SettingsSection::untitled().item(LinkView {
                l10n_id: "managePasswords",
                action: "manage-passwords",
            }),
        ],
    )
}

pub fn shields_tab(prefs: &PreferencesState) -> TabView {
    let settings = &prefs.settings;
    let defaults = &prefs.bravery_defaults;

    let ad_control = SelectView::new(
        "adControl",
        Binding::AdControl,
        defaults.ad_control.map(|mode| mode.as_str().to_string()),
    )
    .options(
        AdControl::ALL
            .iter()
            .map(|mode| SelectOption::localized(mode.as_str(), mode.as_str())),
    );

    let cookie_control = SelectView::new(
        "cookieControl",
        Binding::CookieControl,
        defaults.cookie_control.map(|mode| mode.as_str().to_string()),
    )
    .options(
        CookieControl::ALL
            .iter()
            .map(|mode| SelectOption::localized(mode.as_str(), mode.as_str())),
    );

    let mut view = TabView::with_sections(
        PreferenceTab::Shields,
        vec![
            SettingsSection::titled("braveryDefaults")
                .item(ad_control)
                .item(cookie_control)
                .item(CheckboxView::resource(
                    "httpsEverywhere",
                    ResourceName::HttpsEverywhere,
                    defaults.https_everywhere,
                ))
                .item(CheckboxView::resource(
                    "safeBrowsing",
                    ResourceName::SafeBrowsing,
                    defaults.safe_browsing,
                ))
                .item(CheckboxView::resource(
                    "noScript",
                    ResourceName::NoScript,
                    defaults.no_script,
                )),
            SettingsSection::titled("advancedPrivacySettings")
                .item(CheckboxView::setting(
                    "doNotTrack",
                    SettingKey::DoNotTrack,
                    settings,
                ))
                .item(CheckboxView::setting(
                    "blockCanvasFingerprinting",
                    SettingKey::BlockCanvasFingerprinting,
                    settings,
                )),
        ],
    );
    view.permissions = build_permissions(prefs);
    view
}

/// Permission list, or `None` when no host has any decision
fn build_permissions(prefs: &PreferencesState) -> Option<PermissionsView> {
    let permissions = prefs.permissions();
    if !permissions.is_non_empty() {
        return None;
    }

    let groups = permissions
        .listed_permissions()
        .into_iter()
        .map(|permission| PermissionGroupView {
            permission,
            rows: permissions
                .rows_for(permission)
                .into_iter()
                .map(|row| PermissionRowView {
                    status_l10n_id: if row.granted {
                        "alwaysAllow"
                    } else {
                        "alwaysDeny"
                    },
                    host_pattern: row.host_pattern,
                    granted: row.granted,
                })
                .collect(),
        })
        .collect();

    Some(PermissionsView {
        title_l10n_id: "sitePermissions",
        groups,
    })
}

pub fn payments_tab(prefs: &PreferencesState) -> TabView {
    TabView {
        ledger: Some(build_ledger(&prefs.ledger)),
        ..TabView::with_sections(PreferenceTab::Payments, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;
    use crate::state::AppState;
    use crate::view::controls::Control;
    use aboutpages_core::{SettingValue, SiteSettingEntry, SiteSettings};

    fn checkbox_ids(view: &TabView) -> Vec<&'static str> {
        view.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .filter_map(|control| match control {
                Control::Checkbox(cb) => Some(cb.l10n_id),
                _ => None,
            })
            .collect()
    }

    fn find_checkbox<'a>(view: &'a TabView, l10n_id: &str) -> &'a CheckboxView {
        view.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .find_map(|control| match control {
                Control::Checkbox(cb) if cb.l10n_id == l10n_id => Some(cb),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_build_tab_matches_active_tab() {
        let mut state = AppState::preferences();
        for tab in PreferenceTab::ALL {
            state.preferences.navigation.change_tab(tab);
            assert_eq!(build_tab(&state.preferences, &state.config).tab, tab);
        }
    }

    #[test]
    fn test_autohide_menu_hidden_on_darwin() {
        let mut state = AppState::preferences();
        state.config.platform = Platform::Darwin;
        let view = general_tab(&state.preferences, &state.config);
        assert!(!checkbox_ids(&view).contains(&"autoHideMenuBar"));

        state.config.platform = Platform::Linux;
        let view = general_tab(&state.preferences, &state.config);
        assert!(checkbox_ids(&view).contains(&"autoHideMenuBar"));
    }

    #[test]
    fn test_only_favicon_visible_with_favicon() {
        let mut state = AppState::preferences();
        let view = general_tab(&state.preferences, &state.config);
        assert!(!find_checkbox(&view, "bookmarkToolbarShowOnlyFavicon").visible);

        state.preferences.settings.set(
            SettingKey::ShowBookmarksToolbarFavicon,
            SettingValue::Bool(true),
        );
        let view = general_tab(&state.preferences, &state.config);
        assert!(find_checkbox(&view, "bookmarkToolbarShowOnlyFavicon").visible);
    }

    #[test]
    fn test_flash_checkbox_disabled_until_installed() {
        let mut state = AppState::preferences();
        let view = security_tab(&state.preferences);
        assert!(find_checkbox(&view, "enableFlash").disabled);

        state.preferences.flash_installed = true;
        let view = security_tab(&state.preferences);
        assert!(!find_checkbox(&view, "enableFlash").disabled);
    }

    #[test]
    fn test_permissions_section_omitted_when_empty() {
        let mut state = AppState::preferences();
        state.preferences.site_settings = SiteSettings::new().with_entry("foo.com", SiteSettingEntry::new());
        assert!(shields_tab(&state.preferences).permissions.is_none());

        state.preferences.site_settings = SiteSettings::new()
            .with_entry(
                "example.com",
                SiteSettingEntry::new().with_decision(PermissionName::Geolocation, true),
            )
            .with_entry("foo.com", SiteSettingEntry::new());
        let permissions = shields_tab(&state.preferences).permissions.unwrap();
        assert_eq!(permissions.groups.len(), 1);
        assert_eq!(permissions.groups[0].permission, PermissionName::Geolocation);
        assert_eq!(
            permissions.groups[0].rows,
            vec![PermissionRowView {
                host_pattern: "example.com".to_string(),
                granted: true,
                status_l10n_id: "alwaysAllow",
            }]
        );
    }

    #[test]
    fn test_placeholder_tabs() {
        let mut state = AppState::preferences();
        state.preferences.navigation.change_tab(PreferenceTab::Sync);
        let view = build_tab(&state.preferences, &state.config);
        assert!(view.sections.is_empty());
        assert_eq!(view.placeholder, Some("Sync settings coming soon"));
    }
}
