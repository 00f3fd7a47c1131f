//! View builders - pure functions from state to a serializable view model
//!
//! Rendering never mutates state; the event loop re-renders after every
//! state change and hands the result to whatever front end is attached.

pub mod cert_error;
pub mod controls;
pub mod ledger;
pub mod tabs;

use aboutpages_core::PreferenceTab;
use serde::Serialize;

use crate::config::PageConfig;
use crate::state::{AppState, Page, PreferencesState};

pub use cert_error::{build_cert_error, CertErrorView};
pub use controls::{Binding, Control, SettingsSection};
pub use ledger::LedgerView;
pub use tabs::{build_tab, PermissionsView, TabView};

/// The rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageView {
    Preferences(PreferencesView),
    CertError(CertErrorView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesView {
    pub navigation: NavigationView,
    pub body: TabView,
}

/// Left-hand aside: one button per tab plus the hints block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub title_l10n_id: &'static str,
    pub buttons: Vec<NavigationButton>,
    pub hints: HintsView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationButton {
    pub tab: PreferenceTab,
    pub l10n_id: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintsView {
    pub title_l10n_id: &'static str,
    pub hint_l10n_id: String,
    pub feedback_l10n_id: &'static str,
    pub contact_url: String,
}

/// Render whichever page the state is showing
pub fn render(state: &AppState) -> PageView {
    match state.page {
        Page::Preferences => {
            PageView::Preferences(render_preferences(&state.preferences, &state.config))
        }
        Page::CertError => PageView::CertError(build_cert_error(&state.cert_error)),
    }
}

pub fn render_preferences(prefs: &PreferencesState, config: &PageConfig) -> PreferencesView {
    PreferencesView {
        navigation: render_navigation(prefs, config),
        body: build_tab(prefs, config),
    }
}

fn render_navigation(prefs: &PreferencesState, config: &PageConfig) -> NavigationView {
    let active = prefs.navigation.active();
    let buttons = PreferenceTab::ALL
        .iter()
        .map(|tab| NavigationButton {
            tab: *tab,
            l10n_id: tab.l10n_id(),
            icon: tab.icon(),
            selected: *tab == active,
        })
        .collect();

    NavigationView {
        title_l10n_id: "prefAsideTitle",
        buttons,
        hints: HintsView {
            title_l10n_id: "hintsTitle",
            hint_l10n_id: prefs.hints.l10n_id(),
            feedback_l10n_id: "sendUsFeedback",
            contact_url: config.contact_url.clone(),
        },
    }
}
