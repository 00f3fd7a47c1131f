//! Tab navigation state for the preferences page

use aboutpages_core::prelude::*;
use aboutpages_core::PreferenceTab;
use url::Url;

/// Which preferences section is showing. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    active: PreferenceTab,
}

impl NavigationState {
    pub fn new(active: PreferenceTab) -> Self {
        Self { active }
    }

    /// Initial state from the page location. The fragment selects the tab
    /// when it names one (case-insensitive); anything else means General.
    pub fn from_location(location: Option<&str>) -> Self {
        let active = location
            .and_then(fragment_of)
            .and_then(|fragment| {
                let tab = PreferenceTab::from_name(&fragment);
                if tab.is_none() {
                    debug!("Fragment '{}' names no tab, starting on general", fragment);
                }
                tab
            })
            .unwrap_or_default();
        Self { active }
    }

    pub fn active(&self) -> PreferenceTab {
        self.active
    }

    /// Select a tab. Always succeeds; selecting the active tab is a no-op.
    pub fn change_tab(&mut self, tab: PreferenceTab) {
        self.active = tab;
    }
}

/// Fragment of a page location, without the leading `#`.
///
/// `about:` locations do not always parse as URLs, so fall back to splitting
/// on the first `#`.
fn fragment_of(location: &str) -> Option<String> {
    match Url::parse(location) {
        Ok(url) => url.fragment().map(str::to_string),
        Err(_) => location
            .split_once('#')
            .map(|(_, fragment)| fragment.to_string()),
    }
    .filter(|fragment| !fragment.is_empty())
}
