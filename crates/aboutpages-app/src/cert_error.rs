//! Certificate error page state

use aboutpages_core::UpstreamCommand;

use crate::bootstrap::CertErrorInfo;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertErrorState {
    pub url: Option<String>,
    pub error: Option<String>,
    pub previous_location: Option<String>,
    pub frame_key: Option<i64>,
    /// The user asked to see the "accept anyway" option
    pub advanced: bool,
}

impl CertErrorState {
    pub fn new(info: CertErrorInfo) -> Self {
        Self {
            url: info.url.filter(|url| !url.is_empty()),
            error: info.error,
            previous_location: info.previous_location,
            frame_key: info.frame_key,
            advanced: false,
        }
    }

    /// "Advanced" is only offered when there is a url to accept
    pub fn can_show_advanced(&self) -> bool {
        self.url.is_some() && !self.advanced
    }

    pub fn can_accept(&self) -> bool {
        self.url.is_some() && self.advanced
    }

    /// Reveal the accept button; returns whether anything changed
    pub fn show_advanced(&mut self) -> bool {
        if !self.can_show_advanced() {
            return false;
        }
        self.advanced = true;
        true
    }

    /// Trust the certificate and reload the frame at the failing url.
    /// Empty when accepting is not currently offered.
    pub fn accept(&self) -> Vec<UpstreamCommand> {
        match (&self.url, self.advanced) {
            (Some(url), true) => vec![
                UpstreamCommand::AcceptCertError { url: url.clone() },
                UpstreamCommand::set_url(url.clone(), self.frame_key),
            ],
            _ => Vec::new(),
        }
    }

    /// Navigate the frame back to where the user came from
    pub fn back_to_safety(&self) -> Option<UpstreamCommand> {
        self.previous_location
            .as_ref()
            .map(|location| UpstreamCommand::set_url(location.clone(), self.frame_key))
    }
}
