//! Certificate error page view

use serde::Serialize;

use crate::cert_error::CertErrorState;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    pub l10n_id: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertErrorView {
    pub text_l10n_id: &'static str,
    pub url: String,
    pub error: String,
    pub buttons: Vec<ButtonView>,
}

/// "Back to safety" is always offered; the url, when known, adds either
/// "advanced" or, once advanced, "accept"
pub fn build_cert_error(state: &CertErrorState) -> CertErrorView {
    let mut buttons = vec![ButtonView {
        l10n_id: "certErrorSafety",
        action: "cert-error-safety",
    }];
    if state.can_accept() {
        buttons.push(ButtonView {
            l10n_id: "certErrorButtonText",
            action: "cert-error-accept",
        });
    } else if state.can_show_advanced() {
        buttons.push(ButtonView {
            l10n_id: "certErrorAdvanced",
            action: "cert-error-advanced",
        });
    }

    CertErrorView {
        text_l10n_id: "certErrorText",
        url: state.url.clone().unwrap_or_default(),
        error: state.error.clone().unwrap_or_default(),
        buttons,
    }
}
