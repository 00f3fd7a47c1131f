//! Integration tests for the headless NDJSON protocol
//!
//! Lines are fed through the same parser and session the runner uses, and the
//! resulting events are checked in their serialized form.

use about_pages::headless::input::{parse_line, Input};
use about_pages::headless::session::HeadlessSession;
use about_pages::headless::HeadlessEvent;
use aboutpages_app::{Bootstrap, Page, PageConfig, StartupOptions};
use serde_json::{json, Value};

fn to_values(events: Vec<HeadlessEvent>) -> Vec<Value> {
    events
        .into_iter()
        .map(|e| serde_json::to_value(&e).expect("event serializes"))
        .collect()
}

/// Feed one stdin line the way the runner does
fn feed(session: &mut HeadlessSession, line: &str) -> Vec<Value> {
    match parse_line(line) {
        Some(Input::Message(msg)) => to_values(session.handle(msg)),
        Some(Input::Rejected(reason)) => to_values(vec![HeadlessEvent::error(reason, false)]),
        Some(Input::Quit) | None => Vec::new(),
    }
}

fn kinds(events: &[Value]) -> Vec<&str> {
    events
        .iter()
        .map(|e| e["event"].as_str().unwrap_or_default())
        .collect()
}

fn preferences(bootstrap: &str, location: &str) -> HeadlessSession {
    HeadlessSession::new(
        PageConfig::default(),
        Bootstrap::from_json(bootstrap).unwrap(),
        StartupOptions {
            page: Page::Preferences,
            location: Some(location.to_string()),
            seed: Some(42),
        },
    )
}

#[test]
fn test_shields_permissions_flow() {
    let mut session = preferences(
        r#"{"initSiteSettings": {
            "example.com": { "geolocationPermission": true },
            "foo.com": { "notificationsPermission": false }
        }}"#,
        "about:preferences#shields",
    );

    let start = to_values(session.start());
    assert_eq!(kinds(&start), vec!["command", "render"]);
    assert_eq!(start[0]["command"], json!({ "verb": "check-flash-installed" }));

    let body = &start[1]["view"]["body"];
    assert_eq!(body["tab"], "shields");
    let groups = body["permissions"]["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);

    // Deleting sends a clear command but leaves local state to the next push
    let events = feed(
        &mut session,
        r#"{"action":"delete-permission","permission":"geolocationPermission","hostPattern":"example.com"}"#,
    );
    assert_eq!(kinds(&events), vec!["command"]);
    assert_eq!(
        events[0]["command"],
        json!({
            "verb": "change-site-setting",
            "hostPattern": "example.com",
            "permission": "geolocationPermission",
            "value": null
        })
    );

    let events = feed(
        &mut session,
        r#"{"channel":"site-settings-updated","detail":{"foo.com":{"notificationsPermission":false}}}"#,
    );
    assert_eq!(kinds(&events), vec!["render"]);
    let groups = events[0]["view"]["body"]["permissions"]["groups"]
        .as_array()
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["rows"][0]["hostPattern"], "foo.com");

    // An empty push removes the permission section entirely
    let events = feed(&mut session, r#"{"channel":"site-settings-updated","detail":null}"#);
    assert!(events[0]["view"]["body"].get("permissions").is_none());
}

#[test]
fn test_numeric_select_edit_is_optimistic() {
    let mut session = preferences("{}", "about:preferences#tabs");
    session.start();

    let events = feed(
        &mut session,
        r#"{"action":"change-setting","key":"tabs.tabs-per-page","input":{"type":"select","value":"8","valueType":"number"}}"#,
    );
    assert_eq!(kinds(&events), vec!["command", "render"]);
    assert_eq!(
        events[0]["command"],
        json!({ "verb": "change-setting", "key": "tabs.tabs-per-page", "value": 8 })
    );

    // The authoritative push wins over the local edit
    let events = feed(
        &mut session,
        r#"{"channel":"settings-updated","detail":{"tabs.tabs-per-page":10}}"#,
    );
    assert_eq!(kinds(&events), vec!["render"]);
    let per_page = &events[0]["view"]["body"]["sections"][0]["items"][0];
    assert_eq!(per_page["control"], "select");
    assert_eq!(per_page["value"], "10");
}

#[test]
fn test_ad_control_sends_three_resource_commands() {
    let mut session = preferences("{}", "about:preferences#shields");
    session.start();

    let events = feed(
        &mut session,
        r#"{"action":"change-ad-control","value":"blockAds"}"#,
    );
    let commands: Vec<_> = events
        .iter()
        .filter(|e| e["event"] == "command")
        .map(|e| (e["command"]["resource"].clone(), e["command"]["enabled"].clone()))
        .collect();
    assert_eq!(
        commands,
        vec![
            (json!("adblock"), json!(true)),
            (json!("trackingProtection"), json!(true)),
            (json!("adInsertion"), json!(false)),
        ]
    );
}

#[test]
fn test_rejected_lines_leave_state_untouched() {
    let mut session = preferences("{}", "about:preferences");
    session.start();
    let revision = session.engine().state.revision();

    for line in [
        r#"{"channel":"downloads-updated","detail":{}}"#,
        r#"{"channel":"ledger-updated","detail":{"synopsis":"nope"}}"#,
        r#"{"action":"teleport"}"#,
        "not json at all",
    ] {
        let events = feed(&mut session, line);
        assert_eq!(kinds(&events), vec!["error"], "line: {}", line);
        assert_eq!(events[0]["fatal"], false);
    }

    assert_eq!(session.engine().state.revision(), revision);
}

#[test]
fn test_newer_shields_mode_still_applies_known_fields() {
    let mut session = preferences("{}", "about:preferences#shields");
    session.start();

    feed(
        &mut session,
        r#"{"channel":"bravery-defaults-updated","detail":{"httpsEverywhere":true}}"#,
    );
    let events = feed(
        &mut session,
        r#"{"channel":"bravery-defaults-updated","detail":{"adControl":"showBraveAdsV2","httpsEverywhere":false}}"#,
    );
    assert_eq!(kinds(&events), vec!["render"]);

    let defaults = &session.engine().state.preferences.bravery_defaults;
    assert_eq!(defaults.https_everywhere, Some(false));
    assert_eq!(defaults.ad_control, None);
}

#[test]
fn test_quit_line_and_action() {
    assert_eq!(parse_line("quit"), Some(Input::Quit));

    let mut session = preferences("{}", "about:preferences");
    session.start();
    assert!(!session.should_quit());
    feed(&mut session, r#"{"action":"quit"}"#);
    assert!(session.should_quit());
}

#[test]
fn test_cert_error_accept_flow() {
    let mut session = HeadlessSession::new(
        PageConfig::default(),
        Bootstrap::from_json(
            r#"{"certError": {
                "url": "https://expired.test/",
                "error": "net::ERR_CERT_DATE_INVALID",
                "previousLocation": "about:newtab",
                "frameKey": 2
            }}"#,
        )
        .unwrap(),
        StartupOptions {
            page: Page::CertError,
            ..Default::default()
        },
    );

    let start = to_values(session.start());
    assert_eq!(kinds(&start), vec!["render"]);
    assert_eq!(start[0]["view"]["page"], "cert-error");
    assert_eq!(start[0]["view"]["url"], "https://expired.test/");

    // Accept is not offered before "advanced"
    assert!(feed(&mut session, r#"{"action":"cert-error-accept"}"#).is_empty());

    let events = feed(&mut session, r#"{"action":"cert-error-advanced"}"#);
    assert_eq!(kinds(&events), vec!["render"]);
    let buttons: Vec<_> = events[0]["view"]["buttons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["action"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(buttons, vec!["cert-error-safety", "cert-error-accept"]);

    let events = feed(&mut session, r#"{"action":"cert-error-accept"}"#);
    assert_eq!(kinds(&events), vec!["command", "command"]);
    assert_eq!(
        events[0]["command"],
        json!({ "verb": "accept-cert-error", "url": "https://expired.test/" })
    );
    assert_eq!(
        events[1]["command"],
        json!({ "verb": "dispatch-set-url", "location": "https://expired.test/", "frameKey": 2 })
    );

    // Preferences actions are ignored on this page
    assert!(feed(&mut session, r#"{"action":"manage-passwords"}"#).is_empty());
}
