use egui_kiosk::{AppConfig, Configuration, KioskSession, Mode, NavElement, Profile};
use serde_json::json;

#[test]
fn test_configuration_wire_format() {
    let value = serde_json::to_value(Configuration::standard()).expect("serialize config");
    assert_eq!(
        value,
        json!({
            "profile": "standard",
            "dashNav": {
                "mode": "editable",
                "timePicker": { "mode": "editable" },
                "title": { "mode": "editable" },
                "sideMenu": { "mode": "hidden" },
                "tvToggle": { "mode": "editable" },
                "addPanelToggle": { "mode": "hidden" },
                "dashboardSettingsToggle": { "mode": "hidden" },
                "saveDashboardToggle": { "mode": "hidden" },
                "snapshotToggle": { "mode": "hidden" },
                "starToggle": { "mode": "hidden" },
                "sharePanelToggle": { "mode": "hidden" }
            }
        })
    );
}

#[test]
fn test_partial_configuration_falls_open() {
    let c: Configuration = serde_json::from_value(json!({
        "profile": "custom",
        "dashNav": { "starToggle": { "mode": "readOnly" } }
    }))
    .expect("deserialize config");

    assert_eq!(c.profile, Profile::Custom);
    assert_eq!(c.dash_nav.element(NavElement::StarToggle).mode, Mode::ReadOnly);
    assert_eq!(c.dash_nav.element(NavElement::Title).mode, Mode::Editable);
}

#[test]
fn test_missing_dash_nav_uses_profile_table() {
    let c: Configuration =
        serde_json::from_value(json!({ "profile": "tv" })).expect("deserialize config");
    assert_eq!(c, Configuration::tv());
    assert_eq!(c.dash_nav.element(NavElement::SideMenu).mode, Mode::Hidden);

    let c: Configuration =
        serde_json::from_value(json!({ "profile": "standard" })).expect("deserialize config");
    assert_eq!(c, Configuration::standard());
    assert_eq!(c.dash_nav.element(NavElement::TimePicker).mode, Mode::Editable);
}

#[test]
fn test_unknown_profile_is_rejected() {
    let res = serde_json::from_value::<Configuration>(json!({ "profile": "kiosk" }));
    assert!(res.is_err());
}

#[test]
fn test_session_roundtrip() {
    let mut session = KioskSession::default();
    session.toggle_enabled();
    session.toggle_option("dashNav.sideMenu");

    let json = serde_json::to_string(&session).expect("serialize session");
    let back: KioskSession = serde_json::from_str(&json).expect("deserialize session");
    assert_eq!(back, session);
}

#[test]
fn test_app_config_wire_format() {
    let cfg = AppConfig::from_json_str(r#"{"featureToggles":{"customKiosk":true},"other":1}"#)
        .expect("parse app config");
    assert!(cfg.feature_toggles.custom_kiosk);
    assert_eq!(
        serde_json::to_value(&cfg).expect("serialize app config"),
        json!({ "featureToggles": { "customKiosk": true } })
    );
}
