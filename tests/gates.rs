use egui::{CentralPanel, Context, RawInput, Ui};
use egui_kiosk::{
    dash_nav, side_menu, time_controls, Capability, Chrome, Configuration, ElementConfig,
    ElementPath, FeatureToggles, KioskContext, KioskSession, Mode, NavElement, PageToolbar,
    ToolbarButton,
};

const ON: FeatureToggles = FeatureToggles { custom_kiosk: true };
const OFF: FeatureToggles = FeatureToggles {
    custom_kiosk: false,
};

fn run_ui(mut f: impl FnMut(&mut Ui)) {
    let ctx = Context::default();
    let _ = ctx.run(RawInput::default(), |ctx| {
        CentralPanel::default().show(ctx, |ui| f(ui));
    });
}

fn enabled(config: Configuration) -> KioskSession {
    let mut session = KioskSession::default();
    session.set_config(config);
    session.toggle_enabled();
    session
}

#[test]
fn test_standard_profile_gates() {
    let kiosk = enabled(Configuration::standard()).context(ON);

    run_ui(|ui| {
        assert_eq!(side_menu(ui, &kiosk, "menu", |_| 1), None);
        assert_eq!(time_controls(ui, &kiosk, |_| 2), Some(2));
        assert_eq!(dash_nav(ui, &kiosk, |_| 3), Some(3));
        assert!(ToolbarButton::new("dashNav.starToggle", "star")
            .show(ui, &kiosk)
            .is_none());
        assert!(ToolbarButton::new("dashNav.tvToggle", "tv")
            .tooltip("Cycle view mode")
            .show(ui, &kiosk)
            .is_some());
    });
}

#[test]
fn test_feature_toggle_off_renders_everything() {
    let kiosk = enabled(Configuration::tv()).context(OFF);

    run_ui(|ui| {
        assert_eq!(side_menu(ui, &kiosk, "menu", |_| 1), Some(1));
        assert_eq!(time_controls(ui, &kiosk, |_| 2), Some(2));
        assert!(ToolbarButton::new("dashNav.starToggle", "star")
            .show(ui, &kiosk)
            .is_some());
    });
    assert_eq!(kiosk.lookup("dashNav.sideMenu"), ElementConfig::EDITABLE);
}

#[test]
fn test_kiosk_mode_off_renders_everything() {
    let mut session = KioskSession::default();
    session.set_config(Configuration::tv());
    let kiosk = session.context(ON);

    assert_eq!(kiosk.config(), &Configuration::disabled());
    for e in NavElement::ALL {
        assert_eq!(kiosk.capability(e.path()), Capability::Render);
    }
}

#[test]
fn test_unknown_button_path_renders() {
    let kiosk = enabled(Configuration::tv()).context(ON);
    run_ui(|ui| {
        assert!(ToolbarButton::new("dashNav.doesNotExist", "?")
            .show(ui, &kiosk)
            .is_some());
    });
}

#[test]
fn test_hidden_title_keeps_toolbar_contents() {
    let tv = enabled(Configuration::tv()).context(ON);
    let standard = enabled(Configuration::standard()).context(ON);

    run_ui(|ui| {
        let resp = PageToolbar::new("Overview")
            .parent("General")
            .back_button(true)
            .show(ui, &tv, |_| "contents");
        assert_eq!(resp.inner, "contents");
        assert!(!resp.title_shown);
        assert!(!resp.back_clicked);

        let resp = PageToolbar::new("Overview").show(ui, &standard, |_| 7);
        assert_eq!(resp.inner, 7);
        assert!(resp.title_shown);
    });
}

#[test]
fn test_hidden_dash_nav() {
    let config = Configuration::custom().with(ElementPath::DashNav, ElementConfig::HIDDEN);
    let kiosk = enabled(config).context(ON);

    run_ui(|ui| {
        assert_eq!(dash_nav(ui, &kiosk, |_| ()), None);
    });
}

struct Recorder<'a> {
    calls: &'a mut Vec<&'static str>,
}

impl Chrome for Recorder<'_> {
    type Output = &'static str;

    fn render(self, _ui: &mut Ui) -> Self::Output {
        self.calls.push("render");
        "full"
    }

    fn render_restricted(self, _ui: &mut Ui) -> Self::Output {
        self.calls.push("restricted");
        "restricted"
    }

    fn suppress(self, _ui: &mut Ui) -> Option<Self::Output> {
        self.calls.push("suppress");
        Some("placeholder")
    }
}

#[test]
fn test_gate_dispatches_by_mode() {
    let config = Configuration::custom()
        .with(NavElement::Title.path(), ElementConfig::new(Mode::ReadOnly))
        .with(NavElement::SideMenu.path(), ElementConfig::HIDDEN);
    let kiosk = KioskContext::new(ON, config);

    let mut calls = Vec::new();
    run_ui(|ui| {
        calls.clear();
        let out = [
            kiosk.show(ui, "dashNav.timePicker", Recorder { calls: &mut calls }),
            kiosk.show(ui, "dashNav.title", Recorder { calls: &mut calls }),
            kiosk.show(ui, "dashNav.sideMenu", Recorder { calls: &mut calls }),
        ];
        assert_eq!(out, [Some("full"), Some("restricted"), Some("placeholder")]);
    });
    assert_eq!(calls, vec!["render", "restricted", "suppress"]);
}

#[test]
fn test_read_only_renders_like_editable_by_default() {
    let config =
        Configuration::custom().with(NavElement::TimePicker.path(), ElementConfig::new(Mode::ReadOnly));
    let kiosk = KioskContext::new(ON, config);

    run_ui(|ui| {
        assert_eq!(time_controls(ui, &kiosk, |_| "drawn"), Some("drawn"));
    });
}
