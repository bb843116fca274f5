use egui::{CollapsingHeader, Response, Sense, Ui, Vec2, Widget};

use crate::{
    mode::Mode,
    nav::{ElementPath, NavElement},
    profile::Profile,
    session::KioskSession,
    settings::FeatureToggles,
};

#[cfg(feature = "events")]
use crate::events::{
    Event, EventSink, PayloadEnabledToggle, PayloadOptionToggle, PayloadProfileSelect,
};

const DESCRIPTION: &str = "Controls what UI components will be displayed in dashboard kiosk mode.";

/// Options the user can switch on and off in the custom profile, with their
/// labels.
pub const CONFIGURABLE_OPTIONS: [(NavElement, &str); 8] = [
    (NavElement::TimePicker, "Time picker"),
    (NavElement::Title, "Title"),
    (NavElement::SideMenu, "Side Menu"),
    (NavElement::TvToggle, "Kiosk mode button"),
    (NavElement::AddPanelToggle, "Add panel button"),
    (NavElement::SnapshotToggle, "Snapshot Button"),
    (NavElement::StarToggle, "Star button"),
    (NavElement::SharePanelToggle, "Share Dashboard or Panel Button"),
];

/// Settings section for kiosk mode: a profile selector and one checkbox per
/// configurable option.
///
/// Checking or unchecking an option edits the custom profile and switches to
/// it. Nothing is drawn when kiosk customization is switched off in
/// [`FeatureToggles`]. The returned response is marked as changed whenever
/// the session changed.
pub struct KioskSettingsView<'a> {
    session: &'a mut KioskSession,
    features: FeatureToggles,
    enable_toggle: bool,

    #[cfg(feature = "events")]
    events_sink: Option<&'a dyn EventSink>,
}

impl Widget for &mut KioskSettingsView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        if !self.features.custom_kiosk {
            return ui.allocate_response(Vec2::ZERO, Sense::hover());
        }

        let mut changed = false;
        let collapsing = CollapsingHeader::new("Kiosk options")
            .default_open(true)
            .show(ui, |ui| {
                if self.enable_toggle {
                    changed |= self.draw_enable_toggle(ui);
                }
                ui.label("Kiosk type").on_hover_text(DESCRIPTION);
                changed |= self.draw_profiles(ui);
                ui.add_space(8.0);
                changed |= self.draw_options(ui);
            });

        let mut resp = match collapsing.body_response {
            Some(body) => collapsing.header_response.union(body),
            None => collapsing.header_response,
        };
        if changed {
            resp.mark_changed();
        }

        resp
    }
}

impl<'a> KioskSettingsView<'a> {
    pub fn new(session: &'a mut KioskSession, features: FeatureToggles) -> Self {
        Self {
            session,
            features,
            enable_toggle: false,

            #[cfg(feature = "events")]
            events_sink: Option::default(),
        }
    }

    /// Also show a checkbox switching kiosk mode on and off.
    pub fn with_enable_toggle(mut self, enabled: bool) -> Self {
        self.enable_toggle = enabled;
        self
    }

    #[cfg(feature = "events")]
    /// Supply a sink that will receive the changes made through this view.
    pub fn with_event_sink(mut self, sink: &'a dyn EventSink) -> Self {
        self.events_sink = Some(sink);
        self
    }

    fn draw_enable_toggle(&mut self, ui: &mut Ui) -> bool {
        let mut enabled = self.session.enabled();
        if !ui.checkbox(&mut enabled, "Kiosk mode").changed() {
            return false;
        }

        let enabled = self.session.toggle_enabled();

        #[cfg(feature = "events")]
        self.publish_event(Event::EnabledToggle(PayloadEnabledToggle { enabled }));
        #[cfg(not(feature = "events"))]
        let _ = enabled;

        true
    }

    fn draw_profiles(&mut self, ui: &mut Ui) -> bool {
        let current = self.session.config().profile;
        let mut selected = None;

        ui.horizontal(|ui| {
            for profile in Profile::SELECTABLE {
                if ui.radio(current == profile, profile.label()).clicked() {
                    selected = Some(profile);
                }
            }
        });

        let Some(profile) = selected else {
            return false;
        };
        if !self.session.select(profile) {
            return false;
        }

        #[cfg(feature = "events")]
        self.publish_event(Event::ProfileSelect(PayloadProfileSelect { profile }));

        true
    }

    fn draw_options(&mut self, ui: &mut Ui) -> bool {
        let displayed = *self.session.config();
        let mut changed = false;

        for (element, label) in CONFIGURABLE_OPTIONS {
            let mut checked = displayed.get(element.path()).mode == Mode::Editable;
            if ui.checkbox(&mut checked, label).changed() {
                changed |= self.toggle(element.path());
            }
        }

        changed
    }

    fn toggle(&mut self, path: ElementPath) -> bool {
        let path = path.to_string();
        let Some(mode) = self.session.toggle_option(&path) else {
            return false;
        };

        #[cfg(feature = "events")]
        self.publish_event(Event::OptionToggle(PayloadOptionToggle { path, mode }));
        #[cfg(not(feature = "events"))]
        let _ = mode;

        true
    }

    #[cfg(feature = "events")]
    fn publish_event(&self, event: Event) {
        if let Some(sink) = self.events_sink {
            sink.send(event);
        }
    }
}
