use eframe::{App, CreationContext};
use egui::{CollapsingHeader, Context, ScrollArea, Ui};
use egui_kiosk::{
    dash_nav, side_menu, time_controls, AppConfig, KioskContext, KioskSession,
    KioskSettingsView, PageToolbar, ToolbarButton,
};
use log::info;

pub const DASHBOARD_ID: &str = "demo_dashboard";
#[cfg(feature = "events")]
pub const EVENTS_LIMIT: usize = 50;

#[cfg(feature = "events")]
pub use crossbeam::channel::{unbounded, Receiver, Sender};
#[cfg(feature = "events")]
pub use egui_kiosk::events::Event;

/// Toolbar buttons of the demo dashboard: config path, icon, tooltip.
const TOOLBAR_BUTTONS: [(&str, &str, &str); 7] = [
    ("dashNav.addPanelToggle", "➕", "Add panel"),
    ("dashNav.starToggle", "☆", "Mark as favorite"),
    ("dashNav.sharePanelToggle", "🔗", "Share dashboard or panel"),
    ("dashNav.saveDashboardToggle", "💾", "Save dashboard"),
    ("dashNav.snapshotToggle", "📷", "Snapshot"),
    ("dashNav.dashboardSettingsToggle", "⚙", "Dashboard settings"),
    ("dashNav.tvToggle", "📺", "Cycle view mode"),
];

pub struct DemoApp {
    pub app_config: AppConfig,
    pub dashboard_mounted: bool,
    pub show_sidebar: bool,
    pub last_action: Option<String>,
    #[cfg(feature = "events")]
    pub last_events: Vec<String>,
    #[cfg(feature = "events")]
    pub event_publisher: crate::Sender<Event>,
    #[cfg(feature = "events")]
    pub event_consumer: crate::Receiver<Event>,
}

impl DemoApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        Self::with_config(&cc.egui_ctx, Self::default_config())
    }

    pub fn with_config(ctx: &Context, app_config: AppConfig) -> Self {
        KioskSession::mount(ctx, DASHBOARD_ID);

        #[cfg(feature = "events")]
        let (event_publisher, event_consumer) = crate::unbounded();

        Self {
            app_config,
            dashboard_mounted: true,
            show_sidebar: true,
            last_action: None,
            #[cfg(feature = "events")]
            last_events: Vec::default(),
            #[cfg(feature = "events")]
            event_publisher,
            #[cfg(feature = "events")]
            event_consumer,
        }
    }

    /// Demo runs with kiosk customization switched on.
    pub fn default_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.feature_toggles.custom_kiosk = true;
        cfg
    }

    pub fn ui_feature_toggles(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Feature toggles")
            .default_open(true)
            .show(ui, |ui| {
                ui.checkbox(
                    &mut self.app_config.feature_toggles.custom_kiosk,
                    "customKiosk",
                )
                .on_hover_text("With the toggle off every navigation element is shown");
            });
    }

    pub fn ui_dashboard(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Dashboard")
            .default_open(true)
            .show(ui, |ui| {
                let label = if self.dashboard_mounted {
                    "Unmount dashboard"
                } else {
                    "Mount dashboard"
                };
                if ui.button(label).clicked() {
                    self.toggle_mounted(ui.ctx());
                }
            });
    }

    pub fn toggle_mounted(&mut self, ctx: &Context) {
        if self.dashboard_mounted {
            KioskSession::unmount(ctx, DASHBOARD_ID);
            info!("dashboard {DASHBOARD_ID} unmounted");
        } else {
            KioskSession::mount(ctx, DASHBOARD_ID);
            info!("dashboard {DASHBOARD_ID} mounted");
        }
        self.dashboard_mounted = !self.dashboard_mounted;
    }

    pub fn ui_kiosk(&mut self, ui: &mut Ui) {
        if !self.dashboard_mounted {
            ui.label("Mount the dashboard to configure kiosk mode.");
            return;
        }

        let mut session = KioskSession::load(ui.ctx(), DASHBOARD_ID);
        let view = KioskSettingsView::new(&mut session, self.app_config.feature_toggles)
            .with_enable_toggle(true);
        #[cfg(feature = "events")]
        let view = view.with_event_sink(&self.event_publisher);
        let mut view = view;

        if ui.add(&mut view).changed() {
            session.save(ui.ctx(), DASHBOARD_ID);
        }
    }

    #[cfg(feature = "events")]
    pub fn ui_events(&mut self, ui: &mut Ui) {
        while let Ok(event) = self.event_consumer.try_recv() {
            self.last_events.push(format!("{event:?}"));
        }
        if self.last_events.len() > EVENTS_LIMIT {
            let overflow = self.last_events.len() - EVENTS_LIMIT;
            self.last_events.drain(..overflow);
        }

        CollapsingHeader::new("Events").show(ui, |ui| {
            if ui.button("Clear").clicked() {
                self.last_events.clear();
            }
            for e in self.last_events.iter().rev() {
                ui.label(e);
            }
        });
    }

    pub fn ui_dashboard_view(&mut self, ui: &mut Ui, kiosk: &KioskContext) {
        side_menu(ui, kiosk, "demo_side_menu", |ui| {
            ui.heading("Menu");
            for item in ["Home", "Dashboards", "Explore", "Alerting"] {
                if ui.selectable_label(false, item).clicked() {
                    self.last_action = Some(format!("opened {item}"));
                }
            }
        });

        dash_nav(ui, kiosk, |ui| {
            let toolbar = PageToolbar::new("Production overview")
                .parent("General")
                .back_button(true)
                .show(ui, kiosk, |ui| {
                    for (path, icon, tip) in TOOLBAR_BUTTONS {
                        let clicked = ToolbarButton::new(path, icon)
                            .tooltip(tip)
                            .show(ui, kiosk)
                            .is_some_and(|resp| resp.clicked());
                        if clicked {
                            self.last_action = Some(tip.to_string());
                        }
                    }
                    time_controls(ui, kiosk, |ui| {
                        ui.label("Last 6 hours");
                        if ui.small_button("⟳").clicked() {
                            self.last_action = Some("refresh".to_string());
                        }
                    });
                });
            if toolbar.back_clicked {
                self.last_action = Some("back".to_string());
            }
        });

        ui.separator();
        ui.label("Panels would be drawn here.");
        if let Some(action) = &self.last_action {
            ui.weak(format!("last action: {action}"));
        }
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.show_sidebar {
            egui::SidePanel::right("right")
                .default_width(300.0)
                .min_width(300.0)
                .show(ctx, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        self.ui_feature_toggles(ui);
                        self.ui_dashboard(ui);
                        self.ui_kiosk(ui);
                        #[cfg(feature = "events")]
                        self.ui_events(ui);
                    });
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if ui
                .small_button(if self.show_sidebar { "▶" } else { "◀" })
                .on_hover_text("Toggle settings")
                .clicked()
            {
                self.show_sidebar = !self.show_sidebar;
            }

            if !self.dashboard_mounted {
                ui.centered_and_justified(|ui| ui.label("Dashboard is not mounted"));
                return;
            }

            let kiosk = KioskSession::load(ctx, DASHBOARD_ID).context(self.app_config.feature_toggles);
            self.ui_dashboard_view(ui, &kiosk);
        });
    }
}
