use std::env;

use demo_core::DemoApp;
use eframe::{run_native, NativeOptions};
use egui_kiosk::AppConfig;
use log::{error, info};

const APP_NAME: &str = "Kiosk Dashboard";
const CONFIG_ENV: &str = "KIOSK_DASHBOARD_CONFIG";

/// Application config from the file named by `KIOSK_DASHBOARD_CONFIG`.
/// `None` when the variable is unset or the file can't be used.
fn app_config() -> Option<AppConfig> {
    let path = env::var(CONFIG_ENV).ok()?;

    match AppConfig::from_path(&path) {
        Ok(cfg) => {
            info!("loaded config from {path}");
            Some(cfg)
        }
        Err(err) => {
            error!("{err}, using defaults");
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = app_config();
    run_native(
        APP_NAME,
        NativeOptions::default(),
        Box::new(|cc| {
            let app = match cfg {
                Some(cfg) => DemoApp::with_config(&cc.egui_ctx, cfg),
                None => DemoApp::new(cc),
            };
            Ok(Box::new(app))
        }),
    )
}
