//! Zzanggu desktop client
//!
//! 짱구 쇼핑몰 데스크톱 클라이언트

use log::{error, info};
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};
use zg_core::config::AppConfig;
use zg_tauri::bootstrap::{self, logging};

/// Resolve the effective configuration.
///
/// A missing or unreadable file falls back to the defaults;
/// `ZZANGGU_API_BASE_URL` (from the environment or a `.env` file) overrides
/// the configured registration server during development.
fn resolve_config() -> AppConfig {
    let _ = dotenvy::dotenv();

    let config_path = bootstrap::default_config_path();
    let mut config = match bootstrap::load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not initialized yet at this point.
            eprintln!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };

    if let Ok(base_url) = std::env::var("ZZANGGU_API_BASE_URL") {
        config.api.base_url = base_url;
    }

    config
}

pub fn run() {
    let config = resolve_config();

    tauri::Builder::default()
        .plugin(logging::get_builder().build())
        .setup(move |app| {
            let win_builder = WebviewWindowBuilder::new(app, "main", WebviewUrl::default())
                .title("짱구 회원가입")
                .inner_size(480.0, 820.0)
                .min_inner_size(480.0, 640.0);

            let _window = win_builder.build().expect("Failed to build main window");

            let runtime = bootstrap::create_runtime(&config, app.handle());
            app.manage(runtime);

            info!("zzanggu client started, api base {}", config.api.base_url);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            zg_tauri::get_signup_form,
            zg_tauri::update_signup_field,
            zg_tauri::get_signup_field_specs,
            zg_tauri::submit_signup,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            error!("error while running tauri application: {}", e);
            panic!("error while running tauri application: {}", e);
        });
}
