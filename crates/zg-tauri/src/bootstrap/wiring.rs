//! # Dependency Injection
//!
//! Creates the concrete adapters and injects them into the runtime. This is
//! the only place allowed to depend on zg-infra, zg-app, and the Tauri
//! adapters at the same time; that privilege is only for assembly, not for
//! decision making.

use std::sync::Arc;

use tauri::AppHandle;
use zg_app::SignupFormSession;
use zg_core::config::AppConfig;
use zg_infra::HttpRegistrationGateway;

use super::runtime::AppRuntime;
use crate::adapters::WebviewNavigator;

/// Build the completed runtime.
///
/// Called from the Tauri setup closure once the `AppHandle` exists.
pub fn create_runtime(config: &AppConfig, app_handle: &AppHandle) -> AppRuntime {
    let session = Arc::new(SignupFormSession::new());
    let gateway = Arc::new(HttpRegistrationGateway::new(config.api.base_url.clone()));
    let navigator = Arc::new(WebviewNavigator::new(app_handle.clone()));

    AppRuntime::new(session, gateway, navigator)
}
