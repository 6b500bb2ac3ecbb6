use anyhow::Result;
use tauri::{AppHandle, Emitter};
use zg_core::ports::NavigatorPort;
use zg_core::routes::Route;

/// Event name the webview router listens on.
const NAVIGATE_EVENT: &str = "navigate";

/// Tauri-specific runtime adapter for client-side navigation.
///
/// Emits the target route path to the webview, which swaps its view in
/// response. This adapter must only be constructed inside the Tauri setup
/// phase and must not be used outside zg-tauri.
pub struct WebviewNavigator {
    app: AppHandle,
}

impl WebviewNavigator {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

#[async_trait::async_trait]
impl NavigatorPort for WebviewNavigator {
    async fn navigate_to(&self, route: Route) -> Result<()> {
        self.app.emit(NAVIGATE_EVENT, route.as_path())?;
        Ok(())
    }
}
