use anyhow::Result;

use crate::routes::Route;

#[async_trait::async_trait]
pub trait NavigatorPort: Send + Sync {
    /// Move the view to the given client-side route.
    async fn navigate_to(&self, route: Route) -> Result<()>;
}
