use serde::{Deserialize, Serialize};

/// Client-side navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Signup,
    Login,
}

impl Route {
    pub fn as_path(self) -> &'static str {
        match self {
            Route::Signup => "/signup",
            Route::Login => "/login",
        }
    }
}

/// Path of the registration endpoint, relative to the API base URL.
pub const REGISTRATION_PATH: &str = "/customers";
