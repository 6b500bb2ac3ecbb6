//! # Use Cases Accessor
//!
//! `AppRuntime` holds the wired dependencies and is managed by Tauri's
//! state system; command handlers reach use cases through `usecases()`.
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure the use case has a `new()` constructor taking its ports
//! 2. Add a method to `UseCases` that calls `new()` with the wired deps
//! 3. Commands can then call `runtime.usecases().your_use_case()`

use std::sync::Arc;

use zg_app::{SignupFormSession, SubmitRegistration};
use zg_core::ports::{NavigatorPort, RegistrationGatewayPort};

/// Application runtime with dependencies.
pub struct AppRuntime {
    session: Arc<SignupFormSession>,
    gateway: Arc<dyn RegistrationGatewayPort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl AppRuntime {
    pub fn new(
        session: Arc<SignupFormSession>,
        gateway: Arc<dyn RegistrationGatewayPort>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            session,
            gateway,
            navigator,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }

    /// The live form session shared with the command surface.
    pub fn signup_session(&self) -> &SignupFormSession {
        &self.session
    }
}

/// Accessor that wires ports into use case instances on demand.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl UseCases<'_> {
    pub fn submit_registration(&self) -> SubmitRegistration {
        SubmitRegistration::new(
            self.runtime.session.clone(),
            self.runtime.gateway.clone(),
            self.runtime.navigator.clone(),
        )
    }
}
