//! Use case for submitting the signup form.

use std::sync::Arc;

use tracing::{error, info, info_span, Instrument};
use zg_core::ports::{NavigatorPort, RegistrationGatewayPort};
use zg_core::registration::RegistrationRequest;
use zg_core::routes::Route;

use super::form_session::{SignupFormSession, SubmissionStatus};

/// Use case for submitting a completed registration draft.
///
/// Reads the live form state, builds the wire payload, performs exactly one
/// POST through the gateway port, and navigates to the login view on
/// success. Failures are logged and swallowed: the caller never sees an
/// error, no retry is attempted, and the response body is never inspected.
pub struct SubmitRegistration {
    session: Arc<SignupFormSession>,
    gateway: Arc<dyn RegistrationGatewayPort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl SubmitRegistration {
    /// Create a new SubmitRegistration use case from trait objects.
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

    /// Submit the current draft.
    ///
    /// The status moves to `InFlight` for the duration of the request but
    /// never gates another call; each invocation produces its own POST even
    /// while a previous one is still in flight.
    pub async fn execute(&self) {
        let span = info_span!("usecase.signup.submit");

        async {
            let draft = self.session.snapshot();
            let request = RegistrationRequest::from_draft(&draft);

            self.session.set_status(SubmissionStatus::InFlight);

            match self.gateway.register(&request).await {
                Ok(()) => {
                    info!(username = %request.username, "registration accepted");
                    self.session.set_status(SubmissionStatus::Done);
                    if let Err(e) = self.navigator.navigate_to(Route::Login).await {
                        error!("failed to navigate to login: {}", e);
                    }
                }
                Err(e) => {
                    error!("registration request failed: {}", e);
                    self.session.set_status(SubmissionStatus::Idle);
                }
            }
        }
        .instrument(span)
        .await
    }
}
