//! End-to-end signup flow over mocked ports: fill every field, submit, and
//! verify the exact wire payload plus the navigation side effect.

use std::sync::{Arc, Mutex};

use zg_app::{SignupFormSession, SubmissionStatus, SubmitRegistration};
use zg_core::ports::{NavigatorPort, RegistrationGatewayPort};
use zg_core::registration::{RegistrationRequest, SignupField};
use zg_core::routes::Route;

struct FakeRegistrationServer {
    bodies: Mutex<Vec<serde_json::Value>>,
    reachable: bool,
}

impl FakeRegistrationServer {
    fn new(reachable: bool) -> Self {
        Self {
            bodies: Mutex::new(Vec::new()),
            reachable,
        }
    }

    fn bodies(&self) -> Vec<serde_json::Value> {
        self.bodies.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RegistrationGatewayPort for FakeRegistrationServer {
    async fn register(&self, request: &RegistrationRequest) -> anyhow::Result<()> {
        let body = serde_json::to_value(request)?;
        self.bodies.lock().unwrap().push(body);
        if self.reachable {
            Ok(())
        } else {
            Err(anyhow::anyhow!("network unreachable"))
        }
    }
}

#[derive(Default)]
struct NavigationLog {
    routes: Mutex<Vec<Route>>,
}

#[async_trait::async_trait]
impl NavigatorPort for NavigationLog {
    async fn navigate_to(&self, route: Route) -> anyhow::Result<()> {
        self.routes.lock().unwrap().push(route);
        Ok(())
    }
}

fn fill_form(session: &SignupFormSession) {
    session.update_field(SignupField::Username, "user1");
    session.update_field(SignupField::Password, "Passw0rd!");
    session.update_field(SignupField::PasswordConfirmation, "Passw0rd!");
    session.update_field(SignupField::Email, "a@b.co");
    session.update_field(SignupField::Address, "123 Main St");
    session.update_field(SignupField::PhoneNumber, "01012345678");
}

#[tokio::test]
async fn submitting_a_filled_form_posts_the_exact_payload_and_navigates() {
    let session = Arc::new(SignupFormSession::new());
    fill_form(&session);

    let server = Arc::new(FakeRegistrationServer::new(true));
    let navigation = Arc::new(NavigationLog::default());
    let submit = SubmitRegistration::new(session.clone(), server.clone(), navigation.clone());

    submit.execute().await;

    let bodies = server.bodies();
    assert_eq!(bodies.len(), 1, "exactly one POST per submission event");
    assert_eq!(
        bodies[0],
        serde_json::json!({
            "username": "user1",
            "password": "Passw0rd!",
            "email": "a@b.co",
            "address": "123 Main St",
            "phoneNumber": "010-1234-5678",
        })
    );

    assert_eq!(*navigation.routes.lock().unwrap(), vec![Route::Login]);
    assert_eq!(session.status(), SubmissionStatus::Done);
}

#[tokio::test]
async fn network_failure_is_swallowed_without_navigation() {
    let session = Arc::new(SignupFormSession::new());
    fill_form(&session);

    let server = Arc::new(FakeRegistrationServer::new(false));
    let navigation = Arc::new(NavigationLog::default());
    let submit = SubmitRegistration::new(session.clone(), server.clone(), navigation.clone());

    submit.execute().await;

    assert_eq!(server.bodies().len(), 1);
    assert!(navigation.routes.lock().unwrap().is_empty());
    assert_eq!(session.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn validation_flags_track_keystrokes_without_blocking_submission() {
    let session = Arc::new(SignupFormSession::new());
    session.update_field(SignupField::Password, "short");

    let validation = session.validation();
    assert!(!validation.password_length_ok);

    // An invalid draft still submits; client flags are visual only.
    let server = Arc::new(FakeRegistrationServer::new(true));
    let navigation = Arc::new(NavigationLog::default());
    let submit = SubmitRegistration::new(session, server.clone(), navigation);
    submit.execute().await;

    assert_eq!(server.bodies().len(), 1);
}
