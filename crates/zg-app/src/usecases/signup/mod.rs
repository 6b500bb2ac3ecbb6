pub mod form_session;
pub mod submit_registration;

pub use form_session::{SignupFormSession, SubmissionStatus};
pub use submit_registration::SubmitRegistration;
