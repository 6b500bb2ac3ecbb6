//! Business logic use cases

pub mod signup;

pub use signup::{SignupFormSession, SubmissionStatus, SubmitRegistration};
