//! Zzanggu application orchestration layer
//!
//! This crate contains the signup use cases and the live form session.
//! Everything here depends on `zg-core` ports only; concrete HTTP and
//! navigation implementations are injected by the outer layers.

pub mod usecases;

pub use usecases::signup::{SignupFormSession, SubmissionStatus, SubmitRegistration};
