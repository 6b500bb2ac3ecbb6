//! Tauri command handlers

pub mod dto;
pub mod signup;

pub use signup::{get_signup_field_specs, get_signup_form, submit_signup, update_signup_field};
