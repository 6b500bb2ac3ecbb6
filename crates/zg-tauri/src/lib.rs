//! # zg-tauri
//!
//! Tauri integration layer for the Zzanggu desktop client.
//!
//! This crate provides:
//! - Tauri command handlers for the signup form
//! - The webview navigator adapter
//! - Bootstrap: configuration loading, logging, and dependency wiring
//!
//! ## Modules
//!
//! - **commands**: Tauri command handlers (signup form state, submission)
//! - **adapters**: implementations of `zg-core` ports that need an `AppHandle`
//! - **bootstrap**: config loader, logging builder, wiring, `AppRuntime`

pub mod adapters;
pub mod bootstrap;
pub mod commands;

// Re-export commonly used types
pub use bootstrap::{create_runtime, load_config, AppRuntime};

// Command functions re-exported at the crate root so
// `tauri::generate_handler!` can resolve their generated glue from here.
pub use commands::signup::{
    get_signup_field_specs, get_signup_form, submit_signup, update_signup_field,
};
