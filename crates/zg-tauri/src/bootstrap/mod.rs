pub mod config;
pub mod logging;
pub mod runtime;
pub mod wiring;

pub use config::{default_config_path, load_config};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::create_runtime;
