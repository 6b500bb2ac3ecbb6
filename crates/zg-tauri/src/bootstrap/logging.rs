//! Logging configuration for the Zzanggu desktop client
//!
//! ## Environment Behavior
//!
//! - **Development**: Debug level, outputs to Webview console
//! - **Production**: Info level, outputs to log file + stdout

use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Create the logging builder with appropriate configuration
///
/// Returns a builder that can be passed to `.plugin()` in the Tauri
/// builder. Filters noise from Tauri internals and the underlying WebView
/// library.
pub fn get_builder() -> tauri_plugin_log::Builder {
    let is_dev = is_development();
    let default_log_level = if is_dev {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = tauri_plugin_log::Builder::new()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(default_log_level)
        // Skip tauri internal event logs (app::emit, window::emit, etc.)
        // and wry noise logs (underlying WebView library)
        .filter(|metadata| {
            !(metadata.target().starts_with("tauri::")
                || metadata.target().contains("tauri-")
                || metadata.target().starts_with("wry::"))
        })
        .format(|out, message, record| {
            // Format: 2025-12-29 10:30:45.123 INFO [lib.rs:34] [zzanggu] started
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);

            out.finish(format_args!(
                "{} {} [{}:{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                file,
                line,
                record.target(),
                message
            ))
        });

    // Configure different targets based on environment
    if is_dev {
        // Development: Output to Webview (browser DevTools console)
        builder = builder.target(Target::new(TargetKind::Webview));
    } else {
        // Production: LogDir target writes to the platform log directory
        builder = builder
            .target(Target::new(TargetKind::LogDir {
                file_name: Some("zzanggu.log".to_string()),
            }))
            .target(Target::new(TargetKind::Stdout));
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_builder() {
        // Verify the builder can be constructed without panicking
        let _builder = get_builder();
    }
}
