//! Diagnostics for the terminal client.
//!
//! The search view owns the whole screen in raw mode, so tracing output
//! never goes to the terminal. Lookup outcomes, preference writes, dropped
//! stored entries and landing timer events go to a file instead, and only
//! when asked for.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Names the log file base path. Unset means no logging.
pub const LOG_PATH_ENV: &str = "MEDWISE_LOG";

/// Install the file subscriber when `MEDWISE_LOG` names a path.
///
/// `RUST_LOG` filters as usual, e.g. `RUST_LOG=medwise=debug` to see every
/// request; the default level is `info`.
pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_PATH_ENV) else {
        return;
    };

    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = run_log_path(&base, started, std::process::id());

    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Warning: Failed to create log file: {}", path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{base}.{unix_secs}.{pid}`, so a `medwise lookup` started beside a
/// running UI writes its own file.
pub fn run_log_path(base: &str, started_secs: u64, pid: u32) -> String {
    format!("{}.{}.{}", base, started_secs, pid)
}
