// src/log.rs
//! Subscriber setup for the command-line front end.
//!
//! The library itself only emits `tracing` events; nothing is recorded unless a
//! subscriber is installed. `HTML_HARVEST_LOG` (an `EnvFilter` directive)
//! overrides the level picked from `-v` flags.

use tracing_subscriber::EnvFilter;

use crate::config::consts::LOG_ENV;

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(join!("html_harvest=", level_for(verbosity))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
