// src/logging.rs
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Verbosity;

/// Installs a stderr subscriber filtered by the command-line verbosity.
///
/// The environment is not consulted. A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(verbosity.filter_directive()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
