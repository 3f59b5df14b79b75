//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

use crate::utils::is_dev_mode;

fn filter_directives() -> &'static str {
    if is_dev_mode() {
        "warn,ui=debug,payloads=debug"
    } else {
        "error,ui=info,payloads=info"
    }
}

/// Install the console subscriber. Later calls leave the first one in place.
pub fn init_logging() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directives()))
        .with(console_layer)
        .try_init();

    match installed {
        Ok(()) => tracing::info!(
            "Initialized logs, backend at {}",
            crate::backend_origin()
        ),
        Err(e) => tracing::debug!("Logs already initialized: {e}"),
    }
}
