//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging on stderr.
///
/// `RUST_LOG` takes precedence. Otherwise the filter is `info`, or
/// `info,scriptorium=debug` when `verbose` is set.
pub fn init_console_telemetry(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_directives = if verbose {
        "info,scriptorium=debug"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
