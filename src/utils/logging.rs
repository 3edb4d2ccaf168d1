use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is not set
pub(crate) fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Install the stderr subscriber. `RUST_LOG` overrides `--debug`.
pub(crate) fn init_logging(debug: bool) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(debug));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::new(filter))
        .init();
}
