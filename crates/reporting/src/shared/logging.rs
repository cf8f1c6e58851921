use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the tracing registry for an embedding application.
///
/// Honours `RUST_LOG`; defaults keep HTTP client internals quiet while the
/// engine logs at info. Safe to call more than once — later calls are
/// no-ops.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,reqwest=warn,hyper=warn".into()),
    );

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
