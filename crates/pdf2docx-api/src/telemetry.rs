//! Tracing initialization.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize the tracing subscriber: env-filtered, compact console format.
///
/// Called once from `main` before anything else logs; embedders that install
/// their own subscriber skip this.
pub fn init_telemetry() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf2docx=debug,tower_http=debug".into()),
        )
        .with(console_fmt)
        .init();
}
