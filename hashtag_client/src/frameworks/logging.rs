use crate::frameworks::config::LogFormat;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

// Diagnostics for a one-shot terminal run. Everything goes to stderr,
// next to the alerts, so stdout carries nothing but the rendered results.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let output: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed(),
        // A single run is short-lived; timestamps only add noise here.
        LogFormat::Compact => fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry().with(output).with(filter).init();

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(%info, "hashtag client panicked");
    }));
}
