//! Subscriber setup.

use super::exporter;
use crate::infrastructure::{data_dir, trace_file_path};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "Countrydex";

/// Installs the global subscriber writing spans to the trace log.
///
/// Tracing is best effort: if the data directory cannot be created the plugin
/// runs without a subscriber. An unparsable `trace_level` falls back to
/// `info`. Only the first call installs anything.
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(data_dir()).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::tracer_provider(trace_file_path(), resource);
    let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
