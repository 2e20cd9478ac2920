//! `SpanExporter` that appends OTLP JSON to a rotating file.

use super::otlp;
use super::rotation::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one line of OTLP JSON.
#[derive(Debug)]
struct JsonFileExporter {
    file: RotatingFile,
    /// Set by the provider through [`SpanExporter::set_resource`].
    resource: Resource,
    scope: &'static str,
    stopped: bool,
}

impl SpanExporter for JsonFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped {
            Err(TraceError::from("trace exporter already shut down"))
        } else {
            let document = otlp::encode_batch(&self.resource, self.scope, &batch);
            self.file
                .append_line(&document.to_string())
                .map_err(|e| TraceError::from(format!("writing trace log: {e}")))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports every finished span immediately.
///
/// The plugin has no async runtime, so the simple (synchronous) span processor
/// is used instead of a batching one.
pub fn tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonFileExporter {
        file: RotatingFile::new(path),
        resource: Resource::empty(),
        scope: "countrydex",
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
