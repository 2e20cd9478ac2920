//! Structured tracing exported as OTLP JSON lines.
//!
//! The plugin runs inside Zellij's wasm sandbox, so there is no collector to
//! talk to. Spans are recorded through `tracing`, bridged into OpenTelemetry by
//! `tracing-opentelemetry`, and appended to a local file one OTLP document per
//! line:
//!
//! ```text
//! tracing macros → OpenTelemetryLayer → TracerProvider → JsonFileExporter → RotatingFile
//! ```
//!
//! The trace log lives at `~/.local/share/zellij/countrydex/countrydex-otlp.json`
//! and is rotated into numbered backups (`.1`, `.2`, `.3`) once it grows past
//! a few megabytes.
//!
//! The filter comes from the `trace_level` plugin option and accepts anything
//! `EnvFilter` understands (`debug`, `countrydex=trace`, ...). Default: `info`.

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::init_tracing;
pub use rotation::RotatingFile;
