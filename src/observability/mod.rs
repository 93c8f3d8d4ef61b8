//! OpenTelemetry tracing with file-based span export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Traces go to `~/.local/share/zellij/weather-tui/weather-tui-otlp.json`
//! (seen as `/host/...` from the sandbox). The file rotates at 10 MiB and the
//! three newest backups are kept.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`; any `EnvFilter` directive is accepted, e.g.
//! `weather_tui::app=debug,info`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `exporter`: span exporter and OTLP-JSON formatting
//! - `rotating`: size-rotated line file

mod exporter;
mod init;
mod rotating;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, TRACE_FILE_NAME};
pub use rotating::{RotatingFile, RotationPolicy};
