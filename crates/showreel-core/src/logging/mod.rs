//! Structured logging for the page behavior layer.
//!
//! Events go through `tracing`; [`ConsoleLayer`] turns each one into a
//! [`LogEntry`] and hands the rendered line to a [`LogSink`]. The browser
//! binding supplies a sink backed by the developer console, tests use an
//! in-memory sink.
//!
//! ## Usage
//!
//! ```ignore
//! use showreel_core::logging::{ConsoleLayer, LogFormat};
//! use tracing_subscriber::prelude::*;
//!
//! let subscriber = tracing_subscriber::registry()
//!     .with(tracing_subscriber::EnvFilter::new("info"))
//!     .with(ConsoleLayer::new(MySink, LogFormat::Text));
//!
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```

pub mod entry;
pub mod layer;

// Re-exports for convenience
pub use entry::{LogEntry, LogFormat};
pub use layer::{env_filter, ConsoleLayer, LogSink};
