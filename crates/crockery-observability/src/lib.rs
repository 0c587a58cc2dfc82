//! Structured logging for the CrockeryShop storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Component-scoped structured logging
//! - `LogBuilder` - Fluent construction of entries with typed fields
//! - `LogSink` - Where entries go: the console (browser devtools or stderr)
//!   or an in-memory buffer that tests can inspect

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
