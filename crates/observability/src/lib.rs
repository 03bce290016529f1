//! # ulawcast-observability
//!
//! Structured Logging via tracing-subscriber, gemeinsam genutzt von
//! Relay-Server und Player.

pub mod logging;

pub use logging::{logging_initialisieren, LoggingEinstellungen};
