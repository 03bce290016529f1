//! ulawcast-core – Gemeinsame Typen, Konstanten und Fehlertypen
//!
//! Dieses Crate stellt die Bausteine bereit, die Relay und Player
//! gemeinsam nutzen: Verbindungs-IDs, die festen Audio-Parameter des
//! PCMU-Streams und den zentralen Fehler-Enum.

pub mod config;
pub mod error;
pub mod konstanten;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use config::toml_laden;
pub use error::{Result, UlawcastError};
pub use types::KonsumentId;
