//! Player-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! Standardwerte, sodass der Player ohne Datei lauffaehig ist.

use serde::{Deserialize, Serialize};
use ulawcast_observability::LoggingEinstellungen;

/// Vollstaendige Player-Konfiguration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// WebSocket-URL des Konsumenten-Endpunkts
    pub url: String,
    /// Ausgabe sofort aktivieren statt auf Enter zu warten
    pub autoplay: bool,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            url: "ws://localhost:3001".into(),
            autoplay: false,
            logging: LoggingEinstellungen::default(),
        }
    }
}

impl PlayerConfig {
    /// Laedt die Konfiguration; fehlt die Datei, gelten Standardwerte
    pub fn laden(pfad: &str) -> ulawcast_core::Result<Self> {
        ulawcast_core::toml_laden(pfad)
    }
}
