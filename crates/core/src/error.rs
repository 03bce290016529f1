//! Fehlertypen fuer ulawcast
//!
//! Zentraler Fehler-Enum fuer Zustaende, die Relay und Player teilen
//! (Konfiguration laden, Dateizugriff). Die Crates definieren eigene
//! Fehler und konvertieren via `#[from]`.

use thiserror::Error;

/// Globaler Result-Alias fuer ulawcast
pub type Result<T> = std::result::Result<T, UlawcastError>;

/// Gemeinsame Fehler im ulawcast-System
#[derive(Debug, Error)]
pub enum UlawcastError {
    #[error("Konfigurationsfehler in '{pfad}': {grund}")]
    Konfiguration { pfad: String, grund: String },

    #[error("Datei '{pfad}' nicht lesbar: {quelle}")]
    DateiNichtLesbar {
        pfad: String,
        #[source]
        quelle: std::io::Error,
    },
}

impl UlawcastError {
    /// Erstellt einen Konfigurationsfehler fuer die gegebene Datei
    pub fn konfiguration(pfad: impl Into<String>, grund: impl std::fmt::Display) -> Self {
        Self::Konfiguration {
            pfad: pfad.into(),
            grund: grund.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn konfigurationsfehler_anzeige() {
        let e = UlawcastError::konfiguration("config.toml", "Port 0 ungueltig");
        assert_eq!(
            e.to_string(),
            "Konfigurationsfehler in 'config.toml': Port 0 ungueltig"
        );
    }

    #[test]
    fn dateifehler_behaelt_quelle() {
        use std::error::Error as _;

        let e = UlawcastError::DateiNichtLesbar {
            pfad: "player.toml".into(),
            quelle: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(e.to_string().starts_with("Datei 'player.toml' nicht lesbar"));
        assert!(e.source().is_some());
    }
}
