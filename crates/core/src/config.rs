//! Gemeinsames Laden von TOML-Konfigurationsdateien
//!
//! Relay und Player laden ihre Konfiguration auf die gleiche Weise: fehlt
//! die Datei, gelten die Standardwerte; ist sie unlesbar oder ungueltig,
//! bricht der Start ab.

use serde::de::DeserializeOwned;

use crate::error::{Result, UlawcastError};

/// Laedt eine Konfiguration aus einer TOML-Datei.
///
/// Gibt `T::default()` zurueck wenn die Datei nicht existiert.
pub fn toml_laden<T>(pfad: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match std::fs::read_to_string(pfad) {
        Ok(inhalt) => toml_parsen(pfad, &inhalt),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                pfad = pfad,
                "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
            );
            Ok(T::default())
        }
        Err(quelle) => Err(UlawcastError::DateiNichtLesbar {
            pfad: pfad.to_string(),
            quelle,
        }),
    }
}

/// Parst TOML-Text; `pfad` dient nur der Fehlermeldung
pub fn toml_parsen<T: DeserializeOwned>(pfad: &str, inhalt: &str) -> Result<T> {
    toml::from_str(inhalt).map_err(|e| UlawcastError::konfiguration(pfad, e))
}
