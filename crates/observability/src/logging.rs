//! Structured Logging Setup via tracing-subscriber
//!
//! Level und Format kommen aus der Konfigurationsdatei und koennen per
//! Umgebungsvariable ueberschrieben werden:
//! - `ULAWCAST_LOG_LEVEL`: EnvFilter-Direktive (z.B. `debug` oder
//!   `ulawcast_relay=trace,info`)
//! - `ULAWCAST_LOG_FORMAT`: `text` oder `json`

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Umgebungsvariable fuer den Log-Level
pub const ENV_LOG_LEVEL: &str = "ULAWCAST_LOG_LEVEL";
/// Umgebungsvariable fuer das Log-Format
pub const ENV_LOG_FORMAT: &str = "ULAWCAST_LOG_FORMAT";

/// Logging-Einstellungen (Abschnitt `[logging]` in Relay- und Player-Config)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

/// Initialisiert das Logging-System.
///
/// Umgebungsvariablen haben Vorrang vor den Einstellungen. Ein ungueltiger
/// Filter faellt auf `info` zurueck. Darf nur einmal pro Prozess aufgerufen
/// werden.
pub fn logging_initialisieren(einstellungen: &LoggingEinstellungen) {
    let filter = EnvFilter::try_from_env(ENV_LOG_LEVEL)
        .or_else(|_| EnvFilter::try_new(&einstellungen.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let format = format_waehlen(std::env::var(ENV_LOG_FORMAT).ok(), &einstellungen.format);

    match format {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_current_span(true)
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Waehlt das wirksame Format: gueltiger Env-Wert vor Konfiguration,
/// unbekannte Werte fallen auf `text` zurueck.
fn format_waehlen(aus_env: Option<String>, konfiguriert: &str) -> &'static str {
    let kandidat = aus_env
        .filter(|f| log_format_gueltig(f))
        .unwrap_or_else(|| konfiguriert.to_string());
    if kandidat == "json" {
        "json"
    } else {
        "text"
    }
}

/// Validiert ob ein Log-Format-String gueltig ist.
pub fn log_format_gueltig(format: &str) -> bool {
    matches!(format, "text" | "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_einstellungen() {
        let e = LoggingEinstellungen::default();
        assert_eq!(e.level, "info");
        assert_eq!(e.format, "text");
    }

    #[test]
    fn log_format_werte() {
        assert!(log_format_gueltig("text"));
        assert!(log_format_gueltig("json"));
        assert!(!log_format_gueltig("xml"));
        assert!(!log_format_gueltig("JSON"));
    }

    #[test]
    fn env_format_hat_vorrang() {
        assert_eq!(format_waehlen(Some("json".into()), "text"), "json");
        assert_eq!(format_waehlen(Some("text".into()), "json"), "text");
    }

    #[test]
    fn ungueltiges_env_format_nutzt_konfiguration() {
        assert_eq!(format_waehlen(Some("xml".into()), "json"), "json");
        assert_eq!(format_waehlen(None, "json"), "json");
    }

    #[test]
    fn unbekanntes_format_faellt_auf_text_zurueck() {
        assert_eq!(format_waehlen(None, "yaml"), "text");
    }
}
