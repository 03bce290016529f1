//! Fehlertypen fuer den Player

use thiserror::Error;
use ulawcast_core::UlawcastError;

/// Alle moeglichen Fehler des Players
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("WebSocket-Fehler: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Kein Standard-Ausgabegeraet verfuegbar")]
    KeinAusgabegeraet,

    #[error("Stream-Fehler: {0}")]
    StreamFehler(String),

    #[error(transparent)]
    Konfiguration(#[from] UlawcastError),
}

pub type PlayerResult<T> = Result<T, PlayerError>;
