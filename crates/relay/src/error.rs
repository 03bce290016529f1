//! Fehlertypen fuer das Relay

use std::net::SocketAddr;
use thiserror::Error;

/// Fehlertyp fuer das Relay
#[derive(Debug, Error)]
pub enum RelayError {
    /// Listener konnte nicht gebunden werden
    #[error("{rolle}-Listener kann {adresse} nicht binden: {quelle}")]
    Bind {
        rolle: &'static str,
        adresse: SocketAddr,
        #[source]
        quelle: std::io::Error,
    },

    /// IO-Fehler (Accept, Socket)
    #[error("IO-Fehler: {0}")]
    Io(#[from] std::io::Error),
}

/// Result-Typ fuer das Relay
pub type RelayResult<T> = Result<T, RelayError>;
