//! ulawcast-server – Bibliotheks-Root
//!
//! Deklariert die Server-Module und stellt den Einstiegspunkt fuer
//! Integrationstests bereit.

pub mod config;

use anyhow::Result;
use config::ServerConfig;
use tokio::sync::watch;
use ulawcast_relay::RelayServer;

/// Haelt den Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bindet alle Listener und laeuft bis zum Shutdown-Signal (Ctrl-C)
    pub async fn starten(self) -> Result<()> {
        let relay = RelayServer::binden(&self.config.relay_konfig()).await?;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown-Signal empfangen, Server wird beendet");
                let _ = shutdown_tx.send(true);
            }
        });

        relay.starten(shutdown_rx).await?;
        Ok(())
    }
}
