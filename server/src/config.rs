//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! Standardwerte (Ports 3000/3001/3002), sodass das Relay ohne
//! Konfigurationsdatei lauffaehig ist.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use ulawcast_observability::LoggingEinstellungen;
use ulawcast_relay::RelayKonfig;

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Netzwerk-Einstellungen
    pub netzwerk: NetzwerkEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

/// Netzwerk-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetzwerkEinstellungen {
    /// Bind-Adresse fuer alle drei Listener
    pub bind_adresse: IpAddr,
    /// Port fuer die Player-Seite und `player.js`
    pub http_port: u16,
    /// WebSocket-Port fuer Player (Audio raus)
    pub konsument_port: u16,
    /// WebSocket-Port fuer Produzenten (Audio rein)
    pub produzent_port: u16,
}

impl Default for NetzwerkEinstellungen {
    fn default() -> Self {
        let relay = RelayKonfig::default();
        Self {
            bind_adresse: relay.bind_adresse,
            http_port: relay.http_port,
            konsument_port: relay.konsument_port,
            produzent_port: relay.produzent_port,
        }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> ulawcast_core::Result<Self> {
        ulawcast_core::toml_laden(pfad)
    }

    /// Uebersetzt die Datei-Konfiguration in die Relay-Konfiguration
    pub fn relay_konfig(&self) -> RelayKonfig {
        RelayKonfig {
            bind_adresse: self.netzwerk.bind_adresse,
            http_port: self.netzwerk.http_port,
            konsument_port: self.netzwerk.konsument_port,
            produzent_port: self.netzwerk.produzent_port,
        }
    }
}
