//! Relay-Server – bindet HTTP-, Konsumenten- und Produzenten-Listener
//!
//! Drei getrennte Ports, ein gemeinsames Konsumenten-Register. Das Binden
//! ist vom Starten getrennt, damit Tests auf Port 0 binden und die
//! tatsaechlichen Adressen abfragen koennen.

use std::future::IntoFuture;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::assets::{asset_router, Assets};
use crate::endpunkte::{konsument_router, produzent_router, EndpunktZustand};
use crate::error::{RelayError, RelayResult};
use crate::register::KonsumentenRegister;

/// Relay-Konfiguration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayKonfig {
    pub bind_adresse: IpAddr,
    /// Port fuer `/` und `/player.js`
    pub http_port: u16,
    /// WebSocket-Port fuer Player (Audio raus)
    pub konsument_port: u16,
    /// WebSocket-Port fuer Produzenten (Audio rein)
    pub produzent_port: u16,
}

impl Default for RelayKonfig {
    fn default() -> Self {
        Self {
            bind_adresse: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            http_port: 3000,
            konsument_port: 3001,
            produzent_port: 3002,
        }
    }
}

/// Tatsaechlich gebundene Adressen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayAdressen {
    pub http: SocketAddr,
    pub konsument: SocketAddr,
    pub produzent: SocketAddr,
}

/// Gebundener, noch nicht laufender Relay-Server
pub struct RelayServer {
    http: TcpListener,
    konsument: TcpListener,
    produzent: TcpListener,
    adressen: RelayAdressen,
    register: KonsumentenRegister,
    assets: Arc<Assets>,
}

impl RelayServer {
    /// Bindet alle drei Listener
    pub async fn binden(konfig: &RelayKonfig) -> RelayResult<Self> {
        let http = listener_binden("HTTP", konfig.bind_adresse, konfig.http_port).await?;
        let konsument =
            listener_binden("Konsument", konfig.bind_adresse, konfig.konsument_port).await?;
        let produzent =
            listener_binden("Produzent", konfig.bind_adresse, konfig.produzent_port).await?;

        let adressen = RelayAdressen {
            http: http.local_addr()?,
            konsument: konsument.local_addr()?,
            produzent: produzent.local_addr()?,
        };

        Ok(Self {
            http,
            konsument,
            produzent,
            adressen,
            register: KonsumentenRegister::neu(),
            assets: Arc::new(Assets::rendern(adressen.konsument.port())),
        })
    }

    /// Gibt die gebundenen Adressen zurueck
    pub fn adressen(&self) -> RelayAdressen {
        self.adressen
    }

    /// Gibt das (geteilte) Konsumenten-Register zurueck
    pub fn register(&self) -> KonsumentenRegister {
        self.register.clone()
    }

    /// Bedient alle Listener bis `shutdown_rx` `true` meldet
    pub async fn starten(self, shutdown_rx: watch::Receiver<bool>) -> RelayResult<()> {
        tracing::info!(
            http = %self.adressen.http,
            konsument = %self.adressen.konsument,
            produzent = %self.adressen.produzent,
            "Relay gestartet"
        );

        let zustand = EndpunktZustand {
            register: self.register.clone(),
            shutdown_rx: shutdown_rx.clone(),
        };

        let http = axum::serve(self.http, asset_router(Arc::clone(&self.assets)))
            .with_graceful_shutdown(auf_shutdown_warten(shutdown_rx.clone()))
            .into_future();

        let konsument = axum::serve(
            self.konsument,
            konsument_router(zustand.clone()).into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(auf_shutdown_warten(shutdown_rx.clone()))
        .into_future();

        let produzent = axum::serve(
            self.produzent,
            produzent_router(zustand).into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(auf_shutdown_warten(shutdown_rx))
        .into_future();

        tokio::try_join!(http, konsument, produzent)?;

        tracing::info!("Relay gestoppt");
        Ok(())
    }
}

async fn listener_binden(rolle: &'static str, ip: IpAddr, port: u16) -> RelayResult<TcpListener> {
    let adresse = SocketAddr::new(ip, port);
    TcpListener::bind(adresse)
        .await
        .map_err(|quelle| RelayError::Bind {
            rolle,
            adresse,
            quelle,
        })
}

/// Wird fertig sobald `true` signalisiert oder der Sender verworfen wird
async fn auf_shutdown_warten(mut shutdown_rx: watch::Receiver<bool>) {
    while !*shutdown_rx.borrow() {
        if shutdown_rx.changed().await.is_err() {
            return;
        }
    }
}
