//! WebSocket-Endpunkte: Produzent (Audio rein) und Konsument (Audio raus)
//!
//! Beide Endpunkte nehmen Verbindungen auf jedem Pfad ihres Ports an.
//!
//! ```text
//! Produzent --Binary--> produzent_verbindung --an_alle_senden--> Queue je Konsument
//!                                                                   |
//!                                    konsument_verbindung (Schreib-Task) --> Socket
//! ```
//!
//! Mehrere gleichzeitige Produzenten sind erlaubt; ihre Frames werden in
//! Ankunftsreihenfolge verschraenkt weitergeleitet.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        ConnectInfo, State, WebSocketUpgrade,
    },
    response::Response,
    Router,
};
use bytes::Bytes;
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use tokio::sync::watch;

use crate::register::KonsumentenRegister;

/// Geteilter Zustand beider WebSocket-Router
#[derive(Clone)]
pub struct EndpunktZustand {
    pub register: KonsumentenRegister,
    pub shutdown_rx: watch::Receiver<bool>,
}

/// Router fuer den Produzenten-Port
pub fn produzent_router(zustand: EndpunktZustand) -> Router {
    Router::new()
        .fallback(produzent_upgrade)
        .with_state(zustand)
}

/// Router fuer den Konsumenten-Port
pub fn konsument_router(zustand: EndpunktZustand) -> Router {
    Router::new()
        .fallback(konsument_upgrade)
        .with_state(zustand)
}

async fn produzent_upgrade(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(zustand): State<EndpunktZustand>,
) -> Response {
    ws.on_upgrade(move |socket| produzent_verbindung(socket, peer, zustand))
}

async fn konsument_upgrade(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(zustand): State<EndpunktZustand>,
) -> Response {
    ws.on_upgrade(move |socket| konsument_verbindung(socket, peer, zustand))
}

/// Liest Frames eines Produzenten und verteilt sie an alle Konsumenten
async fn produzent_verbindung(mut socket: WebSocket, peer: SocketAddr, zustand: EndpunktZustand) {
    let EndpunktZustand {
        register,
        mut shutdown_rx,
    } = zustand;

    tracing::info!(peer = %peer, "Produzent verbunden");
    let mut frames: u64 = 0;

    loop {
        tokio::select! {
            nachricht = socket.recv() => {
                match nachricht {
                    Some(Ok(Message::Binary(daten))) => {
                        let bytes = daten.len();
                        let erreicht = register.an_alle_senden(&Bytes::from(daten));
                        frames += 1;
                        tracing::trace!(peer = %peer, bytes, erreicht, "Frame weitergeleitet");
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    // Text, Ping, Pong: nicht Teil des Audio-Stroms
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!(peer = %peer, fehler = %e, "Produzent-Lesefehler");
                        break;
                    }
                }
            }

            Ok(()) = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    let _ = socket.send(Message::Close(None)).await;
                    break;
                }
            }
        }
    }

    tracing::info!(peer = %peer, frames, "Produzent getrennt");
}

/// Registriert einen Konsumenten und schreibt seine Queue auf den Socket
async fn konsument_verbindung(socket: WebSocket, peer: SocketAddr, zustand: EndpunktZustand) {
    let EndpunktZustand {
        register,
        mut shutdown_rx,
    } = zustand;

    let (id, mut queue) = register.registrieren();
    tracing::info!(peer = %peer, konsument_id = %id, anzahl = register.anzahl(), "Konsument verbunden");

    let (mut schreiber, mut leser) = socket.split();

    // Schreib-Task: Queue -> Socket. Endet er, ist die Queue geschlossen
    // und das Register ueberspringt diesen Konsumenten.
    let mut schreib_task = tokio::spawn(async move {
        while let Some(frame) = queue.recv().await {
            if schreiber.send(Message::Binary(frame.to_vec())).await.is_err() {
                break;
            }
        }
        let _ = schreiber.send(Message::Close(None)).await;
    });

    loop {
        tokio::select! {
            nachricht = leser.next() => {
                match nachricht {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!(peer = %peer, fehler = %e, "Konsument-Lesefehler");
                        break;
                    }
                }
            }

            _ = &mut schreib_task => break,

            Ok(()) = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    register.entfernen(&id);
    schreib_task.abort();
    tracing::info!(peer = %peer, konsument_id = %id, "Konsument getrennt");
}
