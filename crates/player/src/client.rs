//! WebSocket-Client – empfaengt Frames vom Konsumenten-Endpunkt des Relays
//!
//! Ein Task treibt Empfang, Dekodierung und Pufferung. Die Aktivierung der
//! Ausgabe kommt ueber einen Kanal, damit sie jederzeit waehrend des
//! Empfangs erfolgen kann. Keine Wiederverbindung: endet die Verbindung,
//! endet der Client.

use futures_util::StreamExt;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite::Message;

use crate::ausgabe::AudioAusgabe;
use crate::error::PlayerResult;
use crate::player::Player;

/// Verbindet sich mit `url` und speist empfangene Frames in `player`
///
/// Laeuft bis der Server die Verbindung schliesst oder `shutdown_rx`
/// `true` meldet.
pub async fn empfangen(
    url: &str,
    player: &mut Player,
    mut aktivierung: mpsc::Receiver<Box<dyn AudioAusgabe>>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> PlayerResult<()> {
    let (mut ws, _) = tokio_tungstenite::connect_async(url).await?;
    tracing::info!(url = url, "Mit Relay verbunden");

    loop {
        tokio::select! {
            nachricht = ws.next() => {
                match nachricht {
                    Some(Ok(Message::Binary(frame))) => {
                        tracing::trace!(bytes = frame.len(), "Frame empfangen");
                        player.frame_empfangen(&frame);
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("Verbindung vom Relay geschlossen");
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                }
            }

            Some(ausgabe) = aktivierung.recv() => {
                player.aktivieren(ausgabe);
            }

            Ok(()) = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    let _ = ws.close(None).await;
                    break;
                }
            }
        }
    }

    let statistik = player.statistik();
    tracing::info!(
        frames = statistik.frames_empfangen,
        verworfen = statistik.frames_inaktiv_verworfen,
        clips = statistik.clips_abgespielt,
        "Empfang beendet"
    );
    Ok(())
}
