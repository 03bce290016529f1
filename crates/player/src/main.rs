//! ulawcast Player – Einstiegspunkt
//!
//! Laedt die Konfiguration, initialisiert das Logging, verbindet sich mit
//! dem Relay und aktiviert die Ausgabe nach Enter (oder sofort bei
//! `autoplay`).

use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::sync::{mpsc, watch};
use ulawcast_player::{empfangen, AudioAusgabe, Player, PlayerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config_pfad =
        std::env::var("ULAWCAST_PLAYER_CONFIG").unwrap_or_else(|_| "player.toml".into());
    let config = PlayerConfig::laden(&config_pfad)?;

    ulawcast_observability::logging_initialisieren(&config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_pfad,
        url = %config.url,
        "ulawcast Player wird initialisiert"
    );

    let (aktivierung_tx, aktivierung_rx) = mpsc::channel::<Box<dyn AudioAusgabe>>(1);
    let autoplay = config.autoplay;
    tokio::spawn(async move {
        if !autoplay {
            println!("Enter druecken um die Wiedergabe zu starten");
            let mut zeilen = tokio::io::BufReader::new(tokio::io::stdin()).lines();
            if !matches!(zeilen.next_line().await, Ok(Some(_))) {
                return;
            }
        }
        match tokio::task::spawn_blocking(ausgabe_oeffnen).await {
            Ok(Ok(ausgabe)) => {
                let _ = aktivierung_tx.send(ausgabe).await;
            }
            Ok(Err(e)) => tracing::error!(fehler = %e, "Audio-Ausgabe konnte nicht geoeffnet werden"),
            Err(e) => tracing::error!(fehler = %e, "Aktivierungs-Task abgebrochen"),
        }
    });

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown-Signal empfangen, Player wird beendet");
            let _ = shutdown_tx.send(true);
        }
    });

    let mut player = Player::neu();
    empfangen(&config.url, &mut player, aktivierung_rx, shutdown_rx).await?;
    Ok(())
}

#[cfg(feature = "cpal")]
fn ausgabe_oeffnen() -> ulawcast_player::PlayerResult<Box<dyn AudioAusgabe>> {
    Ok(Box::new(ulawcast_player::CpalAusgabe::starten()?))
}

#[cfg(not(feature = "cpal"))]
fn ausgabe_oeffnen() -> ulawcast_player::PlayerResult<Box<dyn AudioAusgabe>> {
    tracing::warn!("Ohne Feature `cpal` gebaut – Clips werden nur protokolliert");
    Ok(Box::new(ulawcast_player::ProtokollAusgabe::neu()))
}
