//! End-to-End-Tests: Produzent -> Relay -> Konsumenten (echte WebSockets)

use futures_util::{SinkExt, StreamExt};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use ulawcast_player::{AudioAusgabe, Clip, Player};
use ulawcast_relay::{KonsumentenRegister, RelayAdressen, RelayKonfig, RelayServer};

type Ws = WebSocketStream<MaybeTlsStream<TcpStream>>;

struct TestRelay {
    adressen: RelayAdressen,
    register: KonsumentenRegister,
    shutdown_tx: watch::Sender<bool>,
}

async fn relay_starten() -> TestRelay {
    let konfig = RelayKonfig {
        bind_adresse: IpAddr::V4(Ipv4Addr::LOCALHOST),
        http_port: 0,
        konsument_port: 0,
        produzent_port: 0,
    };
    let server = RelayServer::binden(&konfig).await.expect("Binden fehlgeschlagen");
    let adressen = server.adressen();
    let register = server.register();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(server.starten(shutdown_rx));

    TestRelay {
        adressen,
        register,
        shutdown_tx,
    }
}

async fn verbinden(adresse: SocketAddr) -> Ws {
    let (ws, _) = connect_async(format!("ws://{adresse}"))
        .await
        .expect("WebSocket-Verbindung fehlgeschlagen");
    ws
}

/// Wartet bis das Register `anzahl` Konsumenten kennt
async fn auf_konsumenten_warten(register: &KonsumentenRegister, anzahl: usize) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while register.anzahl() != anzahl {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("Konsumenten wurden nicht rechtzeitig registriert");
}

async fn naechstes_binary(ws: &mut Ws) -> Vec<u8> {
    loop {
        let nachricht = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("Timeout beim Warten auf Frame")
            .expect("Verbindung unerwartet geschlossen")
            .expect("WebSocket-Fehler");
        if let Message::Binary(daten) = nachricht {
            return daten;
        }
    }
}

fn rtp_frame(nutzdaten: &[u8]) -> Vec<u8> {
    let mut frame = vec![0x80, 0x00, 0x12, 0x34, 0, 0, 0x1f, 0x40, 1, 2, 3, 4];
    frame.extend_from_slice(nutzdaten);
    frame
}

#[derive(Clone, Default)]
struct Sammler(Arc<Mutex<Vec<Clip>>>);

impl AudioAusgabe for Sammler {
    fn abspielen(&mut self, clip: Clip) {
        self.0.lock().unwrap().push(clip);
    }
}

#[tokio::test]
async fn frame_erreicht_alle_konsumenten_unveraendert() {
    let relay = relay_starten().await;
    let mut k1 = verbinden(relay.adressen.konsument).await;
    let mut k2 = verbinden(relay.adressen.konsument).await;
    let mut k3 = verbinden(relay.adressen.konsument).await;
    auf_konsumenten_warten(&relay.register, 3).await;

    let mut produzent = verbinden(relay.adressen.produzent).await;
    let frame = rtp_frame(&(0..=255u8).collect::<Vec<_>>());
    produzent.send(Message::Binary(frame.clone())).await.unwrap();

    for k in [&mut k1, &mut k2, &mut k3] {
        assert_eq!(naechstes_binary(k).await, frame);
    }

    let _ = relay.shutdown_tx.send(true);
}

#[tokio::test]
async fn reihenfolge_der_frames_bleibt_erhalten() {
    let relay = relay_starten().await;
    let mut konsument = verbinden(relay.adressen.konsument).await;
    auf_konsumenten_warten(&relay.register, 1).await;

    let mut produzent = verbinden(relay.adressen.produzent).await;
    for i in 0..20u8 {
        produzent
            .send(Message::Binary(rtp_frame(&[i; 160])))
            .await
            .unwrap();
    }

    for i in 0..20u8 {
        assert_eq!(naechstes_binary(&mut konsument).await, rtp_frame(&[i; 160]));
    }

    let _ = relay.shutdown_tx.send(true);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn burst_erreicht_lesenden_konsumenten_vollstaendig() {
    const ANZAHL: u16 = 2000;

    let relay = relay_starten().await;
    let mut konsument = verbinden(relay.adressen.konsument).await;
    auf_konsumenten_warten(&relay.register, 1).await;

    let leser = tokio::spawn(async move {
        let mut empfangen = Vec::with_capacity(ANZAHL as usize);
        for _ in 0..ANZAHL {
            empfangen.push(naechstes_binary(&mut konsument).await);
        }
        empfangen
    });

    let mut produzent = verbinden(relay.adressen.produzent).await;
    for i in 0..ANZAHL {
        let mut nutzdaten = vec![0xFF; 160];
        nutzdaten[..2].copy_from_slice(&i.to_be_bytes());
        produzent
            .send(Message::Binary(rtp_frame(&nutzdaten)))
            .await
            .unwrap();
    }

    let empfangen = leser.await.unwrap();
    assert_eq!(empfangen.len(), ANZAHL as usize);
    for (i, frame) in empfangen.iter().enumerate() {
        assert_eq!(frame.len(), 172);
        assert_eq!(&frame[12..14], &(i as u16).to_be_bytes());
    }

    let _ = relay.shutdown_tx.send(true);
}

#[tokio::test]
async fn getrennter_konsument_wird_entfernt() {
    let relay = relay_starten().await;
    let mut bleibt = verbinden(relay.adressen.konsument).await;
    let mut geht = verbinden(relay.adressen.konsument).await;
    auf_konsumenten_warten(&relay.register, 2).await;

    geht.close(None).await.unwrap();
    auf_konsumenten_warten(&relay.register, 1).await;

    let mut produzent = verbinden(relay.adressen.produzent).await;
    let frame = rtp_frame(&[0xFF; 40]);
    produzent.send(Message::Binary(frame.clone())).await.unwrap();
    assert_eq!(naechstes_binary(&mut bleibt).await, frame);

    let _ = relay.shutdown_tx.send(true);
}

#[tokio::test]
async fn mehrere_produzenten_werden_verschraenkt() {
    let relay = relay_starten().await;
    let mut konsument = verbinden(relay.adressen.konsument).await;
    auf_konsumenten_warten(&relay.register, 1).await;

    let mut p1 = verbinden(relay.adressen.produzent).await;
    let mut p2 = verbinden(relay.adressen.produzent).await;

    p1.send(Message::Binary(rtp_frame(&[1]))).await.unwrap();
    assert_eq!(naechstes_binary(&mut konsument).await, rtp_frame(&[1]));
    p2.send(Message::Binary(rtp_frame(&[2]))).await.unwrap();
    assert_eq!(naechstes_binary(&mut konsument).await, rtp_frame(&[2]));

    let _ = relay.shutdown_tx.send(true);
}

#[tokio::test]
async fn textnachrichten_werden_nicht_weitergeleitet() {
    let relay = relay_starten().await;
    let mut konsument = verbinden(relay.adressen.konsument).await;
    auf_konsumenten_warten(&relay.register, 1).await;

    let mut produzent = verbinden(relay.adressen.produzent).await;
    produzent
        .send(Message::Text("kein Audio".into()))
        .await
        .unwrap();
    let frame = rtp_frame(&[0x7F; 8]);
    produzent.send(Message::Binary(frame.clone())).await.unwrap();

    // Das erste Binary-Frame ist das Audio-Frame; Text kommt nie an
    let nachricht = tokio::time::timeout(Duration::from_secs(5), konsument.next())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert_eq!(nachricht, Message::Binary(frame));

    let _ = relay.shutdown_tx.send(true);
}

#[tokio::test]
async fn ende_zu_ende_stille_ergibt_zwei_clips_pro_player() {
    let relay = relay_starten().await;
    let mut k1 = verbinden(relay.adressen.konsument).await;
    let mut k2 = verbinden(relay.adressen.konsument).await;
    auf_konsumenten_warten(&relay.register, 2).await;

    let mut produzent = verbinden(relay.adressen.produzent).await;
    let frame = rtp_frame(&[0xFF; 1600]);
    assert_eq!(frame.len(), 1612);
    produzent.send(Message::Binary(frame.clone())).await.unwrap();

    for k in [&mut k1, &mut k2] {
        let empfangen = naechstes_binary(k).await;
        assert_eq!(empfangen, frame);

        let sammler = Sammler::default();
        let mut player = Player::neu();
        player.aktivieren(Box::new(sammler.clone()));
        player.frame_empfangen(&empfangen);

        let clips = sammler.0.lock().unwrap();
        assert_eq!(clips.len(), 2);
        for clip in clips.iter() {
            assert_eq!(clip.samples.len(), 800);
            assert_eq!(clip.abtastrate, 8000);
            assert!(clip.ist_stille());
        }
        assert_eq!(player.gepuffert(), 0);
    }

    let _ = relay.shutdown_tx.send(true);
}
