//! Konsumenten-Register – Fan-out der Produzenten-Frames
//!
//! Haelt die Send-Queues aller offenen Konsumenten-Verbindungen. Jedes
//! Frame eines Produzenten wird unveraendert in jede offene Queue gelegt;
//! der Schreib-Task der Verbindung leert sie in Reihenfolge auf den Socket.
//!
//! Die Queues sind unbegrenzt: ein langsamer Konsument verliert keine
//! Frames, er puffert sie. Nur geschlossene Konsumenten werden
//! uebersprungen, ohne Fehler und ohne Wiederholung.

use bytes::Bytes;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use ulawcast_core::KonsumentId;

// ---------------------------------------------------------------------------
// KonsumentSender
// ---------------------------------------------------------------------------

/// Handle auf die Send-Queue einer Konsumenten-Verbindung
#[derive(Clone, Debug)]
pub struct KonsumentSender {
    pub id: KonsumentId,
    tx: mpsc::UnboundedSender<Bytes>,
}

impl KonsumentSender {
    /// Gibt zurueck ob die Verbindung noch offen ist
    pub fn ist_offen(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Reiht ein Frame nicht-blockierend ein
    ///
    /// Gibt `false` zurueck wenn die Queue geschlossen ist.
    pub fn senden(&self, frame: Bytes) -> bool {
        match self.tx.send(frame) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(konsument_id = %self.id, "Send-Queue geschlossen (Konsument getrennt)");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// KonsumentenRegister
// ---------------------------------------------------------------------------

/// Menge der verbundenen Konsumenten
///
/// Thread-safe via Arc + DashMap. Clone teilt den inneren Zustand.
#[derive(Clone)]
pub struct KonsumentenRegister {
    inner: Arc<RegisterInner>,
}

struct RegisterInner {
    konsumenten: DashMap<KonsumentId, KonsumentSender>,
}

impl KonsumentenRegister {
    /// Erstellt ein leeres Register
    pub fn neu() -> Self {
        Self {
            inner: Arc::new(RegisterInner {
                konsumenten: DashMap::new(),
            }),
        }
    }

    /// Registriert einen neuen Konsumenten und gibt seine Empfangs-Queue zurueck
    pub fn registrieren(&self) -> (KonsumentId, mpsc::UnboundedReceiver<Bytes>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = KonsumentId::new();
        self.inner.konsumenten.insert(id, KonsumentSender { id, tx });
        tracing::debug!(konsument_id = %id, "Konsument registriert");
        (id, rx)
    }

    /// Entfernt einen Konsumenten
    pub fn entfernen(&self, id: &KonsumentId) {
        if self.inner.konsumenten.remove(id).is_some() {
            tracing::debug!(konsument_id = %id, "Konsument entfernt");
        }
    }

    /// Reicht ein Frame unveraendert an alle offenen Konsumenten weiter
    ///
    /// Gibt die Anzahl der Konsumenten zurueck, die das Frame erhalten haben.
    pub fn an_alle_senden(&self, frame: &Bytes) -> usize {
        let mut erreicht = 0;
        self.inner.konsumenten.iter().for_each(|entry| {
            let sender = entry.value();
            if sender.ist_offen() && sender.senden(frame.clone()) {
                erreicht += 1;
            }
        });
        erreicht
    }

    /// Gibt die Anzahl der registrierten Konsumenten zurueck
    pub fn anzahl(&self) -> usize {
        self.inner.konsumenten.len()
    }

    /// Prueft ob ein Konsument registriert ist
    pub fn ist_registriert(&self, id: &KonsumentId) -> bool {
        self.inner.konsumenten.contains_key(id)
    }
}

impl Default for KonsumentenRegister {
    fn default() -> Self {
        Self::neu()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
