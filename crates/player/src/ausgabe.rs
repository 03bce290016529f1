//! Audio-Ausgabe – Uebergabe fertiger Clips an ein Ausgabegeraet
//!
//! `abspielen` darf nicht blockieren: der Empfangs-Task reicht den Clip
//! weiter und verarbeitet sofort das naechste Frame. Ob und wann der Clip
//! tatsaechlich erklingt, liegt beim Ausgabesystem.

use crate::puffer::Clip;

/// Senke fuer fertige Clips
pub trait AudioAusgabe: Send {
    /// Reicht einen Clip zur sofortigen Wiedergabe weiter (fire-and-forget)
    fn abspielen(&mut self, clip: Clip);
}

/// Ausgabe ohne Geraet: protokolliert jeden Clip
///
/// Wird verwendet wenn der Player ohne Feature `cpal` gebaut ist.
#[derive(Debug, Default)]
pub struct ProtokollAusgabe {
    clips: u64,
}

impl ProtokollAusgabe {
    pub fn neu() -> Self {
        Self::default()
    }

    /// Anzahl der bisher uebergebenen Clips
    pub fn clips(&self) -> u64 {
        self.clips
    }
}

impl AudioAusgabe for ProtokollAusgabe {
    fn abspielen(&mut self, clip: Clip) {
        self.clips += 1;
        tracing::debug!(
            nr = self.clips,
            samples = clip.samples.len(),
            dauer_ms = clip.dauer().as_millis() as u64,
            stille = clip.ist_stille(),
            "Clip abgespielt (ohne Geraet)"
        );
    }
}
