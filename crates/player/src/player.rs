//! Player – verbindet Frame-Empfang, Puffer und Audio-Ausgabe
//!
//! Solange keine Ausgabe aktiviert ist (der Nutzer hat noch nicht auf
//! "Play" gedrueckt), werden empfangene Frames verworfen, ohne sie zu
//! dekodieren oder zu puffern.

use crate::ausgabe::AudioAusgabe;
use crate::puffer::WiedergabePuffer;

/// Zaehler fuer Logging und Tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStatistik {
    /// Alle empfangenen Binary-Frames
    pub frames_empfangen: u64,
    /// Frames, die vor der Aktivierung eintrafen
    pub frames_inaktiv_verworfen: u64,
    /// An die Ausgabe uebergebene Clips
    pub clips_abgespielt: u64,
}

pub struct Player {
    puffer: WiedergabePuffer,
    ausgabe: Option<Box<dyn AudioAusgabe>>,
    statistik: PlayerStatistik,
}

impl Player {
    /// Erstellt einen inaktiven Player mit Standard-Puffer
    pub fn neu() -> Self {
        Self::mit_puffer(WiedergabePuffer::neu())
    }

    pub fn mit_puffer(puffer: WiedergabePuffer) -> Self {
        Self {
            puffer,
            ausgabe: None,
            statistik: PlayerStatistik::default(),
        }
    }

    /// Aktiviert die Ausgabe; eine bereits aktive Ausgabe wird ersetzt
    pub fn aktivieren(&mut self, ausgabe: Box<dyn AudioAusgabe>) {
        if self.ausgabe.replace(ausgabe).is_none() {
            tracing::info!("Audio-Ausgabe aktiviert");
        }
    }

    pub fn ist_aktiv(&self) -> bool {
        self.ausgabe.is_some()
    }

    /// Verarbeitet ein empfangenes Binary-Frame
    pub fn frame_empfangen(&mut self, frame: &[u8]) {
        self.statistik.frames_empfangen += 1;

        let Some(ausgabe) = self.ausgabe.as_mut() else {
            self.statistik.frames_inaktiv_verworfen += 1;
            return;
        };

        for clip in self.puffer.frame_verarbeiten(frame) {
            self.statistik.clips_abgespielt += 1;
            ausgabe.abspielen(clip);
        }
    }

    /// Anzahl der gepufferten, noch nicht abgespielten Samples
    pub fn gepuffert(&self) -> usize {
        self.puffer.len()
    }

    pub fn statistik(&self) -> PlayerStatistik {
        self.statistik
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::neu()
    }
}
