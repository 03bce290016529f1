//! Wiedergabe-Puffer – sammelt dekodierte Samples zu festen Clips
//!
//! Jedes Frame wird vom RTP-Header befreit, μ-law-dekodiert, normalisiert
//! und in Reihenfolge angehaengt. Sobald der Puffer die Schwelle erreicht,
//! wird er als ein zusammenhaengender Clip ausgegeben und geleert. Ein
//! Frame kann die Schwelle mehrfach ueberschreiten und liefert dann
//! mehrere Clips; unvollstaendige Clips werden nie ausgegeben.

use std::time::Duration;
use ulawcast_codec::{nutzdaten, ulaw_normalisiert_anhaengen};
use ulawcast_core::konstanten::{ABTASTRATE_HZ, CLIP_SAMPLES};

/// Ein abspielbarer Mono-Clip
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    /// Normalisierte Samples in [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Abtastrate in Hz
    pub abtastrate: u32,
}

impl Clip {
    /// Abspieldauer des Clips
    pub fn dauer(&self) -> Duration {
        Duration::from_nanos(self.samples.len() as u64 * 1_000_000_000 / self.abtastrate.max(1) as u64)
    }

    /// Gibt true zurueck wenn alle Samples exakt 0.0 sind
    pub fn ist_stille(&self) -> bool {
        self.samples.iter().all(|s| *s == 0.0)
    }
}

/// Sammelt Samples bis zur Clip-Schwelle
#[derive(Debug)]
pub struct WiedergabePuffer {
    samples: Vec<f32>,
    schwelle: usize,
    abtastrate: u32,
}

impl WiedergabePuffer {
    /// Puffer fuer 100-ms-Clips bei 8 kHz
    pub fn neu() -> Self {
        Self::mit_schwelle(CLIP_SAMPLES)
    }

    /// Puffer mit eigener Schwelle (mindestens 1 Sample)
    pub fn mit_schwelle(schwelle: usize) -> Self {
        let schwelle = schwelle.max(1);
        Self {
            samples: Vec::with_capacity(schwelle),
            schwelle,
            abtastrate: ABTASTRATE_HZ,
        }
    }

    /// Verarbeitet ein RTP-Frame und gibt die fertig gewordenen Clips zurueck
    ///
    /// Frames ohne Nutzdaten (`len <= 12`) aendern den Puffer nicht.
    ///
    /// Jeder Clip hat genau `schwelle` Samples; ein Frame kann mehrere Clips
    /// abschliessen und der Rest bleibt fuer den naechsten Clip im Puffer.
    /// Der Browser-Player verhaelt sich gleich. Ein Puffer, der nur nach
    /// ganzen Frames prueft, wuerde stattdessen alles Gesammelte als einen
    /// laengeren Clip ausgeben (3 x 300 Samples: ein Clip mit 900 statt
    /// einem mit 800 und 100 im Puffer).
    pub fn frame_verarbeiten(&mut self, frame: &[u8]) -> Vec<Clip> {
        let Some(mut rest) = nutzdaten(frame) else {
            return Vec::new();
        };

        let mut clips = Vec::new();
        while !rest.is_empty() {
            let frei = self.schwelle - self.samples.len();
            let (teil, uebrig) = rest.split_at(frei.min(rest.len()));
            ulaw_normalisiert_anhaengen(teil, &mut self.samples);
            rest = uebrig;

            if self.samples.len() >= self.schwelle {
                let samples =
                    std::mem::replace(&mut self.samples, Vec::with_capacity(self.schwelle));
                clips.push(Clip {
                    samples,
                    abtastrate: self.abtastrate,
                });
            }
        }
        clips
    }

    /// Anzahl der gepufferten Samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn schwelle(&self) -> usize {
        self.schwelle
    }
}

impl Default for WiedergabePuffer {
    fn default() -> Self {
        Self::neu()
    }
}
