//! G.711 μ-law Decoder
//!
//! Jedes Byte kodiert ein Sample. Die Expansion:
//!
//! ```text
//! b        = !byte
//! vorz.    = Bit 7
//! exponent = Bits 6-4
//! mantisse = Bits 3-0
//! sample   = (((mantisse << 1) + 33) << (exponent + 2)) - 132
//! ```
//!
//! Der Wertebereich ist [-32124, 32124]. Die Funktion ist total; jedes
//! Eingabebyte hat ein definiertes Ergebnis. Fuer den Hot-Path wird eine
//! zur Compilezeit berechnete Tabelle verwendet.

use ulawcast_core::konstanten::NORMALISIERUNG;

/// Bias der μ-law Kennlinie
const BIAS: i32 = 132;

/// Expandiert ein μ-law Byte nach der Formel (ohne Tabelle)
const fn expandieren(byte: u8) -> i16 {
    let b = !byte;
    let exponent = (b >> 4) & 0x07;
    let mantisse = (b & 0x0f) as i32;
    let betrag = (((mantisse << 1) + 33) << (exponent + 2)) - BIAS;
    if b & 0x80 != 0 {
        -betrag as i16
    } else {
        betrag as i16
    }
}

const fn tabelle_erzeugen() -> [i16; 256] {
    let mut tabelle = [0i16; 256];
    let mut i = 0;
    while i < 256 {
        tabelle[i] = expandieren(i as u8);
        i += 1;
    }
    tabelle
}

static ULAW_TABELLE: [i16; 256] = tabelle_erzeugen();

/// Dekodiert ein μ-law Byte in ein lineares 16-Bit-Sample
#[inline]
pub fn ulaw_dekodieren(byte: u8) -> i16 {
    ULAW_TABELLE[byte as usize]
}

/// Dekodiert `nutzdaten` und haengt die auf [-1.0, 1.0] normalisierten
/// Samples in Reihenfolge an `ziel` an.
pub fn ulaw_normalisiert_anhaengen(nutzdaten: &[u8], ziel: &mut Vec<f32>) {
    ziel.reserve(nutzdaten.len());
    ziel.extend(
        nutzdaten
            .iter()
            .map(|&b| ulaw_dekodieren(b) as f32 / NORMALISIERUNG),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stille_bytes_ergeben_null() {
        assert_eq!(ulaw_dekodieren(0xFF), 0);
        assert_eq!(ulaw_dekodieren(0x7F), 0);
    }

    #[test]
    fn maximale_amplituden() {
        assert_eq!(ulaw_dekodieren(0x00), -32124);
        assert_eq!(ulaw_dekodieren(0x80), 32124);
    }

    #[test]
    fn bekannte_testvektoren() {
        let vektoren: &[(u8, i16)] = &[
            (0xEF, 132),
            (0x6F, -132),
            (0x0F, -16764),
            (0x8F, 16764),
            (0xFE, 8),
            (0x7E, -8),
            (0xF0, 120),
            (0x70, -120),
            (0xDF, 396),
            (0x5F, -396),
            (0x01, -31100),
        ];
        for &(byte, erwartet) in vektoren {
            assert_eq!(ulaw_dekodieren(byte), erwartet, "Byte {byte:#04x}");
        }
    }

    #[test]
    fn tabelle_entspricht_formel() {
        for byte in 0..=255u8 {
            assert_eq!(ulaw_dekodieren(byte), expandieren(byte));
        }
    }

    #[test]
    fn wertebereich_eingehalten() {
        for byte in 0..=255u8 {
            let s = ulaw_dekodieren(byte) as i32;
            assert!((-32124..=32124).contains(&s));
        }
    }

    #[test]
    fn normalisiert_anhaengen_behaelt_reihenfolge() {
        let mut ziel = vec![0.5];
        ulaw_normalisiert_anhaengen(&[0xFF, 0x80, 0x00], &mut ziel);

        assert_eq!(ziel.len(), 4);
        assert_eq!(ziel[0], 0.5);
        assert_eq!(ziel[1], 0.0);
        assert_eq!(ziel[2], 32124.0 / 32768.0);
        assert_eq!(ziel[3], -32124.0 / 32768.0);
        assert!(ziel.iter().all(|s| (-1.0..=1.0).contains(s)));
    }
}
