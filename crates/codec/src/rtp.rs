//! RTP-Header abtrennen
//!
//! Der Header hat fest `RTP_HEADER_GROESSE` Bytes. CSRC-Listen,
//! Extensions und Padding werden nicht ausgewertet.

use ulawcast_core::konstanten::RTP_HEADER_GROESSE;

/// Gibt die Nutzdaten hinter dem RTP-Header zurueck.
///
/// `None` wenn das Frame keine Nutzdaten enthaelt (`len <= 12`).
pub fn nutzdaten(frame: &[u8]) -> Option<&[u8]> {
    if frame.len() <= RTP_HEADER_GROESSE {
        return None;
    }
    Some(&frame[RTP_HEADER_GROESSE..])
}
