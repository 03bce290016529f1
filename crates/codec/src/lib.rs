//! ulawcast-codec – PCMU-Dekodierung
//!
//! - `ulaw`: G.711 μ-law Byte -> 16-Bit lineares PCM
//! - `rtp`:  Abtrennen des festen RTP-Headers

pub mod rtp;
pub mod ulaw;

pub use rtp::nutzdaten;
pub use ulaw::{ulaw_dekodieren, ulaw_normalisiert_anhaengen};
