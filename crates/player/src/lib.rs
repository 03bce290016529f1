//! ulawcast-player – Nativer PCMU-Player
//!
//! Empfaengt RTP/PCMU-Frames vom Relay, trennt den 12-Byte-Header ab,
//! dekodiert μ-law zu linearem PCM und uebergibt 100-ms-Clips an die
//! Audio-Ausgabe:
//! - `puffer`: Header abtrennen, dekodieren, zu Clips sammeln
//! - `player`: Aktivierungs-Gate und Statistik
//! - `ausgabe`: Senke fuer Clips (Protokoll, cpal mit Feature `cpal`)
//! - `client`: WebSocket-Empfang

pub mod ausgabe;
pub mod client;
pub mod config;
#[cfg(feature = "cpal")]
pub mod cpal_ausgabe;
pub mod error;
pub mod player;
pub mod puffer;
#[cfg(feature = "cpal")]
pub mod umrechnung;

// Bequeme Re-Exporte der wichtigsten Typen
pub use ausgabe::{AudioAusgabe, ProtokollAusgabe};
pub use client::empfangen;
pub use config::PlayerConfig;
#[cfg(feature = "cpal")]
pub use cpal_ausgabe::CpalAusgabe;
pub use error::{PlayerError, PlayerResult};
pub use player::{Player, PlayerStatistik};
pub use puffer::{Clip, WiedergabePuffer};
