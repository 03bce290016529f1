//! ulawcast-relay – WebSocket Fan-out fuer RTP/PCMU-Frames
//!
//! ## Architektur
//!
//! ```text
//! HTTP-Listener       (:3000)  /, /player.js, sonst 404
//! Produzent-Listener  (:3002)  Binary-Frames rein
//!     |
//!     v
//! KonsumentenRegister          Fan-out, unveraendert, pro Konsument FIFO
//!     |
//!     v
//! Konsument-Listener  (:3001)  Binary-Frames raus an jeden offenen Player
//! ```
//!
//! Keine Authentifizierung, kein Backpressure zum Produzenten, kein Zustand
//! ueber die Prozesslaufzeit hinaus.

pub mod assets;
pub mod endpunkte;
pub mod error;
pub mod register;
pub mod server;

// Bequeme Re-Exporte
pub use assets::{asset_router, Assets};
pub use error::{RelayError, RelayResult};
pub use register::KonsumentenRegister;
pub use server::{RelayAdressen, RelayKonfig, RelayServer};
