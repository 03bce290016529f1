//! Identifikationstypen fuer ulawcast
//!
//! IDs verwenden das Newtype-Pattern um Verwechslungen zur Compilezeit
//! auszuschliessen.

use uuid::Uuid;

/// Eindeutige ID einer Konsumenten-Verbindung am Relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KonsumentId(pub Uuid);

impl KonsumentId {
    /// Erstellt eine neue zufaellige KonsumentId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for KonsumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for KonsumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "konsument:{}", self.0)
    }
}
