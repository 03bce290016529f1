//! Feste Parameter des PCMU-Audiostroms
//!
//! Der Stream ist immer G.711 μ-law, mono, 8 kHz, ein Byte pro Sample,
//! eingepackt in RTP mit einem festen Header ohne Extensions.

/// Groesse des RTP-Headers in Bytes (Felder werden nicht ausgewertet)
pub const RTP_HEADER_GROESSE: usize = 12;

/// Abtastrate des PCMU-Stroms in Hz
pub const ABTASTRATE_HZ: u32 = 8000;

/// Anzahl Samples pro abgespieltem Clip (100 ms bei 8 kHz)
pub const CLIP_SAMPLES: usize = 800;

/// Divisor fuer die Normalisierung von i16-Samples auf [-1.0, 1.0]
pub const NORMALISIERUNG: f32 = 32768.0;
