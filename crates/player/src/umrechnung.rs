//! Anpassung eines Mono-Clips an das Format des Ausgabegeraets
//!
//! Lineare Interpolation auf die Geraete-Abtastrate, anschliessend wird
//! jedes Sample auf alle Kanaele dupliziert (interleaved).

/// Rechnet `samples` von `quell_rate` auf `ziel_rate` um und verteilt sie
/// auf `kanaele` Kanaele.
pub fn umrechnen(samples: &[f32], quell_rate: u32, ziel_rate: u32, kanaele: u16) -> Vec<f32> {
    let kanaele = kanaele.max(1) as usize;
    if samples.is_empty() || quell_rate == 0 || ziel_rate == 0 {
        return Vec::new();
    }

    let mono = if quell_rate == ziel_rate {
        samples.to_vec()
    } else {
        interpolieren(samples, quell_rate, ziel_rate)
    };

    if kanaele == 1 {
        return mono;
    }
    let mut ausgabe = Vec::with_capacity(mono.len() * kanaele);
    for s in mono {
        ausgabe.extend(std::iter::repeat(s).take(kanaele));
    }
    ausgabe
}

fn interpolieren(samples: &[f32], quell_rate: u32, ziel_rate: u32) -> Vec<f32> {
    let ziel_laenge = (samples.len() as u64 * ziel_rate as u64 / quell_rate as u64) as usize;
    let schritt = quell_rate as f64 / ziel_rate as f64;
    let letztes = samples.len() - 1;

    (0..ziel_laenge)
        .map(|i| {
            let pos = i as f64 * schritt;
            let idx = (pos as usize).min(letztes);
            let naechstes = (idx + 1).min(letztes);
            let anteil = (pos - idx as f64) as f32;
            samples[idx] + (samples[naechstes] - samples[idx]) * anteil
        })
        .collect()
}
