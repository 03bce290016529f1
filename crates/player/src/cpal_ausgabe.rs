//! Lautsprecher-Ausgabe via cpal
//!
//! cpal-Streams sind nicht `Send`; der Stream lebt deshalb in einem
//! eigenen Wiedergabe-Thread. Clips kommen ueber einen crossbeam-Kanal,
//! werden auf das Geraeteformat umgerechnet und in einen lock-free
//! Ring-Buffer geschrieben, den der cpal-Callback leert.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleFormat, SampleRate, Stream, StreamConfig};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::{HeapProd, HeapRb};
use tracing::{debug, error, info, warn};
use ulawcast_core::konstanten::ABTASTRATE_HZ;

use crate::ausgabe::AudioAusgabe;
use crate::error::{PlayerError, PlayerResult};
use crate::puffer::Clip;
use crate::umrechnung::umrechnen;

/// Clips, die auf den Wiedergabe-Thread warten duerfen
const CLIP_QUEUE_GROESSE: usize = 32;

/// Ring-Buffer-Kapazitaet in Sekunden Audio
const RING_SEKUNDEN: usize = 2;

/// Format des geoeffneten Geraetestreams
#[derive(Debug, Clone, Copy)]
struct GeraeteFormat {
    abtastrate: u32,
    kanaele: u16,
}

/// Clip-Senke fuer das Standard-Ausgabegeraet
pub struct CpalAusgabe {
    clip_tx: Sender<Clip>,
}

impl CpalAusgabe {
    /// Oeffnet das Standard-Ausgabegeraet im Wiedergabe-Thread
    ///
    /// Blockiert bis der Stream laeuft oder das Oeffnen fehlschlaegt.
    pub fn starten() -> PlayerResult<Self> {
        let (clip_tx, clip_rx) = bounded::<Clip>(CLIP_QUEUE_GROESSE);
        let (bereit_tx, bereit_rx) = bounded::<PlayerResult<()>>(1);

        std::thread::Builder::new()
            .name("ulawcast-wiedergabe".to_string())
            .spawn(move || wiedergabe_thread(clip_rx, bereit_tx))
            .map_err(|e| PlayerError::StreamFehler(e.to_string()))?;

        bereit_rx
            .recv()
            .map_err(|_| PlayerError::StreamFehler("Wiedergabe-Thread vorzeitig beendet".into()))??;

        Ok(Self { clip_tx })
    }
}

impl AudioAusgabe for CpalAusgabe {
    fn abspielen(&mut self, clip: Clip) {
        match self.clip_tx.try_send(clip) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => warn!("Clip-Queue voll – Clip verworfen"),
            Err(TrySendError::Disconnected(_)) => warn!("Wiedergabe-Thread beendet – Clip verworfen"),
        }
    }
}

fn wiedergabe_thread(clip_rx: Receiver<Clip>, bereit_tx: Sender<PlayerResult<()>>) {
    let (stream, mut producer, format) = match stream_oeffnen() {
        Ok(x) => x,
        Err(e) => {
            let _ = bereit_tx.send(Err(e));
            return;
        }
    };
    let _ = bereit_tx.send(Ok(()));

    // Endet wenn die CpalAusgabe verworfen wird
    for clip in clip_rx.iter() {
        let samples = umrechnen(&clip.samples, clip.abtastrate, format.abtastrate, format.kanaele);
        let geschrieben = producer.push_slice(&samples);
        if geschrieben < samples.len() {
            warn!(
                fehlend = samples.len() - geschrieben,
                "Ring-Buffer voll – Samples verworfen"
            );
        }
    }

    drop(stream);
    debug!("Wiedergabe-Thread beendet");
}

fn stream_oeffnen() -> PlayerResult<(Stream, HeapProd<f32>, GeraeteFormat)> {
    let device = cpal::default_host()
        .default_output_device()
        .ok_or(PlayerError::KeinAusgabegeraet)?;

    let (stream_config, sample_format) = konfiguration_waehlen(&device)?;
    let format = GeraeteFormat {
        abtastrate: stream_config.sample_rate.0,
        kanaele: stream_config.channels,
    };

    let kapazitaet = format.abtastrate as usize * format.kanaele as usize * RING_SEKUNDEN;
    let (producer, mut consumer) = HeapRb::<f32>::new(kapazitaet).split();

    let err_fn = |err| error!("Playback-Fehler: {}", err);

    let stream = match sample_format {
        SampleFormat::F32 => device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _| {
                    // Stille fuer fehlende Samples (zwischen Clips normal)
                    let gelesen = consumer.pop_slice(data);
                    data[gelesen..].fill(0.0);
                },
                err_fn,
                None,
            )
            .map_err(|e| PlayerError::StreamFehler(e.to_string()))?,
        SampleFormat::I16 => device
            .build_output_stream(
                &stream_config,
                move |data: &mut [i16], _| {
                    let mut float_buf = vec![0.0f32; data.len()];
                    consumer.pop_slice(&mut float_buf);
                    for (out, s) in data.iter_mut().zip(float_buf.iter()) {
                        *out = (*s * i16::MAX as f32).clamp(i16::MIN as f32, i16::MAX as f32) as i16;
                    }
                },
                err_fn,
                None,
            )
            .map_err(|e| PlayerError::StreamFehler(e.to_string()))?,
        anderes => {
            return Err(PlayerError::StreamFehler(format!(
                "Nicht unterstuetztes Sample-Format: {:?}",
                anderes
            )))
        }
    };

    stream
        .play()
        .map_err(|e| PlayerError::StreamFehler(e.to_string()))?;

    info!(
        abtastrate = format.abtastrate,
        kanaele = format.kanaele,
        "Ausgabegeraet geoeffnet"
    );

    Ok((stream, producer, format))
}

/// Bevorzugt 8 kHz direkt, sonst das Standardformat des Geraets
fn konfiguration_waehlen(device: &Device) -> PlayerResult<(StreamConfig, SampleFormat)> {
    let direkt = device
        .supported_output_configs()
        .map_err(|e| PlayerError::StreamFehler(e.to_string()))?
        .filter(|c| matches!(c.sample_format(), SampleFormat::F32 | SampleFormat::I16))
        .find(|c| {
            c.min_sample_rate().0 <= ABTASTRATE_HZ && c.max_sample_rate().0 >= ABTASTRATE_HZ
        });

    let gewaehlt = match direkt {
        Some(bereich) => bereich.with_sample_rate(SampleRate(ABTASTRATE_HZ)),
        None => device
            .default_output_config()
            .map_err(|e| PlayerError::StreamFehler(e.to_string()))?,
    };

    Ok((gewaehlt.config(), gewaehlt.sample_format()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "Benoetigt Audio-Hardware"]
    fn ausgabe_starten_und_clip_abspielen() {
        let mut ausgabe = CpalAusgabe::starten().expect("Ausgabegeraet sollte oeffenbar sein");
        ausgabe.abspielen(Clip {
            samples: vec![0.0; 800],
            abtastrate: ABTASTRATE_HZ,
        });
    }
}
