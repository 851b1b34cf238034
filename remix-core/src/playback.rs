//! # Playback Handle
//!
//! One [`Player`] wraps one rodio output stream, one sink bound to one
//! audio source, and the min/max peaks the waveform canvas draws.
//! Every widget owns at most one `Player`; rebinding a widget to a new
//! source drops the old handle (releasing the sink and the audio device
//! stream) before a replacement is built. Decoding is delegated entirely
//! to `rodio::Decoder` — this crate implements no codec logic.

use std::io::Cursor;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::{RemixError, Result};
use crate::peaks::{self, PEAK_COLUMNS};

/// Play/mute flags for one handle.
///
/// Kept apart from the sink so the transitions are testable without an
/// audio device. The flags are per handle and never synchronize across
/// handles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Transport {
    playing: bool,
    muted: bool,
}

/// What a play/pause press asks of the sink.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayToggle {
    /// The sink drained after a full playthrough: rebuild the source and
    /// start it from the top.
    Restart,
    Play,
    Pause,
}

impl Transport {
    /// Resolves one play/pause press given whether the sink has drained.
    pub fn toggle_play(&mut self, drained: bool) -> PlayToggle {
        if drained {
            // The paused/playing flag is stale once the source ran out;
            // a press always restarts.
            self.playing = true;
            return PlayToggle::Restart;
        }
        self.playing = !self.playing;
        if self.playing {
            PlayToggle::Play
        } else {
            PlayToggle::Pause
        }
    }

    /// Flips the mute flag and returns the sink volume to apply.
    pub fn toggle_mute(&mut self) -> f32 {
        self.muted = !self.muted;
        if self.muted { 0.0 } else { 1.0 }
    }

    /// A drained sink has finished; report it as stopped.
    pub fn is_playing(&self, drained: bool) -> bool {
        self.playing && !drained
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Owned playback resource for one audio source.
pub struct Player {
    // Keeps the audio device open for the lifetime of this handle.
    _stream: OutputStream,
    sink: Sink,
    // Retained so a drained sink can be rebuilt for replay.
    bytes: Vec<u8>,
    peaks: Vec<(f32, f32)>,
    duration: Duration,
    transport: Transport,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("peaks", &self.peaks.len())
            .field("duration", &self.duration)
            .field("transport", &self.transport)
            .finish()
    }
}

impl Player {
    /// Decodes `bytes` and builds a paused, unmuted player over them.
    ///
    /// The bytes are decoded twice: once up front for the peak columns and
    /// duration, and once lazily by the sink during playback.
    pub fn load(bytes: Vec<u8>) -> Result<Self> {
        let probe = Decoder::new(Cursor::new(bytes.clone()))
            .map_err(|e| RemixError::UnsupportedAudio(e.to_string()))?;
        let sample_rate = probe.sample_rate();
        let channels = probe.channels();

        let samples: Vec<f32> = probe.convert_samples::<f32>().collect();
        if samples.is_empty() {
            return Err(RemixError::UnsupportedAudio(
                "source decoded to zero samples".into(),
            ));
        }

        let duration = Duration::from_secs_f64(
            samples.len() as f64 / (sample_rate as f64 * channels as f64),
        );
        let peaks = peaks::min_max_peaks(&samples, PEAK_COLUMNS);

        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        let source = Decoder::new(Cursor::new(bytes.clone()))
            .map_err(|e| RemixError::UnsupportedAudio(e.to_string()))?;
        sink.append(source);
        // New handles start paused and unmuted.
        sink.pause();

        log::debug!(
            "player loaded: {:.1}s, {} peak columns",
            duration.as_secs_f64(),
            peaks.len()
        );

        Ok(Self {
            _stream: stream,
            sink,
            bytes,
            peaks,
            duration,
            transport: Transport::default(),
        })
    }

    /// Toggles this handle's play/pause state only. A handle whose sink
    /// drained restarts from the top, like the original play/pause control.
    pub fn toggle_play(&mut self) {
        match self.transport.toggle_play(self.sink.empty()) {
            PlayToggle::Restart => {
                // These bytes decoded at load time, so this only fails if
                // the device went away; the sink stays drained and the
                // handle keeps reporting stopped.
                match Decoder::new(Cursor::new(self.bytes.clone())) {
                    Ok(source) => {
                        self.sink.append(source);
                        self.sink.play();
                    }
                    Err(e) => log::error!("failed to rebuild drained source: {e}"),
                }
            }
            PlayToggle::Play => self.sink.play(),
            PlayToggle::Pause => self.sink.pause(),
        }
    }

    /// Toggles this handle's mute flag and propagates it to the sink.
    pub fn toggle_mute(&mut self) {
        let volume = self.transport.toggle_mute();
        self.sink.set_volume(volume);
    }

    pub fn is_playing(&self) -> bool {
        self.transport.is_playing(self.sink.empty())
    }

    pub fn is_muted(&self) -> bool {
        self.transport.is_muted()
    }

    /// Peak columns for the waveform canvas.
    pub fn peaks(&self) -> &[(f32, f32)] {
        &self.peaks
    }

    /// Playhead position as a fraction of the decoded duration.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.sink.get_pos().as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_starts_then_pauses() {
        let mut transport = Transport::default();
        assert!(!transport.is_playing(false));

        assert_eq!(transport.toggle_play(false), PlayToggle::Play);
        assert!(transport.is_playing(false));

        assert_eq!(transport.toggle_play(false), PlayToggle::Pause);
        assert!(!transport.is_playing(false));
    }

    #[test]
    fn drained_sink_reports_stopped_and_restarts_on_press() {
        let mut transport = Transport::default();
        transport.toggle_play(false);
        assert!(transport.is_playing(false));

        // The source plays through: the handle must report stopped even
        // though no pause was ever pressed.
        assert!(!transport.is_playing(true));

        // The next press restarts instead of pausing a dead sink, and the
        // handle reports playing again once the source is rebuilt.
        assert_eq!(transport.toggle_play(true), PlayToggle::Restart);
        assert!(transport.is_playing(false));

        // And a further press pauses normally.
        assert_eq!(transport.toggle_play(false), PlayToggle::Pause);
        assert!(!transport.is_playing(false));
    }

    #[test]
    fn pressing_play_after_a_drain_never_issues_a_pause() {
        let mut transport = Transport::default();
        transport.toggle_play(false); // playing
        assert_ne!(transport.toggle_play(true), PlayToggle::Pause);
    }

    #[test]
    fn mute_toggles_sink_volume() {
        let mut transport = Transport::default();
        assert!(!transport.is_muted());

        assert_eq!(transport.toggle_mute(), 0.0);
        assert!(transport.is_muted());

        assert_eq!(transport.toggle_mute(), 1.0);
        assert!(!transport.is_muted());
    }

    #[test]
    fn lanes_never_share_transport_state() {
        let mut lanes = [Transport::default(); 4];

        lanes[1].toggle_mute();
        lanes[0].toggle_play(false);

        assert!(lanes[0].is_playing(false));
        assert!(!lanes[0].is_muted());
        assert!(lanes[1].is_muted());
        assert!(!lanes[1].is_playing(false));
        assert!(!lanes[2].is_muted());
        assert!(!lanes[3].is_muted());
    }
}
