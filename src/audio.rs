//! Sound cues
//!
//! Fire-and-forget: playing a sound never reports failure to the caller and
//! never touches game state. Native output is behind the `audio` feature;
//! without it every cue is silent.

use crate::settings::AudioSettings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
}

/// Something that can play sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play(&mut self, effect: SoundEffect) {
        (**self).play(effect)
    }
}

/// Audio sink that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::trace!("(silent) {:?}", effect);
    }
}

/// Best available audio output for this build
pub fn create_audio(settings: &AudioSettings) -> Box<dyn AudioSink> {
    #[cfg(feature = "audio")]
    {
        match native::RodioAudio::new(settings) {
            Some(audio) => return Box::new(audio),
            None => log::warn!("No audio output device - audio disabled"),
        }
    }
    #[cfg(not(feature = "audio"))]
    {
        let _ = settings;
        log::info!("Built without the `audio` feature - sound cues are silent");
    }
    Box::new(SilentAudio)
}

/// Effective volume after mute
pub fn effective_volume(settings: &AudioSettings) -> f32 {
    if settings.muted {
        0.0
    } else {
        settings.master_volume.clamp(0.0, 1.0)
    }
}

#[cfg(feature = "audio")]
mod native {
    use std::io::Cursor;
    use std::time::Duration;

    use rodio::source::{Buffered, SineWave};
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

    use super::{AudioSink, SoundEffect, effective_volume};
    use crate::settings::AudioSettings;

    type Sample = Buffered<Decoder<Cursor<Vec<u8>>>>;

    /// Audio output through the default device
    pub struct RodioAudio {
        // Dropping the stream stops all playback
        _stream: OutputStream,
        handle: OutputStreamHandle,
        hit: Option<Sample>,
        volume: f32,
    }

    impl RodioAudio {
        pub fn new(settings: &AudioSettings) -> Option<Self> {
            let (stream, handle) = match OutputStream::try_default() {
                Ok(pair) => pair,
                Err(e) => {
                    log::warn!("Failed to open audio output: {}", e);
                    return None;
                }
            };

            let hit = match std::fs::read(&settings.hit_sound_path) {
                Ok(bytes) => match Decoder::new(Cursor::new(bytes)) {
                    Ok(decoder) => Some(decoder.buffered()),
                    Err(e) => {
                        log::warn!(
                            "Cannot decode {}: {}; using synthesized hit",
                            settings.hit_sound_path.display(),
                            e
                        );
                        None
                    }
                },
                Err(e) => {
                    log::info!(
                        "No hit sound at {} ({}); using synthesized hit",
                        settings.hit_sound_path.display(),
                        e
                    );
                    None
                }
            };

            Some(Self {
                _stream: stream,
                handle,
                hit,
                volume: effective_volume(settings),
            })
        }

        /// Paddle hit - solid thump
        fn play_paddle_hit(&self) {
            let result = match &self.hit {
                Some(sample) => self
                    .handle
                    .play_raw(sample.clone().amplify(self.volume).convert_samples::<f32>()),
                None => self.handle.play_raw(
                    SineWave::new(150.0)
                        .take_duration(Duration::from_millis(100))
                        .amplify(self.volume * 0.6),
                ),
            };
            if let Err(e) = result {
                log::warn!("Failed to play hit sound: {}", e);
            }
        }
    }

    impl AudioSink for RodioAudio {
        fn play(&mut self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            match effect {
                SoundEffect::PaddleHit => self.play_paddle_hit(),
            }
        }
    }
}
