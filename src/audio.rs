//! Background music.
//!
//! The game only ever says "music should be audible now" or "not now" through
//! [`MusicPlayer::set_playing`]; the frame loop keeps that equal to
//! `GameState::music_audible()`. Playback problems are logged and ignored.

use crate::types::MUSIC_VOLUME;

pub trait MusicPlayer {
    /// Start or stop the loop. Repeated calls with the same value are no-ops.
    fn set_playing(&mut self, playing: bool);

    fn is_playing(&self) -> bool;
}

/// Player used when no audio device (or no `audio` feature) is available.
///
/// Tracks the requested state so the rest of the program behaves the same.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    playing: bool,
}

impl MusicPlayer for SilentPlayer {
    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// Build the best available player.
pub fn open_player() -> Box<dyn MusicPlayer> {
    #[cfg(feature = "audio")]
    {
        match rodio_player::RodioPlayer::new() {
            Ok(player) => return Box::new(player),
            Err(err) => log::warn!("audio unavailable, music disabled: {err}"),
        }
    }
    #[cfg(not(feature = "audio"))]
    log::debug!("built without the `audio` feature, music is silent");

    Box::new(SilentPlayer::default())
}

/// Procedural arpeggio loop (no bundled audio asset).
#[derive(Debug, Clone)]
pub struct Arpeggio {
    sample_rate: u32,
    channels: u16,
    frame: u64,
    chan: u16,
}

impl Arpeggio {
    const NOTES_HZ: [f32; 8] = [220.0, 261.63, 329.63, 261.63, 196.0, 246.94, 293.66, 246.94];

    pub fn new() -> Self {
        Self {
            sample_rate: 48_000,
            channels: 2,
            frame: 0,
            chan: 0,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }
}

impl Default for Arpeggio {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Arpeggio {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let note_len_frames: u64 = (self.sample_rate as u64) / 4; // 250ms per note
        let note_i = ((self.frame / note_len_frames) % (Self::NOTES_HZ.len() as u64)) as usize;
        let freq_hz = Self::NOTES_HZ[note_i];

        let pos_in_note = self.frame % note_len_frames;
        let t = pos_in_note as f32 / self.sample_rate as f32;
        let phase = 2.0 * std::f32::consts::PI * freq_hz * t;

        // Short attack/release so note boundaries do not click.
        let attack_frames: u64 = (self.sample_rate as u64) / 100;
        let release_frames: u64 = (self.sample_rate as u64) / 40;
        let release_start = note_len_frames.saturating_sub(release_frames);

        let env = if pos_in_note < attack_frames {
            pos_in_note as f32 / attack_frames.max(1) as f32
        } else if pos_in_note >= release_start {
            let remaining = note_len_frames.saturating_sub(pos_in_note);
            remaining as f32 / release_frames.max(1) as f32
        } else {
            1.0
        };

        let sample = (phase.sin() + (phase * 2.0).sin() * 0.30) * 0.20 * env;

        // Interleaved channels share one frame position.
        self.chan += 1;
        if self.chan >= self.channels {
            self.chan = 0;
            self.frame = self.frame.wrapping_add(1);
        }

        Some(sample)
    }
}

#[cfg(feature = "audio")]
mod rodio_player {
    use std::time::Duration;

    use anyhow::Result;
    use rodio::{OutputStream, OutputStreamHandle, Sink};

    use super::{Arpeggio, MusicPlayer, MUSIC_VOLUME};

    impl rodio::Source for Arpeggio {
        fn current_frame_len(&self) -> Option<usize> {
            None
        }

        fn channels(&self) -> u16 {
            self.channels
        }

        fn sample_rate(&self) -> u32 {
            self.sample_rate
        }

        fn total_duration(&self) -> Option<Duration> {
            None
        }
    }

    /// Music through the default output device.
    pub struct RodioPlayer {
        _stream: OutputStream,
        _handle: OutputStreamHandle,
        sink: Sink,
        playing: bool,
    }

    impl RodioPlayer {
        pub fn new() -> Result<Self> {
            let (stream, handle) = OutputStream::try_default()?;
            let sink = Sink::try_new(&handle)?;
            sink.set_volume(MUSIC_VOLUME);
            sink.pause();
            sink.append(Arpeggio::new());
            Ok(Self {
                _stream: stream,
                _handle: handle,
                sink,
                playing: false,
            })
        }
    }

    impl MusicPlayer for RodioPlayer {
        fn set_playing(&mut self, playing: bool) {
            if playing == self.playing {
                return;
            }
            if playing {
                self.sink.play();
            } else {
                self.sink.pause();
            }
            self.playing = playing;
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }
}

#[cfg(feature = "audio")]
pub use rodio_player::RodioPlayer;
