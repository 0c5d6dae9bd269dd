use log::debug;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use crate::error::DisplayError;

const SAMPLE_RATE: i32 = 44_100;
const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.25;

/// A square wave oscillator fed to the sdl2 audio callback
struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase < 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays a 440Hz tone for as long as the Chip-8 sound timer is running.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    playing: bool,
}

impl Beeper {
    /// Opens a paused mono playback device on the sdl2 context
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, DisplayError> {
        let audio_subsystem = sdl.audio().map_err(DisplayError::Audio)?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem
            .open_playback(None, &desired, |spec| SquareWave {
                phase_inc: TONE_HZ / spec.freq as f32,
                phase: 0.0,
                volume: VOLUME,
            })
            .map_err(DisplayError::Audio)?;

        Ok(Beeper {
            device,
            playing: false,
        })
    }

    /// Starts or stops the tone; repeated calls with the same value do nothing
    pub fn set_active(&mut self, active: bool) {
        if active == self.playing {
            return;
        }
        if active {
            self.device.resume();
        } else {
            self.device.pause();
        }
        debug!("beeper {}", if active { "on" } else { "off" });
        self.playing = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_wave_alternates() {
        let mut wave = SquareWave {
            phase_inc: 0.25,
            phase: 0.0,
            volume: 0.5,
        };
        let mut out = [0.0; 8];
        wave.callback(&mut out);
        assert_eq!(out, [0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, -0.5]);
    }
}
