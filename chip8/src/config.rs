use std::path::PathBuf;

use clap::Parser;

use chip8_core::{CLOCK_SPEED, TIMER_HZ};

/// Run a Chip-8 ROM
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the ROM file to run
    pub rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = CLOCK_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    pub clock_speed: u32,

    /// Rate at which the delay and sound timers count down
    #[arg(long, default_value_t = TIMER_HZ, value_parser = clap::value_parser!(u32).range(1..))]
    pub timer_hz: u32,

    /// Window pixels per Chip-8 pixel
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: u32,

    /// Don't open an audio device
    #[arg(long)]
    pub mute: bool,
}
