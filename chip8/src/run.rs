use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{debug, info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::Chip8;
use chip8_display::{Beeper, Display};

use crate::config::Config;
use crate::keymap::keymap;

pub fn run(config: Config) -> anyhow::Result<()> {
    let mut chip8: Chip8 = Chip8::new();

    // Load ROM
    let file = File::open(&config.rom)
        .with_context(|| format!("unable to open {}", config.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", config.rom.display()))?;

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display: Display = Display::new(&sdl, config.scale)?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;
    let mut beeper: Option<Beeper> = if config.mute {
        None
    } else {
        match Beeper::new(&sdl) {
            Ok(beeper) => Some(beeper),
            Err(e) => {
                warn!("continuing without sound: {}", e);
                None
            }
        }
    };

    // Set initial timing
    let cycle_time = Duration::from_secs_f64(1.0 / f64::from(config.clock_speed));
    let timer_period = Duration::from_secs_f64(1.0 / f64::from(config.timer_hz));
    let mut last_cycle: Instant = Instant::now();
    let mut last_tick: Instant = last_cycle;

    info!(
        "running {} at {}Hz",
        config.rom.display(),
        config.clock_speed
    );

    'event: loop {
        // If the draw flag is set, render the current frame and unset it
        if let Some(frame) = chip8.frame() {
            display.render(frame)?;
            chip8.clear_redraw();
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc)
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc)
                    }
                }
                _ => continue,
            };
        }

        // Update state
        chip8.step();
        while last_tick.elapsed() >= timer_period {
            if chip8.tick_timers() {
                debug!("beep");
            }
            last_tick += timer_period;
        }
        if let Some(beeper) = beeper.as_mut() {
            beeper.set_active(chip8.sound_active());
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("shutting down");
    Ok(())
}
