use sdl2::pixels::PixelFormatEnum;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::FrameBuffer;

use crate::error::DisplayError;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The on/off state of these pixels is encoded as 1/0 respectively in a row-major array.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(DisplayError::Video)?;
        let window = video_subsystem
            .window(
                "Chip-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| DisplayError::Video(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| DisplayError::Video(e.to_string()))?;

        Ok(Display { canvas })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
    /// Each cell is triplicated and scaled from 0/1 to 0/255 intensity.
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|&a| std::iter::repeat(a * 255).take(3))
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| DisplayError::Video(e.to_string()))?;

        let pixels = Display::frame_to_sdl_texture(frame);
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                for (row, line) in pixels.chunks(DISPLAY_WIDTH * 3).enumerate() {
                    buffer[row * pitch..row * pitch + line.len()].copy_from_slice(line);
                }
            })
            .map_err(DisplayError::Video)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(DisplayError::Video)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame: FrameBuffer = [0; 64 * 32];
        frame[0..2].copy_from_slice(&[0, 1]);
        frame[64..66].copy_from_slice(&[1, 0]);
        let frame = Display::frame_to_sdl_texture(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(frame, expected);
    }
}
