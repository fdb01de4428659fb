use anyhow::{anyhow, Result};

use crate::FrameBuffer;

/// Shows a finished frame in a window and blocks until the window is closed.
pub fn show(frame_buffer: &FrameBuffer) -> Result<()> {
    let width = frame_buffer.width() as u32;
    let height = frame_buffer.height() as u32;

    let sdl2_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut canvas = sdl2_context
        .video()
        .map_err(|e| anyhow!(e))?
        .window("spheretracer", width, height)
        .position_centered()
        .build()?
        .into_canvas()
        .build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_streaming(
        sdl2::pixels::PixelFormatEnum::RGB24,
        width,
        height,
    )?;
    let mut events = sdl2_context.event_pump().map_err(|e| anyhow!(e))?;

    texture.update(
        sdl2::rect::Rect::new(0, 0, width, height),
        frame_buffer.pixel_data(),
        frame_buffer.width() * 3,
    )?;
    canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
    canvas.present();

    'main: loop {
        for event in events.wait_timeout_iter(100) {
            if let sdl2::event::Event::Quit { .. } = event {
                break 'main;
            }
        }
    }
    Ok(())
}
