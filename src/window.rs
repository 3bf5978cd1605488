//! SDL2 window surface, enabled with the `window` feature.

use std::thread;
use std::time::Duration;

use log::debug;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::render::framebuffer::BYTES_PER_PIXEL;
use crate::surface::{check_frame_len, Surface, SurfaceError};

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: u64 = 1000 / FPS;

// ABGR8888 is stored as R, G, B, A bytes on little-endian targets.
const TEXTURE_FORMAT: PixelFormatEnum = PixelFormatEnum::ABGR8888;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Sleeps to hold the target frame rate and returns the milliseconds
    /// elapsed since the previous call.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME {
            thread::sleep(Duration::from_millis(FRAME_TARGET_TIME - delta_time));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: Canvas<sdl2::video::Window>,
    // Field order matters: `texture` must drop before `texture_creator`.
    texture: Texture<'static>,
    texture_creator: Box<TextureCreator<WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, SurfaceError> {
        let sdl_context = sdl2::init().map_err(SurfaceError::Window)?;
        let video_subsystem = sdl_context.video().map_err(SurfaceError::Window)?;
        let timer_subsystem = sdl_context.timer().map_err(SurfaceError::Window)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| SurfaceError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| SurfaceError::Window(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(SurfaceError::Window)?;
        let texture = create_texture(&texture_creator, width, height)?;

        debug!("opened {width}x{height} window '{title}'");
        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } = event
            {
                return WindowEvent::Quit;
            }
        }
        WindowEvent::None
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

impl Surface for Window {
    fn present(&mut self, frame: &[u8], width: u32, height: u32) -> Result<(), SurfaceError> {
        check_frame_len(frame, width, height)?;
        if (width, height) != (self.width, self.height) {
            self.texture = create_texture(&self.texture_creator, width, height)?;
            self.width = width;
            self.height = height;
        }

        self.texture
            .update(None, frame, width as usize * BYTES_PER_PIXEL)
            .map_err(|e| SurfaceError::Window(e.to_string()))?;
        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(SurfaceError::Window)?;
        self.canvas.present();
        Ok(())
    }
}

fn create_texture(
    creator: &TextureCreator<WindowContext>,
    width: u32,
    height: u32,
) -> Result<Texture<'static>, SurfaceError> {
    // SAFETY: the creator is boxed inside `Window` and outlives every texture
    // it creates, which are dropped first by field order.
    let creator: &'static TextureCreator<WindowContext> = unsafe { &*(creator as *const _) };
    creator
        .create_texture_streaming(TEXTURE_FORMAT, width, height)
        .map_err(|e| SurfaceError::Window(e.to_string()))
}
