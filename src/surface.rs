//! Presentation targets for finished frames.
//!
//! A [`Surface`] receives the complete back buffer in a single call, so a
//! partially drawn frame is never observable through it.

use std::path::Path;

use image::RgbaImage;
use log::debug;
use thiserror::Error;

use crate::render::framebuffer::BYTES_PER_PIXEL;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("frame is {actual} bytes, expected {expected} for {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("window error: {0}")]
    Window(String),
}

/// Something that can display a finished RGBA8 frame.
pub trait Surface {
    /// Publishes `frame` (interleaved RGBA, row-major, top-left origin).
    fn present(&mut self, frame: &[u8], width: u32, height: u32) -> Result<(), SurfaceError>;
}

/// Checks that `frame` holds exactly `width * height` RGBA pixels.
pub fn check_frame_len(frame: &[u8], width: u32, height: u32) -> Result<(), SurfaceError> {
    let expected = width as usize * height as usize * BYTES_PER_PIXEL;
    if frame.len() != expected {
        return Err(SurfaceError::SizeMismatch {
            width,
            height,
            expected,
            actual: frame.len(),
        });
    }
    Ok(())
}

/// An in-memory front buffer holding the most recently presented frame.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    image: RgbaImage,
    frames_presented: u64,
}

impl Default for ImageSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSurface {
    pub fn new() -> Self {
        Self {
            image: RgbaImage::new(0, 0),
            frames_presented: 0,
        }
    }

    /// The last presented frame. Empty (0x0) before the first present.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Writes the last presented frame as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), SurfaceError> {
        let path = path.as_ref();
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        debug!(
            "saved {}x{} frame to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }
}

impl Surface for ImageSurface {
    fn present(&mut self, frame: &[u8], width: u32, height: u32) -> Result<(), SurfaceError> {
        check_frame_len(frame, width, height)?;
        if self.image.dimensions() == (width, height) {
            self.image.copy_from_slice(frame);
        } else {
            self.image = RgbaImage::from_raw(width, height, frame.to_vec()).ok_or(
                SurfaceError::SizeMismatch {
                    width,
                    height,
                    expected: width as usize * height as usize * BYTES_PER_PIXEL,
                    actual: frame.len(),
                },
            )?;
        }
        self.frames_presented += 1;
        Ok(())
    }
}
