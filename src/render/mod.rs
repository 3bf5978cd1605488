//! Low-level rendering primitives: the back buffer, triangle fill and lines.

pub mod framebuffer;
pub mod line;
pub mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use line::{draw_bline, draw_line, draw_midpoint_line, LineAlgorithm};
pub use rasterizer::{clamp, draw_triangle, interpolate, process_scan_line, Triangle};
