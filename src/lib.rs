//! Paint-bucket coloring canvas.
//!
//! The core is [`fill`]: a 4-connected flood fill over an RGBA8
//! [`PixelBuffer`] that treats colors as equal when their RGB channels match.
//! The rest of the crate is the host around it: config, image I/O, zoomed
//! presentation and a minifb window.

pub mod cli;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod fill;
pub mod io;
pub mod session;
pub mod types;
pub mod view;

pub use color::{color_from_hex_string, colors_match, Color};
pub use error::{Error, Result};
pub use fill::{fill, FloodFillEngine};
pub use types::{Coordinate, FrameBuffer, PixelBuffer};
