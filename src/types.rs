// Core types shared by the fill engine, the viewport and the window.

use crate::color::Color;
use crate::error::Error;

/// RGBA8 raster the bucket paints into.
/// Layout: `(row * width + col) * 4 + channel`, channels in R,G,B,A order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A `width` x `height` buffer with every pixel set to `color`.
    pub fn new(width: usize, height: usize, color: Color) -> Self {
        let data = [color.r, color.g, color.b, color.a].repeat(width * height);
        Self { width, height, data }
    }

    /// Wrap existing RGBA bytes. The length must be exactly `width * height * 4`.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(Error::BufferSize { width, height, expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when there is not a single pixel to address.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Hand the bytes back to the host surface.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of (x,y), or None when outside the grid.
    #[inline]
    pub fn offset(&self, at: Coordinate) -> Option<usize> {
        if at.x < 0 || at.y < 0 {
            return None;
        }
        let (x, y) = (at.x as usize, at.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * 4)
    }

    /// Pixel at (x,y), or None when outside the grid.
    #[inline]
    pub fn get(&self, at: Coordinate) -> Option<Color> {
        self.offset(at).map(|i| self.color_at(i))
    }

    /// Write a pixel if (x,y) is inside bounds; returns whether it was written.
    #[inline]
    pub fn put(&mut self, at: Coordinate, color: Color) -> bool {
        match self.offset(at) {
            Some(i) => {
                self.set_color_at(i, color);
                true
            }
            None => false,
        }
    }

    /// Pixel at a byte offset from [`Self::offset`].
    #[inline]
    pub(crate) fn color_at(&self, i: usize) -> Color {
        Color::rgba(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Overwrite all four channels at a byte offset.
    #[inline]
    pub(crate) fn set_color_at(&mut self, i: usize, color: Color) {
        self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }
}

/// Integer pixel position. Any pair is representable; only
/// `[0,width) x [0,height)` addresses a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// (x, y) in canvas pixels.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four edge-sharing neighbours: right, left, down, up.
    #[inline]
    pub fn neighbors(self) -> [Coordinate; 4] {
        let Coordinate { x, y } = self;
        [
            Coordinate::new(x.saturating_add(1), y),
            Coordinate::new(x.saturating_sub(1), y),
            Coordinate::new(x, y.saturating_add(1)),
            Coordinate::new(x, y.saturating_sub(1)),
        ]
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// What the window shows: one 0x00RRGGBB entry per screen pixel.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}
