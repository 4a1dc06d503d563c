// Zoom and presentation: maps window pixels to canvas pixels and back.
// Zoom is anchored at the top-left corner, so screen (0,0) is always canvas (0,0).

use crate::color::Color;
use crate::types::{Coordinate, FrameBuffer, PixelBuffer};

const DEFAULT_MIN: f32 = 0.5;
const DEFAULT_MAX: f32 = 3.0;
const DEFAULT_STEP: f32 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    zoom: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl Viewport {
    /// Start at 100% with the given limits; the initial zoom is clamped into range.
    /// Swapped limits are put back in order. Non-finite or non-positive values
    /// fall back to 0.5..3.0 step 0.1.
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        let (min, max) = if usable(min) && usable(max) {
            (min.min(max), min.max(max))
        } else {
            (DEFAULT_MIN, DEFAULT_MAX)
        };
        let step = if usable(step) { step } else { DEFAULT_STEP };
        Self { zoom: 1.0f32.clamp(min, max), min, max, step }
    }

    /// Current scale; 1.0 shows one canvas pixel per window pixel.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// One step closer, up to the maximum.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.step);
    }

    /// One step further out, down to the minimum.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.step);
    }

    fn set_zoom(&mut self, z: f32) {
        // Round to 1/1000 so repeated 0.1 steps land on 1.0 again.
        self.zoom = ((z * 1000.0).round() / 1000.0).clamp(self.min, self.max);
    }

    /// Canvas pixel under a window pixel: `floor(screen / zoom)` per axis.
    /// The result may lie outside the canvas.
    pub fn screen_to_canvas(&self, sx: f32, sy: f32) -> Coordinate {
        Coordinate::new((sx / self.zoom).floor() as i32, (sy / self.zoom).floor() as i32)
    }

    /// Window pixel where a canvas pixel's top-left corner lands.
    pub fn canvas_to_screen(&self, at: Coordinate) -> (i32, i32) {
        (
            (at.x as f32 * self.zoom).floor() as i32,
            (at.y as f32 * self.zoom).floor() as i32,
        )
    }

    /// Nearest-neighbour render of `canvas` into `screen`, using the same
    /// mapping as [`Self::screen_to_canvas`] so a click hits the pixel shown.
    /// Each pixel is composited over `paper` by its alpha; window pixels past
    /// the canvas edge get `backdrop`.
    pub fn render(&self, canvas: &PixelBuffer, paper: Color, backdrop: Color, screen: &mut FrameBuffer) {
        let backdrop = backdrop.to_u32();

        // Column lookup is the same for every row.
        let cols: Vec<Option<usize>> = (0..screen.width)
            .map(|sx| {
                let x = (sx as f32 / self.zoom).floor() as usize;
                (x < canvas.width()).then_some(x)
            })
            .collect();

        for sy in 0..screen.height {
            let y = (sy as f32 / self.zoom).floor() as usize;
            let row = &mut screen.pixels[sy * screen.width..(sy + 1) * screen.width];
            if y >= canvas.height() {
                row.fill(backdrop);
                continue;
            }
            for (px, col) in row.iter_mut().zip(&cols) {
                *px = match col {
                    Some(x) => over(canvas.color_at((y * canvas.width() + x) * 4), paper).to_u32(),
                    None => backdrop,
                };
            }
        }
    }
}

/// Straight-alpha "source over" onto an opaque background.
#[inline]
pub fn over(src: Color, dst: Color) -> Color {
    let a = src.a as u32;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    Color::rgb(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn view() -> Viewport {
        Viewport::new(0.5, 3.0, 0.1)
    }

    #[test]
    fn zoom_is_clamped() {
        let mut v = view();
        for _ in 0..100 {
            v.zoom_in();
        }
        assert_eq!(v.zoom(), 3.0);
        for _ in 0..100 {
            v.zoom_out();
        }
        assert_eq!(v.zoom(), 0.5);
    }

    #[test]
    fn bad_limits_do_not_panic() {
        let swapped = Viewport::new(3.0, 0.5, 0.1);
        assert_eq!(swapped, view());

        let nan = Viewport::new(f32::NAN, 2.0, f32::NAN);
        assert_eq!(nan, view());

        let mut above = Viewport::new(1.5, 2.0, -1.0);
        assert_eq!(above.zoom(), 1.5);
        above.zoom_in();
        assert_eq!(above.zoom(), 1.6);
    }

    #[test]
    fn zoom_steps_return_to_one() {
        let mut v = view();
        for _ in 0..7 {
            v.zoom_in();
        }
        assert_eq!(v.zoom(), 1.7);
        for _ in 0..7 {
            v.zoom_out();
        }
        assert_eq!(v.zoom(), 1.0);
    }

    #[test]
    fn pointer_mapping_floors() {
        let mut v = view();
        assert_eq!(v.screen_to_canvas(10.9, 3.2), Coordinate::new(10, 3));
        for _ in 0..10 {
            v.zoom_in();
        }
        assert_eq!(v.zoom(), 2.0);
        assert_eq!(v.screen_to_canvas(5.0, 4.0), Coordinate::new(2, 2));
        assert_eq!(v.screen_to_canvas(-1.0, 0.0), Coordinate::new(-1, 0));
        assert_eq!(v.canvas_to_screen(Coordinate::new(2, 2)), (4, 4));
    }

    #[test]
    fn over_blends_by_alpha() {
        let paper = Color::rgb(200, 100, 0);
        assert_eq!(over(Color::rgba(0, 0, 0, 0), paper), paper);
        assert_eq!(over(Color::rgba(10, 20, 30, 255), paper), Color::rgb(10, 20, 30));
        assert_eq!(over(Color::rgba(0, 0, 255, 128), paper), Color::rgb(100, 50, 128));
    }

    #[test]
    fn render_scales_and_pads_with_backdrop() {
        let mut canvas = PixelBuffer::new(2, 1, Color::rgb(255, 0, 0));
        canvas.put(Coordinate::new(1, 0), Color::rgb(0, 0, 255));
        let mut v = view();
        for _ in 0..10 {
            v.zoom_in();
        }
        let mut screen = FrameBuffer::new(5, 3);
        v.render(&canvas, Color::rgb(255, 255, 255), Color::rgb(1, 1, 1), &mut screen);

        let (r, b, k) = (0x00FF_0000, 0x0000_00FF, 0x0001_0101);
        assert_eq!(
            screen.pixels,
            vec![
                r, r, b, b, k,
                r, r, b, b, k,
                k, k, k, k, k,
            ]
        );
    }
}
