// Window + overlay drawing for the interactive session.
// The window shows the zoomed canvas; a boxed marker shows the bucket target.

use crate::error::Error;
use crate::types::{Coordinate, FrameBuffer};
use crate::view::Viewport;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,
    // left button state last frame, for click edges
    left_was_down: bool,
}

impl Drawer {
    /// Open a resizable window of the given size.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let opts = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, left_was_down: false })
    }

    /// Push the frame to the screen. Also pumps window events.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current inner size; the screen buffer follows it.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// Pointer in window pixels, unclamped so it can fall past the canvas.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    /// True once per left-button press (down this frame, up the last).
    pub fn left_clicked(&mut self) -> bool {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let clicked = down && !self.left_was_down;
        self.left_was_down = down;
        clicked
    }

    fn pressed_once(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::No)
    }

    /// F arms the paint bucket.
    pub fn bucket_pressed(&self) -> bool {
        self.pressed_once(Key::F)
    }

    pub fn save_pressed(&self) -> bool {
        self.pressed_once(Key::S)
    }

    pub fn zoom_in_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Equal, KeyRepeat::Yes)
            || self.window.is_key_pressed(Key::NumPadPlus, KeyRepeat::Yes)
    }

    pub fn zoom_out_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Minus, KeyRepeat::Yes)
            || self.window.is_key_pressed(Key::NumPadMinus, KeyRepeat::Yes)
    }

    /// Palette slot 0..=8 for keys 1..=9, if one was pressed this frame.
    pub fn palette_key(&self) -> Option<usize> {
        const KEYS: [Key; 9] = [
            Key::Key1, Key::Key2, Key::Key3,
            Key::Key4, Key::Key5, Key::Key6,
            Key::Key7, Key::Key8, Key::Key9,
        ];
        KEYS.iter().position(|k| self.pressed_once(*k))
    }
}

/* ---------- Overlay drawing on the screen buffer ---------- */

/// Horizontal run of pixels on row `y` from `x0` to `x1` inclusive, clipped.
fn hspan(fb: &mut FrameBuffer, x0: i32, x1: i32, y: i32, color: u32) {
    if y < 0 || y as usize >= fb.height || fb.width == 0 {
        return;
    }
    let max = fb.width as i32 - 1;
    let (a, b) = (x0.min(x1).max(0), x0.max(x1).min(max));
    if a > b {
        return;
    }
    let row = y as usize * fb.width;
    fb.pixels[row + a as usize..=row + b as usize].fill(color);
}

/// Vertical run of pixels on column `x` from `y0` to `y1` inclusive, clipped.
fn vspan(fb: &mut FrameBuffer, x: i32, y0: i32, y1: i32, color: u32) {
    if x < 0 || x as usize >= fb.width || fb.height == 0 {
        return;
    }
    let max = fb.height as i32 - 1;
    for y in y0.min(y1).max(0)..=y0.max(y1).min(max) {
        fb.pixels[y as usize * fb.width + x as usize] = color;
    }
}

/// Outline the canvas cell the bucket will fill from, as it appears at the
/// current zoom, with arms of length `arm` reaching out from each side.
/// At 50% zoom a cell is smaller than a window pixel; the box then shrinks to one pixel.
pub fn draw_cell_marker(fb: &mut FrameBuffer, view: &Viewport, cell: Coordinate, arm: i32, color: u32) {
    let (left, top) = view.canvas_to_screen(cell);
    let (right, bottom) = view.canvas_to_screen(Coordinate::new(cell.x + 1, cell.y + 1));
    let (right, bottom) = ((right - 1).max(left), (bottom - 1).max(top));

    // box one pixel outside the cell so its own color stays visible
    let (l, t, r, b) = (left - 1, top - 1, right + 1, bottom + 1);
    hspan(fb, l, r, t, color);
    hspan(fb, l, r, b, color);
    vspan(fb, l, t, b, color);
    vspan(fb, r, t, b, color);

    let (cx, cy) = ((left + right) / 2, (top + bottom) / 2);
    hspan(fb, l - arm, l - 1, cy, color);
    hspan(fb, r + 1, r + arm, cy, color);
    vspan(fb, cx, t - arm, t - 1, color);
    vspan(fb, cx, b + 1, b + arm, color);
}
