// Interactive state: the canvas, the active color, bucket mode and zoom.
// The window loop in main.rs feeds input events in and renders out.

use log::{debug, info, warn};

use crate::color::Color;
use crate::config::Config;
use crate::fill::fill;
use crate::types::{Coordinate, FrameBuffer, PixelBuffer};
use crate::view::Viewport;

/// Everything the window loop needs between frames.
pub struct Session {
    canvas: PixelBuffer,
    config: Config,
    view: Viewport,
    color: Color,
    bucket_armed: bool,
}

impl Session {
    /// Session over existing pixels (usually loaded line art), at 100% with black selected.
    pub fn new(canvas: PixelBuffer, config: Config) -> Self {
        let view = Viewport::new(config.zoom_min, config.zoom_max, config.zoom_step);
        Self { canvas, config, view, color: Color::BLACK, bucket_armed: false }
    }

    /// Blank page of the configured size, filled with the paper color.
    pub fn blank(config: Config) -> Self {
        let canvas = PixelBuffer::new(config.width, config.height, config.paper);
        Self::new(canvas, config)
    }

    /// The pixels being colored.
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    /// Settings the session was started with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Color the next bucket click paints with.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f32 {
        self.view.zoom()
    }

    /// Zoom state, for mapping the pointer onto the canvas.
    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    /// Whether the next left click fills.
    pub fn bucket_armed(&self) -> bool {
        self.bucket_armed
    }

    /// Pick palette slot `slot`. Picking a color leaves bucket mode.
    pub fn select_color(&mut self, slot: usize) {
        let Some(&c) = self.config.palette.get(slot) else {
            debug!("No palette color in slot {}", slot + 1);
            return;
        };
        self.color = c;
        self.bucket_armed = false;
        info!("Color {} selected", c);
    }

    /// Arm the bucket for one click.
    pub fn arm_bucket(&mut self) {
        self.bucket_armed = true;
        info!("Bucket armed with {}", self.color);
    }

    /// One zoom step in.
    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    /// One zoom step out.
    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    /// Left click at window position. Fills if the bucket is armed, then
    /// disarms it. Returns the canvas pixel that was filled from.
    pub fn click(&mut self, sx: f32, sy: f32) -> Option<Coordinate> {
        if !self.bucket_armed {
            return None;
        }
        self.bucket_armed = false;

        let seed = self.view.screen_to_canvas(sx, sy);
        if self.canvas.get(seed).is_none() {
            warn!("Click at ({}, {}) is outside the canvas", seed.x, seed.y);
            return None;
        }
        fill(&mut self.canvas, seed, self.color);
        debug!("Filled from ({}, {}) with {}", seed.x, seed.y, self.color);
        Some(seed)
    }

    /// Resize `screen` to the window and draw the canvas into it.
    pub fn render(&self, screen: &mut FrameBuffer, width: usize, height: usize) {
        if screen.width != width || screen.height != height {
            *screen = FrameBuffer::new(width, height);
        }
        self.view.render(&self.canvas, self.config.paper, self.config.backdrop, screen);
    }

    /// Window title: mode, active color, zoom and key help.
    pub fn title(&self) -> String {
        let mode = if self.bucket_armed { "BUCKET" } else { "VIEW" };
        format!(
            "Coloring Canvas | {} {} | {:.0}% | F: bucket  1-9: color  +/-: zoom  S: save",
            mode,
            self.color,
            self.view.zoom() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PAPER;
    use pretty_assertions::assert_eq;

    fn small() -> Session {
        let config = Config { width: 4, height: 3, ..Config::default() };
        Session::blank(config)
    }

    #[test]
    fn blank_page_uses_paper() {
        let s = small();
        assert_eq!(s.canvas(), &PixelBuffer::new(4, 3, PAPER));
        assert_eq!(s.color(), Color::BLACK);
        assert!(!s.bucket_armed());
    }

    #[test]
    fn click_without_bucket_does_nothing() {
        let mut s = small();
        assert_eq!(s.click(1.0, 1.0), None);
        assert_eq!(s.canvas(), &PixelBuffer::new(4, 3, PAPER));
    }

    #[test]
    fn bucket_is_one_shot() {
        let mut s = small();
        s.select_color(6);
        s.arm_bucket();
        assert_eq!(s.click(2.5, 1.5), Some(Coordinate::new(2, 1)));
        assert!(!s.bucket_armed());
        assert_eq!(s.canvas(), &PixelBuffer::new(4, 3, Color::rgb(163, 196, 188)));
    }

    #[test]
    fn click_maps_through_zoom() {
        let mut s = small();
        s.canvas.put(Coordinate::new(1, 0), Color::BLACK);
        for _ in 0..10 {
            s.zoom_in();
        }
        s.select_color(0);
        s.arm_bucket();
        // window (3,1) at 200% is canvas (1,0)
        assert_eq!(s.click(3.0, 1.0), Some(Coordinate::new(1, 0)));
        assert_eq!(s.canvas().get(Coordinate::new(1, 0)), Some(Color::rgb(0xF6, 0xC1, 0xCC)));
        assert_eq!(s.canvas().get(Coordinate::new(0, 0)), Some(PAPER));
    }

    #[test]
    fn click_outside_canvas_disarms_without_painting() {
        let mut s = small();
        s.arm_bucket();
        assert_eq!(s.click(40.0, 1.0), None);
        assert!(!s.bucket_armed());
        assert_eq!(s.canvas(), &PixelBuffer::new(4, 3, PAPER));
    }

    #[test]
    fn selecting_color_disarms_bucket() {
        let mut s = small();
        s.arm_bucket();
        s.select_color(1);
        assert!(!s.bucket_armed());
        s.select_color(42);
        assert_eq!(s.color(), Color::rgb(0xFF, 0xD6, 0xA5));
    }

    #[test]
    fn render_resizes_screen() {
        let s = small();
        let mut screen = FrameBuffer::new(1, 1);
        s.render(&mut screen, 6, 3);
        assert_eq!((screen.width, screen.height), (6, 3));
        assert_eq!(screen.pixels[0], PAPER.to_u32());
        assert_eq!(screen.pixels[5], s.config().backdrop.to_u32());
    }

    #[test]
    fn hand_built_config_with_bad_zoom_does_not_panic() {
        let config = Config { zoom_min: 3.0, zoom_max: f32::NAN, zoom_step: 0.0, ..Config::default() };
        let mut s = Session::new(PixelBuffer::new(2, 2, PAPER), config);
        assert_eq!(s.zoom(), 1.0);
        s.zoom_in();
        assert_eq!(s.zoom(), 1.1);
    }

    #[test]
    fn title_shows_mode_color_and_zoom() {
        let mut s = small();
        s.arm_bucket();
        s.zoom_out();
        assert!(s.title().contains("BUCKET #000000 | 90%"), "{}", s.title());
    }
}
