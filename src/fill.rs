// Paint bucket: repaint the seed's 4-connected region of one RGB color.
//
// The frontier is an explicit Vec used as a stack, so huge regions (the
// usual case for a coloring page) never touch the call stack.

use crate::color::{colors_match, Color};
use crate::types::{Coordinate, PixelBuffer};

/// Stateless flood fill over a [`PixelBuffer`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FloodFillEngine;

impl FloodFillEngine {
    /// The engine holds no state; one value can serve any number of fills.
    pub fn new() -> Self {
        Self
    }

    /// Repaint the region around `seed`. See [`fill`].
    pub fn fill(&self, buffer: &mut PixelBuffer, seed: Coordinate, target: Color) {
        fill(buffer, seed, target)
    }
}

/// Repaint every pixel reachable from `seed` through up/down/left/right
/// steps over pixels whose RGB equals the seed's RGB. Painted pixels get
/// `target`'s RGB and alpha 255.
///
/// Out-of-range seeds, zero-area buffers and a target that already matches
/// the seed are no-ops.
pub fn fill(buffer: &mut PixelBuffer, seed: Coordinate, target: Color) {
    let Some(original) = buffer.get(seed) else {
        return;
    };
    if colors_match(original, target) {
        return;
    }
    let paint = Color::rgb(target.r, target.g, target.b);

    let mut stack = vec![seed];
    while let Some(at) = stack.pop() {
        let Some(i) = buffer.offset(at) else {
            continue;
        };
        if !colors_match(buffer.color_at(i), original) {
            continue;
        }

        // Repaint before pushing: a revisit now fails the match test.
        buffer.set_color_at(i, paint);
        stack.extend(at.neighbors());
    }
}
