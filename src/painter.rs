//! Tolerance-bounded region painting.
//!
//! Implements the flood fill behind the paint tool: a 4-connected fill in
//! which every candidate pixel is compared against the color found at the
//! seed before the fill started (fixed range), never against its immediate
//! neighbor.

use std::collections::VecDeque;

use image::{Rgb, RgbImage};

const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Paint the connected region around `(seed_x, seed_y)` with `color`.
///
/// A pixel joins the region when it is reachable from the seed through
/// 4-connected neighbors and each of its channels is within `tolerance` of
/// the corresponding channel of the seed's original color. The fill mutates
/// `buffer` in place and never touches pixels outside the raster.
///
/// Out-of-range seeds are ignored; callers that need to distinguish that
/// case bounds-check first (see `Session::paint_at`).
pub fn flood_fill(
    buffer: &mut RgbImage,
    seed_x: u32,
    seed_y: u32,
    color: Rgb<u8>,
    tolerance: u8,
) {
    let (width, height) = buffer.dimensions();
    if width == 0 || height == 0 || seed_x >= width || seed_y >= height {
        return;
    }

    let seed = *buffer.get_pixel(seed_x, seed_y);
    let mut visited = vec![false; width as usize * height as usize];
    let mut queue = VecDeque::new();

    visited[(seed_y * width + seed_x) as usize] = true;
    queue.push_back((seed_x, seed_y));
    let mut painted = 0usize;

    while let Some((x, y)) = queue.pop_front() {
        buffer.put_pixel(x, y, color);
        painted += 1;

        for (dx, dy) in NEIGHBORS {
            let nx = i64::from(x) + dx;
            let ny = i64::from(y) + dy;
            if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            let index = (ny * width + nx) as usize;
            if visited[index] {
                continue;
            }
            if within_tolerance(buffer.get_pixel(nx, ny), &seed, tolerance) {
                visited[index] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    log::debug!(
        "🎨 Flood fill at ({}, {}) painted {} pixels",
        seed_x,
        seed_y,
        painted
    );
}

/// True when every channel of `candidate` is within `tolerance` of `seed`.
fn within_tolerance(candidate: &Rgb<u8>, seed: &Rgb<u8>, tolerance: u8) -> bool {
    candidate
        .0
        .iter()
        .zip(seed.0.iter())
        .all(|(c, s)| c.abs_diff(*s) <= tolerance)
}
