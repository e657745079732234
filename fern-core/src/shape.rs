use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::types::{Point, Rgb, Triangle};

/// Fill of every terminal triangle.
pub const TIP_COLOR: Rgb = Rgb::new(100, 220, 0);

/// Unit vector for `direction` in screen space (`x = sin`, `y = cos`).
#[inline]
pub fn heading(direction: f64) -> DVec2 {
    DVec2::new(direction.sin(), direction.cos())
}

/// Moves `from` by `offset`, truncating the offset toward zero per axis.
///
/// Offsets too large for the pixel grid saturate at the `i32` bounds.
#[inline]
pub fn step(from: Point, offset: DVec2) -> Point {
    from.saturating_add(offset.as_ivec2())
}

/// Builds the triangle that ends a tendril.
///
/// The base is `2 * size` wide and perpendicular to `direction`; the tip
/// sits `2 * size` ahead of `apex`.
pub fn terminal_triangle(apex: Point, size: f64, direction: f64) -> Triangle {
    Triangle {
        v1: step(apex, heading(direction - FRAC_PI_2) * size),
        v2: step(apex, heading(direction + FRAC_PI_2) * size),
        v3: step(apex, heading(direction) * (2.0 * size)),
        fill: TIP_COLOR,
    }
}
