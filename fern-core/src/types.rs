use glam::IVec2;

/// A pixel coordinate on the drawing surface.
///
/// The origin is the top-left corner and `y` grows downward, so a
/// direction of `π` (where `cos` is `-1`) points up the screen.
pub type Point = IVec2;

/// An opaque RGB color with one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Clamps a computed channel value into the byte range.
    ///
    /// `NaN` maps to `0`.
    pub fn channel(value: f64) -> u8 {
        if value.is_nan() {
            return 0;
        }
        value.clamp(0.0, 255.0) as u8
    }
}

/// One drawable line of a tendril.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
    pub color: Rgb,
    pub thickness: f64,
}

/// The filled shape that ends every tendril.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// Right base point.
    pub v1: Point,
    /// Left base point.
    pub v2: Point,
    /// Tip, extended forward along the tendril direction.
    pub v3: Point,
    pub fill: Rgb,
}

impl Triangle {
    pub fn vertices(&self) -> [Point; 3] {
        [self.v1, self.v2, self.v3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_clamps_to_byte_range() {
        assert_eq!(Rgb::channel(-12.0), 0);
        assert_eq!(Rgb::channel(0.0), 0);
        assert_eq!(Rgb::channel(127.9), 127);
        assert_eq!(Rgb::channel(255.0), 255);
        assert_eq!(Rgb::channel(900.0), 255);
        assert_eq!(Rgb::channel(f64::NAN), 0);
    }

    #[test]
    fn triangle_vertices_keep_order() {
        let tri = Triangle {
            v1: Point::new(1, 2),
            v2: Point::new(3, 4),
            v3: Point::new(5, 6),
            fill: Rgb::new(0, 0, 0),
        };
        assert_eq!(
            tri.vertices(),
            [Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)]
        );
    }
}
