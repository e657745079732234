//! The drawing surface a fern is rendered onto.
//!
//! The generator only ever talks to a [`Canvas`]: it asks for the surface
//! size once, clears it, and then issues an ordered stream of lines and
//! filled polygons. Nothing is read back.

use crate::types::{Point, Rgb, Segment, Triangle};

/// A fire-and-forget sink for draw primitives.
pub trait Canvas {
    /// Surface dimensions as `(width, height)` in pixels.
    fn size(&self) -> (f64, f64);

    /// Discards everything drawn so far.
    fn clear(&mut self);

    fn draw_line(&mut self, p1: Point, p2: Point, color: Rgb, thickness: f64);

    /// Fills the polygon described by `points` (at least three, in order).
    fn draw_filled_polygon(&mut self, points: &[Point], fill: Rgb);
}

/// One recorded draw request.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line(Segment),
    Polygon { points: Vec<Point>, fill: Rgb },
}

impl DrawCommand {
    pub fn from_triangle(tri: &Triangle) -> Self {
        Self::Polygon {
            points: tri.vertices().to_vec(),
            fill: tri.fill,
        }
    }

    /// Issues this command against `canvas`.
    pub fn apply(&self, canvas: &mut impl Canvas) {
        match self {
            DrawCommand::Clear => canvas.clear(),
            DrawCommand::Line(s) => canvas.draw_line(s.p1, s.p2, s.color, s.thickness),
            DrawCommand::Polygon { points, fill } => canvas.draw_filled_polygon(points, *fill),
        }
    }
}

/// A [`Canvas`] that keeps every request it receives.
///
/// `clear` is recorded as a command rather than wiping the log, so callers
/// can assert on the full sequence.
#[derive(Clone, Debug)]
pub struct Recorder {
    width: f64,
    height: f64,
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line(s) => Some(s),
            _ => None,
        })
    }

    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count()
    }
}

impl Canvas for Recorder {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_line(&mut self, p1: Point, p2: Point, color: Rgb, thickness: f64) {
        self.commands.push(DrawCommand::Line(Segment {
            p1,
            p2,
            color,
            thickness,
        }));
    }

    fn draw_filled_polygon(&mut self, points: &[Point], fill: Rgb) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_request_order() {
        let mut rec = Recorder::new(10.0, 20.0);
        assert_eq!(rec.size(), (10.0, 20.0));

        rec.clear();
        rec.draw_line(Point::new(0, 0), Point::new(1, 1), Rgb::new(1, 2, 3), 1.5);
        rec.draw_filled_polygon(
            &[Point::new(0, 0), Point::new(2, 0), Point::new(1, 2)],
            Rgb::new(4, 5, 6),
        );

        assert_eq!(rec.commands.len(), 3);
        assert_eq!(rec.commands[0], DrawCommand::Clear);
        assert_eq!(rec.lines().count(), 1);
        assert_eq!(rec.polygon_count(), 1);
    }

    #[test]
    fn apply_replays_onto_another_canvas() {
        let tri = Triangle {
            v1: Point::new(0, 0),
            v2: Point::new(4, 0),
            v3: Point::new(2, 3),
            fill: Rgb::new(100, 220, 0),
        };
        let cmds = [
            DrawCommand::Clear,
            DrawCommand::Line(Segment {
                p1: Point::new(5, 5),
                p2: Point::new(6, 9),
                color: Rgb::new(120, 200, 0),
                thickness: 2.0,
            }),
            DrawCommand::from_triangle(&tri),
        ];

        let mut rec = Recorder::new(1.0, 1.0);
        for c in &cmds {
            c.apply(&mut rec);
        }

        assert_eq!(rec.commands, cmds.to_vec());
    }
}
