//! Tendril growth: the recursive heart of the fern.
//!
//! A tendril is a chain of shrinking segments. Every segment spawns two
//! child tendrils at its far end, and once the running size falls to
//! [`TENDRIL_MIN`] or below the tendril is capped with a terminal
//! triangle.
//!
//! The recursion is unrolled onto an explicit stack of [`Tendril`] frames.
//! Each call to [`Tendril::advance`] performs one iteration of the growth
//! loop and reports a [`Growth`] step; [`grow`] pushes the continuation of
//! the parent below its two children so that draw order matches a plain
//! depth-first recursion: segment, all of child A, all of child B, next
//! segment of the parent.

use std::f64::consts::PI;

use rand::Rng;

use crate::{
    canvas::DrawCommand,
    error::{FernError, Result},
    shape::{heading, step, terminal_triangle},
    types::{Point, Rgb, Segment, Triangle},
};

/// Size at or below which a tendril stops growing and draws its triangle.
pub const TENDRIL_MIN: f64 = 3.0;

/// Children are this many times smaller than the segment that spawns them.
pub const CHILD_DECAY: f64 = 2.5;

/// Angle in radians between a segment and each of its children.
pub const BRANCH_ANGLE: f64 = 1.3;

/// Half-width of the per-segment direction jitter.
pub const TURN_JITTER: f64 = 1.0 / 16.0;

/// Length scale of the first segment in a tendril.
pub const STEM_FACTOR: f64 = 0.5;

/// The root tendril heads up the screen.
pub const ROOT_DIRECTION: f64 = PI;

/// Segment color for a given size: longer segments are redder and darker.
pub fn segment_color(size: f64) -> Rgb {
    Rgb::new(
        Rgb::channel(100.0 + size / 2.0),
        Rgb::channel(220.0 - size / 3.0),
        0,
    )
}

pub fn segment_thickness(size: f64) -> f64 {
    1.0 + size / 40.0
}

/// `+1`, `-1` or `0`; unlike [`f64::signum`], zero maps to zero.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// The running state of one tendril.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tendril {
    pub point: Point,
    pub size: f64,
    pub turn_bias: f64,
    pub direction: f64,
    first: bool,
}

/// What one iteration of a tendril produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Growth {
    /// A segment was emitted; both children still have to be grown.
    Segment {
        segment: Segment,
        children: [Tendril; 2],
    },
    /// The tendril is finished.
    Terminal(Triangle),
}

impl Tendril {
    pub fn new(origin: Point, size: f64, turn_bias: f64, direction: f64) -> Self {
        Self {
            point: origin,
            size,
            turn_bias,
            direction,
            first: true,
        }
    }

    pub fn is_growing(&self) -> bool {
        self.size > TENDRIL_MIN
    }

    /// Runs one iteration of the growth loop.
    ///
    /// While the tendril is above [`TENDRIL_MIN`] this bends the direction,
    /// lays down one segment, and shrinks the size by `reduction`. Once it
    /// is not, the terminal triangle is returned and the frame is spent.
    ///
    /// ### Parameters
    /// - `reduction` - Per-iteration shrink factor of the current run.
    /// - `branch_jitter` - Half-width of the random offset applied to the
    ///   direction the children inherit; `0.0` draws nothing from `rng`.
    /// - `rng` - The run's random source.
    pub fn advance(&mut self, reduction: f64, branch_jitter: f64, rng: &mut impl Rng) -> Growth {
        if !self.is_growing() {
            return Growth::Terminal(terminal_triangle(self.point, self.size, self.direction));
        }

        let size = self.size;
        // Turn: sharper on short segments, plus a little jitter.
        self.direction -= self.turn_bias / size + rng.random_range(-TURN_JITTER..TURN_JITTER);

        // First segment of a tendril is a half-length stem.
        let stem = if self.first { STEM_FACTOR } else { 1.0 };
        self.first = false;
        let length = size * stem * rng.random_range(0.8..=1.2);

        let p1 = self.point;
        let p2 = step(p1, heading(self.direction) * length);

        // Children may wander off the segment's own heading.
        let mut child_direction = self.direction;
        if branch_jitter > 0.0 {
            child_direction += rng.random_range(-branch_jitter..=branch_jitter);
        }

        // Emit the segment and its two children from the end point.
        let segment = Segment {
            p1,
            p2,
            color: segment_color(size),
            thickness: segment_thickness(size),
        };
        let children = branch(p2, size, self.turn_bias, child_direction);

        // Shrink for the next iteration.
        self.point = p2;
        self.size *= reduction;

        Growth::Segment { segment, children }
    }
}

/// The two tendrils a segment spawns at its end point `at`.
///
/// The first turns toward the bias and keeps it; the second turns away
/// and carries the mirrored bias.
pub fn branch(at: Point, size: f64, turn_bias: f64, direction: f64) -> [Tendril; 2] {
    let child_size = size / CHILD_DECAY;
    let turn = sign(turn_bias) * BRANCH_ANGLE;
    [
        Tendril::new(at, child_size, turn_bias, direction + turn),
        Tendril::new(at, child_size, -turn_bias, direction - turn),
    ]
}

/// Grows `root` and everything it spawns into an ordered command list.
///
/// ### Parameters
/// - `root` - The first tendril.
/// - `reduction` - Shrink factor, fixed for the whole run; must be in `(0, 1)`.
/// - `branch_jitter` - See [`Tendril::advance`].
/// - `max_draw_calls` - Abort once more commands than this would be needed.
/// - `rng` - Random source, borrowed for the whole run.
///
/// ### Returns
/// Lines and triangles in draw order, or
/// [`FernError::DrawBudgetExceeded`] if the tree is too large.
pub fn grow(
    root: Tendril,
    reduction: f64,
    branch_jitter: f64,
    max_draw_calls: usize,
    rng: &mut impl Rng,
) -> Result<Vec<DrawCommand>> {
    let mut commands = Vec::new();
    let mut stack = vec![root];

    while let Some(mut tendril) = stack.pop() {
        if commands.len() >= max_draw_calls {
            return Err(FernError::DrawBudgetExceeded {
                limit: max_draw_calls,
            });
        }

        match tendril.advance(reduction, branch_jitter, rng) {
            Growth::Segment {
                segment,
                children: [a, b],
            } => {
                commands.push(DrawCommand::Line(segment));
                stack.push(tendril);
                stack.push(b);
                stack.push(a);
            }
            Growth::Terminal(tri) => commands.push(DrawCommand::from_triangle(&tri)),
        }
    }

    Ok(commands)
}
