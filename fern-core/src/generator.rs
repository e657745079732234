//! Entry point: validate, plan, then draw.
//!
//! A run is first planned into a [`Sketch`] held in memory. Only when the
//! whole tree has been grown within budget is the canvas cleared and the
//! sketch replayed, so a failed run never leaves a half-drawn fern.

use rand::Rng;
use tracing::{debug, warn};

use crate::{
    canvas::{Canvas, DrawCommand},
    config::{Config, GenerationParameters},
    error::{FernError, Result},
    tendril::{self, ROOT_DIRECTION, Tendril},
    types::Point,
};

/// A fully grown fern, ready to be replayed onto a canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Sketch {
    pub start: Point,
    pub commands: Vec<DrawCommand>,
    pub segments: usize,
    pub triangles: usize,
}

impl Sketch {
    /// Clears `canvas` and issues every command in order.
    pub fn replay(&self, canvas: &mut impl Canvas) {
        canvas.clear();
        for cmd in &self.commands {
            cmd.apply(canvas);
        }
    }
}

/// Where the root tendril starts: centered, 90% of the way down.
pub fn start_point(width: f64, height: f64) -> Point {
    Point::new((width / 2.0) as i32, (height * 0.9) as i32)
}

fn validate_surface(width: f64, height: f64) -> Result<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(FernError::invalid(
            "canvas_width",
            width,
            "must be finite and not negative",
        ));
    }
    if !height.is_finite() || height < 0.0 {
        return Err(FernError::invalid(
            "canvas_height",
            height,
            "must be finite and not negative",
        ));
    }
    Ok(())
}

/// Grows a fern for a surface of the given size without drawing it.
///
/// ### Parameters
/// - `params` - Shape parameters; validated before anything is grown.
/// - `cfg` - Run tuning (draw budget, branch jitter).
/// - `width`, `height` - Surface dimensions used to place the root.
/// - `rng` - Random source for the whole run.
///
/// ### Returns
/// - `Ok(Sketch)` with every line and triangle in draw order.
/// - `Err(FernError::InvalidParameter)` for bad inputs.
/// - `Err(FernError::DrawBudgetExceeded)` if the tree outgrows `cfg.max_draw_calls`.
pub fn plan(
    params: &GenerationParameters,
    cfg: &Config,
    width: f64,
    height: f64,
    rng: &mut impl Rng,
) -> Result<Sketch> {
    // Reject bad input before anything is grown.
    params.validate()?;
    cfg.validate()?;
    validate_surface(width, height)?;

    let start = start_point(width, height);
    let root = Tendril::new(start, params.primary_size, params.turn_bias, ROOT_DIRECTION);

    let commands = tendril::grow(
        root,
        params.reduction,
        cfg.branch_jitter,
        cfg.max_draw_calls,
        rng,
    )
    .inspect_err(|e| warn!(error = %e, "fern generation aborted"))?;

    // Everything that is not a line is a terminal triangle.
    let segments = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line(_)))
        .count();
    let triangles = commands.len() - segments;

    debug!(
        x = start.x,
        y = start.y,
        segments,
        triangles,
        "fern planned"
    );

    Ok(Sketch {
        start,
        commands,
        segments,
        triangles,
    })
}

/// Draws a fresh fern onto `canvas`.
///
/// The canvas size is queried once. Validation and growth happen before
/// the first request reaches the canvas; on error nothing is drawn, not
/// even the clear.
pub fn generate(
    params: &GenerationParameters,
    cfg: &Config,
    canvas: &mut impl Canvas,
    rng: &mut impl Rng,
) -> Result<Sketch> {
    let (width, height) = canvas.size();
    let sketch = plan(params, cfg, width, height, rng)?;
    sketch.replay(canvas);
    Ok(sketch)
}
