//! Core fractal fern generation library.
//!
//! Main components:
//! - [`generator`] — entry point: validates inputs, plans a run, replays it.
//! - [`tendril`] — the recursive branch growth, unrolled onto a stack.
//! - [`shape`] — the terminal triangle and small geometry helpers.
//! - [`canvas`] — the drawing-surface trait and a recording canvas.
//! - [`config`] — shape parameters and run tuning.
//! - [`error`] — error type shared by every fallible operation.
//! - [`types`] — points, colors, segments and triangles.

pub mod canvas;
pub mod config;
pub mod error;
pub mod generator;
pub mod shape;
pub mod tendril;
pub mod types;

pub use canvas::{Canvas, DrawCommand, Recorder};
pub use config::{Config, GenerationParameters};
pub use error::{FernError, Result};
pub use generator::{Sketch, generate, plan};
