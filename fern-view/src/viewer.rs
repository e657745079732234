//! Fern viewer built with eframe/egui.
//!
//! [`Viewer`] owns one set of fern settings and a planned [`Sketch`]. Every
//! frame it replays the sketch onto a [`PainterCanvas`], which adapts the
//! egui painter to the [`Canvas`] trait. The fern is planned again only
//! when the drawing area changes size, since the root position depends on
//! it; the seed is fixed, so the result is stable between frames.

use eframe::App;
use fern_core::{
    Canvas, FernError, Sketch,
    generator::plan,
    types::{Point, Rgb},
};
use rand::{SeedableRng, rngs::StdRng};

use crate::settings::Settings;

/// Color under the horizon; fills the whole surface first.
pub const GROUND_COLOR: Rgb = Rgb::new(10, 100, 35);

/// Sky color, painted over the top part of the surface.
pub const SKY_COLOR: Rgb = Rgb::new(185, 210, 255);

/// Fraction of the surface height covered by sky.
pub const HORIZON: f32 = 0.85;

pub fn to_color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Maps a canvas-local pixel to screen space inside a panel at `origin`.
pub fn to_screen(origin: egui::Pos2, p: Point) -> egui::Pos2 {
    egui::pos2(origin.x + p.x as f32, origin.y + p.y as f32)
}

/// Paints ground and sky over `rect`.
pub fn paint_backdrop(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, to_color32(GROUND_COLOR));
    let sky = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), rect.height() * HORIZON));
    painter.rect_filled(sky, 0.0, to_color32(SKY_COLOR));
}

/// A [`Canvas`] backed by an egui painter clipped to `rect`.
///
/// Clearing repaints the backdrop, since egui redraws every frame from
/// scratch anyway.
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }
}

impl Canvas for PainterCanvas<'_> {
    fn size(&self) -> (f64, f64) {
        (self.rect.width() as f64, self.rect.height() as f64)
    }

    fn clear(&mut self) {
        paint_backdrop(self.painter, self.rect);
    }

    fn draw_line(&mut self, p1: Point, p2: Point, color: Rgb, thickness: f64) {
        let origin = self.rect.min;
        self.painter.line_segment(
            [to_screen(origin, p1), to_screen(origin, p2)],
            egui::Stroke::new(thickness as f32, to_color32(color)),
        );
    }

    fn draw_filled_polygon(&mut self, points: &[Point], fill: Rgb) {
        let origin = self.rect.min;
        let pts = points.iter().map(|&p| to_screen(origin, p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            pts,
            to_color32(fill),
            egui::Stroke::NONE,
        ));
    }
}

/// Main application state for the viewer.
///
/// ### Fields
/// - `settings` - Shape parameters, run config, seed.
/// - `planned_for` - Surface size the current plan was made for.
/// - `sketch` - The last planned fern, or why planning failed.
pub struct Viewer {
    settings: Settings,
    planned_for: Option<egui::Vec2>,
    sketch: Option<Result<Sketch, FernError>>,
}

impl Viewer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            planned_for: None,
            sketch: None,
        }
    }

    /// Plans the fern for a surface of `size` unless that is already done.
    ///
    /// ### Returns
    /// `true` if a new plan was made.
    fn ensure_planned(&mut self, size: egui::Vec2) -> bool {
        if self.planned_for == Some(size) {
            return false;
        }

        let mut rng = StdRng::seed_from_u64(self.settings.seed);
        let result = plan(
            &self.settings.params,
            &self.settings.cfg,
            size.x as f64,
            size.y as f64,
            &mut rng,
        );
        match &result {
            Ok(s) => tracing::info!(
                width = size.x,
                height = size.y,
                segments = s.segments,
                triangles = s.triangles,
                "fern planned"
            ),
            Err(e) => tracing::error!(error = %e, "cannot draw fern"),
        }

        self.sketch = Some(result);
        self.planned_for = Some(size);
        true
    }

    /// Builds the bottom status bar (seed, parameters, counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("seed = {}", self.settings.seed));
                ui.separator();
                let p = &self.settings.params;
                ui.label(format!(
                    "size = {:.1}, reduction = {:.2}, turn bias = {:.2}",
                    p.primary_size, p.reduction, p.turn_bias
                ));
                ui.separator();
                match &self.sketch {
                    Some(Ok(s)) => {
                        ui.label(format!("segments = {}", s.segments));
                        ui.label(format!("triangles = {}", s.triangles));
                    }
                    Some(Err(e)) => {
                        ui.colored_label(egui::Color32::RED, e.to_string());
                    }
                    None => {}
                }
            });
        });
    }

    /// Builds the central panel where the fern is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                self.ensure_planned(rect.size());

                let painter = ui.painter_at(rect);
                let mut canvas = PainterCanvas::new(&painter, rect);
                match &self.sketch {
                    Some(Ok(sketch)) => sketch.replay(&mut canvas),
                    Some(Err(_)) | None => canvas.clear(),
                }
            });
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fern_core::{Config, GenerationParameters};

    fn settings(params: GenerationParameters) -> Settings {
        Settings {
            params,
            cfg: Config::default(),
            seed: 99,
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn to_screen_offsets_by_panel_origin() {
        let origin = egui::pos2(10.0, 20.0);
        assert_eq!(to_screen(origin, Point::new(0, 0)), origin);
        assert_eq!(to_screen(origin, Point::new(5, -3)), egui::pos2(15.0, 17.0));
    }

    #[test]
    fn to_color32_keeps_channels() {
        let c = to_color32(Rgb::new(100, 220, 0));
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (100, 220, 0, 255));
    }

    #[test]
    fn plans_once_per_surface_size() {
        let mut viewer = Viewer::new(settings(GenerationParameters::new(40.0, 0.8, 0.3)));

        assert!(viewer.ensure_planned(egui::vec2(800.0, 600.0)));
        assert!(!viewer.ensure_planned(egui::vec2(800.0, 600.0)));

        let first = match &viewer.sketch {
            Some(Ok(s)) => s.clone(),
            other => panic!("expected a sketch, got {other:?}"),
        };
        assert_eq!(first.start, Point::new(400, 540));

        assert!(viewer.ensure_planned(egui::vec2(1000.0, 500.0)));
        let Some(Ok(second)) = &viewer.sketch else {
            panic!("expected a sketch after resize");
        };
        assert_eq!(second.start, Point::new(500, 450));
        assert_eq!(second.segments, first.segments);
    }

    #[test]
    fn same_seed_replans_identically() {
        let mut a = Viewer::new(settings(GenerationParameters::new(40.0, 0.8, 0.3)));
        let mut b = Viewer::new(settings(GenerationParameters::new(40.0, 0.8, 0.3)));
        a.ensure_planned(egui::vec2(640.0, 480.0));
        b.ensure_planned(egui::vec2(640.0, 480.0));
        assert_eq!(a.sketch, b.sketch);
    }

    #[test]
    fn invalid_parameters_are_kept_as_error() {
        let mut viewer = Viewer::new(settings(GenerationParameters::new(40.0, 1.2, 0.3)));
        viewer.ensure_planned(egui::vec2(800.0, 600.0));
        assert!(matches!(
            viewer.sketch,
            Some(Err(FernError::InvalidParameter {
                name: "reduction",
                ..
            }))
        ));
    }
}
