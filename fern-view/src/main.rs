//! Application entry point for the fractal fern viewer.
//!
//! This binary parses the command line, sets up logging and eframe/egui,
//! and delegates all rendering to [`Viewer`] from the `viewer` module.

mod settings;
mod viewer;

use clap::Parser;
use settings::Cli;
use tracing_subscriber::EnvFilter;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if the settings cannot be loaded, or eframe fails to create
///   the native window or event loop.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fern_view=info,fern_core=warn")),
        )
        .init();

    let settings = Cli::parse().into_settings()?;

    tracing::info!(
        size = settings.params.primary_size,
        reduction = settings.params.reduction,
        turn_bias = settings.params.turn_bias,
        seed = settings.seed,
        "starting fern viewer"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.width, settings.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Fractal Fern",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(settings)))),
    )?;
    Ok(())
}
