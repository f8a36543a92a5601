//! FitTrack - Fitness Tracking Application
//!
//! Main entry point for the application.

use std::sync::Arc;

use anyhow::Context;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fittrack::ml::{spawn_warm_up, CaloriePredictor};
use fittrack::storage::config;
use fittrack::storage::Database;
use fittrack::tracker::Tracker;

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().context("failed to load configuration")?;

    let db_path = config.database_path();
    let db = Database::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    let predictor = Arc::new(CaloriePredictor::from_settings(&config.model));
    if let Err(e) = spawn_warm_up(Arc::clone(&predictor)) {
        tracing::warn!("Could not start model warm-up thread: {}", e);
    }

    let tracker = Tracker::new(db, predictor);
    let admin = config.admin.clone().with_env_override();
    tracker
        .bootstrap_admin(&admin)
        .context("failed to create administrator account")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("FitTrack"),
        ..Default::default()
    };

    eframe::run_native(
        "FitTrack",
        options,
        Box::new(move |cc| Ok(Box::new(app::FitTrackApp::new(cc, config, tracker)))),
    )
    .map_err(|e| anyhow::anyhow!("UI failed: {}", e))
}
