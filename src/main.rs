use anyhow::Context as _;
use eframe::egui;
use std::path::PathBuf;
use tower_viewer::app::TowerApp;
use tower_viewer::item::ItemCollection;
use tower_viewer::logging;
use tower_viewer::settings::Settings;
use tower_viewer::telemetry::Telemetry;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    logging::init_tracing(args.iter().any(|a| a == "--debug"));

    let mut settings = Settings::load();

    // An explicit source must load; a remembered one may have moved.
    let collection = match args.iter().find(|a| !a.starts_with("--")) {
        Some(arg) => {
            let path = PathBuf::from(arg);
            let collection = ItemCollection::from_path(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            settings.last_source = Some(path);
            collection
        }
        None => match settings.last_source.clone() {
            Some(path) => ItemCollection::from_path(&path).unwrap_or_else(|e| {
                tracing::warn!("Could not reopen {}: {}", path.display(), e);
                ItemCollection::default()
            }),
            None => ItemCollection::default(),
        },
    };

    let telemetry = Telemetry::new(settings.telemetry_enabled);
    let (width, height) = settings.window_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tower Viewer",
        native_options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(TowerApp::new(settings, collection, telemetry)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
