use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;
use verbdeck::gui::{
    settings::SettingsData,
    VerbDeckApp,
};

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("verbdeck=info")),
        )
        .init();

    let settings = SettingsData::load();
    info!(url = %settings.api_url, "starting verbdeck");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Irregular Verbs")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "verbdeck",
        options,
        Box::new(move |cc| Ok(Box::new(VerbDeckApp::new(cc, settings)?))),
    )
}
