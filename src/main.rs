#![deny(missing_docs)]

//! Demo host showing a translation table with a reorderable heading.
use sortable_heading::config::{self, HeadingSettings};
use sortable_heading::logging;
use sortable_heading::translations::{TranslationsApp, TranslationsView, sample_catalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config_path = match config::config_path() {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::warn!("Column order will not be saved: {err}");
            None
        }
    };
    let settings = match config_path.as_deref().map(config::load_from) {
        Some(Ok(settings)) => settings,
        Some(Err(err)) => {
            tracing::warn!("Using default heading settings: {err}");
            HeadingSettings::default()
        }
        None => HeadingSettings::default(),
    };
    let (languages, entries) = sample_catalog();
    let view = TranslationsView::new(languages, entries, settings, config_path);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 320.0])
            .with_min_inner_size([480.0, 200.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Translations",
        native_options,
        Box::new(move |_cc| Ok(Box::new(TranslationsApp::new(view)))),
    )?;
    Ok(())
}
