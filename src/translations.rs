//! Translation table that owns a [`SortableHeading`].
//!
//! The heading lists one draggable column per language between a fixed key
//! column and a fixed status column. Swap requests reorder the language
//! columns and the order is saved once the drag ends.

use std::collections::BTreeMap;
use std::path::PathBuf;

use egui::{RichText, Ui};
use tracing::{info, warn};

use crate::config::{self, HeadingSettings};
use crate::heading::{ColumnDescriptor, ColumnId, HeadingResponse, SortableHeading};
use crate::order::ColumnOrder;
use crate::style;

pub const KEY_COLUMN: &str = "key";
pub const STATE_COLUMN: &str = "state";
const KEY_COLUMN_WIDTH: f32 = 180.0;
const STATE_COLUMN_WIDTH: f32 = 56.0;
const ROW_HEIGHT: f32 = 22.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    pub fn column_id(&self) -> ColumnId {
        ColumnId::new(self.code.clone())
    }
}

/// One translation key with its text per language code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: String,
    pub texts: BTreeMap<String, String>,
}

impl TranslationEntry {
    fn is_complete(&self, languages: &[Language]) -> bool {
        languages
            .iter()
            .all(|language| self.texts.get(&language.code).is_some_and(|text| !text.is_empty()))
    }
}

/// Table state plus the persisted column order.
pub struct TranslationsView {
    languages: Vec<Language>,
    entries: Vec<TranslationEntry>,
    settings: HeadingSettings,
    config_path: Option<PathBuf>,
    order_dirty: bool,
}

impl TranslationsView {
    /// Build the view, aligning the saved order with `languages`.
    pub fn new(
        languages: Vec<Language>,
        entries: Vec<TranslationEntry>,
        mut settings: HeadingSettings,
        config_path: Option<PathBuf>,
    ) -> Self {
        let known: Vec<ColumnId> = languages.iter().map(Language::column_id).collect();
        settings.column_order.reconcile(&known);
        Self {
            languages,
            entries,
            settings,
            config_path,
            order_dirty: false,
        }
    }

    pub fn column_order(&self) -> &ColumnOrder {
        &self.settings.column_order
    }

    /// Heading columns in their current order.
    pub fn columns(&self) -> Vec<ColumnDescriptor> {
        let mut columns = Vec::with_capacity(self.languages.len() + 2);
        columns.push(ColumnDescriptor::fixed(
            KEY_COLUMN,
            KEY_COLUMN_WIDTH,
            RichText::new("Key").strong(),
        ));
        columns.extend(self.languages.iter().map(|language| {
            ColumnDescriptor::draggable(
                language.column_id(),
                0.0,
                RichText::new(&language.name).strong(),
            )
        }));
        columns.push(ColumnDescriptor::fixed(STATE_COLUMN, STATE_COLUMN_WIDTH, ""));
        self.settings.column_order.arrange(&columns)
    }

    /// Apply a swap requested by the heading.
    pub fn apply_swap(&mut self, a: usize, b: usize) {
        if self.settings.column_order.swap(a, b) {
            self.order_dirty = true;
        }
    }

    /// Save the column order if it changed since the last save.
    pub fn persist(&mut self) {
        if !self.order_dirty {
            return;
        }
        self.order_dirty = false;
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        match config::save_to_path(&self.settings, path) {
            Ok(()) => info!("Saved column order to {}", path.display()),
            Err(err) => warn!("Failed to save column order: {err}"),
        }
    }

    /// Text shown for `entry` under the column `id`.
    pub fn cell_text(&self, entry: &TranslationEntry, id: &ColumnId) -> String {
        match id.as_str() {
            KEY_COLUMN => entry.key.clone(),
            STATE_COLUMN if entry.is_complete(&self.languages) => "✔".to_string(),
            STATE_COLUMN => "…".to_string(),
            code => entry
                .texts
                .get(code)
                .filter(|text| !text.is_empty())
                .cloned()
                .unwrap_or_else(|| "—".to_string()),
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let columns = self.columns();
        let mut requested = Vec::new();
        let background = ui.painter().add(egui::Shape::Noop);
        let heading = SortableHeading::new("translations_heading", &columns)
            .swap_edge_tolerance(self.settings.swap_edge_tolerance)
            .show(ui, |a, b| requested.push((a, b)));
        if let Some(rect) = heading.rect() {
            ui.painter()
                .set(background, egui::Shape::rect_filled(rect, 0.0, style::HEADING_FILL));
        }
        for (a, b) in requested {
            self.apply_swap(a, b);
        }
        if heading.dragging.is_none() {
            self.persist();
        }
        self.show_rows(ui, &heading);
    }

    fn show_rows(&self, ui: &mut Ui, heading: &HeadingResponse) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entry in &self.entries {
                    let row = ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        for cell in &heading.cells {
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(cell.rect.width(), ROW_HEIGHT),
                                egui::Sense::hover(),
                            );
                            let text = self.cell_text(entry, &cell.id);
                            let color = match text.as_str() {
                                "—" | "…" => style::TEXT_MUTED,
                                "✔" => style::COMPLETE,
                                _ => style::TEXT,
                            };
                            ui.put(
                                rect.shrink2(egui::vec2(4.0, 0.0)),
                                egui::Label::new(RichText::new(text).color(color))
                                    .selectable(false)
                                    .truncate(),
                            );
                        }
                    });
                    let rect = row.response.rect;
                    ui.painter()
                        .hline(rect.x_range(), rect.bottom(), style::ROW_SEPARATOR);
                }
            });
    }
}

/// Languages and keys shown by the demo binary.
pub fn sample_catalog() -> (Vec<Language>, Vec<TranslationEntry>) {
    let languages = vec![
        Language::new("en", "English"),
        Language::new("de", "German"),
        Language::new("cs", "Czech"),
        Language::new("fr", "French"),
    ];
    let rows: [(&str, [&str; 4]); 5] = [
        ("app.title", ["Projects", "Projekte", "Projekty", "Projets"]),
        ("button.save", ["Save", "Speichern", "Uložit", "Enregistrer"]),
        ("button.cancel", ["Cancel", "Abbrechen", "Zrušit", ""]),
        ("translations.empty", ["No translations yet", "", "Zatím žádné překlady", ""]),
        ("user.logout", ["Log out", "Abmelden", "Odhlásit", "Se déconnecter"]),
    ];
    let entries = rows
        .iter()
        .map(|(key, texts)| TranslationEntry {
            key: key.to_string(),
            texts: languages
                .iter()
                .zip(texts)
                .map(|(language, text)| (language.code.clone(), text.to_string()))
                .collect(),
        })
        .collect();
    (languages, entries)
}

/// eframe host around [`TranslationsView`].
pub struct TranslationsApp {
    view: TranslationsView,
    visuals_set: bool,
}

impl TranslationsApp {
    pub fn new(view: TranslationsView) -> Self {
        Self {
            view,
            visuals_set: false,
        }
    }
}

impl eframe::App for TranslationsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_set {
            let mut visuals = egui::Visuals::dark();
            style::apply_visuals(&mut visuals);
            ctx.set_visuals(visuals);
            self.visuals_set = true;
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                RichText::new("Drag a language heading to reorder the columns.")
                    .color(style::TEXT_MUTED),
            );
            ui.add_space(6.0);
            self.view.show(ui);
        });
    }
}
