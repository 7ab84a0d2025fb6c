use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::i18n::{self, Language};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart selectors
// ---------------------------------------------------------------------------

/// Render the selector panel: one combo box per chart axis.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let text = i18n::text(state.language);
    ui.add_space(4.0);

    let (categories, years) = match &state.dataset {
        Some(ds) => (ds.categories.clone(), ds.years.clone()),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // ---- Category selector (line chart) ----
    ui.strong(text.category_label);
    let selected_label = state
        .language
        .display_category(&state.selected_category)
        .to_string();
    egui::ComboBox::from_id_salt("category_select")
        .selected_text(selected_label)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for cat in &categories {
                let label = state.language.display_category(cat).to_string();
                if ui
                    .selectable_label(state.selected_category == *cat, label)
                    .clicked()
                {
                    state.set_category(cat.clone());
                }
            }
        });

    ui.separator();

    // ---- Year selector (pie chart) ----
    ui.strong(text.year_label);
    egui::ComboBox::from_id_salt("year_select")
        .selected_text(state.selected_year.clone())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for year in &years {
                if ui
                    .selectable_label(state.selected_year == *year, year)
                    .clicked()
                {
                    state.set_year(year.clone());
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        // Language toggle: labels only, the selection is untouched.
        if ui
            .selectable_label(state.language == Language::En, "EN")
            .clicked()
        {
            state.language = Language::En;
        }
        if ui
            .selectable_label(state.language == Language::Fr, "FR")
            .clicked()
        {
            state.language = Language::Fr;
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records, {} categories, {} years",
                ds.len(),
                ds.categories.len(),
                ds.years.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open expenditure data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load a data file into the application state.  Failure is logged and shown
/// in the status line; the previous snapshot (if any) is kept.
pub fn load_into(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} records across {} categories and {} years from {}",
                dataset.len(),
                dataset.categories.len(),
                dataset.years.len(),
                path.display()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
