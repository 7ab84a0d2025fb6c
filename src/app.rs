use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

/// Dataset loaded once at startup, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/detailed_food_spending_canada.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FoodDashApp {
    pub state: AppState,
}

impl Default for FoodDashApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl FoodDashApp {
    /// Start the app and attempt the bundled dataset once.  Failure leaves
    /// the dashboard unloaded with empty charts; File → Open still works.
    pub fn with_default_data() -> Self {
        let mut app = Self::default();
        panels::load_into(&mut app.state, Path::new(DEFAULT_DATA_PATH));
        app
    }
}

impl eframe::App for FoodDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar, language toggle, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: chart selectors ----
        egui::SidePanel::left("selector_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the two charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    charts::dashboard(ui, &self.state);
                });
        });
    }
}
