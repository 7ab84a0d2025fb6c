mod app;
mod color;
mod data;
mod i18n;
mod state;
mod ui;

use app::FoodDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Food Dash – Household Food Expenditure",
        options,
        Box::new(|_cc| Ok(Box::new(FoodDashApp::with_default_data()))),
    )
}
