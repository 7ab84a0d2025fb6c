use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, CornerRadius, Sense, Shape, Stroke, Ui, vec2};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::i18n;
use crate::state::AppState;

/// Stroke colour of the spending line (DarkSlateBlue).
const LINE_COLOR: Color32 = Color32::from_rgb(72, 61, 139);

/// Arc resolution: segments used for a full circle.
const PIE_SEGMENTS: f32 = 72.0;

// ---------------------------------------------------------------------------
// Dashboard (central panel)
// ---------------------------------------------------------------------------

/// Render the dashboard body: description, line chart, pie chart.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a data file to view the dashboard  (File → Open…)");
        });
        return;
    }

    let text = i18n::text(state.language);

    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(8.0);
        ui.label(text.site_description);
        ui.add_space(12.0);

        ui.heading(text.line_chart_title);
        ui.add_space(4.0);
    });
    line_chart(ui, state);

    ui.add_space(16.0);
    ui.separator();

    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(8.0);
        ui.heading(text.pie_chart_title);
        ui.add_space(4.0);
    });
    pie_chart(ui, state);
}

// ---------------------------------------------------------------------------
// Line chart – selected category across all years
// ---------------------------------------------------------------------------

/// One point per dataset year; years plot at integer indices and the axis
/// formatter maps them back to their labels.
fn line_chart(ui: &mut Ui, state: &AppState) {
    let years: Vec<String> = state.line_series.iter().map(|p| p.year.clone()).collect();

    let points: PlotPoints = state
        .line_series
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.value])
        .collect();

    let name = state
        .language
        .display_category(&state.selected_category)
        .to_string();

    Plot::new("spending_line")
        .legend(Legend::default())
        .height(340.0)
        .y_axis_label("CAD")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                return String::new();
            }
            years.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name(&name).color(LINE_COLOR).width(2.0));
        });
}

// ---------------------------------------------------------------------------
// Pie chart – category breakdown of the selected year
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, state: &AppState) {
    let text = i18n::text(state.language);

    let total: f64 = state.pie_series.iter().map(|s| s.value).sum();
    if state.pie_series.is_empty() || total <= 0.0 {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(24.0);
            ui.label(format!("{} {}", text.no_data, state.selected_year));
            ui.add_space(24.0);
        });
        return;
    }

    let side = ui.available_width().min(360.0);
    let (rect, _response) = ui
        .vertical_centered(|ui: &mut Ui| ui.allocate_exact_size(vec2(side, side), Sense::hover()))
        .inner;
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = side * 0.45;

    // Slices start at 12 o'clock and run clockwise, drawn as triangle fans
    // so reflex angles render correctly.
    let mut start_angle = -FRAC_PI_2;
    for slice in &state.pie_series {
        let color = state.color_map.color_for(&slice.category);
        let sweep = ((slice.value / total) as f32) * TAU;
        let steps = ((sweep / TAU) * PIE_SEGMENTS).ceil().max(1.0) as usize;

        for k in 0..steps {
            let a0 = start_angle + sweep * k as f32 / steps as f32;
            let a1 = start_angle + sweep * (k + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![
                    center,
                    center + radius * vec2(a0.cos(), a0.sin()),
                    center + radius * vec2(a1.cos(), a1.sin()),
                ],
                color,
                Stroke::NONE,
            ));
        }

        // Boundary line between adjacent slices.
        painter.line_segment(
            [
                center,
                center + radius * vec2(start_angle.cos(), start_angle.sin()),
            ],
            Stroke::new(1.0, Color32::WHITE),
        );
        start_angle += sweep;
    }

    ui.add_space(12.0);

    // Legend: one swatch per slice, labels translated.
    for slice in &state.pie_series {
        let color = state.color_map.color_for(&slice.category);
        let label = state.language.display_category(&slice.category);
        let pct = slice.value / total * 100.0;
        ui.horizontal(|ui: &mut Ui| {
            let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter()
                .rect_filled(swatch, CornerRadius::same(2), color);
            ui.label(format!("{label}: {:.0} CAD ({pct:.1}%)", slice.value));
        });
    }
}
