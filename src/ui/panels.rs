use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::config;
use crate::dispatch::Control;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the summary bar: source, row counts, year domain and last error.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(&state.source_label);
        ui.separator();

        let rows = state.table.rows();
        let missing = rows.iter().filter(|o| o.is_missing()).count();
        let provisional = rows.iter().filter(|o| !o.is_definitive()).count();
        ui.label(format!(
            "{} months ({missing} missing, {provisional} provisional)",
            rows.len()
        ));

        if let Some(bounds) = state.year_bounds {
            ui.separator();
            ui.label(format!("Years {bounds}"));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

/// Year-range and smoothing sliders of the historical chart.
pub fn historical_controls(ui: &mut Ui, state: &mut AppState) {
    let Some(bounds) = state.year_bounds else {
        ui.label("No observations loaded.");
        return;
    };
    let mut controls = state.controls;

    ui.push_id(Control::YearRange.id(), |ui: &mut Ui| {
        ui.label("Select Year Range: ");
        let (from, to) = &mut controls.year_range;
        ui.horizontal(|ui: &mut Ui| {
            ui.add(
                Slider::new(from, bounds.min..=bounds.max)
                    .step_by(config::YEAR_STEP as f64)
                    .text("from"),
            );
            ui.add(
                Slider::new(to, bounds.min..=bounds.max)
                    .step_by(config::YEAR_STEP as f64)
                    .text("to"),
            );
        });
    });

    ui.push_id(Control::SmoothPeriod.id(), |ui: &mut Ui| {
        ui.label("Smoothed Data Observation Period: ");
        ui.add(Slider::new(&mut controls.smooth_period, 0..=config::MAX_SMOOTHING).text("months"));
    });

    state.apply(controls);
}

/// Cycle-length slider of the variability chart.
pub fn cycle_controls(ui: &mut Ui, state: &mut AppState) {
    let mut controls = state.controls;
    let (min, max) = config::CYCLE_LENGTH_BOUNDS;

    ui.push_id(Control::CycleLength.id(), |ui: &mut Ui| {
        ui.label("Select Length of Cycle (in Years)");
        ui.add(Slider::new(&mut controls.cycle_length, min..=max).text("years"));
    });

    state.apply(controls);
}

// ---------------------------------------------------------------------------
// Sun image
// ---------------------------------------------------------------------------

pub fn sun_image(ui: &mut Ui, state: &AppState) {
    if state.sun_image.is_empty() {
        return;
    }
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("The Sun");
        ui.add(
            egui::Image::new(state.sun_image.as_str())
                .max_width(ui.available_width().min(512.0))
                .maintain_aspect_ratio(true),
        );
    });
}
