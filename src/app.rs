use eframe::egui::{self, ScrollArea, Ui};

use crate::dispatch::Output;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SunspotApp {
    pub state: AppState,
}

impl SunspotApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SunspotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: both charts, their controls and the sun ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    let chart_height = (ui.available_height() * 0.6).max(300.0);

                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.heading("Historical Sunspot Activity");
                    });
                    plot::figure_plot(
                        ui,
                        Output::HistoricalGraph.id(),
                        self.state.figure(Output::HistoricalGraph),
                        chart_height,
                    );
                    panels::historical_controls(ui, &mut self.state);

                    ui.add_space(25.0);
                    ui.separator();
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.heading("Variability of Sunspot Cycle");
                    });
                    panels::cycle_controls(ui, &mut self.state);
                    plot::figure_plot(
                        ui,
                        Output::CycleGraph.id(),
                        self.state.figure(Output::CycleGraph),
                        chart_height,
                    );

                    ui.add_space(25.0);
                    panels::sun_image(ui, &self.state);
                });
        });
    }
}
