use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::chart::{Figure, TraceKind};
use crate::data::views::TransformError;

// ---------------------------------------------------------------------------
// Figure plot
// ---------------------------------------------------------------------------

/// Render one cached figure, or the reason it is unavailable.
pub fn figure_plot(
    ui: &mut Ui,
    id: &str,
    figure: Option<&Result<Figure, TransformError>>,
    height: f32,
) {
    let figure = match figure {
        Some(Ok(fig)) => fig,
        Some(Err(e)) => {
            ui.label(RichText::new(format!("Chart unavailable: {e}")).color(Color32::RED));
            return;
        }
        None => {
            ui.label("Nothing to plot yet.");
            return;
        }
    };

    ui.strong(&figure.title);

    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for trace in &figure.traces {
                let points: PlotPoints = trace.points.iter().copied().collect();
                match trace.kind {
                    TraceKind::Scatter => plot_ui.points(
                        Points::new(points)
                            .radius(2.0)
                            .color(trace.color)
                            .name(&trace.name),
                    ),
                    TraceKind::Line => plot_ui.line(
                        Line::new(points)
                            .color(trace.color)
                            .width(1.5)
                            .name(&trace.name),
                    ),
                }
            }
        });

    ui.label(
        RichText::new(format!("{} points", figure.point_count()))
            .small()
            .weak(),
    );
}
