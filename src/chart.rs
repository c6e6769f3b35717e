use eframe::egui::Color32;

use crate::color::{self, BASE_HUE};
use crate::data::model::{Column, Schema};
use crate::data::views::{CycleView, HistoricalView};

// ---------------------------------------------------------------------------
// Figure – a renderable chart built from a view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Scatter,
    Line,
}

/// One series of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub kind: TraceKind,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// A complete chart: rebuilt from scratch on every control change.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<Trace>,
}

/// Axis label of the cycle offset column.
pub const CYCLE_OFFSET_LABEL: &str = "cycle_mod";
/// Name of the rolling mean column.
pub const ROLLING_MEAN_LABEL: &str = "rolling_mm_ss_num";

impl Figure {
    /// Raw monthly values as points plus the rolling mean as a line, both
    /// against the observation year.
    pub fn historical(view: &HistoricalView, schema: &Schema) -> Self {
        let raw = view
            .rows
            .iter()
            .map(|o| [f64::from(o.year), o.mean_sunspots])
            .collect();
        let smoothed = view
            .iter()
            .map(|(o, rolling)| [f64::from(o.year), rolling])
            .collect();

        let line_color = color::generate_palette(1, BASE_HUE)[0];

        Figure {
            title: "Monthly Mean Sunspot Number".to_string(),
            x_label: schema.name(Column::Year).to_string(),
            y_label: schema.name(Column::MeanSunspots).to_string(),
            traces: vec![
                Trace {
                    name: schema.name(Column::MeanSunspots).to_string(),
                    kind: TraceKind::Scatter,
                    color: color::raw_points(),
                    points: raw,
                },
                Trace {
                    name: format!("{ROLLING_MEAN_LABEL} (window {})", view.window.max(1)),
                    kind: TraceKind::Line,
                    color: line_color,
                    points: smoothed,
                },
            ],
        }
    }

    /// Every observation against its offset inside the cycle.
    pub fn cycle(view: &CycleView, schema: &Schema) -> Self {
        let points = view
            .iter()
            .map(|(o, offset)| [offset, o.mean_sunspots])
            .collect();

        Figure {
            title: "Variability of Sunspot Cycle".to_string(),
            x_label: CYCLE_OFFSET_LABEL.to_string(),
            y_label: schema.name(Column::MeanSunspots).to_string(),
            traces: vec![Trace {
                name: format!("{}-year cycle", view.cycle_length),
                kind: TraceKind::Scatter,
                color: color::generate_palette(1, BASE_HUE)[0],
                points,
            }],
        }
    }

    pub fn point_count(&self) -> usize {
        self.traces.iter().map(|t| t.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Observation, ObservationTable};
    use crate::data::views::{cycle_view, historical_view};

    fn table() -> ObservationTable {
        let row = |year, month, frac_date, mean| Observation {
            year,
            month,
            frac_date,
            mean_sunspots: mean,
            std_dev: -1.0,
            observations: -1,
            indicator: 1,
        };
        ObservationTable::new(
            Schema::default(),
            vec![
                row(1749, 1, 1749.042, 96.7),
                row(1749, 2, 1749.123, 104.3),
                row(1750, 1, 1750.042, 10.0),
            ],
        )
    }

    #[test]
    fn historical_figure_has_points_and_line() {
        let table = table();
        let view = historical_view(&table, 1749, 1749, 2);
        let fig = Figure::historical(&view, table.schema());

        assert_eq!(fig.x_label, "Year");
        assert_eq!(fig.y_label, "MM Sunspot Number");
        assert_eq!(fig.traces.len(), 2);
        assert_eq!(fig.traces[0].kind, TraceKind::Scatter);
        assert_eq!(fig.traces[0].points, vec![[1749.0, 96.7], [1749.0, 104.3]]);
        assert_eq!(fig.traces[1].kind, TraceKind::Line);
        assert!((fig.traces[1].points[1][1] - 100.5).abs() < 1e-12);
        assert_eq!(fig.point_count(), 4);
    }

    #[test]
    fn cycle_figure_uses_offsets_on_x() {
        let table = table();
        let view = cycle_view(&table, 11).unwrap();
        let fig = Figure::cycle(&view, table.schema());

        assert_eq!(fig.x_label, CYCLE_OFFSET_LABEL);
        assert_eq!(fig.traces.len(), 1);
        let points = &fig.traces[0].points;
        assert_eq!(points.len(), 3);
        assert!((points[0][0] - 0.042).abs() < 1e-9);
        assert_eq!(points[2][1], 10.0);
    }

    #[test]
    fn empty_view_gives_empty_traces() {
        let table = table();
        let view = historical_view(&table, 1900, 2000, 5);
        let fig = Figure::historical(&view, table.schema());
        assert_eq!(fig.point_count(), 0);
    }
}
