//! Control → output routing.
//!
//! Each chart is a pure function of the shared table and a few control
//! values. The route table below says which controls feed which chart, so
//! the UI only reports *what* changed and never calls transforms directly.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::chart::Figure;
use crate::config;
use crate::data::model::ObservationTable;
use crate::data::views::{TransformError, cycle_view, historical_view};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
    YearRange,
    SmoothPeriod,
    CycleLength,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::YearRange, Control::SmoothPeriod, Control::CycleLength];

    pub fn id(self) -> &'static str {
        match self {
            Control::YearRange => "yr_range",
            Control::SmoothPeriod => "smooth_period",
            Control::CycleLength => "cycle_len",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown control id '{0}'")]
pub struct UnknownControl(pub String);

impl FromStr for Control {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Control::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| UnknownControl(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Output {
    HistoricalGraph,
    CycleGraph,
}

impl Output {
    pub const ALL: [Output; 2] = [Output::HistoricalGraph, Output::CycleGraph];

    pub fn id(self) -> &'static str {
        match self {
            Output::HistoricalGraph => "hist_ss_graph",
            Output::CycleGraph => "ss_var_graph",
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Current value of every control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Inclusive `(from, to)` years.
    pub year_range: (i32, i32),
    pub smooth_period: usize,
    pub cycle_length: u32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            year_range: config::DEFAULT_YEAR_RANGE,
            smooth_period: config::DEFAULT_SMOOTHING,
            cycle_length: config::DEFAULT_CYCLE_LENGTH,
        }
    }
}

impl Controls {
    /// Controls whose value differs between `self` and `other`.
    pub fn changed_from(&self, other: &Controls) -> Vec<Control> {
        let mut changed = Vec::new();
        if self.year_range != other.year_range {
            changed.push(Control::YearRange);
        }
        if self.smooth_period != other.smooth_period {
            changed.push(Control::SmoothPeriod);
        }
        if self.cycle_length != other.cycle_length {
            changed.push(Control::CycleLength);
        }
        changed
    }
}

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

struct Route {
    output: Output,
    inputs: &'static [Control],
}

const ROUTES: &[Route] = &[
    Route {
        output: Output::HistoricalGraph,
        inputs: &[Control::YearRange, Control::SmoothPeriod],
    },
    Route {
        output: Output::CycleGraph,
        inputs: &[Control::CycleLength],
    },
];

/// Outputs that depend on `changed`.
pub fn outputs_for(changed: Control) -> impl Iterator<Item = Output> {
    ROUTES
        .iter()
        .filter(move |r| r.inputs.contains(&changed))
        .map(|r| r.output)
}

/// Run the single transform behind `output` and build its figure.
pub fn render(
    output: Output,
    table: &ObservationTable,
    controls: &Controls,
) -> Result<Figure, TransformError> {
    match output {
        Output::HistoricalGraph => {
            let (from, to) = controls.year_range;
            let view = historical_view(table, from, to, controls.smooth_period);
            log::debug!("historical view {from}..={to}: {} rows", view.len());
            Ok(Figure::historical(&view, table.schema()))
        }
        Output::CycleGraph => {
            let view = cycle_view(table, controls.cycle_length)?;
            log::debug!("cycle view ({} years): {} rows", view.cycle_length, view.len());
            Ok(Figure::cycle(&view, table.schema()))
        }
    }
}

/// Recompute every output fed by `changed`.
pub fn dispatch(
    changed: Control,
    table: &ObservationTable,
    controls: &Controls,
) -> Vec<(Output, Result<Figure, TransformError>)> {
    outputs_for(changed)
        .map(|output| {
            log::debug!("{} changed, rendering {output}", changed.id());
            (output, render(output, table, controls))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Observation, Schema};

    fn table() -> ObservationTable {
        let rows = (0..24)
            .map(|i| Observation {
                year: 1999 + i / 12,
                month: (i % 12 + 1) as u8,
                frac_date: 1999.0 + (f64::from(i) + 0.5) / 12.0,
                mean_sunspots: f64::from(i),
                std_dev: -1.0,
                observations: -1,
                indicator: 1,
            })
            .collect();
        ObservationTable::new(Schema::default(), rows)
    }

    #[test]
    fn control_ids_round_trip() {
        for control in Control::ALL {
            assert_eq!(control.id().parse::<Control>().unwrap(), control);
        }
        assert_eq!(
            "marks".parse::<Control>().unwrap_err(),
            UnknownControl("marks".to_string())
        );
    }

    #[test]
    fn routes_cover_each_control_once() {
        assert_eq!(
            outputs_for(Control::YearRange).collect::<Vec<_>>(),
            vec![Output::HistoricalGraph]
        );
        assert_eq!(
            outputs_for(Control::SmoothPeriod).collect::<Vec<_>>(),
            vec![Output::HistoricalGraph]
        );
        assert_eq!(
            outputs_for(Control::CycleLength).collect::<Vec<_>>(),
            vec![Output::CycleGraph]
        );
    }

    #[test]
    fn default_controls() {
        let c = Controls::default();
        assert_eq!(c.year_range, (1900, 2000));
        assert_eq!(c.smooth_period, 5);
        assert_eq!(c.cycle_length, 11);
    }

    #[test]
    fn changed_from_lists_differences() {
        let a = Controls::default();
        let b = Controls {
            smooth_period: 12,
            cycle_length: 9,
            ..a
        };
        assert_eq!(b.changed_from(&a), vec![Control::SmoothPeriod, Control::CycleLength]);
        assert!(a.changed_from(&a).is_empty());
    }

    #[test]
    fn dispatch_renders_only_dependent_outputs() {
        let table = table();
        let controls = Controls::default();
        let results = dispatch(Control::SmoothPeriod, &table, &controls);
        assert_eq!(results.len(), 1);
        let (output, figure) = &results[0];
        assert_eq!(*output, Output::HistoricalGraph);
        // 1999 and 2000 fall inside the default range
        assert_eq!(figure.as_ref().unwrap().traces[0].points.len(), 24);
    }

    #[test]
    fn zero_cycle_length_fails_only_that_output() {
        let table = table();
        let controls = Controls {
            cycle_length: 0,
            ..Controls::default()
        };
        let results = dispatch(Control::CycleLength, &table, &controls);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, Err(TransformError::ZeroCycleLength));
        assert!(render(Output::HistoricalGraph, &table, &controls).is_ok());
    }
}
