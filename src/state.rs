use std::collections::BTreeMap;

use crate::chart::Figure;
use crate::data::model::{ObservationTable, YearRange};
use crate::data::views::TransformError;
use crate::dispatch::{self, Controls, Output};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded observations, shared read-only by every render.
    pub table: ObservationTable,

    /// Year domain of the table; bounds the year-range sliders.
    pub year_bounds: Option<YearRange>,

    /// Current control values.
    pub controls: Controls,

    /// Latest render of each output (cached until one of its controls changes).
    pub figures: BTreeMap<Output, Result<Figure, TransformError>>,

    /// Where the table came from, for the top bar.
    pub source_label: String,

    /// URI of the decorative sun image.
    pub sun_image: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state for a freshly loaded table and render every output.
    pub fn new(table: ObservationTable, source_label: String, sun_image: String) -> Self {
        let year_bounds = table.year_range();
        let mut controls = Controls::default();
        if let Some(bounds) = year_bounds {
            controls.year_range = clamp_years(controls.year_range, bounds);
        }

        let mut state = Self {
            table,
            year_bounds,
            controls,
            figures: BTreeMap::new(),
            source_label,
            sun_image,
            status_message: None,
        };
        for output in Output::ALL {
            let result = dispatch::render(output, &state.table, &state.controls);
            state.store(output, result);
        }
        state
    }

    /// Take new control values from the UI and re-render what they feed.
    pub fn apply(&mut self, requested: Controls) {
        let controls = self.normalize(requested);
        let changed = controls.changed_from(&self.controls);
        if changed.is_empty() {
            return;
        }
        self.controls = controls;

        for control in changed {
            for (output, result) in dispatch::dispatch(control, &self.table, &self.controls) {
                self.store(output, result);
            }
        }
    }

    pub fn figure(&self, output: Output) -> Option<&Result<Figure, TransformError>> {
        self.figures.get(&output)
    }

    fn store(&mut self, output: Output, result: Result<Figure, TransformError>) {
        if let Err(e) = &result {
            log::warn!("Rendering {output} failed: {e}");
        }
        self.figures.insert(output, result);
        self.status_message = self
            .figures
            .iter()
            .find_map(|(o, r)| r.as_ref().err().map(|e| format!("{o}: {e}")));
    }

    /// Keep the year range ordered and inside the table's domain. A bound
    /// dragged past the other one pulls it along.
    fn normalize(&self, mut requested: Controls) -> Controls {
        let (mut from, mut to) = requested.year_range;
        if from > to {
            if from != self.controls.year_range.0 {
                to = from;
            } else {
                from = to;
            }
        }
        requested.year_range = match self.year_bounds {
            Some(bounds) => clamp_years((from, to), bounds),
            None => (from, to),
        };
        requested
    }
}

fn clamp_years((from, to): (i32, i32), bounds: YearRange) -> (i32, i32) {
    (bounds.clamp(from), bounds.clamp(to))
}
