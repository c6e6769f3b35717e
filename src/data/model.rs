use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Column / Schema – the fixed seven-field layout of the monthly file
// ---------------------------------------------------------------------------

/// Positional columns of the monthly mean sunspot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Year,
    Month,
    FracDate,
    MeanSunspots,
    StdDev,
    Observations,
    Indicator,
}

impl Column {
    /// Position of the column inside a record.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Ordered column names applied to the headerless input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    names: [String; 7],
}

impl Default for Schema {
    fn default() -> Self {
        Self::new([
            "Year",
            "Month",
            "FracDate",
            "MM Sunspot Number",
            "MM_SD",
            "NumObservations",
            "indicator",
        ])
    }
}

impl Schema {
    pub fn new(names: [&str; 7]) -> Self {
        Self {
            names: names.map(str::to_string),
        }
    }

    pub fn name(&self, column: Column) -> &str {
        &self.names[column.index()]
    }

    /// Name for the field at `index`, if it is inside the schema.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn width(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Observation – one row of the file
// ---------------------------------------------------------------------------

/// A single monthly observation. Field order matches [`Column`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub month: u8,
    /// Fractional year at the middle of the month, e.g. `1749.042`.
    pub frac_date: f64,
    /// Monthly mean total sunspot number; `-1` marks a missing value.
    pub mean_sunspots: f64,
    pub std_dev: f64,
    pub observations: i64,
    /// `1` for definitive values, `0` for provisional ones.
    pub indicator: u8,
}

impl Observation {
    pub fn is_missing(&self) -> bool {
        self.mean_sunspots < 0.0
    }

    pub fn is_definitive(&self) -> bool {
        self.indicator == 1
    }
}

// ---------------------------------------------------------------------------
// YearRange
// ---------------------------------------------------------------------------

/// Inclusive span of years present in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Bounds of a year set; `None` when the set is empty.
    pub fn from_years(years: &BTreeSet<i32>) -> Option<Self> {
        Some(Self {
            min: *years.first()?,
            max: *years.last()?,
        })
    }

    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min, self.max)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// ObservationTable – the loaded dataset
// ---------------------------------------------------------------------------

/// Immutable snapshot of the loaded file.
///
/// Cloning is cheap and shares the rows; there is no way to obtain a mutable
/// handle to them once the table is built, so views derived from it always
/// carry their own columns.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    schema: Schema,
    rows: Arc<[Observation]>,
}

impl ObservationTable {
    pub fn new(schema: Schema, rows: Vec<Observation>) -> Self {
        Self {
            schema,
            rows: rows.into(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// Shared handle to the rows for views that keep every row.
    pub(crate) fn shared_rows(&self) -> Arc<[Observation]> {
        Arc::clone(&self.rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Min/max year present, `None` for an empty table.
    pub fn year_range(&self) -> Option<YearRange> {
        YearRange::from_years(&super::views::distinct_years(self))
    }
}
