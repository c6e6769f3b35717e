use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use super::model::{Observation, ObservationTable};
use super::smoothing::rolling_mean;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("cycle length must be greater than zero")]
    ZeroCycleLength,
}

// ---------------------------------------------------------------------------
// Year domain
// ---------------------------------------------------------------------------

/// Distinct years present in the table, ascending.
pub fn distinct_years(table: &ObservationTable) -> BTreeSet<i32> {
    table.rows().iter().map(|o| o.year).collect()
}

// ---------------------------------------------------------------------------
// Historical view: year filter + rolling mean
// ---------------------------------------------------------------------------

/// Rows of one year interval with a trailing mean of the sunspot number.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalView {
    pub rows: Vec<Observation>,
    /// One entry per row in `rows`.
    pub rolling_mean: Vec<f64>,
    pub window: usize,
}

impl HistoricalView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows paired with their rolling mean.
    pub fn iter(&self) -> impl Iterator<Item = (&Observation, f64)> {
        self.rows.iter().zip(self.rolling_mean.iter().copied())
    }
}

/// Select rows with `year_min <= Year <= year_max` in table order and append
/// a trailing mean over up to `smoothing_window` rows.
///
/// Bounds outside the table's year domain are allowed and simply match fewer
/// rows; an inverted or disjoint interval yields an empty view. The missing
/// value sentinel is averaged like any other value.
pub fn historical_view(
    table: &ObservationTable,
    year_min: i32,
    year_max: i32,
    smoothing_window: usize,
) -> HistoricalView {
    let rows: Vec<Observation> = table
        .rows()
        .iter()
        .filter(|o| (year_min..=year_max).contains(&o.year))
        .copied()
        .collect();

    let means: Vec<f64> = rows.iter().map(|o| o.mean_sunspots).collect();
    let smoothed = rolling_mean(&means, smoothing_window);

    HistoricalView {
        rows,
        rolling_mean: smoothed,
        window: smoothing_window,
    }
}

// ---------------------------------------------------------------------------
// Cycle view: fractional date folded onto one cycle
// ---------------------------------------------------------------------------

/// Every row of the table with its position inside a cycle of fixed length.
#[derive(Debug, Clone)]
pub struct CycleView {
    rows: Arc<[Observation]>,
    /// One entry per row, each in `[0, cycle_length)`.
    pub cycle_offset: Vec<f64>,
    pub cycle_length: u32,
}

impl CycleView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Observation, f64)> {
        self.rows.iter().zip(self.cycle_offset.iter().copied())
    }
}

/// `frac_date mod cycle_length`, always in `[0, cycle_length)`.
pub fn cycle_offset(frac_date: f64, cycle_length: f64) -> f64 {
    let offset = frac_date.rem_euclid(cycle_length);
    // rem_euclid rounds up to `cycle_length` for tiny negative inputs
    if offset >= cycle_length {
        0.0
    } else {
        offset
    }
}

/// Fold every observation onto a cycle of `cycle_length_years`.
///
/// The offsets live in the returned view only; the table itself is shared
/// read-only, so repeated calls with different lengths never see each
/// other's results.
pub fn cycle_view(
    table: &ObservationTable,
    cycle_length_years: u32,
) -> Result<CycleView, TransformError> {
    if cycle_length_years == 0 {
        return Err(TransformError::ZeroCycleLength);
    }
    let length = f64::from(cycle_length_years);
    let offsets = table
        .rows()
        .iter()
        .map(|o| cycle_offset(o.frac_date, length))
        .collect();

    Ok(CycleView {
        rows: table.shared_rows(),
        cycle_offset: offsets,
        cycle_length: cycle_length_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Schema;
    use proptest::prelude::*;

    fn obs(year: i32, month: u8, frac_date: f64, mean: f64) -> Observation {
        Observation {
            year,
            month,
            frac_date,
            mean_sunspots: mean,
            std_dev: -1.0,
            observations: -1,
            indicator: 1,
        }
    }

    fn monthly_table(first_year: i32, years: i32) -> ObservationTable {
        let mut rows = Vec::new();
        for year in first_year..first_year + years {
            for month in 1..=12u8 {
                let frac = year as f64 + (month as f64 - 0.5) / 12.0;
                rows.push(obs(year, month, frac, (year * 12 + month as i32) as f64 % 97.0));
            }
        }
        ObservationTable::new(Schema::default(), rows)
    }

    fn two_row_table() -> ObservationTable {
        ObservationTable::new(
            Schema::default(),
            vec![obs(1749, 1, 1749.042, 96.7), obs(1749, 2, 1749.123, 104.3)],
        )
    }

    #[test]
    fn distinct_years_are_unique_and_sorted() {
        let years = distinct_years(&monthly_table(1749, 3));
        assert_eq!(years.into_iter().collect::<Vec<_>>(), vec![1749, 1750, 1751]);
    }

    #[test]
    fn historical_view_worked_example() {
        let view = historical_view(&two_row_table(), 1749, 1749, 2);
        assert_eq!(view.len(), 2);
        assert_eq!(view.rolling_mean[0], 96.7);
        assert!((view.rolling_mean[1] - 100.5).abs() < 1e-12);
    }

    #[test]
    fn historical_view_window_one_is_identity() {
        let table = monthly_table(1900, 5);
        let view = historical_view(&table, 1900, 1904, 1);
        for (row, rolling) in view.iter() {
            assert_eq!(rolling, row.mean_sunspots);
        }
    }

    #[test]
    fn historical_view_outside_domain_is_empty() {
        let table = monthly_table(1900, 5);
        assert!(historical_view(&table, 1700, 1720, 5).is_empty());
        assert!(historical_view(&table, 2100, 2200, 5).is_empty());
        assert!(historical_view(&table, 1904, 1900, 5).is_empty());
    }

    #[test]
    fn historical_view_partial_overlap_keeps_in_domain_rows() {
        let table = monthly_table(1900, 5);
        let view = historical_view(&table, 1850, 1901, 3);
        assert_eq!(view.len(), 24);
        assert!(view.rows.iter().all(|o| o.year <= 1901));
    }

    #[test]
    fn historical_view_leaves_table_untouched() {
        let table = monthly_table(1900, 3);
        let before = table.rows().to_vec();
        let _ = historical_view(&table, 1901, 1901, 12);
        assert_eq!(table.rows(), before.as_slice());
    }

    #[test]
    fn cycle_view_worked_example() {
        let view = cycle_view(&two_row_table(), 11).unwrap();
        let expected = 1749.042 - 159.0 * 11.0;
        assert!((view.cycle_offset[0] - expected).abs() < 1e-9);
        assert!((view.cycle_offset[0] - 0.042).abs() < 1e-9);
        assert_eq!(view.cycle_length, 11);
    }

    #[test]
    fn cycle_view_keeps_every_row() {
        let table = monthly_table(1749, 30);
        let view = cycle_view(&table, 11).unwrap();
        assert_eq!(view.len(), table.len());
        let rows: Vec<Observation> = view.iter().map(|(o, _)| *o).collect();
        assert_eq!(rows.as_slice(), table.rows());
    }

    #[test]
    fn zero_cycle_length_is_rejected() {
        let err = cycle_view(&two_row_table(), 0).unwrap_err();
        assert_eq!(err, TransformError::ZeroCycleLength);
    }

    #[test]
    fn cycle_views_do_not_leak_between_calls() {
        let table = monthly_table(1749, 40);
        let eleven = cycle_view(&table, 11).unwrap();
        let seven = cycle_view(&table, 7).unwrap();
        let eleven_again = cycle_view(&table, 11).unwrap();

        assert_eq!(eleven.cycle_offset, eleven_again.cycle_offset);
        for ((row, a), b) in eleven.iter().zip(seven.cycle_offset.iter()) {
            assert_eq!(a, row.frac_date % 11.0);
            assert_eq!(*b, row.frac_date % 7.0);
        }
    }

    #[test]
    fn cycle_offset_wraps_negative_dates_into_range() {
        let offset = cycle_offset(-0.5, 11.0);
        assert!((offset - 10.5).abs() < 1e-12);
        assert_eq!(cycle_offset(-1e-18, 11.0), 0.0);
    }

    proptest! {
        #[test]
        fn historical_view_filters_and_preserves_order(
            first in 1749i32..1800,
            span in 1i32..30,
            a in 1700i32..1850,
            len in 0i32..40,
            window in 0usize..25,
        ) {
            let table = monthly_table(first, span);
            let b = a + len;
            let view = historical_view(&table, a, b, window);

            let expected: Vec<Observation> = table
                .rows()
                .iter()
                .filter(|o| o.year >= a && o.year <= b)
                .copied()
                .collect();
            prop_assert_eq!(&view.rows, &expected);
            prop_assert_eq!(view.rolling_mean.len(), view.rows.len());
            prop_assert!(view.rows.windows(2).all(|w| w[0].frac_date < w[1].frac_date));
        }

        #[test]
        fn cycle_offset_in_range_and_congruent(
            frac_date in 1700.0f64..2100.0,
            length in 1u32..40,
        ) {
            let l = f64::from(length);
            let offset = cycle_offset(frac_date, l);
            prop_assert!(offset >= 0.0 && offset < l);
            let k = ((frac_date - offset) / l).round();
            prop_assert!((frac_date - offset - k * l).abs() < 1e-9);
        }
    }
}
