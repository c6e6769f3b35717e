/// Trailing simple moving average.
///
/// Each output is the mean of up to `window` values ending at the same
/// position. At the start of the sequence fewer values are used, so the
/// output never has undefined leading entries. A window of `0` behaves
/// like `1` and returns the input unchanged.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}
