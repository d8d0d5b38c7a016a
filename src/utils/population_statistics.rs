/// Arithmetic mean of the values which are not NaN.
///
/// Returns NaN when there is nothing to average.
pub fn mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|value| !value.is_nan())
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        return f64::NAN;
    }

    sum / count as f64
}

/// Population standard deviation (divisor `N`, no Bessel correction) of the values which are
/// not NaN.
///
/// Returns NaN when there is nothing to compute it from.
pub fn population_std(values: &[f64]) -> f64 {
    let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if present.is_empty() {
        return f64::NAN;
    }

    let mean = mean(&present);
    let variance =
        present.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / present.len() as f64;

    variance.sqrt()
}

/// Standard deviation relative to the mean, in percent.
///
/// A zero (or undefined) mean makes the ratio undefined, which is reported as NaN.
pub fn percentage_error(std: f64, mean: f64) -> f64 {
    if mean == 0.0 || mean.is_nan() || std.is_nan() {
        return f64::NAN;
    }

    std / mean * 100.0
}
