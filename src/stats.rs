//! Shared descriptive-statistics kernel used by the info block, the full
//! report, and the cross-ecosystem agreement checks.

use serde::Serialize;

/// Descriptive statistics for one numeric column.
///
/// `std` is the sample standard deviation (n−1 denominator) and the quartiles
/// use linear interpolation, matching the conventions of both the pandas and
/// R summary routines so reports from different ecosystems agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Compute statistics over the finite values of `data`; non-finite
    /// entries count as missing.
    pub fn from_values(data: &[f64]) -> Self {
        let mut finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Self::empty();
        }
        finite.sort_by(f64::total_cmp);

        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            (finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        Describe {
            count,
            mean,
            std,
            min: finite[0],
            q25: quantile(&finite, 0.25),
            median: quantile(&finite, 0.5),
            q75: quantile(&finite, 0.75),
            max: finite[count - 1],
        }
    }

    fn empty() -> Self {
        Describe {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Linearly interpolated quantile. `sorted` must be ascending and non-empty;
/// `q` is in `[0, 1]`.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
