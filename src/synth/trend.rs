// ===== benchdash/src/synth/trend.rs =====
//
// Weekly performance trend per program. Each value mixes a sine term
// seeded from the SKU name with a live random component, so successive
// calls drift and the charts are regenerated on every render. Pin the
// RNG via `--seed` for reproducible runs.

use crate::catalog;

/// One week of per-SKU averages. `values` is aligned with the owning
/// program's SKU list.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSample {
    /// Short label ("Week 33"); the parenthesized date is dropped.
    pub week: String,
    pub values: Vec<f64>,
}

/// Twelve samples, oldest first, for a known program; an empty series
/// for an unknown name.
pub fn weekly_trend(program: &str, rng: &mut fastrand::Rng) -> Vec<WeekSample> {
    let Some(prog) = catalog::program(program) else {
        return Vec::new();
    };

    catalog::WEEKS
        .iter()
        .rev()
        .enumerate()
        .map(|(week_idx, &week)| {
            let label = week.split(" (").next().unwrap_or(week).to_string();
            let values = prog
                .skus
                .iter()
                .map(|sku| {
                    let seed = sku.len() * 7 + week_idx * 3;
                    let base = 95.0 + (seed % 25) as f64;
                    let drift = (seed as f64 / 5.0).sin() * 10.0 + rng.f64() * 8.0;
                    (base + drift).round()
                })
                .collect();
            WeekSample { week: label, values }
        })
        .collect()
}

/// Project one SKU's column out of a series.
pub fn sku_series(samples: &[WeekSample], sku_idx: usize) -> Vec<f64> {
    samples
        .iter()
        .filter_map(|s| s.values.get(sku_idx).copied())
        .collect()
}

/// Chart footer stats for one SKU column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub latest: f64,
    pub delta: f64,
    pub min: f64,
    pub max: f64,
}

pub fn series_stats(series: &[f64]) -> Option<SeriesStats> {
    let latest = *series.last()?;
    let previous = if series.len() >= 2 {
        series[series.len() - 2]
    } else {
        latest
    };
    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(SeriesStats {
        latest,
        delta: latest - previous,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_program_yields_empty_series() {
        let mut rng = fastrand::Rng::with_seed(7);
        assert!(weekly_trend("Raptor Creek", &mut rng).is_empty());
    }

    #[test]
    fn oldest_week_comes_first() {
        let mut rng = fastrand::Rng::with_seed(7);
        let series = weekly_trend("Arrow Lake", &mut rng);
        assert_eq!(series.first().map(|s| s.week.as_str()), Some("Week 11"));
        assert_eq!(series.last().map(|s| s.week.as_str()), Some("Week 33"));
    }

    #[test]
    fn stats_of_single_point_have_zero_delta() {
        let stats = series_stats(&[120.0]).unwrap();
        assert_eq!(stats.delta, 0.0);
        assert_eq!(stats.min, 120.0);
        assert_eq!(stats.max, 120.0);
    }
}
