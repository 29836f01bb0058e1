//! Descriptive statistics over scan results and table rendering.

use comfy_table::{Table, presets::UTF8_FULL};

use crate::scan::ScanResult;

/// Descriptive statistics over one type label's memory footprints.
///
/// `std` is the sample standard deviation (ddof = 1) and is `None` for a
/// single observation. Percentiles interpolate linearly between closest
/// ranks.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: u64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: u64,
}

impl Summary {
    pub fn describe(values: &[u64]) -> Option<Summary> {
        if values.is_empty() {
            return None;
        }

        let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = (n >= 2).then(|| {
            let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        });

        Some(Summary {
            count: n,
            mean,
            std,
            min: *values.iter().min().unwrap(),
            p25: percentile(&sorted, 0.25),
            p50: percentile(&sorted, 0.50),
            p75: percentile(&sorted, 0.75),
            max: *values.iter().max().unwrap(),
        })
    }
}

fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

/// Render one row per observed type label; labels without observations are
/// absent, so an empty keyspace yields a header-only table.
pub fn format_summary(results: &ScanResult) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "type", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
    ]);

    for (dtype, values) in results {
        let Some(s) = Summary::describe(values) else {
            continue;
        };
        table.add_row(vec![
            dtype.clone(),
            s.count.to_string(),
            format!("{:.2}", s.mean),
            s.std.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string()),
            s.min.to_string(),
            format!("{:.2}", s.p25),
            format!("{:.2}", s.p50),
            format!("{:.2}", s.p75),
            s.max.to_string(),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_empty_is_none() {
        assert!(Summary::describe(&[]).is_none());
    }

    #[test]
    fn describe_single_value() {
        let s = Summary::describe(&[72]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, 72.0);
        assert_eq!(s.std, None);
        assert_eq!(s.min, 72);
        assert_eq!(s.p25, 72.0);
        assert_eq!(s.p50, 72.0);
        assert_eq!(s.p75, 72.0);
        assert_eq!(s.max, 72);
    }

    #[test]
    fn describe_matches_hand_computed_values() {
        // mean 2.5, sample std sqrt(5/3), interpolated quartiles
        let s = Summary::describe(&[4, 2, 1, 3]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 2.5);
        assert!((s.std.unwrap() - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(s.min, 1);
        assert_eq!(s.p25, 1.75);
        assert_eq!(s.p50, 2.5);
        assert_eq!(s.p75, 3.25);
        assert_eq!(s.max, 4);
    }

    #[test]
    fn table_has_one_row_per_observed_label() {
        let mut results = ScanResult::new();
        results.insert("hash".to_string(), vec![104, 120]);
        results.insert("string".to_string(), vec![56]);

        let rendered = format_summary(&results);
        assert!(rendered.contains("hash"));
        assert!(rendered.contains("string"));
        assert!(!rendered.contains("ReJSON-RL"));
    }

    #[test]
    fn empty_results_render_header_only() {
        let rendered = format_summary(&ScanResult::new());
        assert!(rendered.contains("count"));
        assert!(!rendered.contains("hash"));
    }
}
