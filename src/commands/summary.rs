/// Spread of a set of repeated estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; `0.0` for fewer than two estimates.
    pub std_dev: f64,
}

pub fn summarize(estimates: &[f64]) -> Option<EstimateSummary> {
    if estimates.is_empty() {
        return None;
    }

    let count = estimates.len();
    let mean = estimates.iter().sum::<f64>() / count as f64;
    let min = estimates.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = estimates.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let std_dev = if count < 2 {
        0.0
    } else {
        let squares: f64 = estimates.iter().map(|p| (p - mean).powi(2)).sum();
        (squares / (count - 1) as f64).sqrt()
    };

    Some(EstimateSummary {
        count,
        mean,
        min,
        max,
        std_dev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_returns_none_for_empty_input() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn summarize_single_value() {
        let summary = summarize(&[0.4]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 0.4);
        assert_eq!(summary.min, 0.4);
        assert_eq!(summary.max, 0.4);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn summarize_mean_min_max_and_spread() {
        let summary = summarize(&[0.2, 0.4, 0.6]).unwrap();
        assert!((summary.mean - 0.4).abs() < 1e-12);
        assert_eq!(summary.min, 0.2);
        assert_eq!(summary.max, 0.6);
        assert!((summary.std_dev - 0.2).abs() < 1e-12);
    }
}
