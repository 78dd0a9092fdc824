//! Ensemble-vs-baseline comparison statistics.
//!
//! Plain arithmetic over evaluated debates: population standard deviation,
//! zeros for empty groups.

use super::metrics::EvaluationMetrics;
use super::record::DebateEvaluation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Both groups' distribution of one metric
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricComparison {
    pub baseline_mean: f64,
    pub baseline_std: f64,
    pub baseline_min: f64,
    pub baseline_max: f64,
    pub ensemble_mean: f64,
    pub ensemble_std: f64,
    pub ensemble_min: f64,
    pub ensemble_max: f64,
    /// Ensemble mean minus baseline mean; 0 if either group is empty
    pub improvement: f64,
    /// `improvement` relative to the baseline mean, in percent
    pub improvement_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryComparison {
    pub baseline_mean: f64,
    pub ensemble_mean: f64,
    pub improvement: f64,
}

/// Per-metric comparison plus a per-category slice
///
/// Serializes flat: `{"argument_quality": {...}, ..., "category_analysis": {...}}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonStatistics {
    #[serde(flatten)]
    pub metrics: BTreeMap<String, MetricComparison>,
    /// category → metric → comparison, for categories present in both groups
    pub category_analysis: BTreeMap<String, BTreeMap<String, CategoryComparison>>,
}

impl ComparisonStatistics {
    pub fn metric(&self, name: &str) -> Option<&MetricComparison> {
        self.metrics.get(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Distribution {
    mean: f64,
    std: f64,
    min: f64,
    max: f64,
}

impl Distribution {
    fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std: variance.sqrt(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    Distribution::of(values).map_or(0.0, |d| d.mean)
}

fn metric_values(evaluations: &[&DebateEvaluation], index: usize) -> Vec<f64> {
    evaluations
        .iter()
        .map(|e| e.metrics.values()[index].1)
        .collect()
}

/// Compare evaluated baseline debates against evaluated ensemble debates.
pub fn compare_groups(
    baseline: &[DebateEvaluation],
    ensemble: &[DebateEvaluation],
) -> ComparisonStatistics {
    let baseline: Vec<&DebateEvaluation> = baseline.iter().collect();
    let ensemble: Vec<&DebateEvaluation> = ensemble.iter().collect();
    let names = EvaluationMetrics::neutral().values().map(|(name, _)| name);

    let mut metrics = BTreeMap::new();
    for (index, name) in names.iter().enumerate() {
        let base = Distribution::of(&metric_values(&baseline, index));
        let ens = Distribution::of(&metric_values(&ensemble, index));
        let (improvement, improvement_pct) = match (base, ens) {
            (Some(b), Some(e)) => {
                let delta = e.mean - b.mean;
                let pct = if b.mean == 0.0 { 0.0 } else { delta / b.mean * 100.0 };
                (delta, pct)
            }
            _ => (0.0, 0.0),
        };
        let base = base.unwrap_or_default();
        let ens = ens.unwrap_or_default();
        metrics.insert(
            name.to_string(),
            MetricComparison {
                baseline_mean: base.mean,
                baseline_std: base.std,
                baseline_min: base.min,
                baseline_max: base.max,
                ensemble_mean: ens.mean,
                ensemble_std: ens.std,
                ensemble_min: ens.min,
                ensemble_max: ens.max,
                improvement,
                improvement_pct,
            },
        );
    }

    let baseline_categories: BTreeSet<&str> = baseline.iter().map(|e| e.category.as_str()).collect();
    let ensemble_categories: BTreeSet<&str> = ensemble.iter().map(|e| e.category.as_str()).collect();

    let mut category_analysis = BTreeMap::new();
    for category in baseline_categories.intersection(&ensemble_categories) {
        let base_slice: Vec<&DebateEvaluation> = baseline
            .iter()
            .copied()
            .filter(|e| e.category == *category)
            .collect();
        let ens_slice: Vec<&DebateEvaluation> = ensemble
            .iter()
            .copied()
            .filter(|e| e.category == *category)
            .collect();

        let per_metric = names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let baseline_mean = mean(&metric_values(&base_slice, index));
                let ensemble_mean = mean(&metric_values(&ens_slice, index));
                (
                    name.to_string(),
                    CategoryComparison {
                        baseline_mean,
                        ensemble_mean,
                        improvement: ensemble_mean - baseline_mean,
                    },
                )
            })
            .collect();
        category_analysis.insert(category.to_string(), per_metric);
    }

    ComparisonStatistics {
        metrics,
        category_analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(category: &str, score: f64) -> DebateEvaluation {
        DebateEvaluation {
            debate_index: 0,
            unit: "u".to_string(),
            topic: "t".to_string(),
            category: category.to_string(),
            metrics: EvaluationMetrics::from_scores(score, score, score, score, score),
            failed_axes: Vec::new(),
            ensemble_config: None,
        }
    }

    #[test]
    fn test_means_and_population_std() {
        let baseline = vec![evaluation("safety", 4.0), evaluation("safety", 6.0)];
        let ensemble = vec![evaluation("safety", 7.0)];
        let stats = compare_groups(&baseline, &ensemble);

        let overall = stats.metric("overall_score").unwrap();
        assert!((overall.baseline_mean - 5.0).abs() < 1e-9);
        assert!((overall.baseline_std - 1.0).abs() < 1e-9);
        assert!((overall.baseline_min - 4.0).abs() < 1e-9);
        assert!((overall.baseline_max - 6.0).abs() < 1e-9);
        assert!((overall.ensemble_std).abs() < 1e-9);
        assert!((overall.improvement - 2.0).abs() < 1e-9);
        assert!((overall.improvement_pct - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_group_yields_zeros() {
        let stats = compare_groups(&[evaluation("safety", 8.0)], &[]);
        let quality = stats.metric("argument_quality").unwrap();
        assert_eq!(quality.ensemble_mean, 0.0);
        assert_eq!(quality.improvement, 0.0);
        assert_eq!(quality.improvement_pct, 0.0);
        assert!(stats.category_analysis.is_empty());
        assert_eq!(stats.metrics.len(), 6);
    }

    #[test]
    fn test_zero_baseline_mean_has_zero_pct() {
        let stats = compare_groups(&[evaluation("safety", 0.0)], &[evaluation("safety", 3.0)]);
        let coherence = stats.metric("coherence").unwrap();
        assert!((coherence.improvement - 3.0).abs() < 1e-9);
        assert_eq!(coherence.improvement_pct, 0.0);
    }

    #[test]
    fn test_category_analysis_only_shared_categories() {
        let baseline = vec![evaluation("safety", 4.0), evaluation("fairness", 5.0)];
        let ensemble = vec![evaluation("safety", 6.0), evaluation("economics", 9.0)];
        let stats = compare_groups(&baseline, &ensemble);

        assert_eq!(stats.category_analysis.len(), 1);
        let safety = &stats.category_analysis["safety"]["overall_score"];
        assert!((safety.improvement - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_flat() {
        let stats = compare_groups(&[evaluation("safety", 4.0)], &[evaluation("safety", 6.0)]);
        let value = serde_json::to_value(&stats).unwrap();
        assert!(value.get("overall_score").is_some());
        assert!(value.get("category_analysis").is_some());
        assert!(value.get("metrics").is_none());
    }
}
