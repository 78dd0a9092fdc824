//! Aggregate statistics over a batch. Pure, no model calls.

use super::batch::ExperimentBatch;
use super::outcome::UnitKind;
use super::record::RecordedDebate;
use crate::debate::Winner;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Timing and volume across each group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub baseline_avg_time: f64,
    pub ensemble_avg_time: f64,
    pub total_baseline_debates: usize,
    pub total_ensemble_debates: usize,
    pub skipped_scenarios: usize,
}

/// Per-unit verdict tallies over decisive debates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitPerformance {
    pub total_debates: usize,
    pub avg_time: f64,
    pub proponent_wins: usize,
    pub opponent_wins: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub summary_stats: SummaryStats,
    /// Keyed `baseline_{model}` / `ensemble_{config}`
    pub performance_comparison: BTreeMap<String, UnitPerformance>,
    /// UNKNOWN verdicts per unit key
    pub unknown_verdicts: BTreeMap<String, usize>,
}

/// Summarize a batch.
///
/// Average times only count debates with a positive `total_time`; the
/// per-unit comparison only counts debates with a decisive winner and
/// omits units that have none.
pub fn analyze_results(batch: &ExperimentBatch) -> ExperimentSummary {
    let (baseline_avg_time, total_baseline_debates) = timed_mean(batch, UnitKind::Baseline);
    let (ensemble_avg_time, total_ensemble_debates) = timed_mean(batch, UnitKind::Ensemble);

    let mut performance_comparison = BTreeMap::new();
    let mut unknown_verdicts = BTreeMap::new();
    for kind in [UnitKind::Baseline, UnitKind::Ensemble] {
        for (unit, debates) in batch.results(kind) {
            let key = format!("{}_{}", kind, unit);
            let unknown = debates
                .iter()
                .filter(|d| d.winner == Winner::Unknown)
                .count();
            unknown_verdicts.insert(key.clone(), unknown);
            if let Some(performance) = unit_performance(debates) {
                performance_comparison.insert(key, performance);
            }
        }
    }

    ExperimentSummary {
        summary_stats: SummaryStats {
            baseline_avg_time,
            ensemble_avg_time,
            total_baseline_debates,
            total_ensemble_debates,
            skipped_scenarios: batch.skipped.len(),
        },
        performance_comparison,
        unknown_verdicts,
    }
}

fn timed_mean(batch: &ExperimentBatch, kind: UnitKind) -> (f64, usize) {
    let times: Vec<f64> = batch
        .debates(kind)
        .map(|(_, d)| d.total_time)
        .filter(|t| *t > 0.0)
        .collect();
    if times.is_empty() {
        return (0.0, 0);
    }
    (times.iter().sum::<f64>() / times.len() as f64, times.len())
}

fn unit_performance(debates: &[RecordedDebate]) -> Option<UnitPerformance> {
    let decisive: Vec<&RecordedDebate> = debates.iter().filter(|d| d.winner.is_decisive()).collect();
    if decisive.is_empty() {
        return None;
    }
    let count_wins = |winner: Winner| decisive.iter().filter(|d| d.winner == winner).count();
    Some(UnitPerformance {
        total_debates: decisive.len(),
        avg_time: decisive.iter().map(|d| d.total_time).sum::<f64>() / decisive.len() as f64,
        proponent_wins: count_wins(Winner::Proponent),
        opponent_wins: count_wins(Winner::Opponent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::batch::BatchMetadata;
    use crate::experiment::outcome::SkippedScenario;

    fn debate(winner: Winner, total_time: f64) -> RecordedDebate {
        RecordedDebate {
            topic: "t".to_string(),
            scenario_category: "safety".to_string(),
            scenario_focus: "f".to_string(),
            winner,
            judge_reasoning: String::new(),
            total_time,
            ensemble_used: false,
            arguments: Vec::new(),
            ensemble_config: None,
        }
    }

    fn empty_batch() -> ExperimentBatch {
        ExperimentBatch::new(BatchMetadata::new(0, 1, &[], &[]), Vec::new())
    }

    #[test]
    fn test_empty_batch_yields_zeros() {
        let summary = analyze_results(&empty_batch());
        assert_eq!(summary.summary_stats.baseline_avg_time, 0.0);
        assert_eq!(summary.summary_stats.total_ensemble_debates, 0);
        assert!(summary.performance_comparison.is_empty());
    }

    #[test]
    fn test_zero_time_debates_excluded_from_averages() {
        let mut batch = empty_batch();
        batch.record_unit(
            UnitKind::Baseline,
            "m",
            vec![debate(Winner::Proponent, 4.0), debate(Winner::Opponent, 0.0)],
            Vec::new(),
        );
        let summary = analyze_results(&batch);
        assert_eq!(summary.summary_stats.baseline_avg_time, 4.0);
        assert_eq!(summary.summary_stats.total_baseline_debates, 1);

        let performance = &summary.performance_comparison["baseline_m"];
        assert_eq!(performance.total_debates, 2);
        assert_eq!(performance.avg_time, 2.0);
        assert_eq!(performance.proponent_wins, 1);
        assert_eq!(performance.opponent_wins, 1);
    }

    #[test]
    fn test_all_unknown_unit_omitted_from_comparison() {
        let mut batch = empty_batch();
        batch.record_unit(
            UnitKind::Ensemble,
            "balanced",
            vec![debate(Winner::Unknown, 3.0)],
            vec![SkippedScenario {
                kind: UnitKind::Ensemble,
                unit: "balanced".to_string(),
                scenario_index: 1,
                topic: "t".to_string(),
                reason: "r".to_string(),
            }],
        );
        let summary = analyze_results(&batch);
        assert!(!summary.performance_comparison.contains_key("ensemble_balanced"));
        assert_eq!(summary.unknown_verdicts["ensemble_balanced"], 1);
        assert_eq!(summary.summary_stats.ensemble_avg_time, 3.0);
        assert_eq!(summary.summary_stats.skipped_scenarios, 1);
    }
}
