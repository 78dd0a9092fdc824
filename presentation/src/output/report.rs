//! Markdown research report for an evaluation document

use chrono::{DateTime, Local};
use debate_domain::{CategoryComparison, EvaluationDocument, EvaluationMetrics, OVERALL_SCORE};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Absolute improvement above which a difference counts as meaningful
const SIGNIFICANCE: f64 = 0.5;

/// Renders `{stem}_evaluation_report.md`
pub struct EvaluationReport;

impl EvaluationReport {
    pub fn render(
        document: &EvaluationDocument,
        num_scenarios: usize,
        generated: DateTime<Local>,
    ) -> String {
        let stats = &document.comparison_statistics;
        let total_baseline = document.baseline_evaluations.len();
        let total_ensemble = document.ensemble_evaluations.len();
        let overall = stats.metric(OVERALL_SCORE).copied().unwrap_or_default();

        let mut out = String::new();
        let _ = writeln!(out, "# Ensemble Debates with Local LLMs for AI Alignment");
        let _ = writeln!(out, "## Evaluation Results");
        let _ = writeln!(out);
        let _ = writeln!(out, "Generated: {}", generated.format("%Y-%m-%d %H:%M:%S"));
        let _ = writeln!(out, "Evaluator model: {}", document.metadata.evaluator_model);
        let _ = writeln!(out, "Source: {}", document.metadata.source_file);
        let _ = writeln!(out);

        let _ = writeln!(out, "## Executive Summary");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "- **{} debates evaluated** across {} alignment scenarios",
            total_baseline + total_ensemble,
            num_scenarios
        );
        let _ = writeln!(
            out,
            "- **{} baseline** (single model) vs **{} ensemble** (multi-model) debates",
            total_baseline, total_ensemble
        );
        if overall.improvement > 0.0 {
            let _ = writeln!(
                out,
                "- **{:.2} point improvement** ({:+.1}%) in overall quality",
                overall.improvement, overall.improvement_pct
            );
        } else {
            let _ = writeln!(
                out,
                "- **{:.2} point decline** ({:.1}%) in overall quality",
                overall.improvement.abs(),
                overall.improvement_pct
            );
        }
        let failed = document.failed_axis_count();
        if failed > 0 {
            let _ = writeln!(
                out,
                "- {} axis scores fell back to neutral after evaluator failures",
                failed
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "## Detailed Results");
        let _ = writeln!(out);
        for name in metric_names() {
            let Some(data) = stats.metric(name) else {
                continue;
            };
            let _ = writeln!(out, "### {}", title_case(name));
            let _ = writeln!(
                out,
                "- **Baseline**: {:.2} ± {:.2}",
                data.baseline_mean, data.baseline_std
            );
            let _ = writeln!(
                out,
                "- **Ensemble**: {:.2} ± {:.2}",
                data.ensemble_mean, data.ensemble_std
            );
            let _ = writeln!(
                out,
                "- **Improvement**: {:+.2} ({:+.1}%)",
                data.improvement, data.improvement_pct
            );
            let _ = writeln!(out, "- **{}**", verdict(data.improvement));
            let _ = writeln!(out);
        }

        if !stats.category_analysis.is_empty() {
            let _ = writeln!(out, "## Performance by Category");
            let _ = writeln!(out);
            for (category, per_metric) in &stats.category_analysis {
                let _ = writeln!(out, "### {}", title_case(category));
                let overall_cat = per_metric
                    .get(OVERALL_SCORE)
                    .map_or(0.0, |c| c.improvement);
                let _ = writeln!(out, "**Overall improvement: {:+.2} points**", overall_cat);
                if let Some(((best, best_v), (worst, worst_v))) = extremes(per_metric) {
                    let _ = writeln!(out, "- Best improvement: {} ({:+.2})", best, best_v);
                    let _ = writeln!(out, "- Weakest area: {} ({:+.2})", worst, worst_v);
                }
                let _ = writeln!(out);
            }
        }

        let _ = writeln!(out, "## Conclusions");
        let _ = writeln!(out);
        for line in conclusion(overall.improvement) {
            let _ = writeln!(out, "{}", line);
        }
        out
    }
}

fn metric_names() -> [&'static str; 6] {
    EvaluationMetrics::neutral().values().map(|(name, _)| name)
}

/// `safety_consideration` → `Safety Consideration`
fn title_case(name: &str) -> String {
    name.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn verdict(improvement: f64) -> &'static str {
    if improvement > SIGNIFICANCE {
        "[OK] Significant improvement in ensemble performance"
    } else if improvement < -SIGNIFICANCE {
        "[WARNING] Notable decline in ensemble performance"
    } else {
        "-> Marginal difference between approaches"
    }
}

/// Best and weakest metric by improvement; ties go to the earlier metric.
fn extremes(
    per_metric: &BTreeMap<String, CategoryComparison>,
) -> Option<((&'static str, f64), (&'static str, f64))> {
    let mut present = metric_names()
        .into_iter()
        .filter_map(|name| per_metric.get(name).map(|c| (name, c.improvement)));
    let first = present.next()?;
    Some(present.fold((first, first), |(best, worst), current| {
        (
            if current.1 > best.1 { current } else { best },
            if current.1 < worst.1 { current } else { worst },
        )
    }))
}

fn conclusion(overall_improvement: f64) -> [&'static str; 4] {
    if overall_improvement > SIGNIFICANCE {
        [
            "### [OK] Strong support for the ensemble approach",
            "- Ensemble debates consistently outperform single-model debates",
            "- Role diversity improves reasoning quality and alignment focus",
            "- Local models reach measurable gains through ensembles",
        ]
    } else if overall_improvement > 0.0 {
        [
            "### [MODERATE] Moderate support for the ensemble approach",
            "- Ensemble debates show modest improvements over single models",
            "- Benefits vary by scenario category and ensemble configuration",
            "- Weigh the extra model calls against the quality gain",
        ]
    } else {
        [
            "### [WARNING] Mixed results for the ensemble approach",
            "- Ensemble benefits were not consistently demonstrated",
            "- Ensemble configurations may need tuning",
            "- Single models may be sufficient for some alignment tasks",
        ]
    }
}
