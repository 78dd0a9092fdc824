//! Evaluation domain
//!
//! Post-hoc scoring of recorded debates along five axes and the
//! ensemble-vs-baseline comparison built from those scores.

pub mod axis;
pub mod metrics;
pub mod record;
pub mod score;
pub mod statistics;

pub use axis::EvaluationAxis;
pub use metrics::{EvaluationMetrics, NEUTRAL_SCORE, OVERALL_SCORE};
pub use record::{DebateEvaluation, EvaluationDocument, EvaluationMetadata};
pub use score::parse_rating;
pub use statistics::{CategoryComparison, ComparisonStatistics, MetricComparison, compare_groups};
