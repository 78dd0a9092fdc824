//! Numeric rating extraction from evaluator output.

use super::metrics::NEUTRAL_SCORE;
use regex::Regex;
use std::sync::LazyLock;

static LABELED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:Rating|Score):\s*([0-9]+\.?[0-9]*)").expect("valid regex"));
static OUT_OF_TEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.?[0-9]*)\s*/\s*10").expect("valid regex"));
static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]+\.?[0-9]*)\b").expect("valid regex"));

/// Parse a 0-10 rating from free text.
///
/// Patterns are tried in priority order (`Rating: X` / `Score: X`, then `X/10`,
/// then any bare number); the first match wins and is clamped to `[0, 10]`.
/// Returns [`NEUTRAL_SCORE`] when nothing matches.
pub fn parse_rating(response: &str) -> f64 {
    for pattern in [&*LABELED, &*OUT_OF_TEN, &*BARE] {
        if let Some(captures) = pattern.captures(response)
            && let Some(value) = captures.get(1)
            && let Ok(score) = value.as_str().parse::<f64>()
        {
            return score.clamp(0.0, 10.0);
        }
    }
    NEUTRAL_SCORE
}
