//! Letter grades and complexity descriptors from optional quality metrics.

use crate::params::EngineParameters;
use crate::types::{Grade, PerformanceGrade, PerformanceMetrics};
use crate::value::ValueTree;

/// Lower bounds of the A, B+ and B tiers. Anything below is C.
pub const GRADE_A_MIN: f64 = 8.5;
pub const GRADE_B_PLUS_MIN: f64 = 7.5;
pub const GRADE_B_MIN: f64 = 6.5;

const READABILITY_EASY: &str = "Easy to follow and reads smoothly for a broad audience.";
const READABILITY_BALANCED: &str = "Balanced readability with a steady pace.";
const READABILITY_DENSE: &str = "Moderately dense; some passages may need a second read.";
const READABILITY_COMPLEX: &str = "High complexity; consider shorter sentences and simpler wording.";
const LENGTH_DETAILED: &str = "Detailed content with moderately dense pacing.";
const LENGTH_BALANCED: &str = "Balanced pacing for its length.";

/// Metric locations inside metadata, checked in order.
const METRIC_LOCATIONS: &[&[&str]] = &[&["metrics"], &["analysis"], &["analysis", "metrics"], &[]];
const READABILITY_KEYS: &[&str] = &["readability", "readabilityScore"];
const ENGAGEMENT_KEYS: &[&str] = &["engagement", "engagementScore"];
const HOOK_STRENGTH_KEYS: &[&str] = &["hookStrength", "hook_strength", "hook"];

impl PerformanceMetrics {
    pub fn new(readability: Option<f64>, engagement: Option<f64>, hook_strength: Option<f64>) -> Self {
        Self {
            readability,
            engagement,
            hook_strength,
        }
    }

    /// Read metrics from the first metadata location holding any of them.
    /// Numbers and numeric text are accepted; anything else counts as absent.
    pub fn from_metadata(metadata: &ValueTree) -> Self {
        METRIC_LOCATIONS
            .iter()
            .filter_map(|path| metadata.path(path))
            .map(|node| Self {
                readability: first_number(node, READABILITY_KEYS),
                engagement: first_number(node, ENGAGEMENT_KEYS),
                hook_strength: first_number(node, HOOK_STRENGTH_KEYS),
            })
            .find(|m| !m.is_empty())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    /// Mean of the finite metrics present, `None` when there are none.
    pub fn average(&self) -> Option<f64> {
        let (sum, count) = self
            .present()
            .fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    fn present(&self) -> impl Iterator<Item = f64> {
        [self.readability, self.engagement, self.hook_strength]
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
    }
}

fn first_number(node: &ValueTree, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| node.get(k).and_then(ValueTree::as_f64))
}

/// Letter grade for an average score; no score grades as C.
pub fn grade_for(average: Option<f64>) -> Grade {
    match average {
        Some(s) if s >= GRADE_A_MIN => Grade::A,
        Some(s) if s >= GRADE_B_PLUS_MIN => Grade::BPlus,
        Some(s) if s >= GRADE_B_MIN => Grade::B,
        _ => Grade::C,
    }
}

/// Complexity descriptor. Readability decides when present, otherwise the
/// word count gives a coarse read.
pub fn complexity_descriptor(
    readability: Option<f64>,
    word_count: Option<u32>,
    params: &EngineParameters,
) -> &'static str {
    match readability.filter(|r| r.is_finite()) {
        Some(r) if r >= GRADE_A_MIN => READABILITY_EASY,
        Some(r) if r >= GRADE_B_PLUS_MIN => READABILITY_BALANCED,
        Some(r) if r >= GRADE_B_MIN => READABILITY_DENSE,
        Some(_) => READABILITY_COMPLEX,
        None if word_count.unwrap_or(0) >= params.long_content_words => LENGTH_DETAILED,
        None => LENGTH_BALANCED,
    }
}

/// Combine whichever metrics are present into a grade and summary.
pub fn derive_score(metrics: &PerformanceMetrics, word_count: Option<u32>) -> PerformanceGrade {
    derive_score_with(&EngineParameters::default(), metrics, word_count)
}

pub fn derive_score_with(
    params: &EngineParameters,
    metrics: &PerformanceMetrics,
    word_count: Option<u32>,
) -> PerformanceGrade {
    let average_score = metrics.average();
    let grade = grade_for(average_score);
    let descriptor = complexity_descriptor(metrics.readability, word_count, params);
    PerformanceGrade {
        grade,
        summary: format!("Grade {}: {}", grade, descriptor),
        average_score,
    }
}
