//! Transcript resolution from known fields, with a keyword search fallback.

use crate::collector::collect_candidates_with;
use crate::normalization::key_contains_any;
use crate::params::EngineParameters;
use crate::value::ValueTree;

/// Conventional transcript locations, checked in priority order.
const DIRECT_FIELDS: &[&[&str]] = &[
    &["transcript"],
    &["fullTranscript"],
    &["captions"],
    &["rawSource", "transcript"],
    &["rawSource", "fullTranscript"],
];

/// Key fragments that mark a field as holding transcript text.
const TRANSCRIPT_KEYWORDS: &[&str] = &[
    "transcript",
    "caption",
    "transcription",
    "captions",
    "full_text",
];

/// Check whether a metadata key names transcript text (case-insensitive).
pub fn is_transcript_key(key: &str) -> bool {
    key_contains_any(key, TRANSCRIPT_KEYWORDS)
}

/// Resolve the best available transcript, or an empty string.
///
/// Direct fields win over anything found by the keyword search.
pub fn extract_transcript(metadata: &ValueTree) -> String {
    extract_transcript_with(metadata, &EngineParameters::default())
}

pub fn extract_transcript_with(metadata: &ValueTree, params: &EngineParameters) -> String {
    for path in DIRECT_FIELDS {
        if let Some(text) = metadata.path(path).and_then(ValueTree::as_str) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                tracing::debug!("transcript resolved from direct field {}", path.join("."));
                return trimmed.to_string();
            }
        }
    }

    for node in collect_candidates_with(metadata, params) {
        for (key, value) in node.entries() {
            if !is_transcript_key(key) {
                continue;
            }
            let flattened = flatten_text(value);
            let trimmed = flattened.trim();
            if !trimmed.is_empty() {
                tracing::debug!("transcript resolved from keyword field {:?}", key);
                return trimmed.to_string();
            }
        }
    }

    String::new()
}

/// Flatten a node to text: strings pass through, containers join their
/// flattened children with newlines, other scalars contribute nothing.
///
/// Blank pieces are skipped, so a container flattens to its non-blank text
/// leaves in document order. Walks an explicit stack; depth is unbounded.
pub fn flatten_text(value: &ValueTree) -> String {
    if let ValueTree::Text(s) = value {
        return s.clone();
    }

    let mut pieces: Vec<&str> = Vec::new();
    let mut stack = vec![value];
    while let Some(node) = stack.pop() {
        match node {
            ValueTree::Text(s) if !s.trim().is_empty() => pieces.push(s),
            ValueTree::Seq(items) => stack.extend(items.iter().rev()),
            ValueTree::Map(entries) => stack.extend(entries.iter().rev().map(|(_, v)| v)),
            _ => {}
        }
    }
    pieces.join("\n")
}
