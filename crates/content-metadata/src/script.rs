//! Script beat extraction.
//!
//! Two passes feed one accumulator: conventional locations first, then a
//! keyword search over every key reachable from the collector's candidates.
//! The accumulator drops any component whose fingerprint was already seen,
//! so the first pass to produce a beat decides its id and position.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::collector::collect_candidates_with;
use crate::normalization::{key_contains_any, normalize_text};
use crate::params::EngineParameters;
use crate::transcript::is_transcript_key;
use crate::types::{ComponentType, ScriptComponent};
use crate::value::ValueTree;

/// Conventional component locations, in precedence order.
const FAST_PATHS: &[&[&str]] = &[
    &["scriptComponents"],
    &["components"],
    &["script", "components"],
    &["analysis", "components"],
    &["analysis", "scriptComponents"],
    &["contentMetadata", "scriptComponents"],
    &["rawSource", "scriptComponents"],
    &["rawSource", "components"],
];

const COMPONENT_KEYWORDS: &[&str] = &["component", "script", "hook", "cta", "bridge", "nugget"];

const TYPE_FIELDS: &[&str] = &["type", "kind", "category", "beat"];
const LABEL_FIELDS: &[&str] = &["label", "title", "name"];
const CONTENT_FIELDS: &[&str] = &["content", "text", "script"];
const ID_FIELD: &str = "id";

/// Map a key or type tag to a component type.
///
/// Precedence: call to action, golden nugget, bridge, then hook as the
/// catch-all for anything unrecognised.
pub fn classify_type(key: &str) -> ComponentType {
    let lower = key.trim().to_lowercase();
    if lower == "wta" || lower == "cta" || lower.contains("call") {
        ComponentType::CallToAction
    } else if lower.contains("golden") || lower.contains("nugget") {
        ComponentType::GoldenNugget
    } else if lower.contains("bridge") {
        ComponentType::Bridge
    } else {
        ComponentType::Hook
    }
}

/// Whether the deep search treats a key as holding script beats.
pub fn is_component_key(key: &str) -> bool {
    key_contains_any(key, COMPONENT_KEYWORDS) && !is_transcript_key(key)
}

/// Fingerprint of a component: sha256 over length-prefixed type, label and
/// normalized content.
pub fn component_fingerprint(component_type: ComponentType, label: &str, content: &str) -> [u8; 32] {
    let label = normalize_text(label);
    let content = normalize_text(content);
    let mut hasher = Sha256::new();
    for field in [component_type.as_str(), label.as_str(), content.as_str()] {
        hasher.update((field.len() as u64).to_be_bytes());
        hasher.update(field.as_bytes());
    }
    hasher.finalize().into()
}

/// Extract a deduplicated, order-preserving list of script beats.
pub fn extract_script_components(metadata: &ValueTree) -> Vec<ScriptComponent> {
    extract_script_components_with(metadata, &EngineParameters::default())
}

pub fn extract_script_components_with(
    metadata: &ValueTree,
    params: &EngineParameters,
) -> Vec<ScriptComponent> {
    let mut sink = ComponentSink::default();

    for path in FAST_PATHS {
        match metadata.path(path) {
            Some(ValueTree::Seq(items)) => {
                for item in items.iter() {
                    sink.push_entry(item, None);
                }
            }
            Some(entry @ ValueTree::Map(_)) if has_direct_content(entry) => {
                sink.push_entry(entry, None);
            }
            Some(group @ ValueTree::Map(_)) => sink.push_group(group),
            _ => {}
        }
    }
    let fast_count = sink.components.len();

    for node in collect_candidates_with(metadata, params) {
        let consumed = node.node_id().is_some_and(|id| sink.entries_read.contains(&id));
        for (key, value) in node.entries() {
            if !is_component_key(key) {
                continue;
            }
            // An entry's own `script` text was already read as its content.
            if consumed && value.as_str().is_some() && CONTENT_FIELDS.contains(&key.as_str()) {
                continue;
            }
            match value {
                ValueTree::Seq(items) => {
                    for item in items.iter() {
                        sink.push_entry(item, Some(key.as_str()));
                    }
                }
                ValueTree::Map(_) if has_direct_content(value) => {
                    sink.push_entry(value, Some(key.as_str()));
                }
                ValueTree::Map(_) => sink.push_group(value),
                ValueTree::Text(content) => {
                    let component_type = classify_type(key);
                    sink.push(component_type, component_type.display_label(), content, None);
                }
                _ => {}
            }
        }
    }

    tracing::debug!(
        "extracted {} script components ({} from fast paths)",
        sink.components.len(),
        fast_count
    );
    sink.components
}

#[derive(Default)]
struct ComponentSink {
    seen: HashSet<[u8; 32]>,
    entries_read: HashSet<usize>,
    components: Vec<ScriptComponent>,
}

impl ComponentSink {
    fn push(&mut self, component_type: ComponentType, label: &str, content: &str, id: Option<&str>) {
        let content = content.trim();
        if content.is_empty() {
            return;
        }
        let label = label.trim();
        let fingerprint = component_fingerprint(component_type, label, content);
        if !self.seen.insert(fingerprint) {
            return;
        }
        let id = match id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(explicit) => explicit.to_string(),
            None => format!("{}-{}", component_type.as_str(), short_hex(&fingerprint)),
        };
        self.components.push(ScriptComponent {
            id,
            component_type,
            label: label.to_string(),
            content: content.to_string(),
        });
    }

    /// A single tagged entry: plain text, or a mapping with type/label/content fields.
    fn push_entry(&mut self, entry: &ValueTree, parent_key: Option<&str>) {
        let fallback_type = parent_key.map(classify_type).unwrap_or_default();
        match entry {
            ValueTree::Text(content) => {
                self.push(fallback_type, fallback_type.display_label(), content, None);
            }
            ValueTree::Map(_) => {
                let component_type = first_text(entry, TYPE_FIELDS)
                    .map(classify_type)
                    .unwrap_or(fallback_type);
                let label = first_text(entry, LABEL_FIELDS)
                    .unwrap_or_else(|| component_type.display_label());
                let Some(content) = first_text(entry, CONTENT_FIELDS) else {
                    return;
                };
                self.entries_read.extend(entry.node_id());
                let id = entry.get(ID_FIELD).and_then(ValueTree::as_str);
                self.push(component_type, label, content, id);
            }
            _ => {}
        }
    }

    /// A mapping whose keys name component types.
    fn push_group(&mut self, group: &ValueTree) {
        for (key, value) in group.entries() {
            if is_entry_attribute(key)
                || CONTENT_FIELDS.contains(&key.as_str())
                || is_transcript_key(key)
            {
                continue;
            }
            match value {
                ValueTree::Text(content) => {
                    let component_type = classify_type(key);
                    self.push(component_type, component_type.display_label(), content, None);
                }
                ValueTree::Map(_) => self.push_entry(value, Some(key.as_str())),
                ValueTree::Seq(items) => {
                    for item in items.iter() {
                        self.push_entry(item, Some(key.as_str()));
                    }
                }
                _ => {}
            }
        }
    }
}

/// First field in `fields` holding non-blank text.
fn first_text<'a>(entry: &'a ValueTree, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|f| entry.get(f).and_then(ValueTree::as_str))
        .find(|s| !s.trim().is_empty())
}

fn has_direct_content(entry: &ValueTree) -> bool {
    first_text(entry, CONTENT_FIELDS).is_some()
}

fn is_entry_attribute(key: &str) -> bool {
    key == ID_FIELD || TYPE_FIELDS.contains(&key) || LABEL_FIELDS.contains(&key)
}

fn short_hex(bytes: &[u8; 32]) -> String {
    bytes[..4].iter().map(|b| format!("{:02x}", b)).collect()
}
