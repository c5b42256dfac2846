mod fixtures;

use content_metadata::pipeline::*;
use content_metadata::{ComponentType, ContentItem, Grade};
use fixtures::{crawl_metadata, item, tree};
use serde_json::json;

#[test]
fn transcript_and_single_hook_end_to_end() {
    let meta = tree(json!({
        "rawSource": { "transcript": "Hook sentence. Bridge sentence." },
        "scriptComponents": [{ "type": "hook", "content": "Hook sentence." }]
    }));
    let out = normalize_item(&item("e2e", None, None, meta));

    assert_eq!(out.transcript, "Hook sentence. Bridge sentence.");
    assert_eq!(out.script_components.len(), 1);
    assert_eq!(out.script_components[0].component_type, ComponentType::Hook);
    assert_eq!(out.script_components[0].content, "Hook sentence.");
    assert_eq!(out.embed_src, "");
    assert_eq!(out.performance.grade, Grade::C);
}

#[test]
fn crawl_record_normalizes_fully() {
    let out = normalize_item(&item(
        "crawl",
        Some("https://www.youtube.com/watch?v=abc123"),
        Some("youtube"),
        crawl_metadata(),
    ));

    assert!(out.transcript.starts_with("Stop scrolling."));
    let types: Vec<ComponentType> = out
        .script_components
        .iter()
        .map(|c| c.component_type)
        .collect();
    assert_eq!(
        types,
        vec![
            ComponentType::Hook,
            ComponentType::Bridge,
            ComponentType::GoldenNugget,
            ComponentType::CallToAction,
        ]
    );
    assert_eq!(out.embed_src, "https://www.youtube.com/embed/abc123");
    assert_eq!(out.performance.average_score, Some(8.0));
    assert_eq!(out.performance.grade, Grade::BPlus);
}

#[test]
fn blocked_platform_keeps_other_outputs() {
    let out = normalize_item(&item(
        "tt",
        Some("https://www.tiktok.com/@creator/video/99"),
        Some("tiktok"),
        tree(json!({ "captions": "Short clip." })),
    ));
    assert_eq!(out.embed_src, "");
    assert_eq!(out.transcript, "Short clip.");
    assert!(out.script_components.is_empty());
}

#[test]
fn content_item_deserializes_from_dashboard_json() {
    let raw = r#"{
        "id": "42",
        "title": "Morning routine",
        "platform": "youtube",
        "url": "https://youtu.be/xyz789",
        "metadata": { "transcript": "Wake up early." }
    }"#;
    let parsed: ContentItem = serde_json::from_str(raw).unwrap();
    let out = normalize_item(&parsed);
    assert_eq!(out.transcript, "Wake up early.");
    assert_eq!(out.embed_src, "https://www.youtube.com/embed/xyz789");
}

#[test]
fn output_serializes_for_the_presentation_layer() {
    let meta = tree(json!({ "components": [{ "type": "cta", "content": "Follow." }] }));
    let out = normalize_item(&item("s", None, None, meta));
    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(value["scriptComponents"][0]["type"], "call_to_action");
    assert_eq!(value["performance"]["grade"], "C");
    assert!(value["performance"]["averageScore"].is_null());
}
