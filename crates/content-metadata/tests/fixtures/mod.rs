use content_metadata::{ContentItem, ValueTree};
use serde_json::json;

/// Build a metadata tree from a JSON literal.
pub fn tree(value: serde_json::Value) -> ValueTree {
    value.into()
}

/// Metadata shaped like a crawl-source record: transcript under `rawSource`,
/// beats spread over a fast path and an analysis block.
#[allow(dead_code)]
pub fn crawl_metadata() -> ValueTree {
    tree(json!({
        "rawSource": {
            "platform": "youtube",
            "transcript": "Stop scrolling. Here is why. The one trick is batching. Subscribe for more."
        },
        "scriptComponents": [
            { "type": "hook", "content": "Stop scrolling." },
            { "type": "bridge", "label": "Setup", "content": "Here is why." }
        ],
        "analysis": {
            "goldenNugget": "The one trick is batching.",
            "cta": { "text": "Subscribe for more." }
        },
        "metrics": { "readability": 8.0, "engagement": 7.0, "hookStrength": 9.0 }
    }))
}

#[allow(dead_code)]
pub fn item(id: &str, url: Option<&str>, platform: Option<&str>, metadata: ValueTree) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: format!("Item {id}"),
        platform: platform.map(str::to_string),
        url: url.map(str::to_string),
        metadata,
    }
}
