use serde::{Deserialize, Serialize};

/// Tunable knobs of the engine. `Default` carries the production values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineParameters {
    /// Upper bound on container nodes visited by a single traversal.
    pub max_candidate_nodes: usize,
    /// Word count at or above which content without a readability metric
    /// is described as detailed.
    pub long_content_words: u32,
    /// Streaming-CDN hosts whose URLs are already embeddable.
    pub passthrough_hosts: Vec<String>,
    /// Hosts that refuse third-party iframe playback.
    pub blocked_hosts: Vec<String>,
}

impl Default for EngineParameters {
    fn default() -> Self {
        Self {
            max_candidate_nodes: 10_000,
            long_content_words: 600,
            passthrough_hosts: vec![
                "videodelivery.net".to_string(),
                "cloudflarestream.com".to_string(),
            ],
            blocked_hosts: vec!["tiktok.com".to_string(), "instagram.com".to_string()],
        }
    }
}

