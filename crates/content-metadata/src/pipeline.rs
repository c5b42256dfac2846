use crate::embed::resolve_embed_url_with;
use crate::normalization::word_count;
use crate::params::EngineParameters;
use crate::script::extract_script_components_with;
use crate::scoring::derive_score_with;
use crate::transcript::extract_transcript_with;
use crate::types::{ContentItem, NormalizedContent, PerformanceMetrics};

/// Run every extractor for one content item.
pub fn normalize_item(item: &ContentItem) -> NormalizedContent {
    normalize_item_with(&EngineParameters::default(), item)
}

/// Same as [`normalize_item`] with explicit parameters. The word count fed to
/// the score deriver comes from the resolved transcript.
pub fn normalize_item_with(params: &EngineParameters, item: &ContentItem) -> NormalizedContent {
    let transcript = extract_transcript_with(&item.metadata, params);
    let script_components = extract_script_components_with(&item.metadata, params);
    let embed_src =
        resolve_embed_url_with(params, item.url.as_deref(), item.platform.as_deref());

    let metrics = PerformanceMetrics::from_metadata(&item.metadata);
    let words = (!transcript.is_empty()).then(|| word_count(&transcript));
    let performance = derive_score_with(params, &metrics, words);

    tracing::debug!(
        "normalized item {}: transcript {} chars, {} components, embed {}, grade {}",
        item.id,
        transcript.len(),
        script_components.len(),
        if embed_src.is_empty() { "none" } else { "ok" },
        performance.grade
    );

    NormalizedContent {
        transcript,
        script_components,
        embed_src,
        performance,
    }
}
