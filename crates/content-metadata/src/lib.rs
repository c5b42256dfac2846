//! Metadata normalization for creator-dashboard content items.
//!
//! Content items carry an opaque metadata tree whose shape depends on the
//! upstream source that produced it. This crate extracts a transcript, a
//! deduplicated list of script beats and a performance grade from such trees,
//! and rewrites source URLs into safe iframe sources. Extraction never fails:
//! missing or unexpected structure yields empty results.

pub mod collector;
pub mod embed;
pub mod error;
pub mod normalization;
pub mod params;
pub mod pipeline;
pub mod scoring;
pub mod script;
pub mod transcript;
pub mod types;
pub mod value;

pub use error::MetadataError;
pub use params::EngineParameters;
pub use types::{
    ComponentType, ContentItem, Grade, NormalizedContent, PerformanceGrade, PerformanceMetrics,
    ScriptComponent,
};
pub use value::ValueTree;
