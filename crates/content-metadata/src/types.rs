use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::ValueTree;

/// A content item as handed over by the dashboard. The engine only reads it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub metadata: ValueTree,
}

/// Kind of script beat.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    #[default]
    Hook,
    Bridge,
    GoldenNugget,
    CallToAction,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Hook => "hook",
            ComponentType::Bridge => "bridge",
            ComponentType::GoldenNugget => "golden_nugget",
            ComponentType::CallToAction => "call_to_action",
        }
    }

    /// Label shown when the source entry carries none.
    pub fn display_label(&self) -> &'static str {
        match self {
            ComponentType::Hook => "Hook",
            ComponentType::Bridge => "Bridge",
            ComponentType::GoldenNugget => "Golden Nugget",
            ComponentType::CallToAction => "Call to Action",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tagged segment of a content item's script.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub label: String,
    pub content: String,
}

/// Optional quality metrics, each conventionally on a 0-10 scale.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub readability: Option<f64>,
    pub engagement: Option<f64>,
    pub hook_strength: Option<f64>,
}

/// Letter grade derived from the average metric score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Grade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceGrade {
    pub grade: Grade,
    pub summary: String,
    pub average_score: Option<f64>,
}

/// Everything the presentation layer renders for one content item.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedContent {
    pub transcript: String,
    pub script_components: Vec<ScriptComponent>,
    pub embed_src: String,
    pub performance: PerformanceGrade,
}
