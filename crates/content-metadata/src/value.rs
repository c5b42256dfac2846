use std::sync::Arc;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MetadataError, Result};

/// Ordered key/value pairs of a mapping node. Insertion order is preserved.
pub type Entries = Vec<(String, ValueTree)>;

/// Semi-structured metadata node with no assumed schema.
///
/// Sequence and mapping payloads are reference counted: cloning a node shares
/// the sub-tree, and the payload address is the node's identity. Two parents
/// holding a clone of the same node therefore point at one sub-tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ValueTree {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Seq(Arc<Vec<ValueTree>>),
    Map(Arc<Entries>),
}

impl ValueTree {
    /// Build a mapping node from key/value pairs, keeping their order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ValueTree>,
        I: IntoIterator<Item = (K, V)>,
    {
        ValueTree::Map(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Build a sequence node.
    pub fn seq<V, I>(items: I) -> Self
    where
        V: Into<ValueTree>,
        I: IntoIterator<Item = V>,
    {
        ValueTree::Seq(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Decode a JSON document. Object key order is preserved.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(value.into())
    }

    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(json)?;
        Ok(value.into())
    }

    /// Decode a CBOR document as shipped by some ingestion pipelines.
    pub fn from_cbor_slice(bytes: &[u8]) -> Result<Self> {
        let value: ciborium::Value = ciborium::de::from_reader(bytes)
            .map_err(|e| MetadataError::Cbor(e.to_string()))?;
        Ok(value.into())
    }

    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            ValueTree::Null => "null",
            ValueTree::Bool(_) => "bool",
            ValueTree::Number(_) => "number",
            ValueTree::Text(_) => "text",
            ValueTree::Seq(_) => "sequence",
            ValueTree::Map(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ValueTree::Null)
    }

    /// True for mapping and sequence nodes.
    pub fn is_container(&self) -> bool {
        matches!(self, ValueTree::Seq(_) | ValueTree::Map(_))
    }

    /// Identity of a container node (address of its shared payload).
    /// Scalars have no identity.
    pub fn node_id(&self) -> Option<usize> {
        match self {
            ValueTree::Seq(items) => Some(Arc::as_ptr(items) as usize),
            ValueTree::Map(entries) => Some(Arc::as_ptr(entries) as usize),
            _ => None,
        }
    }

    /// First value stored under `key` if this is a mapping.
    pub fn get(&self, key: &str) -> Option<&ValueTree> {
        match self {
            ValueTree::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Follow a chain of mapping keys.
    pub fn path(&self, keys: &[&str]) -> Option<&ValueTree> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn entries(&self) -> &[(String, ValueTree)] {
        match self {
            ValueTree::Map(entries) => entries,
            _ => &[],
        }
    }

    pub fn items(&self) -> &[ValueTree] {
        match self {
            ValueTree::Seq(items) => items,
            _ => &[],
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ValueTree::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Finite numeric value; numeric text such as `"7.5"` is accepted.
    pub fn as_f64(&self) -> Option<f64> {
        let n = match self {
            ValueTree::Number(n) => *n,
            ValueTree::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(n)
    }
}

impl From<&str> for ValueTree {
    fn from(s: &str) -> Self {
        ValueTree::Text(s.to_string())
    }
}

impl From<String> for ValueTree {
    fn from(s: String) -> Self {
        ValueTree::Text(s)
    }
}

impl From<f64> for ValueTree {
    fn from(n: f64) -> Self {
        ValueTree::Number(n)
    }
}

impl From<i64> for ValueTree {
    fn from(n: i64) -> Self {
        ValueTree::Number(n as f64)
    }
}

impl From<bool> for ValueTree {
    fn from(b: bool) -> Self {
        ValueTree::Bool(b)
    }
}

impl From<Vec<ValueTree>> for ValueTree {
    fn from(items: Vec<ValueTree>) -> Self {
        ValueTree::Seq(Arc::new(items))
    }
}

impl From<serde_json::Value> for ValueTree {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => ValueTree::Null,
            Value::Bool(b) => ValueTree::Bool(b),
            Value::Number(n) => n.as_f64().map(ValueTree::Number).unwrap_or_default(),
            Value::String(s) => ValueTree::Text(s),
            Value::Array(items) => ValueTree::seq(items),
            Value::Object(map) => ValueTree::map(map),
        }
    }
}

impl From<ciborium::Value> for ValueTree {
    fn from(value: ciborium::Value) -> Self {
        use ciborium::Value;
        match value {
            Value::Null => ValueTree::Null,
            Value::Bool(b) => ValueTree::Bool(b),
            Value::Integer(i) => ValueTree::Number(i128::from(i) as f64),
            Value::Float(f) => ValueTree::Number(f),
            Value::Text(s) => ValueTree::Text(s),
            Value::Tag(_, inner) => (*inner).into(),
            Value::Array(items) => ValueTree::seq(items),
            Value::Map(pairs) => ValueTree::map(
                pairs
                    .into_iter()
                    .filter_map(|(k, v)| cbor_key(k).map(|k| (k, v))),
            ),
            _ => ValueTree::Null,
        }
    }
}

/// Render a CBOR map key as text. Keys that have no sensible text form are dropped.
fn cbor_key(key: ciborium::Value) -> Option<String> {
    use ciborium::Value;
    match key {
        Value::Text(s) => Some(s),
        Value::Integer(i) => Some(i128::from(i).to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tag(_, inner) => cbor_key(*inner),
        _ => None,
    }
}

impl Serialize for ValueTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ValueTree::Null => serializer.serialize_unit(),
            ValueTree::Bool(b) => serializer.serialize_bool(*b),
            ValueTree::Number(n) => serializer.serialize_f64(*n),
            ValueTree::Text(s) => serializer.serialize_str(s),
            ValueTree::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ValueTree::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ValueTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(ValueTree::from)
    }
}
