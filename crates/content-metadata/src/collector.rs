//! Candidate sub-tree collection shared by the transcript and script extractors.

use std::collections::HashSet;

use crate::params::EngineParameters;
use crate::value::ValueTree;

/// Children of the metadata root that are searched as traversal roots of their own.
pub const ROOT_ACCESSORS: &[&str] = &["contentMetadata", "rawSource", "analysis", "metrics"];

/// Collect every distinct mapping/sequence node reachable from the metadata
/// root and its well-known children, in depth-first pre-order.
pub fn collect_candidates(metadata: &ValueTree) -> Vec<&ValueTree> {
    collect_candidates_with(metadata, &EngineParameters::default())
}

/// Same as [`collect_candidates`], bounded by `params.max_candidate_nodes`.
///
/// Nodes are deduplicated by identity, so a sub-tree shared between several
/// parents (or a root accessor that is also a descendant of the root) is
/// returned once. Scalars are never returned.
pub fn collect_candidates_with<'a>(
    metadata: &'a ValueTree,
    params: &EngineParameters,
) -> Vec<&'a ValueTree> {
    let roots = std::iter::once(metadata)
        .chain(ROOT_ACCESSORS.iter().filter_map(|key| metadata.get(key)));
    let mut stack: Vec<&ValueTree> = roots.collect();
    stack.reverse();

    let mut visited = HashSet::new();
    let mut candidates = Vec::new();

    while let Some(node) = stack.pop() {
        let Some(id) = node.node_id() else {
            continue;
        };
        if !visited.insert(id) {
            continue;
        }
        if candidates.len() >= params.max_candidate_nodes {
            tracing::warn!(
                "metadata traversal stopped at {} nodes",
                params.max_candidate_nodes
            );
            break;
        }
        candidates.push(node);

        // Reverse push keeps document order on pop.
        match node {
            ValueTree::Seq(items) => {
                stack.extend(items.iter().rev().filter(|v| v.is_container()));
            }
            ValueTree::Map(entries) => {
                stack.extend(
                    entries
                        .iter()
                        .rev()
                        .map(|(_, v)| v)
                        .filter(|v| v.is_container()),
                );
            }
            _ => {}
        }
    }

    tracing::trace!("collected {} candidate nodes", candidates.len());
    candidates
}
