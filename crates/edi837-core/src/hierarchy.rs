// edi837 - EDI X12 837 (5010) claim decoder
//
// Copyright (c) 2026 edi837 contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Hierarchical-level (HL) forest reconstruction.
//!
//! An 837 encodes its provider → subscriber → patient nesting implicitly:
//! each HL segment declares its own id, its parent's id and a level code,
//! and every segment that follows belongs to that level until the next HL.
//! This module recovers the explicit forest in one pass over the flat
//! segment stream.
//!
//! Nodes live in an arena (`Vec`) and refer to each other by index, so
//! parent/child relations are id references rather than ownership cycles.
//! A node whose declared parent is absent becomes an orphan root with a
//! warning; nothing is silently dropped.

use std::collections::BTreeMap;

use crate::claims::Claim;
use crate::codes::{classify_entity, EntityClass};
use crate::error::{EdiError, EdiResult};
use crate::limits::Limits;
use crate::segment::Segment;
use crate::warning::Warning;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Index of a node within its [`Forest`] arena.
pub type NodeId = usize;

/// One hierarchical level and its segment bag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HierarchicalNode {
    /// HL01: this node's hierarchical id.
    pub hl_id: String,
    /// HL02: the declared parent id; empty means root.
    pub parent_hl_id: String,
    /// HL03: level code (20 billing provider, 22 subscriber, 23 patient).
    pub level_code: String,
    /// HL04: whether subordinate levels were declared.
    pub child_code: String,
    /// Entity type code from the first NM1 in the bag, empty when absent.
    pub entity_type: String,
    /// Role classification of the entity type code.
    pub entity_class: EntityClass,
    /// Display name resolved from the first NM1 in the bag.
    pub name: String,
    /// Segments between this HL and the next, in order (HL itself included).
    pub segments: Vec<Segment>,
    /// Child nodes, as arena indices.
    pub children: Vec<NodeId>,
    /// Claims assembled within this node's scope.
    pub claims: Vec<Claim>,
}

impl HierarchicalNode {
    fn open(hl: &Segment) -> Self {
        Self {
            hl_id: hl.value(1).to_string(),
            parent_hl_id: hl.value(2).to_string(),
            level_code: hl.value(3).to_string(),
            child_code: hl.value(4).to_string(),
            entity_type: String::new(),
            entity_class: EntityClass::Unclassified,
            name: String::new(),
            segments: vec![hl.clone()],
            children: Vec::new(),
            claims: Vec::new(),
        }
    }

    /// Whether the node was declared as a root (empty parent id).
    pub fn is_declared_root(&self) -> bool {
        self.parent_hl_id.is_empty()
    }

    fn label_from(&mut self, nm1: &Segment) {
        self.entity_type = nm1.value(1).to_string();
        self.entity_class = classify_entity(&self.entity_type);
        let last_or_org = nm1.value(3);
        let first = nm1.value(4);
        self.name = if first.is_empty() {
            last_or_org.to_string()
        } else {
            format!("{} {}", first, last_or_org)
        };
    }
}

/// The reconstructed HL forest of one transaction set.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Forest {
    /// Node arena; `children`/`roots` hold indices into it.
    pub nodes: Vec<HierarchicalNode>,
    /// Root nodes: declared roots plus orphans.
    pub roots: Vec<NodeId>,
}

impl Forest {
    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node by arena index.
    pub fn node(&self, id: NodeId) -> Option<&HierarchicalNode> {
        self.nodes.get(id)
    }

    /// First node carrying the given level code, in arena order.
    pub fn find_by_level(&self, level_code: &str) -> Option<&HierarchicalNode> {
        self.nodes.iter().find(|n| n.level_code == level_code)
    }

    /// First node carrying the given entity type code, in arena order.
    pub fn find_by_entity(&self, entity_type: &str) -> Option<&HierarchicalNode> {
        self.nodes.iter().find(|n| n.entity_type == entity_type)
    }

    /// Maximum nesting depth; 0 for an empty forest.
    ///
    /// Traverses with an explicit worklist so chains as deep as the arena
    /// itself stay on the heap.
    pub fn depth(&self) -> usize {
        let mut max = 0usize;
        let mut seen = vec![false; self.nodes.len()];
        let mut stack: Vec<(NodeId, usize)> = self.roots.iter().map(|&r| (r, 1)).collect();
        while let Some((id, depth)) = stack.pop() {
            if seen[id] {
                continue;
            }
            seen[id] = true;
            max = max.max(depth);
            for &child in &self.nodes[id].children {
                stack.push((child, depth + 1));
            }
        }
        max
    }

    /// Number of roots (declared plus orphaned).
    pub fn breadth(&self) -> usize {
        self.roots.len()
    }
}

/// Reconstruct the HL forest from one transaction set's flat segment list.
///
/// Segments preceding the first HL belong to the transaction itself (BHT,
/// submitter/receiver NM1 loops) and are not attached to any node. The
/// first NM1 inside a node's bag labels the node's role and display name.
pub fn resolve(segments: &[Segment], limits: &Limits) -> EdiResult<(Forest, Vec<Warning>)> {
    let mut forest = Forest::default();
    let mut warnings = Vec::new();
    // HL id -> arena index; on duplicate ids the later node wins.
    let mut by_hl_id: BTreeMap<String, NodeId> = BTreeMap::new();
    // Nesting depth per arena index, maintained so the depth limit is
    // checked in O(1) as each node attaches.
    let mut depths: Vec<usize> = Vec::new();
    let mut current: Option<NodeId> = None;

    for segment in segments {
        if segment.id == "HL" {
            if forest.nodes.len() >= limits.max_hierarchy_nodes {
                return Err(EdiError::limit(format!(
                    "hierarchical node count exceeds limit of {}",
                    limits.max_hierarchy_nodes
                ))
                .at_position(segment.position));
            }

            let node = HierarchicalNode::open(segment);
            let id = forest.nodes.len();

            let depth = if node.is_declared_root() {
                forest.roots.push(id);
                1
            } else {
                match by_hl_id.get(&node.parent_hl_id) {
                    Some(&parent) => {
                        forest.nodes[parent].children.push(id);
                        depths[parent] + 1
                    }
                    None => {
                        warnings.push(
                            Warning::orphan_hierarchy(format!(
                                "HL {} declares unresolved parent {}; treating as root",
                                node.hl_id, node.parent_hl_id
                            ))
                            .at_position(segment.position),
                        );
                        forest.roots.push(id);
                        1
                    }
                }
            };
            if depth > limits.max_hierarchy_depth {
                return Err(EdiError::limit(format!(
                    "hierarchical nesting depth exceeds limit of {}",
                    limits.max_hierarchy_depth
                ))
                .at_position(segment.position));
            }
            depths.push(depth);

            if let Some(earlier) = by_hl_id.insert(node.hl_id.clone(), id) {
                let earlier_position = forest.nodes[earlier].segments[0].position;
                warnings.push(
                    Warning::duplicate_hierarchy_id(format!(
                        "HL id {} reused by a later segment; this level loses attachment",
                        node.hl_id
                    ))
                    .at_position(earlier_position),
                );
                warnings.push(
                    Warning::duplicate_hierarchy_id(format!(
                        "HL id {} already used by an earlier segment; later level wins attachment",
                        node.hl_id
                    ))
                    .at_position(segment.position),
                );
            }

            forest.nodes.push(node);
            current = Some(id);
        } else if let Some(id) = current {
            let node = &mut forest.nodes[id];
            if segment.id == "NM1" && node.entity_type.is_empty() && node.name.is_empty() {
                node.label_from(segment);
            }
            node.segments.push(segment.clone());
        }
    }

    Ok((forest, warnings))
}
