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

//! Projections over a decoded interchange.
//!
//! Pure functions deriving the summary table, flattened element table,
//! hierarchy tree and coverage statistics from a [`Parsed`] value. None of
//! them mutate the document; all can be recomputed repeatedly from the same
//! parse.

use std::collections::BTreeMap;

use crate::codes::{
    entity_qualifier_description, entity_type_description, hierarchy_level_description,
    id_qualifier_description, interchange_id_qualifier_description, usage_indicator_description,
};
use crate::document::Interchange;
use crate::error::EdiError;
use crate::hierarchy::{Forest, HierarchicalNode, NodeId};
use crate::parser::{parse_with_options, ParseOptions, Parsed};
use crate::schema::registry;
use crate::segment::{Element, Segment};

#[cfg(feature = "serde")]
use serde::Serialize;

/// One row of the fixed-order summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SummaryRow {
    /// Summary section (e.g. `Interchange Control`, `Claim 1`).
    pub section: String,
    /// Field label within the section.
    pub field: String,
    /// Resolved value.
    pub value: String,
}

/// One row of the flattened element table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FlatElementRow {
    /// Segment identifier.
    pub segment_id: String,
    /// 1-based segment position.
    pub segment_position: usize,
    /// 1-based element index within the segment.
    pub element_index: usize,
    /// Field name resolved from the schema registry.
    pub field_name: String,
    /// Raw element value, composites re-joined.
    pub value: String,
    /// Field description from the schema registry, when the position is known.
    pub description: Option<String>,
    /// Decoded meaning of recognized code values (ISA/NM1 qualifiers,
    /// HL level codes), when the position carries one.
    pub interpreted: Option<String>,
}

/// One node of the nested tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TreeNode {
    /// Node kind (`interchange`, `group`, `transaction`, `level`, `segment`).
    pub kind: String,
    /// Display label.
    pub label: String,
    /// Child nodes.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(kind: &str, label: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            label: label.into(),
            children: Vec::new(),
        }
    }
}

/// Coverage and volume statistics over one parse.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Statistics {
    /// Occurrences per segment identifier.
    pub segment_counts: BTreeMap<String, usize>,
    /// Segments whose identifier failed to resolve against the registry.
    pub unknown_segment_count: usize,
    /// Percentage of segments whose identifier resolved against the registry.
    pub recognized_percent: f64,
    /// Maximum HL nesting depth across all transaction sets.
    pub hierarchy_depth: usize,
    /// Total number of HL roots across all transaction sets.
    pub hierarchy_breadth: usize,
    /// Number of warnings accumulated during the parse.
    pub warning_count: usize,
    /// Total number of claims.
    pub claim_count: usize,
    /// Total number of SV1 service lines.
    pub service_line_count: usize,
    /// Sum of numeric CLM02 amounts.
    pub total_claim_amount: f64,
    /// Average numeric claim amount, 0 when no claims.
    pub average_claim_amount: f64,
    /// Sum of numeric SV102 charges.
    pub total_service_amount: f64,
    /// Required fields that are blank or absent in recognized segments.
    pub missing_required_count: usize,
    /// Percentage of elements carrying a non-blank value.
    pub element_population_rate: f64,
}

/// The complete external parse contract consumed by presentation layers.
///
/// Shape does not depend on `success`: a failed parse carries the error
/// message and empty projections.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParseResult {
    /// Whether the parse completed.
    pub success: bool,
    /// Fatal error message when `success` is false.
    pub error: Option<String>,
    /// Human-readable warnings, in the order they were recorded.
    pub warnings: Vec<String>,
    /// The decoded interchange, when parsing reached that point.
    pub interchange: Option<Interchange>,
    /// Summary table rows.
    pub summary: Vec<SummaryRow>,
    /// Flattened element table rows.
    pub flattened_elements: Vec<FlatElementRow>,
    /// Nested tree view.
    pub tree: Option<TreeNode>,
    /// Coverage statistics.
    pub statistics: Statistics,
}

/// Parse a document and materialize all projections.
///
/// This is the one-call entry point for presentation layers; callers that
/// want to recompute views on demand can use [`crate::parse`] and the
/// individual projection functions instead.
pub fn parse_document(text: &str) -> ParseResult {
    parse_document_with_options(text, &ParseOptions::default())
}

/// [`parse_document`] with explicit options.
pub fn parse_document_with_options(text: &str, options: &ParseOptions) -> ParseResult {
    match parse_with_options(text, options) {
        Ok(parsed) => ParseResult {
            success: true,
            error: None,
            warnings: parsed.warnings.iter().map(|w| w.to_string()).collect(),
            summary: summary_table(&parsed),
            flattened_elements: flattened_table(&parsed),
            tree: Some(tree_view(&parsed)),
            statistics: statistics(&parsed),
            interchange: Some(parsed.interchange),
        },
        Err(error) => ParseResult::from_error(&error),
    }
}

impl ParseResult {
    fn from_error(error: &EdiError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            warnings: Vec::new(),
            interchange: None,
            summary: Vec::new(),
            flattened_elements: Vec::new(),
            tree: None,
            statistics: Statistics::default(),
        }
    }
}

/// Build the fixed-order summary table: interchange envelope, submitter,
/// billing provider, subscriber, first claim. Paths that resolved to
/// nothing are omitted.
pub fn summary_table(parsed: &Parsed) -> Vec<SummaryRow> {
    let ic = &parsed.interchange;
    let mut rows = Vec::new();
    let mut push = |section: &str, field: &str, value: &str| {
        if !value.is_empty() {
            rows.push(SummaryRow {
                section: section.to_string(),
                field: field.to_string(),
                value: value.to_string(),
            });
        }
    };

    push("Interchange Control", "Sender ID", &ic.sender_id);
    push("Interchange Control", "Receiver ID", &ic.receiver_id);
    push("Interchange Control", "Date", &ic.date);
    push("Interchange Control", "Version", &ic.version);

    if let Some(submitter) = first_nm1_name(&ic.segments, "41") {
        push("Submitter", "Name", &submitter);
    }

    if let Some(node) = find_entity(ic, "85") {
        push("Billing Provider", "Name", &node.name);
        if let Some(desc) = entity_type_description(&node.entity_type) {
            push("Billing Provider", "Entity Type", desc);
        }
        push("Billing Provider", "ID", &labeling_nm1_id(node));
    }
    if let Some(node) = find_entity(ic, "IL") {
        push("Subscriber", "Name", &node.name);
        push("Subscriber", "ID", &labeling_nm1_id(node));
    }

    if let Some(claim) = ic.claims().next() {
        push("Claim 1", "Claim ID", &claim.id);
        push("Claim 1", "Claim Amount", &claim.amount);
        push("Claim 1", "Place of Service", &claim.place_of_service);
    }

    rows
}

fn find_entity<'a>(ic: &'a Interchange, entity_type: &str) -> Option<&'a HierarchicalNode> {
    ic.transaction_sets()
        .find_map(|ts| ts.hierarchy.find_by_entity(entity_type))
}

/// NM109 identification code of the node's labeling NM1, with the NM108
/// qualifier appended when present. Empty when the node has no id code.
fn labeling_nm1_id(node: &HierarchicalNode) -> String {
    let Some(nm1) = node.segments.iter().find(|s| s.id == "NM1") else {
        return String::new();
    };
    let code = nm1.value(9);
    let qualifier = nm1.value(8);
    if code.is_empty() {
        String::new()
    } else if qualifier.is_empty() {
        code.to_string()
    } else {
        format!("{} ({})", code, qualifier)
    }
}

fn first_nm1_name(segments: &[Segment], entity_type: &str) -> Option<String> {
    let nm1 = segments
        .iter()
        .find(|s| s.id == "NM1" && s.value(1) == entity_type)?;
    let last_or_org = nm1.value(3);
    let first = nm1.value(4);
    let name = if first.is_empty() {
        last_or_org.to_string()
    } else {
        format!("{} {}", first, last_or_org)
    };
    (!name.is_empty()).then_some(name)
}

/// Build the flattened element table: one row per element, in segment order.
pub fn flattened_table(parsed: &Parsed) -> Vec<FlatElementRow> {
    let sub = parsed.interchange.delimiters.sub_element.unwrap_or(':');
    let mut rows = Vec::new();
    for segment in &parsed.interchange.segments {
        for (i, element) in segment.elements.iter().enumerate() {
            let index = i + 1;
            rows.push(FlatElementRow {
                segment_id: segment.id.clone(),
                segment_position: segment.position,
                element_index: index,
                field_name: registry().field_name(&segment.id, index).to_string(),
                value: element.display(sub),
                description: registry()
                    .field(&segment.id, index)
                    .map(|f| f.description.to_string()),
                interpreted: interpret_code(&segment.id, index, element.head())
                    .map(str::to_string),
            });
        }
    }
    rows
}

/// Decoded meaning for element positions that carry well-known codes.
fn interpret_code(segment_id: &str, index: usize, value: &str) -> Option<&'static str> {
    match (segment_id, index) {
        ("ISA", 5) | ("ISA", 7) => interchange_id_qualifier_description(value),
        ("ISA", 15) => usage_indicator_description(value),
        ("NM1", 1) => entity_type_description(value),
        ("NM1", 2) => entity_qualifier_description(value),
        ("NM1", 8) => id_qualifier_description(value),
        ("HL", 3) => hierarchy_level_description(value),
        _ => None,
    }
}

/// Build the nested Interchange→Group→TransactionSet→HL→Segment tree view.
pub fn tree_view(parsed: &Parsed) -> TreeNode {
    let ic = &parsed.interchange;
    let mut root = TreeNode::new(
        "interchange",
        format!("Interchange {} ({} -> {})", ic.control_number, ic.sender_id, ic.receiver_id),
    );

    for group in &ic.functional_groups {
        let label = if group.control_number.is_empty() {
            "Functional Group".to_string()
        } else {
            format!("Functional Group {}", group.control_number)
        };
        let mut group_node = TreeNode::new("group", label);

        for ts in &group.transaction_sets {
            let label = if ts.control_number.is_empty() {
                format!("Transaction Set {}", ts.id_code)
            } else {
                format!("Transaction Set {} {}", ts.id_code, ts.control_number)
            };
            let mut ts_node = TreeNode::new("transaction", label.trim().to_string());
            for &node_id in &ts.hierarchy.roots {
                ts_node.children.push(level_node(&ts.hierarchy, node_id));
            }
            group_node.children.push(ts_node);
        }
        root.children.push(group_node);
    }

    root
}

fn level_node(forest: &Forest, id: NodeId) -> TreeNode {
    let node = &forest.nodes[id];
    let level = hierarchy_level_description(&node.level_code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Level {}", node.level_code));
    let label = if node.name.is_empty() {
        format!("HL {} - {}", node.hl_id, level)
    } else {
        format!("HL {} - {}: {}", node.hl_id, level, node.name)
    };
    let mut tree = TreeNode::new("level", label);
    for segment in &node.segments {
        tree.children
            .push(TreeNode::new("segment", segment.raw.clone()));
    }
    for &child in &node.children {
        tree.children.push(level_node(forest, child));
    }
    tree
}

/// Compute coverage statistics for one parse.
pub fn statistics(parsed: &Parsed) -> Statistics {
    let ic = &parsed.interchange;
    let mut stats = Statistics {
        warning_count: parsed.warnings.len(),
        ..Statistics::default()
    };

    let mut recognized = 0usize;
    let mut total_elements = 0usize;
    let mut populated_elements = 0usize;
    for segment in &ic.segments {
        *stats.segment_counts.entry(segment.id.clone()).or_insert(0) += 1;
        match registry().segment(&segment.id) {
            Some(def) => {
                recognized += 1;
                for field in def.fields.iter().filter(|f| f.required) {
                    // A composite counts as present even when its parts are
                    // blank (ISA16 is the sub-element separator itself).
                    let missing = match segment.element(field.position) {
                        None => true,
                        Some(Element::Value(v)) => v.is_empty(),
                        Some(Element::Composite(_)) => false,
                    };
                    if missing {
                        stats.missing_required_count += 1;
                    }
                }
            }
            None => stats.unknown_segment_count += 1,
        }
        total_elements += segment.elements.len();
        populated_elements += segment.elements.iter().filter(|e| !e.is_empty()).count();
    }
    if !ic.segments.is_empty() {
        stats.recognized_percent = recognized as f64 * 100.0 / ic.segments.len() as f64;
    }
    if total_elements > 0 {
        stats.element_population_rate =
            populated_elements as f64 * 100.0 / total_elements as f64;
    }

    for ts in ic.transaction_sets() {
        stats.hierarchy_depth = stats.hierarchy_depth.max(ts.hierarchy.depth());
        stats.hierarchy_breadth += ts.hierarchy.breadth();
    }

    for claim in ic.claims() {
        stats.claim_count += 1;
        if let Some(amount) = claim.amount_value() {
            stats.total_claim_amount += amount;
        }
        for line in &claim.service_lines {
            stats.service_line_count += 1;
            if let Ok(charge) = line.charge.trim().parse::<f64>() {
                stats.total_service_amount += charge;
            }
        }
    }
    if stats.claim_count > 0 {
        stats.average_claim_amount = stats.total_claim_amount / stats.claim_count as f64;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const ISA: &str = "ISA*00*          *00*          *ZZ*SENDER         *ZZ*RECEIVER       \
                       *240101*1230*^*00501*000000001*0*P*:~";

    fn doc(body: &str) -> String {
        format!(
            "{}GS*HC*SENDER*RECEIVER*20240101*1230*1*X*005010X222A1~{}GE*1*1~IEA*1*000000001~",
            ISA, body
        )
    }

    fn full_doc() -> String {
        doc(
            "ST*837*0001~BHT*0019*00*REF1*20240101*1200*CH~NM1*41*2*SUBMIT CO*****46*123~\
             HL*1**20*1~NM1*85*2*ACME CLINIC*****XX*1234567890~\
             HL*2*1*22*0~SBR*P~NM1*IL*1*DOE*JANE****MI*MEM1~\
             CLM*A37YH665*500***11:B:1~DTP*431*D8*20240101~HI*ABK:E119~\
             SV1*HC:99213*125.00*UN*1~SV1*HC:85025*375.00*UN*1~SE*14*0001~",
        )
    }

    // ==================== Summary ====================

    #[test]
    fn test_summary_fixed_sections() {
        let parsed = parse(&full_doc()).unwrap();
        let rows = summary_table(&parsed);
        let sections: Vec<&str> = rows.iter().map(|r| r.section.as_str()).collect();
        assert!(sections.contains(&"Interchange Control"));
        assert!(sections.contains(&"Submitter"));
        assert!(sections.contains(&"Billing Provider"));
        assert!(sections.contains(&"Subscriber"));
        assert!(sections.contains(&"Claim 1"));
    }

    #[test]
    fn test_summary_values() {
        let parsed = parse(&full_doc()).unwrap();
        let rows = summary_table(&parsed);
        let find = |section: &str, field: &str| {
            rows.iter()
                .find(|r| r.section == section && r.field == field)
                .map(|r| r.value.as_str())
        };
        assert_eq!(find("Interchange Control", "Sender ID"), Some("SENDER"));
        assert_eq!(find("Submitter", "Name"), Some("SUBMIT CO"));
        assert_eq!(find("Billing Provider", "Name"), Some("ACME CLINIC"));
        assert_eq!(find("Billing Provider", "ID"), Some("1234567890 (XX)"));
        assert_eq!(find("Subscriber", "Name"), Some("JANE DOE"));
        assert_eq!(find("Subscriber", "ID"), Some("MEM1 (MI)"));
        assert_eq!(find("Claim 1", "Claim ID"), Some("A37YH665"));
        assert_eq!(find("Claim 1", "Claim Amount"), Some("500"));
        assert_eq!(find("Claim 1", "Place of Service"), Some("11"));
    }

    #[test]
    fn test_summary_omits_empty_paths() {
        let parsed = parse(&doc("ST*837*0001~SE*2*0001~")).unwrap();
        let rows = summary_table(&parsed);
        assert!(rows.iter().all(|r| !r.value.is_empty()));
        assert!(!rows.iter().any(|r| r.section == "Claim 1"));
        assert!(!rows.iter().any(|r| r.section == "Billing Provider"));
    }

    // ==================== Flattened elements ====================

    #[test]
    fn test_flattened_covers_every_element() {
        let parsed = parse(&doc("ST*837*0001~SE*2*0001~")).unwrap();
        let rows = flattened_table(&parsed);
        let expected: usize = parsed
            .interchange
            .segments
            .iter()
            .map(|s| s.elements.len())
            .sum();
        assert_eq!(rows.len(), expected);
    }

    #[test]
    fn test_flattened_resolves_field_names() {
        let parsed = parse(&doc("ST*837*0001~SE*2*0001~")).unwrap();
        let rows = flattened_table(&parsed);
        let st01 = rows
            .iter()
            .find(|r| r.segment_id == "ST" && r.element_index == 1)
            .unwrap();
        assert_eq!(st01.field_name, "Transaction Set ID Code");
        assert_eq!(st01.value, "837");
    }

    #[test]
    fn test_flattened_unknown_segment_field_is_unknown() {
        let parsed = parse(&doc("ST*837*0001~ZZZ*X~SE*3*0001~")).unwrap();
        let rows = flattened_table(&parsed);
        let row = rows_for(&rows, "ZZZ");
        assert_eq!(row[0].field_name, "Unknown");
        assert_eq!(row[0].value, "X");
    }

    fn rows_for<'a>(rows: &'a [FlatElementRow], id: &str) -> Vec<&'a FlatElementRow> {
        rows.iter().filter(|r| r.segment_id == id).collect()
    }

    #[test]
    fn test_flattened_interprets_known_codes() {
        let parsed = parse(&full_doc()).unwrap();
        let rows = flattened_table(&parsed);
        let submitter = rows
            .iter()
            .find(|r| r.segment_id == "NM1" && r.element_index == 1 && r.value == "41")
            .unwrap();
        assert_eq!(submitter.interpreted.as_deref(), Some("Submitter"));
        let usage = rows
            .iter()
            .find(|r| r.segment_id == "ISA" && r.element_index == 15)
            .unwrap();
        assert_eq!(usage.interpreted.as_deref(), Some("Production Data"));
        let level = rows
            .iter()
            .find(|r| r.segment_id == "HL" && r.element_index == 3 && r.value == "22")
            .unwrap();
        assert_eq!(level.interpreted.as_deref(), Some("Subscriber"));
    }

    #[test]
    fn test_flattened_carries_field_descriptions() {
        let parsed = parse(&doc("ST*837*0001~ZZZ*X~SE*3*0001~")).unwrap();
        let rows = flattened_table(&parsed);
        let st01 = rows
            .iter()
            .find(|r| r.segment_id == "ST" && r.element_index == 1)
            .unwrap();
        assert_eq!(
            st01.description.as_deref(),
            Some("Code uniquely identifying a Transaction Set")
        );
        let zzz = &rows_for(&rows, "ZZZ")[0];
        assert!(zzz.description.is_none());
        assert!(zzz.interpreted.is_none());
    }

    #[test]
    fn test_flattened_rejoins_composites() {
        let parsed = parse(&full_doc()).unwrap();
        let rows = flattened_table(&parsed);
        assert!(rows
            .iter()
            .any(|r| r.segment_id == "CLM" && r.value == "11:B:1"));
    }

    // ==================== Tree ====================

    #[test]
    fn test_tree_mirrors_envelope_nesting() {
        let parsed = parse(&full_doc()).unwrap();
        let tree = tree_view(&parsed);
        assert_eq!(tree.kind, "interchange");
        assert_eq!(tree.children.len(), 1);
        let group = &tree.children[0];
        assert_eq!(group.kind, "group");
        let ts = &group.children[0];
        assert_eq!(ts.kind, "transaction");
        // One HL root under the transaction
        let levels: Vec<&TreeNode> =
            ts.children.iter().filter(|c| c.kind == "level").collect();
        assert_eq!(levels.len(), 1);
        assert!(levels[0].label.contains("ACME CLINIC"));
        // Subscriber level nested under the billing provider level
        assert!(levels[0]
            .children
            .iter()
            .any(|c| c.kind == "level" && c.label.contains("JANE DOE")));
    }

    #[test]
    fn test_tree_includes_segment_leaves() {
        let parsed = parse(&full_doc()).unwrap();
        let tree = tree_view(&parsed);
        fn collect<'a>(node: &'a TreeNode, out: &mut Vec<&'a TreeNode>) {
            if node.kind == "segment" {
                out.push(node);
            }
            for child in &node.children {
                collect(child, out);
            }
        }
        let mut leaves = Vec::new();
        collect(&tree, &mut leaves);
        assert!(leaves.iter().any(|l| l.label.starts_with("CLM*A37YH665")));
    }

    // ==================== Statistics ====================

    #[test]
    fn test_statistics_segment_counts() {
        let parsed = parse(&full_doc()).unwrap();
        let stats = statistics(&parsed);
        assert_eq!(stats.segment_counts.get("SV1"), Some(&2));
        assert_eq!(stats.segment_counts.get("HL"), Some(&2));
        assert_eq!(stats.unknown_segment_count, 0);
        assert!((stats.recognized_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_statistics_unknown_segment() {
        let parsed = parse(&doc("ST*837*0001~ZZZ*X~SE*3*0001~")).unwrap();
        let stats = statistics(&parsed);
        assert_eq!(stats.unknown_segment_count, 1);
        assert!(stats.recognized_percent < 100.0);
    }

    #[test]
    fn test_statistics_hierarchy_shape() {
        let parsed = parse(&full_doc()).unwrap();
        let stats = statistics(&parsed);
        assert_eq!(stats.hierarchy_depth, 2);
        assert_eq!(stats.hierarchy_breadth, 1);
    }

    #[test]
    fn test_statistics_claim_financials() {
        let parsed = parse(&full_doc()).unwrap();
        let stats = statistics(&parsed);
        assert_eq!(stats.claim_count, 1);
        assert_eq!(stats.service_line_count, 2);
        assert!((stats.total_claim_amount - 500.0).abs() < f64::EPSILON);
        assert!((stats.average_claim_amount - 500.0).abs() < f64::EPSILON);
        assert!((stats.total_service_amount - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_statistics_missing_required_fields() {
        let parsed = parse(&full_doc()).unwrap();
        assert_eq!(statistics(&parsed).missing_required_count, 0);

        // NM1 drops its required entity type qualifier (NM102)
        let parsed = parse(&doc("ST*837*0001~NM1*85~SE*3*0001~")).unwrap();
        assert_eq!(statistics(&parsed).missing_required_count, 1);
    }

    #[test]
    fn test_statistics_warning_count() {
        let parsed = parse(&doc("ST*837*0001~ZZZ*X~NM1*85~SE*4*0001~")).unwrap();
        let stats = statistics(&parsed);
        assert_eq!(stats.warning_count, parsed.warnings.len());
        assert!(stats.warning_count >= 2);
    }

    // ==================== ParseResult ====================

    #[test]
    fn test_parse_document_success() {
        let result = parse_document(&full_doc());
        assert!(result.success);
        assert!(result.error.is_none());
        assert!(result.interchange.is_some());
        assert!(result.tree.is_some());
        assert!(!result.summary.is_empty());
        assert!(!result.flattened_elements.is_empty());
    }

    #[test]
    fn test_parse_document_failure_shape() {
        let result = parse_document("ISA*too short");
        assert!(!result.success);
        let error = result.error.unwrap();
        assert!(error.contains("FormatError"));
        assert!(result.interchange.is_none());
        assert!(result.summary.is_empty());
        assert!(result.flattened_elements.is_empty());
        assert!(result.tree.is_none());
        assert_eq!(result.statistics, Statistics::default());
    }

    #[test]
    fn test_projections_are_recomputable() {
        let parsed = parse(&full_doc()).unwrap();
        assert_eq!(summary_table(&parsed), summary_table(&parsed));
        assert_eq!(flattened_table(&parsed), flattened_table(&parsed));
        assert_eq!(tree_view(&parsed), tree_view(&parsed));
        assert_eq!(statistics(&parsed), statistics(&parsed));
    }
}
