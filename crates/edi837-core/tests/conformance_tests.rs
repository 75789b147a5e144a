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

//! End-to-end behavior of the 837 decoder across its documented
//! guarantees: round-trip fidelity, idempotence, hierarchy integrity,
//! partial tolerance and fatal error classification.

use edi837_core::{
    parse, parse_document, EdiErrorKind, EntityClass, WarningKind,
};

const ISA: &str = "ISA*00*          *00*          *ZZ*SENDER         *ZZ*RECEIVER       \
                   *240101*1230*^*00501*000000001*0*P*:~";

fn doc(body: &str) -> String {
    format!(
        "{}GS*HC*SENDER*RECEIVER*20240101*1230*1*X*005010X222A1~{}GE*1*1~IEA*1*000000001~",
        ISA, body
    )
}

// =============================================================================
// Round-trip and idempotence
// =============================================================================

#[test]
fn rejoined_segments_reproduce_original_content() {
    let input = doc("ST*837*0001~HL*1**20*1~NM1*85*2*ACME~CLM*A1*100~SE*5*0001~");
    let parsed = parse(&input).unwrap();
    let terminator = parsed.interchange.delimiters.terminator;
    let rejoined: String = parsed
        .interchange
        .segments
        .iter()
        .map(|s| format!("{}{}", s.raw, terminator))
        .collect();
    assert_eq!(rejoined, input);
}

#[test]
fn parsing_twice_yields_identical_results() {
    let input = doc("ST*837*0001~HL*1**20*1~NM1*85*2*ACME~CLM*A1*100~HI*ABK:E119~SE*6*0001~");
    assert_eq!(parse(&input).unwrap(), parse(&input).unwrap());
    assert_eq!(parse_document(&input), parse_document(&input));
}

// =============================================================================
// Hierarchy integrity
// =============================================================================

#[test]
fn every_parent_resolves_or_node_is_flagged_orphan() {
    let input = doc(
        "ST*837*0001~HL*1**20*1~HL*2*1*22*0~HL*7*9*22*0~SE*5*0001~",
    );
    let parsed = parse(&input).unwrap();
    let ts = parsed.interchange.transaction_sets().next().unwrap();
    let forest = &ts.hierarchy;

    for (id, node) in forest.nodes.iter().enumerate() {
        if node.parent_hl_id.is_empty() {
            continue;
        }
        let parent_exists = forest.nodes.iter().any(|n| n.hl_id == node.parent_hl_id);
        let is_orphan_root = forest.roots.contains(&id);
        assert!(
            parent_exists || is_orphan_root,
            "node {} silently dropped",
            node.hl_id
        );
    }
    assert!(parsed
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::OrphanHierarchy));
}

// =============================================================================
// Envelope-only input
// =============================================================================

#[test]
fn envelope_only_input_parses_with_empty_claims() {
    let input = doc("ST*837*0001~SE*2*0001~");
    let result = parse_document(&input);
    assert!(result.success);
    let interchange = result.interchange.unwrap();
    assert_eq!(interchange.claims().count(), 0);
    assert_eq!(result.statistics.claim_count, 0);
    assert_eq!(result.statistics.hierarchy_depth, 0);
}

// =============================================================================
// Reference document from the interface contract
// =============================================================================

#[test]
fn reference_claim_document_resolves_fully() {
    let input = format!(
        "{}GS*HC*SENDER*RECEIVER*20240101*1230*1*X*005010X222A1~\
         ST*837*0001~HL*1**20*1~NM1*85*2*ACME CLINIC*****XX*1234567890~\
         CLM*A37YH665*500***11:B:1~SE*5*0001~GE*1*1~IEA*1*000000001~",
        ISA
    );
    let parsed = parse(&input).unwrap();
    let ts = parsed.interchange.transaction_sets().next().unwrap();

    assert_eq!(ts.hierarchy.roots.len(), 1);
    let root = ts.hierarchy.node(ts.hierarchy.roots[0]).unwrap();
    assert_eq!(root.level_code, "20");
    assert_eq!(root.entity_type, "85");
    assert_eq!(root.entity_class, EntityClass::Provider);
    assert_eq!(root.name, "ACME CLINIC");
    assert_eq!(root.claims.len(), 1);
    assert_eq!(root.claims[0].id, "A37YH665");
    assert_eq!(root.claims[0].amount, "500");
}

// =============================================================================
// Unknown segments
// =============================================================================

#[test]
fn unknown_segment_flows_through_without_failing() {
    let input = doc("ST*837*0001~ZZZ*A*B~SE*3*0001~");
    let result = parse_document(&input);
    assert!(result.success);
    assert_eq!(result.statistics.unknown_segment_count, 1);

    let zzz_rows: Vec<_> = result
        .flattened_elements
        .iter()
        .filter(|r| r.segment_id == "ZZZ")
        .collect();
    assert_eq!(zzz_rows.len(), 2);
    assert!(zzz_rows.iter().all(|r| r.field_name == "Unknown"));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("UnknownSegmentWarning")));
}

// =============================================================================
// Fatal errors
// =============================================================================

#[test]
fn short_header_fails_with_format_error_and_empty_projections() {
    let result = parse_document("ISA*00*short");
    assert!(!result.success);
    assert!(result.error.unwrap().contains("FormatError"));
    assert!(result.summary.is_empty());
    assert!(result.flattened_elements.is_empty());
    assert!(result.tree.is_none());
    assert!(result.interchange.is_none());
}

#[test]
fn missing_isa_fails_with_empty_input_error() {
    let err = parse("GS*HC*S*R*20240101*1230*1*X*005010~").unwrap_err();
    assert_eq!(err.kind, EdiErrorKind::EmptyInput);
}

// =============================================================================
// Hierarchy depth bound
// =============================================================================

#[test]
fn deeply_chained_hierarchy_is_a_limit_error() {
    let mut body = String::from("ST*837*0001~HL*1**20*1~");
    for n in 2..=50_000usize {
        body.push_str(&format!("HL*{}*{}*23*1~", n, n - 1));
    }
    body.push_str("SE*50002*0001~");

    let result = parse_document(&doc(&body));
    assert!(!result.success);
    assert!(result.error.unwrap().contains("LimitError"));
    assert!(result.interchange.is_none());
    assert!(result.tree.is_none());
}

// =============================================================================
// Partial tolerance
// =============================================================================

#[test]
fn malformed_segment_is_kept_and_warned() {
    let input = doc("ST*837*0001~HL*1**20*1~NM1*85~CLM*A1*100~SE*5*0001~");
    let parsed = parse(&input).unwrap();
    let ts = parsed.interchange.transaction_sets().next().unwrap();

    let nm1 = ts.segments.iter().find(|s| s.id == "NM1").unwrap();
    assert!(nm1.malformed);
    assert!(parsed
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::SegmentShape));
    // Claim assembly still works around the malformed NM1
    assert_eq!(parsed.interchange.claims().count(), 1);
}

#[test]
fn warnings_do_not_affect_success() {
    let input = doc("ST*837*0001~ZZZ*X~NM1*85~HL*3*9*22*0~SE*5*0001~");
    let result = parse_document(&input);
    assert!(result.success);
    assert!(result.warnings.len() >= 3);
}
