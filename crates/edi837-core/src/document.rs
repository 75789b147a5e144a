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

//! Envelope structure of a decoded interchange.
//!
//! One ISA…IEA interchange owns functional groups (GS…GE), which own
//! transaction sets (ST…SE), which own the flat segment list and the
//! reconstructed HL forest. All entities are created within one parse
//! invocation and immutable once it returns.

use crate::claims::Claim;
use crate::delimiters::Delimiters;
use crate::hierarchy::Forest;
use crate::segment::Segment;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One ST…SE envelope: an 837 transaction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransactionSet {
    /// ST01: transaction set identifier code (837 for claims).
    pub id_code: String,
    /// ST02: transaction set control number.
    pub control_number: String,
    /// BHT03: originator reference, empty when no BHT present.
    pub reference: String,
    /// BHT04: transaction creation date.
    pub date: String,
    /// BHT06: transaction type code.
    pub transaction_type: String,
    /// Flat ordered segment list, ST through SE inclusive.
    pub segments: Vec<Segment>,
    /// The reconstructed HL forest.
    pub hierarchy: Forest,
}

impl TransactionSet {
    /// All claims owned by this transaction's hierarchy, in node order.
    pub fn claims(&self) -> impl Iterator<Item = &Claim> {
        self.hierarchy.nodes.iter().flat_map(|n| n.claims.iter())
    }
}

/// One GS…GE envelope inside an interchange.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FunctionalGroup {
    /// GS01: functional identifier code (HC for claims).
    pub functional_id_code: String,
    /// GS02: application sender code.
    pub sender_code: String,
    /// GS03: application receiver code.
    pub receiver_code: String,
    /// GS04: date.
    pub date: String,
    /// GS05: time.
    pub time: String,
    /// GS06: group control number.
    pub control_number: String,
    /// GS08: version/release/industry identifier.
    pub version: String,
    /// Transaction sets in envelope order.
    pub transaction_sets: Vec<TransactionSet>,
}

/// One ISA…IEA envelope: the whole decoded interchange.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Interchange {
    /// ISA05: sender id qualifier.
    pub sender_id_qualifier: String,
    /// ISA06: sender id, padding trimmed.
    pub sender_id: String,
    /// ISA07: receiver id qualifier.
    pub receiver_id_qualifier: String,
    /// ISA08: receiver id, padding trimmed.
    pub receiver_id: String,
    /// ISA09: interchange date.
    pub date: String,
    /// ISA10: interchange time.
    pub time: String,
    /// ISA12: interchange control version.
    pub version: String,
    /// ISA13: interchange control number.
    pub control_number: String,
    /// ISA15: test/production usage indicator.
    pub usage_indicator: String,
    /// The delimiter set the interchange was decoded with.
    pub delimiters: Delimiters,
    /// Functional groups in envelope order.
    pub functional_groups: Vec<FunctionalGroup>,
    /// The complete flat segment list, envelopes included.
    pub segments: Vec<Segment>,
}

impl Interchange {
    /// All transaction sets across all groups, in envelope order.
    pub fn transaction_sets(&self) -> impl Iterator<Item = &TransactionSet> {
        self.functional_groups
            .iter()
            .flat_map(|g| g.transaction_sets.iter())
    }

    /// All claims across the whole interchange.
    pub fn claims(&self) -> impl Iterator<Item = &Claim> {
        self.transaction_sets().flat_map(|ts| ts.claims())
    }

    /// Total number of decoded segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_interchange() -> Interchange {
        Interchange {
            sender_id_qualifier: "ZZ".into(),
            sender_id: "SENDER".into(),
            receiver_id_qualifier: "ZZ".into(),
            receiver_id: "RECEIVER".into(),
            date: "240101".into(),
            time: "1230".into(),
            version: "00501".into(),
            control_number: "000000001".into(),
            usage_indicator: "P".into(),
            delimiters: Delimiters {
                element: '*',
                sub_element: Some(':'),
                repetition: Some('^'),
                terminator: '~',
            },
            functional_groups: Vec::new(),
            segments: Vec::new(),
        }
    }

    #[test]
    fn test_empty_interchange_has_no_claims() {
        let ic = empty_interchange();
        assert_eq!(ic.claims().count(), 0);
        assert_eq!(ic.transaction_sets().count(), 0);
        assert_eq!(ic.segment_count(), 0);
    }

    #[test]
    fn test_transaction_sets_flattens_groups() {
        let mut ic = empty_interchange();
        let ts = TransactionSet {
            id_code: "837".into(),
            control_number: "0001".into(),
            reference: String::new(),
            date: String::new(),
            transaction_type: String::new(),
            segments: Vec::new(),
            hierarchy: Forest::default(),
        };
        ic.functional_groups.push(FunctionalGroup {
            functional_id_code: "HC".into(),
            sender_code: "S".into(),
            receiver_code: "R".into(),
            date: "20240101".into(),
            time: "1230".into(),
            control_number: "1".into(),
            version: "005010X222A1".into(),
            transaction_sets: vec![ts.clone(), ts],
        });
        assert_eq!(ic.transaction_sets().count(), 2);
    }
}
