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

//! Static segment schema registry.
//!
//! A read-only mapping from segment identifier (and 1-based element
//! position) to semantic field metadata. Built once per process and shared
//! by all parse invocations without locking; it contains no parsing logic.
//! Unknown identifiers and positions resolve to sentinel entries rather
//! than failing.

use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Sentinel field name for segments absent from the registry.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Sentinel field name for positions beyond a known segment's table.
pub const UNKNOWN_POSITION: &str = "Unknown field";

/// Metadata for one element position within a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// 1-based element position.
    pub position: usize,
    /// Semantic field name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether the implementation guides mark the field as required.
    pub required: bool,
}

/// Metadata for one segment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentDef {
    /// Segment identifier.
    pub id: &'static str,
    /// Segment name.
    pub name: &'static str,
    /// Minimum element count before a segment is flagged malformed.
    pub min_elements: usize,
    /// Ordered field definitions (may cover fewer positions than occur).
    pub fields: &'static [FieldDef],
}

const fn field(position: usize, name: &'static str, description: &'static str) -> FieldDef {
    FieldDef {
        position,
        name,
        description,
        required: false,
    }
}

const fn required(position: usize, name: &'static str, description: &'static str) -> FieldDef {
    FieldDef {
        position,
        name,
        description,
        required: true,
    }
}

const ISA_FIELDS: &[FieldDef] = &[
    required(1, "Authorization Information Qualifier", "Code identifying the type of information in the Authorization Information"),
    required(2, "Authorization Information", "Information used for additional identification or authorization"),
    required(3, "Security Information Qualifier", "Code identifying the type of information in the Security Information"),
    required(4, "Security Information", "Information identifying the security information about the interchange sender"),
    required(5, "Interchange ID Qualifier", "Qualifier for the code structure used to designate the sender"),
    required(6, "Interchange Sender ID", "Identification code published by the sender for other parties to use"),
    required(7, "Interchange ID Qualifier", "Qualifier for the code structure used to designate the receiver"),
    required(8, "Interchange Receiver ID", "Identification code published by the receiver for other parties to use"),
    required(9, "Interchange Date", "Date of the interchange"),
    required(10, "Interchange Time", "Time of the interchange"),
    required(11, "Repetition Separator", "Delimiter used to separate repeated occurrences of an element"),
    required(12, "Interchange Control Version Number", "Version number of the interchange control structure"),
    required(13, "Interchange Control Number", "Control number assigned by the interchange sender"),
    required(14, "Acknowledgment Requested", "Code requesting an interchange acknowledgment"),
    required(15, "Interchange Usage Indicator", "Whether the enclosed data is test, production or information"),
    required(16, "Component Element Separator", "Delimiter used to separate component data elements"),
];

const GS_FIELDS: &[FieldDef] = &[
    required(1, "Functional ID Code", "Code identifying a group of application related transaction sets"),
    required(2, "Application Sender Code", "Code identifying party sending transmission"),
    required(3, "Application Receiver Code", "Code identifying party receiving transmission"),
    required(4, "Date", "Date expressed as CCYYMMDD"),
    required(5, "Time", "Time expressed in 24-hour clock time"),
    required(6, "Group Control Number", "Assigned number originated and maintained by the sender"),
    required(7, "Responsible Agency Code", "Code identifying the issuer of the standard"),
    required(8, "Version / Release / Industry ID Code", "Version, release, subrelease and industry identifier"),
];

const ST_FIELDS: &[FieldDef] = &[
    required(1, "Transaction Set ID Code", "Code uniquely identifying a Transaction Set"),
    required(2, "Transaction Set Control Number", "Control number unique within the functional group"),
    field(3, "Implementation Convention Reference", "Reference identifying a specific implementation convention"),
];

const BHT_FIELDS: &[FieldDef] = &[
    required(1, "Hierarchical Structure Code", "Hierarchical application structure of the transaction set"),
    required(2, "Transaction Set Purpose Code", "Code identifying purpose of transaction set"),
    field(3, "Reference Identification", "Reference information as defined for the Transaction Set"),
    field(4, "Date", "Date expressed as CCYYMMDD"),
    field(5, "Time", "Time expressed in 24-hour clock time"),
    field(6, "Transaction Type Code", "Code specifying the type of transaction"),
];

const NM1_FIELDS: &[FieldDef] = &[
    required(1, "Entity ID Code", "Code identifying an organizational entity, location or individual"),
    required(2, "Entity Type Qualifier", "Code qualifying the entity as person or non-person"),
    field(3, "Name Last or Organization Name", "Individual last name or organizational name"),
    field(4, "Name First", "Individual first name"),
    field(5, "Name Middle", "Individual middle name or initial"),
    field(6, "Name Prefix", "Prefix to individual name"),
    field(7, "Name Suffix", "Suffix to individual name"),
    field(8, "ID Code Qualifier", "Code structure used for the Identification Code"),
    field(9, "ID Code", "Code identifying a party or other code"),
];

const HL_FIELDS: &[FieldDef] = &[
    required(1, "Hierarchical ID Number", "Unique number assigned to this hierarchical level"),
    field(2, "Hierarchical Parent ID Number", "ID of the hierarchical level this level is subordinate to"),
    required(3, "Hierarchical Level Code", "Code defining the characteristic of this level"),
    field(4, "Hierarchical Child Code", "Whether subordinate levels exist below this level"),
];

const CLM_FIELDS: &[FieldDef] = &[
    required(1, "Claim Submitter Identifier", "Unique claim identifier assigned by the claim submitter"),
    required(2, "Monetary Amount", "Total claim charge amount"),
    field(3, "Claim Filing Indicator Code", "Code identifying the type of claim"),
    field(4, "Non-Institutional Claim Type Code", "Type of claim for non-institutional providers"),
    field(5, "Health Care Service Location Information", "Location where healthcare services were provided"),
    field(6, "Provider Accept Assignment Code", "Whether the provider accepts assignment"),
    field(7, "Assignment Claim Participation Code", "Provider participation in assignment"),
    field(8, "Benefits Assignment Certification Indicator", "Benefits assignment certification"),
    field(9, "Release of Information Code", "Release of information"),
];

const DTP_FIELDS: &[FieldDef] = &[
    required(1, "Date Time Qualifier", "Type of date or time, or both date and time"),
    required(2, "Date Time Period Format Qualifier", "Format of the date, time, or date and time"),
    required(3, "Date Time Period", "A date, a time, or a range of dates and times"),
];

const HI_FIELDS: &[FieldDef] = &[
    required(1, "Health Care Code Information", "Code information for health care diagnosis or procedure"),
];

const SV1_FIELDS: &[FieldDef] = &[
    required(1, "Procedure Code", "Procedure code and modifiers"),
    required(2, "Monetary Amount", "Line item charge amount"),
    field(3, "Unit of Measure Code", "Units in which a value is being expressed"),
    field(4, "Service Unit Count", "Number of units of service"),
    field(5, "Place of Service Code", "Place where the service was performed"),
    field(6, "Service Type Code", "Type of service"),
    field(7, "Composite Diagnosis Code Pointer", "Reference to diagnosis codes"),
];

const SE_FIELDS: &[FieldDef] = &[
    required(1, "Number of Included Segments", "Count of segments including ST and SE"),
    required(2, "Transaction Set Control Number", "Control number matching the ST segment"),
];

const GE_FIELDS: &[FieldDef] = &[
    required(1, "Number of Transaction Sets Included", "Count of transaction sets in the group"),
    required(2, "Group Control Number", "Control number matching the GS segment"),
];

const IEA_FIELDS: &[FieldDef] = &[
    required(1, "Number of Included Functional Groups", "Count of functional groups in the interchange"),
    required(2, "Interchange Control Number", "Control number matching the ISA segment"),
];

const NO_FIELDS: &[FieldDef] = &[];

const SEGMENT_DEFS: &[SegmentDef] = &[
    SegmentDef { id: "ISA", name: "Interchange Control Header", min_elements: 16, fields: ISA_FIELDS },
    SegmentDef { id: "GS", name: "Functional Group Header", min_elements: 8, fields: GS_FIELDS },
    SegmentDef { id: "ST", name: "Transaction Set Header", min_elements: 2, fields: ST_FIELDS },
    SegmentDef { id: "BHT", name: "Beginning of Hierarchical Transaction", min_elements: 6, fields: BHT_FIELDS },
    SegmentDef { id: "NM1", name: "Individual or Organizational Name", min_elements: 3, fields: NM1_FIELDS },
    SegmentDef { id: "N3", name: "Party Location", min_elements: 1, fields: NO_FIELDS },
    SegmentDef { id: "N4", name: "Geographic Location", min_elements: 1, fields: NO_FIELDS },
    SegmentDef { id: "REF", name: "Reference Information", min_elements: 2, fields: NO_FIELDS },
    SegmentDef { id: "PER", name: "Administrative Communications Contact", min_elements: 2, fields: NO_FIELDS },
    SegmentDef { id: "HL", name: "Hierarchical Level", min_elements: 3, fields: HL_FIELDS },
    SegmentDef { id: "PRV", name: "Provider Information", min_elements: 3, fields: NO_FIELDS },
    SegmentDef { id: "SBR", name: "Subscriber Information", min_elements: 1, fields: NO_FIELDS },
    SegmentDef { id: "PAT", name: "Patient Information", min_elements: 1, fields: NO_FIELDS },
    SegmentDef { id: "CLM", name: "Claim Information", min_elements: 2, fields: CLM_FIELDS },
    SegmentDef { id: "DTP", name: "Date or Time or Period", min_elements: 3, fields: DTP_FIELDS },
    SegmentDef { id: "CL1", name: "Institutional Claim Code", min_elements: 1, fields: NO_FIELDS },
    SegmentDef { id: "PWK", name: "Paperwork", min_elements: 2, fields: NO_FIELDS },
    SegmentDef { id: "CN1", name: "Contract Information", min_elements: 1, fields: NO_FIELDS },
    SegmentDef { id: "AMT", name: "Monetary Amount Information", min_elements: 2, fields: NO_FIELDS },
    SegmentDef { id: "HI", name: "Health Care Diagnosis Code", min_elements: 1, fields: HI_FIELDS },
    SegmentDef { id: "LX", name: "Transaction Set Line Number", min_elements: 1, fields: NO_FIELDS },
    SegmentDef { id: "SV1", name: "Professional Service", min_elements: 2, fields: SV1_FIELDS },
    SegmentDef { id: "SV2", name: "Institutional Service Line", min_elements: 2, fields: NO_FIELDS },
    SegmentDef { id: "SV3", name: "Dental Service", min_elements: 2, fields: NO_FIELDS },
    SegmentDef { id: "SE", name: "Transaction Set Trailer", min_elements: 2, fields: SE_FIELDS },
    SegmentDef { id: "GE", name: "Functional Group Trailer", min_elements: 2, fields: GE_FIELDS },
    SegmentDef { id: "IEA", name: "Interchange Control Trailer", min_elements: 2, fields: IEA_FIELDS },
];

/// The process-wide segment schema registry.
#[derive(Debug)]
pub struct SchemaRegistry {
    by_id: BTreeMap<&'static str, &'static SegmentDef>,
}

impl SchemaRegistry {
    fn build() -> Self {
        let mut by_id = BTreeMap::new();
        for def in SEGMENT_DEFS {
            by_id.insert(def.id, def);
        }
        Self { by_id }
    }

    /// Look up a segment definition by identifier.
    pub fn segment(&self, id: &str) -> Option<&'static SegmentDef> {
        self.by_id.get(id).copied()
    }

    /// Whether the identifier is known to the registry.
    pub fn is_known(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Segment name, or a sentinel for unknown identifiers.
    pub fn segment_name(&self, id: &str) -> &'static str {
        self.segment(id).map(|d| d.name).unwrap_or("Unknown segment")
    }

    /// Minimum expected element count, if the identifier is known.
    pub fn min_elements(&self, id: &str) -> Option<usize> {
        self.segment(id).map(|d| d.min_elements)
    }

    /// Field definition for a 1-based element position.
    pub fn field(&self, id: &str, position: usize) -> Option<&'static FieldDef> {
        self.segment(id)?
            .fields
            .iter()
            .find(|f| f.position == position)
    }

    /// Field name for a 1-based element position.
    ///
    /// Unknown segment identifiers resolve to [`UNKNOWN_FIELD`]; known
    /// segments with positions beyond their table resolve to
    /// [`UNKNOWN_POSITION`].
    pub fn field_name(&self, id: &str, position: usize) -> &'static str {
        match self.segment(id) {
            None => UNKNOWN_FIELD,
            Some(def) => def
                .fields
                .iter()
                .find(|f| f.position == position)
                .map(|f| f.name)
                .unwrap_or(UNKNOWN_POSITION),
        }
    }
}

/// The shared registry, initialized on first use and read-only thereafter.
pub fn registry() -> &'static SchemaRegistry {
    static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SchemaRegistry::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Lookup tests ====================

    #[test]
    fn test_registry_knows_envelope_segments() {
        let r = registry();
        for id in ["ISA", "GS", "ST", "SE", "GE", "IEA"] {
            assert!(r.is_known(id), "registry missing {}", id);
        }
    }

    #[test]
    fn test_registry_knows_claim_segments() {
        let r = registry();
        for id in ["HL", "NM1", "CLM", "DTP", "HI", "SV1", "SBR", "PAT"] {
            assert!(r.is_known(id), "registry missing {}", id);
        }
    }

    #[test]
    fn test_segment_name() {
        assert_eq!(registry().segment_name("CLM"), "Claim Information");
        assert_eq!(registry().segment_name("HL"), "Hierarchical Level");
    }

    #[test]
    fn test_unknown_segment_name_is_sentinel() {
        assert_eq!(registry().segment_name("ZZZ"), "Unknown segment");
        assert!(!registry().is_known("ZZZ"));
    }

    #[test]
    fn test_field_name_known_position() {
        assert_eq!(
            registry().field_name("CLM", 1),
            "Claim Submitter Identifier"
        );
        assert_eq!(registry().field_name("CLM", 2), "Monetary Amount");
        assert_eq!(registry().field_name("NM1", 3), "Name Last or Organization Name");
    }

    #[test]
    fn test_field_name_unknown_segment_is_unknown() {
        assert_eq!(registry().field_name("ZZZ", 1), UNKNOWN_FIELD);
    }

    #[test]
    fn test_field_name_unknown_position_is_unknown_field() {
        assert_eq!(registry().field_name("CLM", 99), UNKNOWN_POSITION);
        // Known segment with no field table at all
        assert_eq!(registry().field_name("REF", 1), UNKNOWN_POSITION);
    }

    #[test]
    fn test_min_elements() {
        assert_eq!(registry().min_elements("ISA"), Some(16));
        assert_eq!(registry().min_elements("NM1"), Some(3));
        assert_eq!(registry().min_elements("CLM"), Some(2));
        assert_eq!(registry().min_elements("ZZZ"), None);
    }

    #[test]
    fn test_field_required_flags() {
        assert!(registry().field("NM1", 1).unwrap().required);
        assert!(!registry().field("NM1", 4).unwrap().required);
        assert!(registry().field("ISA", 16).unwrap().required);
    }

    #[test]
    fn test_field_positions_are_one_based_and_ordered() {
        for def in SEGMENT_DEFS {
            for (i, f) in def.fields.iter().enumerate() {
                assert_eq!(f.position, i + 1, "field table for {} out of order", def.id);
            }
        }
    }

    #[test]
    fn test_registry_is_shared() {
        let a = registry() as *const SchemaRegistry;
        let b = registry() as *const SchemaRegistry;
        assert_eq!(a, b);
    }
}
