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

//! Claim assembly within a hierarchical node's segment bag.
//!
//! Every CLM segment opens a new claim scope; DTP/HI/SV1 segments up to the
//! next CLM (or the end of the bag) attach to that scope. A node may own
//! zero or more claims, in segment order.

use crate::segment::{Element, Segment};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A qualifier + code pair from an HI sub-element group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DiagnosisCode {
    /// Code list qualifier (e.g. `ABK`, `ABF`).
    pub qualifier: String,
    /// Diagnosis code.
    pub code: String,
}

/// A date attached to a claim scope (DTP).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClaimDate {
    /// DTP01: date/time qualifier.
    pub qualifier: String,
    /// DTP02: period format qualifier.
    pub format: String,
    /// DTP03: the date or period itself, verbatim.
    pub value: String,
}

/// A professional service line (SV1). Values stay opaque strings beyond the
/// sub-element split already applied by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ServiceLine {
    /// SV101: procedure code composite, rendered as text.
    pub procedure: String,
    /// SV102: line item charge amount.
    pub charge: String,
    /// SV103: unit of measure code.
    pub unit_basis: String,
    /// SV104: service unit count.
    pub units: String,
    /// SV105: place of service code.
    pub place_of_service: String,
}

/// One assembled claim record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Claim {
    /// CLM01: claim submitter identifier.
    pub id: String,
    /// CLM02: total claim charge amount, verbatim.
    pub amount: String,
    /// Head of the CLM05 service-location composite.
    pub place_of_service: String,
    /// Diagnosis codes from HI segments in scope.
    pub diagnoses: Vec<DiagnosisCode>,
    /// Dates from DTP segments in scope.
    pub dates: Vec<ClaimDate>,
    /// Service lines from SV1 segments in scope.
    pub service_lines: Vec<ServiceLine>,
}

impl Claim {
    fn open(clm: &Segment) -> Self {
        Self {
            id: clm.value(1).to_string(),
            amount: clm.value(2).to_string(),
            place_of_service: clm.value(5).to_string(),
            diagnoses: Vec::new(),
            dates: Vec::new(),
            service_lines: Vec::new(),
        }
    }

    /// The claim amount parsed as a number, when it is one.
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.trim().parse().ok()
    }
}

/// Group a node's segment bag into ordered claim records.
pub fn assemble(bag: &[Segment]) -> Vec<Claim> {
    let mut claims: Vec<Claim> = Vec::new();

    for segment in bag {
        match segment.id.as_str() {
            "CLM" => claims.push(Claim::open(segment)),
            "DTP" => {
                if let Some(claim) = claims.last_mut() {
                    claim.dates.push(ClaimDate {
                        qualifier: segment.value(1).to_string(),
                        format: segment.value(2).to_string(),
                        value: segment.value(3).to_string(),
                    });
                }
            }
            "HI" => {
                if let Some(claim) = claims.last_mut() {
                    for element in &segment.elements {
                        if let Some(diagnosis) = diagnosis_from(element) {
                            claim.diagnoses.push(diagnosis);
                        }
                    }
                }
            }
            "SV1" => {
                if let Some(claim) = claims.last_mut() {
                    claim.service_lines.push(ServiceLine {
                        procedure: segment
                            .element(1)
                            .map(|e| e.display(':'))
                            .unwrap_or_default(),
                        charge: segment.value(2).to_string(),
                        unit_basis: segment.value(3).to_string(),
                        units: segment.value(4).to_string(),
                        place_of_service: segment.value(5).to_string(),
                    });
                }
            }
            _ => {}
        }
    }

    claims
}

// Accepts both tokenizer-split composites and unsplit "qualifier:code" text
// left behind by an inconclusive sub-element separator.
fn diagnosis_from(element: &Element) -> Option<DiagnosisCode> {
    match element {
        Element::Composite(parts) if parts.len() >= 2 => Some(DiagnosisCode {
            qualifier: parts[0].clone(),
            code: parts[1].clone(),
        }),
        Element::Value(v) => {
            let (qualifier, code) = v.split_once(':')?;
            Some(DiagnosisCode {
                qualifier: qualifier.to_string(),
                code: code.to_string(),
            })
        }
        _ => None,
    }
}
