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

//! Code-interpretation tables.
//!
//! Pure lookups decoding the two-character codes that pepper an 837:
//! NM1 entity roles, ISA qualifiers, id-code qualifiers. No parsing logic.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Broad classification of an NM1 entity role within the claim hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum EntityClass {
    /// Billing, pay-to, referring, primary-care or rendering provider.
    Provider,
    /// Insured or subscriber.
    Subscriber,
    /// Patient.
    Patient,
    /// Payer.
    Payer,
    /// Submitter or receiver of the transmission.
    Exchange,
    /// Code not recognized; kept verbatim.
    Unclassified,
}

/// Entity type code (NM101) description, `None` when unrecognized.
pub fn entity_type_description(code: &str) -> Option<&'static str> {
    match code {
        "40" => Some("Receiver"),
        "41" => Some("Submitter"),
        "85" => Some("Billing Provider"),
        "87" => Some("Pay-to Provider"),
        "IL" => Some("Insured or Subscriber"),
        "QC" => Some("Patient"),
        "PR" => Some("Payer"),
        "DN" => Some("Referring Provider"),
        "P3" => Some("Primary Care Provider"),
        "82" => Some("Rendering Provider"),
        _ => None,
    }
}

/// Classify an entity type code into its hierarchy role.
pub fn classify_entity(code: &str) -> EntityClass {
    match code {
        "85" | "87" | "DN" | "P3" | "82" => EntityClass::Provider,
        "IL" => EntityClass::Subscriber,
        "QC" => EntityClass::Patient,
        "PR" => EntityClass::Payer,
        "40" | "41" => EntityClass::Exchange,
        _ => EntityClass::Unclassified,
    }
}

/// Entity type qualifier (NM102): person vs non-person entity.
pub fn entity_qualifier_description(code: &str) -> Option<&'static str> {
    match code {
        "1" => Some("Person"),
        "2" => Some("Non-Person Entity"),
        _ => None,
    }
}

/// Identification code qualifier (NM108).
pub fn id_qualifier_description(code: &str) -> Option<&'static str> {
    match code {
        "XX" => Some("Health Care Financing Administration National Provider Identifier"),
        "PI" => Some("Payor Identification"),
        "MI" => Some("Member Identification Number"),
        "EI" => Some("Employer Identification Number"),
        "46" => Some("Electronic Transmitter Identification Number"),
        _ => None,
    }
}

/// Interchange ID qualifier (ISA05/ISA07).
pub fn interchange_id_qualifier_description(code: &str) -> Option<&'static str> {
    match code {
        "ZZ" => Some("Mutually Defined"),
        "01" => Some("Duns (Dun & Bradstreet)"),
        "14" => Some("Duns Plus Suffix"),
        "20" => Some("Health Industry Number"),
        "27" => Some("Carrier Identification Number"),
        "28" => Some("Fiscal Intermediary Identification Number"),
        "29" => Some("Medicare Provider and Supplier Identification Number"),
        "30" => Some("U.S. Federal Tax Identification Number"),
        _ => None,
    }
}

/// Interchange usage indicator (ISA15).
pub fn usage_indicator_description(code: &str) -> Option<&'static str> {
    match code {
        "T" => Some("Test Data"),
        "P" => Some("Production Data"),
        "I" => Some("Information"),
        _ => None,
    }
}

/// Hierarchical level code (HL03) description.
pub fn hierarchy_level_description(code: &str) -> Option<&'static str> {
    match code {
        "20" => Some("Information Source (Billing Provider)"),
        "22" => Some("Subscriber"),
        "23" => Some("Dependent (Patient)"),
        _ => None,
    }
}
