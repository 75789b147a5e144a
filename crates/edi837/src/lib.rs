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

//! # edi837 - EDI X12 837 (5010) claim decoder
//!
//! A tolerant decoder for X12 837 health care claim interchanges. It detects
//! delimiters from the ISA header, tokenizes segments, reconstructs the HL
//! hierarchy, assembles claims, and derives presentation-ready views
//! (summary table, flattened elements, tree, statistics).
//!
//! ## Quick Start
//!
//! ```rust
//! use edi837::{parse_document, to_json_string};
//!
//! let input = "ISA*00*          *00*          *ZZ*SENDER         *ZZ*RECEIVER       \
//!              *240101*1230*^*00501*000000001*0*P*:~\
//!              GS*HC*SENDER*RECEIVER*20240101*1230*1*X*005010X222A1~\
//!              ST*837*0001~HL*1**20*0~NM1*85*2*ACME CLINIC~\
//!              SE*4*0001~GE*1*1~IEA*1*000000001~";
//!
//! // Decode the interchange and materialize all views
//! let result = parse_document(input);
//! assert!(result.success);
//!
//! // Export the full result as JSON
//! let json = to_json_string(&result).expect("Failed to serialize");
//! assert!(json.contains("ACME CLINIC"));
//! ```
//!
//! ## Tolerance Model
//!
//! Only two conditions abort a parse: input with no usable ISA header and
//! exceeded resource limits. Everything else (malformed segments, orphan HL
//! levels, unknown segment identifiers, envelope trailer mismatches) is
//! recorded as a [`Warning`] and the decoded portion is kept.
//!
//! ## Modules
//!
//! - [`core`](mod@core): Decoding pipeline and data model
//! - [`json`]: JSON export of parse results

// Re-export core types
pub use edi837_core::{
    // Entry points
    parse as core_parse,
    parse_document,
    parse_document_with_options,
    parse_with_options,
    // Document model
    Claim,
    Delimiters,
    EdiError,
    EdiErrorKind,
    EdiResult,
    Element,
    FlatElementRow,
    Forest,
    FunctionalGroup,
    HierarchicalNode,
    Interchange,
    Limits,
    ParseOptions,
    ParseOptionsBuilder,
    ParseResult,
    Parsed,
    Segment,
    ServiceLine,
    Statistics,
    SummaryRow,
    TransactionSet,
    TreeNode,
    Warning,
    WarningKind,
};

// Error handling extensions
mod error_ext;
pub use error_ext::EdiResultExt;

// Re-export the full decoding pipeline
pub mod core {
    //! Decoding pipeline and data model
    pub use edi837_core::*;
}

// Re-export JSON conversion
pub mod json {
    //! JSON export utilities
    pub use edi837_json::{to_json, to_json_string, to_json_string_pretty};
}

// Convenience functions at crate root

/// Decode an 837 interchange from a string.
///
/// Returns the decoded interchange with accumulated warnings, or a fatal
/// error when the input carries no usable ISA header. For the full external
/// contract with projections, use [`parse_document`].
///
/// # Examples
///
/// ```rust
/// use edi837::parse;
///
/// assert!(parse("no interchange here").is_err());
/// ```
#[inline]
pub fn parse(input: &str) -> EdiResult<Parsed> {
    core_parse(input)
}

/// Serialize a parse result to a compact JSON string.
#[inline]
pub fn to_json_string(result: &ParseResult) -> EdiResult<String> {
    edi837_json::to_json_string(result)
}

/// Serialize a parse result to a pretty-printed JSON string.
#[inline]
pub fn to_json_string_pretty(result: &ParseResult) -> EdiResult<String> {
    edi837_json::to_json_string_pretty(result)
}

/// Check whether a string decodes without fatal errors.
///
/// Recoverable anomalies do not fail validation; use [`parse`] to inspect
/// warnings.
#[inline]
pub fn validate(input: &str) -> EdiResult<()> {
    parse(input).map(|_| ())
}

/// X12 implementation guide version this library targets.
pub const SUPPORTED_VERSION: &str = "005010X222A1";

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
