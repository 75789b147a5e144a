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

//! Core decoder and data model for EDI X12 837 (5010) claim interchanges.
//!
//! The decoder turns flat, delimiter-separated X12 text into a structured,
//! addressable document:
//!
//! 1. [`Delimiters::detect`] learns the element/sub-element separators and
//!    segment terminator from the fixed-width ISA header.
//! 2. The tokenizer splits the document into ordered segments and elements.
//! 3. The hierarchy resolver recovers the billing provider → subscriber →
//!    patient nesting implicit in the HL segment stream.
//! 4. The claim assembler groups CLM/DTP/HI/SV1 segments into ordered
//!    claim records within each hierarchy node.
//! 5. Projections derive summary, flattened-element, tree and statistics
//!    views for downstream presentation layers.
//!
//! Fatal errors are limited to an unusable interchange header; everything
//! else is recorded as a warning while the decoder extracts the maximal
//! recoverable structure.
//!
//! ```
//! use edi837_core::parse_document;
//!
//! let text = "ISA*00*          *00*          *ZZ*SENDER         *ZZ*RECEIVER       \
//!             *240101*1230*^*00501*000000001*0*P*:~GS*HC*S*R*20240101*1230*1*X*005010X222A1~\
//!             ST*837*0001~SE*2*0001~GE*1*1~IEA*1*000000001~";
//! let result = parse_document(text);
//! assert!(result.success);
//! ```

mod claims;
pub mod codes;
mod delimiters;
mod document;
mod error;
mod hierarchy;
mod limits;
mod parser;
mod projection;
mod schema;
mod segment;
mod tokenizer;
mod warning;

pub use claims::{Claim, ClaimDate, DiagnosisCode, ServiceLine};
pub use codes::EntityClass;
pub use delimiters::{Delimiters, MIN_ISA_LENGTH};
pub use document::{FunctionalGroup, Interchange, TransactionSet};
pub use error::{EdiError, EdiErrorKind, EdiResult};
pub use hierarchy::{Forest, HierarchicalNode, NodeId};
pub use limits::Limits;
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder, Parsed};
pub use projection::{
    flattened_table, parse_document, parse_document_with_options, statistics, summary_table,
    tree_view, FlatElementRow, ParseResult, Statistics, SummaryRow, TreeNode,
};
pub use schema::{registry, FieldDef, SchemaRegistry, SegmentDef};
pub use segment::{Element, Segment};
pub use warning::{Warning, WarningKind};
