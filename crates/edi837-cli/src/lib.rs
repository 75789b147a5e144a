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

//! EDI 837 CLI library for command-line parsing and execution.
//!
//! This library provides the command implementations behind the `edi837`
//! binary for decoding X12 837 (5010) interchanges.
//!
//! # Commands
//!
//! - **parse**: Decode a file and emit the full parse result as JSON
//! - **summary**: Print the fixed-order summary table (envelope, submitter,
//!   billing provider, subscriber, first claim)
//! - **elements**: Print the flattened element table with schema field names
//! - **tree**: Visualize the Interchange → Group → Transaction → HL tree
//! - **stats**: Print segment counts, coverage, hierarchy shape, and claim
//!   financials
//!
//! All commands tolerate partially malformed input: recoverable anomalies
//! are streamed to stderr as warnings and the decoded portion is still
//! rendered. Only structurally fatal input (no usable ISA header) fails.
//!
//! # Examples
//!
//! ```no_run
//! use edi837_cli::commands::summary;
//!
//! # fn main() -> Result<(), String> {
//! summary("claim.edi")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All commands return `Result<(), String>` for consistent error handling.
//! Errors carry the taxonomy label of the underlying failure (for example
//! `FormatError: interchange header shorter than 106 bytes`).

pub mod cli;
pub mod commands;
