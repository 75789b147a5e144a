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

//! JSON serialization of 837 parse results.
//!
//! Field names follow the external interface contract (camelCase:
//! `flattenedElements`, `segmentId`, ...). Conversion never mutates the
//! result; serialization failures map to `ConversionError`.
//!
//! ```
//! use edi837_core::parse_document;
//! use edi837_json::to_json_string;
//!
//! let result = parse_document("not an interchange");
//! let json = to_json_string(&result).unwrap();
//! assert!(json.contains("\"success\":false"));
//! ```

use edi837_core::{EdiError, EdiResult, ParseResult};
use serde_json::Value;

/// Convert a parse result into a JSON value.
pub fn to_json(result: &ParseResult) -> EdiResult<Value> {
    serde_json::to_value(result).map_err(|e| EdiError::conversion(e.to_string()))
}

/// Serialize a parse result to a compact JSON string.
pub fn to_json_string(result: &ParseResult) -> EdiResult<String> {
    serde_json::to_string(result).map_err(|e| EdiError::conversion(e.to_string()))
}

/// Serialize a parse result to a pretty-printed JSON string.
pub fn to_json_string_pretty(result: &ParseResult) -> EdiResult<String> {
    serde_json::to_string_pretty(result).map_err(|e| EdiError::conversion(e.to_string()))
}
