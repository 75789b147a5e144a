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

//! Elements command - flattened element table

use super::decode_file;
use colored::Colorize;
use edi837_core::registry;

/// Print the flattened element table for an 837 file.
///
/// One line per element across the whole interchange, in segment order,
/// with the field name resolved from the schema registry and decoded
/// meanings appended for recognized code values. With `unknown_only` set,
/// only elements of segments the registry does not recognize are shown.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or fails to decode fatally.
pub fn elements(file: &str, unknown_only: bool) -> Result<(), String> {
    let result = decode_file(file)?;

    let rows: Vec<_> = result
        .flattened_elements
        .iter()
        .filter(|r| !unknown_only || !registry().is_known(&r.segment_id))
        .collect();

    if rows.is_empty() {
        println!("No elements found in {}", file);
        return Ok(());
    }

    println!(
        "{:<8} {:>4} {:>4}  {:<40} {}",
        "SEGMENT".bold(),
        "POS".bold(),
        "IDX".bold(),
        "FIELD".bold(),
        "VALUE".bold()
    );
    for row in rows {
        let value = match &row.interpreted {
            Some(meaning) => format!("{}  {}", row.value, format!("({})", meaning).dimmed()),
            None => row.value.clone(),
        };
        println!(
            "{:<8} {:>4} {:>4}  {:<40} {}",
            row.segment_id.cyan(),
            row.segment_position,
            row.element_index,
            row.field_name,
            value
        );
    }

    Ok(())
}
