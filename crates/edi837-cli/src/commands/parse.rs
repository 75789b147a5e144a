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

//! Parse command - decode a file and emit the parse result as JSON

use super::{decode_file, write_output};
use edi837_json::{to_json_string, to_json_string_pretty};

/// Decode an 837 file and write the full parse result as JSON.
///
/// # Arguments
///
/// * `file` - Path to the 837 file to decode
/// * `output` - Optional output file path; stdout when `None`
/// * `pretty` - If `true`, pretty-print the JSON
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the input fails to decode
/// fatally, or the output cannot be written.
///
/// # Examples
///
/// ```no_run
/// use edi837_cli::commands::parse;
///
/// # fn main() -> Result<(), String> {
/// parse("claim.edi", None, true)?;
/// parse("claim.edi", Some("claim.json"), false)?;
/// # Ok(())
/// # }
/// ```
pub fn parse(file: &str, output: Option<&str>, pretty: bool) -> Result<(), String> {
    let result = decode_file(file)?;

    let json = if pretty {
        to_json_string_pretty(&result)
    } else {
        to_json_string(&result)
    }
    .map_err(|e| format!("{}", e))?;

    write_output(&json, output)?;
    if output.is_none() {
        println!();
    }
    Ok(())
}
