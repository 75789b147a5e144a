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

//! Summary command - fixed-order claim summary table

use super::decode_file;
use colored::Colorize;

/// Print the fixed-order summary table for an 837 file.
///
/// Rows are grouped by section (Interchange Control, Submitter, Billing
/// Provider, Subscriber, Claim 1); sections that resolved to nothing are
/// omitted entirely.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or fails to decode fatally.
pub fn summary(file: &str) -> Result<(), String> {
    let result = decode_file(file)?;

    if result.summary.is_empty() {
        println!("No summary data found in {}", file);
        return Ok(());
    }

    let mut current_section = "";
    for row in &result.summary {
        if row.section != current_section {
            if !current_section.is_empty() {
                println!();
            }
            println!("{}", row.section.cyan().bold());
            current_section = &row.section;
        }
        println!("  {}: {}", row.field.green(), row.value);
    }

    Ok(())
}
