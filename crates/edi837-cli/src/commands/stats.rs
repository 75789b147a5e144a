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

//! Stats command - coverage and claim statistics

use super::decode_file;
use colored::Colorize;
use edi837_core::registry;

/// Print coverage statistics for an 837 file.
///
/// Reports segment counts, schema recognition rate, element population,
/// hierarchy depth and breadth, warning count, and claim financial totals.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or fails to decode fatally.
pub fn stats(file: &str) -> Result<(), String> {
    let result = decode_file(file)?;
    let stats = &result.statistics;

    println!("{}", "Segments".cyan().bold());
    for (id, count) in &stats.segment_counts {
        println!(
            "  {:<6} {:<40} {}",
            id.green(),
            registry().segment_name(id),
            count
        );
    }
    println!("  Unknown: {}", stats.unknown_segment_count);
    println!("  Recognized: {:.1}%", stats.recognized_percent);
    println!("  Element population: {:.1}%", stats.element_population_rate);
    println!("  Missing required fields: {}", stats.missing_required_count);

    println!();
    println!("{}", "Hierarchy".cyan().bold());
    println!("  Depth: {}", stats.hierarchy_depth);
    println!("  Breadth: {}", stats.hierarchy_breadth);

    println!();
    println!("{}", "Claims".cyan().bold());
    println!("  Claims: {}", stats.claim_count);
    println!("  Service lines: {}", stats.service_line_count);
    println!("  Total claim amount: {:.2}", stats.total_claim_amount);
    println!("  Average claim amount: {:.2}", stats.average_claim_amount);
    println!("  Total service amount: {:.2}", stats.total_service_amount);

    println!();
    println!("  Warnings: {}", stats.warning_count);

    Ok(())
}
