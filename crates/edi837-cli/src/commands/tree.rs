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

//! Tree command - interchange structure visualization

use super::decode_file;
use colored::Colorize;
use edi837_core::TreeNode;

/// Visualize the structure of an 837 file as a nested tree.
///
/// Displays Interchange → Functional Group → Transaction Set → HL level
/// nesting with raw segments as leaves, color-coded by node kind.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or fails to decode fatally.
pub fn tree(file: &str) -> Result<(), String> {
    let result = decode_file(file)?;

    match &result.tree {
        Some(root) => print_node(root, 0),
        None => println!("No structure found in {}", file),
    }

    Ok(())
}

fn print_node(node: &TreeNode, indent: usize) {
    let prefix = "  ".repeat(indent);
    let label = match node.kind.as_str() {
        "interchange" => node.label.bold().underline().to_string(),
        "group" => node.label.cyan().to_string(),
        "transaction" => node.label.green().to_string(),
        "level" => node.label.yellow().to_string(),
        _ => node.label.dimmed().to_string(),
    };
    println!("{}{}", prefix, label);
    for child in &node.children {
        print_node(child, indent + 1);
    }
}
