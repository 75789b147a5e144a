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

//! CLI command definitions and argument parsing.

use crate::commands;
use clap::Subcommand;

/// Top-level CLI commands.
///
/// Each variant decodes one 837 file and renders a different view of the
/// same parse result.
#[derive(Subcommand)]
pub enum Commands {
    /// Decode an 837 file and emit the parse result as JSON
    ///
    /// The JSON carries the full external contract: success flag, warnings,
    /// the decoded interchange, the summary and element tables, the tree
    /// view, and statistics.
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the fixed-order summary table
    ///
    /// Shows interchange control data, submitter, billing provider,
    /// subscriber, and the first claim. Sections with no resolved values
    /// are omitted.
    Summary {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print the flattened element table
    ///
    /// One row per element across the whole interchange, with the field
    /// name resolved from the segment schema registry.
    Elements {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Only show elements of unrecognized segments
        #[arg(short, long)]
        unknown_only: bool,
    },

    /// Visualize the interchange structure as a tree
    ///
    /// Displays Interchange → Functional Group → Transaction Set → HL level
    /// nesting, with raw segments as leaves.
    Tree {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Show coverage statistics for an 837 file
    ///
    /// Reports segment counts, schema recognition rate, hierarchy depth and
    /// breadth, warning count, and claim financial totals.
    Stats {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` with a descriptive message if the file cannot be read
    /// or the input fails to decode fatally.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Parse {
                file,
                output,
                pretty,
            } => commands::parse(&file, output.as_deref(), pretty),
            Commands::Summary { file } => commands::summary(&file),
            Commands::Elements { file, unknown_only } => {
                commands::elements(&file, unknown_only)
            }
            Commands::Tree { file } => commands::tree(&file),
            Commands::Stats { file } => commands::stats(&file),
        }
    }
}
