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

//! EDI 837 Command Line Interface

use clap::Parser;
use colored::Colorize;
use edi837_cli::cli::Commands;
use std::process::ExitCode;

/// edi837 - EDI X12 837 (5010) health care claim decoder
///
/// A command-line interface for decoding 837 interchanges, providing
/// JSON export, summary and element tables, hierarchy visualization,
/// and coverage statistics.
///
/// # Examples
///
/// ```bash
/// # Decode an 837 file to JSON
/// edi837 parse claim.edi --pretty
///
/// # Show the fixed-order summary table
/// edi837 summary claim.edi
///
/// # Show the HL hierarchy tree
/// edi837 tree claim.edi
/// ```
#[derive(Parser)]
#[command(name = "edi837")]
#[command(author, version, about = "edi837 - EDI X12 837 (5010) claim decoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
