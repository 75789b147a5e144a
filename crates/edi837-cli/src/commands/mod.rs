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

//! CLI command implementations

mod elements;
mod parse;
mod stats;
mod summary;
mod tree;

pub use elements::elements;
pub use parse::parse;
pub use stats::stats;
pub use summary::summary;
pub use tree::tree;

use colored::Colorize;
use edi837_core::{parse_document, ParseResult};
use std::fs;
use std::io::{self, Write};

/// Default maximum file size to prevent OOM attacks (64 MB).
/// Can be overridden via the EDI837_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("EDI837_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Checks the file size via metadata before allocating, so oversized inputs
/// are rejected without reading them.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file exceeds the
/// configured maximum size, or the contents are not valid UTF-8.
pub fn read_file(path: &str) -> Result<String, String> {
    let metadata = fs::metadata(path)
        .map_err(|e| format!("Failed to get metadata for '{}': {}", path, e))?;

    let max_file_size = get_max_file_size();

    if metadata.len() > max_file_size {
        return Err(format!(
            "File '{}' is too large ({} bytes). Maximum allowed size is {} bytes.\n\
             To process larger files, set EDI837_MAX_FILE_SIZE environment variable (in bytes).",
            path,
            metadata.len(),
            max_file_size
        ));
    }

    fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if file creation, file writing, or stdout writing fails.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| format!("Failed to write '{}': {}", p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write to stdout: {}", e)),
    }
}

/// Read and decode a file, streaming warnings to stderr.
///
/// Recoverable anomalies never fail the command; only a fatal decode error
/// (no usable ISA header, oversized input) is returned as `Err`.
pub fn decode_file(path: &str) -> Result<ParseResult, String> {
    let content = read_file(path)?;
    let result = parse_document(&content);

    for warning in &result.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    if result.success {
        Ok(result)
    } else {
        Err(result
            .error
            .unwrap_or_else(|| "decoding failed".to_string()))
    }
}
