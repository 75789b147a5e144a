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

//! Error types for 837 decoding.
//!
//! Only fatal conditions are modeled as errors; recoverable anomalies are
//! [`crate::Warning`] values accumulated alongside the parsed document.

use std::fmt;
use thiserror::Error;

/// The kind of fatal error that aborted a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdiErrorKind {
    /// Interchange header too short or delimiter detection inconclusive.
    Format,
    /// No ISA segment found in the input.
    EmptyInput,
    /// A resource limit was exceeded.
    Limit,
    /// Error during format conversion (JSON, etc.).
    Conversion,
    /// I/O error (file operations).
    Io,
}

impl fmt::Display for EdiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "FormatError"),
            Self::EmptyInput => write!(f, "EmptyInputError"),
            Self::Limit => write!(f, "LimitError"),
            Self::Conversion => write!(f, "ConversionError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// A fatal error raised while decoding an interchange.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct EdiError {
    /// The kind of error.
    pub kind: EdiErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Segment position (1-based) where the error surfaced, if known.
    pub position: Option<usize>,
    /// Additional context (e.g., "while decoding claims.edi").
    pub context: Option<String>,
}

impl EdiError {
    /// Create a new error.
    pub fn new(kind: EdiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
            context: None,
        }
    }

    /// Add segment position information.
    pub fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn format(message: impl Into<String>) -> Self {
        Self::new(EdiErrorKind::Format, message)
    }

    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::new(EdiErrorKind::EmptyInput, message)
    }

    pub fn limit(message: impl Into<String>) -> Self {
        Self::new(EdiErrorKind::Limit, message)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(EdiErrorKind::Conversion, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(EdiErrorKind::Io, message)
    }
}

/// Result type for 837 operations.
pub type EdiResult<T> = Result<T, EdiError>;
