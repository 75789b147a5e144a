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

//! Error context helpers for improved ergonomics.
//!
//! Extension traits for `Result<T, EdiError>` that make it easy to add
//! contextual information to errors as they propagate through the call
//! stack.
//!
//! # Examples
//!
//! ```rust
//! use edi837::{parse, EdiResultExt};
//!
//! fn load_claim(path: &str) -> Result<edi837::Parsed, edi837::EdiError> {
//!     let content = std::fs::read_to_string(path)
//!         .map_err(|e| edi837::EdiError::io(format!("Failed to read {}: {}", path, e)))?;
//!
//!     parse(&content).context(format!("while decoding {}", path))
//! }
//! ```
//!
//! Use `with_context` when the context message is expensive to compute:
//!
//! ```rust
//! use edi837::{parse, EdiResultExt};
//!
//! fn decode_batch(id: u64, content: &str) -> Result<(), edi837::EdiError> {
//!     let _parsed = parse(content)
//!         .with_context(|| format!("batch {} ({} bytes)", id, content.len()))?;
//!     Ok(())
//! }
//! ```

use crate::EdiError;
use std::fmt;

/// Extension trait for adding context to `Result<T, EdiError>`.
///
/// Context accumulates in the error's `context` field without modifying the
/// original message, so kind and position survive annotation.
pub trait EdiResultExt<T> {
    /// The error type for this Result.
    type ErrorType;

    /// Add context to an error.
    ///
    /// Evaluates the context message immediately; for expensive context
    /// computations, prefer [`with_context`](EdiResultExt::with_context).
    fn context<C>(self, context: C) -> Result<T, EdiError>
    where
        C: fmt::Display;

    /// Add context to an error using a closure, only evaluated on the error
    /// path.
    fn with_context<C, F>(self, f: F) -> Result<T, EdiError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Convert a foreign error type to `EdiError`.
    fn map_err_to_edi<F>(self, f: F) -> Result<T, EdiError>
    where
        F: FnOnce(Self::ErrorType) -> EdiError,
        Self: Sized;
}

impl<T> EdiResultExt<T> for Result<T, EdiError> {
    type ErrorType = EdiError;

    fn context<C>(self, context: C) -> Result<T, EdiError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, EdiError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context(e, f().to_string()))
    }

    fn map_err_to_edi<F>(self, _f: F) -> Result<T, EdiError>
    where
        F: FnOnce(Self::ErrorType) -> EdiError,
    {
        // Already an EdiError, nothing to convert.
        self
    }
}

impl<T> EdiResultExt<T> for Result<T, std::io::Error> {
    type ErrorType = std::io::Error;

    fn context<C>(self, context: C) -> Result<T, EdiError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| EdiError::io(e.to_string()).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, EdiError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| EdiError::io(e.to_string()).with_context(f().to_string()))
    }

    fn map_err_to_edi<F>(self, f: F) -> Result<T, EdiError>
    where
        F: FnOnce(Self::ErrorType) -> EdiError,
    {
        self.map_err(f)
    }
}

impl<T> EdiResultExt<T> for Result<T, serde_json::Error> {
    type ErrorType = serde_json::Error;

    fn context<C>(self, context: C) -> Result<T, EdiError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| EdiError::conversion(e.to_string()).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, EdiError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| EdiError::conversion(e.to_string()).with_context(f().to_string()))
    }

    fn map_err_to_edi<F>(self, f: F) -> Result<T, EdiError>
    where
        F: FnOnce(Self::ErrorType) -> EdiError,
    {
        self.map_err(f)
    }
}

/// Append context to an existing error, chaining through call-stack layers.
fn add_context(mut error: EdiError, new_context: String) -> EdiError {
    if new_context.is_empty() {
        return error;
    }

    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });

    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, EdiErrorKind};

    // ==================== context() tests ====================

    #[test]
    fn test_context_on_error() {
        let result: Result<(), EdiError> = Err(EdiError::format("bad delimiter"));
        let err = result.context("in function foo").unwrap_err();

        assert_eq!(err.context, Some("in function foo".to_string()));
        assert_eq!(err.kind, EdiErrorKind::Format);
    }

    #[test]
    fn test_context_on_ok() {
        let result: Result<i32, EdiError> = Ok(42);
        let value = result.context("this should not be evaluated").unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_context_chaining() {
        let result: Result<(), EdiError> = Err(EdiError::limit("too many segments"));
        let err = result
            .context("in transaction 0001")
            .context("while decoding batch")
            .unwrap_err();

        let ctx = err.context.unwrap();
        assert!(ctx.contains("while decoding batch"));
        assert!(ctx.contains("in transaction 0001"));
    }

    #[test]
    fn test_context_preserves_error_fields() {
        let original = EdiError::format("bad separator").at_position(3);
        let result: Result<(), EdiError> = Err(original);
        let err = result.context("additional info").unwrap_err();

        assert_eq!(err.position, Some(3));
        assert_eq!(err.kind, EdiErrorKind::Format);
        assert_eq!(err.message, "bad separator");
    }

    #[test]
    fn test_context_empty_string() {
        let result: Result<(), EdiError> = Err(EdiError::format("error"));
        let err = result.context("").unwrap_err();

        // Empty context should not be added
        assert_eq!(err.context, None);
    }

    // ==================== with_context() tests ====================

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut evaluated = false;
        let result: Result<i32, EdiError> = Ok(42);

        let value = result
            .with_context(|| {
                evaluated = true;
                "expensive computation"
            })
            .unwrap();

        assert_eq!(value, 42);
        assert!(!evaluated, "Context should not be evaluated on Ok");
    }

    #[test]
    fn test_with_context_on_error() {
        let mut evaluated = false;
        let result: Result<(), EdiError> = Err(EdiError::empty_input("no ISA segment"));

        let err = result
            .with_context(|| {
                evaluated = true;
                "this should be evaluated"
            })
            .unwrap_err();

        assert!(evaluated, "Context should be evaluated on Err");
        assert_eq!(err.context, Some("this should be evaluated".to_string()));
    }

    // ==================== map_err_to_edi() tests ====================

    #[test]
    fn test_map_err_to_edi_io_error() {
        let io_result: Result<String, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let edi_result = io_result.map_err_to_edi(|e: std::io::Error| {
            EdiError::io(format!("Failed to read claim file: {}", e))
        });

        let err = edi_result.unwrap_err();
        assert_eq!(err.kind, EdiErrorKind::Io);
        assert!(err.message.contains("file not found"));
    }

    #[test]
    fn test_map_err_to_edi_json_error() {
        let json_result: Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("invalid json");

        let edi_result = json_result.map_err_to_edi(|e: serde_json::Error| {
            EdiError::conversion(format!("JSON parse error: {}", e))
        });

        let err = edi_result.unwrap_err();
        assert_eq!(err.kind, EdiErrorKind::Conversion);
        assert!(err.message.contains("JSON parse error"));
    }

    // ==================== Integration tests ====================

    #[test]
    fn test_real_world_parse_with_context() {
        let err = parse("this is not an interchange")
            .context("failed to decode claim submission")
            .unwrap_err();

        assert!(err.context.is_some());
        assert!(err.context.unwrap().contains("claim submission"));
    }

    #[test]
    fn test_io_context() {
        let result = std::fs::read_to_string("/this/path/does/not/exist")
            .context("failed to load claim file");

        let err = result.unwrap_err();
        assert_eq!(err.kind, EdiErrorKind::Io);
        assert!(err.context.is_some());
    }
}
