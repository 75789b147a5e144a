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

//! Delimiter detection from the fixed-width ISA header.
//!
//! The ISA segment has a fixed field layout independent of the delimiters it
//! declares, so the separators used by the rest of the interchange can be
//! read from fixed byte offsets: the element separator immediately follows
//! the `ISA` tag, the sub-element (component) separator is the final ISA
//! field, and the segment terminator is whatever follows it.
//!
//! Detection of the element separator or terminator failing is fatal, since
//! every downstream split depends on them. An alphanumeric sub-element
//! separator is merely inconclusive: it is recorded as a warning and element
//! values are then never split into components, rather than guessing a
//! separator that would corrupt every composite element.

use crate::error::{EdiError, EdiResult};
use crate::warning::Warning;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Byte offset of the element separator (right after the `ISA` tag).
const ELEMENT_SEPARATOR_OFFSET: usize = 3;

/// Byte offset of the repetition separator (ISA11, 5010 layout).
const REPETITION_SEPARATOR_OFFSET: usize = 82;

/// Byte offset of the sub-element separator (ISA16).
const SUB_ELEMENT_SEPARATOR_OFFSET: usize = 104;

/// Minimum length of a fixed-width ISA segment, in bytes.
pub const MIN_ISA_LENGTH: usize = 106;

/// The delimiter set detected from an interchange header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Delimiters {
    /// Element separator (typically `*`).
    pub element: char,
    /// Sub-element/component separator (typically `:`); `None` when
    /// detection was inconclusive.
    pub sub_element: Option<char>,
    /// Repetition separator (typically `^`); `None` on pre-5010 producers
    /// that fill ISA11 with an alphanumeric standards id.
    pub repetition: Option<char>,
    /// Segment terminator (typically `~`).
    pub terminator: char,
}

impl Delimiters {
    /// Detect the delimiter set from the start of an interchange.
    ///
    /// Returns the delimiters plus any warnings raised by inconclusive
    /// sub-element or repetition separator bytes. The input is expected to
    /// start with the ISA tag (leading whitespace is ignored).
    pub fn detect(text: &str) -> EdiResult<(Self, Vec<Warning>)> {
        let text = text.trim_start();
        if !text.starts_with("ISA") {
            return Err(EdiError::empty_input("no ISA segment found in input"));
        }
        if text.len() < MIN_ISA_LENGTH {
            return Err(EdiError::format(format!(
                "interchange header too short: {} bytes, ISA requires at least {}",
                text.len(),
                MIN_ISA_LENGTH
            )));
        }

        let bytes = text.as_bytes();

        let element = bytes[ELEMENT_SEPARATOR_OFFSET] as char;
        if element.is_ascii_alphanumeric() || element == ' ' {
            return Err(EdiError::format(format!(
                "element separator detection inconclusive: found {:?} after ISA tag",
                element
            )));
        }

        let mut warnings = Vec::new();

        let sub_candidate = bytes[SUB_ELEMENT_SEPARATOR_OFFSET] as char;
        let sub_element = if sub_candidate.is_ascii_alphanumeric() || sub_candidate == ' ' {
            warnings.push(Warning::inconclusive_delimiter(format!(
                "sub-element separator detection inconclusive: found {:?} at ISA16; \
                 composite elements will not be split",
                sub_candidate
            )));
            None
        } else {
            Some(sub_candidate)
        };

        let rep_candidate = bytes[REPETITION_SEPARATOR_OFFSET] as char;
        let repetition = if rep_candidate.is_ascii_alphanumeric()
            || rep_candidate == ' '
            || rep_candidate == element
        {
            None
        } else {
            Some(rep_candidate)
        };

        // First non-alphanumeric, non-space byte after the final ISA field.
        let terminator = bytes[SUB_ELEMENT_SEPARATOR_OFFSET + 1..]
            .iter()
            .map(|&b| b as char)
            .find(|c| !c.is_ascii_alphanumeric() && *c != ' ')
            .ok_or_else(|| {
                EdiError::format("segment terminator detection inconclusive: no candidate after ISA")
            })?;

        Ok((
            Self {
                element,
                sub_element,
                repetition,
                terminator,
            },
            warnings,
        ))
    }
}
