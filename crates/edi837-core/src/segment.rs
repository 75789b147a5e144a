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

//! Segment and element model.

#[cfg(feature = "serde")]
use serde::Serialize;

/// One element of a segment: a plain value, or an ordered list of
/// sub-elements when the value contained the sub-element separator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Element {
    /// A simple value.
    Value(String),
    /// A composite element split on the sub-element separator.
    Composite(Vec<String>),
}

impl Element {
    /// The element rendered as display text, composites re-joined with the
    /// given separator.
    pub fn display(&self, sub_separator: char) -> String {
        match self {
            Self::Value(v) => v.clone(),
            Self::Composite(parts) => parts.join(&sub_separator.to_string()),
        }
    }

    /// The first sub-element of a composite, or the whole value.
    pub fn head(&self) -> &str {
        match self {
            Self::Value(v) => v,
            Self::Composite(parts) => parts.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Sub-elements of a composite; a plain value yields a single-item slice
    /// view via `None`.
    pub fn components(&self) -> Option<&[String]> {
        match self {
            Self::Value(_) => None,
            Self::Composite(parts) => Some(parts),
        }
    }

    /// Whether the element holds no text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Value(v) => v.is_empty(),
            Self::Composite(parts) => parts.iter().all(String::is_empty),
        }
    }
}

/// A tokenized segment: identifier plus ordered elements.
///
/// `position` is the 1-based position within the transaction stream and
/// `raw` preserves the source text for display. `malformed` marks segments
/// whose element count fell short of the registry's expectation; such
/// segments are kept so later stages can still extract what is
/// interpretable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Segment {
    /// Segment identifier (`ISA`, `HL`, `CLM`, ...).
    pub id: String,
    /// 1-based position in the interchange.
    pub position: usize,
    /// Ordered elements, excluding the identifier.
    pub elements: Vec<Element>,
    /// Original source text of the segment.
    pub raw: String,
    /// Set when the element count deviates from the expected schema.
    pub malformed: bool,
}

impl Segment {
    /// Element at a 1-based index.
    pub fn element(&self, index: usize) -> Option<&Element> {
        if index == 0 {
            return None;
        }
        self.elements.get(index - 1)
    }

    /// Element text at a 1-based index, empty string when absent.
    ///
    /// Composites are reduced to their first sub-element, which is what the
    /// assembly stages usually want (e.g. the place-of-service code at the
    /// head of CLM05).
    pub fn value(&self, index: usize) -> &str {
        self.element(index).map(Element::head).unwrap_or("")
    }
}
