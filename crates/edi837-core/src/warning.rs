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

//! Non-fatal anomalies recorded during decoding.
//!
//! The decoder keeps going past anything recoverable: malformed segments,
//! orphaned hierarchy nodes, unknown segment ids. Each such anomaly becomes
//! a [`Warning`] on the parse result instead of an error.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The kind of recoverable anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum WarningKind {
    /// A segment's element count doesn't match its expected schema.
    SegmentShape,
    /// An HL segment's declared parent id is unresolved.
    OrphanHierarchy,
    /// Segment identifier absent from the registry.
    UnknownSegment,
    /// Two HL segments share the same hierarchical id.
    DuplicateHierarchyId,
    /// Sub-element separator detection was inconclusive.
    InconclusiveDelimiter,
    /// Envelope structure anomaly (missing GS/ST, trailer mismatch).
    Envelope,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SegmentShape => write!(f, "SegmentShapeWarning"),
            Self::OrphanHierarchy => write!(f, "OrphanHierarchyWarning"),
            Self::UnknownSegment => write!(f, "UnknownSegmentWarning"),
            Self::DuplicateHierarchyId => write!(f, "DuplicateHierarchyIdWarning"),
            Self::InconclusiveDelimiter => write!(f, "InconclusiveDelimiterWarning"),
            Self::Envelope => write!(f, "EnvelopeWarning"),
        }
    }
}

/// A recoverable anomaly with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Warning {
    /// The kind of anomaly.
    pub kind: WarningKind,
    /// Human-readable message.
    pub message: String,
    /// Segment position (1-based) the anomaly was observed at, if any.
    pub position: Option<usize>,
}

impl Warning {
    /// Create a new warning.
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
        }
    }

    /// Add segment position information.
    pub fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn segment_shape(message: impl Into<String>) -> Self {
        Self::new(WarningKind::SegmentShape, message)
    }

    pub fn orphan_hierarchy(message: impl Into<String>) -> Self {
        Self::new(WarningKind::OrphanHierarchy, message)
    }

    pub fn unknown_segment(message: impl Into<String>) -> Self {
        Self::new(WarningKind::UnknownSegment, message)
    }

    pub fn duplicate_hierarchy_id(message: impl Into<String>) -> Self {
        Self::new(WarningKind::DuplicateHierarchyId, message)
    }

    pub fn inconclusive_delimiter(message: impl Into<String>) -> Self {
        Self::new(WarningKind::InconclusiveDelimiter, message)
    }

    pub fn envelope(message: impl Into<String>) -> Self {
        Self::new(WarningKind::Envelope, message)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} at segment {}: {}", self.kind, pos, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}
