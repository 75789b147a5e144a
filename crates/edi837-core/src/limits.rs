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

//! Resource limits for 837 decoding.

/// Configurable limits bounding the resources one parse may consume.
///
/// Exceeding any limit aborts the parse with a `LimitError`. The defaults
/// accommodate real-world claim interchanges; multi-gigabyte streaming input
/// is out of scope for this decoder.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum input size in bytes (default: 64MB).
    pub max_input_size: usize,
    /// Maximum number of segments per interchange (default: 1M).
    pub max_segments: usize,
    /// Maximum elements per segment (default: 1k).
    pub max_elements_per_segment: usize,
    /// Maximum hierarchical nodes per transaction set (default: 100k).
    pub max_hierarchy_nodes: usize,
    /// Maximum HL nesting depth per transaction set (default: 100).
    ///
    /// An 837 uses three levels (billing provider, subscriber, patient);
    /// the default leaves ample room while keeping tree construction,
    /// rendering and serialization bounded.
    pub max_hierarchy_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64MB
            max_segments: 1_000_000,
            max_elements_per_segment: 1_000,
            max_hierarchy_nodes: 100_000,
            max_hierarchy_depth: 100,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_segments: usize::MAX,
            max_elements_per_segment: usize::MAX,
            max_hierarchy_nodes: usize::MAX,
            max_hierarchy_depth: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default limits tests ====================

    #[test]
    fn test_default_max_input_size() {
        let limits = Limits::default();
        assert_eq!(limits.max_input_size, 64 * 1024 * 1024); // 64MB
    }

    #[test]
    fn test_default_max_segments() {
        let limits = Limits::default();
        assert_eq!(limits.max_segments, 1_000_000);
    }

    #[test]
    fn test_default_max_elements_per_segment() {
        let limits = Limits::default();
        assert_eq!(limits.max_elements_per_segment, 1_000);
    }

    #[test]
    fn test_default_max_hierarchy_nodes() {
        let limits = Limits::default();
        assert_eq!(limits.max_hierarchy_nodes, 100_000);
    }

    #[test]
    fn test_default_max_hierarchy_depth() {
        let limits = Limits::default();
        assert_eq!(limits.max_hierarchy_depth, 100);
    }

    // ==================== Unlimited limits tests ====================

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_input_size, usize::MAX);
        assert_eq!(limits.max_segments, usize::MAX);
        assert_eq!(limits.max_elements_per_segment, usize::MAX);
        assert_eq!(limits.max_hierarchy_nodes, usize::MAX);
        assert_eq!(limits.max_hierarchy_depth, usize::MAX);
    }

    #[test]
    fn test_limits_clone() {
        let limits = Limits::default();
        let cloned = limits.clone();
        assert_eq!(limits.max_segments, cloned.max_segments);
    }
}
