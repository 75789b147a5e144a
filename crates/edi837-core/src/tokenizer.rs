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

//! Segment tokenization.
//!
//! Splits the document on the detected segment terminator, each segment on
//! the element separator, and any element containing the sub-element
//! separator into components. Segments whose element count falls short of
//! the registry's expectation are kept with `malformed = true` rather than
//! dropped; the engine maximizes recoverable structure.

use crate::delimiters::Delimiters;
use crate::error::{EdiError, EdiResult};
use crate::limits::Limits;
use crate::schema::registry;
use crate::segment::{Element, Segment};
use crate::warning::Warning;

/// Tokenize the full document into ordered segments.
///
/// Blank segments (whitespace between terminators, trailing newlines) are
/// dropped; surviving segments carry their original 1-based position and
/// raw source text. Anomalies accumulate as warnings.
pub fn tokenize(
    text: &str,
    delimiters: &Delimiters,
    limits: &Limits,
) -> EdiResult<(Vec<Segment>, Vec<Warning>)> {
    let mut segments = Vec::new();
    let mut warnings = Vec::new();
    let mut position = 0;

    for raw in text.split(delimiters.terminator) {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        position += 1;
        if segments.len() >= limits.max_segments {
            return Err(EdiError::limit(format!(
                "segment count exceeds limit of {}",
                limits.max_segments
            )));
        }

        let segment = tokenize_segment(raw, position, delimiters, limits, &mut warnings)?;
        segments.push(segment);
    }

    Ok((segments, warnings))
}

fn tokenize_segment(
    raw: &str,
    position: usize,
    delimiters: &Delimiters,
    limits: &Limits,
    warnings: &mut Vec<Warning>,
) -> EdiResult<Segment> {
    let mut parts = raw.split(delimiters.element);
    let id = parts.next().unwrap_or("").trim().to_string();

    let mut elements = Vec::new();
    for (i, part) in parts.enumerate() {
        if i >= limits.max_elements_per_segment {
            return Err(EdiError::limit(format!(
                "element count in segment {} exceeds limit of {}",
                id, limits.max_elements_per_segment
            ))
            .at_position(position));
        }
        elements.push(split_element(part, delimiters));
    }

    let malformed = match registry().min_elements(&id) {
        Some(min) if elements.len() < min => {
            warnings.push(
                Warning::segment_shape(format!(
                    "{} has {} elements, expected at least {}",
                    id,
                    elements.len(),
                    min
                ))
                .at_position(position),
            );
            true
        }
        Some(_) => false,
        None => {
            warnings.push(
                Warning::unknown_segment(format!("unrecognized segment identifier {:?}", id))
                    .at_position(position),
            );
            false
        }
    };

    Ok(Segment {
        id,
        position,
        elements,
        raw: raw.to_string(),
        malformed,
    })
}

fn split_element(value: &str, delimiters: &Delimiters) -> Element {
    match delimiters.sub_element {
        Some(sub) if value.contains(sub) => {
            Element::Composite(value.split(sub).map(str::to_string).collect())
        }
        _ => Element::Value(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdiErrorKind;
    use crate::warning::WarningKind;

    fn delims() -> Delimiters {
        Delimiters {
            element: '*',
            sub_element: Some(':'),
            repetition: Some('^'),
            terminator: '~',
        }
    }

    // ==================== Basic tokenization ====================

    #[test]
    fn test_tokenize_splits_segments_and_elements() {
        let (segments, _) =
            tokenize("ST*837*0001~SE*2*0001~", &delims(), &Limits::default()).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].id, "ST");
        assert_eq!(segments[0].value(1), "837");
        assert_eq!(segments[1].id, "SE");
        assert_eq!(segments[1].position, 2);
    }

    #[test]
    fn test_tokenize_preserves_raw_text() {
        let (segments, _) = tokenize("ST*837*0001~", &delims(), &Limits::default()).unwrap();
        assert_eq!(segments[0].raw, "ST*837*0001");
    }

    #[test]
    fn test_tokenize_skips_blank_segments() {
        let (segments, _) =
            tokenize("ST*837*0001~\n\n~  ~SE*2*0001~\n", &delims(), &Limits::default()).unwrap();
        assert_eq!(segments.len(), 2);
        // Position counts surviving segments only
        assert_eq!(segments[1].position, 2);
    }

    #[test]
    fn test_tokenize_empty_input_yields_no_segments() {
        let (segments, warnings) = tokenize("", &delims(), &Limits::default()).unwrap();
        assert!(segments.is_empty());
        assert!(warnings.is_empty());
    }

    // ==================== Composite elements ====================

    #[test]
    fn test_composite_element_is_split() {
        let (segments, _) =
            tokenize("CLM*A1*500***11:B:1~", &delims(), &Limits::default()).unwrap();
        let clm = &segments[0];
        assert_eq!(
            clm.element(5).unwrap(),
            &Element::Composite(vec!["11".into(), "B".into(), "1".into()])
        );
    }

    #[test]
    fn test_no_sub_separator_leaves_elements_unsplit() {
        let mut d = delims();
        d.sub_element = None;
        let (segments, _) = tokenize("CLM*A1*500***11:B:1~", &d, &Limits::default()).unwrap();
        assert_eq!(
            segments[0].element(5).unwrap(),
            &Element::Value("11:B:1".into())
        );
    }

    // ==================== Malformed segments ====================

    #[test]
    fn test_short_segment_kept_with_malformed_flag() {
        let (segments, warnings) = tokenize("NM1*85~", &delims(), &Limits::default()).unwrap();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].malformed);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::SegmentShape);
        assert_eq!(warnings[0].position, Some(1));
    }

    #[test]
    fn test_well_formed_segment_not_flagged() {
        let (segments, warnings) =
            tokenize("NM1*85*2*ACME CLINIC~", &delims(), &Limits::default()).unwrap();
        assert!(!segments[0].malformed);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_segment_warns_but_keeps_segment() {
        let (segments, warnings) = tokenize("ZZZ*1*2~", &delims(), &Limits::default()).unwrap();
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].malformed);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::UnknownSegment);
    }

    // ==================== Limits ====================

    #[test]
    fn test_segment_limit_is_fatal() {
        let mut limits = Limits::default();
        limits.max_segments = 1;
        let err = tokenize("ST*837*0001~SE*2*0001~", &delims(), &limits).unwrap_err();
        assert_eq!(err.kind, EdiErrorKind::Limit);
    }

    #[test]
    fn test_element_limit_is_fatal() {
        let mut limits = Limits::default();
        limits.max_elements_per_segment = 1;
        let err = tokenize("ST*837*0001~", &delims(), &limits).unwrap_err();
        assert_eq!(err.kind, EdiErrorKind::Limit);
    }

    // ==================== Round-trip ====================

    #[test]
    fn test_rejoining_reproduces_content() {
        let input = "ST*837*0001~BHT*0019*00*X*20240101*1200*CH~SE*3*0001~";
        let (segments, _) = tokenize(input, &delims(), &Limits::default()).unwrap();
        let rejoined: String = segments
            .iter()
            .map(|s| format!("{}~", s.raw))
            .collect();
        assert_eq!(rejoined, input);
    }
}
