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

//! Main parse entry points.
//!
//! A parse is one synchronous pass: delimiter detection, tokenization,
//! envelope assembly, hierarchy resolution and claim assembly. All mutable
//! bookkeeping lives on this call's stack, so concurrent parses need no
//! coordination. Only two conditions abort the parse: a `Format` error
//! (header too short, delimiters inconclusive) and `EmptyInput` (no ISA);
//! everything else accumulates as warnings on the result.

use crate::claims::assemble;
use crate::delimiters::Delimiters;
use crate::document::{FunctionalGroup, Interchange, TransactionSet};
use crate::error::{EdiError, EdiResult};
use crate::hierarchy::resolve;
use crate::limits::Limits;
use crate::segment::Segment;
use crate::tokenizer::tokenize;
use crate::warning::Warning;

/// Parsing options.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Set the maximum input size in bytes (default: 64MB).
    pub fn max_input_size(mut self, bytes: usize) -> Self {
        self.limits.max_input_size = bytes;
        self
    }

    /// Set the maximum segment count (default: 1M).
    pub fn max_segments(mut self, count: usize) -> Self {
        self.limits.max_segments = count;
        self
    }

    /// Set the maximum elements per segment (default: 1k).
    pub fn max_elements_per_segment(mut self, count: usize) -> Self {
        self.limits.max_elements_per_segment = count;
        self
    }

    /// Set the maximum hierarchical node count (default: 100k).
    pub fn max_hierarchy_nodes(mut self, count: usize) -> Self {
        self.limits.max_hierarchy_nodes = count;
        self
    }

    /// Set the maximum HL nesting depth (default: 100).
    pub fn max_hierarchy_depth(mut self, depth: usize) -> Self {
        self.limits.max_hierarchy_depth = depth;
        self
    }

    /// Build the final ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A successfully decoded interchange plus accumulated warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The decoded interchange.
    pub interchange: Interchange,
    /// Recoverable anomalies observed during the parse.
    pub warnings: Vec<Warning>,
}

/// Parse one interchange with default options.
pub fn parse(text: &str) -> EdiResult<Parsed> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse one interchange with explicit options.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> EdiResult<Parsed> {
    if text.len() > options.limits.max_input_size {
        return Err(EdiError::limit(format!(
            "input size {} exceeds limit of {} bytes",
            text.len(),
            options.limits.max_input_size
        )));
    }

    let (delimiters, mut warnings) = Delimiters::detect(text)?;
    let (segments, tokenize_warnings) = tokenize(text, &delimiters, &options.limits)?;
    warnings.extend(tokenize_warnings);

    let isa = segments
        .iter()
        .find(|s| s.id == "ISA")
        .ok_or_else(|| EdiError::empty_input("no ISA segment found in input"))?;

    let mut interchange = interchange_from_isa(isa, delimiters);
    assemble_envelopes(&segments, &mut interchange, &options.limits, &mut warnings)?;
    interchange.segments = segments;

    Ok(Parsed {
        interchange,
        warnings,
    })
}

fn interchange_from_isa(isa: &Segment, delimiters: Delimiters) -> Interchange {
    // ISA fields are fixed width; strip the space padding.
    let field = |i: usize| isa.value(i).trim().to_string();
    Interchange {
        sender_id_qualifier: field(5),
        sender_id: field(6),
        receiver_id_qualifier: field(7),
        receiver_id: field(8),
        date: field(9),
        time: field(10),
        version: field(12),
        control_number: field(13),
        usage_indicator: field(15),
        delimiters,
        functional_groups: Vec::new(),
        segments: Vec::new(),
    }
}

fn group_from_gs(gs: &Segment) -> FunctionalGroup {
    FunctionalGroup {
        functional_id_code: gs.value(1).to_string(),
        sender_code: gs.value(2).to_string(),
        receiver_code: gs.value(3).to_string(),
        date: gs.value(4).to_string(),
        time: gs.value(5).to_string(),
        control_number: gs.value(6).to_string(),
        version: gs.value(8).to_string(),
        transaction_sets: Vec::new(),
    }
}

fn synthetic_group() -> FunctionalGroup {
    FunctionalGroup {
        functional_id_code: String::new(),
        sender_code: String::new(),
        receiver_code: String::new(),
        date: String::new(),
        time: String::new(),
        control_number: String::new(),
        version: String::new(),
        transaction_sets: Vec::new(),
    }
}

fn assemble_envelopes(
    segments: &[Segment],
    interchange: &mut Interchange,
    limits: &Limits,
    warnings: &mut Vec<Warning>,
) -> EdiResult<()> {
    let mut open_group: Option<FunctionalGroup> = None;
    let mut open_ts: Option<Vec<Segment>> = None;

    for segment in segments {
        match segment.id.as_str() {
            "ISA" => {}
            "GS" => {
                close_open_ts(&mut open_ts, &mut open_group, limits, warnings, segment.position)?;
                if let Some(group) = open_group.take() {
                    warnings.push(
                        Warning::envelope("GS without matching GE before next group")
                            .at_position(segment.position),
                    );
                    interchange.functional_groups.push(group);
                }
                open_group = Some(group_from_gs(segment));
            }
            "GE" => {
                close_open_ts(&mut open_ts, &mut open_group, limits, warnings, segment.position)?;
                match open_group.take() {
                    Some(group) => {
                        check_count(
                            segment.value(1),
                            group.transaction_sets.len(),
                            "GE transaction set count",
                            segment.position,
                            warnings,
                        );
                        interchange.functional_groups.push(group);
                    }
                    None => warnings.push(
                        Warning::envelope("GE without matching GS").at_position(segment.position),
                    ),
                }
            }
            "ST" => {
                close_open_ts(&mut open_ts, &mut open_group, limits, warnings, segment.position)?;
                open_ts = Some(vec![segment.clone()]);
            }
            "SE" => {
                if let Some(mut buffer) = open_ts.take() {
                    buffer.push(segment.clone());
                    check_count(
                        segment.value(1),
                        buffer.len(),
                        "SE segment count",
                        segment.position,
                        warnings,
                    );
                    finish_ts(buffer, &mut open_group, interchange, limits, warnings)?;
                } else {
                    warnings.push(
                        Warning::envelope("SE without matching ST").at_position(segment.position),
                    );
                }
            }
            "IEA" => {
                close_open_ts(&mut open_ts, &mut open_group, limits, warnings, segment.position)?;
                if let Some(group) = open_group.take() {
                    warnings.push(
                        Warning::envelope("GS without matching GE at interchange end")
                            .at_position(segment.position),
                    );
                    interchange.functional_groups.push(group);
                }
                check_count(
                    segment.value(1),
                    interchange.functional_groups.len(),
                    "IEA functional group count",
                    segment.position,
                    warnings,
                );
            }
            _ => match open_ts.as_mut() {
                Some(buffer) => buffer.push(segment.clone()),
                None => {
                    // Content outside any ST envelope still deserves a home:
                    // synthesize a transaction set rather than dropping it.
                    warnings.push(
                        Warning::envelope(format!(
                            "{} segment outside ST envelope; synthesizing transaction set",
                            segment.id
                        ))
                        .at_position(segment.position),
                    );
                    open_ts = Some(vec![segment.clone()]);
                }
            },
        }
    }

    if open_ts.is_some() {
        warnings.push(Warning::envelope("ST without matching SE at end of input"));
        close_open_ts(&mut open_ts, &mut open_group, limits, warnings, 0)?;
    }
    if let Some(group) = open_group.take() {
        warnings.push(Warning::envelope("GS without matching GE at end of input"));
        interchange.functional_groups.push(group);
    }

    Ok(())
}

// Flushes a dangling ST buffer into the enclosing (possibly synthetic) group.
fn close_open_ts(
    open_ts: &mut Option<Vec<Segment>>,
    open_group: &mut Option<FunctionalGroup>,
    limits: &Limits,
    warnings: &mut Vec<Warning>,
    _position: usize,
) -> EdiResult<()> {
    if let Some(buffer) = open_ts.take() {
        let ts = build_ts(buffer, limits, warnings)?;
        group_for(open_group, warnings).transaction_sets.push(ts);
    }
    Ok(())
}

fn finish_ts(
    buffer: Vec<Segment>,
    open_group: &mut Option<FunctionalGroup>,
    interchange: &mut Interchange,
    limits: &Limits,
    warnings: &mut Vec<Warning>,
) -> EdiResult<()> {
    let ts = build_ts(buffer, limits, warnings)?;
    match open_group.as_mut() {
        Some(group) => group.transaction_sets.push(ts),
        None => {
            warnings.push(Warning::envelope(
                "ST envelope outside any functional group; synthesizing group",
            ));
            let mut group = synthetic_group();
            group.transaction_sets.push(ts);
            interchange.functional_groups.push(group);
        }
    }
    Ok(())
}

fn group_for<'a>(
    open_group: &'a mut Option<FunctionalGroup>,
    warnings: &mut Vec<Warning>,
) -> &'a mut FunctionalGroup {
    if open_group.is_none() {
        warnings.push(Warning::envelope(
            "transaction set outside any functional group; synthesizing group",
        ));
        *open_group = Some(synthetic_group());
    }
    open_group.as_mut().unwrap()
}

fn build_ts(
    buffer: Vec<Segment>,
    limits: &Limits,
    warnings: &mut Vec<Warning>,
) -> EdiResult<TransactionSet> {
    let st = buffer.iter().find(|s| s.id == "ST");
    let bht = buffer.iter().find(|s| s.id == "BHT");

    let (mut hierarchy, hierarchy_warnings) = resolve(&buffer, limits)?;
    warnings.extend(hierarchy_warnings);
    for node in &mut hierarchy.nodes {
        node.claims = assemble(&node.segments);
    }

    Ok(TransactionSet {
        id_code: st.map(|s| s.value(1).to_string()).unwrap_or_default(),
        control_number: st.map(|s| s.value(2).to_string()).unwrap_or_default(),
        reference: bht.map(|s| s.value(3).to_string()).unwrap_or_default(),
        date: bht.map(|s| s.value(4).to_string()).unwrap_or_default(),
        transaction_type: bht.map(|s| s.value(6).to_string()).unwrap_or_default(),
        segments: buffer,
        hierarchy,
    })
}

fn check_count(
    declared: &str,
    actual: usize,
    what: &str,
    position: usize,
    warnings: &mut Vec<Warning>,
) {
    if let Ok(declared) = declared.trim().parse::<usize>() {
        if declared != actual {
            warnings.push(
                Warning::envelope(format!(
                    "{} mismatch: trailer declares {}, found {}",
                    what, declared, actual
                ))
                .at_position(position),
            );
        }
    }
}
