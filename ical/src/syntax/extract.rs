// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Container extraction: the lines between one `BEGIN:<TAG>` and its `END:<TAG>`.
//!
//! Only a single level is understood. A second `BEGIN` of the same tag before the first one
//! is closed is an error, not a nested container.

use std::ops::RangeInclusive;

use crate::error::ErrorCode;
use crate::keyword::{KW_BEGIN, KW_END};
use crate::property::Property;

/// The contents of one container and where it sat in the scanned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Properties strictly between `BEGIN` and `END`, in order
    pub contents: Vec<Property>,

    /// Indices covered by the container, `BEGIN` and `END` lines included
    pub span: RangeInclusive<usize>,
}

/// Result of looking for a container in a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockScan {
    /// A well-formed container was found
    Found(Block),

    /// The tag never appears
    Absent,

    /// The tag appears but the `BEGIN`/`END` pairing is broken
    Malformed,
}

/// Extract the first container named `tag` from `props`.
///
/// ## Errors
///
/// Returns `on_failure` if the container is absent, nested, unterminated, or closed without
/// being opened.
pub fn extract_between(
    props: &[Property],
    tag: &str,
    on_failure: ErrorCode,
) -> Result<Block, ErrorCode> {
    match find_block(props, tag) {
        BlockScan::Found(block) => Ok(block),
        BlockScan::Absent | BlockScan::Malformed => Err(on_failure),
    }
}

/// Look for the first container named `tag`, telling a missing container apart from a
/// broken one.
#[must_use]
pub fn find_block(props: &[Property], tag: &str) -> BlockScan {
    let mut start = None;
    let mut opened = 0usize;
    let mut closed = 0usize;
    let mut contents = Vec::new();

    for (i, prop) in props.iter().enumerate() {
        if is_tag_line(prop, KW_BEGIN, tag) {
            opened += 1;
            if opened != 1 {
                tracing::debug!(tag, line = i, "container opened twice");
                return BlockScan::Malformed;
            }
            start = Some(i);
        } else if is_tag_line(prop, KW_END, tag) {
            closed += 1;
            let Some(start) = start.filter(|_| closed == opened) else {
                tracing::debug!(tag, line = i, "container closed without being opened");
                return BlockScan::Malformed;
            };
            tracing::trace!(tag, start, end = i, "extracted container");
            return BlockScan::Found(Block {
                contents,
                span: start..=i,
            });
        } else if opened == 1 {
            contents.push(prop.clone());
        }
    }

    if opened == 0 {
        BlockScan::Absent
    } else {
        tracing::debug!(tag, "container never closed");
        BlockScan::Malformed
    }
}

fn is_tag_line(prop: &Property, keyword: &str, tag: &str) -> bool {
    prop.is_named(keyword)
        && prop
            .value
            .strip_prefix(':')
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}
