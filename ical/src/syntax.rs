// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Syntax layer: turns raw text into an ordered sequence of properties and carves
//! `BEGIN`/`END` containers out of such sequences. Nothing here knows what a calendar,
//! event or alarm is.

mod extract;
mod unfold;

pub use extract::{Block, BlockScan, extract_between, find_block};
pub use unfold::{unfold_file, unfold_reader};
