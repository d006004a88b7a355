// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

//! Read-only queries over the timeline store.
//!
//! Queries derive display data — branch labels, graph projections, and the
//! per-frame chat snapshot — recomputed from scratch on demand rather than
//! incrementally maintained.

pub mod frame;
pub mod graph;
pub mod label;
