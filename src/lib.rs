// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

//! Braid — branching multi-actor chat timelines.
//!
//! A chat is not a flat log: it is a forest of *moments* (discrete
//! time-steps), each holding at most one *block* (message) per actor.
//! *References* overlay a citation graph on the timeline tree, linking a
//! block at one (moment, actor) coordinate to a block created later
//! somewhere else.
//!
//! The crate is a synchronous, single-threaded core: the rendering surface
//! sends discrete [`ops::Intent`]s, the [`store::TimelineStore`] owns all
//! entity state, and the [`query`] layer derives labels, graph projections,
//! and per-frame snapshots on demand.

pub mod model;
pub mod ops;
pub mod query;
pub mod store;
