// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

//! Timeline store — exclusive owner of the entity collections and the
//! reference list.

pub mod timeline;

pub use timeline::{EntityKind, StoreError, TimelineStore};
