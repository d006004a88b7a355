// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

use smallvec::SmallVec;

use super::ids::{BlockId, MomentId};

/// One node in the branching timeline tree.
///
/// `prev` links form a forest: moments with `prev == None` are roots, every
/// other moment has exactly one parent, and a parent may have any number of
/// children. `prev` is fixed at creation and always points at a moment that
/// already existed, so the forest is acyclic by construction. The block list
/// may later grow (addressing into an existing moment), holding at most one
/// block per actor — the store enforces that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    moment_id: MomentId,
    block_ids: SmallVec<[BlockId; 2]>,
    prev: Option<MomentId>,
}

impl Moment {
    pub(crate) fn new(moment_id: MomentId, prev: Option<MomentId>, first_block: BlockId) -> Self {
        let mut block_ids = SmallVec::new();
        block_ids.push(first_block);
        Self {
            moment_id,
            block_ids,
            prev,
        }
    }

    pub fn moment_id(&self) -> MomentId {
        self.moment_id
    }

    pub fn block_ids(&self) -> &[BlockId] {
        &self.block_ids
    }

    pub fn prev(&self) -> Option<MomentId> {
        self.prev
    }

    pub(crate) fn push_block(&mut self, block_id: BlockId) {
        self.block_ids.push(block_id);
    }
}
