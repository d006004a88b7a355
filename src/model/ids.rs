// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

use std::fmt;
use std::marker::PhantomData;

/// A stable numeric identifier used across the model.
///
/// Ids are issued by [`IdGen`] from one sequence shared by every entity kind,
/// so an id is unique process-wide. The sequence is monotonic, which makes id
/// order equal creation order; ordered maps keyed by id therefore iterate in
/// creation order, and the time labeler's sibling indexing depends on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub(crate) fn from_raw(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn raw(self) -> u64 {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Issues unique entity ids from a single shared sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id<T>(&mut self) -> Id<T> {
        let value = self.next;
        self.next += 1;
        Id::from_raw(value)
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActorIdTag {}
pub type ActorId = Id<ActorIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockIdTag {}
pub type BlockId = Id<BlockIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MomentIdTag {}
pub type MomentId = Id<MomentIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChatIdTag {}
pub type ChatId = Id<ChatIdTag>;

#[cfg(test)]
mod tests {
    use super::{ActorId, IdGen, MomentId};

    #[test]
    fn idgen_shares_one_sequence_across_kinds() {
        let mut ids = IdGen::new();
        let a: ActorId = ids.next_id();
        let m: MomentId = ids.next_id();
        let b: ActorId = ids.next_id();

        assert_eq!(a.raw(), 1);
        assert_eq!(m.raw(), 2);
        assert_eq!(b.raw(), 3);
    }

    #[test]
    fn ids_are_monotonic() {
        let mut ids = IdGen::new();
        let first: MomentId = ids.next_id();
        let second: MomentId = ids.next_id();
        assert!(first < second);
        assert_eq!(second.to_string(), "2");
    }
}
