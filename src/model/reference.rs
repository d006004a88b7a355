// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

use super::ids::BlockId;

/// A directed citation edge between two blocks.
///
/// References are opened *pending* (`to == None`) when a coordinate is
/// addressed, and resolved to the next block created. More than one reference
/// may be pending at a time; they all resolve to the same destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    from: BlockId,
    to: Option<BlockId>,
}

impl Reference {
    pub(crate) fn pending(from: BlockId) -> Self {
        Self { from, to: None }
    }

    pub fn from(&self) -> BlockId {
        self.from
    }

    pub fn to(&self) -> Option<BlockId> {
        self.to
    }

    pub fn is_pending(&self) -> bool {
        self.to.is_none()
    }

    pub(crate) fn resolve(&mut self, to: BlockId) {
        self.to = Some(to);
    }
}

#[cfg(test)]
mod tests {
    use super::Reference;
    use crate::model::IdGen;

    #[test]
    fn reference_opens_pending_and_resolves() {
        let mut ids = IdGen::new();
        let from = ids.next_id();
        let to = ids.next_id();

        let mut reference = Reference::pending(from);
        assert!(reference.is_pending());
        assert_eq!(reference.to(), None);

        reference.resolve(to);
        assert!(!reference.is_pending());
        assert_eq!(reference.from(), from);
        assert_eq!(reference.to(), Some(to));
    }
}
