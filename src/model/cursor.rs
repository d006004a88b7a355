// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

use super::ids::{ActorId, MomentId};

/// Which dimension cycling affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Actor,
    Moment,
}

impl Axis {
    pub fn flipped(self) -> Self {
        match self {
            Self::Actor => Self::Moment,
            Self::Moment => Self::Actor,
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::Actor
    }
}

/// The compose-mode selection: which actor is speaking, into which moment.
///
/// Both halves are independent single-scalar selections, not a 2-D cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposeSelection {
    pub actor_id: Option<ActorId>,
    pub moment_id: Option<MomentId>,
}

/// The navigation cursor.
///
/// `Addressing` is a full 2-D coordinate — indices into the active chat's
/// moment and actor sequences — used to point at an arbitrary cell for
/// citation. It carries the compose selection it was entered from (`resume`)
/// so that leaving addressing mode restores who was speaking, and into which
/// moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Compose(ComposeSelection),
    Addressing {
        moment_index: usize,
        actor_index: usize,
        resume: ComposeSelection,
    },
}

impl Cursor {
    pub fn is_addressing(&self) -> bool {
        matches!(self, Self::Addressing { .. })
    }

    /// The compose selection, whether live or parked behind an addressing
    /// excursion.
    pub fn compose_selection(&self) -> ComposeSelection {
        match *self {
            Self::Compose(selection) => selection,
            Self::Addressing { resume, .. } => resume,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::Compose(ComposeSelection::default())
    }
}
