// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

use smol_str::SmolStr;

use super::ids::ActorId;

/// A conversation participant. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    actor_id: ActorId,
    name: SmolStr,
}

impl Actor {
    pub(crate) fn new(actor_id: ActorId, name: impl Into<SmolStr>) -> Self {
        Self {
            actor_id,
            name: name.into(),
        }
    }

    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
