// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

use smol_str::SmolStr;

use super::ids::{ActorId, ChatId, MomentId};

/// A named conversation scoping a subset of actors and moments.
///
/// `moment_ids` records membership in creation order; the tree structure
/// lives in each moment's `prev`. `actor_ids` is an ordered, duplicate-free
/// list — order matters because navigation cycles through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    chat_id: ChatId,
    name: SmolStr,
    actor_ids: Vec<ActorId>,
    moment_ids: Vec<MomentId>,
    origin_moment_id: Option<MomentId>,
}

impl Chat {
    pub(crate) fn new(
        chat_id: ChatId,
        name: impl Into<SmolStr>,
        origin_moment_id: Option<MomentId>,
    ) -> Self {
        Self {
            chat_id,
            name: name.into(),
            actor_ids: Vec::new(),
            moment_ids: Vec::new(),
            origin_moment_id,
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actor_ids(&self) -> &[ActorId] {
        &self.actor_ids
    }

    pub fn moment_ids(&self) -> &[MomentId] {
        &self.moment_ids
    }

    pub fn origin_moment_id(&self) -> Option<MomentId> {
        self.origin_moment_id
    }

    pub fn actor_index_of(&self, actor_id: ActorId) -> Option<usize> {
        self.actor_ids.iter().position(|&id| id == actor_id)
    }

    pub fn moment_index_of(&self, moment_id: MomentId) -> Option<usize> {
        self.moment_ids.iter().position(|&id| id == moment_id)
    }

    /// Returns `false` if the actor was already a member.
    pub(crate) fn push_actor(&mut self, actor_id: ActorId) -> bool {
        if self.actor_ids.contains(&actor_id) {
            return false;
        }
        self.actor_ids.push(actor_id);
        true
    }

    pub(crate) fn push_moment(&mut self, moment_id: MomentId) -> bool {
        if self.moment_ids.contains(&moment_id) {
            return false;
        }
        self.moment_ids.push(moment_id);
        true
    }
}
