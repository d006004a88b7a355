// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

use crate::model::{
    Actor, ActorId, Block, BlockId, Chat, ChatId, IdGen, Moment, MomentId, Reference,
};

/// Owns the four entity collections plus the reference list.
///
/// Every mutation validates its inputs before touching any collection, so a
/// rejected operation leaves the store unchanged. Entities are append-only:
/// there is no deletion in this model. Collections are ordered maps keyed by
/// id; ids are monotonic, so map iteration order is creation order — the
/// labeler's sibling indexing relies on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStore {
    ids: IdGen,
    actors: BTreeMap<ActorId, Actor>,
    blocks: BTreeMap<BlockId, Block>,
    moments: BTreeMap<MomentId, Moment>,
    chats: BTreeMap<ChatId, Chat>,
    references: Vec<Reference>,
}

impl TimelineStore {
    pub fn new() -> Self {
        Self {
            ids: IdGen::new(),
            actors: BTreeMap::new(),
            blocks: BTreeMap::new(),
            moments: BTreeMap::new(),
            chats: BTreeMap::new(),
            references: Vec::new(),
        }
    }

    // --- mutations ---

    pub fn add_actor(&mut self, name: impl Into<SmolStr>) -> ActorId {
        let actor_id = self.ids.next_id();
        self.actors.insert(actor_id, Actor::new(actor_id, name));
        actor_id
    }

    /// Creates a new moment holding one initial block authored by `actor_id`.
    ///
    /// `prev` must name an existing moment (or `None` for a root); it can
    /// never name a future moment, which keeps the forest acyclic by
    /// construction.
    pub fn create_moment(
        &mut self,
        prev: Option<MomentId>,
        actor_id: ActorId,
        text: impl Into<String>,
    ) -> Result<(MomentId, BlockId), StoreError> {
        self.require_actor(actor_id)?;
        if let Some(prev_id) = prev {
            self.require_moment(prev_id)?;
        }

        let block_id = self.ids.next_id();
        let moment_id = self.ids.next_id();
        self.blocks
            .insert(block_id, Block::new(block_id, actor_id, text));
        self.moments
            .insert(moment_id, Moment::new(moment_id, prev, block_id));
        Ok((moment_id, block_id))
    }

    /// Appends a block for `actor_id` to an existing moment.
    ///
    /// The one-block-per-actor invariant is checked before anything is
    /// inserted; it is load-bearing for addressing, which treats a
    /// (moment, actor) coordinate as naming at most one block.
    pub fn append_block_to_moment(
        &mut self,
        moment_id: MomentId,
        actor_id: ActorId,
        text: impl Into<String>,
    ) -> Result<BlockId, StoreError> {
        self.append_block(moment_id, actor_id, BlockSeed::Text(text.into()))
    }

    /// Appends a fixed-text placeholder block, used when addressing a
    /// coordinate nobody has spoken at yet.
    pub(crate) fn append_placeholder_block(
        &mut self,
        moment_id: MomentId,
        actor_id: ActorId,
    ) -> Result<BlockId, StoreError> {
        self.append_block(moment_id, actor_id, BlockSeed::Placeholder)
    }

    fn append_block(
        &mut self,
        moment_id: MomentId,
        actor_id: ActorId,
        seed: BlockSeed,
    ) -> Result<BlockId, StoreError> {
        self.require_actor(actor_id)?;
        let moment = self.require_moment(moment_id)?;
        let duplicate = moment
            .block_ids()
            .iter()
            .any(|id| self.blocks.get(id).is_some_and(|b| b.actor_id() == actor_id));
        if duplicate {
            return Err(StoreError::DuplicateActorInMoment {
                moment_id,
                actor_id,
            });
        }

        let block_id = self.ids.next_id();
        let block = match seed {
            BlockSeed::Text(text) => Block::new(block_id, actor_id, text),
            BlockSeed::Placeholder => Block::placeholder(block_id, actor_id),
        };
        self.blocks.insert(block_id, block);
        self.moments
            .get_mut(&moment_id)
            .expect("moment validated above")
            .push_block(block_id);
        Ok(block_id)
    }

    /// The placeholder-fill case (the only text edit in the model).
    pub(crate) fn fill_block_text(
        &mut self,
        block_id: BlockId,
        text: impl Into<String>,
    ) -> Result<(), StoreError> {
        let block = self
            .blocks
            .get_mut(&block_id)
            .ok_or(StoreError::unknown(EntityKind::Block, block_id.raw()))?;
        block.fill_text(text);
        Ok(())
    }

    pub fn create_chat(
        &mut self,
        name: impl Into<SmolStr>,
        origin_moment_id: Option<MomentId>,
    ) -> Result<ChatId, StoreError> {
        if let Some(origin) = origin_moment_id {
            self.require_moment(origin)?;
        }
        let chat_id = self.ids.next_id();
        self.chats
            .insert(chat_id, Chat::new(chat_id, name, origin_moment_id));
        Ok(chat_id)
    }

    /// Adds an actor to a chat's ordered actor list; a no-op for members.
    pub fn add_actor_to_chat(
        &mut self,
        chat_id: ChatId,
        actor_id: ActorId,
    ) -> Result<(), StoreError> {
        self.require_actor(actor_id)?;
        self.require_chat(chat_id)?;
        self.chats
            .get_mut(&chat_id)
            .expect("chat validated above")
            .push_actor(actor_id);
        Ok(())
    }

    pub fn add_moment_to_chat(
        &mut self,
        chat_id: ChatId,
        moment_id: MomentId,
    ) -> Result<(), StoreError> {
        self.require_moment(moment_id)?;
        self.require_chat(chat_id)?;
        self.chats
            .get_mut(&chat_id)
            .expect("chat validated above")
            .push_moment(moment_id);
        Ok(())
    }

    /// Opens a pending reference from `from`. Multiple references may be
    /// pending simultaneously; they all resolve to the same destination.
    pub fn open_reference(&mut self, from: BlockId) -> Result<(), StoreError> {
        self.require_block(from)?;
        self.references.push(Reference::pending(from));
        Ok(())
    }

    /// Resolves every pending reference to `to` and returns how many were
    /// resolved. This is a batch operation over the full reference list.
    pub fn resolve_pending_references(&mut self, to: BlockId) -> Result<usize, StoreError> {
        self.require_block(to)?;
        let mut resolved = 0;
        for reference in &mut self.references {
            if reference.is_pending() {
                reference.resolve(to);
                resolved += 1;
            }
        }
        Ok(resolved)
    }

    // --- queries ---

    pub fn actor(&self, actor_id: ActorId) -> Option<&Actor> {
        self.actors.get(&actor_id)
    }

    pub fn block(&self, block_id: BlockId) -> Option<&Block> {
        self.blocks.get(&block_id)
    }

    pub fn moment(&self, moment_id: MomentId) -> Option<&Moment> {
        self.moments.get(&moment_id)
    }

    pub fn chat(&self, chat_id: ChatId) -> Option<&Chat> {
        self.chats.get(&chat_id)
    }

    pub fn actors(&self) -> &BTreeMap<ActorId, Actor> {
        &self.actors
    }

    pub fn blocks(&self) -> &BTreeMap<BlockId, Block> {
        &self.blocks
    }

    pub fn moments(&self) -> &BTreeMap<MomentId, Moment> {
        &self.moments
    }

    pub fn chats(&self) -> &BTreeMap<ChatId, Chat> {
        &self.chats
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn has_pending_references(&self) -> bool {
        self.references.iter().any(Reference::is_pending)
    }

    /// The block `actor_id` holds in `moment_id`, if any. At most one exists.
    pub fn block_for_actor(&self, moment_id: MomentId, actor_id: ActorId) -> Option<&Block> {
        let moment = self.moments.get(&moment_id)?;
        moment
            .block_ids()
            .iter()
            .filter_map(|id| self.blocks.get(id))
            .find(|block| block.actor_id() == actor_id)
    }

    // --- validation ---

    fn require_actor(&self, actor_id: ActorId) -> Result<&Actor, StoreError> {
        self.actors
            .get(&actor_id)
            .ok_or(StoreError::unknown(EntityKind::Actor, actor_id.raw()))
    }

    fn require_block(&self, block_id: BlockId) -> Result<&Block, StoreError> {
        self.blocks
            .get(&block_id)
            .ok_or(StoreError::unknown(EntityKind::Block, block_id.raw()))
    }

    fn require_moment(&self, moment_id: MomentId) -> Result<&Moment, StoreError> {
        self.moments
            .get(&moment_id)
            .ok_or(StoreError::unknown(EntityKind::Moment, moment_id.raw()))
    }

    fn require_chat(&self, chat_id: ChatId) -> Result<&Chat, StoreError> {
        self.chats
            .get(&chat_id)
            .ok_or(StoreError::unknown(EntityKind::Chat, chat_id.raw()))
    }
}

impl Default for TimelineStore {
    fn default() -> Self {
        Self::new()
    }
}

enum BlockSeed {
    Text(String),
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Actor,
    Block,
    Moment,
    Chat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateActorInMoment {
        moment_id: MomentId,
        actor_id: ActorId,
    },
    UnknownEntity {
        kind: EntityKind,
        id: u64,
    },
}

impl StoreError {
    fn unknown(kind: EntityKind, id: u64) -> Self {
        Self::UnknownEntity { kind, id }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateActorInMoment {
                moment_id,
                actor_id,
            } => {
                write!(
                    f,
                    "moment {moment_id} already holds a block for actor {actor_id}"
                )
            }
            Self::UnknownEntity { kind, id } => {
                write!(f, "unknown entity ({kind:?}, id={id})")
            }
        }
    }
}

impl std::error::Error for StoreError {}
