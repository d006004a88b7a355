// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

use super::ids::{ActorId, BlockId};

/// Text given to a block synthesized by addressing a coordinate nobody has
/// spoken at yet.
pub const PLACEHOLDER_TEXT: &str = "Text";

/// A single message authored by one actor within a moment.
///
/// A block is owned by exactly one moment for its lifetime. Its text is
/// written once by the flow that created it; the only later mutation is the
/// placeholder-fill performed by an addressed send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    block_id: BlockId,
    text: String,
    actor_id: ActorId,
    placeholder: bool,
}

impl Block {
    pub(crate) fn new(block_id: BlockId, actor_id: ActorId, text: impl Into<String>) -> Self {
        Self {
            block_id,
            text: text.into(),
            actor_id,
            placeholder: false,
        }
    }

    pub(crate) fn placeholder(block_id: BlockId, actor_id: ActorId) -> Self {
        Self {
            block_id,
            text: PLACEHOLDER_TEXT.to_owned(),
            actor_id,
            placeholder: true,
        }
    }

    pub fn block_id(&self) -> BlockId {
        self.block_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// The placeholder-fill case: writes the real text into a block that was
    /// synthesized by the reference resolver.
    pub(crate) fn fill_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.placeholder = false;
    }
}
