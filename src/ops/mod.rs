// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

//! Session intents — the discrete inputs the rendering surface sends back.
//!
//! [`apply_intent`] is the single mutation entry point. It interprets the
//! two-axis navigation state machine, drives the reference resolver, and
//! requests every entity mutation through the timeline store. Each intent
//! runs to completion before the next is processed, so invariants never
//! tolerate partial states.

use std::fmt;

use smol_str::SmolStr;

use crate::model::{ActorId, Axis, BlockId, Chat, ChatId, ComposeSelection, Cursor, MomentId, Session};
use crate::query::label::{moment_label, LabelError};
use crate::store::{EntityKind, StoreError, TimelineStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Compose mode: author a new moment. Addressing mode: write into the
    /// addressed cell.
    SendMessage { text: String },
    /// Advance the selection along the active axis (actors forward, moments
    /// backward).
    CycleAxis,
    /// Flip the active axis (the modifier-key affordance).
    ToggleAxis,
    /// Flip Compose <-> Addressing.
    ToggleAddressing,
    /// Cite the addressed cell (the trigger-character affordance).
    CommitAddress,
    SelectActor { actor_id: ActorId },
    SelectMoment { moment_id: MomentId },
    CreateActor { name: String },
    CreateChat { name: String },
    SelectChat { chat_id: ChatId },
}

/// What an applied intent did, so the UI can react without re-deriving state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    MessageSent {
        moment_id: MomentId,
        block_id: BlockId,
        resolved_references: usize,
    },
    /// An addressed send: the block now holding `text` at the addressed cell.
    AddressedBlockWritten {
        moment_id: MomentId,
        block_id: BlockId,
        resolved_references: usize,
    },
    CursorMoved,
    AxisSet {
        axis: Axis,
    },
    AddressingEntered,
    AddressingExited,
    AddressCommitted {
        cited_block_id: BlockId,
        /// The inline citation marker to insert into the composing input,
        /// e.g. `"@1.0[1] "`.
        token: SmolStr,
        placeholder_created: bool,
    },
    ActorSelected {
        actor_id: Option<ActorId>,
    },
    MomentSelected {
        moment_id: Option<MomentId>,
    },
    ActorCreated {
        actor_id: ActorId,
    },
    ChatCreated {
        chat_id: ChatId,
    },
    ChatSelected {
        chat_id: Option<ChatId>,
    },
    /// Nothing to do (e.g. cycling an empty collection).
    Noop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    NoActiveChat,
    NoActiveActor,
    /// `CommitAddress` fired outside addressing mode.
    NotAddressing,
    InvalidAddress {
        moment_index: usize,
        actor_index: usize,
        moment_count: usize,
        actor_count: usize,
    },
    Store(StoreError),
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveChat => f.write_str("no active chat"),
            Self::NoActiveActor => f.write_str("no active actor to speak as"),
            Self::NotAddressing => f.write_str("not in addressing mode"),
            Self::InvalidAddress {
                moment_index,
                actor_index,
                moment_count,
                actor_count,
            } => {
                write!(
                    f,
                    "address ({moment_index}, {actor_index}) out of range for {moment_count} moments x {actor_count} actors"
                )
            }
            Self::Store(err) => write!(f, "store rejected mutation: {err}"),
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ApplyError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<LabelError> for ApplyError {
    fn from(err: LabelError) -> Self {
        let LabelError::UnknownMoment(moment_id) = err;
        Self::Store(StoreError::UnknownEntity {
            kind: EntityKind::Moment,
            id: moment_id.raw(),
        })
    }
}

/// Applies one intent against the store and session.
///
/// Errors are local and recoverable: a rejected intent has no observable
/// effect on either the store or the session.
pub fn apply_intent(
    store: &mut TimelineStore,
    session: &mut Session,
    intent: &Intent,
) -> Result<Outcome, ApplyError> {
    match intent {
        Intent::SendMessage { text } => send_message(store, session, text),
        Intent::CycleAxis => cycle_axis(store, session),
        Intent::ToggleAxis => Ok(toggle_axis(session)),
        Intent::ToggleAddressing => toggle_addressing(store, session),
        Intent::CommitAddress => commit_address(store, session),
        Intent::SelectActor { actor_id } => select_actor(store, session, *actor_id),
        Intent::SelectMoment { moment_id } => select_moment(store, session, *moment_id),
        Intent::CreateActor { name } => create_actor(store, session, name),
        Intent::CreateChat { name } => create_chat(store, session, name),
        Intent::SelectChat { chat_id } => select_chat(store, session, *chat_id),
    }
}

// Extracted intent-handler implementation (navigation + reference resolver).
include!("intent_impl.rs");
