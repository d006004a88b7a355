// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

//! Per-frame snapshot of the active chat for the rendering boundary.
//!
//! The renderer receives, per frame, the chat's ordered actor list, its
//! moments resolved to per-actor cells, and the current cursor/addressing
//! coordinate for highlighting. The snapshot is plain data; nothing in it
//! borrows the store.

use serde::Serialize;

use crate::model::{Axis, Cursor, Session};
use crate::query::label::moment_label;
use crate::store::TimelineStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorCell {
    pub actor_id: u64,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockCell {
    pub actor_id: u64,
    pub block_id: Option<u64>,
    pub text: Option<String>,
    pub placeholder: bool,
    /// Set on the one cell the addressing cursor points at.
    pub addressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MomentRow {
    pub moment_id: u64,
    pub label: String,
    pub active: bool,
    pub cells: Vec<BlockCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatFrame {
    pub chat_id: u64,
    pub name: String,
    pub axis: String,
    pub addressing: bool,
    pub actors: Vec<ActorCell>,
    pub moments: Vec<MomentRow>,
}

impl ChatFrame {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("chat frame serializes")
    }
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Actor => "actor",
        Axis::Moment => "moment",
    }
}

/// Derives the active chat's frame, or `None` when no chat is selected.
pub fn chat_frame(store: &TimelineStore, session: &Session) -> Option<ChatFrame> {
    let chat = store.chat(session.active_chat_id()?)?;
    let selection = session.compose_selection();
    let address = match session.cursor() {
        Cursor::Addressing {
            moment_index,
            actor_index,
            ..
        } => Some((moment_index, actor_index)),
        Cursor::Compose(_) => None,
    };

    let actors = chat
        .actor_ids()
        .iter()
        .filter_map(|&actor_id| store.actor(actor_id))
        .map(|actor| ActorCell {
            actor_id: actor.actor_id().raw(),
            name: actor.name().to_owned(),
            active: selection.actor_id == Some(actor.actor_id()),
        })
        .collect();

    let moments = chat
        .moment_ids()
        .iter()
        .enumerate()
        .filter_map(|(row, &moment_id)| {
            let moment = store.moment(moment_id)?;
            let label = moment_label(store, moment_id).ok()?.to_string();
            let cells = chat
                .actor_ids()
                .iter()
                .enumerate()
                .map(|(column, &actor_id)| {
                    let block = store.block_for_actor(moment_id, actor_id);
                    BlockCell {
                        actor_id: actor_id.raw(),
                        block_id: block.map(|b| b.block_id().raw()),
                        text: block.map(|b| b.text().to_owned()),
                        placeholder: block.is_some_and(|b| b.is_placeholder()),
                        addressed: address == Some((row, column)),
                    }
                })
                .collect();
            Some(MomentRow {
                moment_id: moment.moment_id().raw(),
                label,
                active: selection.moment_id == Some(moment_id),
                cells,
            })
        })
        .collect();

    Some(ChatFrame {
        chat_id: chat.chat_id().raw(),
        name: chat.name().to_owned(),
        axis: axis_name(session.axis()).to_owned(),
        addressing: session.addressing_input(),
        actors,
        moments,
    })
}
