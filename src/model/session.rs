// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

use super::cursor::{Axis, ComposeSelection, Cursor};
use super::ids::ChatId;

/// Per-session navigation state.
///
/// Chat selection is an explicit field resolved once per interaction, never
/// re-derived by search. The session reads entity state through the store's
/// queries and mutates it only via intents — it holds ids and indices, never
/// entity data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    active_chat_id: Option<ChatId>,
    axis: Axis,
    cursor: Cursor,
    addressing_input: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_chat_id(&self) -> Option<ChatId> {
        self.active_chat_id
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn compose_selection(&self) -> ComposeSelection {
        self.cursor.compose_selection()
    }

    /// Whether the input surface is in addressing mode — the observable side
    /// effect of entering/leaving [`Cursor::Addressing`].
    pub fn addressing_input(&self) -> bool {
        self.addressing_input
    }

    pub(crate) fn set_active_chat_id(&mut self, chat_id: Option<ChatId>) {
        self.active_chat_id = chat_id;
    }

    pub(crate) fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    pub(crate) fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    pub(crate) fn set_addressing_input(&mut self, addressing_input: bool) {
        self.addressing_input = addressing_input;
    }

    /// Drops selection state that does not carry across chats.
    pub(crate) fn reset_cursor(&mut self) {
        self.cursor = Cursor::default();
        self.axis = Axis::Actor;
        self.addressing_input = false;
    }
}
