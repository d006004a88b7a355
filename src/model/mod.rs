// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! Chats scope actors and moments; moments form the branching timeline
//! forest and own per-actor blocks; references form the citation overlay.

pub mod actor;
pub mod block;
pub mod chat;
pub mod cursor;
pub(crate) mod fixtures;
pub mod ids;
pub mod moment;
pub mod reference;
pub mod session;

pub use actor::Actor;
pub use block::{Block, PLACEHOLDER_TEXT};
pub use chat::Chat;
pub use cursor::{Axis, ComposeSelection, Cursor};
pub use ids::{ActorId, BlockId, ChatId, Id, IdGen, MomentId};
pub use moment::Moment;
pub use reference::Reference;
pub use session::Session;
