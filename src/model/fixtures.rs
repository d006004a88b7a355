// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

#![cfg_attr(not(test), allow(dead_code))]

use crate::model::{ActorId, ChatId, MomentId};
use crate::store::TimelineStore;

/// A store holding one chat named "Chat 1" with actors Alice and Bob and no
/// moments yet.
pub(crate) fn two_actor_chat() -> (TimelineStore, ChatId, ActorId, ActorId) {
    let mut store = TimelineStore::new();
    let alice = store.add_actor("Alice");
    let bob = store.add_actor("Bob");
    let chat_id = store.create_chat("Chat 1", None).expect("create chat");
    store.add_actor_to_chat(chat_id, alice).expect("add alice");
    store.add_actor_to_chat(chat_id, bob).expect("add bob");
    (store, chat_id, alice, bob)
}

/// Extends [`two_actor_chat`] with a root moment holding Alice's "hi".
pub(crate) fn two_actor_chat_with_opening(
) -> (TimelineStore, ChatId, ActorId, ActorId, MomentId) {
    let (mut store, chat_id, alice, bob) = two_actor_chat();
    let (moment_id, _) = store
        .create_moment(None, alice, "hi")
        .expect("create opening moment");
    store
        .add_moment_to_chat(chat_id, moment_id)
        .expect("add moment to chat");
    (store, chat_id, alice, bob, moment_id)
}
