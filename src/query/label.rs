// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

//! Hierarchical time labels.
//!
//! A moment's label is a stable branch address computed purely from the
//! store's parent-pointer structure, usable both for display and for
//! addressing-mode input.

use std::fmt;

use smol_str::SmolStr;

use crate::model::MomentId;
use crate::store::TimelineStore;

/// Computes the `"<depth>.<sibling_index>"` address of a moment.
///
/// Depth counts `prev` hops to a root (roots have depth 0). The sibling
/// index is the moment's 0-based position, in creation order, among every
/// moment in the store sharing its `prev` — roots group as children of null.
/// Grouping is store-global, not chat-scoped, so a moment's label does not
/// depend on which chat is viewing it.
pub fn moment_label(store: &TimelineStore, moment_id: MomentId) -> Result<SmolStr, LabelError> {
    let target = store
        .moment(moment_id)
        .ok_or(LabelError::UnknownMoment(moment_id))?;

    let mut depth: usize = 0;
    let mut current = target;
    while let Some(prev_id) = current.prev() {
        current = store
            .moment(prev_id)
            .ok_or(LabelError::UnknownMoment(prev_id))?;
        depth += 1;
    }

    let sibling_index = store
        .moments()
        .values()
        .filter(|moment| moment.prev() == target.prev())
        .position(|moment| moment.moment_id() == moment_id)
        .expect("moment is among its own siblings");

    let mut depth_buf = itoa::Buffer::new();
    let mut index_buf = itoa::Buffer::new();
    let mut label = String::with_capacity(8);
    label.push_str(depth_buf.format(depth));
    label.push('.');
    label.push_str(index_buf.format(sibling_index));
    Ok(SmolStr::from(label))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    UnknownMoment(MomentId),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMoment(moment_id) => write!(f, "unknown moment (id={moment_id})"),
        }
    }
}

impl std::error::Error for LabelError {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{moment_label, LabelError};
    use crate::model::fixtures::two_actor_chat_with_opening;
    use crate::model::MomentId;
    use crate::store::TimelineStore;

    #[test]
    fn root_moment_labels_as_zero_zero() {
        let (store, _, _, _, root) = two_actor_chat_with_opening();
        assert_eq!(moment_label(&store, root).expect("label"), "0.0");
    }

    #[test]
    fn unknown_moment_is_an_error() {
        let store = TimelineStore::new();
        let bogus = MomentId::from_raw(5);
        assert_eq!(
            moment_label(&store, bogus),
            Err(LabelError::UnknownMoment(bogus))
        );
    }

    #[rstest]
    #[case(0, "1.0")]
    #[case(1, "1.1")]
    #[case(2, "1.2")]
    fn siblings_share_depth_and_get_distinct_indices(
        #[case] child: usize,
        #[case] expected: &str,
    ) {
        let (mut store, chat_id, _, bob, root) = two_actor_chat_with_opening();
        let mut children = Vec::new();
        for text in ["b1", "b2", "b3"] {
            let (id, _) = store.create_moment(Some(root), bob, text).expect("child");
            store.add_moment_to_chat(chat_id, id).expect("add");
            children.push(id);
        }

        assert_eq!(moment_label(&store, children[child]).expect("label"), expected);
    }

    #[test]
    fn depth_counts_prev_hops() {
        let (mut store, chat_id, alice, bob, root) = two_actor_chat_with_opening();
        let (m2, _) = store.create_moment(Some(root), bob, "b").expect("m2");
        let (m3, _) = store.create_moment(Some(m2), alice, "a").expect("m3");
        for id in [m2, m3] {
            store.add_moment_to_chat(chat_id, id).expect("add");
        }

        assert_eq!(moment_label(&store, root).expect("label"), "0.0");
        assert_eq!(moment_label(&store, m2).expect("label"), "1.0");
        assert_eq!(moment_label(&store, m3).expect("label"), "2.0");
    }

    #[test]
    fn labels_are_deterministic() {
        let (store, _, _, _, root) = two_actor_chat_with_opening();
        let first = moment_label(&store, root).expect("first");
        let second = moment_label(&store, root).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn sibling_grouping_is_store_global_across_chats() {
        // Two chats, each with its own root: the second chat's root is the
        // second child of null store-wide, so it labels "0.1", not "0.0".
        let (mut store, _, alice, _, _) = two_actor_chat_with_opening();
        let other_chat = store.create_chat("Chat 2", None).expect("chat 2");
        store.add_actor_to_chat(other_chat, alice).expect("add");
        let (other_root, _) = store.create_moment(None, alice, "elsewhere").expect("root 2");
        store
            .add_moment_to_chat(other_chat, other_root)
            .expect("add moment");

        assert_eq!(moment_label(&store, other_root).expect("label"), "0.1");
    }
}
