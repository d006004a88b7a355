// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

//! Graph projections for the external renderer.
//!
//! Both projections are pure functions of the store, recomputed on demand.
//! They serialize to the node/edge lists the graph-rendering boundary
//! consumes, with deterministic creation-order listing.

use serde::Serialize;

use crate::model::Reference;
use crate::query::label::moment_label;
use crate::store::TimelineStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: u64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEdge {
    pub from: u64,
    pub to: u64,
}

/// One node per moment (labeled with its branch address), one edge per
/// non-root `prev -> id` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TimelineGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<TimelineEdge>,
}

impl TimelineGraph {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("timeline graph serializes")
    }
}

pub fn timeline_graph(store: &TimelineStore) -> TimelineGraph {
    let mut nodes = Vec::with_capacity(store.moments().len());
    let mut edges = Vec::new();

    for moment in store.moments().values() {
        let label = moment_label(store, moment.moment_id())
            .expect("moment taken from the store")
            .to_string();
        nodes.push(GraphNode {
            id: moment.moment_id().raw(),
            label,
        });
        if let Some(prev) = moment.prev() {
            edges.push(TimelineEdge {
                from: prev.raw(),
                to: moment.moment_id().raw(),
            });
        }
    }

    TimelineGraph { nodes, edges }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceEdge {
    pub from: u64,
    pub to: Option<u64>,
    /// Pending references project as dangling edges (`to == null`), flagged
    /// so the renderer can style them distinctly rather than omitting them.
    pub pending: bool,
}

/// Nodes are the blocks participating in at least one reference (as `from`
/// or as a resolved `to`), labeled with their text; edges are the reference
/// list verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ReferenceGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<ReferenceEdge>,
}

impl ReferenceGraph {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("reference graph serializes")
    }
}

pub fn reference_graph(store: &TimelineStore) -> ReferenceGraph {
    let participates = |id| {
        store
            .references()
            .iter()
            .any(|r| r.from() == id || r.to() == Some(id))
    };

    let nodes = store
        .blocks()
        .values()
        .filter(|block| participates(block.block_id()))
        .map(|block| GraphNode {
            id: block.block_id().raw(),
            label: block.text().to_owned(),
        })
        .collect();

    let edges = store
        .references()
        .iter()
        .map(|reference: &Reference| ReferenceEdge {
            from: reference.from().raw(),
            to: reference.to().map(|id| id.raw()),
            pending: reference.is_pending(),
        })
        .collect();

    ReferenceGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::{reference_graph, timeline_graph};
    use crate::model::fixtures::two_actor_chat_with_opening;

    #[test]
    fn timeline_graph_lists_one_node_per_moment_and_one_edge_per_link() {
        let (mut store, chat_id, alice, bob, root) = two_actor_chat_with_opening();
        let (m2, _) = store.create_moment(Some(root), bob, "b").expect("m2");
        let (m3, _) = store.create_moment(Some(m2), alice, "a").expect("m3");
        for id in [m2, m3] {
            store.add_moment_to_chat(chat_id, id).expect("add");
        }

        let graph = timeline_graph(&store);
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.nodes[0].label, "0.0");
        assert_eq!(graph.edges[0].from, root.raw());
        assert_eq!(graph.edges[0].to, m2.raw());
    }

    #[test]
    fn timeline_graph_is_idempotent_without_mutation() {
        let (store, _, _, _, _) = two_actor_chat_with_opening();
        assert_eq!(timeline_graph(&store), timeline_graph(&store));
        assert_eq!(reference_graph(&store), reference_graph(&store));
    }

    #[test]
    fn reference_graph_includes_pending_edges_as_dangling() {
        let (mut store, _, alice, bob, moment_id) = two_actor_chat_with_opening();
        let from = store
            .block_for_actor(moment_id, alice)
            .expect("alice block")
            .block_id();
        // A block that participates in no reference stays out of the graph.
        store
            .append_block_to_moment(moment_id, bob, "lurking")
            .expect("bob block");
        store.open_reference(from).expect("open");

        let graph = reference_graph(&store);
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].id, from.raw());
        assert_eq!(graph.nodes[0].label, "hi");
        assert_eq!(graph.edges.len(), 1);
        assert!(graph.edges[0].pending);
        assert_eq!(graph.edges[0].to, None);

        let json = graph.to_json();
        assert!(json["edges"][0]["to"].is_null());
        assert_eq!(json["edges"][0]["pending"], true);
    }

    #[test]
    fn resolved_reference_pulls_both_endpoints_into_the_graph() {
        let (mut store, _, alice, bob, moment_id) = two_actor_chat_with_opening();
        let from = store
            .block_for_actor(moment_id, alice)
            .expect("alice block")
            .block_id();
        let to = store
            .append_block_to_moment(moment_id, bob, "answer")
            .expect("bob block");
        store.open_reference(from).expect("open");
        store.resolve_pending_references(to).expect("resolve");

        let graph = reference_graph(&store);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].to, Some(to.raw()));
        assert!(!graph.edges[0].pending);
    }
}
