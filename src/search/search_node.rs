use crate::search::{HeuristicValue, NodeId, NO_NODE};
use ordered_float::OrderedFloat;

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] is a node in the search space. It contains information
/// about the state specific to the search, such as path cost and parent
/// node. The state itself lives in the [`crate::search::SearchSpace`].
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    /// Unique identifier of the node within its search space
    node_id: NodeId,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, different depending on the search algorithm.
    f: HeuristicValue,
    /// G-value of the node, i.e. the number of steps from the root of the
    /// search space to this node along the parent links.
    g: HeuristicValue,
    /// H-value of the node. In search algorithms that do not use a heuristic
    /// this is zero.
    h: HeuristicValue,
    /// Action on the edge between this node and its parent, `None` for the
    /// root
    action: Option<A>,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
}

impl<A> SearchNode<A> {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: OrderedFloat(f64::INFINITY),
            g: OrderedFloat(f64::INFINITY),
            h: OrderedFloat(f64::INFINITY),
            action: None,
            parent_id: NO_NODE,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, action: A) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: OrderedFloat(f64::INFINITY),
            g: OrderedFloat(f64::INFINITY),
            h: OrderedFloat(f64::INFINITY),
            action: Some(action),
            parent_id,
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    /// Point this node at a new parent, e.g. after finding a cheaper path to
    /// it. The node keeps its status; callers reopen it as needed.
    pub fn set_parent(&mut self, parent_id: NodeId, action: A) {
        debug_assert_ne!(parent_id, NO_NODE, "Only the root has no parent");
        self.parent_id = parent_id;
        self.action = Some(action);
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }
}
