use crate::search::{Path, SearchNode};
use segvec::{Linear, SegVec};
use std::{collections::HashMap, hash::Hash};

/// Index of a node within one [`SearchSpace`]. Ids are handed out in
/// discovery order starting at 0 for the root, and mean nothing outside the
/// search space that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchSpace`] manages the states and nodes discovered during a single
/// search. Each distinct state gets exactly one node, and nodes link back to
/// the root through their parents.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    registered_nodes: HashMap<S, NodeId>,
}

impl<S: Clone + Eq + Hash, A: Clone> SearchSpace<S, A> {
    pub fn new(root_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId(0);
        registered_nodes.insert(root_state.clone(), root_node_id);
        nodes.push(SearchNode::new_without_parent(root_node_id));
        states.push(root_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
        }
    }

    /// Return the node for `state`, registering a new node with the given
    /// parent if the state has not been seen before. An existing node is
    /// returned untouched, so its status tells the caller which case
    /// happened.
    pub fn insert_or_get_node(
        &mut self,
        state: S,
        action: A,
        parent_id: NodeId,
    ) -> &mut SearchNode<A> {
        let node_id = match self.registered_nodes.get(&state) {
            Some(&node_id) => node_id,
            None => {
                let node_id = NodeId(self.nodes.len());
                self.registered_nodes.insert(state.clone(), node_id);
                self.nodes
                    .push(SearchNode::new_with_parent(node_id, parent_id, action));
                self.states.push(state);
                node_id
            }
        };
        self.get_node_mut(node_id)
    }

    pub fn get_node_id(&self, state: &S) -> Option<NodeId> {
        self.registered_nodes.get(state).copied()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.registered_nodes.contains_key(state)
    }

    #[inline(always)]
    pub fn get_root_node_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode<A> {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// Number of distinct states discovered so far, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Path from the root to `node_id`.
    pub fn extract_path(&self, node_id: NodeId) -> Path<S, A> {
        let mut path = self.extract_path_to_root(node_id);
        path.reverse();
        path
    }

    /// Path from `node_id` to the root, following parent links without
    /// reversing them. For a search space rooted at the goal and grown
    /// through predecessors, this is the forward path from `node_id` to the
    /// goal.
    pub fn extract_path_to_root(&self, node_id: NodeId) -> Path<S, A> {
        let mut states = vec![self.get_state(node_id).clone()];
        let mut actions = vec![];
        let mut current_node = self.get_node(node_id);
        while let Some(action) = current_node.get_action() {
            actions.push(action.clone());
            current_node = self.get_node(current_node.get_parent_id());
            states.push(self.get_state(current_node.get_node_id()).clone());
        }
        Path::new(states, actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchNodeStatus;

    #[test]
    fn insert_or_get_deduplicates_states() {
        let mut search_space = SearchSpace::new("a");
        let root_id = search_space.get_root_node_id();
        let b_id = search_space
            .insert_or_get_node("b", "a->b", root_id)
            .get_node_id();
        assert_eq!(search_space.len(), 2);

        let again = search_space.insert_or_get_node("b", "other", NodeId::new(7));
        assert_eq!(again.get_node_id(), b_id);
        assert_eq!(again.get_parent_id(), root_id);
        assert_eq!(again.get_action(), Some(&"a->b"));
        assert_eq!(search_space.len(), 2);
        assert_eq!(search_space.get_node_id(&"b"), Some(b_id));
        assert!(!search_space.contains(&"z"));
    }

    #[test]
    fn new_nodes_start_new() {
        let mut search_space = SearchSpace::new(0);
        let root_id = search_space.get_root_node_id();
        let node = search_space.insert_or_get_node(1, (), root_id);
        assert_eq!(node.get_status(), SearchNodeStatus::New);
        assert_eq!(search_space.get_state(NodeId::new(1)), &1);
    }

    #[test]
    fn extract_path_in_both_directions() {
        let mut search_space = SearchSpace::new('s');
        let s = search_space.get_root_node_id();
        let a = search_space.insert_or_get_node('a', "s->a", s).get_node_id();
        let b = search_space.insert_or_get_node('b', "a->b", a).get_node_id();

        let forward = search_space.extract_path(b);
        assert_eq!(forward.states(), &['s', 'a', 'b']);
        assert_eq!(forward.actions(), &["s->a", "a->b"]);

        let to_root = search_space.extract_path_to_root(b);
        assert_eq!(to_root.states(), &['b', 'a', 's']);
        assert_eq!(to_root.actions(), &["a->b", "s->a"]);
    }

    #[test]
    fn extract_path_of_root_is_trivial() {
        let search_space: SearchSpace<u8, ()> = SearchSpace::new(9);
        let path = search_space.extract_path(search_space.get_root_node_id());
        assert_eq!(path.states(), &[9]);
        assert!(path.is_empty());
    }
}
