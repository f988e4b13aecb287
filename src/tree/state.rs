//! Per-call traversal state threaded down the recursion

/// Last-sibling status of every ancestor between the root and the current
/// entry's parent, root-nearest first.
///
/// The length of the chain is the traversal depth: the root's children sit at
/// depth 0. States are never mutated in place; descending produces a new
/// state, so a sibling can never observe another sibling's extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalState {
    ancestor_is_last: Vec<bool>,
}

impl TraversalState {
    /// State for the root's immediate children.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.ancestor_is_last.len()
    }

    pub fn ancestors(&self) -> &[bool] {
        &self.ancestor_is_last
    }

    /// State for the children of an entry at this level.
    pub fn child(&self, is_last: bool) -> Self {
        let mut ancestor_is_last = Vec::with_capacity(self.ancestor_is_last.len() + 1);
        ancestor_is_last.extend_from_slice(&self.ancestor_is_last);
        ancestor_is_last.push(is_last);
        Self { ancestor_is_last }
    }
}
