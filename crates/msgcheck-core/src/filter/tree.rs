use indexmap::IndexMap;

use crate::predicate::Predicate;

/// Compiled filter node, shaped like the dynamic value it checks
#[derive(Debug, Clone)]
pub enum PredicateNode {
    Leaf(Predicate),
    /// Element-wise predicates for a collection, in position order
    List(Vec<PredicateNode>),
    Message(PredicateTree),
}

impl PredicateNode {
    pub fn as_leaf(&self) -> Option<&Predicate> {
        match self {
            PredicateNode::Leaf(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PredicateNode]> {
        match self {
            PredicateNode::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&PredicateTree> {
        match self {
            PredicateNode::Message(tree) => Some(tree),
            _ => None,
        }
    }

    fn predicate_count(&self) -> usize {
        match self {
            PredicateNode::Leaf(_) => 1,
            PredicateNode::List(items) => items.iter().map(PredicateNode::predicate_count).sum(),
            PredicateNode::Message(tree) => tree.predicate_count(),
        }
    }
}

/// Compiled filter for one message, keyed by field name in filter order
#[derive(Debug, Clone, Default)]
pub struct PredicateTree {
    fields: IndexMap<String, PredicateNode>,
}

impl PredicateTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, node: PredicateNode) {
        self.fields.insert(field.into(), node);
    }

    pub fn get(&self, field: &str) -> Option<&PredicateNode> {
        self.fields.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PredicateNode)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of leaf predicates in the whole tree
    pub fn predicate_count(&self) -> usize {
        self.fields.values().map(PredicateNode::predicate_count).sum()
    }
}
