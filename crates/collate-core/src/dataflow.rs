//! Dataflow graph: the flattened label-to-node mapping derived from a
//! group tree, describing how amounts propagate upward.
//!
//! Every leaf and every named group in the tree gets exactly one
//! [`Node`], keyed by its label. A node's parent is the label of the
//! nearest enclosing named group, held as a lookup key into the same
//! mapping rather than a direct reference, so the whole graph is built in
//! one linear pass over the tree with no forward-reference problems.

use crate::group::{Group, GroupChild};
use crate::item::Item;
use rust_decimal::Decimal;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from building or updating a dataflow graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataflowError {
    /// The group tree uses the same label more than once. Leaves and
    /// named groups share a single namespace.
    #[error("duplicate label '{0}' in group tree")]
    DuplicateLabel(String),
    /// A label has no node in the graph.
    #[error("unknown label '{0}'")]
    UnknownLabel(String),
}

/// A running total for one label, plus the label of the named group it
/// aggregates into.
#[derive(Debug, Clone)]
pub struct Node {
    item: Item,
    parent: Option<String>,
}

impl Node {
    fn new(label: &str, parent: Option<&str>) -> Self {
        Self {
            item: Item::zero(label),
            parent: parent.map(str::to_owned),
        }
    }

    /// The node's running total.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.item.amount
    }

    /// The node's item: its label plus the running total.
    #[must_use]
    pub const fn item(&self) -> &Item {
        &self.item
    }

    /// The label of the nearest enclosing named group, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

/// Flat mapping from every label in a group tree to its propagation node.
#[derive(Debug, Clone, Default)]
pub struct DataflowGraph {
    nodes: HashMap<String, Node>,
}

impl DataflowGraph {
    /// Build the graph for `tree`.
    ///
    /// Every leaf and every named group receives one node, parented on
    /// the nearest enclosing named group; a named root gets a node with
    /// no parent. Anonymous groups contribute no node and their children
    /// attach to the closest named ancestor instead.
    ///
    /// Fails with [`DataflowError::DuplicateLabel`] if any label appears
    /// more than once, leaving no partial result.
    pub fn build(tree: &Group) -> Result<Self, DataflowError> {
        let mut graph = Self::default();
        if let Some(label) = tree.label.as_deref() {
            graph.insert(label, None)?;
        }
        graph.wire(tree, tree.label.as_deref())?;
        Ok(graph)
    }

    fn wire(&mut self, group: &Group, enclosing: Option<&str>) -> Result<(), DataflowError> {
        for child in &group.children {
            match child {
                GroupChild::Leaf(label) => self.insert(label, enclosing)?,
                GroupChild::Group(nested) => {
                    if let Some(label) = nested.label.as_deref() {
                        self.insert(label, enclosing)?;
                        self.wire(nested, Some(label))?;
                    } else {
                        // anonymous: transparent, children keep the
                        // enclosing named ancestor
                        self.wire(nested, enclosing)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn insert(&mut self, label: &str, parent: Option<&str>) -> Result<(), DataflowError> {
        if self.nodes.contains_key(label) {
            return Err(DataflowError::DuplicateLabel(label.to_owned()));
        }
        self.nodes.insert(label.to_owned(), Node::new(label, parent));
        Ok(())
    }

    /// Add `amount` to the node for `label` and to every ancestor named
    /// group, transitively to the root.
    ///
    /// The walk follows parent labels through the mapping and stops at a
    /// node with no parent; the parent chain comes from a tree, so it is
    /// acyclic and the walk is bounded by the tree depth. A label with no
    /// node fails with [`DataflowError::UnknownLabel`] before any total
    /// changes.
    pub fn notify(&mut self, label: &str, amount: Decimal) -> Result<(), DataflowError> {
        let mut current = Some(label.to_owned());
        while let Some(l) = current {
            let node = self
                .nodes
                .get_mut(&l)
                .ok_or_else(|| DataflowError::UnknownLabel(l.clone()))?;
            node.item.amount += amount;
            current = node.parent.clone();
        }
        Ok(())
    }

    /// Look up the node for `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Node> {
        self.nodes.get(label)
    }

    /// The current total for `label`.
    pub fn amount(&self, label: &str) -> Result<Decimal, DataflowError> {
        self.nodes
            .get(label)
            .map(Node::amount)
            .ok_or_else(|| DataflowError::UnknownLabel(label.to_owned()))
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the labels in the graph, in no particular order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}
