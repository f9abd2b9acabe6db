//! Group trees: the hierarchical specification behind the sort analysis.
//!
//! A group tree is supplied once per run as declarative data and stays
//! read-only. The JSON encoding is a nested object per group:
//!
//! ```json
//! {
//!   "children": [
//!     { "label": "A", "children": ["Leaf1", "Leaf2"] },
//!     { "label": "RecursiveB", "children": [
//!       { "label": "C", "children": ["Leaf3", "Leaf4"] },
//!       "Leaf5"
//!     ] }
//!   ]
//! }
//! ```
//!
//! A string child is a leaf, an object child is a nested group, and an
//! absent `label` marks an anonymous group. Labels of leaves and named
//! groups share one namespace; uniqueness is checked when the dataflow
//! graph is built, not here.

use serde::{Deserialize, Serialize};

/// A named or anonymous collection of leaves and nested groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// The group name; `None` marks an anonymous grouping level, which
    /// aggregates nothing of its own and prints no report section.
    #[serde(default)]
    pub label: Option<String>,
    /// Ordered children: leaf labels or nested groups.
    #[serde(default)]
    pub children: Vec<GroupChild>,
}

/// One child of a group: a leaf label or a nested group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupChild {
    /// A leaf label.
    Leaf(String),
    /// A nested group.
    Group(Group),
}

impl Group {
    /// Create a named group.
    #[must_use]
    pub fn named(label: impl Into<String>, children: Vec<GroupChild>) -> Self {
        Self {
            label: Some(label.into()),
            children,
        }
    }

    /// Create an anonymous group.
    #[must_use]
    pub const fn anonymous(children: Vec<GroupChild>) -> Self {
        Self {
            label: None,
            children,
        }
    }

    /// Whether this group has no name of its own.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.label.is_none()
    }
}

impl GroupChild {
    /// The child's label: the leaf string, or the nested group's own
    /// name. `None` for an anonymous nested group.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf(label) => Some(label),
            Self::Group(group) => group.label.as_deref(),
        }
    }
}

impl From<&str> for GroupChild {
    fn from(label: &str) -> Self {
        Self::Leaf(label.to_owned())
    }
}

impl From<String> for GroupChild {
    fn from(label: String) -> Self {
        Self::Leaf(label)
    }
}

impl From<Group> for GroupChild {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_anonymous() {
        let named = Group::named("A", vec!["Leaf1".into()]);
        assert!(!named.is_anonymous());
        assert_eq!(named.label.as_deref(), Some("A"));

        let anon = Group::anonymous(vec![named.into()]);
        assert!(anon.is_anonymous());
        assert_eq!(anon.children.len(), 1);
    }

    #[test]
    fn test_child_label() {
        let leaf = GroupChild::from("Leaf1");
        assert_eq!(leaf.label(), Some("Leaf1"));

        let nested = GroupChild::from(Group::named("A", vec![]));
        assert_eq!(nested.label(), Some("A"));

        let anon = GroupChild::from(Group::anonymous(vec![]));
        assert_eq!(anon.label(), None);
    }

    #[test]
    fn test_deserialize_schema() {
        let json = r#"
            {
              "children": [
                { "label": "A", "children": ["Leaf1", "Leaf2"] },
                { "label": "RecursiveB", "children": [
                  { "label": "C", "children": ["Leaf3", "Leaf4"] },
                  "Leaf5"
                ] }
              ]
            }
        "#;
        let tree: Group = serde_json::from_str(json).expect("schema should deserialize");

        assert!(tree.is_anonymous());
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].label(), Some("A"));

        let GroupChild::Group(recursive_b) = &tree.children[1] else {
            panic!("expected nested group");
        };
        assert_eq!(recursive_b.label.as_deref(), Some("RecursiveB"));
        assert_eq!(recursive_b.children[0].label(), Some("C"));
        assert_eq!(recursive_b.children[1].label(), Some("Leaf5"));
    }

    #[test]
    fn test_deserialize_empty_object_is_empty_anonymous_group() {
        let tree: Group = serde_json::from_str("{}").expect("empty group");
        assert!(tree.is_anonymous());
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_non_schema_values() {
        assert!(serde_json::from_str::<Group>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Group>(r#"{"children": [42]}"#).is_err());
    }
}
