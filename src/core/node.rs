use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::{Error, Result};

/// One entry of a folder's `properties` list, as exported by the workbench CLI.
pub type PropertyEntry = BTreeMap<String, serde_json::Value>;

/// A folder in a parsed tree.
///
/// Serializes to the same shape as the workbench JSON export:
/// `{"name", "id", "depth", "children"}` plus `properties` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 1 for top-level folders
    pub depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyEntry>>,
    #[serde(default)]
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    pub fn new(name: impl Into<String>, id: Option<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            id,
            depth,
            properties: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<FolderNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_properties(mut self, properties: Vec<PropertyEntry>) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Name with surrounding whitespace removed, as used by lookups
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}

/// Pre-order iterator over a forest of folders.
pub struct Walk<'a> {
    stack: Vec<&'a FolderNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a FolderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is popped next
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Depth-first, pre-order walk visiting children in source order.
pub fn walk(tree: &[FolderNode]) -> Walk<'_> {
    Walk {
        stack: tree.iter().rev().collect(),
    }
}

/// Verify that top-level folders have depth 1 and every child sits one
/// level below its parent.
pub fn check_depths(tree: &[FolderNode]) -> Result<()> {
    let mut pending: Vec<(usize, &FolderNode)> = tree.iter().map(|node| (1, node)).collect();

    while let Some((expected, node)) = pending.pop() {
        if node.depth != expected {
            return Err(Error::InvalidTree(format!(
                "folder {:?} has depth {} but sits at depth {}",
                node.trimmed_name(),
                node.depth,
                expected
            )));
        }
        pending.extend(node.children.iter().map(|child| (expected + 1, child)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<FolderNode> {
        vec![
            FolderNode::new("a", Some("1".into()), 1).with_children(vec![
                FolderNode::new("b", Some("2".into()), 2)
                    .with_children(vec![FolderNode::new("c", None, 3)]),
                FolderNode::new("d", None, 2),
            ]),
            FolderNode::new("e", Some("5".into()), 1),
        ]
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = sample();
        let names: Vec<&str> = walk(&tree).map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_walk_empty_forest() {
        assert_eq!(walk(&[]).count(), 0);
    }

    #[test]
    fn test_check_depths_accepts_consistent_tree() {
        assert!(check_depths(&sample()).is_ok());
    }

    #[test]
    fn test_check_depths_rejects_wrong_child_depth() {
        let tree = vec![FolderNode::new("a", None, 1)
            .with_children(vec![FolderNode::new("b", None, 3)])];
        let err = check_depths(&tree).unwrap_err();
        assert!(err.to_string().contains("\"b\""));
    }

    #[test]
    fn test_check_depths_rejects_nonzero_root() {
        let tree = vec![FolderNode::new("a", None, 2)];
        assert!(matches!(check_depths(&tree), Err(Error::InvalidTree(_))));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let node = FolderNode::new("Genomics", None, 1);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({"name": "Genomics", "depth": 1, "children": []})
        );
    }

    #[test]
    fn test_deserialize_workbench_export() {
        let value = json!({
            "name": "Version 1",
            "id": "13d1ccbc-71d0-46b5-a422-bea85231da7a",
            "properties": [{"terra-published-date": "2023-07-17"}],
            "depth": 1
        });
        let node: FolderNode = serde_json::from_value(value).unwrap();
        assert_eq!(node.id.as_deref(), Some("13d1ccbc-71d0-46b5-a422-bea85231da7a"));
        assert!(node.is_leaf());
        let properties = node.properties.unwrap();
        assert!(properties[0].contains_key("terra-published-date"));
    }
}
