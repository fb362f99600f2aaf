//! Lookups over a parsed folder tree.
//!
//! All searches are depth-first pre-order with children in source order, so
//! when a name repeats the first occurrence wins.

use crate::core::{walk, FolderNode};

/// Property key the workbench sets on a published data collection version
pub const PUBLISHED_DATE_KEY: &str = "terra-published-date";

/// First folder whose trimmed name equals `name`.
pub fn find_folder<'a>(name: &str, tree: &'a [FolderNode]) -> Option<&'a FolderNode> {
    walk(tree).find(|node| node.trimmed_name() == name)
}

/// Id of the first folder named `name`.
///
/// `None` when no folder has that name, or when the first match carries no id.
pub fn get_folder_id<'a>(name: &str, tree: &'a [FolderNode]) -> Option<&'a str> {
    find_folder(name, tree).and_then(|node| node.id.as_deref())
}

/// Trimmed names of every folder at `depth`, in pre-order.
pub fn get_folders_with_depth(depth: usize, tree: &[FolderNode]) -> Vec<String> {
    walk(tree)
        .filter(|node| node.depth == depth)
        .map(|node| node.trimmed_name().to_string())
        .collect()
}

/// Top-level folders that are published versions of a data collection.
pub fn get_published_versions(tree: &[FolderNode]) -> Vec<String> {
    get_published_versions_with_marker(tree, PUBLISHED_DATE_KEY)
}

/// Like [`get_published_versions`] but checks for `marker` instead of
/// `terra-published-date`.
pub fn get_published_versions_with_marker(tree: &[FolderNode], marker: &str) -> Vec<String> {
    walk(tree)
        .filter(|node| node.depth == 1 && is_published(node, marker))
        .map(|node| node.trimmed_name().to_string())
        .collect()
}

// Reverting a version to its workspace leaves `properties` as an empty list,
// so presence of the field alone is not enough.
fn is_published(node: &FolderNode, marker: &str) -> bool {
    node.properties
        .as_ref()
        .and_then(|properties| properties.first())
        .is_some_and(|entry| entry.contains_key(marker))
}

/// Copy of `tree` with every depth raised by one, ready to be nested under a
/// new top-level folder.
pub fn increment_tree_depth(tree: &[FolderNode]) -> Vec<FolderNode> {
    tree.iter()
        .map(|node| FolderNode {
            name: node.name.clone(),
            id: node.id.clone(),
            depth: node.depth + 1,
            properties: node.properties.clone(),
            children: increment_tree_depth(&node.children),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PropertyEntry;

    fn entry(key: &str) -> PropertyEntry {
        let mut entry = PropertyEntry::new();
        entry.insert(key.to_string(), serde_json::Value::from("2023-07-17"));
        entry
    }

    #[test]
    fn test_find_folder_matches_trimmed_name() {
        let tree = vec![FolderNode::new("  Padded  ", Some("1".into()), 1)];
        assert!(find_folder("Padded", &tree).is_some());
        assert!(find_folder("  Padded  ", &tree).is_none());
    }

    #[test]
    fn test_first_preorder_match_wins() {
        let tree = vec![
            FolderNode::new("a", Some("1".into()), 1)
                .with_children(vec![FolderNode::new("dup", Some("deep".into()), 2)]),
            FolderNode::new("dup", Some("shallow".into()), 1),
        ];
        assert_eq!(get_folder_id("dup", &tree), Some("deep"));
    }

    #[test]
    fn test_folder_without_id_yields_none() {
        let tree = vec![FolderNode::new("a", None, 1)];
        assert_eq!(get_folder_id("a", &tree), None);
    }

    #[test]
    fn test_empty_properties_is_not_published() {
        let tree = vec![FolderNode::new("v", None, 1).with_properties(vec![])];
        assert!(get_published_versions(&tree).is_empty());
    }

    #[test]
    fn test_only_first_property_entry_is_checked() {
        let tree = vec![FolderNode::new("v", None, 1)
            .with_properties(vec![entry("terra-type"), entry(PUBLISHED_DATE_KEY)])];
        assert!(get_published_versions(&tree).is_empty());
    }

    #[test]
    fn test_nested_published_marker_is_ignored() {
        let tree = vec![FolderNode::new("root", None, 1).with_children(vec![
            FolderNode::new("nested", None, 2).with_properties(vec![entry(PUBLISHED_DATE_KEY)]),
        ])];
        assert!(get_published_versions(&tree).is_empty());
    }

    #[test]
    fn test_custom_marker() {
        let tree = vec![
            FolderNode::new("wb", None, 1).with_properties(vec![entry("wb-published-date")]),
            FolderNode::new("terra", None, 1).with_properties(vec![entry(PUBLISHED_DATE_KEY)]),
        ];
        assert_eq!(
            get_published_versions_with_marker(&tree, "wb-published-date"),
            vec!["wb".to_string()]
        );
        assert_eq!(get_published_versions(&tree), vec!["terra".to_string()]);
    }

    #[test]
    fn test_increment_tree_depth_leaves_input_untouched() {
        let tree = vec![FolderNode::new("a", None, 1)
            .with_children(vec![FolderNode::new("b", None, 2)])];
        let shifted = increment_tree_depth(&tree);

        assert_eq!(tree[0].depth, 1);
        assert_eq!(shifted[0].depth, 2);
        assert_eq!(shifted[0].children[0].depth, 3);
        assert_eq!(shifted[0].children[0].name, "b");
    }
}
