//! Core data models for shellmenu
//!
//! The menu tree is built once per session by the parser and is read-only
//! afterwards.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Post-execution behavior of a leaf item.
///
/// The flags are independent: a leaf may be both `notify` and `exitcode 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ItemFlags {
    /// Show a non-blocking notification after a successful run
    pub notify: bool,
    /// Show the combined output in a blocking dialog
    pub show: bool,
    /// Expected exit code; a different code is reported as a mismatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exitcode: Option<i32>,
    /// Turn the command's output lines into a one-level submenu
    pub is_scriptmenu: bool,
}

impl ItemFlags {
    /// True when no flag is set.
    pub fn is_empty(&self) -> bool {
        *self == ItemFlags::default()
    }
}

/// A leaf that runs a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub display: String,
    /// Raw command text, not yet tokenized or tilde-expanded
    pub command: String,
    pub flags: ItemFlags,
    pub source_line: usize,
}

/// A named container of entries, opened by `submenu` and closed by `subend`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmenuNode {
    pub display: String,
    pub children: Vec<MenuEntry>,
    pub source_line: usize,
}

/// One selectable row of a menu level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItem),
    Submenu(SubmenuNode),
}

impl MenuEntry {
    pub fn display(&self) -> &str {
        match self {
            MenuEntry::Item(item) => &item.display,
            MenuEntry::Submenu(node) => &node.display,
        }
    }

    pub fn source_line(&self) -> usize {
        match self {
            MenuEntry::Item(item) => item.source_line,
            MenuEntry::Submenu(node) => node.source_line,
        }
    }
}

/// The validated menu hierarchy.
///
/// Serializes as a flat, pre-order `entries` list (see [`FlatEntry`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    pub roots: Vec<MenuEntry>,
}

impl MenuTree {
    pub fn new(roots: Vec<MenuEntry>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Maximum number of nested submenus on any path (0 for a flat menu).
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut pending: Vec<(&[MenuEntry], usize)> = vec![(&self.roots, 0)];
        while let Some((level, depth)) = pending.pop() {
            max = max.max(depth);
            for entry in level {
                if let MenuEntry::Submenu(node) = entry {
                    pending.push((&node.children, depth + 1));
                }
            }
        }
        max
    }

    /// Number of leaf items in the whole tree.
    pub fn item_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&[MenuEntry]> = vec![&self.roots];
        while let Some(level) = pending.pop() {
            for entry in level {
                match entry {
                    MenuEntry::Item(_) => count += 1,
                    MenuEntry::Submenu(node) => pending.push(&node.children),
                }
            }
        }
        count
    }
}

impl Drop for SubmenuNode {
    // Flatten before dropping so deeply nested menus do not exhaust the stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(entry) = pending.pop() {
            if let MenuEntry::Submenu(mut node) = entry {
                pending.append(&mut node.children);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Item,
    Submenu,
}

/// One entry of a tree walked in pre-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlatEntry<'a> {
    pub kind: EntryKind,
    pub display: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<&'a ItemFlags>,
    pub source_line: usize,
    /// 0 for top-level entries
    pub depth: usize,
    /// Position of the enclosing submenu in the flattened list
    pub parent: Option<usize>,
}

impl MenuTree {
    /// Every entry in file order, each submenu followed by its children.
    pub fn flatten(&self) -> Vec<FlatEntry<'_>> {
        let mut out = Vec::new();
        let mut stack = vec![(self.roots.iter(), 0usize, None)];

        while let Some((entries, depth, parent)) = stack.last_mut() {
            let (depth, parent) = (*depth, *parent);
            let Some(entry) = entries.next() else {
                stack.pop();
                continue;
            };
            match entry {
                MenuEntry::Item(item) => out.push(FlatEntry {
                    kind: EntryKind::Item,
                    display: &item.display,
                    command: Some(&item.command),
                    flags: Some(&item.flags),
                    source_line: item.source_line,
                    depth,
                    parent,
                }),
                MenuEntry::Submenu(node) => {
                    out.push(FlatEntry {
                        kind: EntryKind::Submenu,
                        display: &node.display,
                        command: None,
                        flags: None,
                        source_line: node.source_line,
                        depth,
                        parent,
                    });
                    stack.push((node.children.iter(), depth + 1, Some(out.len() - 1)));
                }
            }
        }
        out
    }
}

impl Serialize for MenuTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MenuTree", 1)?;
        state.serialize_field("entries", &self.flatten())?;
        state.end()
    }
}

/// Labels of a level, in display order.
pub fn labels(level: &[MenuEntry]) -> Vec<&str> {
    level.iter().map(MenuEntry::display).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(display: &str) -> MenuEntry {
        MenuEntry::Item(MenuItem {
            display: display.to_string(),
            command: "true".to_string(),
            flags: ItemFlags::default(),
            source_line: 1,
        })
    }

    fn submenu(display: &str, children: Vec<MenuEntry>) -> MenuEntry {
        MenuEntry::Submenu(SubmenuNode {
            display: display.to_string(),
            children,
            source_line: 1,
        })
    }

    #[test]
    fn test_flat_tree_has_depth_zero() {
        let tree = MenuTree::new(vec![item("a"), item("b")]);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.item_count(), 2);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_depth_follows_deepest_branch() {
        let tree = MenuTree::new(vec![
            submenu("one", vec![item("x")]),
            submenu("two", vec![submenu("three", vec![item("y"), item("z")])]),
        ]);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.item_count(), 3);
    }

    #[test]
    fn test_empty_submenu_still_counts_as_level() {
        let tree = MenuTree::new(vec![submenu("empty", vec![])]);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.item_count(), 0);
    }

    #[test]
    fn test_labels_keep_order() {
        let level = vec![item("b"), submenu("a", vec![]), item("c")];
        assert_eq!(labels(&level), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_item_flags_default_is_empty() {
        assert!(ItemFlags::default().is_empty());
        let flags = ItemFlags {
            exitcode: Some(0),
            ..ItemFlags::default()
        };
        assert!(!flags.is_empty());
    }

    fn nested(depth: usize) -> MenuTree {
        let mut entry = item("leaf");
        for i in (0..depth).rev() {
            entry = submenu(&format!("level {}", i), vec![entry]);
        }
        MenuTree::new(vec![entry])
    }

    #[test]
    fn test_flatten_is_preorder_with_parents() {
        let tree = MenuTree::new(vec![
            submenu("Go", vec![item("A"), submenu("Deeper", vec![item("B")])]),
            item("C"),
        ]);
        let flat = tree.flatten();

        let rows: Vec<_> = flat.iter().map(|e| (e.display, e.depth, e.parent)).collect();
        assert_eq!(
            rows,
            vec![
                ("Go", 0, None),
                ("A", 1, Some(0)),
                ("Deeper", 1, Some(0)),
                ("B", 2, Some(2)),
                ("C", 0, None),
            ]
        );
        assert_eq!(flat[0].kind, EntryKind::Submenu);
        assert_eq!(flat[1].command, Some("true"));
        assert_eq!(flat[2].flags, None);
    }

    #[test]
    fn test_tree_serializes_as_flat_entries() {
        let tree = MenuTree::new(vec![submenu("Go", vec![item("A")])]);
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "entries": [
                    {"kind": "submenu", "display": "Go", "source_line": 1, "depth": 0, "parent": null},
                    {
                        "kind": "item",
                        "display": "A",
                        "command": "true",
                        "flags": {"notify": false, "show": false, "is_scriptmenu": false},
                        "source_line": 1,
                        "depth": 1,
                        "parent": 0
                    }
                ]
            })
        );
    }

    #[test]
    fn test_deep_tree_serializes_and_drops_without_recursion() {
        let depth = 100_000;
        let tree = nested(depth);

        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains("\"display\":\"leaf\""));
        assert_eq!(tree.flatten().last().map(|e| e.depth), Some(depth));
        drop(tree);
    }

    #[test]
    fn test_detached_deep_submenu_drops_without_recursion() {
        let mut entry = item("leaf");
        for i in 0..100_000 {
            entry = submenu(&format!("level {}", i), vec![entry]);
        }
        drop(entry);
    }
}
