//! Property tests for the menu file parser.

use proptest::prelude::*;

use shellmenu::{parse_menu, ItemFlags, MenuEntry, MenuItem, MenuTree, SubmenuNode};

fn display_text() -> impl Strategy<Value = String> {
    // No ':' and no leading '#', so the text stays a single column.
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9 ._-]{0,12}[A-Za-z0-9]")
        .unwrap()
        .prop_filter("not a closing marker", |s| s != "subend")
}

fn command_text() -> impl Strategy<Value = String> {
    // The command column may itself contain ':'.
    proptest::string::string_regex("[a-z~/][a-z0-9 /._:=-]{0,20}[a-z0-9]").unwrap()
}

fn item_flags() -> impl Strategy<Value = ItemFlags> {
    (
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(0i32..1000),
        any::<bool>(),
    )
        .prop_map(|(notify, show, exitcode, is_scriptmenu)| ItemFlags {
            notify,
            show,
            exitcode,
            is_scriptmenu,
        })
}

fn menu_entry() -> impl Strategy<Value = MenuEntry> {
    let leaf = (display_text(), command_text(), item_flags()).prop_map(|(display, command, flags)| {
        MenuEntry::Item(MenuItem {
            display,
            command,
            flags,
            source_line: 0,
        })
    });

    leaf.prop_recursive(4, 48, 6, |inner| {
        (display_text(), proptest::collection::vec(inner, 0..6)).prop_map(|(display, children)| {
            MenuEntry::Submenu(SubmenuNode {
                display,
                children,
                source_line: 0,
            })
        })
    })
}

fn menu_tree() -> impl Strategy<Value = MenuTree> {
    proptest::collection::vec(menu_entry(), 0..8).prop_map(MenuTree::new)
}

fn flag_column(flags: &ItemFlags) -> String {
    let mut tokens = Vec::new();
    if flags.is_scriptmenu {
        tokens.push("scriptmenu".to_string());
    }
    if flags.show {
        tokens.push("show".to_string());
    }
    if flags.notify {
        tokens.push("notify".to_string());
    }
    if let Some(code) = flags.exitcode {
        tokens.push(format!("exitcode {}", code));
    }
    tokens.join(",")
}

/// Write `entries` as menu lines, recording each entry's line number.
fn render(entries: &mut [MenuEntry], lines: &mut Vec<String>) {
    for entry in entries {
        match entry {
            MenuEntry::Item(item) => {
                lines.push(format!(
                    "{}:{}:{}",
                    item.display,
                    flag_column(&item.flags),
                    item.command
                ));
                item.source_line = lines.len();
            }
            MenuEntry::Submenu(node) => {
                lines.push(format!("{}:submenu:", node.display));
                node.source_line = lines.len();
                render(&mut node.children, lines);
                lines.push("subend::".to_string());
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the parser never panics, whatever the input.
    #[test]
    fn property_parse_never_panics(text in "(?s).{0,512}") {
        let _ = parse_menu(&text);
    }

    /// PROPERTY: lines built from the menu alphabet never panic either.
    #[test]
    fn property_parse_menu_like_lines_never_panics(
        lines in proptest::collection::vec("[a-z #:,0-9]{0,24}", 0..24)
    ) {
        let _ = parse_menu(&lines.join("\n"));
    }

    /// PROPERTY: a rendered tree parses back to the same tree.
    #[test]
    fn property_rendered_tree_parses_back(mut tree in menu_tree()) {
        let mut lines = Vec::new();
        render(&mut tree.roots, &mut lines);

        let parsed = parse_menu(&lines.join("\n")).expect("rendered menu should parse");
        prop_assert_eq!(parsed, tree);
    }

    /// PROPERTY: comments and blank lines change nothing but line numbers.
    #[test]
    fn property_comments_and_blanks_are_ignored(mut tree in menu_tree()) {
        let mut lines = Vec::new();
        render(&mut tree.roots, &mut lines);

        let padded: Vec<String> = lines
            .iter()
            .flat_map(|line| ["# note".to_string(), String::new(), format!("  {}  ", line)])
            .collect();

        let plain = parse_menu(&lines.join("\n")).expect("rendered menu should parse");
        let noisy = parse_menu(&padded.join("\n")).expect("padded menu should parse");
        prop_assert_eq!(plain.len(), noisy.len());
        prop_assert_eq!(plain.item_count(), noisy.item_count());
        prop_assert_eq!(plain.depth(), noisy.depth());
        let labels = |t: &MenuTree| t.roots.iter().map(|e| e.display().to_string()).collect::<Vec<_>>();
        prop_assert_eq!(labels(&plain), labels(&noisy));
    }

    /// PROPERTY: depth and counts agree with the submenu lines in the file.
    #[test]
    fn property_depth_matches_nesting(mut tree in menu_tree()) {
        let mut lines = Vec::new();
        render(&mut tree.roots, &mut lines);

        let mut open = 0usize;
        let mut deepest = 0usize;
        let mut items = 0usize;
        for line in &lines {
            if line.ends_with(":submenu:") {
                open += 1;
                deepest = deepest.max(open);
            } else if line == "subend::" {
                open -= 1;
            } else {
                items += 1;
            }
        }

        let parsed = parse_menu(&lines.join("\n")).expect("rendered menu should parse");
        prop_assert_eq!(parsed.depth(), deepest);
        prop_assert_eq!(parsed.item_count(), items);
    }

    /// PROPERTY: dropping the last `subend` of a nested menu is always an error.
    #[test]
    fn property_missing_subend_is_rejected(mut tree in menu_tree()) {
        let mut lines = Vec::new();
        render(&mut tree.roots, &mut lines);
        prop_assume!(lines.iter().any(|l| l == "subend::"));

        let last = lines.iter().rposition(|l| l == "subend::").unwrap();
        lines.remove(last);
        prop_assert!(parse_menu(&lines.join("\n")).is_err());
    }
}
