use crossterm::style::Stylize;

use crate::models::{ItemFlags, MenuEntry, MenuTree};
use crate::ui::theme;

/// Summary line shown under the tree.
pub fn render_check_summary(tree: &MenuTree) -> String {
    format!(
        "{} top-level entries, {} commands, depth {}",
        tree.len(),
        tree.item_count(),
        tree.depth()
    )
}

/// Render the menu as an indented tree, one entry per line.
///
/// Submenus end in `/`; items show their command and any flags.
pub fn render_menu_tree(tree: &MenuTree, supports_color: bool, supports_unicode: bool) -> String {
    let (branch, last_branch, pipe, space) = if supports_unicode {
        use theme::tree::*;
        (BRANCH, LAST, PIPE, SPACE)
    } else {
        use theme::tree_ascii::*;
        (BRANCH, LAST, PIPE, SPACE)
    };

    let mut out = String::new();
    let mut stack = vec![(tree.roots.iter().peekable(), String::new())];

    loop {
        let Some((entries, prefix)) = stack.last_mut() else {
            break;
        };
        let Some(entry) = entries.next() else {
            stack.pop();
            continue;
        };
        let is_last = entries.peek().is_none();
        let prefix = prefix.clone();

        out.push_str(&prefix);
        out.push_str(if is_last { last_branch } else { branch });

        match entry {
            MenuEntry::Submenu(node) => {
                out.push_str(&node.display);
                out.push('/');
                out.push('\n');
                let child_prefix = format!("{}{}", prefix, if is_last { space } else { pipe });
                stack.push((node.children.iter().peekable(), child_prefix));
            }
            MenuEntry::Item(item) => {
                out.push_str(&item.display);
                out.push_str("  ");
                if supports_color {
                    out.push_str(&format!("{}", item.command.as_str().with(theme::colors::DIM)));
                } else {
                    out.push_str(&item.command);
                }
                let flags = describe_flags(&item.flags);
                if !flags.is_empty() {
                    out.push_str(&format!("  [{}]", flags.join(", ")));
                }
                out.push('\n');
            }
        }
    }

    out
}

fn describe_flags(flags: &ItemFlags) -> Vec<String> {
    let mut out = Vec::new();
    if flags.is_scriptmenu {
        out.push("scriptmenu".to_string());
    }
    if flags.show {
        out.push("show".to_string());
    }
    if flags.notify {
        out.push("notify".to_string());
    }
    if let Some(code) = flags.exitcode {
        out.push(format!("exitcode {}", code));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_menu;

    const MENU: &str = "\
Go:submenu:
A:notify:echo a
Deeper:submenu:
B::true
subend::
subend::
Status:show,exitcode 0:systemctl status
Pick:scriptmenu:list-things
";

    #[test]
    fn tree_rendering_unicode() {
        let tree = parse_menu(MENU).unwrap();
        insta::assert_snapshot!(render_menu_tree(&tree, false, true), @r"
        ├── Go/
        │   ├── A  echo a  [notify]
        │   └── Deeper/
        │       └── B  true
        ├── Status  systemctl status  [show, exitcode 0]
        └── Pick  list-things  [scriptmenu]
        ");
    }

    #[test]
    fn tree_rendering_ascii() {
        let tree = parse_menu("X:submenu:\nY::ls\nsubend::\nZ::pwd\n").unwrap();
        assert_eq!(
            render_menu_tree(&tree, false, false),
            "|-- X/\n|   `-- Y  ls\n`-- Z  pwd\n"
        );
    }

    #[test]
    fn summary_counts_entries() {
        let tree = parse_menu(MENU).unwrap();
        assert_eq!(
            render_check_summary(&tree),
            "3 top-level entries, 4 commands, depth 2"
        );
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(render_menu_tree(&MenuTree::default(), false, true), "");
    }
}
