//! Path Resolution
//!
//! Pure functions mapping slash-separated path strings onto the node tree.
//! Resolution always walks root-to-leaf and never mutates the tree.
//!
//! `..` is deliberately not a path component here: a segment named `..` is
//! looked up like any other child name. Parent navigation is textual and
//! lives in [`parent`].

use super::types::Node;

/// Marker that makes a path absolute.
pub const ROOT: &str = "/";

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Check whether `path` starts at the root.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Split a path into its non-empty segments.
///
/// `"//a//b/"` and `"a/b"` both yield `["a", "b"]`.
pub fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}

/// Resolve `path` against the tree.
///
/// Absolute paths start at `root`, everything else at `start`. An empty
/// segment list resolves to the starting node itself.
pub fn resolve<'a>(root: &'a Node, start: &'a Node, path: &str) -> Option<&'a Node> {
    let origin = if is_absolute(path) { root } else { start };
    walk(origin, &segments(path))
}

/// Follow `segments` downward from `node`.
pub fn walk<'a>(node: &'a Node, segments: &[&str]) -> Option<&'a Node> {
    let mut current = node;
    for segment in segments {
        current = current.children()?.get(*segment)?;
    }
    Some(current)
}

/// Mutable counterpart of [`walk`].
pub(crate) fn walk_mut<'a>(node: &'a mut Node, segments: &[&str]) -> Option<&'a mut Node> {
    let mut current = node;
    for segment in segments {
        current = current.children_mut()?.get_mut(*segment)?;
    }
    Some(current)
}

/// Canonical absolute form of a path: `/` followed by its segments.
pub fn canonicalize(path: &str) -> String {
    let parts = segments(path);
    if parts.is_empty() {
        ROOT.to_string()
    } else {
        format!("{}{}", ROOT, parts.join("/"))
    }
}

/// Join `path` onto the absolute directory `base`.
///
/// Absolute paths replace `base` entirely. The result is canonical.
pub fn join(base: &str, path: &str) -> String {
    if is_absolute(path) {
        canonicalize(path)
    } else {
        canonicalize(&format!("{}{}{}", base, SEPARATOR, path))
    }
}

/// Textual parent of an absolute path: drop the last segment.
///
/// The root is its own parent.
pub fn parent(path: &str) -> String {
    let mut parts = segments(path);
    parts.pop();
    if parts.is_empty() {
        ROOT.to_string()
    } else {
        format!("{}{}", ROOT, parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn tree() -> Node {
        let mut user = BTreeMap::new();
        user.insert("notes.txt".to_string(), Node::file("hi"));
        let mut home = BTreeMap::new();
        home.insert("user".to_string(), Node::Directory { children: user });
        let mut root = BTreeMap::new();
        root.insert("home".to_string(), Node::Directory { children: home });
        root.insert("bin".to_string(), Node::directory());
        Node::Directory { children: root }
    }

    #[test]
    fn test_segments_discard_empty() {
        assert_eq!(segments("//a//b/"), vec!["a", "b"]);
        assert_eq!(segments("a/b"), vec!["a", "b"]);
        assert!(segments("/").is_empty());
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_resolve_root() {
        let root = tree();
        let found = resolve(&root, &root, "/").unwrap();
        assert!(std::ptr::eq(found, &root));
    }

    #[test]
    fn test_resolve_empty_returns_start() {
        let root = tree();
        let home = resolve(&root, &root, "/home").unwrap();
        let found = resolve(&root, home, "").unwrap();
        assert!(std::ptr::eq(found, home));
    }

    #[test]
    fn test_resolve_absolute_ignores_start() {
        let root = tree();
        let home = resolve(&root, &root, "home").unwrap();
        assert!(resolve(&root, home, "/bin").unwrap().is_directory());
        assert!(resolve(&root, home, "bin").is_none());
    }

    #[test]
    fn test_resolve_relative_and_messy() {
        let root = tree();
        let home = resolve(&root, &root, "/home").unwrap();
        assert!(resolve(&root, home, "user//notes.txt/").unwrap().is_file());
        assert!(resolve(&root, &root, "//home//user/").unwrap().is_directory());
    }

    #[test]
    fn test_resolve_through_file_fails() {
        let root = tree();
        assert!(resolve(&root, &root, "/home/user/notes.txt/more").is_none());
    }

    #[test]
    fn test_dot_dot_is_not_special() {
        let root = tree();
        assert!(resolve(&root, &root, "/home/user/..").is_none());
    }

    #[test]
    fn test_walk_mut_reaches_child() {
        let mut root = tree();
        let node = walk_mut(&mut root, &["home", "user", "notes.txt"]).unwrap();
        *node = Node::file("changed");
        assert_eq!(
            walk(&root, &["home", "user", "notes.txt"]),
            Some(&Node::file("changed"))
        );
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/home/user", "projects"), "/home/user/projects");
        assert_eq!(join("/", "bin"), "/bin");
        assert_eq!(join("/home", "/etc/"), "/etc");
        assert_eq!(join("/home", "a//b"), "/home/a/b");
    }

    #[test]
    fn test_parent_clamps_at_root() {
        assert_eq!(parent("/home/user"), "/home");
        assert_eq!(parent("/home"), "/");
        assert_eq!(parent("/"), "/");
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parent_reverses_join(
                base in proptest::collection::vec("[a-z]{1,6}", 0..5),
                child in "[a-z]{1,8}",
            ) {
                let base = canonicalize(&base.join("/"));
                prop_assert_eq!(parent(&join(&base, &child)), base);
            }

            #[test]
            fn canonicalize_is_idempotent(path in "[a-z/]{0,20}") {
                let once = canonicalize(&path);
                prop_assert_eq!(canonicalize(&once), once.clone());
                prop_assert!(is_absolute(&once));
            }
        }
    }
}
