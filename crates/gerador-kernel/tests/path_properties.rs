//! Property tests for path resolution and the file tree.

use gerador_kernel::vfs::{DosPath, FileTree};
use proptest::prelude::*;

/// Directories that exist on a fresh drive.
fn seeded_dir() -> impl Strategy<Value = DosPath> {
    prop_oneof![
        Just(DosPath::root()),
        Just(DosPath::parse(r"C:\DOCS").unwrap()),
        Just(DosPath::parse(r"C:\SYSTEM").unwrap()),
    ]
}

/// A relative path made only of `.` and `..`.
fn dots() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just("."), Just("..")], 1..8)
        .prop_map(|parts| parts.join("\\"))
}

fn segment() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{0,7}"
}

proptest! {
    #[test]
    fn dots_never_escape_root(cwd in seeded_dir(), rel in dots()) {
        let resolved = cwd.resolve(&rel).unwrap();
        prop_assert!(resolved.depth() <= cwd.depth());
        prop_assert!(resolved.to_string().starts_with(r"C:\"));
    }

    #[test]
    fn resolving_twice_is_stable(name in prop_oneof![
        Just(r"C:\DOCS\README.TXT"),
        Just(r"C:\SYSTEM"),
        Just(r"C:\AUTOEXEC.BAT"),
        Just(r"C:\DOCS\MISSING.TXT"),
    ]) {
        let tree = FileTree::seeded();
        let resolver = tree.resolver();
        let a = resolver.resolve(name, &DosPath::root()).unwrap();
        let b = resolver.resolve(name, &DosPath::root()).unwrap();
        prop_assert_eq!(&a.path, &b.path);
        prop_assert_eq!(&a.name, &b.name);
        prop_assert_eq!(a.node, b.node);
        prop_assert_eq!(a.parent, b.parent);
    }

    #[test]
    fn down_then_up_returns(segments in prop::collection::vec(segment(), 0..4), child in segment()) {
        let base = DosPath::root().join(&segments.join("\\"));
        let back = base.resolve(&child).unwrap().resolve("..").unwrap();
        prop_assert_eq!(back, base);
    }

    #[test]
    fn write_then_read(dir in seeded_dir(), stem in segment(), content in ".*") {
        let mut tree = FileTree::seeded();
        let target = dir.join(&format!("{stem}.TXT"));
        tree.write(&target, content.clone()).unwrap();
        prop_assert_eq!(tree.read(&target).unwrap(), content.as_str());
    }

    #[test]
    fn names_are_case_insensitive(stem in "[a-z]{1,8}") {
        let mut tree = FileTree::seeded();
        let lower = DosPath::root().resolve(&format!("{stem}.txt")).unwrap();
        let upper = DosPath::root().resolve(&format!("{}.TXT", stem.to_uppercase())).unwrap();
        tree.write(&lower, "x").unwrap();
        prop_assert_eq!(tree.read(&upper).unwrap(), "x");
    }
}
