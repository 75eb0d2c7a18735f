//! Property tests for path reduction.

#![cfg(unix)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use tcwatch::domain::ports::PathProbe;
use tcwatch::PathReducer;

/// In-memory tree rooted at `/project`
struct TreeProbe {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl TreeProbe {
    fn new(entries: &[(String, bool)]) -> Self {
        let mut files = HashSet::new();
        let mut dirs = HashSet::new();
        dirs.insert(PathBuf::from("/project"));
        for (rel, is_dir) in entries {
            let path = Path::new("/project").join(rel);
            let mut parent = path.parent();
            while let Some(p) = parent {
                dirs.insert(p.to_path_buf());
                parent = p.parent();
            }
            if *is_dir {
                dirs.insert(path);
            } else if !dirs.contains(&path) {
                files.insert(path);
            }
        }
        files.retain(|f| !dirs.contains(f));
        Self { files, dirs }
    }
}

impl PathProbe for TreeProbe {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn current_dir(&self) -> PathBuf {
        PathBuf::from("/project")
    }

    fn home_dir(&self) -> Option<PathBuf> {
        None
    }
}

fn segment() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["app", "lib", "models", "user.rb", "a.rb", "b.rbi"])
        .prop_map(str::to_string)
}

fn rel_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..=3).prop_map(|parts| parts.join("/"))
}

fn tree() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec((rel_path(), any::<bool>()), 0..=8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: reduced output has no duplicates and only existing paths.
    #[test]
    fn property_reduce_unique_and_existing(
        entries in tree(),
        raw in prop::collection::vec(rel_path(), 0..=12),
    ) {
        let probe = TreeProbe::new(&entries);
        let reduced = PathReducer::new(probe).reduce(&raw);
        let check = TreeProbe::new(&entries);

        let mut seen = HashSet::new();
        for path in reduced.iter() {
            prop_assert!(seen.insert(path.clone()), "duplicate {:?}", path);
            prop_assert!(check.exists(path), "missing {:?}", path);
            prop_assert!(path.is_absolute());
        }
    }

    /// PROPERTY: no surviving path lies inside another surviving directory.
    #[test]
    fn property_reduce_has_no_nested_paths(
        entries in tree(),
        raw in prop::collection::vec(rel_path(), 0..=12),
    ) {
        let check = TreeProbe::new(&entries);
        let reduced = PathReducer::new(TreeProbe::new(&entries)).reduce(&raw);

        for a in reduced.iter() {
            for b in reduced.iter() {
                if a != b && check.is_dir(b) {
                    prop_assert!(!a.starts_with(b), "{:?} is inside {:?}", a, b);
                }
            }
        }
    }

    /// PROPERTY: survivors keep the order of their first occurrence.
    #[test]
    fn property_reduce_preserves_first_occurrence_order(
        entries in tree(),
        raw in prop::collection::vec(rel_path(), 0..=12),
    ) {
        let reduced = PathReducer::new(TreeProbe::new(&entries)).reduce(&raw);

        let first_index = |p: &Path| {
            raw.iter()
                .position(|r| Path::new("/project").join(r) == p)
                .expect("every survivor comes from the input")
        };
        let indices: Vec<usize> = reduced.iter().map(|p| first_index(p)).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]), "order {:?}", indices);
    }

    /// PROPERTY: every existing input path is either kept or covered by a kept directory.
    #[test]
    fn property_reduce_loses_nothing_existing(
        entries in tree(),
        raw in prop::collection::vec(rel_path(), 0..=12),
    ) {
        let check = TreeProbe::new(&entries);
        let reduced = PathReducer::new(TreeProbe::new(&entries)).reduce(&raw);

        for r in &raw {
            let abs = Path::new("/project").join(r);
            if check.exists(&abs) {
                prop_assert!(
                    reduced.iter().any(|kept| abs.starts_with(kept)),
                    "{:?} was dropped", abs
                );
            }
        }
    }
}

#[test]
fn reduce_empty_input_is_empty() {
    let probe = TreeProbe::new(&[("app".to_string(), true)]);
    let raw: Vec<PathBuf> = Vec::new();
    assert!(PathReducer::new(probe).reduce(&raw).is_empty());
}
