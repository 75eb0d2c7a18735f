//! Path Set Value Object
//!
//! The reduced, ordered set of absolute paths handed to the checker.
//! Only `PathReducer` builds non-empty sets, so every member was an existing
//! entry at reduction time and no member sits inside another member directory.

use std::path::{Path, PathBuf};

/// Ordered, duplicate-free set of absolute paths
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathSet(Vec<PathBuf>);

impl PathSet {
    /// An empty set
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn from_reduced(paths: Vec<PathBuf>) -> Self {
        Self(paths)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.0.iter()
    }

    /// Members rendered as argv strings.
    pub fn to_args(&self) -> Vec<String> {
        self.0.iter().map(|p| p.display().to_string()).collect()
    }

    /// Members rendered for humans: relative to `cwd` when under it,
    /// absolute otherwise.
    pub fn display_relative(&self, cwd: &Path) -> Vec<String> {
        self.0
            .iter()
            .map(|p| match p.strip_prefix(cwd) {
                Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
                Ok(_) => ".".to_string(),
                Err(_) => p.display().to_string(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set = PathSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.to_args().is_empty());
    }

    #[test]
    fn display_relative_strips_cwd() {
        let set = PathSet::from_reduced(vec![
            PathBuf::from("/work/app/models/user.rb"),
            PathBuf::from("/work"),
            PathBuf::from("/elsewhere/lib.rb"),
        ]);

        assert_eq!(
            set.display_relative(Path::new("/work")),
            vec!["app/models/user.rb", ".", "/elsewhere/lib.rb"]
        );
    }

    #[test]
    fn display_relative_is_component_aware() {
        let set = PathSet::from_reduced(vec![PathBuf::from("/workspace/a.rb")]);
        assert_eq!(
            set.display_relative(Path::new("/work")),
            vec!["/workspace/a.rb"]
        );
    }
}
