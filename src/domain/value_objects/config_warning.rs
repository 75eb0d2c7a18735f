//! Unknown configuration keys

use std::path::PathBuf;

/// A key the configuration file sets but tcwatch does not read.
///
/// Never fatal; the rest of the file still applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the key path (`notifcation` for `run.notifcation`)
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first mention, when found
    pub line: Option<usize>,
    /// Closest known key, if one is near enough
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// `file:line`, or just the file when the line is unknown
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file.display(), line),
            None => self.file.display().to_string(),
        }
    }
}
