//! FileOpener port - hands a file to the desktop's default application

use std::path::Path;

/// Opens files with the host's file-opening mechanism
///
/// A missing mechanism is tolerated silently.
pub trait FileOpener {
    fn open(&self, path: &Path);
}

impl<T: FileOpener + ?Sized> FileOpener for Box<T> {
    fn open(&self, path: &Path) {
        (**self).open(path)
    }
}

/// Opener that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOpener;

impl FileOpener for NullOpener {
    fn open(&self, _path: &Path) {}
}
