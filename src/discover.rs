//! Recursive discovery of input files under a root directory.

use std::fs::{self, ReadDir};
use std::io;
use std::path::{Path, PathBuf};

/// Lazy depth-first walk over regular files whose name ends with a suffix.
///
/// Each call to [`files_with_suffix`] starts a fresh traversal; the iterator
/// is finite and holds no state beyond its directory stack. Yield order is
/// whatever the file system reports, not sorted.
pub struct FileWalker {
    suffix: String,
    stack: Vec<ReadDir>,
}

impl FileWalker {
    fn new(root: &Path, suffix: &str) -> io::Result<Self> {
        Ok(Self {
            suffix: suffix.to_string(),
            stack: vec![fs::read_dir(root)?],
        })
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }
}

impl Iterator for FileWalker {
    type Item = io::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dir = self.stack.last_mut()?;
            let entry = match dir.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => return Some(Err(e)),
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => return Some(Err(e)),
            };

            if file_type.is_dir() {
                match fs::read_dir(entry.path()) {
                    Ok(sub) => self.stack.push(sub),
                    Err(e) => return Some(Err(e)),
                }
            } else if file_type.is_file() && self.matches(&entry.path()) {
                return Some(Ok(entry.path()));
            }
        }
    }
}

/// Walk `root` recursively, yielding regular files ending with `suffix`.
pub fn files_with_suffix(root: &Path, suffix: &str) -> io::Result<FileWalker> {
    FileWalker::new(root, suffix)
}

/// Walk `root` recursively, yielding `.html` files.
pub fn html_files(root: &Path) -> io::Result<FileWalker> {
    files_with_suffix(root, ".html")
}
