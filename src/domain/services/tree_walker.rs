//! Tree Walker Domain Service
//!
//! Depth-first directory traversal driven by an explicit stack, so the walk
//! never grows the call stack no matter how deep the tree is.

use std::path::Path;

use crate::domain::ports::{DirEntry, FileSystem, FsResult};

/// Walk every entry below `root` (not including `root` itself).
///
/// Within one directory, entries come back in name order; subdirectories are
/// expanded after the directory's own entries have been emitted.
pub fn walk<FS: FileSystem + ?Sized>(fs: &FS, root: &Path) -> FsResult<Vec<DirEntry>> {
    let mut stack = vec![root.to_path_buf()];
    let mut entries = Vec::new();

    while let Some(current) = stack.pop() {
        let listing = fs.list_dir(&current)?;
        // Reversed so sibling directories pop in name order
        stack.extend(
            listing
                .iter()
                .rev()
                .filter(|entry| entry.is_dir)
                .map(|entry| entry.path.clone()),
        );
        entries.extend(listing);
    }

    Ok(entries)
}

/// `/`-prefixed, `/`-joined path of `path` relative to `root`.
///
/// `relative_key("/out", "/out/audio/click") == "/audio/click"`
pub fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut key = String::new();
    for component in relative.components() {
        key.push('/');
        key.push_str(&component.as_os_str().to_string_lossy());
    }
    key
}
