use crate::core::errors::Result;
use crate::models::file_entry::{FileEntry, FileKind};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Lists the immediate children of `dir` in the order the host yields them.
pub fn list_dir(dir: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = os_str_to_string(entry.file_name());

        // Follow links so a link to a directory lists as DIR; dangling links fall back to the link itself.
        let md = fs::metadata(&path).or_else(|_| fs::symlink_metadata(&path));
        let (kind, size) = match md {
            Ok(md) => {
                let kind = FileKind::from_metadata(&md);
                let size = (kind == FileKind::File).then(|| md.len());
                (kind, size)
            }
            Err(e) => {
                tracing::debug!("Cannot stat {:?}: {}", path, e);
                (FileKind::Other, None)
            }
        };

        entries.push(FileEntry {
            name,
            path,
            kind,
            size,
        });
    }

    Ok(entries)
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
