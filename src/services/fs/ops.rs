use crate::core::errors::{Error, Result};
use std::fs::{self, Metadata, OpenOptions};
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// What `delete` removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removed {
    File,
    /// `items` counts every removed entry, the directory itself included.
    Directory { items: u64 },
}

/// How `move_entry` got the source to its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moved {
    Renamed,
    CopiedAcrossDevices,
}

/// Creates an empty regular file. Never truncates an existing entry.
pub fn create_file(path: &Path) -> Result<()> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            tracing::info!("Created file {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            Err(Error::AlreadyExists(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Removes a file, or a directory and everything below it.
pub fn delete(path: &Path) -> Result<Removed> {
    let md = existing_metadata(path, false)?;
    if !md.is_dir() {
        fs::remove_file(path)?;
        tracing::info!("Removed file {:?}", path);
        return Ok(Removed::File);
    }

    let mut items = 0u64;
    for entry in WalkDir::new(path).contents_first(true) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
        items += 1;
    }
    tracing::info!("Removed directory {:?} ({} items)", path, items);
    Ok(Removed::Directory { items })
}

/// Copies a file or a whole directory tree, overwriting existing destination files.
pub fn copy(src: &Path, dst: &Path) -> Result<()> {
    let md = existing_metadata(src, true)?;
    if md.is_dir() {
        copy_tree(src, dst)
    } else {
        if let Ok(dst_md) = fs::metadata(dst) {
            if (dst_md.dev(), dst_md.ino()) == (md.dev(), md.ino()) {
                return Err(Error::InvalidArgument(format!(
                    "cannot copy {} onto itself",
                    src.display()
                )));
            }
        }
        fs::copy(src, dst)?;
        tracing::info!("Copied {:?} to {:?}", src, dst);
        Ok(())
    }
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    let src_root = fs::canonicalize(src)?;
    if canonical_target(dst).starts_with(&src_root) {
        return Err(Error::InvalidArgument(format!(
            "cannot copy {} into itself",
            src.display()
        )));
    }

    let mut files = 0u64;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).map_err(|_| {
            Error::InvalidArgument(format!("{} escaped the source tree", entry.path().display()))
        })?;
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            files += 1;
        }
    }
    tracing::info!("Copied tree {:?} to {:?} ({} files)", src, dst, files);
    Ok(())
}

/// Renames `src` to `dst`. Across filesystems this falls back to copy then delete.
pub fn move_entry(src: &Path, dst: &Path) -> Result<Moved> {
    match fs::rename(src, dst) {
        Ok(()) => {
            tracing::info!("Renamed {:?} to {:?}", src, dst);
            Ok(Moved::Renamed)
        }
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::info!("Rename {:?} crosses devices, copying instead", src);
            copy(src, dst)?;
            delete(src)?;
            Ok(Moved::CopiedAcrossDevices)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound && fs::symlink_metadata(src).is_err() => {
            Err(Error::NotFound(src.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

fn existing_metadata(path: &Path, follow_links: bool) -> Result<Metadata> {
    let md = if follow_links {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    };
    match md {
        Ok(md) => Ok(md),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

/// Best-effort absolute form of a path that may not exist yet: the deepest
/// existing ancestor is canonicalised and the rest is appended.
fn canonical_target(path: &Path) -> PathBuf {
    let path = normalize_lexically(path);
    let mut missing = Vec::new();
    let mut current = path.as_path();
    loop {
        if let Ok(mut full) = fs::canonicalize(current) {
            full.extend(missing.iter().rev());
            return full;
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => return path.clone(),
        }
    }
}

/// Drops `.` and resolves `..` against the preceding component.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
