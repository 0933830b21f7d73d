use std::fs::Metadata;
use std::path::PathBuf;

/// One child of a directory, as seen by a single listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: FileKind,
    /// Byte size, only known for regular files.
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    Other,
}

impl FileKind {
    pub fn from_metadata(md: &Metadata) -> FileKind {
        if md.is_dir() {
            FileKind::Dir
        } else if md.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            FileKind::File => "FILE",
            FileKind::Dir => "DIR",
            FileKind::Other => "OTHER",
        }
    }
}

impl FileEntry {
    /// Size column text; directories and special files get a placeholder.
    pub fn size_label(&self) -> String {
        match self.size {
            Some(size) => size.to_string(),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_label_uses_placeholder_without_size() {
        let entry = FileEntry {
            name: "docs".into(),
            path: PathBuf::from("/tmp/docs"),
            kind: FileKind::Dir,
            size: None,
        };
        assert_eq!(entry.size_label(), "-");
        assert_eq!(entry.kind.tag(), "DIR");
    }
}
