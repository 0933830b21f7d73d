use crate::core::errors::Result;
use crate::models::file_entry::FileKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Controls how the query is compared against each base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    Contains,
    /// Byte-for-byte equality of the whole name.
    ExactName,
}

/// Defines a name search request.
#[derive(Debug, Clone)]
pub struct NameQuery {
    pattern: String,
    mode: MatchMode,
}

impl NameQuery {
    pub fn new(pattern: &str, mode: MatchMode) -> Self {
        let pattern = match mode {
            MatchMode::Contains => pattern.to_lowercase(),
            MatchMode::ExactName => pattern.to_string(),
        };
        Self { pattern, mode }
    }

    pub fn contains(pattern: &str) -> Self {
        Self::new(pattern, MatchMode::Contains)
    }

    pub fn exact(pattern: &str) -> Self {
        Self::new(pattern, MatchMode::ExactName)
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn matches(&self, name: &str) -> bool {
        match self.mode {
            MatchMode::Contains => name.to_lowercase().contains(&self.pattern),
            MatchMode::ExactName => name == self.pattern,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub path: PathBuf,
    pub name: String,
    pub kind: FileKind,
}

/// Walks everything below `root` and returns the entries whose base name
/// matches, in traversal order.
///
/// Unreadable subtrees are skipped; only an unreadable `root` is an error.
/// Symbolic links are reported but never followed.
pub fn search_names(root: &Path, query: &NameQuery) -> Result<Vec<SearchHit>> {
    let mut hits = Vec::new();

    for result in WalkDir::new(root).min_depth(1) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                tracing::debug!("Skipping during search: {}", err);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy();
        if !query.matches(&name) {
            continue;
        }

        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            FileKind::Dir
        } else if file_type.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        };

        let name = name.into_owned();
        hits.push(SearchHit {
            name,
            path: entry.into_path(),
            kind,
        });
    }

    Ok(hits)
}
