use crate::core::errors::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Working directory of one explorer run.
///
/// The cwd is always canonical and always names a directory that could be
/// read when it was entered. Only [`Session::change_dir`] mutates it; the
/// process-wide current directory is never touched.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
}

impl Session {
    pub fn new(start: impl AsRef<Path>) -> Result<Self> {
        let cwd = checked_dir(start.as_ref())?;
        Ok(Self { cwd })
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolves user input against the cwd. Absolute input is used as is.
    pub fn resolve(&self, input: &str) -> Result<PathBuf> {
        if input.is_empty() {
            return Err(Error::InvalidArgument("empty path".to_string()));
        }
        Ok(self.cwd.join(input))
    }

    /// `..` moves one level up (a no-op at `/`); anything else is resolved
    /// and must be a readable directory. On error the cwd is unchanged.
    pub fn change_dir(&mut self, input: &str) -> Result<&Path> {
        let next = if input == ".." {
            match self.cwd.parent() {
                Some(parent) => checked_dir(parent)?,
                None => self.cwd.clone(),
            }
        } else {
            checked_dir(&self.resolve(input)?)?
        };

        tracing::debug!("cwd {:?} -> {:?}", self.cwd, next);
        self.cwd = next;
        Ok(&self.cwd)
    }
}

fn checked_dir(path: &Path) -> Result<PathBuf> {
    let full = fs::canonicalize(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => e.into(),
    })?;
    if !full.is_dir() {
        return Err(Error::NotADirectory(full));
    }
    let _ = fs::read_dir(&full)?;
    Ok(full)
}
