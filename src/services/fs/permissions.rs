use crate::core::errors::{Error, Result};
use crate::models::permissions::PermissionBits;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

pub fn read_permissions(path: &Path) -> Result<PermissionBits> {
    let md = fs::metadata(path).map_err(|e| not_found_or(path, e))?;
    Ok(PermissionBits::from_mode(md.permissions().mode()))
}

/// Replaces the permission bits of `path` with the given octal code.
///
/// The code is validated before the filesystem is touched, so a malformed
/// code never mutates anything.
pub fn set_permissions(path: &Path, code: &str) -> Result<PermissionBits> {
    let bits = PermissionBits::from_octal(code)?;
    if let Err(e) = fs::metadata(path) {
        return Err(not_found_or(path, e));
    }
    fs::set_permissions(path, fs::Permissions::from_mode(bits.mode()))?;
    tracing::info!("Set permissions of {:?} to {}", path, bits);
    Ok(bits)
}

fn not_found_or(path: &Path, e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::NotFound {
        Error::NotFound(path.to_path_buf())
    } else {
        e.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_then_read_round_trips_common_modes() -> Result<()> {
        let root = TempDir::new()?;
        let path = root.path().join("script.sh");
        fs::write(&path, "#!/bin/sh")?;

        for (code, rwx) in [("644", "rw-r--r--"), ("755", "rwxr-xr-x"), ("600", "rw-------")] {
            set_permissions(&path, code)?;
            assert_eq!(read_permissions(&path)?.to_rwx(), rwx);
        }
        Ok(())
    }

    #[test]
    fn set_replaces_rather_than_merges() -> Result<()> {
        let root = TempDir::new()?;
        let path = root.path().join("data");
        fs::write(&path, "")?;
        set_permissions(&path, "777")?;
        set_permissions(&path, "400")?;
        assert_eq!(read_permissions(&path)?.to_rwx(), "r--------");
        Ok(())
    }

    #[test]
    fn malformed_code_leaves_permissions_untouched() -> Result<()> {
        let root = TempDir::new()?;
        let path = root.path().join("data");
        fs::write(&path, "")?;
        set_permissions(&path, "640")?;

        let result = set_permissions(&path, "9z1");
        assert!(matches!(result, Err(Error::InvalidMode(_))));
        assert_eq!(read_permissions(&path)?.to_string(), "640");
        Ok(())
    }

    #[test]
    fn missing_path_is_not_found() -> Result<()> {
        let root = TempDir::new()?;
        let missing = root.path().join("missing");
        assert!(matches!(read_permissions(&missing), Err(Error::NotFound(_))));
        assert!(matches!(
            set_permissions(&missing, "644"),
            Err(Error::NotFound(_))
        ));
        Ok(())
    }
}
