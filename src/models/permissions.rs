use std::fmt;

use crate::core::errors::{Error, Result};

/// The nine POSIX rwx bits for owner, group and other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionBits(u32);

impl PermissionBits {
    pub const MASK: u32 = 0o777;

    /// Keeps only the rwx triplets; setuid, setgid and sticky are dropped.
    pub fn from_mode(mode: u32) -> Self {
        Self(mode & Self::MASK)
    }

    /// Parses a three digit octal code such as `755`.
    pub fn from_octal(code: &str) -> Result<Self> {
        let digits = code.as_bytes();
        if digits.len() != 3 || !digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
            return Err(Error::InvalidMode(code.to_string()));
        }
        let bits = digits
            .iter()
            .fold(0u32, |acc, d| (acc << 3) | u32::from(d - b'0'));
        Ok(Self(bits))
    }

    pub fn mode(&self) -> u32 {
        self.0
    }

    /// Renders the `rwxr-xr-x` form.
    pub fn to_rwx(&self) -> String {
        let mut out = String::with_capacity(9);
        for shift in [6u32, 3, 0] {
            let triplet = (self.0 >> shift) & 0o7;
            out.push(if triplet & 0o4 != 0 { 'r' } else { '-' });
            out.push(if triplet & 0o2 != 0 { 'w' } else { '-' });
            out.push(if triplet & 0o1 != 0 { 'x' } else { '-' });
        }
        out
    }
}

impl fmt::Display for PermissionBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03o}", self.0)
    }
}
