//! Owner-class permission modes.

use std::fmt;
use std::fs::Permissions;
use std::str::FromStr;

use crate::error::{Error, Result};

const OWNER_READ: u32 = 0o400;
const OWNER_WRITE: u32 = 0o200;
const OWNER_EXECUTE: u32 = 0o100;

/// A set of owner permissions, written as characters from `{r, w, x}`.
///
/// `-` is accepted as a placeholder so that `ls`-style strings such as
/// `r-x` parse too.
///
/// # Examples
///
/// ```
/// use fspath::AccessMode;
///
/// let mode: AccessMode = "rx".parse().unwrap();
/// assert!(mode.read && mode.execute && !mode.write);
/// assert_eq!(mode.owner_bits(), 0o500);
/// assert_eq!(mode.to_string(), "r-x");
/// assert!("rwz".parse::<AccessMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct AccessMode {
    /// Owner read.
    pub read: bool,
    /// Owner write.
    pub write: bool,
    /// Owner execute (search, for directories).
    pub execute: bool,
}

impl AccessMode {
    /// The owner-class permission bits for this mode.
    #[must_use]
    pub const fn owner_bits(&self) -> u32 {
        let mut bits = 0;
        if self.read {
            bits |= OWNER_READ;
        }
        if self.write {
            bits |= OWNER_WRITE;
        }
        if self.execute {
            bits |= OWNER_EXECUTE;
        }
        bits
    }

    /// Recover the owner mode from full permission bits.
    #[must_use]
    pub const fn from_owner_bits(bits: u32) -> Self {
        Self {
            read: bits & OWNER_READ != 0,
            write: bits & OWNER_WRITE != 0,
            execute: bits & OWNER_EXECUTE != 0,
        }
    }

    /// Returns true if every bit requested here is set in `bits`.
    #[must_use]
    pub const fn satisfied_by(&self, bits: u32) -> bool {
        bits & self.owner_bits() == self.owner_bits()
    }
}

impl FromStr for AccessMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut mode = Self::default();
        for c in s.chars() {
            match c {
                'r' => mode.read = true,
                'w' => mode.write = true,
                'x' => mode.execute = true,
                '-' => {}
                other => {
                    return Err(Error::Validation {
                        field: "mode".into(),
                        message: format!("Invalid mode character '{other}' in '{s}' (expected r, w, x)"),
                    })
                }
            }
        }
        Ok(mode)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool, c: char| if on { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.read, 'r'),
            flag(self.write, 'w'),
            flag(self.execute, 'x')
        )
    }
}

/// The full permission bits of `permissions`.
#[cfg(unix)]
pub(crate) fn mode_bits(permissions: &Permissions) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    permissions.mode() & 0o7777
}

/// Read-only entries report owner read only; everything else read and write.
#[cfg(not(unix))]
pub(crate) fn mode_bits(permissions: &Permissions) -> u32 {
    if permissions.readonly() {
        OWNER_READ
    } else {
        OWNER_READ | OWNER_WRITE
    }
}

/// Permissions carrying exactly `bits`.
#[cfg(unix)]
pub(crate) fn permissions_from_bits(_current: Permissions, bits: u32) -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    Permissions::from_mode(bits)
}

/// Only the write bit can be expressed; it maps onto the read-only flag.
#[cfg(not(unix))]
pub(crate) fn permissions_from_bits(mut current: Permissions, bits: u32) -> Permissions {
    current.set_readonly(bits & OWNER_WRITE == 0);
    current
}
