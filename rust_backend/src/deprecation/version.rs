//! Release versions and the removal policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{DeprecationError, DeprecationResult};

/// A `major.minor` release number.
///
/// Only the first two components matter; `"4.1.2"` parses as `4.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Long-term-support releases are the `.0` minors.
    pub const fn is_lts(&self) -> bool {
        self.minor == 0
    }

    /// Release in which an API deprecated in `self` may be removed.
    ///
    /// Deprecations made in an LTS release survive one more minor release;
    /// all others are removed in the first minor of the next major.
    ///
    /// # Returns
    /// * `Ok(Version)` with the removal release
    /// * `Err(DeprecationError::InvalidVersion)` when that release number
    ///   does not fit in a `u32`
    ///
    /// # Example
    /// ```
    /// use solkit::deprecation::Version;
    ///
    /// assert_eq!(Version::new(1, 0).removal().unwrap(), Version::new(1, 1));
    /// assert_eq!(Version::new(1, 3).removal().unwrap(), Version::new(2, 1));
    /// assert!(Version::new(u32::MAX, 3).removal().is_err());
    /// ```
    pub fn removal(&self) -> DeprecationResult<Version> {
        let next = if self.is_lts() {
            self.minor.checked_add(1).map(|minor| Version::new(self.major, minor))
        } else {
            self.major.checked_add(1).map(|major| Version::new(major, 1))
        };
        next.ok_or_else(|| DeprecationError::InvalidVersion {
            input: self.to_string(),
            reason: "no release number follows it".to_string(),
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = DeprecationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| DeprecationError::InvalidVersion {
            input: s.to_string(),
            reason,
        };

        let mut parts = s.split('.');
        let major = parts.next().unwrap_or_default();
        let minor = parts
            .next()
            .ok_or_else(|| invalid("expected 'major.minor'".to_string()))?;

        let major = major
            .parse::<u32>()
            .map_err(|e| invalid(format!("major component '{}': {}", major, e)))?;
        let minor = minor
            .parse::<u32>()
            .map_err(|e| invalid(format!("minor component '{}': {}", minor, e)))?;

        let version = Version::new(major, minor);
        version
            .removal()
            .map_err(|_| invalid("no removal release can follow it".to_string()))?;
        Ok(version)
    }
}

impl TryFrom<&str> for Version {
    type Error = DeprecationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
