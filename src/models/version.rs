//! Interpreter version model.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A `major.minor[.patch]` interpreter version.
///
/// Ordering is numeric by component, so `3.10` sorts after `3.8`. A version
/// without a patch component sorts before any patch release of the same
/// `major.minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl RuntimeVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Extract the first version number from interpreter output such as
    /// `Python 3.11.4` or `Python 3.13.0rc1`.
    pub fn from_output(output: &str) -> Option<Self> {
        let re = regex::Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").ok()?;
        let caps = re.captures(output)?;

        Some(Self {
            major: caps.get(1)?.as_str().parse().ok()?,
            minor: caps.get(2)?.as_str().parse().ok()?,
            patch: caps.get(3).and_then(|m| m.as_str().parse().ok()),
        })
    }

    /// Version truncated to `major.minor`.
    pub fn short(&self) -> Self {
        Self::new(self.major, self.minor)
    }

    /// Check whether `self`, as a minimum, sorts first against `detected`.
    pub fn is_satisfied_by(&self, detected: &RuntimeVersion) -> bool {
        self <= detected
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for RuntimeVersion {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split('.').collect();
        let valid = (2..=3).contains(&parts.len())
            && parts
                .iter()
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !valid {
            return Err(crate::Error::Config(format!("invalid version '{}'", s)));
        }

        RuntimeVersion::from_output(trimmed)
            .ok_or_else(|| crate::Error::Config(format!("invalid version '{}'", s)))
    }
}

impl Serialize for RuntimeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RuntimeVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_output() {
        let v = RuntimeVersion::from_output("Python 3.11.4\n").unwrap();
        assert_eq!(v.major, 3);
        assert_eq!(v.minor, 11);
        assert_eq!(v.patch, Some(4));

        let rc = RuntimeVersion::from_output("Python 3.13.0rc1").unwrap();
        assert_eq!(rc.to_string(), "3.13.0");

        assert!(RuntimeVersion::from_output("Python").is_none());
        assert!(RuntimeVersion::from_output("").is_none());
    }

    #[test]
    fn test_numeric_ordering() {
        let minimum: RuntimeVersion = "3.8".parse().unwrap();

        assert!(minimum.is_satisfied_by(&"3.8".parse().unwrap()));
        assert!(minimum.is_satisfied_by(&"3.10".parse().unwrap()));
        assert!(minimum.is_satisfied_by(&"3.11".parse().unwrap()));
        assert!(minimum.is_satisfied_by(&"4.0".parse().unwrap()));
        assert!(!minimum.is_satisfied_by(&"3.6".parse().unwrap()));
        assert!(!minimum.is_satisfied_by(&"2.7".parse().unwrap()));
    }

    #[test]
    fn test_patch_ordering() {
        let minimum: RuntimeVersion = "3.8".parse().unwrap();
        let detected = RuntimeVersion::from_output("Python 3.8.0").unwrap();
        assert!(minimum.is_satisfied_by(&detected));
        assert!(minimum.is_satisfied_by(&detected.short()));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<RuntimeVersion>().is_err());
        assert!("three".parse::<RuntimeVersion>().is_err());
        assert!("3.x".parse::<RuntimeVersion>().is_err());
        assert!("3".parse::<RuntimeVersion>().is_err());
        assert!("3.8.1.2".parse::<RuntimeVersion>().is_err());
        assert_eq!("3.8.1".parse::<RuntimeVersion>().unwrap().to_string(), "3.8.1");
    }
}
