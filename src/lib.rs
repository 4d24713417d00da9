use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot parse Hanzo Datastore version here: {version}")]
pub struct MalformedVersion {
    pub version: String,
}

/// A dotted-numeric version such as `23.8.1`.
///
/// Components are positional (major first) and compare numerically, so
/// `1.9.0 < 1.10.0`. Ordering over the component sequence is lexicographic:
/// a strict prefix sorts before the longer version, making `1.2 < 1.2.0`
/// and `1.2 != 1.2.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Parse a version from its textual form.
    ///
    /// Every dot-separated segment must be a non-empty run of ASCII digits
    /// that fits in a `u64`; anything else rejects the whole input. Leading
    /// zeros are accepted and normalized to the integer value, so `01.2`
    /// parses but renders back as `1.2`.
    pub fn new(version: impl AsRef<str>) -> Result<Self, MalformedVersion> {
        let version = version.as_ref();
        if version.is_empty() {
            return Err(MalformedVersion {
                version: version.into(),
            });
        }

        let mut components = Vec::new();
        for segment in version.split('.') {
            let component = Self::parse_component(segment).ok_or_else(|| MalformedVersion {
                version: version.into(),
            })?;
            components.push(component);
        }

        Ok(Self { components })
    }

    fn parse_component(segment: &str) -> Option<u64> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // All-digit input, so the only remaining failure is overflow.
        segment.parse().ok()
    }

    /// The parsed components, major first. Never empty.
    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.components.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
        }
        for component in components {
            write!(f, ".{component}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = MalformedVersion;

    fn from_str(s: &str) -> Result<Self, MalformedVersion> {
        Version::new(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl serde::de::Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a dotted-numeric version string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Version, E> {
                Version::new(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
