//! Database profile selection
//!
//! A profile name picks one of the configured data sources. Resolution is
//! eager: an unknown name fails at parse time, before any config file is
//! read or any connection attempted.

use std::fmt;
use std::str::FromStr;

use crate::error::FixtureError;

/// The relational back-ends a fixture can be built against.
///
/// `"h2"` and `"h2-in-memory"` keep their historical names from the JVM
/// benchmark suite; both map to the embedded SQLite engine here. `"postgres"`
/// selects the networked PostgreSQL engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// File-backed embedded engine (`"h2"`)
    Embedded,
    /// In-memory embedded engine (`"h2-in-memory"`)
    EmbeddedInMemory,
    /// Networked PostgreSQL engine (`"postgres"`)
    Postgres,
}

impl Profile {
    /// Resolve a profile name, failing fast on anything unconfigured.
    pub fn parse(name: &str) -> Result<Self, FixtureError> {
        match name {
            "h2" => Ok(Profile::Embedded),
            "h2-in-memory" => Ok(Profile::EmbeddedInMemory),
            "postgres" => Ok(Profile::Postgres),
            other => Err(FixtureError::UnknownProfile(other.to_string())),
        }
    }

    /// Canonical profile name, also the stem of its config file.
    pub fn name(&self) -> &'static str {
        match self {
            Profile::Embedded => "h2",
            Profile::EmbeddedInMemory => "h2-in-memory",
            Profile::Postgres => "postgres",
        }
    }

    /// True for both embedded variants.
    pub fn is_embedded(&self) -> bool {
        matches!(self, Profile::Embedded | Profile::EmbeddedInMemory)
    }
}

impl FromStr for Profile {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::parse(s)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_profiles_select_embedded_engine() {
        assert_eq!(Profile::parse("h2").unwrap(), Profile::Embedded);
        assert_eq!(
            Profile::parse("h2-in-memory").unwrap(),
            Profile::EmbeddedInMemory
        );
        assert!(Profile::parse("h2").unwrap().is_embedded());
        assert!(Profile::parse("h2-in-memory").unwrap().is_embedded());
    }

    #[test]
    fn postgres_profile_selects_networked_engine() {
        let profile = Profile::parse("postgres").unwrap();
        assert_eq!(profile, Profile::Postgres);
        assert!(!profile.is_embedded());
    }

    #[test]
    fn unknown_profile_fails_construction() {
        let err = Profile::parse("oracle").unwrap_err();
        assert!(matches!(err, FixtureError::UnknownProfile(ref name) if name == "oracle"));
    }

    #[test]
    fn name_round_trips_through_parse() {
        for profile in [Profile::Embedded, Profile::EmbeddedInMemory, Profile::Postgres] {
            assert_eq!(Profile::parse(profile.name()).unwrap(), profile);
        }
    }
}
