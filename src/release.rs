//! Release version and iteration model
//!
//! Value types classifying a software version against its release
//! iteration. A version paired with a service iteration lives on a
//! maintenance branch; the version-string format question (modifier style
//! vs. plain) depends on which variant pairs them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("invalid version string: '{0}', expected major.minor.bugfix")]
    InvalidVersion(String),
}

/// A dotted three-part version, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    bugfix: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, bugfix: u32) -> Self {
        Self {
            major,
            minor,
            bugfix,
        }
    }

    /// Parse `"1.2.3"`; a missing bugfix part defaults to zero (`"1.2"`).
    pub fn parse(s: &str) -> Result<Self, ReleaseError> {
        let invalid = || ReleaseError::InvalidVersion(s.to_string());

        let mut parts = s.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minor = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let bugfix = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(major, minor, bugfix))
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn bugfix(&self) -> u32 {
        self.bugfix
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

/// One release cycle within a version: milestone, release candidate, GA or
/// service release.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iteration {
    name: String,
}

impl Iteration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn ga() -> Self {
        Self::new("GA")
    }

    pub fn milestone(number: u32) -> Self {
        Self::new(format!("M{number}"))
    }

    pub fn release_candidate(number: u32) -> Self {
        Self::new(format!("RC{number}"))
    }

    pub fn service(number: u32) -> Self {
        Self::new(format!("SR{number}"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A maintenance/patch cycle rather than a feature cycle.
    pub fn is_service_iteration(&self) -> bool {
        self.name.starts_with("SR")
    }

    pub fn is_milestone(&self) -> bool {
        self.name.starts_with('M') && self.name[1..].chars().all(|c| c.is_ascii_digit())
    }

    pub fn is_release_candidate(&self) -> bool {
        self.name.starts_with("RC")
    }

    pub fn is_ga(&self) -> bool {
        self.name == "GA"
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The plain pairing of a version with its iteration.
///
/// Never formats with a modifier; branch classification follows the
/// iteration alone. Both answers are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleIterationVersion {
    version: Version,
    iteration: Iteration,
}

impl SimpleIterationVersion {
    pub fn new(version: Version, iteration: Iteration) -> Self {
        Self { version, iteration }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn iteration(&self) -> &Iteration {
        &self.iteration
    }

    pub fn is_branch_version(&self) -> bool {
        self.iteration.is_service_iteration()
    }

    pub fn uses_modifier_version_format(&self) -> bool {
        false
    }
}

/// The known version/iteration pairings, as a closed set.
///
/// - `Simple`: plain pairing, never modifier-formatted.
/// - `Branch`: a version pinned to a maintenance branch, always a branch
///   version regardless of iteration.
/// - `Modifier`: a version whose string form carries the iteration as a
///   modifier suffix (`1.2.3-SR1` style).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IterationVersion {
    Simple(SimpleIterationVersion),
    Branch {
        version: Version,
        iteration: Iteration,
    },
    Modifier {
        version: Version,
        iteration: Iteration,
    },
}

impl IterationVersion {
    pub fn version(&self) -> &Version {
        match self {
            IterationVersion::Simple(simple) => simple.version(),
            IterationVersion::Branch { version, .. } => version,
            IterationVersion::Modifier { version, .. } => version,
        }
    }

    pub fn iteration(&self) -> &Iteration {
        match self {
            IterationVersion::Simple(simple) => simple.iteration(),
            IterationVersion::Branch { iteration, .. } => iteration,
            IterationVersion::Modifier { iteration, .. } => iteration,
        }
    }

    pub fn is_branch_version(&self) -> bool {
        match self {
            IterationVersion::Simple(simple) => simple.is_branch_version(),
            IterationVersion::Branch { .. } => true,
            IterationVersion::Modifier { iteration, .. } => iteration.is_service_iteration(),
        }
    }

    pub fn uses_modifier_version_format(&self) -> bool {
        match self {
            IterationVersion::Simple(simple) => simple.uses_modifier_version_format(),
            IterationVersion::Branch { .. } => false,
            IterationVersion::Modifier { .. } => true,
        }
    }
}
