//! Closeness configuration and TOML loading.
//!
//! A config file is optional. When present it looks like:
//!
//! ```toml
//! [closeness]
//! unreachable = "cap"
//! zero-distance = "omit"
//! ```
//!
//! Missing keys fall back to their defaults.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub closeness: ClosenessConfig,
}

/// How closeness treats unreachable pairs and degenerate distance sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClosenessConfig {
    #[serde(default)]
    pub unreachable: UnreachablePolicy,
    #[serde(default)]
    pub zero_distance: ZeroDistancePolicy,
}

/// Contribution of an unreachable destination to a node's distance sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnreachablePolicy {
    /// Count the term as `n`, one more than the longest possible shortest
    /// path between `n` scored nodes. Losing reachability never raises a
    /// score.
    #[default]
    Cap,
    /// Drop the term and scale by the reachable share of the graph
    /// (Wasserman–Faust): `r² / ((n - 1) · Σd)` over the `r` reached nodes.
    Exclude,
    /// Count the term as 0. An unreachable node then looks no farther away
    /// than the source itself.
    Zero,
}

/// What to report when a node's distance sum is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroDistancePolicy {
    /// Score the node as `0.0`.
    #[default]
    Zero,
    /// Leave the node out of the score map.
    Omit,
}

impl UnreachablePolicy {
    pub const ALL: [Self; 3] = [Self::Cap, Self::Exclude, Self::Zero];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Cap => "cap",
            Self::Zero => "zero",
        }
    }
}

impl ZeroDistancePolicy {
    pub const ALL: [Self; 2] = [Self::Zero, Self::Omit];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Omit => "omit",
        }
    }
}

impl fmt::Display for UnreachablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ZeroDistancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnreachablePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| Error::UnknownPolicy {
                kind: "unreachable",
                value: s.to_string(),
            })
    }
}

impl FromStr for ZeroDistancePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| Error::UnknownPolicy {
                kind: "zero-distance",
                value: s.to_string(),
            })
    }
}

/// Load a [`ProjectConfig`] from `path`.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
