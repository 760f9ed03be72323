//! Error types for manifest parsing and trip allocation.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::Location;

/// Malformed manifest text. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The manifest has no fleet line at all.
    #[error("manifest is empty: expected the fleet on line 1")]
    MissingFleet,

    /// The fleet line does not split into `name, [weight]` pairs.
    #[error("line {line}: fleet has {fields} fields, expected `name, [weight]` pairs")]
    UnpairedField { line: usize, fields: usize },

    /// A location line does not have exactly a name and a weight.
    #[error("line {line}: expected `name, [weight]`, found {found} field(s)")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: name must not be empty")]
    EmptyName { line: usize },

    /// The weight is not wrapped in square brackets.
    #[error("line {line}: weight '{token}' must be written as [<integer>]")]
    MalformedBracket { line: usize, token: String },

    #[error("line {line}: weight '{token}' is not a non-negative integer: {source}")]
    InvalidWeight {
        line: usize,
        token: String,
        source: ParseIntError,
    },
}

/// Failure to obtain a manifest from disk.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Conditions that keep a plan from covering every location.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    /// Packages heavier than the largest drone in the fleet.
    ///
    /// Every other location has already been assigned when this is returned.
    #[error("no drone can carry {}", describe(.locations))]
    Infeasible { locations: Vec<Location> },
}

impl AllocationError {
    #[inline]
    pub fn infeasible(locations: Vec<Location>) -> Self {
        Self::Infeasible { locations }
    }

    /// The locations left out of the plan.
    pub fn locations(&self) -> &[Location] {
        match self {
            Self::Infeasible { locations } => locations,
        }
    }
}

fn describe(locations: &[Location]) -> String {
    let noun = if locations.len() == 1 { "location" } else { "locations" };
    let list = locations
        .iter()
        .map(|location| format!("{} [{}]", location.name(), location.package_weight()))
        .collect::<Vec<String>>()
        .join(", ");
    format!("{noun} {list}")
}
