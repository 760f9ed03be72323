//! # Manifest Parser
//!
//! Reads the line-oriented manifest into a fleet and a pool of locations.
//!
//! ```text
//! DroneA, [200], DroneB, [250]
//! LocationA, [200]
//! LocationB, [150]
//! ```
//!
//! * Line 1 lists the fleet as alternating `name, [capacity]` fields.
//! * Every following non-blank line is one `name, [package weight]` location.

use std::fs;
use std::path::Path;

use skyhaul_common::error::{ManifestError, ParseError};
use skyhaul_common::models::{Drone, Location};
use tracing::debug;

/// A fully parsed manifest, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub drones: Vec<Drone>,
    pub locations: Vec<Location>,
}

/// Reads and parses the manifest at `path`.
pub fn load_input(path: &Path) -> Result<Manifest, ManifestError> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest = parse_input(&text)?;
    debug!(
        "Parsed {} drones and {} locations from {}",
        manifest.drones.len(),
        manifest.locations.len(),
        path.display()
    );

    Ok(manifest)
}

/// Parses manifest text. Blank location lines are ignored.
pub fn parse_input(text: &str) -> Result<Manifest, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    let Some((line_no, fleet_line)) = lines.next() else {
        return Err(ParseError::MissingFleet);
    };
    let drones = parse_fleet(fleet_line, line_no)?;

    let locations = lines
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_no, line)| parse_location(line, line_no))
        .collect::<Result<Vec<Location>, ParseError>>()?;

    Ok(Manifest { drones, locations })
}

/// Parses the fleet line. A blank line is an empty fleet.
pub fn parse_fleet(line: &str, line_no: usize) -> Result<Vec<Drone>, ParseError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() % 2 != 0 {
        return Err(ParseError::UnpairedField {
            line: line_no,
            fields: fields.len(),
        });
    }

    fields
        .chunks_exact(2)
        .map(|pair| -> Result<Drone, ParseError> {
            let name = parse_name(pair[0], line_no)?;
            let capacity = parse_weight(pair[1], line_no)?;
            Ok(Drone::new(name, capacity))
        })
        .collect()
}

/// Parses a single `name, [weight]` location line.
pub fn parse_location(line: &str, line_no: usize) -> Result<Location, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [name, weight] = fields.as_slice() else {
        return Err(ParseError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };

    Ok(Location::new(
        parse_name(name, line_no)?,
        parse_weight(weight, line_no)?,
    ))
}

fn parse_name(field: &str, line_no: usize) -> Result<&str, ParseError> {
    if field.is_empty() {
        return Err(ParseError::EmptyName { line: line_no });
    }
    Ok(field)
}

/// Parses a `[<integer>]` weight token. Whitespace inside the brackets is allowed.
fn parse_weight(token: &str, line_no: usize) -> Result<u32, ParseError> {
    let inner = token
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ParseError::MalformedBracket {
            line: line_no,
            token: token.to_string(),
        })?;

    inner
        .trim()
        .parse::<u32>()
        .map_err(|source| ParseError::InvalidWeight {
            line: line_no,
            token: token.to_string(),
            source,
        })
}
