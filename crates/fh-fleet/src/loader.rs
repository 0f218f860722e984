//! Initial-position loader.
//!
//! # Format
//!
//! Plain whitespace-separated integers.  The first token is the robot count
//! `N`; it is followed by `N` `x y` pairs.  Line breaks carry no meaning.
//!
//! ```text
//! 3
//! 0 0
//! 10 0
//! -4 7
//! ```
//!
//! Tokens after the `N`th pair are ignored.
//!
//! # Failure
//!
//! If the input ends before `N` pairs are read, loading stops and
//! [`FleetError::Truncated`] reports how many complete pairs were seen.  No
//! positions are returned on failure.

use std::io::Read;
use std::path::Path;

use fh_core::GridPoint;

use crate::{FleetError, FleetResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load initial robot positions from a file.
pub fn load_positions_file(path: &Path) -> FleetResult<Vec<GridPoint>> {
    let file = std::fs::File::open(path)?;
    load_positions_reader(file)
}

/// Like [`load_positions_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding position lists
/// in the binary.
pub fn load_positions_reader<R: Read>(mut reader: R) -> FleetResult<Vec<GridPoint>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    // ── Header ────────────────────────────────────────────────────────────
    let header = tokens
        .next()
        .ok_or_else(|| FleetError::Parse("empty position file: missing robot count".into()))?;
    let expected: usize = header.parse().map_err(|_| {
        FleetError::Parse(format!("invalid robot count {header:?}: expected a non-negative integer"))
    })?;

    // ── Pairs ─────────────────────────────────────────────────────────────
    let mut positions = Vec::with_capacity(expected.min(1_000_000));
    for read in 0..expected {
        let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
            tracing::warn!(expected, read, "position file ended early");
            return Err(FleetError::Truncated { expected, read });
        };
        positions.push(GridPoint::new(parse_coord(x, read)?, parse_coord(y, read)?));
    }

    if tokens.next().is_some() {
        tracing::debug!(expected, "ignoring trailing tokens after the last position");
    }

    Ok(positions)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_coord(token: &str, pair: usize) -> FleetResult<i32> {
    token.parse::<i32>().map_err(|_| {
        FleetError::Parse(format!("invalid coordinate {token:?} in position {pair}"))
    })
}
