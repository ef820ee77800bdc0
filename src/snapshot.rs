//! Saves and restores a parsed [`Grid`] without going back to the maze text

use crate::grid::{Grid, ParseError};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bumped whenever the snapshot layout changes
pub const SNAPSHOT_VERSION: u32 = 1;

/// File extension used for snapshots
pub const SNAPSHOT_EXTENSION: &str = "bin";

/// Errors from saving or restoring a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// bincode could not encode the grid
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    /// The bytes are not a snapshot
    #[error("Failed to decode snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    /// The snapshot was written with a different layout
    #[error("Snapshot version {found} is not supported (expected {})", SNAPSHOT_VERSION)]
    Version {
        /// The version stored in the snapshot
        found: u32,
    },
    /// The stored rows do not form a valid maze
    #[error("Snapshot holds an invalid maze: {0}")]
    Invalid(#[from] ParseError),
}

#[derive(Serialize)]
struct Snapshot<'a> {
    version: u32,
    grid: &'a Grid,
}

/// Same layout as [`Snapshot`], with the grid left as rows so that a bad maze is reported as a
/// [`ParseError`]
#[derive(Deserialize)]
struct RawSnapshot {
    version: u32,
    rows: Vec<String>,
}

/// Encodes `grid` into snapshot bytes
pub fn encode(grid: &Grid) -> Result<Vec<u8>, SnapshotError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        grid,
    };
    Ok(bincode::serde::encode_to_vec(
        &snapshot,
        bincode::config::standard(),
    )?)
}

/// Restores a [`Grid`] from snapshot bytes.
///
/// The restored grid goes through the same checks as a freshly parsed one.
///
/// ```
/// use maze_solver::grid::Grid;
/// use maze_solver::snapshot::{decode, encode};
/// use maze_solver::standard_mazes::MAZE_SMALL;
///
/// let grid: Grid = MAZE_SMALL.parse().unwrap();
/// assert_eq!(decode(&encode(&grid).unwrap()).unwrap(), grid);
/// ```
pub fn decode(bytes: &[u8]) -> Result<Grid, SnapshotError> {
    let (raw, _): (RawSnapshot, usize) =
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    if raw.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::Version { found: raw.version });
    }
    Ok(Grid::parse(raw.rows)?)
}

/// Writes a snapshot of `grid` to `path`
pub fn save(grid: &Grid, path: impl AsRef<std::path::Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    std::fs::write(path, encode(grid)?)?;
    info!("Saved maze snapshot to {}", path.display());
    Ok(())
}

/// Reads a snapshot written by [`save`]
pub fn load(path: impl AsRef<std::path::Path>) -> Result<Grid, SnapshotError> {
    let path = path.as_ref();
    let grid = decode(&std::fs::read(path)?)?;
    info!("Loaded maze snapshot from {}", path.display());
    Ok(grid)
}
