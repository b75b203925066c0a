//! Instance files: JSON descriptions of a start and goal in one world.
//!
//! ```json
//! {"kind": "npuzzle", "initial": [1, 0, 2, 3], "goal": [0, 1, 2, 3]}
//! {"kind": "maze", "grid": [[1, 1], [0, 1]], "start": [0, 0], "goal": [1, 1]}
//! {"kind": "terrain", "grid": [[1, 5], [2, 1]], "start": [0, 0], "goal": [1, 1]}
//! ```
//!
//! Parsing validates everything a world constructor validates; a loaded
//! [`WorldInstance`] is ready to search.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contract::WorldError;
use crate::worlds::navigation::{Grid, NavigationKind, Navigator};
use crate::worlds::npuzzle::NPuzzle;

/// On-disk form of an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstanceSpec {
    #[serde(rename = "npuzzle")]
    NPuzzle { initial: Vec<u16>, goal: Vec<u16> },
    Maze {
        grid: Vec<Vec<u32>>,
        start: [usize; 2],
        goal: [usize; 2],
    },
    Terrain {
        grid: Vec<Vec<u32>>,
        start: [usize; 2],
        goal: [usize; 2],
    },
}

/// A validated start/goal pair.
#[derive(Debug, Clone)]
pub enum WorldInstance {
    NPuzzle { initial: NPuzzle, goal: NPuzzle },
    Navigation { initial: Navigator, goal: Navigator },
}

impl WorldInstance {
    /// Build the worlds an [`InstanceSpec`] describes.
    ///
    /// # Errors
    ///
    /// Returns the [`WorldError`] of the first constructor that rejects its
    /// input, or [`WorldError::BoardSizeMismatch`] if the two puzzle boards
    /// differ in size.
    pub fn from_spec(spec: InstanceSpec) -> Result<Self, WorldError> {
        match spec {
            InstanceSpec::NPuzzle { initial, goal } => {
                let initial = NPuzzle::new(initial)?;
                let goal = NPuzzle::new(goal)?;
                initial.check_same_size(&goal)?;
                Ok(Self::NPuzzle { initial, goal })
            }
            InstanceSpec::Maze { grid, start, goal } => {
                Self::navigation(grid, NavigationKind::Maze, start, goal)
            }
            InstanceSpec::Terrain { grid, start, goal } => {
                Self::navigation(grid, NavigationKind::Terrain, start, goal)
            }
        }
    }

    fn navigation(
        cells: Vec<Vec<u32>>,
        kind: NavigationKind,
        start: [usize; 2],
        goal: [usize; 2],
    ) -> Result<Self, WorldError> {
        let grid = Grid::new(cells)?;
        Ok(Self::Navigation {
            initial: Navigator::new(&grid, kind, start[0], start[1])?,
            goal: Navigator::new(&grid, kind, goal[0], goal[1])?,
        })
    }

    /// World identifier: `"npuzzle"`, `"maze"` or `"terrain"`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NPuzzle { .. } => "npuzzle",
            Self::Navigation { initial, .. } => initial.kind().as_str(),
        }
    }
}

/// Error loading an instance file.
#[derive(Debug)]
pub enum InstanceError {
    /// The file could not be read.
    Io { path: String, detail: String },
    /// The content is not a valid instance document.
    Parse { detail: String },
    /// The document is well-formed but describes an invalid world.
    World(WorldError),
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read {path}: {detail}"),
            Self::Parse { detail } => write!(f, "instance parse error: {detail}"),
            Self::World(e) => write!(f, "invalid instance: {e}"),
        }
    }
}

impl std::error::Error for InstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::World(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WorldError> for InstanceError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

/// Parse and validate an instance document.
///
/// # Errors
///
/// Returns [`InstanceError::Parse`] on malformed JSON or an unknown kind,
/// [`InstanceError::World`] if the described world is invalid.
pub fn parse_instance(json: &str) -> Result<WorldInstance, InstanceError> {
    let spec: InstanceSpec = serde_json::from_str(json).map_err(|e| InstanceError::Parse {
        detail: e.to_string(),
    })?;
    Ok(WorldInstance::from_spec(spec)?)
}

/// Read, parse and validate an instance file.
///
/// # Errors
///
/// Returns [`InstanceError::Io`] if the file cannot be read, otherwise as
/// [`parse_instance`].
pub fn load_instance(path: &Path) -> Result<WorldInstance, InstanceError> {
    let json = std::fs::read_to_string(path).map_err(|e| InstanceError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    log::debug!("loaded instance file {}", path.display());
    parse_instance(&json)
}
