//! A set of pre-made mazes

use crate::grid::{Grid, ParseError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The built-in mazes, selectable from the command line with `--builtin`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum StandardMaze {
    /// [`MAZE_SMALL`]
    #[default]
    Small,
    /// [`MAZE_FORK`]
    Fork,
    /// [`MAZE_LABYRINTH`]
    Labyrinth,
    /// [`MAZE_RAGGED`]
    Ragged,
    /// [`MAZE_ENCLOSED`]
    Enclosed,
}

impl StandardMaze {
    /// Get a list of all available mazes
    pub fn get_all() -> [Self; 5] {
        [
            Self::Small,
            Self::Fork,
            Self::Labyrinth,
            Self::Ragged,
            Self::Enclosed,
        ]
    }

    /// Get the maze text associated with this enum
    pub fn text(&self) -> &'static str {
        match self {
            Self::Small => MAZE_SMALL,
            Self::Fork => MAZE_FORK,
            Self::Labyrinth => MAZE_LABYRINTH,
            Self::Ragged => MAZE_RAGGED,
            Self::Enclosed => MAZE_ENCLOSED,
        }
    }

    /// Parse the maze text into a [`Grid`]
    pub fn grid(&self) -> Result<Grid, ParseError> {
        self.text().parse()
    }
}

/// Four steps from start to end by the shortest route
///
/// ```
/// use maze_solver::grid::Grid;
/// use maze_solver::standard_mazes::MAZE_SMALL;
///
/// let grid: Grid = MAZE_SMALL.parse().unwrap();
/// ```
pub const MAZE_SMALL: &str = "\
#####
#S  #
# # #
#  E#
#####
";

/// Two ends: one three steps to the right of the start, one eleven steps away around the left
///
/// Depth-first search explores the left branch first and finds the far end.
pub const MAZE_FORK: &str = "\
// two exits, very different distances
#########
#   S  E#
# #######
#      E#
#########
";

/// A larger maze with dead ends and a single exit in the bottom right
pub const MAZE_LABYRINTH: &str = "\
###########
#S    #   #
# ### # # #
# #   # # #
# # ### # #
#   #   # #
### # ### #
#   #     #
# ##### # #
#       #E#
###########
";

/// Rows of different lengths; the missing cells are walls
pub const MAZE_RAGGED: &str = "\
// ragged rows are padded with walls
#####
#S
# ###
#   E#
######
";

/// The start is boxed in by walls, so no search can reach the end
pub const MAZE_ENCLOSED: &str = "\
#####
#S# #
### #
#  E#
#####
";
