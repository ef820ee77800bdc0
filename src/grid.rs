//! Logical maze grid structs and utilities.

use log::trace;
use nalgebra::Point2;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A location on a [`Grid`].
///
/// `x` is the zero-based row and `y` is the zero-based column, so the cell is `grid[x][y]`.
pub type Position = Point2<usize>;

/// Lines starting with this marker are ignored by the parser.
pub const COMMENT_MARKER: &str = "//";

/// Enum for [`Grid`] cell values.
///
/// Each discriminant is the ASCII byte of the character that represents the cell in a maze file.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum CellType {
    /// `' '`
    Open = 0x20,
    /// `'#'`
    Wall = 0x23,
    /// `'S'`
    Start = 0x53,
    /// `'E'`
    Goal = 0x45,
}

impl CellType {
    /// Returns whether this [`CellType`] can be stepped on.
    pub fn walkable(self) -> bool {
        self != CellType::Wall
    }

    /// The character used for this cell in maze text.
    ///
    /// ```
    /// use maze_solver::grid::CellType;
    ///
    /// assert_eq!(CellType::Wall.as_char(), '#');
    /// assert_eq!(CellType::Goal.as_char(), 'E');
    /// ```
    pub fn as_char(self) -> char {
        char::from(u8::from(self))
    }
}

impl TryFrom<char> for CellType {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if !c.is_ascii() {
            return Err(c);
        }
        CellType::try_from_primitive(c as u8).map_err(|_| c)
    }
}

/// Reasons a maze text cannot become a [`Grid`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// A character other than `#`, `' '`, `S` or `E` was found
    #[error("Invalid character found in the maze: {character:?} at ({}, {})", .position.x, .position.y)]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Where it was found
        position: Position,
    },
    /// A second start cell was found
    #[error(
        "A second start character found in the maze at ({}, {}), the first is at ({}, {}); only one start is allowed",
        .second.x, .second.y, .first.x, .first.y
    )]
    MultipleStart {
        /// The start cell found first
        first: Position,
        /// The start cell that caused the error
        second: Position,
    },
    /// The maze has no start cell
    #[error("No start character found in the maze")]
    NoStart,
    /// The maze has no goal cell
    #[error("No end character found in the maze")]
    NoGoal,
}

/// A rectangular 2D maze of [`CellType`]s with exactly one start and at least one goal.
///
/// Rows shorter than the longest row are padded with walls. A [`Grid`] never changes after
/// it is created; it serializes as its textual rows and is validated again when deserialized.
///
/// # Examples
///
/// ```
/// use maze_solver::grid::{CellType, Grid, Position};
///
/// let grid: Grid = "#####\n#S E#\n#####\n".parse().unwrap();
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.cols(), 5);
/// assert_eq!(grid.start(), Position::new(1, 1));
/// assert_eq!(grid.at(&Position::new(1, 3)), Some(CellType::Goal));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Grid {
    cells: Vec<Vec<CellType>>,
    cols: usize,

    start: Position,
    /// in row-major order
    goals: Vec<Position>,
}

impl Grid {
    /// Builds a [`Grid`] from maze lines.
    ///
    /// Comment lines (starting with `//`) and empty lines are skipped and do not count as rows.
    /// The first invalid character or second start cell aborts parsing.
    ///
    /// ```
    /// use maze_solver::grid::{Grid, ParseError};
    ///
    /// assert!(Grid::parse(["// comment", "#SE#"]).is_ok());
    /// assert_eq!(Grid::parse(["#S #"]), Err(ParseError::NoGoal));
    /// ```
    pub fn parse<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells: Vec<Vec<CellType>> = vec![];
        let mut start: Option<Position> = None;
        let mut goals = vec![];

        for line in lines {
            let line = line.as_ref();
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            let row = cells.len();
            let mut cell_row = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                let position = Position::new(row, col);
                let cell = CellType::try_from(c).map_err(|character| {
                    ParseError::InvalidCharacter {
                        character,
                        position,
                    }
                })?;
                match cell {
                    CellType::Start => {
                        if let Some(first) = start {
                            return Err(ParseError::MultipleStart {
                                first,
                                second: position,
                            });
                        }
                        start = Some(position);
                    }
                    CellType::Goal => goals.push(position),
                    _ => {}
                }
                cell_row.push(cell);
            }
            cells.push(cell_row);
        }

        let start = start.ok_or(ParseError::NoStart)?;
        if goals.is_empty() {
            return Err(ParseError::NoGoal);
        }

        // short rows continue as walls up to the longest row
        let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(cols, CellType::Wall);
        }

        trace!(
            "parsed {}x{} maze with {} goal(s)",
            cells.len(),
            cols,
            goals.len()
        );

        Ok(Self {
            cells,
            cols,
            start,
            goals,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, i.e. the length of the longest row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The single start cell.
    pub fn start(&self) -> Position {
        self.start
    }

    /// All goal cells, in row-major order.
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    /// Returns the [`CellType`] at the given position, or `None` if it is out of bounds.
    ///
    /// ```
    /// use maze_solver::grid::{CellType, Grid, Position};
    ///
    /// let grid: Grid = "#SE\n#".parse().unwrap();
    /// assert_eq!(grid.at(&Position::new(0, 0)), Some(CellType::Wall));
    /// // padding
    /// assert_eq!(grid.at(&Position::new(1, 2)), Some(CellType::Wall));
    /// assert_eq!(grid.at(&Position::new(2, 0)), None);
    /// ```
    pub fn at(&self, p: &Position) -> Option<CellType> {
        self.cells.get(p.x)?.get(p.y).copied()
    }

    /// Whether the given position is a goal cell.
    pub fn is_goal(&self, p: &Position) -> bool {
        self.at(p) == Some(CellType::Goal)
    }

    /// Returns the walkable neighbors of the given position.
    ///
    /// Neighbors are always listed up, right, down, left; out of bounds positions and walls are
    /// left out.
    ///
    /// ```
    /// use maze_solver::grid::{Grid, Position};
    ///
    /// let grid: Grid = "###\n S \n E \n".parse().unwrap();
    /// assert_eq!(
    ///     grid.neighbors(&Position::new(1, 1)),
    ///     vec![Position::new(1, 2), Position::new(2, 1), Position::new(1, 0)]
    /// );
    /// ```
    pub fn neighbors(&self, p: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let candidates = [
            p.x.checked_sub(1).map(|x| Position::new(x, p.y)),
            Some(Position::new(p.x, p.y + 1)),
            Some(Position::new(p.x + 1, p.y)),
            p.y.checked_sub(1).map(|y| Position::new(p.x, y)),
        ];
        for neighbor in candidates.into_iter().flatten() {
            if let Some(cell) = self.at(&neighbor) {
                if cell.walkable() {
                    neighbors.push(neighbor);
                }
            }
        }
        neighbors
    }

    /// The rows of the grid as text, padding included.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.as_char()).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s.lines())
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = ParseError;

    fn try_from(lines: Vec<String>) -> Result<Self, Self::Error> {
        Grid::parse(lines)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.lines()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_mazes::*;

    #[test]
    fn valid_standard_mazes() {
        for maze in StandardMaze::get_all() {
            assert!(maze.grid().is_ok(), "{maze:?} should parse");
        }
    }

    #[test]
    fn parse_small() {
        let grid: Grid = MAZE_SMALL.parse().unwrap();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.start(), Position::new(1, 1));
        assert_eq!(grid.goals(), &[Position::new(3, 3)]);
        assert_eq!(grid.at(&Position::new(2, 2)), Some(CellType::Wall));
        assert_eq!(grid.at(&Position::new(1, 2)), Some(CellType::Open));
    }

    #[test]
    fn parse_is_idempotent() {
        for maze in StandardMaze::get_all() {
            assert_eq!(maze.grid(), maze.grid());
        }
    }

    #[test]
    fn comment_lines_are_ignored() {
        let with_comment = format!("// this is ignored\n{MAZE_SMALL}");
        let with_comment: Grid = with_comment.parse().unwrap();
        let without: Grid = MAZE_SMALL.parse().unwrap();
        assert_eq!(with_comment, without);
        assert_eq!(with_comment.rows(), 5);
        assert_eq!(with_comment.cols(), 5);
    }

    #[test]
    fn long_comment_does_not_widen_grid() {
        let grid = Grid::parse(["// a comment much longer than the maze", "#SE#"]).unwrap();
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 1);
    }

    #[test]
    fn crlf_line_endings() {
        let grid: Grid = "####\r\n#SE#\r\n####\r\n".parse().unwrap();
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.at(&Position::new(1, 3)), Some(CellType::Wall));
    }

    #[test]
    fn short_rows_are_padded_with_walls() {
        let grid: Grid = MAZE_RAGGED.parse().unwrap();
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.at(&Position::new(1, 2)), Some(CellType::Wall));
        assert_eq!(grid.at(&Position::new(1, 5)), Some(CellType::Wall));
        assert_eq!(grid.at(&Position::new(1, 6)), None);
        assert_eq!(
            grid.to_string(),
            "######\n#S####\n# ####\n#   E#\n######\n"
        );
    }

    #[test]
    fn multiple_starts() {
        let v = Grid::parse(["#S#", "#S#", "#E#"]);
        assert_eq!(
            v,
            Err(ParseError::MultipleStart {
                first: Position::new(0, 1),
                second: Position::new(1, 1),
            })
        );
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "A second start character found in the maze at (1, 1), the first is at (0, 1); only one start is allowed"
        );
    }

    #[test]
    fn no_start() {
        let v = Grid::parse(["#  E#"]);
        assert_eq!(v, Err(ParseError::NoStart));
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "No start character found in the maze"
        );
    }

    #[test]
    fn empty_text_has_no_start() {
        assert_eq!("".parse::<Grid>(), Err(ParseError::NoStart));
        assert_eq!("// only a comment\n".parse::<Grid>(), Err(ParseError::NoStart));
    }

    #[test]
    fn no_goal() {
        let v = Grid::parse(["#####", "#S  #", "#####"]);
        assert_eq!(v, Err(ParseError::NoGoal));
    }

    #[test]
    fn no_start_is_reported_before_no_goal() {
        assert_eq!(Grid::parse(["#  #"]), Err(ParseError::NoStart));
    }

    #[test]
    fn invalid_character() {
        let v = Grid::parse(["// comment rows are not counted", "#####", "#S.E#"]);
        assert_eq!(
            v,
            Err(ParseError::InvalidCharacter {
                character: '.',
                position: Position::new(1, 2),
            })
        );
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Invalid character found in the maze: '.' at (1, 2)"
        );
    }

    #[test]
    fn invalid_non_ascii_character() {
        // U+0153 has 0x53 ('S') as its low byte
        assert_eq!(
            Grid::parse(["#S\u{153}E#"]),
            Err(ParseError::InvalidCharacter {
                character: '\u{153}',
                position: Position::new(0, 2),
            })
        );
        assert_eq!(CellType::try_from('\u{153}'), Err('\u{153}'));
    }

    #[test]
    fn invalid_character_reported_before_second_start() {
        assert!(matches!(
            Grid::parse(["S*S"]),
            Err(ParseError::InvalidCharacter { character: '*', .. })
        ));
    }

    #[test]
    fn cell_type_chars() {
        for c in ['#', ' ', 'S', 'E'] {
            assert_eq!(CellType::try_from(c).map(CellType::as_char), Ok(c));
        }
        assert_eq!(CellType::try_from('*'), Err('*'));
    }

    #[test]
    fn grid_at_oob() {
        let grid: Grid = MAZE_SMALL.parse().unwrap();
        assert_eq!(grid.at(&Position::new(0, 5)), None);
        assert_eq!(grid.at(&Position::new(5, 0)), None);
    }

    #[test]
    fn neighbors_order_and_walls() {
        let grid: Grid = MAZE_SMALL.parse().unwrap();
        assert_eq!(
            grid.neighbors(&Position::new(1, 1)),
            vec![Position::new(1, 2), Position::new(2, 1)]
        );
        assert_eq!(
            grid.neighbors(&Position::new(3, 2)),
            vec![Position::new(3, 3), Position::new(3, 1)]
        );
        assert!(grid.neighbors(&Position::new(0, 0)).is_empty());
    }

    #[test]
    fn neighbors_at_edges() {
        let grid = Grid::parse(["S ", " E"]).unwrap();
        assert_eq!(
            grid.neighbors(&Position::new(0, 0)),
            vec![Position::new(0, 1), Position::new(1, 0)]
        );
        assert_eq!(
            grid.neighbors(&Position::new(1, 1)),
            vec![Position::new(0, 1), Position::new(1, 0)]
        );
    }

    #[test]
    fn display_round_trips() {
        let grid: Grid = MAZE_LABYRINTH.parse().unwrap();
        let again: Grid = grid.to_string().parse().unwrap();
        assert_eq!(grid, again);
    }

    #[test]
    fn goals_in_row_major_order() {
        let grid: Grid = MAZE_FORK.parse().unwrap();
        assert_eq!(grid.goals(), &[Position::new(1, 7), Position::new(3, 7)]);
    }
}
