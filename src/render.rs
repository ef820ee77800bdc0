//! Drawing a solved [`Path`] onto the maze text

use crate::grid::{Grid, Position};
use crate::search::Path;

/// Marks the cells of a path that are neither the start nor the goal.
pub const PATH_MARKER: char = '*';

/// Returns the text of `grid` with every interior cell of `path` replaced by [`PATH_MARKER`].
///
/// The start and goal keep their own characters, and every row ends with a newline.
/// Path cells outside `grid` are ignored. `grid` itself is left untouched.
///
/// ```
/// use maze_solver::grid::Grid;
/// use maze_solver::render::render;
/// use maze_solver::search::Algorithm;
///
/// let grid: Grid = "#####\n#S  #\n# # #\n#  E#\n#####\n".parse().unwrap();
/// let path = Algorithm::BreadthFirst.solve(&grid).unwrap();
/// assert_eq!(render(&grid, &path), "#####\n#S**#\n# #*#\n#  E#\n#####\n");
/// ```
pub fn render(grid: &Grid, path: &Path) -> String {
    let mut lines: Vec<Vec<char>> = grid
        .lines()
        .into_iter()
        .map(|line| line.chars().collect())
        .collect();
    for p in path.interior() {
        if let Some(cell) = lines.get_mut(p.x).and_then(|line| line.get_mut(p.y)) {
            *cell = PATH_MARKER;
        }
    }

    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for line in lines {
        out.extend(line);
        out.push('\n');
    }
    out
}

/// Finds every [`PATH_MARKER`] in rendered maze text, in row-major order.
///
/// Comment lines are skipped and do not count as rows, the same as when parsing a maze.
pub fn marked_positions(text: &str) -> Vec<Position> {
    text.lines()
        .filter(|line| !line.is_empty() && !line.starts_with(crate::grid::COMMENT_MARKER))
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| c == PATH_MARKER)
                .map(move |(col, _)| Position::new(row, col))
        })
        .collect()
}
