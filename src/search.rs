//! Breadth-first and depth-first maze solving.
//!
//! Both searches share [`search`]; they differ only in the [`Frontier`] that decides which
//! discovered cell is expanded next. A cell is marked visited when it is discovered, and the
//! cell it was discovered from is remembered so the route can be walked back once a goal is
//! taken off the frontier.

use crate::grid::{Grid, Position};
use log::debug;
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// Cells waiting to be expanded during a search
pub trait Frontier: Default {
    /// Adds a newly discovered cell
    fn push(&mut self, p: Position);
    /// Removes the next cell to expand, or `None` once the frontier is exhausted
    fn pop(&mut self) -> Option<Position>;
}

/// First in, first out; gives breadth-first search
#[derive(Clone, Debug, Default)]
pub struct Queue(VecDeque<Position>);

impl Frontier for Queue {
    fn push(&mut self, p: Position) {
        self.0.push_back(p);
    }

    fn pop(&mut self) -> Option<Position> {
        self.0.pop_front()
    }
}

/// Last in, first out; gives depth-first search
#[derive(Clone, Debug, Default)]
pub struct Stack(Vec<Position>);

impl Frontier for Stack {
    fn push(&mut self, p: Position) {
        self.0.push(p);
    }

    fn pop(&mut self) -> Option<Position> {
        self.0.pop()
    }
}

/// The visited cells of one search, each with the cell it was first reached from
#[derive(Clone, Debug)]
pub struct Exploration {
    /// `None` only for the start
    prev: HashMap<Position, Option<Position>>,
}

impl Exploration {
    /// Starts an exploration with only `start` visited
    pub fn new(start: Position) -> Self {
        let mut prev = HashMap::new();
        prev.insert(start, None);
        Self { prev }
    }

    /// Marks `p` as reached from `from`.
    ///
    /// Returns `false`, and changes nothing, if `p` was already visited.
    pub fn visit(&mut self, p: Position, from: Position) -> bool {
        if self.prev.contains_key(&p) {
            return false;
        }
        self.prev.insert(p, Some(from));
        true
    }

    /// Whether `p` has been visited
    pub fn is_visited(&self, p: &Position) -> bool {
        self.prev.contains_key(p)
    }

    /// Number of visited cells, the start included
    pub fn visited_count(&self) -> usize {
        self.prev.len()
    }

    /// Walks the recorded predecessors back from `goal` to the start.
    ///
    /// A `goal` that was never visited gives a path holding only `goal`.
    pub fn path_to(&self, goal: Position) -> Path {
        let mut path = vec![goal];
        let mut next = goal;
        while let Some(Some(before_next)) = self.prev.get(&next) {
            path.push(*before_next);
            next = *before_next;
        }
        path.reverse();
        Path(path)
    }
}

/// A route from the start of a [`Grid`] to one of its goals, both included
///
/// Consecutive cells are 4-adjacent and no cell appears twice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Path(Vec<Position>);

impl Path {
    /// All cells of the path, start first
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Number of moves, one less than the number of cells
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    /// The start cell
    pub fn start(&self) -> Position {
        self.0[0]
    }

    /// The goal cell that was reached
    pub fn goal(&self) -> Position {
        self.0[self.0.len() - 1]
    }

    /// The cells between the start and the goal; empty for a path of one or two cells
    pub fn interior(&self) -> &[Position] {
        self.0
            .get(1..self.0.len().saturating_sub(1))
            .unwrap_or(&[])
    }
}

/// The outcome of one search: a [`Path`], or `None` if no goal can be reached from the start
pub type SearchResult = Option<Path>;

/// Explores `grid` from its start, expanding cells in the order given by `F`, until a goal is
/// taken off the frontier.
///
/// Neighbors are discovered in the fixed order of [`Grid::neighbors`], so results are
/// deterministic for a given grid and frontier.
pub fn search<F: Frontier>(grid: &Grid) -> SearchResult {
    let start = grid.start();
    let mut frontier = F::default();
    let mut exploration = Exploration::new(start);
    frontier.push(start);

    while let Some(current) = frontier.pop() {
        if grid.is_goal(&current) {
            let path = exploration.path_to(current);
            debug!(
                "reached goal ({}, {}) in {} steps after visiting {} cells",
                current.x,
                current.y,
                path.steps(),
                exploration.visited_count()
            );
            return Some(path);
        }
        for neighbor in grid.neighbors(&current) {
            if exploration.visit(neighbor, current) {
                frontier.push(neighbor);
            }
        }
    }

    debug!(
        "no goal reachable after visiting {} cells",
        exploration.visited_count()
    );
    None
}

/// The available search strategies
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Always finds a path with the fewest steps; the nearest goal wins
    BreadthFirst,
    /// Follows one branch as deep as it goes before backtracking.
    ///
    /// The path found is whichever one this order reaches first, and is often longer than
    /// necessary.
    DepthFirst,
}

impl Algorithm {
    /// Get a list of all algorithms
    pub fn get_all() -> [Self; 2] {
        [Self::BreadthFirst, Self::DepthFirst]
    }

    /// Short lowercase name, as used on the command line and in output file names
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Searches `grid` with this algorithm
    ///
    /// ```
    /// use maze_solver::grid::Grid;
    /// use maze_solver::search::Algorithm;
    /// use maze_solver::standard_mazes::MAZE_SMALL;
    ///
    /// let grid: Grid = MAZE_SMALL.parse().unwrap();
    /// let path = Algorithm::BreadthFirst.solve(&grid).unwrap();
    /// assert_eq!(path.steps(), 4);
    /// ```
    pub fn solve(self, grid: &Grid) -> SearchResult {
        debug!("solving with {}", self.name());
        match self {
            Self::BreadthFirst => search::<Queue>(grid),
            Self::DepthFirst => search::<Stack>(grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BreadthFirst => write!(f, "breadth-first"),
            Self::DepthFirst => write!(f, "depth-first"),
        }
    }
}

/// Runs breadth-first and depth-first search on the same grid, in parallel.
///
/// Returns `(breadth_first, depth_first)`. The two runs share nothing but the read-only grid.
pub fn solve_both(grid: &Grid) -> (SearchResult, SearchResult) {
    rayon::join(
        || Algorithm::BreadthFirst.solve(grid),
        || Algorithm::DepthFirst.solve(grid),
    )
}
