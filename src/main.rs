use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use maze_solver::grid::Grid;
use maze_solver::render::render;
use maze_solver::search::{solve_both, Algorithm, SearchResult};
use maze_solver::snapshot::{self, SNAPSHOT_EXTENSION};
use maze_solver::standard_mazes::StandardMaze;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Extension of plain text maze files
const TEXT_EXTENSION: &str = "txt";

/// Exit status when at least one requested search found no path
const EXIT_NO_PATH: u8 = 2;

/// Which searches to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AlgorithmChoice {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Both, each written to its own file
    Both,
}

/// Solves a text maze with breadth-first and/or depth-first search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze to solve: a .txt maze or a .bin snapshot
    #[arg(
        short,
        long,
        required_unless_present = "builtin",
        conflicts_with = "builtin"
    )]
    maze_file: Option<PathBuf>,

    /// Solve one of the built-in mazes instead of a file
    #[arg(short, long, value_enum)]
    builtin: Option<StandardMaze>,

    /// The algorithm used for solving the maze
    #[arg(short, long, value_enum)]
    algorithm: AlgorithmChoice,

    /// Output filename prefix; solutions go to <OUTPUT>_bfs.txt and <OUTPUT>_dfs.txt
    #[arg(short, long)]
    output: String,

    /// Also save the parsed maze to <OUTPUT>.bin
    #[arg(short, long)]
    save_snapshot: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_NO_PATH),
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every requested search found a path
fn run(args: &Args) -> anyhow::Result<bool> {
    let grid = match (&args.maze_file, args.builtin) {
        (Some(path), _) => load_maze(path)?,
        (None, Some(maze)) => maze
            .grid()
            .with_context(|| format!("Built-in maze {maze:?} is invalid"))?,
        (None, None) => bail!("No maze given"),
    };
    info!(
        "Maze is {}x{} with {} end(s)",
        grid.rows(),
        grid.cols(),
        grid.goals().len()
    );

    let results: Vec<(Algorithm, SearchResult)> = match args.algorithm {
        AlgorithmChoice::Bfs => vec![(
            Algorithm::BreadthFirst,
            Algorithm::BreadthFirst.solve(&grid),
        )],
        AlgorithmChoice::Dfs => vec![(
            Algorithm::DepthFirst,
            Algorithm::DepthFirst.solve(&grid),
        )],
        AlgorithmChoice::Both => {
            let (bfs, dfs) = solve_both(&grid);
            vec![(Algorithm::BreadthFirst, bfs), (Algorithm::DepthFirst, dfs)]
        }
    };

    let mut all_solved = true;
    for (algorithm, result) in results {
        let Some(path) = result else {
            warn!("{algorithm} search did not find any solution for the maze");
            all_solved = false;
            continue;
        };
        let out_path = format!("{}_{}.{TEXT_EXTENSION}", args.output, algorithm.name());
        std::fs::write(&out_path, render(&grid, &path))
            .with_context(|| format!("Failed to write solution to {out_path}"))?;
        info!(
            "{algorithm} search found a path of {} steps, written to {out_path}",
            path.steps()
        );
    }

    if args.save_snapshot {
        let out_path = format!("{}.{SNAPSHOT_EXTENSION}", args.output);
        snapshot::save(&grid, &out_path)
            .with_context(|| format!("Failed to save snapshot to {out_path}"))?;
    }

    Ok(all_solved)
}

/// Reads a maze from a text file or a snapshot, depending on the extension
fn load_maze(path: &Path) -> anyhow::Result<Grid> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(TEXT_EXTENSION) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read maze file {}", path.display()))?;
            text.parse::<Grid>()
                .with_context(|| format!("Failed to parse maze file {}", path.display()))
        }
        Some(SNAPSHOT_EXTENSION) => snapshot::load(path)
            .with_context(|| format!("Failed to load snapshot {}", path.display())),
        other => bail!("Unknown file extension for maze: {:?}", other.unwrap_or("")),
    }
}
