use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use squaredle::errors::{PuzzleError, WordListError};
use squaredle::grid::Grid;
use squaredle::letters;
use squaredle::report::{self, ReportOptions};
use squaredle::solver::Solver;
use squaredle::word_list::WordList;

/// Squaredle puzzle solver
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The puzzle letters, row by row, top to bottom ('_' for gap cells).
    /// Required unless --square is given.
    letters: Option<String>,

    /// Path to the word list file (one word per line)
    #[arg(short, long, default_value = "./word_list.txt")]
    word_list: String,

    /// Sort solutions alphabetically
    #[arg(short, long)]
    sort: bool,

    /// Group solutions by word length
    #[arg(short, long)]
    length: bool,

    /// Display results as a single column
    #[arg(short = 'c', long)]
    single_column: bool,

    /// Don't display headers for length-grouped solutions
    #[arg(short = 'N', long)]
    no_headers: bool,

    /// Display the letter grid before solving
    #[arg(short, long)]
    grid: bool,

    /// Display the cell neighbour list, for debugging
    #[arg(short, long)]
    neighbours: bool,

    /// Randomise the letter order, for setting puzzles. Shows the grid
    #[arg(short, long)]
    random: bool,

    /// Generate a random SIDE x SIDE puzzle instead of taking letters
    #[arg(short = 'x', long, value_name = "SIDE")]
    square: Option<usize>,

    /// Pad non-square input with random letters up to the next square
    /// board. Shows the grid
    #[arg(short = 't', long)]
    auto_extend: bool,

    /// Log every search step as it happens
    #[arg(short = 'z', long)]
    slow_mode: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("SQUAREDLE_DEBUG").is_ok();
    squaredle::log::init_logger(debug_enabled);

    if let Err(e) = try_main(&cli) {
        // Prefer the detailed form (code + help) for our own error types
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else if let Some(list_err) = e.downcast_ref::<WordListError>() {
            eprintln!("Error: {}", list_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Establish the puzzle letters (given, shuffled, generated or padded).
/// 2. Build the grid, printing it and/or its neighbour list on request.
/// 3. Load the word list from disk.
/// 4. Solve and print the formatted solutions on stdout.
/// 5. Print diagnostics (counts, timings) on stderr.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let letters = resolve_letters(cli)?;

    let grid = Grid::new(&letters)?;

    // Setting modes always show the board; otherwise only on request.
    if cli.grid || cli.random || cli.auto_extend || cli.square.is_some() {
        print!("{}", grid.text());
    }

    if cli.neighbours {
        println!("{}", grid.neighbour_text());
    }

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let mut solver = Solver::new(grid, &word_list.words);
    if cli.slow_mode {
        solver = solver.with_progress(Box::new(|word, path, hits| {
            log::info!("trying {word} ({} cells, {hits} prefix hits so far)", path.len());
        }));
    }

    let t_solve = Instant::now();
    solver.solve();
    let solve_secs = t_solve.elapsed().as_secs_f64();

    let options = ReportOptions {
        sort: cli.sort,
        group_by_length: cli.length,
        headers: !cli.no_headers,
        single_column: cli.single_column,
    };
    let formatted = report::format_words(&solver.words()?, &options);
    if !formatted.is_empty() {
        println!("{formatted}");
    }

    eprintln!(
        "Loaded {} words in {load_secs:.3}s ({} usable, {} lines skipped); found {} words / {} paths in {solve_secs:.3}s.",
        word_list.words.len(),
        solver.word_list_count(),
        word_list.skipped,
        solver.word_count()?,
        solver.path_count()?,
    );

    Ok(())
}

/// Establish the board letters from the command line: taken as given,
/// generated from scratch, shuffled, and/or padded out to a square board.
fn resolve_letters(cli: &Cli) -> Result<String, String> {
    let mut letters = match (&cli.square, &cli.letters) {
        (Some(side), _) => letters::random_letters(side * side),
        (None, Some(letters)) => letters.clone(),
        (None, None) => {
            return Err("the letters argument is required unless --square is given".to_string())
        }
    };

    if cli.random {
        letters = letters::shuffle(&letters);
    }

    if cli.auto_extend {
        letters = letters::pad_to_square(&letters);
    }

    Ok(letters)
}
