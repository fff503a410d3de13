//! Spellcast Solver - CLI
//!
//! Finds the highest scoring words on a letter board, with optional letter
//! swaps, in a TUI browser or as a ranked console listing.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use spellcast_solver::{
    boards::{board_rng, load_board, parse_board, random_board},
    commands::{SolveConfig, run_benchmark, run_enter, solve_board},
    core::{Board, DEFAULT_BOARD_SIZE, Word},
    output::{print_benchmark_result, print_solve_report},
    search::{DEFAULT_BATCH_SIZE, DEFAULT_SWAP_BUDGET},
    wordlists::{DEFAULT_MIN_WORD_LENGTH, embedded_words, loader::load_from_file},
};

/// Paths listed by default
const DEFAULT_LIMIT: usize = 100;

#[derive(Parser)]
#[command(
    name = "spellcast_solver",
    about = "Finds the best scoring words on a Spellcast letter board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letter swaps allowed per word
    #[arg(short = 's', long, global = true, default_value_t = DEFAULT_SWAP_BUDGET)]
    swaps: usize,

    /// Shortest word to search for
    #[arg(
        short = 'm',
        long = "min-length",
        global = true,
        default_value_t = DEFAULT_MIN_WORD_LENGTH
    )]
    min_length: usize,
}

/// Where the board comes from: a file, an inline grid, or a random deal
#[derive(Args, Default)]
struct BoardArgs {
    /// Board file (rows of cells, e.g. `a bx2 c+`)
    #[arg(short = 'b', long, conflicts_with = "letters")]
    board: Option<String>,

    /// Inline board, rows separated by '/', e.g. "tesla/ranch/ideal/onset/maple"
    #[arg(short = 'l', long)]
    letters: Option<String>,

    /// Seed for random boards
    #[arg(long)]
    seed: Option<u64>,

    /// Edge length of random boards
    #[arg(long)]
    size: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI board browser (default)
    Play {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Solve a board and print the ranked words
    Solve {
        #[command(flatten)]
        board: BoardArgs,

        /// Search on one thread
        #[arg(long)]
        sequential: bool,

        /// Words per parallel batch
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// Number of paths to print
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Type in a board cell by cell, then solve it
    Enter {
        /// Edge length of the board
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// Number of paths to print
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Compare sequential and parallel search on random boards
    Benchmark {
        /// Number of random boards
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Edge length of the boards
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// Seed for the board deals
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the word list based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(embedded_words()),
        path => Ok(load_from_file(path)?),
    }
}

/// Build the board described by the board flags
fn resolve_board(args: &BoardArgs, rng: &mut rand::rngs::StdRng) -> Result<Board> {
    if let Some(path) = &args.board {
        return load_board(path);
    }
    if let Some(letters) = &args.letters {
        return parse_board(letters).map_err(|e| anyhow::anyhow!("invalid board: {e}"));
    }
    Ok(random_board(args.size.unwrap_or(DEFAULT_BOARD_SIZE), rng))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;
    let config = SolveConfig {
        swap_budget: cli.swaps,
        min_word_len: cli.min_length,
        ..SolveConfig::default()
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        board: BoardArgs::default(),
    });

    match command {
        Commands::Play { board } => run_play_command(&board, &words, config),
        Commands::Solve {
            board,
            sequential,
            batch_size,
            limit,
        } => {
            let config = SolveConfig {
                parallel: !sequential,
                batch_size,
                show_progress: true,
                ..config
            };
            run_solve_command(&board, &words, &config, limit)
        }
        Commands::Enter { size, limit } => {
            run_enter(size, &words, &config, limit).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Benchmark { count, size, seed } => {
            println!("Running benchmark on {count} random {size}x{size} boards...");
            let result = run_benchmark(&words, count, size, seed, &config)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_solve_command(
    args: &BoardArgs,
    words: &[Word],
    config: &SolveConfig,
    limit: usize,
) -> Result<()> {
    let mut rng = board_rng(args.seed);
    let board = resolve_board(args, &mut rng)?;

    let report = solve_board(&board, words, config)?;
    print_solve_report(&board, &report, limit);
    Ok(())
}

fn run_play_command(args: &BoardArgs, words: &[Word], config: SolveConfig) -> Result<()> {
    use spellcast_solver::interactive::{App, run_tui};

    let mut rng = board_rng(args.seed);
    let board = resolve_board(args, &mut rng)?;

    let app = App::new(board, words, config, rng);
    run_tui(app)
}
