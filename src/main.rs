use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use boggle_solver::boggle::batch::{self, BatchSummary, BoardReport};
use boggle_solver::boggle::config::BoggleConfig;
use boggle_solver::boggle::dice::{dice_board, random_board};
use boggle_solver::boggle::{dictionary, Board, BoggleError, Solver, WordPolicy};
use boggle_solver::logging;
use boggle_solver::utils::serialization;

#[macro_use]
extern crate text_io;

/// Boggle board solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Newline delimited word list
    #[arg(short, long, default_value = "words.txt")]
    dictionary: PathBuf,

    /// Board letters, row major (e.g. "catdlinemaropets")
    #[arg(short, long, conflicts_with_all = ["board_file", "random"])]
    board: Option<String>,

    /// Text file holding the board letters
    #[arg(long, conflicts_with = "random")]
    board_file: Option<PathBuf>,

    /// Generate and solve this many boards in parallel
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for generated boards
    #[arg(long)]
    seed: Option<u64>,

    /// Side of generated boards (overrides the config file)
    #[arg(short, long)]
    size: Option<usize>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Score words with the classic length table instead of one point each
    #[arg(long)]
    classic_scoring: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Also write the JSON results to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.debug);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), BoggleError> {
    let mut config = match &cli.config {
        Some(path) => BoggleConfig::from_file(path)?,
        None => BoggleConfig::default(),
    };
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    config.classic_scoring |= cli.classic_scoring;

    let policy = config.policy();
    let start = Instant::now();
    let trie = Arc::new(dictionary::load_trie(&cli.dictionary, &policy)?);
    log::info!("Dictionary ready in {:?}", start.elapsed());

    if let Some(n) = cli.random {
        return solve_random(&cli, &config, &policy, &trie, n);
    }

    let mut solver = Solver::with_trie(trie).with_scorer(config.scorer());
    if let Some(letters) = &cli.board {
        let board: Board = letters.to_lowercase().parse()?;
        return solve_one(&cli, &policy, &mut solver, &board);
    }
    if let Some(path) = &cli.board_file {
        let board = Board::from_file(path)?;
        return solve_one(&cli, &policy, &mut solver, &board);
    }

    loop {
        println!("Enter Board (empty to quit):");
        let line: String = match try_read!("{}\n") {
            Ok(l) => l,
            Err(_) => break,
        };
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            break;
        }
        match line.parse::<Board>() {
            Ok(board) => solve_one(&cli, &policy, &mut solver, &board)?,
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}

fn solve_one(cli: &Cli, policy: &WordPolicy, solver: &mut Solver, board: &Board) -> Result<(), BoggleError> {
    let start = Instant::now();
    let report = BoardReport::solve(solver, board, policy)?;
    log::debug!("Solved in {:?}", start.elapsed());

    if let Some(path) = &cli.report {
        serialization::save_to_disk(&report, path)?;
    }
    if cli.json {
        println!("{}", serialization::to_json_string(&report)?);
        return Ok(());
    }

    println!("{}", board);
    for w in report.words.iter() {
        println!("{}", w);
    }
    println!(
        "Words: {}  Score: {}",
        report.solution.word_count, report.solution.score
    );
    Ok(())
}

fn solve_random(
    cli: &Cli,
    config: &BoggleConfig,
    policy: &WordPolicy,
    trie: &Arc<boggle_solver::boggle::Trie>,
    n: usize,
) -> Result<(), BoggleError> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let boards = (0..n)
        .map(|_| {
            if config.use_dice {
                dice_board(config.board_size, &mut rng)
            } else {
                random_board(config.board_size, &mut rng)
            }
        })
        .collect::<Vec<_>>();

    let start = Instant::now();
    let reports = batch::solve_batch(trie, &boards, &config.scorer(), policy)?;
    let elapsed = start.elapsed();
    log::info!("Solved {} boards in {:?}", reports.len(), elapsed);

    let summary = BatchSummary::from_reports(&reports);
    if let Some(path) = &cli.report {
        serialization::save_to_disk(&(&summary, &reports), path)?;
    }
    if cli.json {
        println!("{}", serialization::to_json_string(&summary)?);
        return Ok(());
    }

    match summary {
        Some(s) => {
            println!("Boards: {}", s.boards);
            println!("Words: {} total, {:.2} per board", s.total_words, s.mean_words);
            println!("Score: {}", s.total_score);
            println!("Best board ({} words):", s.max_words);
            print!("{}", boards[s.best_board]);
        }
        None => println!("No boards solved"),
    }
    Ok(())
}
