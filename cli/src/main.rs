use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use gridsweep_core::{Board, CellState, GameConfig, RandomLayoutGenerator};

use crate::command::parse_coords;
use crate::render::render_board;

mod command;
mod render;

/// Text-mode Minesweeper. Pick cells by column letter and row number; clear
/// every safe cell without hitting a mine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells (columns A and up)
    #[arg(long, default_value_t = 10)]
    width: u8,

    /// Board height in cells
    #[arg(long, default_value_t = 5)]
    height: u8,

    /// Number of mines to place
    #[arg(long, default_value_t = 3)]
    mines: u16,

    /// Seed for mine placement; derived from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Verdict {
    Won,
    Lost,
    Quit,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    anyhow::ensure!(cli.width <= 26, "width is limited to 26 columns (A-Z)");
    let config =
        GameConfig::new((cli.width, cli.height), cli.mines).context("invalid board parameters")?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {seed}");
    let mut board = Board::new(config, RandomLayoutGenerator::new(seed))?;

    let verdict = play(&mut board)?;
    if verdict == Verdict::Quit {
        return Ok(());
    }

    // Sweep the rest of the board so the final drawing shows everything.
    for x in 0..board.width() {
        for y in 0..board.height() {
            board.reveal((x, y))?;
        }
    }
    print!("{}", render_board(&board));

    match verdict {
        Verdict::Won => println!("You win!"),
        Verdict::Lost => println!("You hit a mine! Game over."),
        Verdict::Quit => unreachable!(),
    }
    Ok(())
}

/// Read-reveal-redraw loop. Runs until the player wins, loses, or closes
/// stdin.
fn play(board: &mut Board) -> anyhow::Result<Verdict> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", render_board(board));
        print!("Enter guess (e.g. A2): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(Verdict::Quit);
        };
        let line = line.context("reading a guess")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let Some(coords) = parse_coords(input, board.size()) else {
            println!("** Invalid coordinate - try again **  {input}");
            continue;
        };

        let state = board.reveal(coords)?;
        if state == CellState::Revealed(0) {
            board.flood_reveal(coords)?;
        }

        if state == CellState::RevealedMine {
            return Ok(Verdict::Lost);
        }
        if board.unknown_count() == board.mine_count() {
            return Ok(Verdict::Won);
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
