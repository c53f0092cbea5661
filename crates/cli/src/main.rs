use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use checkers_core::{parse_placements, pos_to_coord, Board, Move, Side};
use minimax_engine::{search_with_observer, SearchObserver};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod render;

/// Fixed search depth, matching the reference prediction flow.
const SEARCH_DEPTH: u8 = 3;

/// Logs the search's progress; enable with RUST_LOG=debug.
struct TraceObserver;

impl SearchObserver for TraceObserver {
    fn move_considered(&mut self, _board: &Board, mv: Move, depth: u8) {
        debug!(
            depth,
            from = %pos_to_coord(mv.from),
            to = %pos_to_coord(mv.to),
            "considering move"
        );
    }

    fn move_applied(&mut self, _board: &Board, mv: Move) {
        debug!(
            from = %pos_to_coord(mv.from),
            to = %pos_to_coord(mv.to),
            "applied move"
        );
    }

    fn cutoff(&mut self, depth: u8, alpha: i32, beta: i32) {
        debug!(depth, alpha, beta, "pruned remaining moves");
    }
}

fn prompt(stdout: &mut impl Write, text: &str) -> Result<()> {
    write!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    let side = loop {
        prompt(&mut stdout, "Choose your side ('o' or 'x'): ")?;
        let line = match lines.next() {
            Some(line) => line?,
            None => bail!("stdin closed before a side was chosen"),
        };
        match line.trim().to_lowercase().as_str() {
            "o" => break Side::One,
            "x" => break Side::Two,
            _ => writeln!(stdout, "Invalid input. Please enter 'o' or 'x'.")?,
        }
    };

    prompt(&mut stdout, "Enter the filename for the board state: ")?;
    let filename = match lines.next() {
        Some(line) => line?.trim().to_string(),
        None => bail!("stdin closed before a filename was given"),
    };

    let text = std::fs::read_to_string(&filename)
        .with_context(|| format!("reading board file '{}'", filename))?;
    let board = parse_placements(&text)
        .with_context(|| format!("parsing board file '{}'", filename))?;

    writeln!(stdout, "{}", render::format_board(&board, None))?;

    let player = match side {
        Side::One => "1",
        Side::Two => "2",
    };
    writeln!(stdout, "Predicting best move for player {}...", player)?;

    let mut nodes = 0;
    let (score, best) =
        search_with_observer(&board, SEARCH_DEPTH, side, &mut nodes, &mut TraceObserver)?;
    debug!(nodes, score, "search finished");

    match best {
        Some(mv) => {
            let glyph = match side {
                Side::One => 'o',
                Side::Two => 'x',
            };
            writeln!(
                stdout,
                "Predicted move for '{}' is from {} to {}.",
                glyph,
                pos_to_coord(mv.from),
                pos_to_coord(mv.to)
            )?;
            writeln!(stdout, "{}", render::format_board(&board, Some(mv)))?;
        }
        None => writeln!(stdout, "No valid moves available.")?,
    }

    Ok(())
}
