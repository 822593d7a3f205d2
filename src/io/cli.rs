//! Command-line front end for inspecting boards, pieces, and statistics

use crate::board::grid::{Cell, Coord};
use crate::board::placement::Board;
use crate::dice::calendar;
use crate::game::session::GameSession;
use crate::io::configuration::BOARD_SIZE;
use crate::io::error::{GameError, Result};
use crate::pieces::catalog::{self, GamePiece, PieceKind};
use crate::pieces::shape::Shape;
use crate::stats::recorder::StatsRecorder;
use crate::stats::share::format_duration;
use crate::stats::store::FileBackend;
use clap::Parser;

#[derive(Parser)]
#[command(name = "daysquare")]
#[command(
    author,
    version,
    about = "Daily polyomino puzzle boards in the terminal"
)]
/// Command-line arguments for the puzzle inspector
pub struct Cli {
    /// Show the daily board for a date (YYYY-MM-DD) instead of today
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Roll a random board instead of the daily one
    #[arg(short, long)]
    pub random: bool,

    /// Seed for a reproducible random board (implies --random)
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Show a piece and its rotation forms instead of a board
    #[arg(short, long, value_name = "NAME")]
    pub piece: Option<String>,

    /// Show recorded statistics
    #[arg(long)]
    pub stats: bool,

    /// Delete all recorded statistics
    #[arg(long)]
    pub clear_stats: bool,

    /// Suppress everything but the board itself
    #[arg(short, long)]
    pub quiet: bool,
}

/// Dispatches parsed arguments to engine operations and prints results
pub struct App {
    cli: Cli,
    recorder: StatsRecorder,
}

impl App {
    /// Create an app over the default file-backed statistics store
    pub fn new(cli: Cli) -> Self {
        let recorder = StatsRecorder::new(Box::new(FileBackend::new()));
        Self { cli, recorder }
    }

    /// Create an app over an explicit recorder
    pub fn with_recorder(cli: Cli, recorder: StatsRecorder) -> Self {
        Self { cli, recorder }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error for invalid date or piece arguments and for
    /// statistics store failures during `--clear-stats`.
    pub fn run(mut self) -> Result<()> {
        if self.cli.clear_stats {
            return self.clear_stats();
        }
        if self.cli.stats {
            self.show_stats();
            return Ok(());
        }
        if let Some(name) = self.cli.piece.clone() {
            return Self::show_piece(&name);
        }
        self.show_board()
    }

    fn show_board(self) -> Result<()> {
        let Self { cli, recorder } = self;
        let session = if let Some(seed) = cli.seed {
            GameSession::random_seeded(seed, recorder)
        } else if cli.random {
            GameSession::random(recorder)
        } else {
            let date = match cli.date.as_deref() {
                Some(input) => calendar::parse_date(input)?,
                None => calendar::today(),
            };
            GameSession::daily_for_date(date, recorder)
        };

        print_board(session.board());
        if !cli.quiet {
            print_summary(&session);
        }
        Ok(())
    }

    fn show_piece(name: &str) -> Result<()> {
        let piece = PieceKind::from_name(name)
            .and_then(catalog::find_piece)
            .ok_or_else(|| GameError::UnknownPiece {
                input: name.to_string(),
            })?;
        print_piece(piece);
        Ok(())
    }

    // Statistics tables write straight to the terminal
    #[allow(clippy::print_stdout)]
    fn show_stats(&self) {
        let table = self.recorder.all();
        if table.is_empty() {
            println!("No completions recorded yet");
            return;
        }

        println!("puzzle  attempts  best");
        for (puzzle_number, day) in &table {
            println!(
                "{puzzle_number:>6}  {:>8}  {}",
                day.attempt_count(),
                format_duration(day.best_time)
            );
        }
        println!();
        println!("{} puzzle(s) completed", table.len());
    }

    // Confirmation writes straight to the terminal
    #[allow(clippy::print_stdout)]
    fn clear_stats(&mut self) -> Result<()> {
        self.recorder.clear()?;
        if !self.cli.quiet {
            println!("Statistics cleared");
        }
        Ok(())
    }
}

// Board rendering writes straight to the terminal
#[allow(clippy::print_stdout)]
fn print_board(board: &Board) {
    let header: Vec<String> = (1..=BOARD_SIZE).map(|col| col.to_string()).collect();
    println!("  {}", header.join(" "));
    for row in 0..BOARD_SIZE {
        let label = char::from(b'A'.saturating_add(row as u8));
        let cells: String = (0..BOARD_SIZE)
            .map(|col| cell_glyph(board.get(Coord::new(row, col))).to_string())
            .collect::<Vec<String>>()
            .join(" ");
        println!("{label} {cells}");
    }
}

// Summary lines write straight to the terminal
#[allow(clippy::print_stdout)]
fn print_summary(session: &GameSession) {
    let refs: Vec<String> = session
        .dice()
        .iter()
        .map(|coord| coord.grid_ref())
        .collect();
    println!();
    println!("Blockers: {}", refs.join(" "));
    println!("Open cells: {}", session.board().remaining_spaces());

    if let Some(puzzle_number) = session.puzzle_number() {
        println!("Puzzle #{puzzle_number}");
        let attempts = session.recorder().attempt_count(puzzle_number);
        if attempts > 0 {
            if let Some(best) = session.recorder().best_time(puzzle_number) {
                println!("Solved {attempts} time(s), best {}", format_duration(best));
            }
        }
    }
}

// Piece rendering writes straight to the terminal
#[allow(clippy::print_stdout)]
fn print_piece(piece: &GamePiece) {
    println!("{} ({})", piece.kind.name(), piece.color.as_str());
    for (index, shape) in piece.rotations.iter().enumerate() {
        println!();
        println!("rotation {index}:");
        print_shape(shape);
    }
}

// Shape rows write straight to the terminal
#[allow(clippy::print_stdout)]
fn print_shape(shape: &Shape) {
    for row in 0..shape.rows() {
        let line: String = (0..shape.cols())
            .map(|col| if shape.is_filled(row, col) { '#' } else { '.' })
            .collect();
        println!("{line}");
    }
}

const fn cell_glyph(cell: Option<Cell>) -> char {
    match cell {
        Some(Cell::Blocked) => '#',
        Some(Cell::Occupied { kind, .. }) => kind_glyph(kind),
        Some(Cell::Empty) | None => '.',
    }
}

const fn kind_glyph(kind: PieceKind) -> char {
    match kind {
        PieceKind::Dot => '1',
        PieceKind::Dash => '2',
        PieceKind::Bar3 => '3',
        PieceKind::Corner => 'C',
        PieceKind::L => 'L',
        PieceKind::Bar4 => '4',
        PieceKind::T => 'T',
        PieceKind::Z => 'Z',
        PieceKind::O => 'O',
    }
}
