use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use goban::{visualize_board, Board, Color, Game};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::recording::Recorder;

mod recording;

#[derive(Parser)]
struct Args {
    /// Resume from a board saved with --save
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Write the board to this file when the session ends
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Record the finished game's move log as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

enum Command {
    Play(u8, u8),
    Board,
    Quit,
    Unrecognized,
}

fn parse_command(line: &str) -> Command {
    match line {
        "quit" | "exit" => Command::Quit,
        "board" => Command::Board,
        _ => {
            let mut parts = line.split_whitespace();
            let x = parts.next().map(str::parse::<u8>);
            let y = parts.next().map(str::parse::<u8>);
            match (x, y, parts.next()) {
                (Some(Ok(x)), Some(Ok(y)), None) => Command::Play(x, y),
                _ => Command::Unrecognized,
            }
        }
    }
}

fn load_board(path: &Path) -> anyhow::Result<Board> {
    let contents = fs::read_to_string(path)?;
    let flat: Vec<i8> = serde_json::from_str(&contents)?;
    Ok(Board::from_flat_array(&flat)?)
}

fn save_board(path: &Path, board: &Board) -> anyhow::Result<()> {
    let flat = board.to_flat_array();
    fs::write(path, serde_json::to_string(&flat[..])?)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let board = match &args.load {
        Some(path) => {
            info!(path = %path.display(), "Resuming from saved board");
            load_board(path)?
        }
        None => Board::new(),
    };

    let mut game = Game::from_board(board);
    game.set_capture_hook(|event| {
        debug!(captured = event.captured.len(), by = %event.by, "Stones captured");
    });

    println!("{}", visualize_board(game.board()));
    println!("Enter moves as 'x y' (0-8), 'board' to reprint, 'quit' to end.");

    let stdin = io::stdin();
    loop {
        print!(
            "{} to move (captures: ● {} ○ {}) > ",
            game.to_move(),
            game.captures_by(Color::Black),
            game.captures_by(Color::White)
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session like "quit"
        }
        match parse_command(line.trim()) {
            Command::Quit => break,
            Command::Board => println!("{}", visualize_board(game.board())),
            Command::Play(x, y) => match game.play_turn(x, y) {
                Ok(outcome) => {
                    if outcome.stones_captured > 0 {
                        println!("Captured {} stone(s)!", outcome.stones_captured);
                    }
                    println!("{}", visualize_board(game.board()));
                }
                Err(err) => {
                    info!("Illegal move: {}", err);
                }
            },
            Command::Unrecognized => {
                eprintln!("Enter moves as 'x y', or 'board' / 'quit'");
            }
        }
    }

    if let Some(path) = &args.save {
        save_board(path, game.board())?;
        info!(path = %path.display(), "Board saved");
    }
    if let Some(dir) = &args.record_games_to_directory {
        let mut recorder = Recorder::new(dir.clone())?;
        recorder.write_game_recording(game.moves())?;
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
