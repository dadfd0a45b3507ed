use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::info;

use ray_chess::engines::engine_random::RandomEngine;
use ray_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use ray_chess::move_generation::perft::{perft, perft_divide, perft_multi_threaded};
use ray_chess::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use ray_chess::utils::render_game_state::render_game_state;
use ray_chess::{GameState, GameStatus};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ray-scan legal move generator", long_about = None)]
struct Args {
    /// Position to start from
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the legal moves of the position
    Moves,
    /// Count leaf nodes of the legal move tree
    Perft {
        #[arg(long)]
        depth: u8,
        /// Print per-root-move counts
        #[arg(long)]
        divide: bool,
        /// Search root moves on separate threads
        #[arg(long)]
        threads: bool,
    },
    /// Play random moves from the position
    Random {
        #[arg(long, default_value_t = 40)]
        plies: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play moves typed on stdin
    Play,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut game = GameState::from_fen(&args.fen)?;
    let mut out = io::stdout().lock();

    match args.command {
        Command::Moves => print_moves(&mut game, &mut out)?,
        Command::Perft {
            depth,
            divide,
            threads,
        } => run_perft(&mut game, depth, divide, threads, &mut out)?,
        Command::Random { plies, seed } => run_random(&mut game, plies, seed, &mut out)?,
        Command::Play => run_play(&mut game, io::stdin().lock(), &mut out)?,
    }

    Ok(())
}

fn print_moves(game: &mut GameState, out: &mut impl Write) -> io::Result<()> {
    let moves = game.legal_moves();
    let text: Vec<String> = moves.iter().map(move_to_long_algebraic).collect();
    writeln!(out, "{} legal moves: {}", moves.len(), text.join(" "))
}

fn run_perft(
    game: &mut GameState,
    depth: u8,
    divide: bool,
    threads: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let started = Instant::now();

    let nodes = if divide {
        let divided = perft_divide(game, depth);
        for (mv, nodes) in &divided {
            writeln!(out, "{}: {}", move_to_long_algebraic(mv), nodes)?;
        }
        divided.iter().map(|(_, nodes)| nodes).sum()
    } else if threads {
        perft_multi_threaded(game, depth)
    } else {
        perft(game, depth)
    };

    let elapsed = started.elapsed();
    info!("perft depth {depth} finished in {elapsed:?}");
    writeln!(out, "nodes {nodes}")
}

fn run_random(
    game: &mut GameState,
    plies: usize,
    seed: Option<u64>,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut engine = seed.map_or_else(RandomEngine::new, RandomEngine::with_seed);
    let mut played = Vec::with_capacity(plies);
    info!("{} playing up to {plies} plies", engine.name());

    for _ in 0..plies {
        let Some(mv) = engine.choose_move(game) else {
            break;
        };
        played.push(move_to_long_algebraic(&mv));
        game.apply_move(mv);
    }

    writeln!(out, "{}", played.join(" "))?;
    writeln!(out, "{}", render_game_state(game))?;
    writeln!(out, "{}", game.get_fen())?;
    print_status(game, out)
}

fn print_status(game: &mut GameState, out: &mut impl Write) -> io::Result<()> {
    match game.status() {
        GameStatus::Ongoing if game.is_in_check() => {
            writeln!(out, "{} is in check", game.side_to_move())
        }
        GameStatus::Ongoing => Ok(()),
        GameStatus::Checkmate { winner } => writeln!(out, "checkmate, {winner} wins"),
        GameStatus::Stalemate => writeln!(out, "stalemate"),
    }
}

fn print_prompt(game: &GameState, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{} to move> ", game.side_to_move())?;
    out.flush()
}

/// Reads one command per line from `input` until `quit` or end of input.
fn run_play(game: &mut GameState, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", render_game_state(game))?;
    print_status(game, out)?;
    print_prompt(game, out)?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "moves" => print_moves(game, out)?,
            "fen" => writeln!(out, "{}", game.get_fen())?,
            "undo" => match game.undo_last() {
                Some(mv) => {
                    writeln!(out, "undid {}", move_to_long_algebraic(&mv))?;
                    writeln!(out, "{}", render_game_state(game))?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            text => match long_algebraic_to_move(text, game) {
                Ok(mv) => {
                    game.apply_move(mv);
                    writeln!(out, "{}", render_game_state(game))?;
                    print_status(game, out)?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
        }

        print_prompt(game, out)?;
    }

    Ok(())
}
