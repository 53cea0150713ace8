use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tilechess::board::board::Board;
use tilechess::board::board_utils::{Color, Square};
use tilechess::config::EngineConfig;
use tilechess::engines::engine_minimax::MinimaxEngine;
use tilechess::engines::engine_random::RandomEngine;
use tilechess::engines::engine_trait::Engine;
use tilechess::game::game::Game;
use tilechess::move_generation::legal_move_generator::LegalMoveGenerator;
use tilechess::move_generation::perft::{perft, perft_divide};
use tilechess::moves::chess_move::PromotionChoice;
use tilechess::player::player::Player;
use tilechess::utils::render_board::render_board;

#[derive(Debug, Parser)]
#[command(name = "tilechess", about = "Chess rules engine with a minimax opponent")]
struct Cli {
    /// Engine configuration file (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a position.
    Show {
        #[arg(long)]
        fen: Option<String>,

        /// Put Black's back rank at the bottom.
        #[arg(long, default_value = "false")]
        black: bool,
    },

    /// List the legal moves of the side to move, or of one square.
    Moves {
        #[arg(long)]
        fen: Option<String>,

        square: Option<String>,
    },

    /// Count leaf nodes of the legal move tree.
    Perft {
        #[arg(long)]
        fen: Option<String>,

        #[arg(short, long, default_value = "3")]
        depth: u8,

        /// Print the node count below each root move.
        #[arg(long, default_value = "false")]
        divide: bool,
    },

    /// Let two engines play each other.
    Selfplay {
        #[arg(long)]
        fen: Option<String>,

        #[arg(long, value_enum, default_value = "minimax")]
        white: EngineKind,

        #[arg(long, value_enum, default_value = "random")]
        black: EngineKind,

        /// Override the configured search depth.
        #[arg(short, long)]
        depth: Option<u8>,

        #[arg(long, default_value = "200")]
        max_plies: usize,

        /// Seed for random engines.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play against the minimax engine on the console.
    ///
    /// Enter moves as source and destination squares, e.g. `e2e4`, with an
    /// optional promotion letter: `a7a8n`.
    Play {
        #[arg(long, value_enum, default_value = "white")]
        side: Side,

        #[arg(short, long)]
        depth: Option<u8>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineKind {
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Show { fen, black } => {
            let board = load_board(fen.as_deref())?;
            let orientation = if black { Color::Black } else { Color::White };
            println!("{}", render_board(&board, orientation));
            println!("{}", board.to_fen());
        }
        Command::Moves { fen, square } => {
            let board = load_board(fen.as_deref())?;
            let player = Player::from_board(&board, board.turn());
            let moves = match square {
                Some(text) => player.legal_moves_from(Square::from_algebraic(&text)?).to_vec(),
                None => player.legal_moves(),
            };
            let list: Vec<String> = moves
                .iter()
                .map(|mv| format!("{}{}:{mv}", mv.from(), mv.to()))
                .collect();
            println!("{} moves", list.len());
            println!("{}", list.join(" "));
        }
        Command::Perft { fen, depth, divide } => {
            let board = load_board(fen.as_deref())?;
            if divide {
                for (mv, nodes) in perft_divide(&LegalMoveGenerator, &board, depth) {
                    println!("{mv}: {nodes}");
                }
            }
            let counts = perft(&LegalMoveGenerator, &board, depth);
            println!("{counts:?}");
        }
        Command::Selfplay {
            fen,
            white,
            black,
            depth,
            max_plies,
            seed,
        } => {
            let config = with_depth(config, depth)?;
            let mut game = match fen {
                Some(fen) => Game::from_fen(&fen)?,
                None => Game::new(),
            };
            let mut white = build_engine(white, config, seed);
            let mut black = build_engine(black, config, seed.map(|s| s.wrapping_add(1)));
            println!("{} vs {}", white.name(), black.name());

            while !game.status().is_over() && game.history().len() < max_plies {
                let engine = match game.board().turn() {
                    Color::White => white.as_mut(),
                    Color::Black => black.as_mut(),
                };
                game.play_engine_move(engine)?;
            }
            println!("{}", game.history());
            println!("{}", render_board(game.board(), Color::White));
            println!("result: {}", game.status());
        }
        Command::Play { side, depth } => {
            let config = with_depth(config, depth)?;
            play_console(Color::from(side), MinimaxEngine::new(config))?;
        }
    }

    Ok(())
}

fn load_board(fen: Option<&str>) -> Result<Board> {
    match fen {
        Some(fen) => Board::from_fen(fen).with_context(|| format!("parsing FEN {fen:?}")),
        None => Ok(Board::initial_position()),
    }
}

fn with_depth(config: EngineConfig, depth: Option<u8>) -> Result<EngineConfig> {
    match depth {
        Some(depth) => Ok(config.with_depth(depth)?),
        None => Ok(config),
    }
}

fn build_engine(kind: EngineKind, config: EngineConfig, seed: Option<u64>) -> Box<dyn Engine> {
    match (kind, seed) {
        (EngineKind::Minimax, _) => Box::new(MinimaxEngine::new(config)),
        (EngineKind::Random, Some(seed)) => Box::new(RandomEngine::seeded(seed)),
        (EngineKind::Random, None) => Box::new(RandomEngine::new()),
    }
}

fn play_console(human: Color, mut engine: MinimaxEngine) -> Result<()> {
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.status().is_over() {
        if game.board().turn() != human {
            let mv = game.play_engine_move(&mut engine)?;
            println!("{} plays {mv}", engine.name());
            continue;
        }

        println!("{}", render_board(game.board(), human));
        print!("{human} to move> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        if input == "quit" {
            return Ok(());
        }
        let played = parse_input(input)
            .and_then(|(from, to, promotion)| Ok(game.play(from, to, promotion)?));
        match played {
            Ok(status) => println!("{status}"),
            Err(e) => println!("{e}"),
        }
    }

    println!("{}", render_board(game.board(), human));
    println!("{}", game.history());
    println!("result: {}", game.status());
    Ok(())
}

fn parse_input(input: &str) -> Result<(Square, Square, Option<PromotionChoice>)> {
    if input.len() < 4 || !input.is_ascii() {
        bail!("enter a move like e2e4");
    }
    let from = Square::from_algebraic(&input[0..2])?;
    let to = Square::from_algebraic(&input[2..4])?;
    let promotion = match &input[4..] {
        "" => None,
        letter => match "qrbn".find(letter).and_then(PromotionChoice::from_index) {
            Some(choice) if letter.len() == 1 => Some(choice),
            _ => bail!("unknown promotion piece {letter:?}"),
        },
    };
    Ok((from, to, promotion))
}
