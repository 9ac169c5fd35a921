use clap::{Parser, Subcommand};
use engine::{defs::About, engine::Engine};

#[derive(Parser)]
#[command(
    version = About::VERSION, about = About::SHORT_DESCRIPTION, long_about = About::SHORT_DESCRIPTION
)]
struct Options {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
#[command(about = "Available commands")]
enum Command {
    /// Runs a fixed-depth search on a FEN position and prints the best move.
    Bestmove {
        #[arg(long)]
        fen: String,
        #[arg(long, default_value_t = 6)]
        depth: u8,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Options::parse();

    match args.command {
        Some(Command::Bestmove { fen, depth }) => run_bestmove(&fen, depth),
        None => Engine::new().run(),
    }
}

fn run_bestmove(fen: &str, depth: u8) -> anyhow::Result<()> {
    use chess::board::Board;
    use engine::search::{Search, SearchLimits};

    let board = Board::from_fen(fen)?;
    let mut search = Search::new();
    let limits = SearchLimits {
        max_depth: Some(depth),
        move_time: None,
    };

    let best_move = search.find_best_move(&board, limits, |info| {
        println!(
            "depth {} score {} nodes {} bestmove {}",
            info.depth,
            info.score,
            info.nodes,
            info.best_move
                .map(|m| m.to_long_algebraic())
                .unwrap_or_else(|| "none".to_string())
        );
    });

    match best_move {
        Some(mv) => println!("bestmove {}", mv.to_long_algebraic()),
        None => println!("bestmove none"),
    }

    Ok(())
}
