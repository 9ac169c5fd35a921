use std::{
    io::{self, Write},
    str::FromStr,
    time::Duration,
};

use chess::{board::Board, moves::Move, pieces::SQUARE_NAME};
use uci_parser::{UciCommand, UciInfo, UciOption, UciResponse, UciSearchOptions};

use crate::{
    defs::About,
    log_level::{LogDebug, LogInfo, LogLevel},
    search::{Search, SearchInfo, SearchLimits},
    ttable,
};

fn square_index_to_uci_square(square: u8) -> uci_parser::Square {
    uci_parser::Square::from_str(SQUARE_NAME[square as usize]).unwrap()
}

fn move_to_uci_move(mv: &Move) -> uci_parser::UciMove {
    let promote = mv
        .promotion_piece()
        .map(|p| uci_parser::Piece::from_str(&p.as_char().to_string()).unwrap());

    uci_parser::UciMove {
        src: square_index_to_uci_square(mv.from()),
        dst: square_index_to_uci_square(mv.to()),
        promote,
    }
}

/// Translates a UCI `go` command's time controls into the bounds the search
/// loop understands. Mirrors a simple fraction-of-remaining-time allocation:
/// spend a twentieth of what's left, plus half the increment.
fn limits_from_uci_options(options: &UciSearchOptions, board: &Board) -> SearchLimits {
    let mut limits = SearchLimits {
        max_depth: options.depth.map(|d| d as u8),
        move_time: None,
    };

    if let Some(time) = options.movetime {
        limits.move_time = Some(time);
        return limits;
    }

    let (time, increment) = if board.side_to_move().is_white() {
        (options.wtime, options.winc)
    } else {
        (options.btime, options.binc)
    };

    if let Some(time) = time {
        let inc = increment.unwrap_or(Duration::ZERO) / 2;
        limits.move_time = Some(time / 20 + inc);
    }

    limits
}

fn write_search_info(stdout: &mut impl Write, info: &SearchInfo) {
    let nps = if info.elapsed.as_secs_f64() > 0.0 {
        info.nodes as f64 / info.elapsed.as_secs_f64()
    } else {
        0.0
    };

    let uci_info = UciInfo::new()
        .depth(info.depth)
        .nodes(info.nodes)
        .score(info.score)
        .nps(nps.trunc())
        .time(info.elapsed.as_millis() as u64)
        .pv(info.best_move.map(|m| m.to_long_algebraic()));

    writeln!(stdout, "{}", UciResponse::info(uci_info)).unwrap();
}

/// Drives the UCI protocol loop for a single game session. Unlike a
/// multi-threaded engine, `go` is handled synchronously on the input thread:
/// the caller is expected to feed lines at a pace that tolerates this
/// (this core has no `stop`-while-searching support as a result).
pub struct Engine {
    search: Search,
    debug: bool,
}

impl Engine {
    pub fn new() -> Engine {
        Engine {
            search: Search::new(),
            debug: false,
        }
    }

    /// Runs the engine loop, reading UCI commands from `stdin` until `quit`.
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("{}", About::BANNER);
        println!(
            "{} {} by {}",
            About::NAME,
            About::VERSION,
            About::AUTHORS
        );

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut board = Board::default_board();

        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }

            let Ok(command) = UciCommand::from_str(line.trim()) else {
                continue;
            };

            let mut stdout = stdout.lock();
            match command {
                UciCommand::Debug(debug) => self.debug = debug,
                UciCommand::Quit => break,
                UciCommand::IsReady => {
                    writeln!(stdout, "{}", UciResponse::<String>::ReadyOk).unwrap();
                }
                UciCommand::Uci => {
                    let name = UciResponse::Name(format!("{} {}", About::NAME, About::VERSION));
                    let authors = UciResponse::Author(About::AUTHORS.to_string());

                    let options = vec![UciOption::<&str, i32>::spin("Hash", 16, 1, 1024)];
                    for option in options {
                        writeln!(stdout, "{}", UciResponse::Option(option)).unwrap();
                    }
                    writeln!(stdout, "{name}").unwrap();
                    writeln!(stdout, "{authors}").unwrap();
                    writeln!(stdout, "{}", UciResponse::<String>::UciOk).unwrap();
                }
                UciCommand::UciNewGame => {
                    board = Board::default_board();
                    self.search.tt.clear();
                }
                UciCommand::Position { fen, moves } => {
                    board = match fen {
                        None => Board::default_board(),
                        Some(fen) => Board::from_fen(fen.as_str()).unwrap(),
                    };
                    for mv in moves {
                        board.make_uci_move(&mv.to_string()).unwrap();
                    }
                }
                UciCommand::Go(search_options) => {
                    let info = UciInfo::default().string(format!("searching {}", board.to_fen()));
                    writeln!(stdout, "{}", UciResponse::info(info)).unwrap();

                    let limits = limits_from_uci_options(&search_options, &board);
                    let best_move = if self.debug {
                        self.run_search::<LogDebug>(&board, limits, &mut stdout)
                    } else {
                        self.run_search::<LogInfo>(&board, limits, &mut stdout)
                    };

                    let response = UciResponse::BestMove {
                        bestmove: best_move.map(|mv| move_to_uci_move(&mv).to_string()),
                        ponder: None,
                    };
                    writeln!(stdout, "{response}").unwrap();
                }
                UciCommand::SetOption { name, value } => {
                    if name.to_lowercase() == "hash" {
                        if let Some(hash_size) = value.and_then(|v| v.parse::<usize>().ok()) {
                            if (ttable::MIN_TABLE_SIZE_MB..=ttable::MAX_TABLE_SIZE_MB)
                                .contains(&hash_size)
                            {
                                self.search = Search::with_hash_size_mb(hash_size);
                            }
                        }
                    }
                }
                UciCommand::Stop => {}
                _ => {}
            }

            stdout.flush().unwrap();
        }

        Ok(())
    }

    fn run_search<Log: LogLevel>(
        &mut self,
        board: &Board,
        limits: SearchLimits,
        stdout: &mut impl Write,
    ) -> Option<Move> {
        self.search.find_best_move(board, limits, |info| {
            if Log::INFO {
                write_search_info(stdout, info);
            }
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
