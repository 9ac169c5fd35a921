use std::time::{Duration, Instant};

use chess::{board::Board, move_generation::MoveGenerator, move_list::MoveList, moves::Move, side::Side};

use crate::{
    defs::MAX_QUIESCENCE_DEPTH,
    evaluation::Evaluation,
    killer_moves_table::KillerMovesTable,
    move_order,
    score::Score,
    ttable::{EntryFlag, TranspositionTable, TranspositionTableEntry},
};

/// Reports progress for one completed iterative-deepening iteration. Mirrors
/// a UCI `info` line without depending on any particular output format.
#[derive(Debug, Clone)]
pub struct SearchInfo {
    pub depth: u8,
    pub score: Score,
    pub best_move: Option<Move>,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Bounds on how long/deep a search is allowed to run. `None` fields mean
/// "unbounded" for that dimension; the search still always stops at
/// [`crate::defs::MAX_DEPTH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    pub max_depth: Option<u8>,
    pub move_time: Option<Duration>,
}

/// Owns the mutable state that persists across a single `go` search:
/// transposition table, killer moves, and node/time bookkeeping. A fresh
/// transposition table is expensive to discard, so callers typically keep
/// one `Search` alive for the lifetime of a game and only reset
/// [`Search::killers`] between searches.
pub struct Search {
    pub tt: TranspositionTable,
    killers: KillerMovesTable,
    evaluation: Evaluation,
    move_gen: MoveGenerator,
    nodes: u64,
    start: Option<Instant>,
    move_time: Option<Duration>,
    stopped: bool,
    root_side: Side,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    pub fn new() -> Self {
        Self {
            tt: TranspositionTable::default(),
            killers: KillerMovesTable::new(),
            evaluation: Evaluation::new(),
            move_gen: MoveGenerator::new(),
            nodes: 0,
            start: None,
            move_time: None,
            stopped: false,
            root_side: Side::White,
        }
    }

    pub fn with_hash_size_mb(hash_mb: usize) -> Self {
        Self {
            tt: TranspositionTable::from_size_in_mb(hash_mb),
            ..Self::new()
        }
    }

    /// Runs iterative deepening from depth 1 up to `limits.max_depth` (or
    /// [`crate::defs::MAX_DEPTH`]), calling `on_info` after each completed
    /// iteration. Returns the best move found at the deepest completed
    /// iteration, or `None` if the position has no legal moves.
    pub fn find_best_move(
        &mut self,
        board: &Board,
        limits: SearchLimits,
        mut on_info: impl FnMut(&SearchInfo),
    ) -> Option<Move> {
        self.nodes = 0;
        self.start = Some(Instant::now());
        self.move_time = limits.move_time;
        self.stopped = false;
        self.root_side = board.side_to_move();
        self.killers.clear();

        let max_depth = limits.max_depth.unwrap_or(crate::defs::MAX_DEPTH);
        let mut best_move = None;
        let mut best_score = Score::DRAW;

        for depth in 1..=max_depth {
            let mut board_copy = board.clone();
            let (score, mv) = self.alpha_beta(&mut board_copy, depth, 0, -Score::INF, Score::INF, true);

            if self.stopped && depth > 1 {
                break;
            }

            if let Some(mv) = mv {
                best_move = Some(mv);
                best_score = score;
            }

            on_info(&SearchInfo {
                depth,
                score: best_score,
                best_move,
                nodes: self.nodes,
                elapsed: self.start.unwrap().elapsed(),
            });

            if self.stopped || best_score.is_mate() {
                break;
            }
        }

        best_move
    }

    fn should_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if let (Some(start), Some(limit)) = (self.start, self.move_time) {
            if self.nodes % 2048 == 0 && start.elapsed() >= limit {
                self.stopped = true;
            }
        }
        self.stopped
    }

    /// Explicit-maximizing-player fail-hard alpha-beta search. `ply` is the
    /// distance from the root, used to re-base mate scores for the
    /// transposition table and to index the killer table.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        ply: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing_player: bool,
    ) -> (Score, Option<Move>) {
        if self.should_stop() {
            return (Score::DRAW, None);
        }

        if board.is_fivefold_repetition() || board.is_75_move_rule() || board.insufficient_material()
        {
            return (Score::DRAW, None);
        }

        if depth == 0 {
            return (
                self.quiescence(board, ply, 0, alpha, beta, maximizing_player),
                None,
            );
        }

        let zobrist = board.zobrist_hash();
        let alpha_original = alpha;
        let beta_original = beta;
        let mut tt_move = None;

        if let Some(entry) = self.tt.get_entry(zobrist) {
            tt_move = Some(entry.board_move);
            if entry.depth >= depth {
                let value = entry.score.from_tt(ply);
                match entry.flag {
                    EntryFlag::Exact => return (value, Some(entry.board_move)),
                    EntryFlag::LowerBound if value >= beta => {
                        return (value, Some(entry.board_move));
                    }
                    EntryFlag::UpperBound if value <= alpha => {
                        return (value, Some(entry.board_move));
                    }
                    _ => {}
                }
            }
        }

        let mut move_list = MoveList::new();
        self.move_gen.generate_legal_moves(board, &mut move_list);

        if move_list.is_empty() {
            let terminal = if board.is_in_check(&self.move_gen) {
                if maximizing_player {
                    Score::mated_in(ply)
                } else {
                    Score::mate_in(ply)
                }
            } else {
                Score::DRAW
            };
            return (terminal, None);
        }

        let mut moves: Vec<Move> = move_list.iter().copied().collect();
        move_order::sort_moves(board, &self.move_gen, &mut moves, tt_move, &self.killers, ply);

        let mut best_move = moves[0];
        let mut best_score = if maximizing_player {
            -Score::INF
        } else {
            Score::INF
        };

        for mv in moves {
            self.nodes += 1;
            if board.make_move(&mv, &self.move_gen).is_err() {
                continue;
            }
            let (score, _) = self.alpha_beta(board, depth - 1, ply + 1, alpha, beta, !maximizing_player);
            let _ = board.unmake_move();

            if maximizing_player {
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = mv;
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                if mv.is_quiet() {
                    self.killers.update(ply, mv);
                }
                break;
            }
        }

        let flag = if best_score <= alpha_original {
            EntryFlag::UpperBound
        } else if best_score >= beta_original {
            EntryFlag::LowerBound
        } else {
            EntryFlag::Exact
        };

        self.tt.store_entry(TranspositionTableEntry::new(
            zobrist,
            depth,
            best_score.to_tt(ply),
            flag,
            best_move,
        ));

        (best_score, Some(best_move))
    }

    /// Quiescence search: resolves captures (and, while shallow, checks) past
    /// the main search horizon so the static evaluator is never applied to a
    /// position with a hanging piece on the board.
    fn quiescence(
        &mut self,
        board: &mut Board,
        main_ply: u8,
        q_ply: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing_player: bool,
    ) -> Score {
        self.nodes += 1;

        if board.is_fivefold_repetition() || board.is_75_move_rule() || board.insufficient_material()
        {
            return Score::DRAW;
        }

        let static_eval = self.static_eval(board);

        if q_ply >= MAX_QUIESCENCE_DEPTH || self.should_stop() {
            return static_eval;
        }

        if maximizing_player {
            if static_eval >= beta {
                return beta;
            }
            alpha = alpha.max(static_eval);
        } else {
            if static_eval <= alpha {
                return alpha;
            }
            beta = beta.min(static_eval);
        }

        let mut move_list = MoveList::new();
        self.move_gen.generate_legal_moves(board, &mut move_list);

        let move_cap = match q_ply {
            d if d >= 3 => 4,
            2 => 6,
            _ => 8,
        };
        let allow_checks = q_ply < 3;

        let mut candidates: Vec<Move> = Vec::new();
        let mut check_count = 0;
        for mv in move_list.iter() {
            let is_queen_promotion = mv.promotion_piece().map(|p| p.is_queen()).unwrap_or(false);
            if mv.is_capture() || is_queen_promotion {
                candidates.push(*mv);
            } else if allow_checks && check_count < 4 && gives_check(board, &self.move_gen, mv) {
                check_count += 1;
                candidates.push(*mv);
            }
        }

        move_order::sort_moves(board, &self.move_gen, &mut candidates, None, &self.killers, main_ply);
        candidates.truncate(move_cap);

        for mv in candidates {
            if board.make_move(&mv, &self.move_gen).is_err() {
                continue;
            }
            let score = self.quiescence(board, main_ply, q_ply + 1, alpha, beta, !maximizing_player);
            let _ = board.unmake_move();

            if maximizing_player {
                if score >= beta {
                    return beta;
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    return alpha;
                }
                beta = beta.min(score);
            }
        }

        if maximizing_player {
            alpha
        } else {
            beta
        }
    }

    /// Converts the evaluator's White-relative score into one relative to
    /// the player who was maximizing at the root of this search: positive
    /// always means "good for whichever side is to move at the root",
    /// regardless of which ply we are actually at.
    fn static_eval(&self, board: &Board) -> Score {
        let score = self.evaluation.evaluate(board, &self.move_gen);
        if self.root_side.is_white() {
            score
        } else {
            -score
        }
    }
}

fn gives_check(board: &Board, move_gen: &MoveGenerator, mv: &Move) -> bool {
    let mut board_copy = board.clone();
    if board_copy.make_move(mv, move_gen).is_err() {
        return false;
    }
    board_copy.is_in_check(move_gen)
}
