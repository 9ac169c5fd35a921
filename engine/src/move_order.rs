use chess::{board::Board, definitions::Squares, move_generation::MoveGenerator, moves::Move};

use crate::{killer_moves_table::KillerMovesTable, see};

const TT_MOVE_SCORE: i32 = 10_000;
const WINNING_CAPTURE_BASE: i32 = 1_000;
const EQUAL_CAPTURE_SCORE: i32 = 500;
const KILLER_SCORE: i32 = 800;
const PROMOTE_QUEEN_SCORE: i32 = 900;
const PROMOTE_OTHER_SCORE: i32 = 200;
const CHECK_SCORE: i32 = 120;
const CASTLE_SCORE: i32 = 200;
const CENTER_SQUARE_SCORE: i32 = 100;
const EARLY_DEVELOPMENT_SCORE: i32 = 100;

const CENTER_SQUARES: [u8; 4] = [Squares::D4, Squares::E4, Squares::D5, Squares::E5];

/// Assigns a move-ordering score so that captures, checks, and historically
/// strong quiet moves are searched before the rest, maximizing alpha-beta
/// cutoffs. Higher scores should be searched first.
#[allow(clippy::too_many_arguments)]
pub fn score_move(
    board: &Board,
    move_gen: &MoveGenerator,
    mv: &Move,
    tt_move: Option<Move>,
    killers: &KillerMovesTable,
    ply: u8,
) -> i32 {
    if tt_move == Some(*mv) {
        return TT_MOVE_SCORE;
    }

    let mut score = 0;

    if mv.is_capture() {
        let see_value = see::score_capture(board, move_gen, mv);
        score += if see_value > 0 {
            WINNING_CAPTURE_BASE + see_value
        } else if see_value == 0 {
            EQUAL_CAPTURE_SCORE
        } else {
            see_value
        };
    } else if killers.is_killer(ply, *mv) {
        score += KILLER_SCORE;
    }

    if let Some(promotion) = mv.promotion_piece() {
        score += if promotion.is_queen() {
            PROMOTE_QUEEN_SCORE
        } else {
            PROMOTE_OTHER_SCORE
        };
    }

    if mv.is_castle() {
        score += CASTLE_SCORE;
    }

    if CENTER_SQUARES.contains(&mv.to()) {
        score += CENTER_SQUARE_SCORE;
    }

    if board.full_move_number() <= 10 && is_early_development(board, mv) {
        score += EARLY_DEVELOPMENT_SCORE;
    }

    if gives_check(board, move_gen, mv) {
        score += CHECK_SCORE;
    }

    score
}

/// A minor piece leaving its own back rank while still in the opening is
/// considered development.
fn is_early_development(board: &Board, mv: &Move) -> bool {
    use chess::pieces::Piece;

    if !matches!(mv.piece(), Piece::Knight | Piece::Bishop) {
        return false;
    }

    let (_, from_rank) = chess::square::from_square(mv.from());
    let starting_rank = if board.side_to_move().is_white() { 0 } else { 7 };
    from_rank == starting_rank
}

fn gives_check(board: &Board, move_gen: &MoveGenerator, mv: &Move) -> bool {
    let mut board_copy = board.clone();
    if board_copy.make_move(mv, move_gen).is_err() {
        return false;
    }
    board_copy.is_in_check(move_gen)
}

/// Sorts `moves` in place, highest ordering score first.
pub fn sort_moves(
    board: &Board,
    move_gen: &MoveGenerator,
    moves: &mut [Move],
    tt_move: Option<Move>,
    killers: &KillerMovesTable,
    ply: u8,
) {
    moves.sort_by_cached_key(|mv| -score_move(board, move_gen, mv, tt_move, killers, ply));
}
