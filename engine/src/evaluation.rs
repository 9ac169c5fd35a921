use chess::{
    board::Board,
    definitions::Squares,
    file::File,
    move_generation::MoveGenerator,
    move_list::MoveList,
    pieces::Piece,
    side::Side,
    square::{self, Square},
};

use crate::{
    pawn_structure::{PawnEvaluator, PawnStructure},
    psqt::Psqt,
    score::{Score, ScoreType},
};

const CENTER_SQUARES: [u8; 4] = [Squares::D4, Squares::E4, Squares::D5, Squares::E5];

const DOUBLED_PAWN_PENALTY: ScoreType = -20;
const ISOLATED_PAWN_PENALTY: ScoreType = -15;
const PASSED_PAWN_BONUS: ScoreType = 30;

const OPEN_FILE_ROOK_BONUS: ScoreType = 20;
const SEMI_OPEN_FILE_ROOK_BONUS: ScoreType = 10;

const CENTER_OCCUPATION_BONUS: ScoreType = 10;
const CENTER_ATTACK_BONUS: ScoreType = 5;

const MOBILITY_WEIGHT: ScoreType = 2;

const UNDEVELOPED_MINOR_PENALTY: ScoreType = -20;
const MISPLACED_ROOK_PENALTY: ScoreType = -30;
const DEVELOPMENT_HORIZON_FULLMOVE: u32 = 16;
const OPENING_HORIZON_FULLMOVE: u32 = 10;

const KING_SHIELD_BONUS: ScoreType = 50;
const NO_CASTLING_RIGHTS_PENALTY: ScoreType = -75;

const PROGRESS_MATERIAL_THRESHOLD: ScoreType = 330;

/// Piece-value table shared with move ordering's promotion handling; kept
/// separate from [`crate::see`]'s table since this one only needs to compare
/// material totals, not drive the exchange evaluator.
const MATERIAL_VALUE: [ScoreType; 6] = [0, 900, 500, 330, 320, 100];

/// Heuristic static evaluator. Combines PeSTo material/PSQT scoring with a
/// handful of positional terms: pawn structure, king safety, center control,
/// rook file placement, mobility, opening development, and an
/// advance-the-win term for the side that is already materially ahead.
pub struct Evaluation {
    psqt: Psqt,
    pawn_eval: PawnEvaluator,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluation {
    pub fn new() -> Self {
        Self {
            psqt: Psqt::new(),
            pawn_eval: PawnEvaluator::new(),
        }
    }

    /// Evaluates `board` from White's perspective (positive favors White).
    /// Terminal conditions (checkmate, stalemate, and the various draw rules)
    /// are the caller's responsibility; this only scores quiet positions.
    pub fn evaluate(&self, board: &Board, move_gen: &MoveGenerator) -> Score {
        let (material_and_psqt, phase) = if board.full_move_number() <= OPENING_HORIZON_FULLMOVE {
            let material = self.material_total(board, Side::White)
                - self.material_total(board, Side::Black);
            (Score::new(material), crate::psqt::MAX_GAME_PHASE)
        } else {
            self.psqt.evaluate_with_phase(board)
        };
        let structure = self.pawn_eval.detect_pawn_structure(board);

        let mut score = material_and_psqt;
        score += self.pawn_structure_score(&structure);
        score += self.rook_file_score(board);
        score += self.center_control_score(board, move_gen);
        score += self.mobility_score(board, move_gen);
        score += self.development_score(board);
        score += self.king_safety_score(board);
        score += self.progress_when_winning_score(board, phase);

        score
    }

    /// Scores a single move for ordering purposes. Captures are scored by
    /// SEE; everything else by the static evaluation delta it is expected
    /// to produce is too expensive to compute here, so callers combine this
    /// with [`crate::move_order::score_move`] instead.
    pub fn piece_value(&self, piece: Piece) -> ScoreType {
        MATERIAL_VALUE[piece as usize]
    }

    fn pawn_structure_score(&self, structure: &PawnStructure) -> Score {
        let white = Side::White as usize;
        let black = Side::Black as usize;
        let mut total: ScoreType = 0;

        total += structure.doubled_pawns[white].number_of_occupied_squares() as ScoreType
            * DOUBLED_PAWN_PENALTY;
        total -= structure.doubled_pawns[black].number_of_occupied_squares() as ScoreType
            * DOUBLED_PAWN_PENALTY;

        total += structure.isolated_pawns[white].number_of_occupied_squares() as ScoreType
            * ISOLATED_PAWN_PENALTY;
        total -= structure.isolated_pawns[black].number_of_occupied_squares() as ScoreType
            * ISOLATED_PAWN_PENALTY;

        total += structure.passed_pawns[white].number_of_occupied_squares() as ScoreType
            * PASSED_PAWN_BONUS;
        total -= structure.passed_pawns[black].number_of_occupied_squares() as ScoreType
            * PASSED_PAWN_BONUS;

        Score::new(total)
    }

    fn rook_file_score(&self, board: &Board) -> Score {
        let white_score = self.rook_file_score_for(board, Side::White);
        let black_score = self.rook_file_score_for(board, Side::Black);

        Score::new(white_score - black_score)
    }

    fn rook_file_score_for(&self, board: &Board, side: Side) -> ScoreType {
        let own_pawns = *board.piece_bitboard(Piece::Pawn, side);
        let enemy_pawns = *board.piece_bitboard(Piece::Pawn, Side::opposite(side));

        let mut rooks = *board.piece_bitboard(Piece::Rook, side);
        let mut total = 0;
        while rooks.number_of_occupied_squares() > 0 {
            let sq = chess::bitboard_helpers::next_bit(&mut rooks) as u8;
            let file_mask = File::of(sq).to_bitboard();
            let own_on_file = (file_mask & own_pawns).number_of_occupied_squares() > 0;
            let enemy_on_file = (file_mask & enemy_pawns).number_of_occupied_squares() > 0;
            if !own_on_file && !enemy_on_file {
                total += OPEN_FILE_ROOK_BONUS;
            } else if !own_on_file {
                total += SEMI_OPEN_FILE_ROOK_BONUS;
            }
        }
        total
    }

    fn center_control_score(&self, board: &Board, move_gen: &MoveGenerator) -> Score {
        let occupancy = board.all_pieces();

        let mut white_total = 0;
        let mut black_total = 0;

        for &sq in CENTER_SQUARES.iter() {
            if move_gen
                .attackers(board, sq, Side::White, &occupancy)
                .number_of_occupied_squares()
                > 0
            {
                white_total += CENTER_ATTACK_BONUS;
            }
            if move_gen
                .attackers(board, sq, Side::Black, &occupancy)
                .number_of_occupied_squares()
                > 0
            {
                black_total += CENTER_ATTACK_BONUS;
            }
            if let Some((_, side)) = board.piece_on_square(sq) {
                if side.is_white() {
                    white_total += CENTER_OCCUPATION_BONUS;
                } else {
                    black_total += CENTER_OCCUPATION_BONUS;
                }
            }
        }

        Score::new(white_total - black_total)
    }

    /// Mobility is estimated as the difference in legal move counts between
    /// White and Black, measured by playing a null move when Black is not
    /// already to move.
    fn mobility_score(&self, board: &Board, move_gen: &MoveGenerator) -> Score {
        let mut side_to_move_moves = MoveList::new();
        move_gen.generate_legal_moves(board, &mut side_to_move_moves);

        let mut board_copy = board.clone();
        board_copy.push_null_move();
        let mut other_side_moves = MoveList::new();
        move_gen.generate_legal_moves(&board_copy, &mut other_side_moves);

        let (white_count, black_count) = if board.side_to_move().is_white() {
            (side_to_move_moves.len(), other_side_moves.len())
        } else {
            (other_side_moves.len(), side_to_move_moves.len())
        };

        let delta = white_count as ScoreType - black_count as ScoreType;
        Score::new(delta * MOBILITY_WEIGHT)
    }

    fn development_score(&self, board: &Board) -> Score {
        if board.full_move_number() > DEVELOPMENT_HORIZON_FULLMOVE {
            return Score::DRAW;
        }

        Score::new(
            self.development_score_for(board, Side::White)
                - self.development_score_for(board, Side::Black),
        )
    }

    fn development_score_for(&self, board: &Board, side: Side) -> ScoreType {
        let back_rank_squares = back_rank_minor_squares(side);
        let mut penalty = 0;

        for &sq in back_rank_squares.iter() {
            if let Some((piece, piece_side)) = board.piece_on_square(sq) {
                if piece_side == side && matches!(piece, Piece::Knight | Piece::Bishop) {
                    penalty += UNDEVELOPED_MINOR_PENALTY;
                }
            }
        }

        let rook_squares = back_rank_rook_squares(side);
        let mut rooks = *board.piece_bitboard(Piece::Rook, side);
        while rooks.number_of_occupied_squares() > 0 {
            let sq = chess::bitboard_helpers::next_bit(&mut rooks) as u8;
            if !rook_squares.contains(&sq) {
                penalty += MISPLACED_ROOK_PENALTY;
            }
        }

        penalty
    }

    fn king_safety_score(&self, board: &Board) -> Score {
        let white = self.king_safety_for(board, Side::White);
        let black = self.king_safety_for(board, Side::Black);

        Score::new(white - black)
    }

    fn king_safety_for(&self, board: &Board, side: Side) -> ScoreType {
        let Some(king_square) = board.king(side) else {
            return 0;
        };

        let back_rank = if side.is_white() { 0 } else { 7 };
        let (_, king_rank) = square::from_square(king_square.to_square_index());
        let king_file = File::of(king_square.to_square_index()) as u8;

        if king_rank == back_rank {
            let shield_files: [i8; 3] = if king_file < 2 {
                [0, 1, 2]
            } else if king_file > 5 {
                [5, 6, 7]
            } else {
                return 0;
            };

            let shield_rank = if side.is_white() { 1 } else { 6 };
            let own_pawns = *board.piece_bitboard(Piece::Pawn, side);
            let shield_count = shield_files
                .iter()
                .filter(|&&file| {
                    own_pawns.is_square_occupied(square::to_square(file as u8, shield_rank))
                })
                .count();

            if shield_count >= 2 {
                return KING_SHIELD_BONUS;
            }
        }

        if !board.can_castle_kingside(side) && !board.can_castle_queenside(side) {
            return NO_CASTLING_RIGHTS_PENALTY;
        }

        0
    }

    /// Encourages technique once one side is clearly winning on material:
    /// centralize the king, push passed pawns, and bring pieces toward the
    /// opponent's king. Only applies in the endgame (low game phase).
    fn progress_when_winning_score(&self, board: &Board, phase: ScoreType) -> Score {
        if phase > 12 {
            return Score::DRAW;
        }

        let white_material = self.material_total(board, Side::White);
        let black_material = self.material_total(board, Side::Black);
        let material_advantage = (white_material - black_material).abs();

        if material_advantage < PROGRESS_MATERIAL_THRESHOLD {
            return Score::DRAW;
        }

        let winning_side = if white_material >= black_material {
            Side::White
        } else {
            Side::Black
        };
        let losing_side = Side::opposite(winning_side);

        let Some(winning_king) = board.king(winning_side) else {
            return Score::DRAW;
        };
        let Some(losing_king) = board.king(losing_side) else {
            return Score::DRAW;
        };

        let centralization = 3 - center_distance(winning_king.to_square_index());
        let king_proximity = 7 - square_distance(winning_king, losing_king);
        let bonus = (centralization + king_proximity) * 10;

        Score::new(if winning_side.is_white() { bonus } else { -bonus })
    }

    fn material_total(&self, board: &Board, side: Side) -> ScoreType {
        Piece::iter()
            .map(|piece| {
                board
                    .piece_bitboard(piece, side)
                    .number_of_occupied_squares() as ScoreType
                    * self.piece_value(piece)
            })
            .sum()
    }
}

fn back_rank_minor_squares(side: Side) -> [u8; 4] {
    if side.is_white() {
        [Squares::B1, Squares::C1, Squares::F1, Squares::G1]
    } else {
        [Squares::B8, Squares::C8, Squares::F8, Squares::G8]
    }
}

fn back_rank_rook_squares(side: Side) -> [u8; 2] {
    if side.is_white() {
        [Squares::A1, Squares::H1]
    } else {
        [Squares::A8, Squares::H8]
    }
}

fn center_distance(square: u8) -> i32 {
    let (file, rank) = square::from_square(square);
    let file_dist = (file as i32 - 3).abs().min((file as i32 - 4).abs());
    let rank_dist = (rank as i32 - 3).abs().min((rank as i32 - 4).abs());
    file_dist.max(rank_dist)
}

fn square_distance(a: Square, b: Square) -> i32 {
    let (af, ar) = square::from_square(a.to_square_index());
    let (bf, br) = square::from_square(b.to_square_index());
    (af as i32 - bf as i32).abs().max((ar as i32 - br as i32).abs())
}

#[cfg(test)]
mod tests {
    use chess::board::Board;

    use super::*;

    #[test]
    fn default_position_is_balanced() {
        let board = Board::default_board();
        let move_gen = MoveGenerator::new();
        let eval = Evaluation::new();
        assert_eq!(eval.evaluate(&board, &move_gen), Score::new(0));
    }

    #[test]
    fn extra_queen_is_winning() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let move_gen = MoveGenerator::new();
        let eval = Evaluation::new();
        assert!(eval.evaluate(&board, &move_gen) > Score::new(0));
    }

    #[test]
    fn doubled_pawns_are_penalized_relative_to_healthy_structure() {
        let move_gen = MoveGenerator::new();
        let eval = Evaluation::new();

        let doubled = Board::from_fen("4k3/8/8/8/8/4P3/4P3/4K3 w - - 0 1").unwrap();
        let healthy = Board::from_fen("4k3/8/8/8/8/5P2/4P3/4K3 w - - 0 1").unwrap();

        assert!(eval.evaluate(&doubled, &move_gen) < eval.evaluate(&healthy, &move_gen));
    }

    #[test]
    fn passed_pawn_favors_its_owner() {
        let move_gen = MoveGenerator::new();
        let eval = Evaluation::new();

        let passed = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let blocked = Board::from_fen("4k3/4p3/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();

        assert!(eval.evaluate(&passed, &move_gen) > eval.evaluate(&blocked, &move_gen));
    }
}
