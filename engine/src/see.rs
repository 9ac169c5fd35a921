use chess::{
    bitboard::Bitboard, bitboard_helpers, board::Board, move_generation::MoveGenerator,
    moves::Move, pieces::Piece, side::Side,
};

/// Simple material values used only for the static exchange evaluator.
/// Ordered to match `Piece`'s indexing: King, Queen, Rook, Bishop, Knight, Pawn.
const SEE_PIECE_VALUE: [i32; 6] = [20_000, 900, 500, 330, 320, 100];

fn piece_value(piece: Piece) -> i32 {
    SEE_PIECE_VALUE[piece as usize]
}

/// Statically evaluates the material outcome of the capture sequence that
/// starts with `mv`, without playing any moves on the board. A positive
/// result means the side making `mv` comes out ahead once all profitable
/// recaptures on the target square are exhausted.
///
/// Mirrors the classic "swap-off" algorithm: each side keeps recapturing
/// with its least valuable attacker for as long as doing so gains material.
pub fn see(board: &Board, move_gen: &MoveGenerator, mv: &Move) -> i32 {
    let Some(captured) = mv.captured_piece() else {
        return 0;
    };

    let to = mv.to();
    let side_to_move = board.side_to_move();
    let moved_piece_value = piece_value(mv.piece());

    let mut occupancy = board.all_pieces();
    occupancy.clear_square(mv.from());

    let recapture = exchange(
        board,
        move_gen,
        to,
        Side::opposite(side_to_move),
        moved_piece_value,
        occupancy,
    );

    piece_value(captured) - recapture
}

/// Recursively resolves the exchange on `square`: `side` recaptures a piece
/// worth `victim_value` with its least valuable attacker, if doing so is
/// profitable once the opponent's best reply is accounted for.
fn exchange(
    board: &Board,
    move_gen: &MoveGenerator,
    square: u8,
    side: Side,
    victim_value: i32,
    occupancy: Bitboard,
) -> i32 {
    let attackers = move_gen.attackers(board, square, side, &occupancy);
    let Some((attacker_square, attacker_piece)) = least_valuable_attacker(board, attackers) else {
        return 0;
    };

    let mut next_occupancy = occupancy;
    next_occupancy.clear_square(attacker_square);

    let gain = victim_value
        - exchange(
            board,
            move_gen,
            square,
            Side::opposite(side),
            piece_value(attacker_piece),
            next_occupancy,
        );

    gain.max(0)
}

fn least_valuable_attacker(board: &Board, attackers: Bitboard) -> Option<(u8, Piece)> {
    if attackers.number_of_occupied_squares() == 0 {
        return None;
    }

    let mut best: Option<(u8, Piece)> = None;
    let mut remaining = attackers;
    while remaining.number_of_occupied_squares() > 0 {
        let sq = bitboard_helpers::next_bit(&mut remaining) as u8;
        if let Some((piece, _)) = board.piece_on_square(sq) {
            best = match best {
                Some((_, best_piece)) if piece_value(best_piece) <= piece_value(piece) => best,
                _ => Some((sq, piece)),
            };
        }
    }
    best
}

/// Orders captures using SEE: returns a ranking where a higher score sorts
/// earlier (good captures before bad ones).
pub fn score_capture(board: &Board, move_gen: &MoveGenerator, mv: &Move) -> i32 {
    see(board, move_gen, mv)
}

#[cfg(test)]
mod tests {
    use chess::board::Board;

    use super::*;

    fn find_move(board: &Board, move_gen: &MoveGenerator, uci: &str) -> Move {
        let mut list = chess::move_list::MoveList::new();
        move_gen.generate_moves(board, &mut list, chess::moves::MoveType::All);
        list.iter()
            .find(|mv| mv.to_long_algebraic() == uci)
            .copied()
            .unwrap_or_else(|| panic!("move {uci} not found"))
    }

    #[test]
    fn winning_pawn_capture_is_positive() {
        // white pawn on e4 can take a hanging knight on d5
        let board = Board::from_fen("4k3/8/8/3n4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let move_gen = MoveGenerator::new();
        let mv = find_move(&board, &move_gen, "e4d5");
        assert!(see(&board, &move_gen, &mv) > 0);
    }

    #[test]
    fn losing_queen_capture_is_negative() {
        // white queen captures a pawn defended by a rook: a losing trade
        let board = Board::from_fen("3rk3/8/8/3p4/8/8/8/3QK3 w - - 0 1").unwrap();
        let move_gen = MoveGenerator::new();
        let mv = find_move(&board, &move_gen, "d1d5");
        assert!(see(&board, &move_gen, &mv) < 0);
    }

    #[test]
    fn equal_trade_is_zero() {
        // white rook takes a rook defended by another rook of equal value
        let board = Board::from_fen("3rk3/8/8/3r4/8/8/8/3RK3 w - - 0 1").unwrap();
        let move_gen = MoveGenerator::new();
        let mv = find_move(&board, &move_gen, "d1d5");
        assert_eq!(see(&board, &move_gen, &mv), 0);
    }
}
