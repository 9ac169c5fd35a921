/*
 * board.rs
 * Part of the byte-knight project
 * Created Date: Wednesday, August 21st 2024
 * Author: Paul Tsouchlos (DeveloperPaul123) (developer.paul.123@gmail.com)
 * -----
 * Last Modified: Tue Nov 26 2024
 * -----
 * Copyright (c) 2024 Paul Tsouchlos (DeveloperPaul123)
 * GNU General Public License v3.0 or later
 * https://www.gnu.org/licenses/gpl-3.0-standalone.html
 *
 */

use std::iter::zip;

use anyhow::Result;

use crate::bitboard_helpers;
use crate::board_state::BoardState;
use crate::definitions::{CastlingAvailability, MAX_MOVE_RULE, MAX_REPETITION_COUNT, SPACE};
use crate::fen::FenError;
use crate::move_generation::MoveGenerator;
use crate::move_history::BoardHistory;
use crate::move_list::MoveList;
use crate::moves::Move;
use crate::square::Square;
use crate::zobrist::{ZobristHash, ZobristRandomValues};

use super::definitions::NumberOf;
use super::fen;
use super::side::Side;
use super::{bitboard::Bitboard, pieces::Piece};

/// Represents a chess board position.
pub struct Board {
    piece_bitboards: [[Bitboard; NumberOf::PIECE_TYPES]; NumberOf::SIDES],
    pub(crate) history: BoardHistory,
    state: BoardState,
    zobrist_values: ZobristRandomValues,
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            piece_bitboards: self.piece_bitboards,
            history: self.history.clone(),
            state: self.state,
            zobrist_values: self.zobrist_values.clone(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::default_board()
    }
}

// Private methods
impl Board {
    /// Create a new board in the default, *uninitialized*, state.
    fn new() -> Self {
        Board {
            piece_bitboards: [[Bitboard::default(); NumberOf::PIECE_TYPES]; NumberOf::SIDES],
            history: BoardHistory::new(),
            state: BoardState::new(),
            zobrist_values: ZobristRandomValues::new(),
        }
    }

    pub(crate) fn initialize(&mut self) {
        self.state.zobrist_hash = self.initialize_zobrist_hash();
    }

    fn initialize_zobrist_hash(&self) -> ZobristHash {
        // create the initial zobrist hash based on the starting position
        // for each piece on the board, get the corresponding zobrist value and xor it with the hash
        // for each side to move, xor the hash with the zobrist value for the side
        // for each castling right, xor the hash with the zobrist value for the castling right
        // for the en passant square, xor the hash with the zobrist value for the en passant square
        // Initialize the zobrist hash to 0
        let mut zobrist_hash = ZobristHash::default();

        // XOR the zobrist values for each piece on the board
        for side in 0..NumberOf::SIDES {
            for piece in 0..NumberOf::PIECE_TYPES {
                let mut bitboard = self.piece_bitboards[side][piece];

                while bitboard != 0 {
                    let square = bitboard_helpers::next_bit(&mut bitboard);
                    zobrist_hash ^= self.zobrist_values.get_piece_value(piece, side, square);
                }
            }
        }

        // XOR the zobrist value for the side to move
        zobrist_hash ^= self
            .zobrist_values
            .get_side_value(self.side_to_move() as usize);

        // XOR the zobrist values for castling rights
        zobrist_hash ^= self
            .zobrist_values
            .get_castling_value(self.castling_rights() as usize);

        // XOR the zobrist value for the en passant square, if any
        zobrist_hash ^= self
            .zobrist_values
            .get_en_passant_value(self.state.en_passant_square);

        zobrist_hash
    }

    /// Initialize bitboards for a given side
    fn initialize_piece_bbs(&mut self, side: Side) {
        // Set up the board with the starting position
        match side {
            Side::White => self.initialize_white_bbs(),
            Side::Black => self.initialize_black_bbs(),
            _ => panic!("Invalid side"),
        }
    }

    /// Initialize bitboard for all white pieces
    fn initialize_white_bbs(&mut self) {
        let index = Side::White as usize;
        // Set up the board with the starting position
        self.piece_bitboards[index][Piece::Pawn as usize] = Bitboard::new(0xFF00);
        self.piece_bitboards[index][Piece::Knight as usize] = Bitboard::new(0x42);
        self.piece_bitboards[index][Piece::Bishop as usize] = Bitboard::new(0x24);
        self.piece_bitboards[index][Piece::Rook as usize] = Bitboard::new(0x81);
        self.piece_bitboards[index][Piece::Queen as usize] = Bitboard::new(0x8);
        self.piece_bitboards[index][Piece::King as usize] = Bitboard::new(0x10);
    }

    /// Initialize bitboard for all black pieces
    fn initialize_black_bbs(&mut self) {
        let index = Side::Black as usize;
        // Set up the board with the starting position
        self.piece_bitboards[index][Piece::Pawn as usize] = Bitboard::new(0xFF000000000000);
        self.piece_bitboards[index][Piece::Knight as usize] = Bitboard::new(0x4200000000000000);
        self.piece_bitboards[index][Piece::Bishop as usize] = Bitboard::new(0x2400000000000000);
        self.piece_bitboards[index][Piece::Rook as usize] = Bitboard::new(0x8100000000000000);
        self.piece_bitboards[index][Piece::Queen as usize] = Bitboard::new(0x800000000000000);
        self.piece_bitboards[index][Piece::King as usize] = Bitboard::new(0x1000000000000000);
    }

    pub(crate) fn mut_piece_bitboard(&mut self, piece: Piece, side: Side) -> &mut Bitboard {
        &mut self.piece_bitboards[side as usize][piece as usize]
    }

    pub(crate) fn set_piece_square(&mut self, piece: usize, side: usize, square: u8) {
        self.piece_bitboards[side][piece].set_square(square);
    }

    /// Sets the side to move and updates the zobrist hash.
    pub(crate) fn set_side_to_move(&mut self, side: Side) {
        // undo the current side to move in the hash
        self.state.zobrist_hash ^= self
            .zobrist_values
            .get_side_value(self.state.side_to_move as usize);
        // set the new side to move
        self.state.side_to_move = side;
        // update zobrist hash with the new side to move
        self.state.zobrist_hash ^= self
            .zobrist_values
            .get_side_value(self.state.side_to_move as usize);
    }

    /// Set the en passant square and update the zobrist hash.
    pub(crate) fn set_en_passant_square(&mut self, square: Option<u8>) {
        self.state.zobrist_hash ^= self
            .zobrist_values
            .get_en_passant_value(self.state.en_passant_square);
        self.state.en_passant_square = square;
        self.state.zobrist_hash ^= self
            .zobrist_values
            .get_en_passant_value(self.state.en_passant_square);
    }

    pub(crate) fn set_half_move_clock(&mut self, half_move_clock: u32) {
        self.state.half_move_clock = half_move_clock;
    }

    pub(crate) fn set_full_move_number(&mut self, full_move_number: u32) {
        self.state.full_move_number = full_move_number;
    }

    pub(crate) fn set_castling_rights(&mut self, castling_rights: u8) {
        self.state.zobrist_hash ^= self
            .zobrist_values
            .get_castling_value(self.state.castling_rights as usize);
        self.state.castling_rights = castling_rights;
        self.state.zobrist_hash ^= self
            .zobrist_values
            .get_castling_value(self.state.castling_rights as usize);
    }

    pub(crate) fn update_zobrist_hash_for_piece(&mut self, square: u8, piece: Piece, side: Side) {
        self.state.zobrist_hash ^=
            self.zobrist_values
                .get_piece_value(piece as usize, side as usize, square as usize);
    }

    fn set_zobrist_hash(&mut self, hash: u64) {
        self.state.zobrist_hash = hash;
    }

    pub(crate) fn board_state(&self) -> &BoardState {
        &self.state
    }

    pub(crate) fn set_board_state(&mut self, state: BoardState) {
        self.state = state;
    }
}

// Public API
impl Board {
    /// Create a new board with the default starting position.
    pub fn default_board() -> Board {
        let mut board = Board::new();
        // Set up the board with the starting position
        // White pieces
        board.initialize_piece_bbs(Side::White);
        // Black pieces
        board.initialize_piece_bbs(Side::Black);
        board.set_en_passant_square(None);
        board.set_half_move_clock(0);
        board.set_full_move_number(1);
        board.set_side_to_move(Side::White);
        board.set_castling_rights(CastlingAvailability::ALL);
        board.set_zobrist_hash(board.initialize_zobrist_hash());
        board
    }

    /// Create a new board from a FEN string.
    ///
    /// # Arguments
    ///
    /// - `fen` - A FEN string representing the board state.
    ///
    /// # Returns
    ///
    /// - a Result containing a [`Board`] if parsing was successful or
    ///   [`FenError`] if the FEN string is invalid or cannot be parsed.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut board = Board::new();

        // parse the FEN string
        let fen_parts = fen::split_fen_string(fen);
        match fen_parts {
            Ok(parts) => {
                let fen_part_parsers = fen::FEN_PART_PARSERS;
                for (part, parser) in zip(parts, fen_part_parsers) {
                    parser(&mut board, &part)?;
                }
            }
            Err(e) => {
                return Err(e);
            }
        }

        // the parser initializes most of the board state, but we need to set the zobrist hash
        // initializing the board will handle initializing anything that isn't set by the FEN parser
        board.initialize();

        Ok(board)
    }

    /// Convert the board to a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        // Piece placement
        fen.push_str(&fen::piece_placement_to_fen(self));
        fen.push(SPACE);
        // Active color
        fen.push_str(&fen::active_color_to_fen(self));
        fen.push(SPACE);
        // Castling availability
        fen.push_str(&fen::castling_availability_to_fen(self));
        fen.push(SPACE);
        // En passant target square
        fen.push_str(&fen::en_passant_target_square_to_fen(self));
        fen.push(SPACE);
        // Halfmove clock
        fen.push_str(&fen::halfmove_clock_to_fen(self));
        fen.push(SPACE);
        // Fullmove number
        fen.push_str(&fen::fullmove_number_to_fen(self));

        fen
    }

    /// Returns the all pieces of this [`Board`].
    /// This is also known as the occupancy bitboard.
    pub fn all_pieces(&self) -> Bitboard {
        let mut all_pieces = Bitboard::default();
        for piece_type in 0..NumberOf::PIECE_TYPES {
            for side in 0..NumberOf::SIDES {
                all_pieces |= self.piece_bitboards[side][piece_type];
            }
        }
        all_pieces
    }

    /// Returns all the pieces of a given side in a single [`Bitboard`].
    pub fn pieces(&self, side: Side) -> Bitboard {
        let mut pieces = Bitboard::default();
        for piece_type in 0..NumberOf::PIECE_TYPES {
            pieces |= self.piece_bitboards[side as usize][piece_type];
        }
        pieces
    }

    /// Returns the white pieces of this [`Board`] in a single [`Bitboard`].
    pub fn white_pieces(&self) -> Bitboard {
        self.pieces(Side::White)
    }

    /// Returns the black pieces of this [`Board`] in a single [`Bitboard`].
    pub fn black_pieces(&self) -> Bitboard {
        self.pieces(Side::Black)
    }

    /// Returns the bitboard for a specific piece and side.
    pub fn piece_bitboard(&self, piece: Piece, side: Side) -> &Bitboard {
        debug_assert!(side != Side::Both);
        &self.piece_bitboards[side as usize][piece as usize]
    }

    /// Returns the current square of the king for a given side.
    pub fn king_square(&self, side: Side) -> u8 {
        let king_bb = self.piece_bitboard(Piece::King, side);
        bitboard_helpers::next_bit(&mut king_bb.clone()) as u8
    }

    /// Find what piece is on a given square.
    ///
    /// # Arguments
    ///
    /// - `square` - The square to check.
    ///
    /// # Returns
    ///
    /// - Optional tuple of the piece and the side that the piece belongs to. (Piece, Side)
    pub fn piece_on_square(&self, square: u8) -> Option<(Piece, Side)> {
        for piece in 0..NumberOf::PIECE_TYPES {
            for side in 0..NumberOf::SIDES {
                if self.piece_bitboards[side][piece].is_square_occupied(square) {
                    return Some((
                        Piece::try_from(piece as u8).unwrap(),
                        Side::try_from(side as u8).unwrap(),
                    ));
                }
            }
        }
        None
    }

    /// Returns the side to move of this [`Board`].
    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move
    }

    /// Returns the en passant square of this [`Board`] (if it exists)
    pub fn en_passant_square(&self) -> Option<u8> {
        self.state.en_passant_square
    }

    /// Returns the half move clock of this [`Board`].
    pub fn half_move_clock(&self) -> u32 {
        self.state.half_move_clock
    }

    /// Returns the full move number of this [`Board`].
    pub fn full_move_number(&self) -> u32 {
        self.state.full_move_number
    }

    /// Returns the castling rights of this [`Board`].
    pub fn castling_rights(&self) -> u8 {
        self.state.castling_rights
    }

    /// Returns the Zobrist hash of this [`Board`].
    pub fn zobrist_hash(&self) -> u64 {
        self.state.zobrist_hash
    }

    /// Checks if a given square is empty.
    pub fn is_square_empty(&self, square: &Square) -> bool {
        !self
            .all_pieces()
            .is_square_occupied(square.to_square_index())
    }

    /// Helper function to check if a given side has kingside castling rights.
    ///
    /// # Arguments
    ///
    /// - `side` - The side to check.
    ///
    /// # Returns
    ///
    /// - `true` if the side has kingside castling rights, otherwise `false`.
    pub fn can_castle_kingside(&self, side: Side) -> bool {
        let castling_rights = self.castling_rights();
        match side {
            Side::White => castling_rights & CastlingAvailability::WHITE_KINGSIDE != 0,
            Side::Black => castling_rights & CastlingAvailability::BLACK_KINGSIDE != 0,
            Side::Both => panic!("Cannot check if both sides can castle kingside"),
        }
    }

    /// Helper function to check if a given side has queenside castling rights.
    ///
    /// # Arguments
    ///
    /// - `side` - The side to check.
    ///
    /// # Returns
    ///
    /// - `true` if the side has queenside castling rights, otherwise `false`.
    pub fn can_castle_queenside(&self, side: Side) -> bool {
        let castling_rights = self.castling_rights();
        match side {
            Side::White => castling_rights & CastlingAvailability::WHITE_QUEENSIDE != 0,
            Side::Black => castling_rights & CastlingAvailability::BLACK_QUEENSIDE != 0,
            Side::Both => panic!("Cannot check if both sides can castle queenside"),
        }
    }

    /// Check if the side to move is in check.
    ///
    /// # Arguments
    ///
    /// - `move_gen` - The move generator to use for generating moves.
    ///
    /// # Returns
    ///
    /// - `true` if the side to move is in check, otherwise `false`.
    pub fn is_in_check(&self, move_gen: &MoveGenerator) -> bool {
        // pseudo legal check
        // check if we are in check
        // get the kings location and check if that square is attacked by the opponent
        let mut king_bb = *self.piece_bitboard(Piece::King, self.side_to_move());
        let king_square = bitboard_helpers::next_bit(&mut king_bb) as u8;
        move_gen.is_square_attacked(
            self,
            &Square::from_square_index(king_square),
            Side::opposite(self.side_to_move()),
        )
    }

    /// Check if the side to move is in checkmate.
    pub fn is_checkmate(&self, move_gen: &MoveGenerator) -> bool {
        // if the side to move is not in check, it's not checkmate
        if !self.is_in_check(move_gen) {
            return false;
        }

        let king_bb = self.piece_bitboard(Piece::King, self.side_to_move());
        let king_sq = bitboard_helpers::next_bit(&mut king_bb.clone());

        // check mate happens when we're in check and all the legal moves are illegal but we
        // don't want to try all the moves to check their legality
        // instead we can get king moves only and then check if the possible squares the king can move to are attacked
        let mut occupancy = self.all_pieces();
        let us = self.side_to_move();

        let king_attacks = move_gen.get_piece_attacks(Piece::King, king_sq as u8, us, &occupancy);
        let our_pieces = self.pieces(self.side_to_move());
        let mut king_attacks = king_attacks & !our_pieces;

        // modify occupancy to exclude the king square
        occupancy.clear_square(king_sq as u8);

        // check if the king can move to any of the squares it's attacking
        while king_attacks > 0 {
            let square = bitboard_helpers::next_bit(&mut king_attacks);
            if move_gen.is_square_attacked_with_occupancy(
                self,
                &Square::from_square_index(square as u8),
                Side::opposite(self.side_to_move()),
                &occupancy,
            ) {
                return true;
            }
        }
        false
    }

    /// Get the color of the piece on a given square.
    ///
    /// Returns `Some(Side)` if the square is occupied, otherwise `None`.
    pub fn color_on(&self, square: u8) -> Option<Side> {
        let white_pieces = self.white_pieces();
        let black_pieces = self.black_pieces();
        if white_pieces.is_square_occupied(square) {
            Some(Side::White)
        } else if black_pieces.is_square_occupied(square) {
            Some(Side::Black)
        } else {
            None
        }
    }

    /// Checks for draws for the current [`Board`].
    ///
    /// This function checks for:
    /// - Fifty move rule
    /// - Insufficient material
    /// - Threefold repetition
    pub fn is_draw(&self) -> bool {
        self.is_draw_by_fifty_move_rule() || self.insufficient_material() || self.is_repetition()
    }

    /// Check if the game is a draw by insufficient material. We use the FIDE rules for this check.
    ///
    /// Returns true if the game is a draw by insufficient material, otherwise false.
    pub fn insufficient_material(&self) -> bool {
        // if any side has a Queen, Rook or Pawn, there's sufficient material
        let queen_bbs = *self.piece_bitboard(Piece::Queen, Side::Black)
            | *self.piece_bitboard(Piece::Queen, Side::White);
        let rook_bbs = *self.piece_bitboard(Piece::Rook, Side::Black)
            | *self.piece_bitboard(Piece::Rook, Side::White);
        let pawn_bbs = *self.piece_bitboard(Piece::Pawn, Side::Black)
            | *self.piece_bitboard(Piece::Pawn, Side::White);

        if (queen_bbs | rook_bbs | pawn_bbs).number_of_occupied_squares() > 0 {
            return false;
        }

        // check bishops and knights
        let white_bishops = self.piece_bitboard(Piece::Bishop, Side::White);
        let black_bishops = self.piece_bitboard(Piece::Bishop, Side::Black);
        let white_knights = self.piece_bitboard(Piece::Knight, Side::White);
        let black_knights = self.piece_bitboard(Piece::Knight, Side::Black);

        let wb_count = white_bishops.number_of_occupied_squares();
        let bb_count = black_bishops.number_of_occupied_squares();
        let wn_count = white_knights.number_of_occupied_squares();
        let bn_count = black_knights.number_of_occupied_squares();

        match (wb_count, bb_count, wn_count, bn_count) {
            // only kings left
            (0, 0, 0, 0) => true,
            // single bishops
            (1, 0, 0, 0) => true,
            (0, 1, 0, 0) => true,
            // single knight
            (0, 0, 1, 0) => true,
            (0, 0, 0, 1) => true,
            (1, 1, 0, 0) => {
                // bishops on the same color
                Square::from_bitboard(white_bishops).color()
                    == Square::from_bitboard(black_bishops).color()
            }
            _ => false,
        }
    }

    /// Check if the game is a draw by the fifty move rule.
    pub fn is_draw_by_fifty_move_rule(&self) -> bool {
        self.half_move_clock() >= MAX_MOVE_RULE
    }

    /// Check if the game is a draw by threefold repetition.
    pub fn is_repetition(&self) -> bool {
        let mut repetition_count = 0;
        // go through the history and check if the current position has been repeated
        for previous_state in self.history.iter().rev().skip(1) {
            // we found a match, increment the repetition count
            if previous_state.zobrist_hash == self.zobrist_hash() {
                repetition_count += 1;
                if repetition_count >= MAX_REPETITION_COUNT {
                    // break out early
                    return true;
                }
            }

            // we only need to go back up to the last pawn move, castle, or capture as these moves reset the half-move clock
            // beyond this point, there can't be a repeated position
            if previous_state.half_move_clock == 0 {
                return false;
            }
        }

        repetition_count >= 2
    }

    /// Check if a given move is legal. This function does not alter the current board state.
    /// Instead it makes a copy of the current state and tries to make the move. There is a performance
    /// penalty for this, so use this function sparingly.
    pub fn is_legal(&self, mv: &Move, move_gen: &MoveGenerator) -> bool {
        // check if a move is legal without altering the current board state
        let mut board_copy = self.clone();
        board_copy.make_move(mv, move_gen).is_ok()
    }

    /// Check if a list of moves are legal. This function does not alter the current board state.
    pub fn are_legal(&self, list: &MoveList, move_gen: &MoveGenerator) -> bool {
        // check if a list of moves are legal without altering the current board state
        let mut board_copy = self.clone();
        for mv in list.iter() {
            if board_copy.make_move(mv, move_gen).is_err() {
                return false;
            }
        }
        true
    }

    /// Counts how many times the current position (by Zobrist hash) has occurred
    /// earlier in the game history, stopping at the last irreversible move.
    fn repetition_count(&self) -> usize {
        let mut repetition_count = 0;
        for previous_state in self.history.iter().rev().skip(1) {
            if previous_state.zobrist_hash == self.zobrist_hash() {
                repetition_count += 1;
            }
            if previous_state.half_move_clock == 0 {
                break;
            }
        }
        repetition_count
    }

    /// Check if the game is a draw by fivefold repetition.
    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetition_count() >= 4
    }

    /// Check if the game is a draw by the 75-move rule (150 half-moves without
    /// a capture or pawn move).
    pub fn is_75_move_rule(&self) -> bool {
        self.half_move_clock() >= 150
    }

    /// Check if the side to move has no legal moves and is not in check.
    pub fn is_stalemate(&self, move_gen: &MoveGenerator) -> bool {
        if self.is_in_check(move_gen) {
            return false;
        }
        let mut move_list = MoveList::new();
        move_gen.generate_legal_moves(self, &mut move_list);
        move_list.is_empty()
    }

    /// Returns the square the given side's king sits on, if it is on the board.
    pub fn king(&self, side: Side) -> Option<Square> {
        let king_bb = *self.piece_bitboard(Piece::King, side);
        if king_bb.number_of_occupied_squares() == 0 {
            return None;
        }
        Some(Square::from_bitboard(&king_bb))
    }

    /// Make a null move: flips the side to move and clears the en passant square,
    /// without moving any piece. Used by search to probe threats without playing a move.
    pub fn push_null_move(&mut self) {
        self.null_move();
    }

    /// Undo a null move previously made with [`Self::push_null_move`].
    pub fn pop_null_move(&mut self) -> Result<()> {
        self.unmake_move()
    }
}
