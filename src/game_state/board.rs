//! The mutable board: 64 slots, per-side rosters, and move application.
//!
//! `Board` owns every piece by value in a fixed array indexed by square; the
//! two rosters are ordered lists of occupied squares and are the
//! authoritative per-side piece collections for move enumeration and capture
//! bookkeeping. `apply`/`undo` mutate in place and are exact inverses, so
//! search explores deep trees without copying the board per node; cloning is
//! a flat buffer copy reserved for search roots.
//!
//! Legality is decided by a single oracle: speculatively apply a pseudo-legal
//! move, test whether the mover's own king is in check, undo. The same
//! pattern serves normal play, castling safety, search, and terminal
//! detection.

use std::collections::BTreeSet;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_move::{ChessMove, MoveType};
use crate::game_state::chess_types::{
    PieceClass, PieceRecord, PieceTeam, Square, BOARD_SQUARES,
};
use crate::movegen::attacks::attack_squares;
use crate::movegen::move_generator::pseudo_legal_moves;
use crate::notation::squares_to_notation;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    squares: [Option<PieceRecord>; BOARD_SQUARES],
    light_roster: Vec<Square>,
    dark_roster: Vec<Square>,
    /// Number of plies applied since game start minus plies undone.
    ply: u16,
}

impl Board {
    /// An empty board, for building test positions through `set_occupant`.
    pub fn empty() -> Self {
        Board {
            squares: [None; BOARD_SQUARES],
            light_roster: Vec::new(),
            dark_roster: Vec::new(),
            ply: 0,
        }
    }

    /// The standard starting position.
    pub fn new_game() -> Self {
        use PieceClass::*;

        let mut board = Board::empty();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        // Light back rank (row 0) and pawns (row 1).
        for (file, &class) in back_rank.iter().enumerate() {
            board.place(PieceRecord::new(class, PieceTeam::Light, file as Square));
        }
        for file in 0..8u8 {
            board.place(PieceRecord::new(Pawn, PieceTeam::Light, 8 + file));
        }

        // Dark pawns (row 6) and back rank (row 7).
        for file in 0..8u8 {
            board.place(PieceRecord::new(Pawn, PieceTeam::Dark, 48 + file));
        }
        for (file, &class) in back_rank.iter().enumerate() {
            board.place(PieceRecord::new(class, PieceTeam::Dark, 56 + file as Square));
        }

        board
    }

    fn place(&mut self, piece: PieceRecord) {
        let sq = piece.square;
        self.roster_mut(piece.team).push(sq);
        self.squares[usize::from(sq)] = Some(piece);
    }

    /// Occupant of a square, without bounds checking (`sq` must be `< 64`;
    /// every internally generated square is).
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&PieceRecord> {
        self.squares[usize::from(sq)].as_ref()
    }

    /// Bounds-checked read access to a square's occupant.
    pub fn occupant(&self, sq: Square) -> Result<Option<&PieceRecord>, ChessErrors> {
        if usize::from(sq) >= BOARD_SQUARES {
            return Err(ChessErrors::InvalidSquareIndex(usize::from(sq)));
        }
        Ok(self.piece_at(sq))
    }

    /// Bounds-checked write access to a square's occupant. Keeps the rosters
    /// in sync and rebinds the stored record's position to `sq`.
    pub fn set_occupant(
        &mut self,
        sq: Square,
        piece: Option<PieceRecord>,
    ) -> Result<(), ChessErrors> {
        if usize::from(sq) >= BOARD_SQUARES {
            return Err(ChessErrors::InvalidSquareIndex(usize::from(sq)));
        }
        if let Some(old) = self.squares[usize::from(sq)] {
            self.remove_from_roster(old.team, sq);
        }
        if let Some(mut new) = piece {
            new.square = sq;
            self.place(new);
        } else {
            self.squares[usize::from(sq)] = None;
        }
        Ok(())
    }

    /// Ordered roster of occupied squares for one side.
    pub fn roster(&self, team: PieceTeam) -> &Vec<Square> {
        match team {
            PieceTeam::Light => &self.light_roster,
            PieceTeam::Dark => &self.dark_roster,
        }
    }

    fn roster_mut(&mut self, team: PieceTeam) -> &mut Vec<Square> {
        match team {
            PieceTeam::Light => &mut self.light_roster,
            PieceTeam::Dark => &mut self.dark_roster,
        }
    }

    pub fn ply(&self) -> u16 {
        self.ply
    }

    /// Removes `sq` from a side's roster, returning the index it held.
    fn remove_from_roster(&mut self, team: PieceTeam, sq: Square) -> Option<usize> {
        let roster = self.roster_mut(team);
        let index = roster.iter().position(|&entry| entry == sq)?;
        roster.remove(index);
        Some(index)
    }

    /// Rewrites a side's roster entry in place, preserving roster order.
    fn update_roster_entry(&mut self, team: PieceTeam, from: Square, to: Square) {
        if let Some(entry) = self.roster_mut(team).iter_mut().find(|e| **e == from) {
            *entry = to;
        }
    }

    /// Relocates a piece between squares without touching its move counter.
    /// Used for the rook half of castling, in both directions.
    fn relocate(&mut self, from: Square, to: Square) -> Result<(), ChessErrors> {
        let mut piece = self.squares[usize::from(from)]
            .take()
            .ok_or(ChessErrors::PieceMissingAtSquare(from))?;
        piece.square = to;
        self.update_roster_entry(piece.team, from, to);
        self.squares[usize::from(to)] = Some(piece);
        Ok(())
    }

    /// Applies one ply, binding everything `undo` needs into `mv`.
    ///
    /// The moving piece's own resolution (position, counters, en-passant
    /// vulnerability, move-type classification) runs first; the returned
    /// `MoveType` then drives board bookkeeping: capture binding, en passant
    /// victim removal, castling rook relocation, and the stamping/expiry of
    /// en-passant flags. A `Promotion` result leaves the pawn on the far
    /// rank; committing the replacement piece is the separate `promote` step
    /// driven by the consuming game loop.
    ///
    /// # Arguments
    /// * `mv` - Freshly built scratch move (source, destination, team).
    ///
    /// # Returns
    /// * `Ok(MoveType)` - The resolved move kind.
    /// * `Err(ChessErrors)` - If the source square is empty or internal
    ///   bookkeeping finds the board inconsistent (core bug).
    pub fn apply(&mut self, mv: &mut ChessMove) -> Result<MoveType, ChessErrors> {
        self.ply += 1;
        let src = mv.src;
        let dst = mv.dst;

        let mut piece = self.squares[usize::from(src)]
            .ok_or(ChessErrors::PieceMissingAtSquare(src))?;
        // Pre-move snapshot: restoring this is the whole undo story for the
        // mover, promotions included.
        mv.piece = Some(piece);

        let move_type = piece.resolve_move(self, dst);

        match move_type {
            MoveType::Regular
            | MoveType::RookFirstMove
            | MoveType::KingFirstMove
            | MoveType::Promotion => {
                mv.captured = self.squares[usize::from(dst)];
            }
            MoveType::PawnFirstMove => {
                mv.captured = self.squares[usize::from(dst)];
                // A two-square advance survives exactly one opponent ply.
                if piece.en_passable {
                    piece.en_passable_at = self.ply + 1;
                }
            }
            MoveType::EnPassant => {
                // The victim is not on the destination square but directly
                // behind it; clear that square explicitly.
                let behind = (i16::from(dst) - mv.team.pawn_direction()) as Square;
                mv.captured = self.squares[usize::from(behind)].take();
            }
            MoveType::CastleShort => {
                self.relocate(src + 3, src + 1)?;
            }
            MoveType::CastleLong => {
                self.relocate(src - 4, src - 1)?;
            }
        }

        // Captured pieces leave their side's roster; remember where they sat
        // so undo can reinsert them at the same index.
        if let Some(captured) = mv.captured {
            mv.captured_roster_index = self.remove_from_roster(captured.team, captured.square);
        }

        // Move the slot occupancy and the mover's roster entry.
        self.squares[usize::from(dst)] = Some(piece);
        self.squares[usize::from(src)] = None;
        self.update_roster_entry(mv.team, src, dst);

        // En-passant vulnerability lasts exactly one opposing ply: expire the
        // flag on every opposing pawn that did not just create it.
        let opponent = mv.team.opponent();
        let expiry = self.ply + 1;
        for slot in self.squares.iter_mut() {
            if let Some(p) = slot {
                if p.team == opponent
                    && p.class == PieceClass::Pawn
                    && p.en_passable
                    && p.en_passable_at != expiry
                {
                    p.en_passable = false;
                }
            }
        }

        mv.move_type = Some(move_type);
        Ok(move_type)
    }

    /// Reverses one ply. Exact inverse of `apply`, field for field.
    ///
    /// Restores the pre-move snapshot at the source square (for a promotion
    /// this reconstructs the original pawn whether or not the promoted piece
    /// was committed), reinserts any captured piece at its recorded roster
    /// index, reverses the castling rook relocation, and re-derives every
    /// pawn's en-passant flag from `en_passable_at` against the
    /// pre-decrement ply counter.
    pub fn undo(&mut self, mv: &ChessMove) -> Result<(), ChessErrors> {
        if self.ply == 0 {
            return Err(ChessErrors::NothingToUndo);
        }
        let move_type = mv.move_type.ok_or(ChessErrors::MoveNotApplied)?;
        let snapshot = mv.piece.ok_or(ChessErrors::MoveNotApplied)?;

        // Discard whatever sits on the destination (the moved piece, or the
        // promoted piece) and restore the mover's snapshot at the source.
        self.squares[usize::from(mv.dst)] = None;
        self.squares[usize::from(mv.src)] = Some(snapshot);
        self.update_roster_entry(mv.team, mv.dst, mv.src);

        // Send the castling rook back to its corner.
        match move_type {
            MoveType::CastleShort => self.relocate(mv.src + 1, mv.src + 3)?,
            MoveType::CastleLong => self.relocate(mv.src - 1, mv.src - 4)?,
            _ => (),
        }

        // Re-instantiate the captured piece on its original square and at
        // its original roster position.
        if let Some(captured) = mv.captured {
            self.squares[usize::from(captured.square)] = Some(captured);
            let roster = self.roster_mut(captured.team);
            match mv.captured_roster_index {
                Some(index) if index <= roster.len() => roster.insert(index, captured.square),
                _ => roster.push(captured.square),
            }
        }

        // Re-derive en-passant flags: a pawn is vulnerable in the restored
        // state exactly when its window expires at the ply being undone.
        let undone_ply = self.ply;
        for slot in self.squares.iter_mut() {
            if let Some(p) = slot {
                if p.class == PieceClass::Pawn {
                    p.en_passable = p.en_passable_at == undone_ply;
                }
            }
        }

        self.ply -= 1;
        Ok(())
    }

    /// Commits a promotion: replaces the pawn on the move's destination with
    /// a fresh piece of the promotion letter's class (`r`/`k`/`b`/`q`, where
    /// `k` is the knight).
    pub fn promote(&mut self, mv: &mut ChessMove, letter: char) -> Result<(), ChessErrors> {
        let class = match letter.to_ascii_lowercase() {
            'r' => PieceClass::Rook,
            'k' => PieceClass::Knight,
            'b' => PieceClass::Bishop,
            'q' => PieceClass::Queen,
            other => return Err(ChessErrors::InvalidPromotionTarget(other)),
        };
        let pawn = self.squares[usize::from(mv.dst)]
            .ok_or(ChessErrors::PieceMissingAtSquare(mv.dst))?;
        let promoted = PieceRecord::new(class, pawn.team, mv.dst);
        self.squares[usize::from(mv.dst)] = Some(promoted);
        mv.promotion = Some(promoted);
        Ok(())
    }

    /// Square of a side's king, if present (test positions may omit it).
    pub fn find_king(&self, team: PieceTeam) -> Option<Square> {
        self.roster(team)
            .iter()
            .copied()
            .find(|&sq| matches!(self.piece_at(sq), Some(p) if p.class == PieceClass::King))
    }

    /// Whether `team`'s king square is attacked by any opposing piece.
    pub fn is_check(&self, team: PieceTeam) -> bool {
        let king_sq = match self.find_king(team) {
            Some(sq) => sq,
            None => return false,
        };
        attack_squares(self, team.opponent(), true).contains(&king_sq)
    }

    /// All truly legal moves for `team`, as 4-character notation strings.
    ///
    /// Every pseudo-legal candidate is speculatively applied, rejected if it
    /// leaves the mover's own king in check, and undone. No legal moves for
    /// the side to move means checkmate when in check, else stalemate.
    pub fn get_legal_moves(&mut self, team: PieceTeam) -> Result<BTreeSet<String>, ChessErrors> {
        let mut result = BTreeSet::new();
        let roster = self.roster(team).clone();
        for src in roster {
            for dst in pseudo_legal_moves(self, src) {
                let mut mv = ChessMove::new(src, dst, team);
                self.apply(&mut mv)?;
                let safe = !self.is_check(team);
                self.undo(&mv)?;
                if safe {
                    result.insert(squares_to_notation(src, dst)?);
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::notation::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn place(board: &mut Board, class: PieceClass, team: PieceTeam, at: &str) {
        let square = sq(at);
        board
            .set_occupant(square, Some(PieceRecord::new(class, team, square)))
            .expect("test square should be in range");
    }

    /// Applies a notation move for `team`, returning the scratch move.
    fn play(board: &mut Board, team: PieceTeam, text: &str) -> ChessMove {
        let mut mv = ChessMove::from_notation(text, team).expect("test move should parse");
        board.apply(&mut mv).expect("test move should apply");
        mv
    }

    #[test]
    fn opening_position_has_twenty_moves() {
        let mut dut = Board::new_game();
        let moves = dut.get_legal_moves(PieceTeam::Light).expect("should enumerate");
        assert_eq!(moves.len(), 20);
        // 16 pawn moves + 4 knight moves.
        assert!(moves.contains("e2e4"));
        assert!(moves.contains("g1f3"));
        assert!(!moves.contains("e1e2"));
    }

    #[test]
    fn apply_undo_restores_the_start_position() {
        let mut dut = Board::new_game();
        let before = dut.clone();

        let mv = play(&mut dut, PieceTeam::Light, "e2e4");
        assert_ne!(dut, before);
        assert_eq!(dut.ply(), 1);

        dut.undo(&mv).expect("undo should succeed");
        assert_eq!(dut, before);
        assert_eq!(dut.ply(), 0);
    }

    #[test]
    fn nested_apply_undo_is_exact_through_captures() {
        let mut dut = Board::new_game();
        let before = dut.clone();

        // 1. e4 d5 2. exd5 Qxd5 ... then unwind the whole line.
        let m1 = play(&mut dut, PieceTeam::Light, "e2e4");
        let after_one = dut.clone();
        let m2 = play(&mut dut, PieceTeam::Dark, "d7d5");
        let m3 = play(&mut dut, PieceTeam::Light, "e4d5");
        let m4 = play(&mut dut, PieceTeam::Dark, "d8d5");
        assert_eq!(dut.ply(), 4);

        dut.undo(&m4).expect("undo should succeed");
        dut.undo(&m3).expect("undo should succeed");
        dut.undo(&m2).expect("undo should succeed");
        assert_eq!(dut, after_one);
        dut.undo(&m1).expect("undo should succeed");
        assert_eq!(dut, before);
    }

    #[test]
    fn undo_on_fresh_board_is_a_fatal_precondition() {
        let mut dut = Board::new_game();
        let mv = ChessMove::from_notation("e2e4", PieceTeam::Light).expect("should parse");
        assert!(matches!(dut.undo(&mv), Err(ChessErrors::NothingToUndo)));
    }

    #[test]
    fn en_passant_window_lasts_one_reply() {
        let mut dut = Board::empty();
        place(&mut dut, PieceClass::King, PieceTeam::Light, "e1");
        place(&mut dut, PieceClass::King, PieceTeam::Dark, "e8");
        place(&mut dut, PieceClass::Pawn, PieceTeam::Light, "e2");
        place(&mut dut, PieceClass::Pawn, PieceTeam::Dark, "d4");

        play(&mut dut, PieceTeam::Light, "e2e4");
        let replies = dut.get_legal_moves(PieceTeam::Dark).expect("should enumerate");
        assert!(replies.contains("d4e3"), "en passant capture must be offered");

        // Dark declines; the vulnerability must be gone one ply later.
        play(&mut dut, PieceTeam::Dark, "e8e7");
        play(&mut dut, PieceTeam::Light, "e1e2");
        let later = dut.get_legal_moves(PieceTeam::Dark).expect("should enumerate");
        assert!(!later.contains("d4e3"), "en passant window must have closed");
    }

    #[test]
    fn en_passant_capture_applies_and_undoes_exactly() {
        let mut dut = Board::empty();
        place(&mut dut, PieceClass::King, PieceTeam::Light, "e1");
        place(&mut dut, PieceClass::King, PieceTeam::Dark, "e8");
        place(&mut dut, PieceClass::Pawn, PieceTeam::Light, "e2");
        place(&mut dut, PieceClass::Pawn, PieceTeam::Dark, "d4");

        play(&mut dut, PieceTeam::Light, "e2e4");
        let before_capture = dut.clone();

        let mut capture = ChessMove::from_notation("d4e3", PieceTeam::Dark)
            .expect("should parse");
        let kind = dut.apply(&mut capture).expect("capture should apply");
        assert_eq!(kind, MoveType::EnPassant);
        // The victim sat behind the destination, not on it.
        assert!(dut.piece_at(sq("e4")).is_none());
        assert!(dut.piece_at(sq("e3")).is_some());
        assert_eq!(dut.roster(PieceTeam::Light).len(), 1);

        dut.undo(&capture).expect("undo should succeed");
        assert_eq!(dut, before_capture);
    }

    #[test]
    fn castling_preconditions_gate_the_move() {
        // Start position with the f1 bishop and g1 knight cleared away.
        let mut dut = Board::new_game();
        dut.set_occupant(sq("f1"), None).expect("f1 in range");
        dut.set_occupant(sq("g1"), None).expect("g1 in range");

        let moves = dut.get_legal_moves(PieceTeam::Light).expect("should enumerate");
        assert!(moves.contains("e1g1"), "short castle should be available");

        // Flipping any one precondition removes it.
        // (a) a blocker between king and rook;
        let mut blocked = dut.clone();
        place(&mut blocked, PieceClass::Bishop, PieceTeam::Light, "f1");
        let moves = blocked.get_legal_moves(PieceTeam::Light).expect("should enumerate");
        assert!(!moves.contains("e1g1"));

        // (b) a transit square attacked (rook on f-file, f2 pawn removed);
        let mut attacked = dut.clone();
        attacked.set_occupant(sq("f2"), None).expect("f2 in range");
        place(&mut attacked, PieceClass::Rook, PieceTeam::Dark, "f5");
        let moves = attacked.get_legal_moves(PieceTeam::Light).expect("should enumerate");
        assert!(!moves.contains("e1g1"));

        // (c) the king has already moved (there and back);
        let mut king_moved = dut.clone();
        let out = play(&mut king_moved, PieceTeam::Light, "e1f1");
        assert_eq!(out.move_type, Some(MoveType::KingFirstMove));
        play(&mut king_moved, PieceTeam::Dark, "e7e6");
        play(&mut king_moved, PieceTeam::Light, "f1e1");
        play(&mut king_moved, PieceTeam::Dark, "e6e5");
        let moves = king_moved.get_legal_moves(PieceTeam::Light).expect("should enumerate");
        assert!(!moves.contains("e1g1"));

        // (d) the rook has already moved.
        let mut rook_moved = dut.clone();
        play(&mut rook_moved, PieceTeam::Light, "h1g1");
        play(&mut rook_moved, PieceTeam::Dark, "e7e6");
        play(&mut rook_moved, PieceTeam::Light, "g1h1");
        play(&mut rook_moved, PieceTeam::Dark, "e6e5");
        let moves = rook_moved.get_legal_moves(PieceTeam::Light).expect("should enumerate");
        assert!(!moves.contains("e1g1"));
    }

    #[test]
    fn castling_moves_the_rook_and_undoes_exactly() {
        let mut dut = Board::new_game();
        dut.set_occupant(sq("f1"), None).expect("f1 in range");
        dut.set_occupant(sq("g1"), None).expect("g1 in range");
        let before = dut.clone();

        let mut castle = ChessMove::from_notation("e1g1", PieceTeam::Light)
            .expect("should parse");
        let kind = dut.apply(&mut castle).expect("castle should apply");
        assert_eq!(kind, MoveType::CastleShort);
        assert!(matches!(
            dut.piece_at(sq("g1")),
            Some(p) if p.class == PieceClass::King
        ));
        assert!(matches!(
            dut.piece_at(sq("f1")),
            Some(p) if p.class == PieceClass::Rook
        ));
        assert!(dut.piece_at(sq("h1")).is_none());

        dut.undo(&castle).expect("undo should succeed");
        assert_eq!(dut, before);
    }

    #[test]
    fn promotion_commits_and_undoes_to_the_original_pawn() {
        let mut dut = Board::empty();
        place(&mut dut, PieceClass::King, PieceTeam::Light, "e1");
        place(&mut dut, PieceClass::King, PieceTeam::Dark, "e8");
        place(&mut dut, PieceClass::Pawn, PieceTeam::Light, "a7");
        let before = dut.clone();

        let mut mv = ChessMove::from_notation("a7a8", PieceTeam::Light).expect("should parse");
        let kind = dut.apply(&mut mv).expect("push should apply");
        assert_eq!(kind, MoveType::Promotion);

        assert!(matches!(
            dut.promote(&mut mv, 'x'),
            Err(ChessErrors::InvalidPromotionTarget('x'))
        ));
        dut.promote(&mut mv, 'q').expect("queen promotion should commit");
        assert!(matches!(
            dut.piece_at(sq("a8")),
            Some(p) if p.class == PieceClass::Queen && p.team == PieceTeam::Light
        ));
        assert_eq!(dut.roster(PieceTeam::Light).len(), 2);

        dut.undo(&mv).expect("undo should succeed");
        assert_eq!(dut, before, "undo must reconstruct the original pawn");
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut dut = Board::new_game();
        play(&mut dut, PieceTeam::Light, "f2f3");
        play(&mut dut, PieceTeam::Dark, "e7e5");
        play(&mut dut, PieceTeam::Light, "g2g4");
        play(&mut dut, PieceTeam::Dark, "d8h4");

        assert!(dut.is_check(PieceTeam::Light));
        let moves = dut.get_legal_moves(PieceTeam::Light).expect("should enumerate");
        assert!(moves.is_empty(), "no legal move escapes the mate");
    }

    #[test]
    fn bare_kings_with_no_moves_is_stalemate() {
        let mut dut = Board::empty();
        place(&mut dut, PieceClass::King, PieceTeam::Dark, "h8");
        place(&mut dut, PieceClass::King, PieceTeam::Light, "f7");
        place(&mut dut, PieceClass::Queen, PieceTeam::Light, "g6");

        assert!(!dut.is_check(PieceTeam::Dark));
        let moves = dut.get_legal_moves(PieceTeam::Dark).expect("should enumerate");
        assert!(moves.is_empty(), "stalemated side has no legal moves");
    }

    #[test]
    fn legal_moves_never_leave_own_king_in_check() {
        let mut dut = Board::new_game();
        let mut turn = PieceTeam::Light;
        // March down the first legal move for a while, verifying the oracle
        // at every ply for the side that just moved.
        for _ in 0..16 {
            let moves = dut.get_legal_moves(turn).expect("should enumerate");
            for text in &moves {
                let mut mv = ChessMove::from_notation(text, turn).expect("should parse");
                dut.apply(&mut mv).expect("legal move should apply");
                assert!(
                    !dut.is_check(turn),
                    "legal move {text} left the mover in check"
                );
                dut.undo(&mv).expect("undo should succeed");
            }
            let first = match moves.iter().next() {
                Some(text) => text.clone(),
                None => break,
            };
            play(&mut dut, turn, &first);
            turn = turn.opponent();
        }
    }

    #[test]
    fn indexed_access_is_bounds_checked() {
        let mut dut = Board::new_game();
        assert!(matches!(
            dut.occupant(64),
            Err(ChessErrors::InvalidSquareIndex(64))
        ));
        assert!(matches!(
            dut.set_occupant(200, None),
            Err(ChessErrors::InvalidSquareIndex(200))
        ));
        assert!(dut.occupant(4).expect("e1 in range").is_some());
    }
}
