//! Narrow interface to the embedded rules engine.
//!
//! The coordinator and the client depend on this surface only: apply a
//! move intent against a position, serialize a position for the wire.
//! Everything the engine knows about legality, check, or notation stays
//! behind it.

use std::fmt;
use std::str::FromStr;

use chess::{ChessMove, Color, Game, Piece, Rank, Square};

use crate::models::messages::MoveIntent;

/// Why a move intent was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A square did not parse as algebraic notation.
    MalformedSquare(String),
    /// The promotion choice was not one of "q", "r", "b", "n".
    MalformedPromotion(String),
    /// Parsed fine but the engine refused it against the current position.
    Illegal,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::MalformedSquare(s) => write!(f, "malformed square: {}", s),
            MoveError::MalformedPromotion(p) => write!(f, "malformed promotion: {}", p),
            MoveError::Illegal => write!(f, "illegal move"),
        }
    }
}

/// Apply `intent` to `game`. On success the position advances and the
/// side to move flips; on failure the position is untouched.
///
/// The promotion choice is consulted only when a pawn reaches the back
/// rank, defaulting to queen. It is ignored on every other move: the
/// client always sends one, and the engine would refuse a move carrying
/// a spurious promotion piece.
pub fn apply_move(game: &mut Game, intent: &MoveIntent) -> Result<(), MoveError> {
    let from = parse_square(&intent.from)?;
    let to = parse_square(&intent.to)?;

    let board = game.current_position();
    let promotion = if board.piece_on(from) == Some(Piece::Pawn)
        && to.get_rank() == back_rank(board.side_to_move())
    {
        Some(parse_promotion(intent.promotion.as_deref())?)
    } else {
        None
    };

    let mv = ChessMove::new(from, to, promotion);
    if game.make_move(mv) {
        Ok(())
    } else {
        Err(MoveError::Illegal)
    }
}

/// Serialize the position for the wire. Callers treat the result as an
/// opaque interchange string; only the engine produces and consumes it.
pub fn serialize(game: &Game) -> String {
    game.current_position().to_string()
}

fn parse_square(s: &str) -> Result<Square, MoveError> {
    Square::from_str(&s.to_lowercase()).map_err(|_| MoveError::MalformedSquare(s.to_string()))
}

fn parse_promotion(choice: Option<&str>) -> Result<Piece, MoveError> {
    match choice {
        None | Some("q") => Ok(Piece::Queen),
        Some("r") => Ok(Piece::Rook),
        Some("b") => Ok(Piece::Bishop),
        Some("n") => Ok(Piece::Knight),
        Some(other) => Err(MoveError::MalformedPromotion(other.to_string())),
    }
}

fn back_rank(side: Color) -> Rank {
    match side {
        Color::White => Rank::Eighth,
        Color::Black => Rank::First,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::Board;

    fn intent(from: &str, to: &str, promotion: Option<&str>) -> MoveIntent {
        MoveIntent {
            from: from.to_string(),
            to: to.to_string(),
            promotion: promotion.map(str::to_string),
        }
    }

    fn game_from(fen: &str) -> Game {
        Game::new_with_board(Board::from_str(fen).expect("test position"))
    }

    #[test]
    fn applies_a_simple_pawn_push() {
        let mut game = Game::new();
        apply_move(&mut game, &intent("e2", "e4", None)).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn promotion_field_is_ignored_for_ordinary_moves() {
        let mut game = Game::new();
        // the client always sends "q"; it must not poison a knight move
        apply_move(&mut game, &intent("g1", "f3", Some("q"))).unwrap();
    }

    #[test]
    fn rejects_an_unreachable_square() {
        let mut game = Game::new();
        assert_eq!(
            apply_move(&mut game, &intent("e2", "e6", Some("q"))),
            Err(MoveError::Illegal)
        );
        assert_eq!(serialize(&game), serialize(&Game::new()));
    }

    #[test]
    fn rejects_malformed_squares() {
        let mut game = Game::new();
        assert!(matches!(
            apply_move(&mut game, &intent("z9", "e4", None)),
            Err(MoveError::MalformedSquare(_))
        ));
    }

    #[test]
    fn uppercase_squares_are_tolerated() {
        let mut game = Game::new();
        apply_move(&mut game, &intent("E2", "E4", None)).unwrap();
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut game = game_from("8/P7/8/8/8/8/8/K6k w - - 0 1");
        apply_move(&mut game, &intent("a7", "a8", None)).unwrap();
        assert!(serialize(&game).starts_with("Q7/"));
    }

    #[test]
    fn underpromotion_choice_is_honored() {
        let mut game = game_from("8/P7/8/8/8/8/8/K6k w - - 0 1");
        apply_move(&mut game, &intent("a7", "a8", Some("n"))).unwrap();
        assert!(serialize(&game).starts_with("N7/"));
    }

    #[test]
    fn unknown_promotion_letter_is_rejected() {
        let mut game = game_from("8/P7/8/8/8/8/8/K6k w - - 0 1");
        assert_eq!(
            apply_move(&mut game, &intent("a7", "a8", Some("x"))),
            Err(MoveError::MalformedPromotion("x".to_string()))
        );
    }

    #[test]
    fn serializes_the_start_position() {
        assert_eq!(
            serialize(&Game::new()),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }
}
