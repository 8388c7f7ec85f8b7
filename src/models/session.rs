use chess::{Color, Game};

use crate::game::rules;
use crate::models::messages::{MoveIntent, ServerEvent};

/// Role of a connection, assigned exactly once when the connection is
/// accepted. No further transitions occur for the connection's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Accepted but not yet through seat assignment.
    Unseated,
    White,
    Black,
    Spectator,
}

impl Role {
    /// The notification the connecting party receives for this role.
    pub fn assignment_event(self) -> Option<ServerEvent> {
        match self {
            Role::White => Some(ServerEvent::PlayerRole("w".to_string())),
            Role::Black => Some(ServerEvent::PlayerRole("b".to_string())),
            Role::Spectator => Some(ServerEvent::SpectatorRole),
            Role::Unseated => None,
        }
    }
}

/// The two player seats. An id absent from both seats is a spectator.
#[derive(Debug, Default)]
pub struct Seats {
    white: Option<String>,
    black: Option<String>,
}

impl Seats {
    /// Claim the first open seat for `id`, white before black.
    fn claim(&mut self, id: &str) -> Role {
        if self.white.is_none() {
            self.white = Some(id.to_string());
            Role::White
        } else if self.black.is_none() {
            self.black = Some(id.to_string());
            Role::Black
        } else {
            Role::Spectator
        }
    }

    /// Vacate the seat `id` holds, if any. Connections already waiting
    /// are not reseated; the freed seat goes to the next new connection.
    fn release(&mut self, id: &str) {
        if self.white.as_deref() == Some(id) {
            self.white = None;
        } else if self.black.as_deref() == Some(id) {
            self.black = None;
        }
    }

    /// The id holding the seat for `color`.
    pub fn holder(&self, color: Color) -> Option<&str> {
        match color {
            Color::White => self.white.as_deref(),
            Color::Black => self.black.as_deref(),
        }
    }
}

/// Outcome of a submitted move intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Applied against the authoritative position; `board` is the new
    /// serialized position to broadcast to every connection.
    Accepted { board: String },
    /// Rejected by the rules engine; only the sender is notified.
    Rejected(rules::MoveError),
    /// The sender does not hold the seat whose turn it is. Dropped with
    /// no notification at all.
    OutOfTurn,
}

/// The single authoritative game session: one position, two seats.
///
/// Owns no I/O and takes no locks. Event handlers lock the session in
/// `AppState`, call one method, and act on the returned value.
pub struct Session {
    game: Game,
    seats: Seats,
}

impl Session {
    pub fn new() -> Self {
        Session {
            game: Game::new(),
            seats: Seats::default(),
        }
    }

    /// Seat a new connection: white if open, else black, else spectator.
    pub fn connect(&mut self, id: &str) -> Role {
        self.seats.claim(id)
    }

    /// Vacate whatever seat `id` holds.
    pub fn disconnect(&mut self, id: &str) {
        self.seats.release(id);
    }

    /// Evaluate one move intent against the authoritative position.
    pub fn submit_move(&mut self, id: &str, intent: &MoveIntent) -> MoveOutcome {
        let turn = self.game.side_to_move();
        if self.seats.holder(turn) != Some(id) {
            return MoveOutcome::OutOfTurn;
        }

        match rules::apply_move(&mut self.game, intent) {
            Ok(()) => MoveOutcome::Accepted {
                board: rules::serialize(&self.game),
            },
            Err(e) => MoveOutcome::Rejected(e),
        }
    }

    /// The current serialized position.
    pub fn board_state(&self) -> String {
        rules::serialize(&self.game)
    }

    pub fn side_to_move(&self) -> Color {
        self.game.side_to_move()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
