use actix::Message;
use serde::{Deserialize, Serialize};

/// A move intent as it travels from client input to the coordinator:
/// origin square, destination square, optional promotion choice. Never
/// stored; it exists for the length of one exchange.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

/// Events sent from a client to the coordinator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    Move(MoveIntent),
}

/// Events sent from the coordinator to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Seat assignment for the connecting party: "w" or "b".
    PlayerRole(String),
    /// The connecting party holds no seat.
    SpectatorRole,
    /// An accepted move intent, echoed to every connection.
    Move(MoveIntent),
    /// Serialized authoritative position, broadcast after every accepted
    /// move. Opaque: produced and consumed by the rules engine.
    BoardState(String),
    /// A rejected intent, echoed back to the originator only.
    InvalidMove(MoveIntent),
}

/// Outbound text frame for a socket actor.
#[derive(Message)]
#[rtype(result = "()")]
pub struct BoardSocketMessage(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_role_wire_format() {
        let json = serde_json::to_string(&ServerEvent::PlayerRole("w".to_string())).unwrap();
        assert_eq!(json, r#"{"event":"playerRole","data":"w"}"#);
    }

    #[test]
    fn spectator_role_has_no_payload() {
        let json = serde_json::to_string(&ServerEvent::SpectatorRole).unwrap();
        assert_eq!(json, r#"{"event":"spectatorRole"}"#);
    }

    #[test]
    fn board_state_carries_the_raw_notation_string() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let json = serde_json::to_string(&ServerEvent::BoardState(fen.to_string())).unwrap();
        assert_eq!(json, format!(r#"{{"event":"boardState","data":"{}"}}"#, fen));
    }

    #[test]
    fn client_move_event_parses() {
        let frame = r#"{"event":"move","data":{"from":"e2","to":"e4","promotion":"q"}}"#;
        let ClientEvent::Move(intent) = serde_json::from_str(frame).unwrap();
        assert_eq!(intent.from, "e2");
        assert_eq!(intent.to, "e4");
        assert_eq!(intent.promotion.as_deref(), Some("q"));
    }

    #[test]
    fn promotion_is_optional_on_the_wire() {
        let frame = r#"{"event":"move","data":{"from":"g1","to":"f3"}}"#;
        let ClientEvent::Move(intent) = serde_json::from_str(frame).unwrap();
        assert_eq!(intent.promotion, None);

        let echoed = serde_json::to_string(&ServerEvent::Move(intent)).unwrap();
        assert_eq!(echoed, r#"{"event":"move","data":{"from":"g1","to":"f3"}}"#);
    }

    #[test]
    fn invalid_move_echoes_the_intent() {
        let intent = MoveIntent {
            from: "e2".to_string(),
            to: "e5".to_string(),
            promotion: Some("q".to_string()),
        };
        let json = serde_json::to_string(&ServerEvent::InvalidMove(intent.clone())).unwrap();
        assert_eq!(
            json,
            r#"{"event":"invalidMove","data":{"from":"e2","to":"e5","promotion":"q"}}"#
        );

        let back: ServerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ServerEvent::InvalidMove(intent));
    }
}
