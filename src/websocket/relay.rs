use actix_web_actors::ws;
use log::{debug, info, warn};

use crate::models::{BoardSocketMessage, MoveIntent, MoveOutcome, ServerEvent};
use crate::websocket::handler::BoardSocket;

impl BoardSocket {
    /// Evaluate a move intent against the authoritative session and
    /// relay the outcome.
    pub fn handle_move(&mut self, intent: MoveIntent, ctx: &mut ws::WebsocketContext<Self>) {
        info!(
            "Move intent from {}: {} -> {}",
            self.id, intent.from, intent.to
        );

        let outcome = {
            let mut session = self.app_state.session.lock().unwrap();
            session.submit_move(&self.id, &intent)
        };

        match outcome {
            MoveOutcome::Accepted { board } => {
                info!("Move accepted: {} -> {}", intent.from, intent.to);
                self.broadcast_event(&ServerEvent::Move(intent));
                self.broadcast_event(&ServerEvent::BoardState(board));
            }
            MoveOutcome::Rejected(reason) => {
                warn!("Rejected move from {}: {}", self.id, reason);
                self.send_event(ctx, &ServerEvent::InvalidMove(intent));
            }
            MoveOutcome::OutOfTurn => {
                // Deliberately silent: the sender is not notified
                debug!("Dropping out-of-turn move from {}", self.id);
            }
        }
    }

    /// Send one event to every connection, the originator included.
    pub fn broadcast_event(&self, event: &ServerEvent) {
        let sockets = self.app_state.sockets.lock().unwrap().clone();

        // Serialize the event once
        let text = match serde_json::to_string(event) {
            Ok(t) => t,
            Err(e) => {
                warn!("Failed to serialize broadcast: {}", e);
                return;
            }
        };

        for addr in sockets.values() {
            addr.do_send(BoardSocketMessage(text.clone()));
        }
    }
}
