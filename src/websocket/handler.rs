use actix::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{info, warn};
use uuid::Uuid;

use crate::models::{BoardSocketMessage, ClientEvent, Role, ServerEvent};
use crate::state::AppState;

/// Socket actor for one connected party.
pub struct BoardSocket {
    pub id: String,
    pub role: Role,
    pub app_state: web::Data<AppState>,
}

impl Actor for BoardSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        // Register the actor so broadcasts can reach it
        let addr = ctx.address();
        self.app_state
            .sockets
            .lock()
            .unwrap()
            .insert(self.id.clone(), addr);

        // Claim a seat. The role notification goes to this party only;
        // nobody else hears about the connection.
        let role = {
            let mut session = self.app_state.session.lock().unwrap();
            session.connect(&self.id)
        };
        self.role = role;
        info!("Connection {} assigned role {:?}", self.id, role);

        if let Some(event) = role.assignment_event() {
            self.send_event(ctx, &event);
        }

        let total = self.app_state.sockets.lock().unwrap().len();
        info!("Total active connections: {}", total);
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        // Vacate the seat this connection holds, if any. The freed seat
        // is claimed by the next new connection, not by a waiting
        // spectator.
        {
            let mut session = self.app_state.session.lock().unwrap();
            session.disconnect(&self.id);
        }
        self.app_state.sockets.lock().unwrap().remove(&self.id);
        info!("Connection {} closed ({:?})", self.id, self.role);

        Running::Stop
    }
}

impl Handler<BoardSocketMessage> for BoardSocket {
    type Result = ();

    fn handle(&mut self, msg: BoardSocketMessage, ctx: &mut Self::Context) {
        ctx.text(msg.0);
    }
}

// WebSocket frame handler
impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for BoardSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {}
            Ok(ws::Message::Text(text)) => {
                match serde_json::from_str::<ClientEvent>(text.as_ref()) {
                    Ok(ClientEvent::Move(intent)) => self.handle_move(intent, ctx),
                    Err(e) => {
                        // No intent to echo back, so nothing is emitted
                        warn!("Ignoring malformed frame from {}: {}", self.id, e);
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                warn!("Binary messages are not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                info!("Connection {} closing: {:?}", self.id, reason);
                ctx.close(reason);
                ctx.stop();
            }
            _ => {
                ctx.stop();
            }
        }
    }
}

impl BoardSocket {
    /// Send one event to this connection only.
    pub fn send_event(&self, ctx: &mut ws::WebsocketContext<Self>, event: &ServerEvent) {
        match serde_json::to_string(event) {
            Ok(text) => ctx.text(text),
            Err(e) => warn!("Failed to serialize event: {}", e),
        }
    }
}

/// WebSocket connection handler.
pub async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let id = Uuid::new_v4().to_string();
    info!("New WebSocket connection: {}", id);

    let socket = BoardSocket {
        id,
        role: Role::Unseated,
        app_state,
    };

    ws::start(socket, &req, stream)
}
