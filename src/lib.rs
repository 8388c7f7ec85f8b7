//! A minimal two-player networked chess board.
//!
//! One server-owned session assigns white/black/spectator roles to
//! incoming WebSocket connections, relays validated moves, and broadcasts
//! the authoritative position after every accepted move. All rule
//! knowledge (legality, check, notation) lives in the embedded `chess`
//! engine behind the narrow [`game::rules`] interface.

pub mod config;
pub mod game;
pub mod models;
pub mod routes;
pub mod state;
pub mod websocket;
