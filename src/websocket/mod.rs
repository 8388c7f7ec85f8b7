pub mod handler;
pub mod relay;

// Re-export important types
pub use handler::{ws_index, BoardSocket};
