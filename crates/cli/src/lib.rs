pub mod chat;
pub mod config;

pub use chat::{is_exit_token, ChatSession, SessionSummary, DISCLAIMER, EXIT_TOKENS, FAREWELL};
pub use config::{build_responder, AppConfig};
