pub mod error;
pub mod intent;
pub mod models;
pub mod picker;
pub mod responder;
pub mod screening;
pub mod tables;

pub use error::CoreError;
pub use intent::{analyze_sentiment, cap_input, classify_phrase_route, normalize_text};
pub use models::*;
pub use picker::{FixedPicker, IndexPicker, SeededPicker, ThreadRngPicker};
pub use responder::{Responder, ResponderConfig};
pub use screening::{compose_screening_reply, screen};
pub use tables::{CbtModule, KeywordCategory, ReplyTable, SentimentLexicon, Tables};
