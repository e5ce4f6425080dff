use std::sync::Arc;

use ash_core::{IndexPicker, Locale, Responder, ResponderConfig, SeededPicker, ThreadRngPicker};

/// Runtime settings resolved from flags and `ASH_*` environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub locale: Locale,
    pub seed: Option<u64>,
    pub max_input_graphemes: usize,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Taiwan,
            seed: None,
            max_input_graphemes: ResponderConfig::default().max_input_graphemes,
            json: false,
        }
    }
}

pub fn build_responder(config: &AppConfig) -> Responder {
    let picker: Arc<dyn IndexPicker> = match config.seed {
        Some(seed) => Arc::new(SeededPicker::new(seed)),
        None => Arc::new(ThreadRngPicker),
    };

    Responder::with_config(
        picker,
        ResponderConfig {
            max_input_graphemes: config.max_input_graphemes,
        },
    )
}
