use std::sync::Arc;

use tracing::{debug, instrument};

use crate::intent::{analyze_sentiment, cap_input, classify_phrase_route, normalize_text};
use crate::models::{Locale, PhraseRoute, Reply, Route, Screening, Sentiment};
use crate::picker::{IndexPicker, ThreadRngPicker};
use crate::screening::{compose_screening_reply, screen};
use crate::tables::{CbtModule, ReplyTable, Tables, ENCOURAGEMENT_TRIGGER};

pub const GREETING: &str = "你好！我是 Ash，你的 AI 心理健康支援夥伴。今天有什麼我可以幫你嗎？";
pub const GOAL_REPLY: &str =
    "設定目標是很棒的第一步！你願意告訴我你的目標是什麼嗎？我們可以一起想想如何達成。";
pub const NOT_ALONE_SUFFIX: &str = " 記得，你並不孤單。";
pub const ENCOURAGEMENT_REPLY: &str = "謝謝你的鼓勵！我們會繼續努力。";
pub const CBT_NOT_FOUND: &str = "抱歉，目前沒有這個 CBT 模組。";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponderConfig {
    /// Input beyond this many grapheme clusters is dropped before classification.
    pub max_input_graphemes: usize,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            max_input_graphemes: 2000,
        }
    }
}

/// Maps one line of user text to one reply.
///
/// Holds only read-only tables and a shared picker, so a single instance can
/// serve any number of callers.
#[derive(Clone)]
pub struct Responder {
    tables: Tables,
    picker: Arc<dyn IndexPicker>,
    config: ResponderConfig,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngPicker))
    }
}

impl Responder {
    pub fn new(picker: Arc<dyn IndexPicker>) -> Self {
        Self::with_config(picker, ResponderConfig::default())
    }

    pub fn with_config(picker: Arc<dyn IndexPicker>, config: ResponderConfig) -> Self {
        Self {
            tables: Tables::default(),
            picker,
            config,
        }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn config(&self) -> ResponderConfig {
        self.config
    }

    pub fn greet(&self) -> &'static str {
        GREETING
    }

    pub fn process(&self, input: &str) -> String {
        self.respond(input).text
    }

    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn respond(&self, input: &str) -> Reply {
        let text = self.prepare(input);

        let reply = if let Some(screening) = screen(&text, self.tables.issues) {
            Reply {
                text: compose_screening_reply(&screening),
                route: Route::Screening,
                severity: Some(screening.level),
                issues: screening.hits,
            }
        } else if let Some(route) = classify_phrase_route(&text) {
            let reply_text = match route {
                PhraseRoute::Breakup => self.choose(&self.tables.breakup_comfort),
                PhraseRoute::Cat => self.choose(&self.tables.cat),
                PhraseRoute::Goal => GOAL_REPLY,
            };
            Reply::plain(route.into(), reply_text)
        } else {
            self.sentiment_reply(&text)
        };

        debug!(route = ?reply.route, severity = ?reply.severity, "reply routed");
        reply
    }

    pub fn process_for_locale(&self, input: &str, locale: Locale) -> String {
        self.respond_for_locale(input, locale).text
    }

    /// Taiwan gets a fixed thank-you for encouragement; everything else goes
    /// through [`Responder::respond`].
    pub fn respond_for_locale(&self, input: &str, locale: Locale) -> Reply {
        if locale == Locale::Taiwan && self.prepare(input).contains(ENCOURAGEMENT_TRIGGER) {
            debug!(locale = locale.as_code(), "encouragement acknowledged");
            return Reply::plain(Route::Encouragement, ENCOURAGEMENT_REPLY);
        }
        self.respond(input)
    }

    pub fn screen(&self, input: &str) -> Option<Screening> {
        screen(&self.prepare(input), self.tables.issues)
    }

    pub fn analyze_sentiment(&self, input: &str) -> Sentiment {
        analyze_sentiment(&self.prepare(input), &self.tables.sentiment)
    }

    pub fn find_cbt(&self, name: &str) -> Option<&'static CbtModule> {
        self.tables.find_cbt_module(name)
    }

    pub fn cbt_modules(&self) -> impl Iterator<Item = &'static str> {
        self.tables.cbt_modules.iter().map(|module| module.name)
    }

    /// Lists the steps of a CBT module. Calling it again yields the same text.
    pub fn start_cbt(&self, name: &str) -> String {
        let Some(module) = self.find_cbt(name) else {
            debug!(module = name, "cbt module not found");
            return CBT_NOT_FOUND.to_string();
        };

        let steps = module
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {}", index + 1, step))
            .collect::<Vec<_>>()
            .join("\n");

        format!("好的，我們開始進行 {}。\n{}", module.name, steps)
    }

    fn sentiment_reply(&self, text: &str) -> Reply {
        match analyze_sentiment(text, &self.tables.sentiment) {
            Sentiment::Negative => Reply::plain(
                Route::Negative,
                format!("{}{}", self.choose(&self.tables.positive), NOT_ALONE_SUFFIX),
            ),
            Sentiment::Positive => {
                Reply::plain(Route::Positive, self.choose(&self.tables.positive))
            }
            Sentiment::Neutral => {
                Reply::plain(Route::Neutral, self.choose(&self.tables.neutral))
            }
        }
    }

    /// Whitespace is collapsed first so padding never counts against the cap.
    fn prepare(&self, input: &str) -> String {
        let normalized = normalize_text(input);
        cap_input(&normalized, self.config.max_input_graphemes).to_string()
    }

    fn choose(&self, table: &ReplyTable) -> &'static str {
        let index = self.picker.pick(table.replies.len());
        table.replies.get(index).copied().unwrap_or_default()
    }
}
