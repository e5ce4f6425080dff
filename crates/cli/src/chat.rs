use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use ash_core::{Locale, Reply, Responder, Route};
use ash_observability::{AppMetrics, FallbackKind};
use tracing::{debug, info};

pub const EXIT_TOKENS: &[&str] = &["再見", "掰掰", "結束", "exit", "quit"];
pub const FAREWELL: &str = "很高興今天能和你聊天，再見！";
pub const DISCLAIMER: &str =
    "提醒：Ash 只提供初步的陪伴與篩檢建議，不能取代專業的心理諮詢或醫療診斷。";

pub fn is_exit_token(line: &str) -> bool {
    let normalized = line.trim().to_lowercase();
    EXIT_TOKENS.contains(&normalized.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub turns: usize,
    pub exited_by_token: bool,
}

/// Line-based chat loop over arbitrary reader/writer pairs.
pub struct ChatSession<'a> {
    responder: &'a Responder,
    locale: Locale,
    metrics: Arc<AppMetrics>,
    json: bool,
}

impl<'a> ChatSession<'a> {
    pub fn new(responder: &'a Responder, locale: Locale, metrics: Arc<AppMetrics>) -> Self {
        Self {
            responder,
            locale,
            metrics,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<SessionSummary> {
        writeln!(output, "{}", self.responder.greet())?;
        writeln!(output, "{DISCLAIMER}")?;

        let mut turns = 0usize;
        let mut exited_by_token = false;

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("failed reading chat input")?;
            if read == 0 {
                writeln!(output)?;
                break;
            }

            if is_exit_token(&line) {
                exited_by_token = true;
                break;
            }

            let message = line.trim_end_matches(['\r', '\n']);
            debug!(input = %message, "user said");

            let reply = self.handle_turn(message);
            turns += 1;

            if self.json {
                writeln!(output, "{}", serde_json::to_string(&reply)?)?;
            } else {
                writeln!(output, "Ash 說：{}", reply.text)?;
            }
        }

        writeln!(output, "{FAREWELL}")?;
        output.flush()?;

        info!(
            turns,
            exited_by_token,
            metrics = ?self.metrics.snapshot(),
            "chat session ended"
        );

        Ok(SessionSummary {
            turns,
            exited_by_token,
        })
    }

    pub fn handle_turn(&self, message: &str) -> Reply {
        let started = Instant::now();
        let reply = self.responder.respond_for_locale(message, self.locale);
        record_reply(&self.metrics, &reply);
        self.metrics.observe_latency(started.elapsed());
        reply
    }
}

fn record_reply(metrics: &AppMetrics, reply: &Reply) {
    metrics.inc_turn();
    match reply.route {
        Route::Screening => metrics.inc_screening(),
        Route::Positive => metrics.inc_fallback(FallbackKind::Positive),
        Route::Negative => metrics.inc_fallback(FallbackKind::Negative),
        Route::Neutral => metrics.inc_fallback(FallbackKind::Neutral),
        Route::Breakup | Route::Cat | Route::Goal | Route::Encouragement => {
            metrics.inc_phrase_reply()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash_core::FixedPicker;

    #[test]
    fn exit_tokens_ignore_case_and_padding() {
        assert!(is_exit_token("再見"));
        assert!(is_exit_token("  掰掰\n"));
        assert!(is_exit_token("結束"));
        assert!(is_exit_token("EXIT"));
        assert!(!is_exit_token("再見了"));
        assert!(!is_exit_token(""));
    }

    #[test]
    fn turns_are_counted_by_route() {
        let responder = Responder::new(Arc::new(FixedPicker(0)));
        let metrics = AppMetrics::shared();
        let session = ChatSession::new(&responder, Locale::Taiwan, metrics.clone());

        session.handle_turn("我很緊張");
        session.handle_turn("我的貓");
        session.handle_turn("今天下雨");
        session.handle_turn("今天很開心");
        session.handle_turn("我很難過也很傷心");
        session.handle_turn("沒什麼");

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.turns_total, 6);
        assert_eq!(snapshot.screenings_total, 1);
        assert_eq!(snapshot.phrase_replies_total, 1);
        assert_eq!(snapshot.fallback_total, 4);
        assert_eq!(snapshot.positive_total, 1);
        assert_eq!(snapshot.negative_total, 1);
        assert_eq!(snapshot.neutral_total, 2);
    }
}
