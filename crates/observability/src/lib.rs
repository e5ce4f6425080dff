use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Which sentiment bucket a fallback reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Default)]
pub struct AppMetrics {
    turns_total: AtomicU64,
    screenings_total: AtomicU64,
    phrase_replies_total: AtomicU64,
    fallback_total: AtomicU64,
    positive_total: AtomicU64,
    negative_total: AtomicU64,
    neutral_total: AtomicU64,
    cbt_lookups_total: AtomicU64,
    cbt_misses_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub turns_total: u64,
    pub screenings_total: u64,
    pub phrase_replies_total: u64,
    pub fallback_total: u64,
    pub positive_total: u64,
    pub negative_total: u64,
    pub neutral_total: u64,
    pub cbt_lookups_total: u64,
    pub cbt_misses_total: u64,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_turn(&self) {
        self.turns_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_screening(&self) {
        self.screenings_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_phrase_reply(&self) {
        self.phrase_replies_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fallback(&self, sentiment: FallbackKind) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
        let counter = match sentiment {
            FallbackKind::Positive => &self.positive_total,
            FallbackKind::Negative => &self.negative_total,
            FallbackKind::Neutral => &self.neutral_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cbt_lookup(&self, found: bool) {
        self.cbt_lookups_total.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.cbt_misses_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let turns = self.turns_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            turns_total: turns,
            screenings_total: self.screenings_total.load(Ordering::Relaxed),
            phrase_replies_total: self.phrase_replies_total.load(Ordering::Relaxed),
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            positive_total: self.positive_total.load(Ordering::Relaxed),
            negative_total: self.negative_total.load(Ordering::Relaxed),
            neutral_total: self.neutral_total.load(Ordering::Relaxed),
            cbt_lookups_total: self.cbt_lookups_total.load(Ordering::Relaxed),
            cbt_misses_total: self.cbt_misses_total.load(Ordering::Relaxed),
            avg_latency_micros: if turns == 0 {
                0.0
            } else {
                latency as f64 / turns as f64
            },
        }
    }
}

/// Installs the global subscriber once. Later calls are no-ops.
///
/// Logs go to stderr so they never interleave with chat output on stdout.
pub fn init_tracing(service_name: &str, format: LogFormat) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,ash_core=info", service_name))
        });

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        match format {
            LogFormat::Pretty => builder.with_target(false).init(),
            LogFormat::Json => builder
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .init(),
        }
    });
}
