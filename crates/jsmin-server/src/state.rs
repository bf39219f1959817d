//! Application state shared across all handlers.

use crate::config::JsminConfig;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Request counters.
#[derive(Debug, Default)]
pub struct ServeStats {
    served: AtomicU64,
    compiled: AtomicU64,
    failed: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub served: u64,
    pub compiled: u64,
    pub failed: u64,
}

impl ServeStats {
    pub fn record_served(&self, compiled: bool) {
        self.served.fetch_add(1, Ordering::Relaxed);
        if compiled {
            self.compiled.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            served: self.served.load(Ordering::Relaxed),
            compiled: self.compiled.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<JsminConfig>,
    pub stats: Arc<ServeStats>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(config: JsminConfig) -> Self {
        Self {
            config: Arc::new(config),
            stats: Arc::new(ServeStats::default()),
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(JsminConfig::default())
    }
}
