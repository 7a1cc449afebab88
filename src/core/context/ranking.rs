use serde::Serialize;
use ts_rs::TS;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Usage score is capped at this many uses
const MAX_USAGE_SCORE: f64 = 100.0;
/// Recency score for a command used just now
const MAX_RECENCY_SCORE: f64 = 50.0;
/// Recency decay constant in days
const RECENCY_DECAY_DAYS: f64 = 30.0;

#[derive(Debug, Default)]
struct UsageRecord {
    count: u32,
    /// Unix timestamp (seconds)
    last_used: i64,
}

/// Per-command usage counts and last-use times for palette ranking
#[derive(Debug, Clone, Default)]
pub struct UsageMetrics {
    records: Arc<Mutex<HashMap<String, UsageRecord>>>,
}

/// Snapshot of one command's usage, for the settings UI
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct UsageSnapshot {
    pub command_id: String,
    pub count: u32,
    /// Unix timestamp (seconds)
    #[ts(type = "number")]
    pub last_used: i64,
}

impl UsageMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, UsageRecord>> {
        match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("[UsageMetrics] Records mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        }
    }

    /// Record that a command was used
    pub fn record_usage(&self, command_id: &str) {
        self.record_usage_at(command_id, chrono::Utc::now().timestamp());
    }

    fn record_usage_at(&self, command_id: &str, timestamp: i64) {
        let mut records = self.lock();
        let record = records.entry(command_id.to_string()).or_default();
        record.count = record.count.saturating_add(1);
        record.last_used = timestamp;

        debug!("[UsageMetrics] Recorded usage for: {} ({})", command_id, record.count);
    }

    pub fn get_usage_count(&self, command_id: &str) -> u32 {
        self.lock().get(command_id).map_or(0, |r| r.count)
    }

    pub fn get_last_used(&self, command_id: &str) -> Option<i64> {
        self.lock().get(command_id).map(|r| r.last_used)
    }

    /// All recorded usage, most used first
    pub fn snapshot(&self) -> Vec<UsageSnapshot> {
        let mut all: Vec<UsageSnapshot> = self
            .lock()
            .iter()
            .map(|(id, r)| UsageSnapshot {
                command_id: id.clone(),
                count: r.count,
                last_used: r.last_used,
            })
            .collect();
        all.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.command_id.cmp(&b.command_id)));
        all
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Score of a single command at time `now`
    fn score(&self, command_id: &str, now: i64) -> f64 {
        let records = self.lock();
        let Some(record) = records.get(command_id) else {
            return 0.0;
        };

        let usage = f64::from(record.count).min(MAX_USAGE_SCORE);
        let days_ago = (now - record.last_used).max(0) as f64 / 86_400.0;
        let recency = MAX_RECENCY_SCORE * (-days_ago / RECENCY_DECAY_DAYS).exp();
        usage + recency
    }
}

/// Rank commands by usage, recency and context boost.
///
/// The sort is stable, so commands with equal scores keep their input order.
pub fn rank_commands<T>(
    commands: Vec<T>,
    get_id: impl Fn(&T) -> String,
    metrics: &UsageMetrics,
    context_boost: Option<&HashMap<String, f64>>,
) -> Vec<T> {
    let now = chrono::Utc::now().timestamp();
    let mut scored: Vec<(T, f64)> = commands
        .into_iter()
        .map(|cmd| {
            let id = get_id(&cmd);
            let boost = context_boost
                .and_then(|map| map.get(&id).copied())
                .unwrap_or(0.0);
            let score = metrics.score(&id, now) + boost;
            (cmd, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored.into_iter().map(|(cmd, _)| cmd).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_metrics() {
        let metrics = UsageMetrics::new();

        metrics.record_usage("transform_snake_case");
        metrics.record_usage("transform_snake_case");
        metrics.record_usage("transform_url_decode");

        assert_eq!(metrics.get_usage_count("transform_snake_case"), 2);
        assert_eq!(metrics.get_usage_count("transform_url_decode"), 1);
        assert_eq!(metrics.get_usage_count("unknown"), 0);
        assert!(metrics.get_last_used("transform_url_decode").is_some());
    }

    #[test]
    fn test_ranking_by_usage() {
        let metrics = UsageMetrics::new();
        metrics.record_usage("cmd1");
        metrics.record_usage("cmd1");
        metrics.record_usage("cmd2");

        let ranked = rank_commands(vec!["cmd3", "cmd2", "cmd1"], |c| c.to_string(), &metrics, None);
        assert_eq!(ranked, vec!["cmd1", "cmd2", "cmd3"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let metrics = UsageMetrics::new();
        let ranked = rank_commands(vec!["b", "a", "c"], |c| c.to_string(), &metrics, None);
        assert_eq!(ranked, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_context_boost() {
        let metrics = UsageMetrics::new();
        metrics.record_usage("cmd1");

        let mut boost = HashMap::new();
        boost.insert("cmd3".to_string(), 200.0);

        let ranked = rank_commands(vec!["cmd1", "cmd2", "cmd3"], |c| c.to_string(), &metrics, Some(&boost));
        assert_eq!(ranked[0], "cmd3");
        assert_eq!(ranked[1], "cmd1");
    }

    #[test]
    fn test_recency_decays() {
        let metrics = UsageMetrics::new();
        let now = chrono::Utc::now().timestamp();
        metrics.record_usage_at("old", now - 90 * 86_400);
        metrics.record_usage_at("fresh", now);

        assert!(metrics.score("fresh", now) > metrics.score("old", now));
        // One use, recency close to the cap
        assert!((metrics.score("fresh", now) - 51.0).abs() < 1e-6);
    }

    #[test]
    fn test_snapshot_and_clear() {
        let metrics = UsageMetrics::new();
        metrics.record_usage("a");
        metrics.record_usage("b");
        metrics.record_usage("b");

        let snap = metrics.snapshot();
        assert_eq!(snap[0].command_id, "b");
        assert_eq!(snap[0].count, 2);

        metrics.clear();
        assert!(metrics.snapshot().is_empty());
    }
}
