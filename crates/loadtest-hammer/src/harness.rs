//! Concurrent request dispatch.

use crate::aggregator::{HammerReport, IdAggregator};
use chrono::Utc;
use marketplace_client::Transport;
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// What to hammer and how hard.
#[derive(Debug, Clone)]
pub struct HammerConfig {
    pub path: String,
    pub count: usize,
}

/// Append a random `c` query parameter so every request bypasses caches.
fn cache_busted<R: Rng + ?Sized>(path: &str, rng: &mut R) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}c={}", rng.gen::<f64>())
}

/// Dispatch `config.count` reads at once and aggregate their results.
///
/// All requests are spawned before any is awaited. The function returns only
/// after every request has settled; a failed request is logged and adds no
/// IDs, it never cuts the wait short.
pub async fn run_hammer<T>(transport: Arc<T>, config: &HammerConfig) -> HammerReport
where
    T: Transport + 'static,
{
    let started_at = Utc::now();
    let start = Instant::now();
    info!("Dispatching {} requests to {}", config.count, config.path);

    let paths: Vec<String> = {
        let mut rng = rand::thread_rng();
        (0..config.count)
            .map(|_| cache_busted(&config.path, &mut rng))
            .collect()
    };

    let mut tasks = JoinSet::new();
    for path in paths {
        let transport = Arc::clone(&transport);
        tasks.spawn(async move {
            let result = transport.read(&path).await;
            (path, result)
        });
    }

    let mut aggregator = IdAggregator::default();
    let mut succeeded = 0u64;
    let mut failed = 0u64;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((path, Ok(entities))) => {
                debug!("{} returned {} entities", path, entities.len());
                aggregator.observe(&entities);
                succeeded += 1;
            }
            Ok((path, Err(e))) => {
                warn!("Request to {} failed: {}", path, e);
                failed += 1;
            }
            Err(e) => {
                error!("Request task did not complete: {}", e);
                failed += 1;
            }
        }
    }

    let report = HammerReport {
        path: config.path.clone(),
        requested: config.count as u64,
        settled: succeeded + failed,
        succeeded,
        failed,
        unique: aggregator.unique(),
        duplicates: aggregator.duplicates(),
        without_id: aggregator.without_id(),
        started_at,
        completed_at: Utc::now(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Unique entries: {}: duplicates: {} ({} failed requests, {:.2}s)",
        report.unique,
        report.duplicates,
        report.failed,
        start.elapsed().as_secs_f64()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cache_busted_query() {
        let mut rng = StdRng::seed_from_u64(42);

        let plain = cache_busted("/listings", &mut rng);
        assert!(plain.starts_with("/listings?c="));

        let with_query = cache_busted("/listings?page=2", &mut rng);
        assert!(with_query.starts_with("/listings?page=2&c="));

        assert_ne!(
            cache_busted("/listings", &mut rng),
            cache_busted("/listings", &mut rng)
        );
    }
}
