use crate::admin::{AdminClientFactory, ClusterMetadataSource};
use crate::clock::Clock;
use crate::error::ReadyError;
use crate::queries::wait_cluster_ready::request::WaitClusterReadyQueryInternal;
use crate::queries::wait_cluster_ready::response::ClusterReady;
use std::time::Duration;
use tracing::{info, warn};

/// Upper bound for a single metadata request.
pub const DEFAULT_METADATA_TIMEOUT: Duration = Duration::from_millis(5000);
pub const METADATA_REQUEST_BACKOFF: Duration = Duration::from_millis(1000);
/// Less than this is treated as an exhausted budget, librdkafka timeouts are whole milliseconds.
const MIN_REQUEST_TIMEOUT: Duration = Duration::from_millis(1);

/// Polls cluster metadata until at least `min_brokers` brokers are reported
/// or `timeout` elapses. Failed metadata requests count as "not ready yet".
///
/// Both the request timeout and the backoff are capped by the remaining
/// budget, so the loop never runs past the deadline.
pub fn wait_cluster_ready<F, C>(
    query: &WaitClusterReadyQueryInternal,
    factory: &F,
    clock: &C,
) -> Result<ClusterReady, ReadyError>
where
    F: AdminClientFactory,
    C: Clock,
{
    // dropped on every return below
    let client = factory
        .create(&query.config)
        .map_err(ReadyError::ClientCreation)?;

    let start = clock.now();
    let mut broker_count = 0;
    let mut attempts = 0;

    loop {
        let elapsed = clock.now().saturating_duration_since(start);
        let remaining = query.timeout.saturating_sub(elapsed);

        if remaining < MIN_REQUEST_TIMEOUT {
            return Err(ReadyError::Timeout {
                expected: query.min_brokers,
                found: broker_count,
            });
        }

        let metadata_timeout = remaining.min(DEFAULT_METADATA_TIMEOUT);
        attempts += 1;

        match client.broker_count(metadata_timeout) {
            Err(e) => warn!("Error getting metadata: {e:#}. Retrying..."),
            Ok(count) => {
                broker_count = count;
                if broker_count >= query.min_brokers {
                    info!(
                        "Kafka is ready: found {} brokers (expected {})",
                        broker_count, query.min_brokers
                    );
                    return Ok(ClusterReady {
                        broker_count,
                        attempts,
                    });
                }

                info!(
                    "Expected {} brokers but found only {}. Retrying...",
                    query.min_brokers, broker_count
                );
            }
        }

        // recomputed so a slow request plus backoff can't run past the deadline
        let elapsed = clock.now().saturating_duration_since(start);
        let remaining = query.timeout.saturating_sub(elapsed);
        clock.sleep(remaining.min(METADATA_REQUEST_BACKOFF));
    }
}
