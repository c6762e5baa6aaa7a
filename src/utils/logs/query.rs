use alloy_rpc_types::{BlockNumberOrTag, Filter, Log};

use alloy_contract::private::Network;
use alloy_provider::Provider;
use alloy_transport::Transport;

use anyhow::anyhow;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinHandle;

use tracing::trace;

/// Widest block range requested from the node in a single `eth_getLogs` call
pub const LOG_QUERY_CHUNK: u64 = 100_000;

const MAX_CONCURRENT_QUERIES: usize = 5;

/// Get the logs matching `filter` between `from_block` and `to_block` (both inclusive)
///
/// Wide ranges are split into chunks of [LOG_QUERY_CHUNK] blocks fetched concurrently.
/// Any failed chunk fails the whole query. Logs are returned in chain order.
///
/// ## Arguments
///
/// * `client` - The provider client
/// * `filter` - Address and topic filter, its block range is overwritten
/// * `from_block` - First block of the range
/// * `to_block` - Last block of the range
pub async fn get_logs_in_range<T, P, N>(
    client: P,
    filter: Filter,
    from_block: u64,
    to_block: u64,
) -> Result<Vec<Log>, anyhow::Error>
where
    T: Transport + Clone,
    P: Provider<T, N> + Clone + 'static,
    N: Network,
{
    if from_block > to_block {
        return Err(anyhow!(
            "Start block {} is greater than end block {}",
            from_block,
            to_block
        ));
    }

    trace!("Fetching logs from block {} to {}", from_block, to_block);

    if to_block - from_block < LOG_QUERY_CHUNK {
        let filter = filter
            .from_block(BlockNumberOrTag::Number(from_block))
            .to_block(BlockNumberOrTag::Number(to_block));
        let logs = client.get_logs(&filter).await?;
        return Ok(logs);
    }

    query_chunks(from_block, to_block, LOG_QUERY_CHUNK, |start_block, end_block| {
        let client = client.clone();
        let filter = filter
            .clone()
            .from_block(BlockNumberOrTag::Number(start_block))
            .to_block(BlockNumberOrTag::Number(end_block));
        async move { Ok(client.get_logs(&filter).await?) }
    })
    .await
}

/// Run `query` over every `chunk`-sized sub range of `[from_block, to_block]`
///
/// At most [MAX_CONCURRENT_QUERIES] queries are in flight. The merged logs are sorted by
/// block number and log index.
async fn query_chunks<F, Fut>(
    from_block: u64,
    to_block: u64,
    chunk: u64,
    query: F,
) -> Result<Vec<Log>, anyhow::Error>
where
    F: Fn(u64, u64) -> Fut,
    Fut: Future<Output = Result<Vec<Log>, anyhow::Error>> + Send + 'static,
{
    let logs = Arc::new(Mutex::new(Vec::new()));
    let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_QUERIES));

    let mut tasks: Vec<JoinHandle<Result<(), anyhow::Error>>> = Vec::new();

    for (start_block, end_block) in chunk_ranges(from_block, to_block, chunk) {
        let logs_clone = Arc::clone(&logs);
        let permit = Arc::clone(&semaphore).acquire_owned().await?;

        trace!("Querying logs for block range: {} - {}", start_block, end_block);
        let log_query = query(start_block, end_block);

        let task = tokio::spawn(async move {
            let log_chunk = log_query.await?;
            let mut logs_lock = logs_clone.lock().await;
            logs_lock.extend(log_chunk);
            drop(permit);
            Ok(())
        });

        tasks.push(task);
    }

    for task in tasks {
        task.await??;
    }

    let mut logs = Arc::try_unwrap(logs)
        .map_err(|_| anyhow!("Log buffer is still shared after all queries finished"))?
        .into_inner();

    // chunks complete in any order
    logs.sort_by_key(|log| (log.block_number, log.log_index));
    Ok(logs)
}

/// Split `[from, to]` into consecutive inclusive ranges of at most `size` blocks
pub fn chunk_ranges(from: u64, to: u64, size: u64) -> Vec<(u64, u64)> {
    let mut ranges = Vec::new();
    if size == 0 || from > to {
        return ranges;
    }

    let mut start = from;
    loop {
        let end = start.saturating_add(size - 1).min(to);
        ranges.push((start, end));
        if end == to {
            break;
        }
        start = end + 1;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::events::tests::{transfer_log, ALICE, BOB};
    use std::time::Duration;

    /// Two logs per chunk, listed out of order, the first chunk finishing last
    async fn slow_first_chunk(start: u64, end: u64) -> Result<Vec<Log>, anyhow::Error> {
        if start == 0 {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        let mut late = transfer_log(ALICE, BOB, end, end);
        late.log_index = Some(1);
        let mut early = transfer_log(BOB, ALICE, start, start);
        early.log_index = Some(0);
        Ok(vec![late, early])
    }

    #[tokio::test]
    async fn chunked_query_merges_in_chain_order() {
        let logs = query_chunks(0, 29, 10, |start, end| slow_first_chunk(start, end))
            .await
            .unwrap();

        let order: Vec<_> = logs
            .iter()
            .map(|log| (log.block_number.unwrap(), log.log_index.unwrap()))
            .collect();
        assert_eq!(
            order,
            vec![(0, 0), (9, 1), (10, 0), (19, 1), (20, 0), (29, 1)]
        );
    }

    #[tokio::test]
    async fn chunked_query_fails_on_any_chunk() {
        let res = query_chunks(0, 29, 10, |start, end| async move {
            if start == 10 {
                return Err(anyhow!("node rejected range {}-{}", start, end));
            }
            Ok(vec![transfer_log(ALICE, BOB, 1, start)])
        })
        .await;

        let err = res.unwrap_err();
        assert_eq!(err.to_string(), "node rejected range 10-19");
    }

    #[tokio::test]
    async fn reversed_range_is_rejected() {
        use alloy_provider::ProviderBuilder;

        let client = ProviderBuilder::new().on_http("http://127.0.0.1:1".parse().unwrap());
        let res = get_logs_in_range(client, Filter::new(), 10, 5).await;
        assert!(res.unwrap_err().to_string().contains("greater than end block"));
    }

    #[test]
    fn chunk_ranges_cover_range_without_overlap() {
        let ranges = chunk_ranges(0, 250_000, LOG_QUERY_CHUNK);
        assert_eq!(
            ranges,
            vec![(0, 99_999), (100_000, 199_999), (200_000, 250_000)]
        );
    }

    #[test]
    fn chunk_ranges_edge_cases() {
        assert_eq!(chunk_ranges(5, 5, 10), vec![(5, 5)]);
        assert_eq!(chunk_ranges(0, 9, 10), vec![(0, 9)]);
        assert_eq!(chunk_ranges(0, 10, 10), vec![(0, 9), (10, 10)]);
        assert!(chunk_ranges(10, 5, 10).is_empty());
        assert!(chunk_ranges(0, 5, 0).is_empty());
        assert_eq!(chunk_ranges(u64::MAX - 1, u64::MAX, 10), vec![(u64::MAX - 1, u64::MAX)]);
    }
}
