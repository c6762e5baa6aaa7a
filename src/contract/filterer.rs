use alloy_contract::private::Network;
use alloy_primitives::{Address, B256};
use alloy_provider::Provider;
use alloy_rpc_types::{BlockNumberOrTag, Filter, Log};
use alloy_sol_types::SolEvent;
use alloy_transport::Transport;
use tokio::sync::mpsc;
use tracing::debug;

use super::events::{
    unpack_log, ContractEvent, EventIterator, WethApproval, WethOwnershipTransferred,
    WethTransfer,
};
use super::opts::{FilterOpts, WatchOpts};
use super::Weth;
use crate::utils::logs::query::get_logs_in_range;
use crate::utils::subscription::Subscription;

/// Build the log filter for event `E` emitted by `address`
///
/// `rules` holds the accepted values of each indexed parameter in declaration order.
/// An empty rule matches anything, several values in one rule are OR-ed.
pub fn event_filter<E: ContractEvent>(address: Address, rules: &[&[Address]]) -> Filter {
    let mut filter = Filter::new()
        .address(address)
        .event_signature(E::Sol::SIGNATURE_HASH);

    // topic 0 is the event signature
    for (i, rule) in rules.iter().enumerate().take(3) {
        if rule.is_empty() {
            continue;
        }
        let words: Vec<B256> = rule.iter().map(|addr| addr.into_word()).collect();
        filter.topics[i + 1] = words.into();
    }
    filter
}

/// Historical log queries and live subscriptions
impl<T, P, N> Weth<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N> + Clone + 'static,
    N: Network,
{
    /// `Approval` logs in the `opts` range, filtered by owner and spender
    pub async fn filter_approval(
        &self,
        opts: &FilterOpts,
        owner: &[Address],
        spender: &[Address],
    ) -> Result<EventIterator<WethApproval>, anyhow::Error> {
        self.filter_logs(opts, &[owner, spender]).await
    }

    /// Subscribe to new `Approval` logs, filtered by owner and spender
    pub async fn watch_approval(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<WethApproval>,
        owner: &[Address],
        spender: &[Address],
    ) -> Result<Subscription, anyhow::Error> {
        self.watch_logs(opts, sink, &[owner, spender]).await
    }

    pub async fn filter_ownership_transferred(
        &self,
        opts: &FilterOpts,
        previous_owner: &[Address],
        new_owner: &[Address],
    ) -> Result<EventIterator<WethOwnershipTransferred>, anyhow::Error> {
        self.filter_logs(opts, &[previous_owner, new_owner]).await
    }

    pub async fn watch_ownership_transferred(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<WethOwnershipTransferred>,
        previous_owner: &[Address],
        new_owner: &[Address],
    ) -> Result<Subscription, anyhow::Error> {
        self.watch_logs(opts, sink, &[previous_owner, new_owner]).await
    }

    /// `Transfer` logs in the `opts` range, filtered by sender and recipient
    pub async fn filter_transfer(
        &self,
        opts: &FilterOpts,
        from: &[Address],
        to: &[Address],
    ) -> Result<EventIterator<WethTransfer>, anyhow::Error> {
        self.filter_logs(opts, &[from, to]).await
    }

    /// Subscribe to new `Transfer` logs, filtered by sender and recipient
    pub async fn watch_transfer(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<WethTransfer>,
        from: &[Address],
        to: &[Address],
    ) -> Result<Subscription, anyhow::Error> {
        self.watch_logs(opts, sink, &[from, to]).await
    }

    /// Query the logs of event `E` and decode them lazily
    pub async fn filter_logs<E: ContractEvent>(
        &self,
        opts: &FilterOpts,
        rules: &[&[Address]],
    ) -> Result<EventIterator<E>, anyhow::Error> {
        let end = match opts.end {
            Some(end) => end,
            None => self.provider().get_block_number().await?,
        };

        let filter = event_filter::<E>(self.address(), rules);
        let logs = get_logs_in_range(self.provider().clone(), filter, opts.start, end).await?;
        Ok(EventIterator::new(logs))
    }

    /// Subscribe to the logs of event `E`, forwarding decoded events into `sink`
    ///
    /// Needs a pubsub transport (WebSocket or IPC). The node-side subscription is cancelled
    /// with `eth_unsubscribe` once the returned [Subscription] stops.
    pub async fn watch_logs<E>(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<E>,
        rules: &[&[Address]],
    ) -> Result<Subscription, anyhow::Error>
    where
        E: ContractEvent + Send + 'static,
    {
        let mut filter = event_filter::<E>(self.address(), rules);
        if let Some(start) = opts.start {
            filter = filter.from_block(BlockNumberOrTag::Number(start));
        }

        let sub = self.provider().subscribe_logs(&filter).await?;
        let id = *sub.local_id();
        debug!(address = %self.address(), event = E::Sol::SIGNATURE, %id, "Subscribed to WETH logs");

        let provider = self.provider().clone();
        let release = async move {
            if let Err(e) = provider.unsubscribe(id).await {
                debug!(%id, "Failed to cancel log subscription: {}", e);
            }
        };
        Ok(Subscription::spawn(sub.into_stream(), sink, release))
    }
}

/// Decoding of single logs, no provider access
impl<T, P, N> Weth<T, P, N> {
    pub fn parse_approval(&self, log: Log) -> Result<WethApproval, anyhow::Error> {
        unpack_log(log)
    }

    pub fn parse_ownership_transferred(
        &self,
        log: Log,
    ) -> Result<WethOwnershipTransferred, anyhow::Error> {
        unpack_log(log)
    }

    pub fn parse_transfer(&self, log: Log) -> Result<WethTransfer, anyhow::Error> {
        unpack_log(log)
    }
}
