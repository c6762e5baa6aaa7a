use std::future::Future;

use alloy_rpc_types::Log;
use futures::{Stream, StreamExt};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::contract::events::{unpack_log, ContractEvent};
use crate::error::BindingError;

/// A live event subscription forwarding decoded events into a caller-supplied sink
///
/// The forwarding task stops when the subscription is unsubscribed or dropped, when the
/// upstream log stream ends, when a log fails to decode, or when the sink's receiver is dropped.
/// On every exit the task awaits its `release` future, which cancels the upstream subscription.
#[derive(Debug)]
pub struct Subscription {
    quit: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), anyhow::Error>>,
}

impl Subscription {
    /// Spawn a task forwarding every log of `logs`, decoded as `E`, into `sink`
    ///
    /// `release` runs once the forwarding stops, whatever the reason
    pub fn spawn<S, E, F>(logs: S, sink: mpsc::Sender<E>, release: F) -> Self
    where
        S: Stream<Item = Log> + Send + 'static,
        E: ContractEvent + Send + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        let (quit_tx, quit_rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let res = forward(logs, sink, quit_rx).await;
            release.await;
            debug!("Log subscription released");
            res
        });
        Self {
            quit: Some(quit_tx),
            handle,
        }
    }

    /// Whether the forwarding task has terminated
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop forwarding and release the upstream subscription
    ///
    /// Returns the error the task failed with if it had already terminated on its own
    pub async fn unsubscribe(mut self) -> Result<(), anyhow::Error> {
        if let Some(quit) = self.quit.take() {
            // the task may already be gone
            let _ = quit.send(());
        }
        self.handle.await?
    }

    /// Wait until the subscription terminates and return how it ended
    pub async fn err(self) -> Result<(), anyhow::Error> {
        let Subscription { quit, handle } = self;
        let res = handle.await?;
        drop(quit);
        res
    }
}

async fn forward<S, E>(
    logs: S,
    sink: mpsc::Sender<E>,
    mut quit: oneshot::Receiver<()>,
) -> Result<(), anyhow::Error>
where
    S: Stream<Item = Log> + Send + 'static,
    E: ContractEvent + Send + 'static,
{
    let mut logs = Box::pin(logs);
    debug!("Log subscription started");

    loop {
        tokio::select! {
            _ = &mut quit => {
                debug!("Log subscription cancelled");
                return Ok(());
            }
            log = logs.next() => {
                let Some(log) = log else {
                    debug!("Log subscription closed upstream");
                    return Err(BindingError::SubscriptionClosed.into());
                };

                trace!(block = ?log.block_number, index = ?log.log_index, "Forwarding log");
                let event = unpack_log::<E>(log)?;

                tokio::select! {
                    res = sink.send(event) => {
                        if res.is_err() {
                            debug!("Event sink dropped, stopping subscription");
                            return Ok(());
                        }
                    }
                    _ = &mut quit => {
                        debug!("Log subscription cancelled");
                        return Ok(());
                    }
                }
            }
        }
    }
}
