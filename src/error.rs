use alloy_primitives::TxHash;
use thiserror::Error;

/// Failures the underlying alloy stack has no variant for
///
/// Everything else is passed through unmodified inside [anyhow::Error]
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("log subscription closed by the upstream transport")]
    SubscriptionClosed,

    #[error("deployment transaction {0} has no contract address in its receipt")]
    MissingContractAddress(TxHash),

    #[error("execution reverted: {0}")]
    Reverted(String),

    #[error("execution halted: {0}")]
    Halted(String),
}
