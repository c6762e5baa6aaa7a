use alloy_contract::private::Network;
use alloy_contract::{CallBuilder, CallDecoder};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::BlockId;
use alloy_transport::Transport;

use serde::{Deserialize, Serialize};

/// Options for read-only calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallOpts {
    /// The sender the call is simulated from
    pub from: Option<Address>,

    /// The block to execute the call at, `None` for the latest block
    pub block: Option<BlockId>,
}

impl CallOpts {
    pub fn at_block(block: BlockId) -> Self {
        Self {
            block: Some(block),
            ..Default::default()
        }
    }

    pub(crate) fn apply<T, P, D, N>(&self, call: CallBuilder<T, P, D, N>) -> CallBuilder<T, P, D, N>
    where
        T: Transport + Clone,
        P: Provider<T, N>,
        D: CallDecoder,
        N: Network,
    {
        let call = call.block(self.block.unwrap_or(BlockId::latest()));
        match self.from {
            Some(from) => call.from(from),
            None => call,
        }
    }
}

/// Options for state-changing transactions
///
/// Any field left as `None` is filled in by the provider (nonce, gas and fee fillers)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactOpts {
    pub from: Option<Address>,

    /// Native value sent along with the transaction
    pub value: Option<U256>,
    pub gas_limit: Option<u128>,

    /// Legacy gas price, takes precedence over the EIP-1559 fields when set
    pub gas_price: Option<u128>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
    pub nonce: Option<u64>,
}

impl TransactOpts {
    pub fn with_sender(from: Address) -> Self {
        Self {
            from: Some(from),
            ..Default::default()
        }
    }

    pub(crate) fn apply<T, P, D, N>(&self, call: CallBuilder<T, P, D, N>) -> CallBuilder<T, P, D, N>
    where
        T: Transport + Clone,
        P: Provider<T, N>,
        D: CallDecoder,
        N: Network,
    {
        let mut call = call;
        if let Some(from) = self.from {
            call = call.from(from);
        }
        if let Some(value) = self.value {
            call = call.value(value);
        }
        if let Some(gas) = self.gas_limit {
            call = call.gas(gas);
        }
        if let Some(gas_price) = self.gas_price {
            call = call.gas_price(gas_price);
        } else {
            if let Some(max_fee) = self.max_fee_per_gas {
                call = call.max_fee_per_gas(max_fee);
            }
            if let Some(priority_fee) = self.max_priority_fee_per_gas {
                call = call.max_priority_fee_per_gas(priority_fee);
            }
        }
        if let Some(nonce) = self.nonce {
            call = call.nonce(nonce);
        }
        call
    }
}

/// Block range for historical log queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOpts {
    /// First block of the range (inclusive)
    pub start: u64,

    /// Last block of the range (inclusive), `None` for the latest block
    pub end: Option<u64>,
}

impl FilterOpts {
    pub fn new(start: u64, end: Option<u64>) -> Self {
        Self { start, end }
    }
}

/// Options for live log subscriptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchOpts {
    /// Passed to the node as the subscription's `fromBlock`, `None` to start from now
    ///
    /// Most nodes ignore it for `eth_subscribe`, so earlier logs are not guaranteed to be replayed
    pub start: Option<u64>,
}
