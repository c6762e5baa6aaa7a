pub mod caller;
pub mod events;
pub mod filterer;
pub mod opts;
pub mod session;
pub mod transactor;

use alloy_contract::private::{Ethereum, Network};
use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, TxHash};
use alloy_provider::Provider;
use alloy_transport::Transport;
use tracing::debug;

use crate::abi::weth::WETH;
use crate::error::BindingError;

use self::opts::TransactOpts;

/// A WETH contract bound to an address and a provider
///
/// Read calls, transactions and log queries all go through the same provider
#[derive(Debug, Clone)]
pub struct Weth<T, P, N = Ethereum> {
    instance: WETH::WETHInstance<T, P, N>,
}

impl<T, P, N> Weth<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N>,
    N: Network,
{
    /// Bind to an already deployed contract
    pub fn new(address: Address, client: P) -> Self {
        Self {
            instance: WETH::new(address, client),
        }
    }

    /// Deploy a new contract and bind to it
    ///
    /// Waits for the deployment receipt and returns the contract address and the deployment tx hash
    pub async fn deploy(
        client: P,
        opts: &TransactOpts,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<(Address, TxHash, Self), anyhow::Error> {
        let (address, tx_hash) = {
            let builder = opts.apply(WETH::deploy_builder(&client, name.into(), symbol.into()));
            let pending = builder.send().await?;
            let tx_hash = *pending.tx_hash();
            debug!(%tx_hash, "Sent WETH deployment");

            let receipt = pending.get_receipt().await?;
            let address = receipt
                .contract_address()
                .ok_or(BindingError::MissingContractAddress(tx_hash))?;
            (address, tx_hash)
        };

        debug!(%address, "WETH deployed");
        Ok((address, tx_hash, Self::new(address, client)))
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub fn provider(&self) -> &P {
        self.instance.provider()
    }

    /// The underlying `sol!` instance, for anything not covered by this binding
    pub fn instance(&self) -> &WETH::WETHInstance<T, P, N> {
        &self.instance
    }
}
