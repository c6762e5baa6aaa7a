use alloy_contract::private::Network;
use alloy_primitives::{utils::format_units, Address, U256};
use alloy_provider::Provider;
use alloy_transport::Transport;

use crate::contract::opts::CallOpts;
use crate::contract::Weth;
use serde::{Deserialize, Serialize};
use tokio::try_join;

/// Metadata of a deployed WETH token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
    pub owner: Address,
}

impl TokenInfo {
    /// Read all metadata concurrently at the block given by `opts`
    pub async fn fetch<T, P, N>(weth: &Weth<T, P, N>, opts: &CallOpts) -> Result<Self, anyhow::Error>
    where
        T: Transport + Clone,
        P: Provider<T, N>,
        N: Network,
    {
        let (name, symbol, decimals, total_supply, owner) = try_join!(
            weth.name(opts),
            weth.symbol(opts),
            weth.decimals(opts),
            weth.total_supply(opts),
            weth.owner(opts),
        )?;

        Ok(Self {
            address: weth.address(),
            name,
            symbol,
            decimals,
            total_supply,
            owner,
        })
    }

    /// Render a raw token amount using this token's decimals
    pub fn format_amount(&self, amount: U256) -> Result<String, anyhow::Error> {
        let s = format_units(amount, self.decimals)?;
        Ok(s)
    }

    /// Whether ownership was renounced, after which nobody can mint
    pub fn is_renounced(&self) -> bool {
        self.owner == Address::ZERO
    }
}
