use alloy_contract::private::{Ethereum, Network};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_provider::Provider;
use alloy_transport::Transport;

use super::opts::{CallOpts, TransactOpts};
use super::Weth;

/// A [Weth] binding with preset call and transact options
#[derive(Debug, Clone)]
pub struct WethSession<T, P, N = Ethereum> {
    pub contract: Weth<T, P, N>,
    pub call_opts: CallOpts,
    pub transact_opts: TransactOpts,
}

impl<T, P, N> WethSession<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N>,
    N: Network,
{
    pub fn new(contract: Weth<T, P, N>, call_opts: CallOpts, transact_opts: TransactOpts) -> Self {
        Self {
            contract,
            call_opts,
            transact_opts,
        }
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, anyhow::Error> {
        self.contract.allowance(&self.call_opts, owner, spender).await
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256, anyhow::Error> {
        self.contract.balance_of(&self.call_opts, account).await
    }

    pub async fn decimals(&self) -> Result<u8, anyhow::Error> {
        self.contract.decimals(&self.call_opts).await
    }

    pub async fn name(&self) -> Result<String, anyhow::Error> {
        self.contract.name(&self.call_opts).await
    }

    pub async fn owner(&self) -> Result<Address, anyhow::Error> {
        self.contract.owner(&self.call_opts).await
    }

    pub async fn symbol(&self) -> Result<String, anyhow::Error> {
        self.contract.symbol(&self.call_opts).await
    }

    pub async fn total_supply(&self) -> Result<U256, anyhow::Error> {
        self.contract.total_supply(&self.call_opts).await
    }

    pub async fn call_raw(&self, calldata: Bytes) -> Result<Bytes, anyhow::Error> {
        self.contract.call_raw(&self.call_opts, calldata).await
    }

    pub async fn approve(&self, spender: Address, amount: U256) -> Result<TxHash, anyhow::Error> {
        self.contract.approve(&self.transact_opts, spender, amount).await
    }

    pub async fn decrease_allowance(
        &self,
        spender: Address,
        subtracted_value: U256,
    ) -> Result<TxHash, anyhow::Error> {
        self.contract
            .decrease_allowance(&self.transact_opts, spender, subtracted_value)
            .await
    }

    pub async fn increase_allowance(
        &self,
        spender: Address,
        added_value: U256,
    ) -> Result<TxHash, anyhow::Error> {
        self.contract
            .increase_allowance(&self.transact_opts, spender, added_value)
            .await
    }

    pub async fn mint(&self, recipient: Address, amount: U256) -> Result<TxHash, anyhow::Error> {
        self.contract.mint(&self.transact_opts, recipient, amount).await
    }

    pub async fn renounce_ownership(&self) -> Result<TxHash, anyhow::Error> {
        self.contract.renounce_ownership(&self.transact_opts).await
    }

    pub async fn transfer(&self, recipient: Address, amount: U256) -> Result<TxHash, anyhow::Error> {
        self.contract.transfer(&self.transact_opts, recipient, amount).await
    }

    pub async fn transfer_from(
        &self,
        sender: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash, anyhow::Error> {
        self.contract
            .transfer_from(&self.transact_opts, sender, recipient, amount)
            .await
    }

    pub async fn transfer_ownership(&self, new_owner: Address) -> Result<TxHash, anyhow::Error> {
        self.contract.transfer_ownership(&self.transact_opts, new_owner).await
    }

    pub async fn transact_raw(&self, calldata: Bytes) -> Result<TxHash, anyhow::Error> {
        self.contract.transact_raw(&self.transact_opts, calldata).await
    }

    pub async fn transfer_value(&self) -> Result<TxHash, anyhow::Error> {
        self.contract.transfer_value(&self.transact_opts).await
    }
}
