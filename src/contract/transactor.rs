use alloy_contract::private::Network;
use alloy_contract::{CallBuilder, CallDecoder, RawCallBuilder};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_provider::{PendingTransactionBuilder, Provider};
use alloy_transport::Transport;
use tracing::trace;

use super::opts::TransactOpts;
use super::Weth;

/// State-changing accessors
///
/// Each one signs and broadcasts a transaction through the provider and returns its hash
/// without waiting for it to be mined.
impl<T, P, N> Weth<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N>,
    N: Network,
{
    /// `approve(address,uint256)` (0x095ea7b3)
    pub async fn approve(
        &self,
        opts: &TransactOpts,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, anyhow::Error> {
        send(opts.apply(self.instance.approve(spender, amount))).await
    }

    /// `decreaseAllowance(address,uint256)` (0xa457c2d7)
    pub async fn decrease_allowance(
        &self,
        opts: &TransactOpts,
        spender: Address,
        subtracted_value: U256,
    ) -> Result<TxHash, anyhow::Error> {
        send(opts.apply(self.instance.decreaseAllowance(spender, subtracted_value))).await
    }

    /// `increaseAllowance(address,uint256)` (0x39509351)
    pub async fn increase_allowance(
        &self,
        opts: &TransactOpts,
        spender: Address,
        added_value: U256,
    ) -> Result<TxHash, anyhow::Error> {
        send(opts.apply(self.instance.increaseAllowance(spender, added_value))).await
    }

    /// `mint(address,uint256)` (0x40c10f19), only callable by the owner
    pub async fn mint(
        &self,
        opts: &TransactOpts,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash, anyhow::Error> {
        send(opts.apply(self.instance.mint(recipient, amount))).await
    }

    /// `renounceOwnership()` (0x715018a6)
    pub async fn renounce_ownership(&self, opts: &TransactOpts) -> Result<TxHash, anyhow::Error> {
        send(opts.apply(self.instance.renounceOwnership())).await
    }

    /// `transfer(address,uint256)` (0xa9059cbb)
    pub async fn transfer(
        &self,
        opts: &TransactOpts,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash, anyhow::Error> {
        send(opts.apply(self.instance.transfer(recipient, amount))).await
    }

    /// `transferFrom(address,address,uint256)` (0x23b872dd)
    pub async fn transfer_from(
        &self,
        opts: &TransactOpts,
        sender: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash, anyhow::Error> {
        send(opts.apply(self.instance.transferFrom(sender, recipient, amount))).await
    }

    /// `transferOwnership(address)` (0xf2fde38b)
    pub async fn transfer_ownership(
        &self,
        opts: &TransactOpts,
        new_owner: Address,
    ) -> Result<TxHash, anyhow::Error> {
        send(opts.apply(self.instance.transferOwnership(new_owner))).await
    }

    /// Transaction with arbitrary calldata
    pub async fn transact_raw(
        &self,
        opts: &TransactOpts,
        calldata: Bytes,
    ) -> Result<TxHash, anyhow::Error> {
        let call = RawCallBuilder::new_raw(self.provider(), calldata).to(self.address());
        send(opts.apply(call)).await
    }

    /// Plain transfer of `opts.value` to the contract with empty calldata
    ///
    /// The contract has no fallback or receive function, so this reverts on chain
    pub async fn transfer_value(&self, opts: &TransactOpts) -> Result<TxHash, anyhow::Error> {
        self.transact_raw(opts, Bytes::new()).await
    }

    /// Wait until `tx_hash` is mined and return its receipt
    pub async fn wait_mined(&self, tx_hash: TxHash) -> Result<N::ReceiptResponse, anyhow::Error> {
        let receipt = PendingTransactionBuilder::new(self.provider().root(), tx_hash)
            .get_receipt()
            .await?;
        Ok(receipt)
    }
}

async fn send<T, P, D, N>(call: CallBuilder<T, P, D, N>) -> Result<TxHash, anyhow::Error>
where
    T: Transport + Clone,
    P: Provider<T, N>,
    D: CallDecoder,
    N: Network,
{
    let pending = call.send().await?;
    let tx_hash = *pending.tx_hash();
    trace!(%tx_hash, "Sent WETH transaction");
    Ok(tx_hash)
}
