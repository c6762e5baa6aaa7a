use alloy_contract::private::Network;
use alloy_contract::RawCallBuilder;
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::Provider;
use alloy_transport::Transport;

use super::opts::CallOpts;
use super::Weth;

/// Read-only accessors, executed as `eth_call`
impl<T, P, N> Weth<T, P, N>
where
    T: Transport + Clone,
    P: Provider<T, N>,
    N: Network,
{
    /// `allowance(address,address)` (0xdd62ed3e)
    pub async fn allowance(
        &self,
        opts: &CallOpts,
        owner: Address,
        spender: Address,
    ) -> Result<U256, anyhow::Error> {
        let call = opts.apply(self.instance.allowance(owner, spender));
        Ok(call.call().await?._0)
    }

    /// `balanceOf(address)` (0x70a08231)
    pub async fn balance_of(&self, opts: &CallOpts, account: Address) -> Result<U256, anyhow::Error> {
        let call = opts.apply(self.instance.balanceOf(account));
        Ok(call.call().await?._0)
    }

    /// `decimals()` (0x313ce567)
    pub async fn decimals(&self, opts: &CallOpts) -> Result<u8, anyhow::Error> {
        let call = opts.apply(self.instance.decimals());
        Ok(call.call().await?._0)
    }

    /// `name()` (0x06fdde03)
    pub async fn name(&self, opts: &CallOpts) -> Result<String, anyhow::Error> {
        let call = opts.apply(self.instance.name());
        Ok(call.call().await?._0)
    }

    /// `owner()` (0x8da5cb5b)
    pub async fn owner(&self, opts: &CallOpts) -> Result<Address, anyhow::Error> {
        let call = opts.apply(self.instance.owner());
        Ok(call.call().await?._0)
    }

    /// `symbol()` (0x95d89b41)
    pub async fn symbol(&self, opts: &CallOpts) -> Result<String, anyhow::Error> {
        let call = opts.apply(self.instance.symbol());
        Ok(call.call().await?._0)
    }

    /// `totalSupply()` (0x18160ddd)
    pub async fn total_supply(&self, opts: &CallOpts) -> Result<U256, anyhow::Error> {
        let call = opts.apply(self.instance.totalSupply());
        Ok(call.call().await?._0)
    }

    /// Static call with arbitrary calldata, returning the undecoded output
    pub async fn call_raw(&self, opts: &CallOpts, calldata: Bytes) -> Result<Bytes, anyhow::Error> {
        let call = RawCallBuilder::new_raw(self.provider(), calldata).to(self.address());
        let output = opts.apply(call).call().await?;
        Ok(output)
    }
}
