use alloy_primitives::Address;
use alloy_provider::{ProviderBuilder, WsConnect};
use tokio::sync::mpsc;

use weth_bindings::prelude::{CallOpts, TokenInfo, WatchOpts, Weth};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let url = std::env::var("WETH_RPC_URL").unwrap_or_else(|_| "ws://127.0.0.1:8545".to_string());
    let address: Address = std::env::var("WETH_ADDRESS")?.parse()?;

    let client = ProviderBuilder::new().on_ws(WsConnect::new(url)).await?;
    let weth = Weth::new(address, client);
    let info = TokenInfo::fetch(&weth, &CallOpts::default()).await?;

    let (tx, mut rx) = mpsc::channel(64);
    let sub = weth.watch_transfer(&WatchOpts::default(), tx, &[], &[]).await?;
    println!("Watching {} transfers, ctrl-c to stop", info.symbol);

    loop {
        tokio::select! {
            transfer = rx.recv() => {
                let Some(transfer) = transfer else { break };
                println!(
                    "{} -> {} | {} {} | block {:?}",
                    transfer.from,
                    transfer.to,
                    info.format_amount(transfer.value)?,
                    info.symbol,
                    transfer.raw.block_number
                );
            }
            _ = tokio::signal::ctrl_c() => {
                sub.unsubscribe().await?;
                return Ok(());
            }
        }
    }

    // the sink only closes once the subscription has ended
    sub.err().await
}
