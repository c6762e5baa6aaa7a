use alloy_network::EthereumWallet;
use alloy_primitives::utils::parse_units;
use alloy_provider::{ProviderBuilder, WsConnect};
use alloy_signer_local::PrivateKeySigner;

use std::sync::Arc;

use weth_bindings::prelude::{CallOpts, FilterOpts, TokenInfo, TransactOpts, Weth};

// anvil's first dev account
const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let url = std::env::var("WETH_RPC_URL").unwrap_or_else(|_| "ws://127.0.0.1:8545".to_string());
    let key = std::env::var("WETH_PRIVATE_KEY").unwrap_or_else(|_| DEV_KEY.to_string());

    let signer: PrivateKeySigner = key.parse()?;
    let owner = signer.address();
    let client = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_ws(WsConnect::new(url))
        .await?;
    let client = Arc::new(client);

    let opts = TransactOpts::with_sender(owner);
    let (address, tx_hash, weth) =
        Weth::deploy(client.clone(), &opts, "Wrapped Ether", "WETH").await?;
    println!("Deployed WETH at {} (tx {})", address, tx_hash);

    let amount = parse_units("10", 18)?.get_absolute();
    let mint = weth.mint(&opts, owner, amount).await?;
    weth.wait_mined(mint).await?;

    let info = TokenInfo::fetch(&weth, &CallOpts::default()).await?;
    let balance = weth.balance_of(&CallOpts::default(), owner).await?;
    println!(
        "{} ({}) supply: {} | owner balance: {}",
        info.name,
        info.symbol,
        info.format_amount(info.total_supply)?,
        info.format_amount(balance)?
    );

    for transfer in weth.filter_transfer(&FilterOpts::default(), &[], &[owner]).await? {
        let transfer = transfer?;
        println!(
            "Transfer {} -> {} amount {} (block {:?})",
            transfer.from,
            transfer.to,
            info.format_amount(transfer.value)?,
            transfer.raw.block_number
        );
    }

    Ok(())
}
