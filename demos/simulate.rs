use alloy_primitives::{address, utils::{format_units, parse_units}, U256};

use weth_bindings::prelude::{SimulatedWeth, WethTransfer, WETH};

fn main() -> Result<(), anyhow::Error> {
    let owner = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    let alice = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

    let (mut sim, _) = SimulatedWeth::deploy(owner, "Wrapped Ether", "WETH")?;
    println!("Simulated WETH deployed at {}", sim.address());

    let amount = parse_units("100", 18)?.get_absolute();
    sim.transact(owner, &WETH::mintCall { _recepient: owner, _amount: amount })?;
    sim.transact(owner, &WETH::transferCall { recipient: alice, amount: amount / U256::from(4) })?;

    // alice cannot send more than she holds
    let res = sim.transact(alice, &WETH::transferCall { recipient: owner, amount });
    if let Err(e) = res {
        println!("Alice CANNOT transfer: {}", e);
    }

    for transfer in sim.events::<WethTransfer>() {
        let transfer = transfer?;
        println!(
            "Transfer {} -> {} amount {} (block {:?})",
            transfer.from,
            transfer.to,
            format_units(transfer.value, 18)?,
            transfer.raw.block_number
        );
    }

    println!("Alice balance: {}", format_units(sim.balance_of(alice)?, 18)?);
    Ok(())
}
