//! In-memory EVM running the WETH bytecode, for testing code built on the binding without a node

pub mod utils;

use alloy_primitives::{Address, Bytes, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::{SolCall, SolEvent};
use anyhow::anyhow;
use revm::db::{CacheDB, EmptyDB};
use revm::primitives::{Output, TransactTo};
use revm::Evm;
use tracing::trace;

use crate::abi::weth::{deploy_code, WETH};
use crate::contract::events::{ContractEvent, EventIterator};
use self::utils::{into_success, new_evm};

const SIM_GAS_LIMIT: u64 = 30_000_000;

/// Outcome of a committed simulated transaction
#[derive(Debug, Clone)]
pub struct SimReceipt {
    pub block_number: u64,
    pub gas_used: u64,
    pub output: Bytes,
    pub logs: Vec<Log>,
}

impl SimReceipt {
    /// Decode the transaction output as the return value of `C`
    pub fn decode_return<C: SolCall>(&self) -> Result<C::Return, anyhow::Error> {
        let ret = C::abi_decode_returns(&self.output, true)?;
        Ok(ret)
    }
}

/// A WETH contract deployed on a fresh in-memory chain
///
/// Every committed transaction is mined in its own block
pub struct SimulatedWeth {
    evm: Evm<'static, (), CacheDB<EmptyDB>>,
    address: Address,
    block_number: u64,
    logs: Vec<Log>,
}

impl SimulatedWeth {
    /// Deploy the contract from `deployer`, who becomes its owner
    pub fn deploy(
        deployer: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<(Self, SimReceipt), anyhow::Error> {
        let block_number = 1;
        let mut evm = new_evm(CacheDB::new(EmptyDB::new()), block_number);

        evm.tx_mut().caller = deployer;
        evm.tx_mut().data = deploy_code(name, symbol);
        evm.tx_mut().value = U256::ZERO;
        evm.tx_mut().gas_limit = SIM_GAS_LIMIT;
        evm.tx_mut().transact_to = TransactTo::Create;

        let res = evm
            .transact_commit()
            .map_err(|e| anyhow!("Failed to deploy WETH: {:?}", e))?;
        let (output, logs, gas_used) = into_success(res)?;

        let address = match output {
            Output::Create(_, Some(address)) => address,
            _ => return Err(anyhow!("Contract creation returned no address")),
        };
        trace!(%address, gas_used, "Deployed simulated WETH");

        let logs = rpc_logs(logs, block_number);
        let receipt = SimReceipt {
            block_number,
            gas_used,
            output: Bytes::new(),
            logs: logs.clone(),
        };

        let sim = Self {
            evm,
            address,
            block_number,
            logs,
        };
        Ok((sim, receipt))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    /// Execute `call` without committing any state change
    pub fn call<C: SolCall>(&mut self, caller: Address, call: &C) -> Result<C::Return, anyhow::Error> {
        self.prepare(caller, call.abi_encode());

        let res = self
            .evm
            .transact()
            .map_err(|e| anyhow!("Failed to call WETH: {:?}", e))?;
        let (output, _, _) = into_success(res.result)?;

        let ret = C::abi_decode_returns(output.data(), true)?;
        Ok(ret)
    }

    /// Execute `call` in a new block and commit its state changes
    pub fn transact<C: SolCall>(&mut self, caller: Address, call: &C) -> Result<SimReceipt, anyhow::Error> {
        self.block_number += 1;
        self.evm.block_mut().number = U256::from(self.block_number);
        self.prepare(caller, call.abi_encode());

        let res = self
            .evm
            .transact_commit()
            .map_err(|e| anyhow!("Failed to transact WETH: {:?}", e))?;
        let (output, logs, gas_used) = into_success(res)?;
        trace!(block = self.block_number, gas_used, "Committed simulated transaction");

        let logs = rpc_logs(logs, self.block_number);
        self.logs.extend(logs.iter().cloned());

        Ok(SimReceipt {
            block_number: self.block_number,
            gas_used,
            output: output.into_data(),
            logs,
        })
    }

    pub fn balance_of(&mut self, account: Address) -> Result<U256, anyhow::Error> {
        Ok(self.call(Address::ZERO, &WETH::balanceOfCall { account })?._0)
    }

    pub fn allowance(&mut self, owner: Address, spender: Address) -> Result<U256, anyhow::Error> {
        Ok(self.call(Address::ZERO, &WETH::allowanceCall { owner, spender })?._0)
    }

    /// Every log emitted since deployment, in chain order
    pub fn logs(&self) -> &[Log] {
        &self.logs
    }

    /// Every emitted event of type `E` since deployment
    pub fn events<E: ContractEvent>(&self) -> EventIterator<E> {
        let logs = self
            .logs
            .iter()
            .filter(|log| log.topics().first() == Some(&E::Sol::SIGNATURE_HASH))
            .cloned()
            .collect();
        EventIterator::new(logs)
    }

    fn prepare(&mut self, caller: Address, data: Vec<u8>) {
        let tx = self.evm.tx_mut();
        tx.caller = caller;
        tx.data = data.into();
        tx.value = U256::ZERO;
        tx.gas_limit = SIM_GAS_LIMIT;
        tx.transact_to = TransactTo::Call(self.address);
    }
}

fn rpc_logs(logs: Vec<alloy_primitives::Log>, block_number: u64) -> Vec<Log> {
    logs.into_iter()
        .enumerate()
        .map(|(index, inner)| Log {
            inner,
            block_number: Some(block_number),
            transaction_index: Some(0),
            log_index: Some(index as u64),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::events::{
        unpack_log, WethApproval, WethEvent, WethOwnershipTransferred, WethTransfer,
    };
    use crate::error::BindingError;
    use alloy_primitives::address;

    const OWNER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const ALICE: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
    const BOB: Address = address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");

    fn deployed() -> SimulatedWeth {
        SimulatedWeth::deploy(OWNER, "Wrapped Ether", "WETH").unwrap().0
    }

    fn reverted_with(err: anyhow::Error, reason: &str) -> bool {
        match err.downcast_ref::<BindingError>() {
            Some(BindingError::Reverted(msg)) => msg.contains(reason),
            _ => false,
        }
    }

    #[test]
    fn deploy_sets_metadata_and_owner() {
        let (mut sim, receipt) = SimulatedWeth::deploy(OWNER, "Wrapped Ether", "WETH").unwrap();

        assert_eq!(sim.call(OWNER, &WETH::nameCall {}).unwrap()._0, "Wrapped Ether");
        assert_eq!(sim.call(OWNER, &WETH::symbolCall {}).unwrap()._0, "WETH");
        assert_eq!(sim.call(OWNER, &WETH::decimalsCall {}).unwrap()._0, 18);
        assert_eq!(sim.call(OWNER, &WETH::ownerCall {}).unwrap()._0, OWNER);
        assert_eq!(sim.call(OWNER, &WETH::totalSupplyCall {}).unwrap()._0, U256::ZERO);

        assert_eq!(receipt.logs.len(), 1);
        let ownership: WethOwnershipTransferred = unpack_log(receipt.logs[0].clone()).unwrap();
        assert_eq!(ownership.previous_owner, Address::ZERO);
        assert_eq!(ownership.new_owner, OWNER);
        assert_eq!(ownership.raw.inner.address, sim.address());
    }

    #[test]
    fn owner_mints_and_emits_transfer_from_zero() {
        let mut sim = deployed();
        let amount = U256::from(1_000_000u64);

        let receipt = sim
            .transact(OWNER, &WETH::mintCall { _recepient: ALICE, _amount: amount })
            .unwrap();
        assert!(receipt.decode_return::<WETH::mintCall>().unwrap()._0);
        assert_eq!(receipt.block_number, 2);

        let transfer: WethTransfer = unpack_log(receipt.logs[0].clone()).unwrap();
        assert!(transfer.is_mint());
        assert_eq!(transfer.to, ALICE);
        assert_eq!(transfer.value, amount);

        assert_eq!(sim.balance_of(ALICE).unwrap(), amount);
        assert_eq!(sim.call(OWNER, &WETH::totalSupplyCall {}).unwrap()._0, amount);
    }

    #[test]
    fn only_owner_can_mint() {
        let mut sim = deployed();
        let err = sim
            .transact(ALICE, &WETH::mintCall { _recepient: ALICE, _amount: U256::from(1) })
            .unwrap_err();
        assert!(reverted_with(err, "Ownable: caller is not the owner"));
        assert_eq!(sim.balance_of(ALICE).unwrap(), U256::ZERO);
    }

    #[test]
    fn approve_and_transfer_from_spend_allowance() {
        let mut sim = deployed();
        sim.transact(OWNER, &WETH::mintCall { _recepient: ALICE, _amount: U256::from(100) })
            .unwrap();

        let receipt = sim
            .transact(ALICE, &WETH::approveCall { spender: BOB, amount: U256::from(60) })
            .unwrap();
        let approval: WethApproval = unpack_log(receipt.logs[0].clone()).unwrap();
        assert_eq!((approval.owner, approval.spender), (ALICE, BOB));
        assert_eq!(approval.value, U256::from(60));

        sim.transact(
            BOB,
            &WETH::transferFromCall { sender: ALICE, recipient: BOB, amount: U256::from(40) },
        )
        .unwrap();

        assert_eq!(sim.allowance(ALICE, BOB).unwrap(), U256::from(20));
        assert_eq!(sim.balance_of(ALICE).unwrap(), U256::from(60));
        assert_eq!(sim.balance_of(BOB).unwrap(), U256::from(40));

        let err = sim
            .transact(
                BOB,
                &WETH::transferFromCall { sender: ALICE, recipient: BOB, amount: U256::from(21) },
            )
            .unwrap_err();
        assert!(reverted_with(err, "ERC20: transfer amount exceeds allowance"));
    }

    #[test]
    fn allowance_adjustments() {
        let mut sim = deployed();
        sim.transact(ALICE, &WETH::increaseAllowanceCall { spender: BOB, addedValue: U256::from(10) })
            .unwrap();
        sim.transact(ALICE, &WETH::increaseAllowanceCall { spender: BOB, addedValue: U256::from(5) })
            .unwrap();
        sim.transact(
            ALICE,
            &WETH::decreaseAllowanceCall { spender: BOB, subtractedValue: U256::from(3) },
        )
        .unwrap();
        assert_eq!(sim.allowance(ALICE, BOB).unwrap(), U256::from(12));

        let err = sim
            .transact(
                ALICE,
                &WETH::decreaseAllowanceCall { spender: BOB, subtractedValue: U256::from(13) },
            )
            .unwrap_err();
        assert!(reverted_with(err, "ERC20: decreased allowance below zero"));

        // every allowance change emits an Approval with the new value
        let values: Vec<U256> = sim.events::<WethApproval>().map(|e| e.unwrap().value).collect();
        assert_eq!(values, vec![U256::from(10), U256::from(15), U256::from(12)]);
    }

    #[test]
    fn transfer_checks_balance() {
        let mut sim = deployed();
        sim.transact(OWNER, &WETH::mintCall { _recepient: ALICE, _amount: U256::from(5) })
            .unwrap();

        let err = sim
            .transact(ALICE, &WETH::transferCall { recipient: BOB, amount: U256::from(6) })
            .unwrap_err();
        assert!(reverted_with(err, "ERC20: transfer amount exceeds balance"));

        let err = sim
            .transact(ALICE, &WETH::transferCall { recipient: Address::ZERO, amount: U256::from(1) })
            .unwrap_err();
        assert!(reverted_with(err, "ERC20: transfer to the zero address"));

        sim.transact(ALICE, &WETH::transferCall { recipient: BOB, amount: U256::from(5) })
            .unwrap();
        assert_eq!(sim.balance_of(BOB).unwrap(), U256::from(5));
    }

    #[test]
    fn ownership_transfer_and_renounce() {
        let mut sim = deployed();

        let err = sim
            .transact(OWNER, &WETH::transferOwnershipCall { newOwner: Address::ZERO })
            .unwrap_err();
        assert!(reverted_with(err, "Ownable: new owner is the zero address"));

        sim.transact(OWNER, &WETH::transferOwnershipCall { newOwner: ALICE }).unwrap();
        assert_eq!(sim.call(OWNER, &WETH::ownerCall {}).unwrap()._0, ALICE);

        sim.transact(ALICE, &WETH::renounceOwnershipCall {}).unwrap();
        assert_eq!(sim.call(OWNER, &WETH::ownerCall {}).unwrap()._0, Address::ZERO);

        let err = sim
            .transact(ALICE, &WETH::mintCall { _recepient: ALICE, _amount: U256::from(1) })
            .unwrap_err();
        assert!(reverted_with(err, "Ownable: caller is not the owner"));

        let changes: Vec<(Address, Address)> = sim
            .events::<WethOwnershipTransferred>()
            .map(|e| e.map(|e| (e.previous_owner, e.new_owner)).unwrap())
            .collect();
        assert_eq!(
            changes,
            vec![(Address::ZERO, OWNER), (OWNER, ALICE), (ALICE, Address::ZERO)]
        );
    }

    #[test]
    fn history_is_in_chain_order() {
        let mut sim = deployed();
        sim.transact(OWNER, &WETH::mintCall { _recepient: ALICE, _amount: U256::from(3) })
            .unwrap();
        sim.transact(ALICE, &WETH::transferCall { recipient: BOB, amount: U256::from(1) })
            .unwrap();

        let blocks: Vec<Option<u64>> = sim.logs().iter().map(|log| log.block_number).collect();
        assert_eq!(blocks, vec![Some(1), Some(2), Some(3)]);

        let events: Vec<WethEvent> = sim
            .logs()
            .iter()
            .cloned()
            .map(|log| WethEvent::decode(log).unwrap())
            .collect();
        assert!(matches!(events[0], WethEvent::OwnershipTransferred(_)));
        assert!(events[1].get_transfer().unwrap().is_mint());
        assert_eq!(events[2].get_transfer().unwrap().to, BOB);
    }
}
