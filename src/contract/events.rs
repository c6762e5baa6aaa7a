use std::iter::FusedIterator;
use std::marker::PhantomData;

use alloy_primitives::{Address, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::abi::weth::WETH;

/// An event payload decoded from a [Log] of the WETH contract
pub trait ContractEvent: Sized {
    /// The `sol!` event this payload is decoded from
    type Sol: SolEvent;

    fn from_decoded(event: Self::Sol, raw: Log) -> Self;

    /// The log this event was decoded from
    fn raw(&self) -> &Log;
}

/// Decode a single log into the event `E`
///
/// Fails if the log's first topic is not the signature of `E` or the data does not match the ABI
pub fn unpack_log<E: ContractEvent>(log: Log) -> Result<E, anyhow::Error> {
    let event = E::Sol::decode_log_data(log.data(), true)?;
    Ok(E::from_decoded(event, log))
}

/// `Approval(address indexed owner, address indexed spender, uint256 value)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WethApproval {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
    pub raw: Log,
}

impl ContractEvent for WethApproval {
    type Sol = WETH::Approval;

    fn from_decoded(event: Self::Sol, raw: Log) -> Self {
        Self {
            owner: event.owner,
            spender: event.spender,
            value: event.value,
            raw,
        }
    }

    fn raw(&self) -> &Log {
        &self.raw
    }
}

/// `OwnershipTransferred(address indexed previousOwner, address indexed newOwner)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WethOwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
    pub raw: Log,
}

impl ContractEvent for WethOwnershipTransferred {
    type Sol = WETH::OwnershipTransferred;

    fn from_decoded(event: Self::Sol, raw: Log) -> Self {
        Self {
            previous_owner: event.previousOwner,
            new_owner: event.newOwner,
            raw,
        }
    }

    fn raw(&self) -> &Log {
        &self.raw
    }
}

/// `Transfer(address indexed from, address indexed to, uint256 value)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WethTransfer {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub raw: Log,
}

impl WethTransfer {
    /// Minted tokens are transfers from the zero address
    pub fn is_mint(&self) -> bool {
        self.from == Address::ZERO
    }
}

impl ContractEvent for WethTransfer {
    type Sol = WETH::Transfer;

    fn from_decoded(event: Self::Sol, raw: Log) -> Self {
        Self {
            from: event.from,
            to: event.to,
            value: event.value,
            raw,
        }
    }

    fn raw(&self) -> &Log {
        &self.raw
    }
}

/// Any event emitted by the WETH contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WethEvent {
    Approval(WethApproval),
    OwnershipTransferred(WethOwnershipTransferred),
    Transfer(WethTransfer),
}

impl WethEvent {
    /// Decode a log by dispatching on its signature topic
    pub fn decode(log: Log) -> Result<Self, anyhow::Error> {
        let topic0 = *log
            .topics()
            .first()
            .ok_or_else(|| anyhow!("Log has no topics"))?;

        if topic0 == WETH::Approval::SIGNATURE_HASH {
            Ok(Self::Approval(unpack_log(log)?))
        } else if topic0 == WETH::OwnershipTransferred::SIGNATURE_HASH {
            Ok(Self::OwnershipTransferred(unpack_log(log)?))
        } else if topic0 == WETH::Transfer::SIGNATURE_HASH {
            Ok(Self::Transfer(unpack_log(log)?))
        } else {
            Err(anyhow!("Unknown event signature: {}", topic0))
        }
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::Transfer(_))
    }

    pub fn is_approval(&self) -> bool {
        matches!(self, Self::Approval(_))
    }

    pub fn is_ownership_transferred(&self) -> bool {
        matches!(self, Self::OwnershipTransferred(_))
    }

    pub fn get_transfer(&self) -> Option<&WethTransfer> {
        match self {
            Self::Transfer(transfer) => Some(transfer),
            _ => None,
        }
    }

    pub fn get_approval(&self) -> Option<&WethApproval> {
        match self {
            Self::Approval(approval) => Some(approval),
            _ => None,
        }
    }

    pub fn get_ownership_transferred(&self) -> Option<&WethOwnershipTransferred> {
        match self {
            Self::OwnershipTransferred(transfer) => Some(transfer),
            _ => None,
        }
    }

    pub fn raw(&self) -> &Log {
        match self {
            Self::Approval(e) => e.raw(),
            Self::OwnershipTransferred(e) => e.raw(),
            Self::Transfer(e) => e.raw(),
        }
    }
}

/// Iterates over the logs returned by a filter query, decoding each into `E`
///
/// The first decoding error is yielded once, after which the iterator is exhausted
#[derive(Debug)]
pub struct EventIterator<E> {
    logs: std::vec::IntoIter<Log>,
    failed: bool,
    _event: PhantomData<E>,
}

impl<E: ContractEvent> EventIterator<E> {
    pub fn new(logs: Vec<Log>) -> Self {
        Self {
            logs: logs.into_iter(),
            failed: false,
            _event: PhantomData,
        }
    }

    /// Number of logs not yet decoded
    pub fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            self.logs.len()
        }
    }
}

impl<E: ContractEvent> Iterator for EventIterator<E> {
    type Item = Result<E, anyhow::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let log = self.logs.next()?;
        match unpack_log(log) {
            Ok(event) => Some(Ok(event)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<E: ContractEvent> FusedIterator for EventIterator<E> {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloy_primitives::{address, LogData};

    pub(crate) const WETH_ADDR: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
    pub(crate) const ALICE: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
    pub(crate) const BOB: Address = address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");

    pub(crate) fn rpc_log(data: LogData, block: u64, index: u64) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address: WETH_ADDR,
                data,
            },
            block_number: Some(block),
            log_index: Some(index),
            ..Default::default()
        }
    }

    pub(crate) fn transfer_log(from: Address, to: Address, value: u64, block: u64) -> Log {
        let event = WETH::Transfer {
            from,
            to,
            value: U256::from(value),
        };
        rpc_log(event.encode_log_data(), block, 0)
    }

    pub(crate) fn approval_log(owner: Address, spender: Address, value: u64, block: u64) -> Log {
        let event = WETH::Approval {
            owner,
            spender,
            value: U256::from(value),
        };
        rpc_log(event.encode_log_data(), block, 0)
    }

    #[test]
    fn unpack_transfer_keeps_raw_log() {
        let log = transfer_log(ALICE, BOB, 1_000, 12);
        let transfer: WethTransfer = unpack_log(log.clone()).unwrap();

        assert_eq!(transfer.from, ALICE);
        assert_eq!(transfer.to, BOB);
        assert_eq!(transfer.value, U256::from(1_000));
        assert_eq!(transfer.raw, log);
        assert_eq!(transfer.raw().block_number, Some(12));
        assert!(!transfer.is_mint());
    }

    #[test]
    fn unpack_ownership_transferred() {
        let event = WETH::OwnershipTransferred {
            previousOwner: Address::ZERO,
            newOwner: ALICE,
        };
        let log = rpc_log(event.encode_log_data(), 1, 0);
        let parsed: WethOwnershipTransferred = unpack_log(log).unwrap();

        assert_eq!(parsed.previous_owner, Address::ZERO);
        assert_eq!(parsed.new_owner, ALICE);
    }

    #[test]
    fn unpack_rejects_other_event() {
        let log = transfer_log(ALICE, BOB, 1, 1);
        assert!(unpack_log::<WethApproval>(log).is_err());
    }

    #[test]
    fn decode_dispatches_on_signature() {
        let transfer = WethEvent::decode(transfer_log(ALICE, BOB, 5, 1)).unwrap();
        assert!(transfer.is_transfer());
        assert_eq!(transfer.get_transfer().unwrap().value, U256::from(5));

        let approval = WethEvent::decode(approval_log(ALICE, BOB, 9, 1)).unwrap();
        assert!(approval.is_approval());
        assert_eq!(approval.get_approval().unwrap().spender, BOB);
        assert!(approval.get_ownership_transferred().is_none());

        let handover = WETH::OwnershipTransferred {
            previousOwner: ALICE,
            newOwner: BOB,
        };
        let ownership = WethEvent::decode(rpc_log(handover.encode_log_data(), 2, 0)).unwrap();
        assert!(ownership.is_ownership_transferred());
        assert!(!ownership.is_transfer());
        assert_eq!(ownership.get_ownership_transferred().unwrap().new_owner, BOB);
        assert_eq!(ownership.raw().block_number, Some(2));

        let unknown = rpc_log(LogData::new_unchecked(vec![Default::default()], Default::default()), 1, 0);
        assert!(WethEvent::decode(unknown).is_err());

        let anonymous = rpc_log(LogData::default(), 1, 0);
        assert!(WethEvent::decode(anonymous).is_err());
    }

    #[test]
    fn iterator_stops_after_first_failure() {
        let logs = vec![
            transfer_log(ALICE, BOB, 1, 1),
            approval_log(ALICE, BOB, 2, 2),
            transfer_log(BOB, ALICE, 3, 3),
        ];
        let mut iter = EventIterator::<WethTransfer>::new(logs);
        assert_eq!(iter.remaining(), 3);

        let first = iter.next().unwrap().unwrap();
        assert_eq!(first.value, U256::from(1));

        assert!(iter.next().unwrap().is_err());
        assert_eq!(iter.remaining(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn iterator_yields_in_log_order() {
        let logs = (1..=4).map(|i| transfer_log(ALICE, BOB, i, i)).collect();
        let values: Vec<U256> = EventIterator::<WethTransfer>::new(logs)
            .map(|e| e.unwrap().value)
            .collect();
        assert_eq!(values, (1..=4).map(U256::from).collect::<Vec<_>>());
    }
}
