pub use crate::abi::weth::{abi, deploy_code, WETH, WETH_ABI};
pub use crate::contract::events::{
    unpack_log, ContractEvent, EventIterator, WethApproval, WethEvent, WethOwnershipTransferred,
    WethTransfer,
};
pub use crate::contract::opts::{CallOpts, FilterOpts, TransactOpts, WatchOpts};
pub use crate::contract::{session::WethSession, Weth};
pub use crate::error::BindingError;
pub use crate::sim::{SimReceipt, SimulatedWeth};
pub use crate::token::TokenInfo;
pub use crate::utils::{logs::query::get_logs_in_range, subscription::Subscription};
