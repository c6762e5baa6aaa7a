pub mod abi;
pub mod contract;
pub mod error;
pub mod prelude;
pub mod sim;
pub mod token;
pub mod utils;


// RE-EXPORTS

// Alloy
pub use alloy_primitives;
pub use alloy_signer;
pub use alloy_signer_local;
pub use alloy_provider;
pub use alloy_rpc_types;
pub use alloy_sol_types;
pub use alloy_json_abi;
pub use alloy_transport;
pub use alloy_pubsub;
pub use alloy_network;
pub use alloy_contract;

// Revm
pub use revm;
