use alloy_sol_types::decode_revert_reason;
use revm::{
    primitives::{Bytes, ExecutionResult, Output, SpecId, U256},
    Database, Evm,
};

use crate::error::BindingError;

pub fn new_evm<DB>(db: DB, block_number: u64) -> Evm<'static, (), DB>
where
    DB: Database,
{
    let mut evm = Evm::builder()
        .with_db(db)
        .with_spec_id(SpecId::CANCUN)
        .build();

    evm.block_mut().number = U256::from(block_number);

    // Disable some checks for easier testing
    evm.cfg_mut().disable_balance_check = true;
    evm.cfg_mut().disable_block_gas_limit = true;
    evm.cfg_mut().disable_base_fee = true;
    evm
}

/// Human readable reason of a revert, falls back to the raw hex output
pub fn revert_msg(bytes: &Bytes) -> String {
    if bytes.is_empty() {
        return "EVM Returned 0x (Empty Bytes)".to_string();
    }
    decode_revert_reason(bytes).unwrap_or_else(|| bytes.to_string())
}

/// Split a successful [ExecutionResult] into its output and logs, turning reverts and halts into errors
pub fn into_success(
    result: ExecutionResult,
) -> Result<(Output, Vec<alloy_primitives::Log>, u64), BindingError> {
    match result {
        ExecutionResult::Success {
            output,
            logs,
            gas_used,
            ..
        } => Ok((output, logs, gas_used)),
        ExecutionResult::Revert { output, .. } => Err(BindingError::Reverted(revert_msg(&output))),
        ExecutionResult::Halt { reason, .. } => Err(BindingError::Halted(format!("{:?}", reason))),
    }
}
