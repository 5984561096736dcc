//! # Transfer Execution
//!
//! Moves the guarded asset out of the account. The owner spends freely;
//! anyone else spends against the allowance the owner granted them.
//!
//! A transfer may carry an opaque payload. When it does, the recipient must be
//! a contract implementing [`GuardReceiver`]; the guard calls its hook after
//! the tokens arrive and hands the hook's response back to the spender.
//!
//! ## Atomicity
//! The allowance is debited before any value moves. If the token transfer or
//! the hook fails, the guard returns `TransferExecutionFailed` and the host
//! rolls back the whole invocation, debit included.

use crate::allowance::consume_allowance;
use crate::errors::GuardError;
use crate::events::{emit_transfer_executed, DepositEvent};
use crate::storage::{get_config, get_owner, is_null_identity};
use soroban_sdk::{contractclient, log, token, Address, Bytes, Env};

/// Hook implemented by recipient contracts that accept payload transfers.
#[allow(dead_code)]
#[contractclient(name = "GuardReceiverClient")]
pub trait GuardReceiver {
    /// Called after `amount` of the guarded asset reached the recipient.
    ///
    /// # Arguments
    /// * `guard` - The guard that sent the funds
    /// * `from` - The spender who initiated the transfer
    /// * `amount` - The amount received
    /// * `payload` - Caller-supplied data, opaque to the guard
    fn on_guard_transfer(
        env: Env,
        guard: Address,
        from: Address,
        amount: i128,
        payload: Bytes,
    ) -> Bytes;
}

/// Send `amount` of the guarded asset to `to`, optionally invoking its hook.
///
/// # Returns
/// The hook's response, or empty bytes when `payload` is empty.
///
/// # Errors
/// - `NotInitialized` - No owner yet
/// - `InvalidAmount` - Amount is negative
/// - `InvalidAddress` - Recipient is the null identity
/// - `NotAllowed` - Non-owner caller without allowance
/// - `InsufficientAllowance` - Amount exceeds the caller's allowance
/// - `TransferExecutionFailed` - Token transfer or recipient hook failed
pub fn transfer(
    env: &Env,
    caller: Address,
    to: Address,
    amount: i128,
    payload: Bytes,
) -> Result<Bytes, GuardError> {
    caller.require_auth();
    let owner = get_owner(env)?;
    let config = get_config(env)?;

    if amount < 0 {
        return Err(GuardError::InvalidAmount);
    }
    if is_null_identity(env, &to) {
        return Err(GuardError::InvalidAddress);
    }

    let remaining = if caller == owner {
        None
    } else {
        Some(consume_allowance(env, &caller, amount)?)
    };

    let guard = env.current_contract_address();
    if amount > 0 {
        let token_client = token::Client::new(env, &config.asset);
        match token_client.try_transfer(&guard, &to, &amount) {
            Ok(Ok(())) => {}
            _ => return Err(GuardError::TransferExecutionFailed),
        }
    }

    let response = if payload.is_empty() {
        Bytes::new(env)
    } else {
        let receiver = GuardReceiverClient::new(env, &to);
        match receiver.try_on_guard_transfer(&guard, &caller, &amount, &payload) {
            Ok(Ok(response)) => response,
            _ => return Err(GuardError::TransferExecutionFailed),
        }
    };

    log!(env, "transfer {} -> {} amount={}", caller, to, amount);
    emit_transfer_executed(env, caller, to, amount, remaining);

    Ok(response)
}

/// Move `amount` of the guarded asset from `from` into the guard.
///
/// Anyone may fund the account. Returns the guard's new balance.
///
/// # Errors
/// - `NotInitialized` - No owner yet
/// - `InvalidAmount` - Amount is zero or negative
/// - `TransferExecutionFailed` - The token contract rejected the transfer
pub fn deposit(env: &Env, from: Address, amount: i128) -> Result<i128, GuardError> {
    from.require_auth();
    let config = get_config(env)?;

    if amount <= 0 {
        return Err(GuardError::InvalidAmount);
    }

    let guard = env.current_contract_address();
    let token_client = token::Client::new(env, &config.asset);
    match token_client.try_transfer(&from, &guard, &amount) {
        Ok(Ok(())) => {}
        _ => return Err(GuardError::TransferExecutionFailed),
    }

    let new_balance = token_client.balance(&guard);
    DepositEvent {
        from,
        amount,
        new_balance,
    }
    .publish(env);

    Ok(new_balance)
}

/// The guard's current holdings of the guarded asset.
pub fn balance(env: &Env) -> Result<i128, GuardError> {
    let config = get_config(env)?;
    Ok(token::Client::new(env, &config.asset).balance(&env.current_contract_address()))
}
