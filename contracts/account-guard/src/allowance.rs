use crate::errors::GuardError;
use crate::events::emit_allowance_set;
use crate::storage::{require_owner, GuardDataKey};
use soroban_sdk::{contracttype, Address, Env};

/// Read view of a subject's spending allowance.
///
/// Only `amount` is stored; `is_allowed` is always rebuilt from it, so the two
/// can never disagree.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Allowance {
    pub amount: i128,
    pub is_allowed: bool,
}

impl Allowance {
    pub fn from_amount(amount: i128) -> Self {
        Allowance {
            amount,
            is_allowed: amount > 0,
        }
    }
}

/// Replace the allowance of `subject` (owner only).
///
/// The new amount overwrites the old one rather than adding to it. Zero
/// revokes spending rights.
///
/// # Errors
/// - `NotInitialized` - No owner yet
/// - `NotOwner` - Caller is not the current owner
/// - `InvalidAmount` - Amount is negative
pub fn set_allowance(
    env: &Env,
    caller: Address,
    subject: Address,
    amount: i128,
) -> Result<(), GuardError> {
    require_owner(env, &caller)?;

    if amount < 0 {
        return Err(GuardError::InvalidAmount);
    }

    save_allowance_amount(env, &subject, amount);
    emit_allowance_set(env, subject, amount);
    Ok(())
}

pub fn get_allowance(env: &Env, subject: &Address) -> Allowance {
    Allowance::from_amount(get_allowance_amount(env, subject))
}

/// Spend `amount` out of `spender`'s allowance and return what is left.
///
/// Called by the transfer path before any value moves.
pub(crate) fn consume_allowance(
    env: &Env,
    spender: &Address,
    amount: i128,
) -> Result<i128, GuardError> {
    let allowance = get_allowance(env, spender);
    if !allowance.is_allowed {
        return Err(GuardError::NotAllowed);
    }
    if amount > allowance.amount {
        return Err(GuardError::InsufficientAllowance);
    }

    let remaining = allowance.amount - amount;
    save_allowance_amount(env, spender, remaining);
    Ok(remaining)
}

fn get_allowance_amount(env: &Env, subject: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&GuardDataKey::Allowance(subject.clone()))
        .unwrap_or(0)
}

fn save_allowance_amount(env: &Env, subject: &Address, amount: i128) {
    let key = GuardDataKey::Allowance(subject.clone());
    if amount > 0 {
        env.storage().persistent().set(&key, &amount);
    } else {
        env.storage().persistent().remove(&key);
    }
}
