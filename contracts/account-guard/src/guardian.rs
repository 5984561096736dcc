//! # Guardian Administration
//!
//! The owner flags identities as guardians. Membership is a plain boolean per
//! address: there is no list, no count and no cap. Guardians survive owner
//! changes because they are the recovery path for the next owner as well.

use crate::errors::GuardError;
use crate::events::emit_guardian_updated;
use crate::storage::{require_owner, GuardDataKey};
use soroban_sdk::{Address, Env};

/// Flag or unflag `guardian` (owner only).
///
/// Idempotent: repeating the current value succeeds and still emits an event.
/// Unflagging removes the entry, since absent reads as `false`.
///
/// # Errors
/// - `NotInitialized` - No owner yet
/// - `NotOwner` - Caller is not the current owner
pub fn set_guardian(
    env: &Env,
    caller: Address,
    guardian: Address,
    is_guardian: bool,
) -> Result<(), GuardError> {
    require_owner(env, &caller)?;

    let key = GuardDataKey::Guardian(guardian.clone());
    if is_guardian {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }

    emit_guardian_updated(env, guardian, is_guardian);
    Ok(())
}

pub fn is_guardian(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&GuardDataKey::Guardian(identity.clone()))
        .unwrap_or(false)
}

/// Require `caller` to authorize and hold the guardian flag.
pub fn require_guardian(env: &Env, caller: &Address) -> Result<(), GuardError> {
    caller.require_auth();
    if !is_guardian(env, caller) {
        return Err(GuardError::NotGuardian);
    }
    Ok(())
}
