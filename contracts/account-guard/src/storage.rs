//! # Guard State
//!
//! Typed storage keys and the records shared by every module of the guard.
//!
//! Layout:
//! - instance: `Owner`, `Config`, `Proposal`
//! - persistent: `Guardian(Address)`, `Allowance(Address)`
//!
//! Absent persistent entries read as their neutral value (`false` / `0`), so
//! clearing a flag or an allowance removes the entry instead of storing zero.

use crate::errors::GuardError;
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Strkey of the all-zero ed25519 account. Nobody holds its secret key.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Strkey of the all-zero contract id. No contract can be deployed there.
pub const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Default recovery window: 3 days.
pub const DEFAULT_RECOVERY_WINDOW: u64 = 3 * 24 * 60 * 60;

#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum GuardDataKey {
    Owner,
    Config,
    Proposal,
    Guardian(Address),
    Allowance(Address),
}

/// Guard configuration, fixed at initialization except for the window.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuardConfig {
    /// Token contract whose balance the guard custodies
    pub asset: Address,
    /// Seconds a recovery proposal stays open after its first vote
    pub recovery_window: u64,
}

/// The in-flight ownership recovery round.
///
/// `candidate == None` means no proposal is open; `voters` is then empty and
/// `deadline` is zero. `epoch` counts every proposal ever opened and is kept
/// across finalization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryProposal {
    pub epoch: u64,
    pub candidate: Option<Address>,
    pub voters: Vec<Address>,
    pub deadline: u64,
}

impl RecoveryProposal {
    pub fn idle(env: &Env, epoch: u64) -> Self {
        RecoveryProposal {
            epoch,
            candidate: None,
            voters: Vec::new(env),
            deadline: 0,
        }
    }

    pub fn vote_count(&self) -> u32 {
        self.voters.len()
    }
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&GuardDataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, GuardError> {
    env.storage()
        .instance()
        .get(&GuardDataKey::Owner)
        .ok_or(GuardError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&GuardDataKey::Owner, owner);
}

pub fn get_config(env: &Env) -> Result<GuardConfig, GuardError> {
    env.storage()
        .instance()
        .get(&GuardDataKey::Config)
        .ok_or(GuardError::NotInitialized)
}

pub fn set_config(env: &Env, config: &GuardConfig) {
    env.storage().instance().set(&GuardDataKey::Config, config);
}

pub fn get_proposal(env: &Env) -> RecoveryProposal {
    env.storage()
        .instance()
        .get(&GuardDataKey::Proposal)
        .unwrap_or_else(|| RecoveryProposal::idle(env, 0))
}

pub fn set_proposal(env: &Env, proposal: &RecoveryProposal) {
    env.storage()
        .instance()
        .set(&GuardDataKey::Proposal, proposal);
}

/// Require `caller` to authorize and be the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), GuardError> {
    caller.require_auth();
    let owner = get_owner(env)?;
    if *caller != owner {
        return Err(GuardError::NotOwner);
    }
    Ok(())
}

/// True for the addresses that stand in for "no identity": the all-zero
/// account and the all-zero contract.
pub fn is_null_identity(env: &Env, address: &Address) -> bool {
    *address == Address::from_str(env, NULL_ACCOUNT)
        || *address == Address::from_str(env, NULL_CONTRACT)
}
