//! # Account Guard Contract
//!
//! A self-custody guard for a single account holding one Stellar asset.
//!
//! - **Owner**: spends without limits and administers the guard.
//! - **Allowances**: the owner grants other addresses a spending ceiling that
//!   is debited as they spend.
//! - **Guardians**: flagged addresses that can jointly replace the owner. Three
//!   distinct guardian votes for the same candidate swap the owner in the
//!   invocation that casts the third vote.
//!
//! Every mutating entry point authenticates its caller with `require_auth` and
//! either commits fully or fails with a [`GuardError`].

#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env};

mod allowance;
mod errors;
mod events;
mod guardian;
mod recovery;
mod storage;
mod transfer;

pub use allowance::Allowance;
pub use errors::GuardError;
pub use recovery::CONFIRMATIONS_REQUIRED;
pub use storage::{
    GuardConfig, RecoveryProposal, DEFAULT_RECOVERY_WINDOW, NULL_ACCOUNT, NULL_CONTRACT,
};
pub use transfer::{GuardReceiver, GuardReceiverClient};

use storage::{is_initialized, is_null_identity, require_owner};

#[cfg(test)]
mod test_helpers;


#[contract]
pub struct AccountGuardContract;

#[contractimpl]
impl AccountGuardContract {
    /// Install the first owner and the guard configuration.
    ///
    /// # Arguments
    /// * `owner` - The first owner (must authorize)
    /// * `asset` - Token contract of the asset the guard holds
    /// * `recovery_window` - Seconds a recovery proposal stays open;
    ///   `None` uses [`DEFAULT_RECOVERY_WINDOW`]
    ///
    /// # Errors
    /// - `AlreadyInitialized` - An owner is already installed
    /// - `InvalidAddress` - Owner is the null identity
    /// - `InvalidConfig` - Recovery window is zero
    pub fn initialize(
        env: Env,
        owner: Address,
        asset: Address,
        recovery_window: Option<u64>,
    ) -> Result<(), GuardError> {
        owner.require_auth();
        if is_initialized(&env) {
            return Err(GuardError::AlreadyInitialized);
        }
        if is_null_identity(&env, &owner) {
            return Err(GuardError::InvalidAddress);
        }

        let recovery_window = recovery_window.unwrap_or(DEFAULT_RECOVERY_WINDOW);
        if recovery_window == 0 {
            return Err(GuardError::InvalidConfig);
        }

        storage::set_owner(&env, &owner);
        storage::set_config(
            &env,
            &GuardConfig {
                asset: asset.clone(),
                recovery_window,
            },
        );
        storage::set_proposal(&env, &RecoveryProposal::idle(&env, 0));

        events::GuardInitializedEvent {
            owner: owner.clone(),
            asset,
            recovery_window,
        }
        .publish(&env);
        log!(&env, "guard initialized owner={}", owner);
        Ok(())
    }

    // ── Guardians ─────────────────────────────────────────────────────────────

    /// Flag or unflag a guardian (owner only).
    ///
    /// # Errors
    /// - `NotOwner` - Caller is not the current owner
    pub fn set_guardian(
        env: Env,
        caller: Address,
        guardian: Address,
        is_guardian: bool,
    ) -> Result<(), GuardError> {
        guardian::set_guardian(&env, caller, guardian, is_guardian)
    }

    pub fn is_guardian(env: Env, identity: Address) -> bool {
        guardian::is_guardian(&env, &identity)
    }

    // ── Recovery ──────────────────────────────────────────────────────────────

    /// Vote for `candidate` as the next owner (guardians only).
    ///
    /// The vote reaching [`CONFIRMATIONS_REQUIRED`] replaces the owner
    /// immediately and closes the proposal.
    ///
    /// # Errors
    /// - `NotGuardian` - Caller is not a flagged guardian
    /// - `InvalidAddress` - Candidate is the null identity
    /// - `AlreadyVoted` - Caller already voted for this candidate
    pub fn propose_new_owner(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), GuardError> {
        recovery::propose_new_owner(&env, caller, candidate)
    }

    pub fn candidate_owner(env: Env) -> Option<Address> {
        recovery::candidate_owner(&env)
    }

    pub fn vote_count(env: Env) -> u32 {
        recovery::vote_count(&env)
    }

    pub fn has_voted(env: Env, candidate: Address, guardian: Address) -> bool {
        recovery::has_voted(&env, &candidate, &guardian)
    }

    /// Deadline of the open proposal, `None` while no proposal is open.
    pub fn proposal_deadline(env: Env) -> Option<u64> {
        recovery::proposal_deadline(&env)
    }

    /// Number of proposals opened so far.
    pub fn proposal_epoch(env: Env) -> u64 {
        recovery::active_proposal(&env).epoch
    }

    pub fn proposal(env: Env) -> RecoveryProposal {
        recovery::active_proposal(&env)
    }

    pub fn confirmations_required(_env: Env) -> u32 {
        CONFIRMATIONS_REQUIRED
    }

    // ── Allowances ────────────────────────────────────────────────────────────

    /// Replace the spending allowance of `subject` (owner only).
    ///
    /// # Errors
    /// - `NotOwner` - Caller is not the current owner
    /// - `InvalidAmount` - Amount is negative
    pub fn set_allowance(
        env: Env,
        caller: Address,
        subject: Address,
        amount: i128,
    ) -> Result<(), GuardError> {
        allowance::set_allowance(&env, caller, subject, amount)
    }

    pub fn allowance(env: Env, subject: Address) -> Allowance {
        allowance::get_allowance(&env, &subject)
    }

    // ── Funds ─────────────────────────────────────────────────────────────────

    /// Send `amount` to `to`, invoking its receiver hook when `payload` is
    /// non-empty.
    ///
    /// The owner spends freely; other callers spend against their allowance.
    ///
    /// # Returns
    /// The recipient hook's response (empty without a payload)
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is negative
    /// - `InvalidAddress` - Recipient is the null identity
    /// - `NotAllowed` - Caller has no allowance
    /// - `InsufficientAllowance` - Amount exceeds the allowance
    /// - `TransferExecutionFailed` - Token transfer or hook failed
    pub fn transfer(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
        payload: Bytes,
    ) -> Result<Bytes, GuardError> {
        transfer::transfer(&env, caller, to, amount, payload)
    }

    /// Fund the guard from `from`. Returns the new balance.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, GuardError> {
        transfer::deposit(&env, from, amount)
    }

    pub fn balance(env: Env) -> Result<i128, GuardError> {
        transfer::balance(&env)
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, GuardError> {
        storage::get_owner(&env)
    }

    pub fn config(env: Env) -> Result<GuardConfig, GuardError> {
        storage::get_config(&env)
    }

    /// Change the recovery window for proposals opened from now on (owner only).
    ///
    /// # Errors
    /// - `NotOwner` - Caller is not the current owner
    /// - `InvalidConfig` - Window is zero
    pub fn set_recovery_window(
        env: Env,
        caller: Address,
        recovery_window: u64,
    ) -> Result<(), GuardError> {
        require_owner(&env, &caller)?;
        if recovery_window == 0 {
            return Err(GuardError::InvalidConfig);
        }

        let mut config = storage::get_config(&env)?;
        let previous_window = config.recovery_window;
        config.recovery_window = recovery_window;
        storage::set_config(&env, &config);

        events::RecoveryWindowUpdatedEvent {
            previous_window,
            recovery_window,
        }
        .publish(&env);
        Ok(())
    }
}
