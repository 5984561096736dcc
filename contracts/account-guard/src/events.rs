//! # Guard Events
//!
//! Every state change publishes one `#[contractevent]` struct. The macro
//! derives the snake_case struct name as the leading topic (for example
//! `owner_changed_event`); all fields go into the data map.
//!
//! Off-chain watchers rebuild guardian sets, allowances and the recovery
//! history from these events alone.

use soroban_sdk::{contractevent, Address, Env};

/// Emitted once, when the first owner is installed.
#[contractevent]
#[derive(Clone, Debug)]
pub struct GuardInitializedEvent {
    pub owner: Address,
    pub asset: Address,
    pub recovery_window: u64,
}

/// Emitted on every `set_guardian`, including no-op updates.
#[contractevent]
#[derive(Clone, Debug)]
pub struct GuardianUpdatedEvent {
    pub guardian: Address,
    pub is_guardian: bool,
}

/// Emitted when the owner replaces a subject's allowance.
#[contractevent]
#[derive(Clone, Debug)]
pub struct AllowanceSetEvent {
    pub subject: Address,
    pub amount: i128,
    pub is_allowed: bool,
}

/// Emitted for each accepted recovery vote.
///
/// # Fields
/// * `epoch` – Proposal round the vote belongs to.
/// * `candidate` – Proposed new owner.
/// * `guardian` – Voting guardian.
/// * `vote_count` – Votes for `candidate` in this round, this one included.
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnerVoteEvent {
    pub epoch: u64,
    pub candidate: Address,
    pub guardian: Address,
    pub vote_count: u32,
}

/// Emitted when a vote arrives after the open proposal's deadline.
/// The stale votes are discarded.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalExpiredEvent {
    pub epoch: u64,
    pub candidate: Address,
    pub vote_count: u32,
    pub deadline: u64,
}

/// Emitted when a vote for a different candidate replaces the open proposal.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalSupersededEvent {
    pub epoch: u64,
    pub previous_candidate: Address,
    pub candidate: Address,
    pub discarded_votes: u32,
}

/// Emitted when quorum is reached and ownership moves.
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnerChangedEvent {
    pub epoch: u64,
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Emitted after value leaves the guard.
///
/// `remaining_allowance` is `None` when the owner spent, since the owner path
/// never touches the allowance table.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TransferExecutedEvent {
    pub spender: Address,
    pub to: Address,
    pub amount: i128,
    pub remaining_allowance: Option<i128>,
    pub timestamp: u64,
}

/// Emitted when funds are deposited into the guard.
#[contractevent]
#[derive(Clone, Debug)]
pub struct DepositEvent {
    pub from: Address,
    pub amount: i128,
    pub new_balance: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryWindowUpdatedEvent {
    pub previous_window: u64,
    pub recovery_window: u64,
}

pub fn emit_guardian_updated(env: &Env, guardian: Address, is_guardian: bool) {
    GuardianUpdatedEvent {
        guardian,
        is_guardian,
    }
    .publish(env);
}

pub fn emit_allowance_set(env: &Env, subject: Address, amount: i128) {
    AllowanceSetEvent {
        subject,
        amount,
        is_allowed: amount > 0,
    }
    .publish(env);
}

pub fn emit_owner_vote(
    env: &Env,
    epoch: u64,
    candidate: Address,
    guardian: Address,
    vote_count: u32,
) {
    OwnerVoteEvent {
        epoch,
        candidate,
        guardian,
        vote_count,
    }
    .publish(env);
}

pub fn emit_owner_changed(env: &Env, epoch: u64, previous_owner: Address, new_owner: Address) {
    OwnerChangedEvent {
        epoch,
        previous_owner,
        new_owner,
    }
    .publish(env);
}

pub fn emit_transfer_executed(
    env: &Env,
    spender: Address,
    to: Address,
    amount: i128,
    remaining_allowance: Option<i128>,
) {
    TransferExecutedEvent {
        spender,
        to,
        amount,
        remaining_allowance,
        timestamp: env.ledger().timestamp(),
    }
    .publish(env);
}
