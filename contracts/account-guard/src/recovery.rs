//! # Ownership Recovery
//!
//! Guardians replace a lost or compromised owner by voting for a candidate.
//! The third distinct vote for the same candidate swaps the owner in the same
//! invocation; there is no separate execute step.
//!
//! ## Proposal rounds
//! Each round ("epoch") belongs to exactly one candidate and records who voted
//! in it. A round ends when:
//! 1. quorum is reached (owner changes, round closes),
//! 2. a vote arrives after the round's deadline (stale votes are dropped and
//!    the vote opens a new round), or
//! 3. a vote names a different candidate (the open round is dropped and the
//!    vote opens a new round for the new candidate).
//!
//! Vote records live inside the round, so a closed round's votes can never be
//! counted again, even if a later round reuses the same candidate.
//!
//! Expiry is applied lazily: reads treat an expired round as closed, and the
//! next vote clears it from storage.

use crate::errors::GuardError;
use crate::events::{
    emit_owner_changed, emit_owner_vote, ProposalExpiredEvent, ProposalSupersededEvent,
};
use crate::guardian::require_guardian;
use crate::storage::{
    get_config, get_owner, get_proposal, is_null_identity, set_owner, set_proposal,
    RecoveryProposal,
};
use soroban_sdk::{log, Address, Env};

/// Distinct guardian votes needed to replace the owner.
pub const CONFIRMATIONS_REQUIRED: u32 = 3;

/// Why an open round had to be dropped before recording a vote.
enum RoundClosure {
    Expired {
        candidate: Address,
        votes: u32,
        deadline: u64,
    },
    Superseded {
        previous: Address,
        votes: u32,
    },
}

/// Cast `caller`'s vote for `candidate` as the next owner.
///
/// # Errors
/// - `NotInitialized` - No owner yet
/// - `NotGuardian` - Caller is not a flagged guardian
/// - `InvalidAddress` - Candidate is the null identity
/// - `AlreadyVoted` - Caller already voted for this candidate in the open round
pub fn propose_new_owner(
    env: &Env,
    caller: Address,
    candidate: Address,
) -> Result<(), GuardError> {
    let owner = get_owner(env)?;
    let window = get_config(env)?.recovery_window;
    require_guardian(env, &caller)?;

    if is_null_identity(env, &candidate) {
        return Err(GuardError::InvalidAddress);
    }

    let now = env.ledger().timestamp();
    let mut proposal = get_proposal(env);
    let closure = closure_for(&proposal, &candidate, now);
    if closure.is_some() {
        proposal = RecoveryProposal::idle(env, proposal.epoch);
    }

    if proposal.voters.contains(&caller) {
        return Err(GuardError::AlreadyVoted);
    }

    // All checks passed; from here on the vote is committed.
    match closure {
        Some(RoundClosure::Expired {
            candidate: stale,
            votes,
            deadline,
        }) => {
            ProposalExpiredEvent {
                epoch: proposal.epoch,
                candidate: stale,
                vote_count: votes,
                deadline,
            }
            .publish(env);
        }
        Some(RoundClosure::Superseded { previous, votes }) => {
            ProposalSupersededEvent {
                epoch: proposal.epoch,
                previous_candidate: previous,
                candidate: candidate.clone(),
                discarded_votes: votes,
            }
            .publish(env);
        }
        None => {}
    }

    if proposal.candidate.is_none() {
        proposal.epoch += 1;
        proposal.candidate = Some(candidate.clone());
        proposal.deadline = now.saturating_add(window);
    }

    proposal.voters.push_back(caller.clone());
    let vote_count = proposal.vote_count();
    emit_owner_vote(env, proposal.epoch, candidate.clone(), caller, vote_count);

    if vote_count >= CONFIRMATIONS_REQUIRED {
        set_owner(env, &candidate);
        set_proposal(env, &RecoveryProposal::idle(env, proposal.epoch));
        log!(env, "recovery epoch={} new owner={}", proposal.epoch, candidate);
        emit_owner_changed(env, proposal.epoch, owner, candidate);
    } else {
        set_proposal(env, &proposal);
    }

    Ok(())
}

fn closure_for(
    proposal: &RecoveryProposal,
    candidate: &Address,
    now: u64,
) -> Option<RoundClosure> {
    let open = proposal.candidate.clone()?;
    if now > proposal.deadline {
        return Some(RoundClosure::Expired {
            candidate: open,
            votes: proposal.vote_count(),
            deadline: proposal.deadline,
        });
    }
    if open != *candidate {
        return Some(RoundClosure::Superseded {
            previous: open,
            votes: proposal.vote_count(),
        });
    }
    None
}

/// The round as it currently counts: an expired round reads as closed.
pub fn active_proposal(env: &Env) -> RecoveryProposal {
    let proposal = get_proposal(env);
    if proposal.candidate.is_some() && env.ledger().timestamp() > proposal.deadline {
        return RecoveryProposal::idle(env, proposal.epoch);
    }
    proposal
}

pub fn candidate_owner(env: &Env) -> Option<Address> {
    active_proposal(env).candidate
}

pub fn vote_count(env: &Env) -> u32 {
    active_proposal(env).vote_count()
}

/// True iff `candidate` is the open candidate and `guardian` voted for it in
/// the open round.
pub fn has_voted(env: &Env, candidate: &Address, guardian: &Address) -> bool {
    let proposal = active_proposal(env);
    match proposal.candidate {
        Some(open) if open == *candidate => proposal.voters.contains(guardian),
        _ => false,
    }
}

pub fn proposal_deadline(env: &Env) -> Option<u64> {
    let proposal = active_proposal(env);
    proposal.candidate.map(|_| proposal.deadline)
}
