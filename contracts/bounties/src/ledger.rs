//! Escrow engines behind the contract entry points.
//!
//! Every function validates all of its preconditions before the first storage
//! write or token transfer, so a returned `Err` leaves the ledger untouched.
//! The payout and refund engines are generic over their policy so the
//! contract can swap the arbiter or the timeout rule without touching the
//! accounting here.

use soroban_sdk::{log, token, vec, Address, Env, String};

use crate::events::{
    self, AnswerAccepted, AnswerSubmitted, BountyIssued, ContributionAdded, ContributionRefunded,
    TreasuryWithdrawn,
};
use crate::policy::{PayoutAuthority, RefundWindow};
use crate::storage;
use crate::types::{Bounty, Contribution, Fulfillment, LedgerConfig, BASIS_POINTS};
use crate::Error;

/// Splits a gross contribution into `(escrowed, fee)`.
///
/// The fee floors, so any remainder stays with the bounty. With
/// `fee_bps < BASIS_POINTS` and `amount > 0` the escrowed share is at least 1.
pub(crate) fn split_fee(amount: i128, fee_bps: u32) -> Result<(i128, i128), Error> {
    let fee = amount
        .checked_mul(i128::from(fee_bps))
        .ok_or(Error::Overflow)?
        / i128::from(BASIS_POINTS);
    Ok((amount - fee, fee))
}

// ============================================================================
// Contribution Accounting
// ============================================================================

pub(crate) fn issue_and_contribute(
    env: &Env,
    contributor: &Address,
    bounty_id: &String,
    question_hash: &String,
    amount: i128,
) -> Result<u32, Error> {
    let config = storage::read_config(env)?;
    if bounty_id.len() == 0 {
        return Err(Error::InvalidBountyId);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    if storage::has_bounty(env, bounty_id) {
        let mut bounty = storage::read_bounty(env, bounty_id)?;
        return record_contribution(env, &config, &mut bounty, contributor, amount);
    }

    let count = storage::read_bounty_count(env)
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    let timestamp = env.ledger().timestamp();
    let mut bounty = Bounty {
        bounty_id: bounty_id.clone(),
        issuer: contributor.clone(),
        question_hash: question_hash.clone(),
        contributions: vec![env],
        fulfillments: vec![env],
        balance: 0,
        created_at: timestamp,
    };
    let index = record_contribution(env, &config, &mut bounty, contributor, amount)?;
    storage::write_bounty_count(env, count);

    events::emit_bounty_issued(
        env,
        BountyIssued {
            bounty_id: bounty_id.clone(),
            issuer: contributor.clone(),
            question_hash: question_hash.clone(),
            timestamp,
        },
    );
    Ok(index)
}

pub(crate) fn contribute(
    env: &Env,
    contributor: &Address,
    bounty_id: &String,
    amount: i128,
) -> Result<u32, Error> {
    let config = storage::read_config(env)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let mut bounty = storage::read_bounty(env, bounty_id)?;
    record_contribution(env, &config, &mut bounty, contributor, amount)
}

/// Moves `amount` into custody and appends the contribution to `bounty`.
fn record_contribution(
    env: &Env,
    config: &LedgerConfig,
    bounty: &mut Bounty,
    contributor: &Address,
    amount: i128,
) -> Result<u32, Error> {
    let (escrowed, fee) = split_fee(amount, config.fee_bps)?;
    let balance = bounty.balance.checked_add(escrowed).ok_or(Error::Overflow)?;
    let total_supply = storage::read_total_supply(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let treasury = storage::read_treasury(env)
        .checked_add(fee)
        .ok_or(Error::Overflow)?;

    let client = token::Client::new(env, &config.token);
    client.transfer(contributor, &env.current_contract_address(), &amount);

    let index = bounty.contributions.len();
    let timestamp = env.ledger().timestamp();
    bounty.contributions.push_back(Contribution {
        contributor: contributor.clone(),
        amount: escrowed,
        fee,
        refunded: false,
        timestamp,
        ledger: env.ledger().sequence(),
    });
    bounty.balance = balance;

    storage::write_bounty(env, bounty);
    storage::write_total_supply(env, total_supply);
    storage::write_treasury(env, treasury);

    events::emit_contribution_added(
        env,
        ContributionAdded {
            bounty_id: bounty.bounty_id.clone(),
            contribution_index: index,
            contributor: contributor.clone(),
            amount: escrowed,
            fee,
            balance,
            timestamp,
        },
    );
    Ok(index)
}

// ============================================================================
// Fulfillment Tracking
// ============================================================================

pub(crate) fn answer(
    env: &Env,
    answerer: &Address,
    bounty_id: &String,
    answer_hash: &String,
) -> Result<u32, Error> {
    storage::read_config(env)?;
    let mut bounty = storage::read_bounty(env, bounty_id)?;

    let index = bounty.fulfillments.len();
    let timestamp = env.ledger().timestamp();
    bounty.fulfillments.push_back(Fulfillment {
        answerer: answerer.clone(),
        answer_hash: answer_hash.clone(),
        timestamp,
        ledger: env.ledger().sequence(),
        accepted: false,
        payout: 0,
    });
    storage::write_bounty(env, &bounty);

    events::emit_answer_submitted(
        env,
        AnswerSubmitted {
            bounty_id: bounty_id.clone(),
            fulfillment_index: index,
            answerer: answerer.clone(),
            answer_hash: answer_hash.clone(),
            timestamp,
        },
    );
    Ok(index)
}

// ============================================================================
// Acceptance & Payout
// ============================================================================

pub(crate) fn release_payout<A: PayoutAuthority>(
    env: &Env,
    authority: &A,
    caller: &Address,
    bounty_id: &String,
    fulfillment_index: u32,
    amount: i128,
) -> Result<(), Error> {
    let config = storage::read_config(env)?;
    authority.authorize(env, caller)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let mut bounty = storage::read_bounty(env, bounty_id)?;
    let mut fulfillment = bounty
        .fulfillments
        .get(fulfillment_index)
        .ok_or(Error::IndexOutOfRange)?;
    if fulfillment.accepted {
        return Err(Error::AlreadyAccepted);
    }
    if amount > bounty.balance {
        log!(
            env,
            "payout exceeds escrow: requested {}, available {}",
            amount,
            bounty.balance
        );
        return Err(Error::InsufficientBalance);
    }
    let total_supply = storage::read_total_supply(env)
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;

    let client = token::Client::new(env, &config.token);
    client.transfer(&env.current_contract_address(), &fulfillment.answerer, &amount);

    fulfillment.accepted = true;
    fulfillment.payout = amount;
    let recipient = fulfillment.answerer.clone();
    bounty.fulfillments.set(fulfillment_index, fulfillment);
    bounty.balance -= amount;

    storage::write_bounty(env, &bounty);
    storage::write_total_supply(env, total_supply);

    events::emit_answer_accepted(
        env,
        AnswerAccepted {
            bounty_id: bounty_id.clone(),
            fulfillment_index,
            recipient,
            amount,
            remaining_balance: bounty.balance,
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(())
}

// ============================================================================
// Refund
// ============================================================================

pub(crate) fn refund<W: RefundWindow>(
    env: &Env,
    window: &W,
    caller: &Address,
    bounty_id: &String,
    contribution_index: u32,
    min_elapsed: u64,
) -> Result<i128, Error> {
    let config = storage::read_config(env)?;
    let mut bounty = storage::read_bounty(env, bounty_id)?;
    let mut contribution = bounty
        .contributions
        .get(contribution_index)
        .ok_or(Error::IndexOutOfRange)?;

    caller.require_auth();
    if *caller != contribution.contributor {
        return Err(Error::Unauthorized);
    }
    if contribution.refunded {
        return Err(Error::AlreadyRefunded);
    }
    if !window.has_elapsed(env, &contribution, min_elapsed) {
        return Err(Error::TimeoutNotElapsed);
    }
    // Payouts draw on the same balance; whatever was released is gone.
    if contribution.amount > bounty.balance {
        log!(
            env,
            "refund exceeds remaining escrow: contribution {}, available {}",
            contribution.amount,
            bounty.balance
        );
        return Err(Error::InsufficientBalance);
    }
    let amount = contribution.amount;
    let total_supply = storage::read_total_supply(env)
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;

    let client = token::Client::new(env, &config.token);
    client.transfer(&env.current_contract_address(), caller, &amount);

    contribution.refunded = true;
    bounty.contributions.set(contribution_index, contribution);
    bounty.balance -= amount;

    storage::write_bounty(env, &bounty);
    storage::write_total_supply(env, total_supply);

    events::emit_contribution_refunded(
        env,
        ContributionRefunded {
            bounty_id: bounty_id.clone(),
            contribution_index,
            refund_to: caller.clone(),
            amount,
            remaining_balance: bounty.balance,
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(amount)
}

// ============================================================================
// Treasury
// ============================================================================

pub(crate) fn withdraw_treasury<A: PayoutAuthority>(
    env: &Env,
    authority: &A,
    caller: &Address,
) -> Result<i128, Error> {
    let config = storage::read_config(env)?;
    authority.authorize(env, caller)?;

    let amount = storage::read_treasury(env);
    if amount == 0 {
        log!(env, "treasury empty, nothing to withdraw");
        return Ok(0);
    }
    let total_supply = storage::read_total_supply(env)
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;

    let client = token::Client::new(env, &config.token);
    client.transfer(&env.current_contract_address(), &config.owner, &amount);

    storage::write_treasury(env, 0);
    storage::write_total_supply(env, total_supply);

    events::emit_treasury_withdrawn(
        env,
        TreasuryWithdrawn {
            recipient: config.owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(amount)
}
