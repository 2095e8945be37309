//! # Bounties Ledger Contract
//!
//! An escrow ledger for question bounties. Anyone funds a bounty, anyone may
//! submit answers, and a trusted arbiter (the ledger owner) releases escrowed
//! value to the answer it accepts.
//!
//! ## Overview
//!
//! Bounties are keyed by an external string id and created by the first
//! contribution to an unseen id. Contributions and fulfillments are
//! append-only lists addressed by index; each entry carries a single flag
//! (`refunded` / `accepted`) that flips at most once.
//!
//! ## Key Features
//!
//! - **Contribution Accounting**: any number of contributors per bounty
//! - **Arbiter Payouts**: full or partial release, at most once per answer
//! - **Timed Refunds**: contributors reclaim unspent escrow after a timeout
//! - **Treasury**: an optional contribution fee accrues to an owner-withdrawable
//!   treasury kept apart from bounty escrow
//! - **Event Emission**: every state change emits an event for indexing
//!
//! ## Conservation
//!
//! ```text
//! total_supply == Σ bounty.balance + treasury == token.balance(contract)
//! bounty.balance == Σ contribution.amount (not refunded) − Σ fulfillment.payout (accepted)
//! ```
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! // 1. Initialize (one-time)
//! client.init(&owner, &token, &RefundTimeout::Ledgers(17_280), &0);
//!
//! // 2. Fund a bounty and collect answers
//! client.issue_bounty_and_contribute(&funder, &bounty_id, &question_hash, &amount);
//! client.answer_bounty(&answerer, &bounty_id, &answer_hash);
//!
//! // 3. Release to the chosen answer (owner only)
//! client.accept_answer(&owner, &bounty_id, &0, &amount);
//!
//! // 4. Or reclaim after the timeout
//! client.refund_contribution(&funder, &bounty_id, &0, &0);
//! ```

#![no_std]

mod events;
mod ledger;
mod policy;
mod storage;
mod types;


use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub use events::*;
pub use policy::{OwnerArbiter, PayoutAuthority, RefundWindow};
pub use storage::DataKey;
pub use types::*;

/// Contract errors returned by ledger operations.
///
/// Every error is a caller-visible precondition failure. A call that returns
/// one of these leaves the ledger unchanged.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `init` has already been called.
    AlreadyInitialized = 1,
    /// `init` has not been called yet.
    NotInitialized = 2,
    /// Amount is zero or negative where a positive value is required.
    InvalidAmount = 3,
    /// No bounty exists with the given id.
    UnknownBounty = 4,
    /// Contribution or fulfillment index is past the end of its list.
    IndexOutOfRange = 5,
    /// Caller lacks the required role (owner or original contributor).
    Unauthorized = 6,
    /// Bounty escrow cannot cover the requested amount.
    InsufficientBalance = 7,
    /// Fulfillment has already been accepted.
    AlreadyAccepted = 8,
    /// Contribution has already been refunded.
    AlreadyRefunded = 9,
    /// Refund timeout has not elapsed since the contribution.
    TimeoutNotElapsed = 10,
    /// Bounty id is empty.
    InvalidBountyId = 11,
    /// Configuration value is out of range.
    InvalidConfig = 12,
    /// Arithmetic overflow in balance accounting.
    Overflow = 13,
}

#[contract]
pub struct BountiesContract;

#[contractimpl]
impl BountiesContract {
    /// Initialize the ledger.
    ///
    /// # Arguments
    ///
    /// * `owner` - Arbiter for payouts and recipient of treasury withdrawals
    /// * `token` - Token contract used for all value transfers
    /// * `refund_timeout` - Inactivity period before contributions become refundable
    /// * `fee_bps` - Share of each contribution routed to the treasury, in basis points
    ///
    /// # Returns
    ///
    /// * `Err(Error::AlreadyInitialized)` - If called twice
    /// * `Err(Error::InvalidConfig)` - If `fee_bps >= 10_000`
    pub fn init(
        env: Env,
        owner: Address,
        token: Address,
        refund_timeout: RefundTimeout,
        fee_bps: u32,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        if fee_bps >= BASIS_POINTS {
            return Err(Error::InvalidConfig);
        }

        let config = LedgerConfig {
            owner: owner.clone(),
            token: token.clone(),
            refund_timeout,
            fee_bps,
        };
        storage::write_config(&env, &config);
        storage::write_total_supply(&env, 0);
        storage::write_treasury(&env, 0);
        storage::write_bounty_count(&env, 0);
        storage::bump_instance(&env);

        events::emit_ledger_initialized(
            &env,
            LedgerInitialized {
                owner,
                token,
                refund_timeout,
                fee_bps,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Update the contribution fee rate. Owner only.
    ///
    /// Only affects contributions made after the update.
    pub fn set_fee_rate(env: Env, caller: Address, fee_bps: u32) -> Result<(), Error> {
        let mut config = storage::read_config(&env)?;
        OwnerArbiter::from_config(&config).authorize(&env, &caller)?;
        if fee_bps >= BASIS_POINTS {
            return Err(Error::InvalidConfig);
        }

        let old_fee_bps = config.fee_bps;
        config.fee_bps = fee_bps;
        storage::write_config(&env, &config);
        storage::bump_instance(&env);

        events::emit_fee_rate_updated(
            &env,
            FeeRateUpdated {
                old_fee_bps,
                new_fee_bps: fee_bps,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Fund a bounty, creating it if `bounty_id` has not been seen before.
    ///
    /// `question_hash` is only stored when the bounty is created; it is ignored
    /// for an existing id. Transfers `amount` from `contributor` into custody.
    ///
    /// # Returns
    ///
    /// The index of the new contribution.
    ///
    /// * `Err(Error::InvalidAmount)` - If `amount <= 0`
    /// * `Err(Error::InvalidBountyId)` - If `bounty_id` is empty
    pub fn issue_bounty_and_contribute(
        env: Env,
        contributor: Address,
        bounty_id: String,
        question_hash: String,
        amount: i128,
    ) -> Result<u32, Error> {
        contributor.require_auth();
        let index =
            ledger::issue_and_contribute(&env, &contributor, &bounty_id, &question_hash, amount)?;
        storage::bump_instance(&env);
        Ok(index)
    }

    /// Add funds to an existing bounty.
    ///
    /// # Returns
    ///
    /// The index of the new contribution.
    ///
    /// * `Err(Error::UnknownBounty)` - If the bounty does not exist
    /// * `Err(Error::InvalidAmount)` - If `amount <= 0`
    pub fn contribute(
        env: Env,
        contributor: Address,
        bounty_id: String,
        amount: i128,
    ) -> Result<u32, Error> {
        contributor.require_auth();
        let index = ledger::contribute(&env, &contributor, &bounty_id, amount)?;
        storage::bump_instance(&env);
        Ok(index)
    }

    /// Submit an answer. Funding state is not checked.
    ///
    /// # Returns
    ///
    /// The index of the new fulfillment.
    pub fn answer_bounty(
        env: Env,
        answerer: Address,
        bounty_id: String,
        answer_hash: String,
    ) -> Result<u32, Error> {
        answerer.require_auth();
        let index = ledger::answer(&env, &answerer, &bounty_id, &answer_hash)?;
        storage::bump_instance(&env);
        Ok(index)
    }

    /// Accept a fulfillment and release `amount` of escrow to its answerer.
    ///
    /// Partial releases leave the remainder escrowed for another fulfillment.
    ///
    /// # Returns
    ///
    /// * `Err(Error::Unauthorized)` - If `caller` is not the arbiter
    /// * `Err(Error::InvalidAmount)` - If `amount <= 0`
    /// * `Err(Error::UnknownBounty)` / `Err(Error::IndexOutOfRange)`
    /// * `Err(Error::AlreadyAccepted)` - If the fulfillment was already paid
    /// * `Err(Error::InsufficientBalance)` - If `amount` exceeds the bounty balance
    pub fn accept_answer(
        env: Env,
        caller: Address,
        bounty_id: String,
        fulfillment_index: u32,
        amount: i128,
    ) -> Result<(), Error> {
        let config = storage::read_config(&env)?;
        let arbiter = OwnerArbiter::from_config(&config);
        ledger::release_payout(&env, &arbiter, &caller, &bounty_id, fulfillment_index, amount)?;
        storage::bump_instance(&env);
        Ok(())
    }

    /// Return a contribution to its contributor once the refund timeout has
    /// elapsed.
    ///
    /// `min_elapsed` may only tighten the configured timeout, in the same unit
    /// (ledgers or seconds). A contribution is refundable only while the
    /// bounty balance still covers it; value already paid out is not
    /// reclaimable.
    ///
    /// # Returns
    ///
    /// The refunded amount.
    ///
    /// * `Err(Error::Unauthorized)` - If `caller` is not the original contributor
    /// * `Err(Error::AlreadyRefunded)`
    /// * `Err(Error::TimeoutNotElapsed)`
    /// * `Err(Error::InsufficientBalance)` - If payouts left too little escrow
    pub fn refund_contribution(
        env: Env,
        caller: Address,
        bounty_id: String,
        contribution_index: u32,
        min_elapsed: u64,
    ) -> Result<i128, Error> {
        let config = storage::read_config(&env)?;
        let amount = ledger::refund(
            &env,
            &config.refund_timeout,
            &caller,
            &bounty_id,
            contribution_index,
            min_elapsed,
        )?;
        storage::bump_instance(&env);
        Ok(amount)
    }

    /// Drain the treasury to the owner. Owner only.
    ///
    /// Bounty escrow is never touched.
    ///
    /// # Returns
    ///
    /// The withdrawn amount, zero if the treasury was empty.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        let config = storage::read_config(&env)?;
        let arbiter = OwnerArbiter::from_config(&config);
        let amount = ledger::withdraw_treasury(&env, &arbiter, &caller)?;
        storage::bump_instance(&env);
        Ok(amount)
    }

    // ========================================================================
    // View Functions
    // ========================================================================

    pub fn get_bounty(env: Env, bounty_id: String) -> Result<Bounty, Error> {
        storage::read_bounty(&env, &bounty_id)
    }

    pub fn bounty_exists(env: Env, bounty_id: String) -> bool {
        storage::has_bounty(&env, &bounty_id)
    }

    pub fn num_bounties(env: Env) -> u32 {
        storage::read_bounty_count(&env)
    }

    /// Total value held by the ledger: every bounty balance plus the treasury.
    pub fn get_total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    /// Value the owner can currently withdraw.
    pub fn get_treasury_balance(env: Env) -> i128 {
        storage::read_treasury(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        Ok(storage::read_config(&env)?.owner)
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, Error> {
        storage::read_config(&env)
    }
}
