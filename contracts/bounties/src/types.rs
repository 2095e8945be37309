//! # Ledger Data Model
//!
//! Records persisted by the bounties ledger. A [`Bounty`] owns two append-only
//! lists addressed by `u32` index. Entries are never removed or reordered;
//! each carries exactly one flag that flips once:
//!
//! ```text
//! Contribution: refunded   false ──► true
//! Fulfillment:  accepted   false ──► true  (payout recorded with it)
//! ```

use soroban_sdk::{contracttype, Address, String, Vec};

/// Denominator for fee rates expressed in basis points.
pub const BASIS_POINTS: u32 = 10_000;

/// How long a contribution must sit before its contributor may reclaim it.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefundTimeout {
    /// Number of ledgers (blocks) that must close after the contribution.
    Ledgers(u32),
    /// Number of seconds of ledger time that must pass after the contribution.
    Seconds(u64),
}

/// Ledger configuration written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Arbiter and treasury owner. Fixed for the life of the contract.
    pub owner: Address,
    /// Token contract used for every value transfer.
    pub token: Address,
    /// Inactivity period before a contribution becomes refundable.
    pub refund_timeout: RefundTimeout,
    /// Share of each contribution routed to the treasury, in basis points.
    pub fee_bps: u32,
}

/// A funding entry attached to a bounty.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub contributor: Address,
    /// Value escrowed by the bounty for this entry (fee already deducted).
    pub amount: i128,
    /// Value routed to the treasury when the entry was made. Not refundable.
    pub fee: i128,
    pub refunded: bool,
    /// Ledger timestamp at contribution time.
    pub timestamp: u64,
    /// Ledger sequence number at contribution time.
    pub ledger: u32,
}

/// An answer submitted against a bounty.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fulfillment {
    pub answerer: Address,
    pub answer_hash: String,
    pub timestamp: u64,
    pub ledger: u32,
    pub accepted: bool,
    /// Amount released to `answerer` on acceptance, zero until then.
    pub payout: i128,
}

/// A funded request for an answer.
///
/// `balance` always equals the sum of non-refunded contribution amounts minus
/// the payouts of accepted fulfillments, and is never negative.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bounty {
    pub bounty_id: String,
    /// Account whose contribution created the bounty.
    pub issuer: Address,
    pub question_hash: String,
    pub contributions: Vec<Contribution>,
    pub fulfillments: Vec<Fulfillment>,
    pub balance: i128,
    pub created_at: u64,
}
