//! # Bounties Ledger Events
//!
//! Every state change publishes an event so off-chain indexers can rebuild
//! the ledger history without reading contract storage.
//!
//! ```text
//! init ──► b_issue ──► contrib ─┬─► accept   (arbiter releases escrow)
//!              │                └─► refund   (contributor reclaims)
//!              └──► answer
//! treasury:  contrib (fee share) ──► withdraw
//! ```
//!
//! Bounty-scoped events carry the bounty id as their second topic.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::RefundTimeout;

// ============================================================================
// Configuration Events
// ============================================================================

/// Emitted once by `init`.
///
/// # Event Topic
/// Symbol: `init`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerInitialized {
    pub owner: Address,
    pub token: Address,
    pub refund_timeout: RefundTimeout,
    pub fee_bps: u32,
    pub timestamp: u64,
}

/// Emitted when the owner changes the contribution fee rate.
///
/// # Event Topic
/// Symbol: `fee_cfg`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRateUpdated {
    pub old_fee_bps: u32,
    pub new_fee_bps: u32,
    pub timestamp: u64,
}

// ============================================================================
// Escrow Events
// ============================================================================

/// Emitted when a contribution creates a bounty for an unseen id.
///
/// # Event Topic
/// Symbol: `b_issue`, indexed by `bounty_id`
///
/// # State Transition
/// ```text
/// NONE → OPEN
/// ```
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BountyIssued {
    pub bounty_id: String,
    pub issuer: Address,
    pub question_hash: String,
    pub timestamp: u64,
}

/// Emitted for every contribution, including the one that issues a bounty.
///
/// # Event Topic
/// Symbol: `contrib`, indexed by `bounty_id`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionAdded {
    pub bounty_id: String,
    pub contribution_index: u32,
    pub contributor: Address,
    pub amount: i128,
    pub fee: i128,
    pub balance: i128,
    pub timestamp: u64,
}

/// Emitted when an answer is submitted.
///
/// # Event Topic
/// Symbol: `answer`, indexed by `bounty_id`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerSubmitted {
    pub bounty_id: String,
    pub fulfillment_index: u32,
    pub answerer: Address,
    pub answer_hash: String,
    pub timestamp: u64,
}

/// Emitted when the arbiter accepts an answer and releases escrow.
///
/// # Event Topic
/// Symbol: `accept`, indexed by `bounty_id`
///
/// # State Transition
/// ```text
/// fulfillment: PENDING → ACCEPTED (final)
/// ```
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerAccepted {
    pub bounty_id: String,
    pub fulfillment_index: u32,
    pub recipient: Address,
    pub amount: i128,
    pub remaining_balance: i128,
    pub timestamp: u64,
}

/// Emitted when a contributor reclaims a contribution.
///
/// # Event Topic
/// Symbol: `refund`, indexed by `bounty_id`
///
/// # State Transition
/// ```text
/// contribution: ACTIVE → REFUNDED (final)
/// ```
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRefunded {
    pub bounty_id: String,
    pub contribution_index: u32,
    pub refund_to: Address,
    pub amount: i128,
    pub remaining_balance: i128,
    pub timestamp: u64,
}

// ============================================================================
// Treasury Events
// ============================================================================

/// Emitted when the owner drains the treasury.
///
/// # Event Topic
/// Symbol: `withdraw`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryWithdrawn {
    pub recipient: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ============================================================================
// Event Emission Functions
// ============================================================================

pub fn emit_ledger_initialized(env: &Env, event: LedgerInitialized) {
    let topics = (symbol_short!("init"),);
    env.events().publish(topics, event);
}

pub fn emit_fee_rate_updated(env: &Env, event: FeeRateUpdated) {
    let topics = (symbol_short!("fee_cfg"),);
    env.events().publish(topics, event);
}

pub fn emit_bounty_issued(env: &Env, event: BountyIssued) {
    let topics = (symbol_short!("b_issue"), event.bounty_id.clone());
    env.events().publish(topics, event);
}

pub fn emit_contribution_added(env: &Env, event: ContributionAdded) {
    let topics = (symbol_short!("contrib"), event.bounty_id.clone());
    env.events().publish(topics, event);
}

pub fn emit_answer_submitted(env: &Env, event: AnswerSubmitted) {
    let topics = (symbol_short!("answer"), event.bounty_id.clone());
    env.events().publish(topics, event);
}

pub fn emit_answer_accepted(env: &Env, event: AnswerAccepted) {
    let topics = (symbol_short!("accept"), event.bounty_id.clone());
    env.events().publish(topics, event);
}

pub fn emit_contribution_refunded(env: &Env, event: ContributionRefunded) {
    let topics = (symbol_short!("refund"), event.bounty_id.clone());
    env.events().publish(topics, event);
}

pub fn emit_treasury_withdrawn(env: &Env, event: TreasuryWithdrawn) {
    let topics = (symbol_short!("withdraw"),);
    env.events().publish(topics, event);
}
