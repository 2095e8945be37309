//! Ledger store: typed accessors over instance and persistent storage.
//!
//! Counters and configuration live in instance storage. Each bounty record is
//! its own persistent entry so that a busy bounty does not inflate the
//! instance footprint.

use soroban_sdk::{contracttype, Env, String};

use crate::types::{Bounty, LedgerConfig};
use crate::Error;

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const BOUNTY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BOUNTY_LIFETIME_THRESHOLD: u32 = BOUNTY_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys used for contract data persistence.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// [`LedgerConfig`] written by `init`.
    Config,
    /// Sum of every bounty balance plus the treasury.
    TotalSupply,
    /// Value held by the ledger that no bounty escrows.
    Treasury,
    /// Number of distinct bounty ids ever created.
    BountyCount,
    /// Bounty record by id.
    Bounty(String),
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub(crate) fn read_config(env: &Env) -> Result<LedgerConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub(crate) fn write_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

fn read_i128(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

pub(crate) fn read_total_supply(env: &Env) -> i128 {
    read_i128(env, &DataKey::TotalSupply)
}

pub(crate) fn write_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}

pub(crate) fn read_treasury(env: &Env) -> i128 {
    read_i128(env, &DataKey::Treasury)
}

pub(crate) fn write_treasury(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Treasury, &amount);
}

pub(crate) fn read_bounty_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::BountyCount)
        .unwrap_or(0)
}

pub(crate) fn write_bounty_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::BountyCount, &count);
}

pub(crate) fn has_bounty(env: &Env, bounty_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Bounty(bounty_id.clone()))
}

pub(crate) fn read_bounty(env: &Env, bounty_id: &String) -> Result<Bounty, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Bounty(bounty_id.clone()))
        .ok_or(Error::UnknownBounty)
}

pub(crate) fn write_bounty(env: &Env, bounty: &Bounty) {
    let key = DataKey::Bounty(bounty.bounty_id.clone());
    env.storage().persistent().set(&key, bounty);
    env.storage()
        .persistent()
        .extend_ttl(&key, BOUNTY_LIFETIME_THRESHOLD, BOUNTY_BUMP_AMOUNT);
}

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
