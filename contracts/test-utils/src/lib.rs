//! Shared fixtures for bounties ledger tests and benchmarks.
//!
//! Everything here runs against the Soroban test host (`testutils`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env, String};

/// Seconds the test ledger clock advances per closed ledger.
pub const LEDGER_CLOSE_SECONDS: u64 = 5;

/// Registers a Stellar asset contract administered by `admin`.
pub fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, token::Client<'a>, token::StellarAssetClient<'a>) {
    let token_id = e.register_stellar_asset_contract_v2(admin.clone());
    let token = token_id.address();
    let token_client = token::Client::new(e, &token);
    let token_admin_client = token::StellarAssetClient::new(e, &token);
    (token, token_client, token_admin_client)
}

/// Generates an account holding `amount` of the asset behind `token_admin`.
///
/// Minting needs the asset admin's signature, so call this after
/// `env.mock_all_auths()`.
pub fn funded_account(
    env: &Env,
    token_admin: &token::StellarAssetClient,
    amount: i128,
) -> Address {
    let account = Address::generate(env);
    if amount > 0 {
        token_admin.mint(&account, &amount);
    }
    account
}

/// Hex-encoded 32-byte content hash derived deterministically from `seed`.
pub fn hash_from_seed(env: &Env, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    hex_hash(env, rng.gen())
}

/// Hex-encoded random 32-byte content hash.
pub fn random_hash(env: &Env) -> String {
    hex_hash(env, rand::thread_rng().gen())
}

fn hex_hash(env: &Env, bytes: [u8; 32]) -> String {
    String::from_str(env, &hex::encode(bytes))
}

/// Closes `ledgers` ledgers, moving both the sequence number and the clock.
pub fn advance_ledgers(env: &Env, ledgers: u32) {
    env.ledger().with_mut(|li| {
        li.sequence_number += ledgers;
        li.timestamp += u64::from(ledgers) * LEDGER_CLOSE_SECONDS;
    });
}

/// Moves the ledger clock forward without closing ledgers.
pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
