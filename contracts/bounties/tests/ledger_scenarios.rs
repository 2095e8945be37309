#![cfg(test)]

use bounties::{BountiesContract, BountiesContractClient, Error, RefundTimeout};
use bounties_test_utils::{advance_ledgers, create_token_contract, random_hash};
use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

// 1 unit = 10^7 base units, as with XLM stroops.
const UNIT: i128 = 10_000_000;

struct Actors {
    owner: Address,
    contributor: Address,
    answerer: Address,
    random: Address,
}

fn setup<'a>(
    env: &Env,
    refund_timeout: RefundTimeout,
    fee_bps: u32,
) -> (BountiesContractClient<'a>, token::Client<'a>, Actors) {
    env.mock_all_auths();
    let contract_id = env.register_contract(None, BountiesContract);
    let client = BountiesContractClient::new(env, &contract_id);

    let actors = Actors {
        owner: Address::generate(env),
        contributor: Address::generate(env),
        answerer: Address::generate(env),
        random: Address::generate(env),
    };
    let asset_admin = Address::generate(env);
    let (token_address, token_client, token_admin) = create_token_contract(env, &asset_admin);
    token_admin.mint(&actors.contributor, &(1_000 * UNIT));
    token_admin.mint(&actors.random, &(1_000 * UNIT));

    client.init(&actors.owner, &token_address, &refund_timeout, &fee_bps);
    (client, token_client, actors)
}

#[test]
fn test_issue_and_contribute_creates_bounty() {
    let env = Env::default();
    let (client, _token, actors) = setup(&env, RefundTimeout::Ledgers(0), 0);
    let amount = UNIT / 10_000;

    client.issue_bounty_and_contribute(
        &actors.contributor,
        &String::from_str(&env, "bountyId"),
        &String::from_str(&env, "questionHash"),
        &amount,
    );

    assert_eq!(client.num_bounties(), 1);
    assert_eq!(
        client.get_bounty(&String::from_str(&env, "bountyId")).balance,
        amount
    );
}

#[test]
fn test_contribute_to_existing_bounty() {
    let env = Env::default();
    let (client, _token, actors) = setup(&env, RefundTimeout::Ledgers(0), 0);
    let bounty_id = String::from_str(&env, "bountyId");
    let question = String::from_str(&env, "questionHash");

    assert_eq!(client.num_bounties(), 0);
    assert_eq!(client.get_total_supply(), 0);
    client.issue_bounty_and_contribute(&actors.contributor, &bounty_id, &question, &UNIT);
    let supply_1 = client.get_total_supply();
    client.issue_bounty_and_contribute(
        &actors.random,
        &String::from_str(&env, "bountyId2"),
        &question,
        &UNIT,
    );
    assert_eq!(client.num_bounties(), 2);
    assert_eq!(client.get_total_supply() - supply_1, UNIT);

    client.contribute(&actors.contributor, &bounty_id, &UNIT);

    let bounty = client.get_bounty(&bounty_id);
    assert_eq!(bounty.contributions.len(), 2);
    assert_eq!(bounty.contributions.get(1).unwrap().amount, UNIT);
}

#[test]
fn test_fulfillment_has_timestamp() {
    let env = Env::default();
    let (client, _token, actors) = setup(&env, RefundTimeout::Ledgers(0), 0);
    let bounty_id = String::from_str(&env, "bountyId");
    client.issue_bounty_and_contribute(
        &actors.contributor,
        &bounty_id,
        &random_hash(&env),
        &UNIT,
    );
    advance_ledgers(&env, 3);

    client.answer_bounty(&actors.answerer, &bounty_id, &random_hash(&env));

    let bounty = client.get_bounty(&bounty_id);
    assert_eq!(bounty.fulfillments.len(), 1);
    let fulfillment = bounty.fulfillments.get(0).unwrap();
    assert_eq!(fulfillment.timestamp, env.ledger().timestamp());
    assert_eq!(fulfillment.ledger, env.ledger().sequence());
}

#[test]
fn test_accept_answer_pays_submitter() {
    let env = Env::default();
    let (client, token, actors) = setup(&env, RefundTimeout::Ledgers(0), 0);
    let bounty_id = String::from_str(&env, "bountyId");
    let amount = 100 * UNIT;
    client.issue_bounty_and_contribute(
        &actors.contributor,
        &bounty_id,
        &random_hash(&env),
        &amount,
    );
    client.answer_bounty(&actors.answerer, &bounty_id, &random_hash(&env));
    assert_eq!(client.get_bounty(&bounty_id).balance, amount);

    let before = token.balance(&actors.answerer);
    client.accept_answer(&actors.owner, &bounty_id, &0, &amount);

    assert_eq!(client.get_bounty(&bounty_id).balance, 0);
    assert_eq!(token.balance(&actors.answerer) - before, amount);
    assert_eq!(client.get_total_supply(), 0);
}

#[test]
fn test_only_owner_accepts_and_withdraws() {
    let env = Env::default();
    let (client, _token, actors) = setup(&env, RefundTimeout::Ledgers(0), 100);
    let bounty_id = String::from_str(&env, "bountyId");
    client.issue_bounty_and_contribute(
        &actors.contributor,
        &bounty_id,
        &random_hash(&env),
        &UNIT,
    );
    client.answer_bounty(&actors.answerer, &bounty_id, &random_hash(&env));

    for caller in [&actors.contributor, &actors.answerer, &actors.random] {
        let result = client.try_accept_answer(caller, &bounty_id, &0, &1);
        assert_eq!(result.unwrap_err().unwrap(), Error::Unauthorized);
        let result = client.try_withdraw(caller);
        assert_eq!(result.unwrap_err().unwrap(), Error::Unauthorized);
    }
}

#[test]
fn test_withdraw_empties_withdrawable_total() {
    let env = Env::default();
    let (client, token, actors) = setup(&env, RefundTimeout::Ledgers(0), 500);
    let bounty_id = String::from_str(&env, "bountyId");
    let amount = 100 * UNIT;
    client.issue_bounty_and_contribute(
        &actors.contributor,
        &bounty_id,
        &random_hash(&env),
        &amount,
    );
    assert_eq!(client.get_total_supply(), amount);
    assert_eq!(client.get_treasury_balance(), 5 * UNIT);

    let before = token.balance(&actors.owner);
    client.withdraw(&actors.owner);

    assert_eq!(client.get_treasury_balance(), 0);
    assert_eq!(token.balance(&actors.owner) - before, 5 * UNIT);
    // Escrow stays claimable.
    assert_eq!(client.get_bounty(&bounty_id).balance, 95 * UNIT);
    assert_eq!(client.get_total_supply(), 95 * UNIT);
}

#[test]
fn test_refund_then_bounty_persists() {
    let env = Env::default();
    let (client, token, actors) = setup(&env, RefundTimeout::Ledgers(0), 0);
    let bounty_id = String::from_str(&env, "bountyId");
    let amount = UNIT / 10_000;
    let start = token.balance(&actors.contributor);
    client.issue_bounty_and_contribute(
        &actors.contributor,
        &bounty_id,
        &String::from_str(&env, "Give me my Money Back!"),
        &amount,
    );
    assert_eq!(client.num_bounties(), 1);

    client.refund_contribution(&actors.contributor, &bounty_id, &0, &0);

    assert_eq!(client.num_bounties(), 1);
    assert_eq!(token.balance(&actors.contributor), start);
    let result = client.try_refund_contribution(&actors.contributor, &bounty_id, &0, &0);
    assert_eq!(result.unwrap_err().unwrap(), Error::AlreadyRefunded);
}
