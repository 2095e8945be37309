#![no_main]

use bounties::{BountiesContract, BountiesContractClient, RefundTimeout};
use libfuzzer_sys::{arbitrary, fuzz_target};
use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

#[derive(arbitrary::Arbitrary, Debug)]
struct Input {
    fee_bps: u16,
    amounts: Vec<i64>,
}

fuzz_target!(|input: Input| {
    let fee_bps = u32::from(input.fee_bps) % 10_000;

    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();
    let contract_id = env.register_contract(None, BountiesContract);
    let client = BountiesContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token = token::Client::new(&env, &asset.address());
    let minter = token::StellarAssetClient::new(&env, &asset.address());
    client.init(&owner, &asset.address(), &RefundTimeout::Ledgers(0), &fee_bps);

    let bounty_id = String::from_str(&env, "fuzz");
    let question = String::from_str(&env, "q");
    let funder = Address::generate(&env);
    let mut accepted = 0u32;

    for amount in input.amounts.into_iter().take(32) {
        let amount = i128::from(amount);
        if amount > 0 {
            minter.mint(&funder, &amount);
        }
        let result = client.try_issue_bounty_and_contribute(&funder, &bounty_id, &question, &amount);
        assert_eq!(result.is_ok(), amount > 0);
        if result.is_ok() {
            accepted += 1;
        }
    }

    if accepted == 0 {
        assert!(!client.bounty_exists(&bounty_id));
        return;
    }
    let bounty = client.get_bounty(&bounty_id);
    assert_eq!(bounty.contributions.len(), accepted);
    let escrowed: i128 = bounty.contributions.iter().map(|c| c.amount).sum();
    let fees: i128 = bounty.contributions.iter().map(|c| c.fee).sum();
    assert_eq!(bounty.balance, escrowed);
    assert_eq!(client.get_treasury_balance(), fees);
    assert_eq!(client.get_total_supply(), escrowed + fees);
    assert_eq!(token.balance(&contract_id), client.get_total_supply());
});
