#![no_main]

//! Drives random operation sequences and checks conservation after each step.

use bounties::{BountiesContract, BountiesContractClient, RefundTimeout};
use libfuzzer_sys::{arbitrary, fuzz_target};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env, String};

const BOUNTIES: [&str; 3] = ["a", "b", "c"];
const ACCOUNTS: usize = 4;

#[derive(arbitrary::Arbitrary, Debug)]
enum Op {
    Issue { bounty: u8, account: u8, amount: u32 },
    Contribute { bounty: u8, account: u8, amount: u32 },
    Answer { bounty: u8, account: u8 },
    Accept { bounty: u8, index: u8, amount: u32, as_owner: bool },
    Refund { bounty: u8, index: u8, account: u8 },
    Withdraw { as_owner: bool },
    CloseLedgers { count: u8 },
}

fuzz_target!(|ops: Vec<Op>| {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();
    let contract_id = env.register_contract(None, BountiesContract);
    let client = BountiesContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token = token::Client::new(&env, &asset.address());
    let minter = token::StellarAssetClient::new(&env, &asset.address());
    client.init(&owner, &asset.address(), &RefundTimeout::Ledgers(3), &150);

    let accounts: Vec<Address> = (0..ACCOUNTS).map(|_| Address::generate(&env)).collect();
    for account in &accounts {
        minter.mint(account, &i128::from(u64::MAX));
    }
    let id = |n: u8| String::from_str(&env, BOUNTIES[usize::from(n) % BOUNTIES.len()]);
    let who = |n: u8| &accounts[usize::from(n) % ACCOUNTS];

    let mut paid: std::collections::BTreeSet<(u8, u8)> = Default::default();

    for op in ops.into_iter().take(64) {
        match op {
            Op::Issue { bounty, account, amount } => {
                let _ = client.try_issue_bounty_and_contribute(
                    who(account),
                    &id(bounty),
                    &id(bounty),
                    &i128::from(amount),
                );
            }
            Op::Contribute { bounty, account, amount } => {
                let _ = client.try_contribute(who(account), &id(bounty), &i128::from(amount));
            }
            Op::Answer { bounty, account } => {
                let _ = client.try_answer_bounty(who(account), &id(bounty), &id(bounty));
            }
            Op::Accept { bounty, index, amount, as_owner } => {
                let caller = if as_owner { &owner } else { who(index) };
                let ok = client
                    .try_accept_answer(caller, &id(bounty), &u32::from(index), &i128::from(amount))
                    .is_ok();
                let key = (bounty % BOUNTIES.len() as u8, index);
                if ok {
                    assert!(as_owner);
                    // At most one payout per fulfillment.
                    assert!(paid.insert(key));
                }
            }
            Op::Refund { bounty, index, account } => {
                let _ = client.try_refund_contribution(who(account), &id(bounty), &u32::from(index), &0);
            }
            Op::Withdraw { as_owner } => {
                let caller = if as_owner { &owner } else { &accounts[0] };
                assert_eq!(client.try_withdraw(caller).is_ok(), as_owner);
            }
            Op::CloseLedgers { count } => {
                env.ledger().with_mut(|li| li.sequence_number += u32::from(count));
            }
        }

        let mut escrowed = 0i128;
        for name in BOUNTIES {
            let key = String::from_str(&env, name);
            if !client.bounty_exists(&key) {
                continue;
            }
            let bounty = client.get_bounty(&key);
            let live: i128 = bounty.contributions.iter().filter(|c| !c.refunded).map(|c| c.amount).sum();
            let released: i128 = bounty.fulfillments.iter().filter(|f| f.accepted).map(|f| f.payout).sum();
            assert!(bounty.balance >= 0);
            assert_eq!(bounty.balance, live - released);
            escrowed += bounty.balance;
        }
        let total_supply = client.get_total_supply();
        assert_eq!(total_supply, escrowed + client.get_treasury_balance());
        assert_eq!(token.balance(&contract_id), total_supply);
    }
});
