//! Fixtures shared by the bounties ledger benchmarks.

use bounties::{BountiesContract, BountiesContractClient, RefundTimeout};
use bounties_test_utils::{create_token_contract, hash_from_seed};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

/// Value minted to every funder created by [`LedgerFixture::funder`].
pub const FUNDER_BALANCE: i128 = 1_000_000_0000000;

pub struct LedgerFixture {
    pub env: Env,
    pub client: BountiesContractClient<'static>,
    pub owner: Address,
    token_admin: soroban_sdk::token::StellarAssetClient<'static>,
}

impl LedgerFixture {
    pub fn new(fee_bps: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        // Measure contract logic, not the test host's resource limits.
        env.budget().reset_unlimited();

        let contract_id = env.register_contract(None, BountiesContract);
        let client = BountiesContractClient::new(&env, &contract_id);
        let owner = Address::generate(&env);
        let asset_admin = Address::generate(&env);
        let (token, _, token_admin) = create_token_contract(&env, &asset_admin);
        client.init(&owner, &token, &RefundTimeout::Ledgers(0), &fee_bps);

        Self {
            env,
            client,
            owner,
            token_admin,
        }
    }

    pub fn funder(&self) -> Address {
        let funder = Address::generate(&self.env);
        self.token_admin.mint(&funder, &FUNDER_BALANCE);
        funder
    }

    pub fn bounty_id(&self, n: u64) -> String {
        hash_from_seed(&self.env, n)
    }

    /// Issues bounty `n` with `contributions` entries and `answers` fulfillments.
    pub fn seed_bounty(&self, n: u64, contributions: u32, answers: u32, amount: i128) -> String {
        let bounty_id = self.bounty_id(n);
        let funder = self.funder();
        let question = hash_from_seed(&self.env, n + 1);
        self.client
            .issue_bounty_and_contribute(&funder, &bounty_id, &question, &amount);
        for _ in 1..contributions {
            self.client.contribute(&funder, &bounty_id, &amount);
        }
        for i in 0..answers {
            let answerer = Address::generate(&self.env);
            let answer = hash_from_seed(&self.env, n + 2 + u64::from(i));
            self.client.answer_bounty(&answerer, &bounty_id, &answer);
        }
        bounty_id
    }
}
