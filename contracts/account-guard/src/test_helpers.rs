use crate::{AccountGuardContract, AccountGuardContractClient, NULL_ACCOUNT, NULL_CONTRACT};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token, Address, Bytes, Env,
};

/// One unit of the test asset (7 decimals, like XLM).
pub const UNIT: i128 = 10_000_000;

/// What the guard holds right after setup.
pub const INITIAL_FUNDS: i128 = 10 * UNIT;

/// Recovery window used by the fixture: one hour.
pub const WINDOW: u64 = 3_600;

pub struct GuardFixture {
    pub env: Env,
    pub guard: Address,
    pub client: AccountGuardContractClient<'static>,
    pub owner: Address,
    pub asset: Address,
    pub token: token::Client<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

impl GuardFixture {
    /// Guard initialized by a fresh owner and funded with `INITIAL_FUNDS`.
    pub fn new() -> Self {
        let fixture = Self::uninitialized();
        fixture
            .client
            .initialize(&fixture.owner, &fixture.asset, &Some(WINDOW));
        fixture.token_admin.mint(&fixture.guard, &INITIAL_FUNDS);
        fixture
    }

    /// Registered guard and asset, `initialize` not called yet.
    pub fn uninitialized() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|li| li.timestamp = 1_000);

        let issuer = Address::generate(&env);
        let asset = env
            .register_stellar_asset_contract_v2(issuer)
            .address();
        let guard = env.register(AccountGuardContract, ());

        GuardFixture {
            client: AccountGuardContractClient::new(&env, &guard),
            token: token::Client::new(&env, &asset),
            token_admin: token::StellarAssetClient::new(&env, &asset),
            owner: Address::generate(&env),
            guard,
            asset,
            env,
        }
    }

    /// Generate three addresses and flag them as guardians.
    pub fn guardians(&self) -> [Address; 3] {
        let guardians = [
            Address::generate(&self.env),
            Address::generate(&self.env),
            Address::generate(&self.env),
        ];
        for g in guardians.iter() {
            self.client.set_guardian(&self.owner, g, &true);
        }
        guardians
    }

    pub fn user(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn null_address(&self) -> Address {
        Address::from_str(&self.env, NULL_ACCOUNT)
    }

    pub fn null_contract(&self) -> Address {
        Address::from_str(&self.env, NULL_CONTRACT)
    }

    pub fn no_payload(&self) -> Bytes {
        Bytes::new(&self.env)
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|li| li.timestamp = timestamp);
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}
