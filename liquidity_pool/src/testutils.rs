#![cfg(test)]
extern crate std;

use crate::LiquidityPoolClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env,
};
use std::vec;

pub(crate) struct TestConfig {
    pub(crate) users_count: u32,
    pub(crate) mint_to_user: i128,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            users_count: 2,
            mint_to_user: 100000,
        }
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) users: vec::Vec<Address>,
    pub(crate) token_a: TokenClient<'a>,
    pub(crate) token_b: TokenClient<'a>,
    pub(crate) token_a_admin: StellarAssetClient<'a>,
    pub(crate) token_b_admin: StellarAssetClient<'a>,
    pub(crate) liq_pool: LiquidityPoolClient<'a>,
}

impl Default for Setup<'_> {
    /// Create setup from default config, mint and approve tokens for all users
    fn default() -> Self {
        let default_config = TestConfig::default();
        Self::new_with_config(&default_config)
    }
}

impl Setup<'_> {
    /// Create setup from config, mint and approve tokens for all users
    pub(crate) fn new_with_config(config: &TestConfig) -> Self {
        let setup = Self::setup(config);
        setup.mint_tokens_for_users(&config.mint_to_user);
        setup
    }

    /// Create users, both pool assets and an initialized pool. Users hold nothing.
    pub(crate) fn setup(config: &TestConfig) -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let users = Self::generate_random_users(&e, config.users_count);

        let token_admin = Address::generate(&e);
        let token_a = create_token_contract(&e, &token_admin);
        let token_b = create_token_contract(&e, &token_admin);
        let token_a_admin = StellarAssetClient::new(&e, &token_a.address);
        let token_b_admin = StellarAssetClient::new(&e, &token_b.address);

        let liq_pool = create_liqpool_contract(&e, &token_a.address, &token_b.address);

        Self {
            env: e,
            users,
            token_a,
            token_b,
            token_a_admin,
            token_b_admin,
            liq_pool,
        }
    }

    pub(crate) fn generate_random_users(e: &Env, users_count: u32) -> vec::Vec<Address> {
        let mut users = vec![];
        for _c in 0..users_count {
            users.push(Address::generate(e));
        }
        users
    }

    pub(crate) fn mint_tokens_for_users(&self, amount: &i128) {
        for user in self.users.iter() {
            self.token_a_admin.mint(user, amount);
            assert_eq!(self.token_a.balance(user), amount.clone());

            self.token_b_admin.mint(user, amount);
            assert_eq!(self.token_b.balance(user), amount.clone());

            self.approve_pool(user, amount);
        }
    }

    pub(crate) fn approve_pool(&self, user: &Address, amount: &i128) {
        self.token_a
            .approve(user, &self.liq_pool.address, amount, &99999);
        self.token_b
            .approve(user, &self.liq_pool.address, amount, &99999);
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> TokenClient<'a> {
    TokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone()).address(),
    )
}

pub(crate) fn create_liqpool_contract<'a>(
    e: &Env,
    token_a: &Address,
    token_b: &Address,
) -> LiquidityPoolClient<'a> {
    let liq_pool = LiquidityPoolClient::new(e, &e.register(crate::LiquidityPool {}, ()));
    liq_pool.initialize(token_a, token_b);
    liq_pool
}

// Asset contract that misbehaves on demand, for exercising transfer verification.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FaultyTokenError {
    TransferDisabled = 1,
    InsufficientBalance = 2,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum FaultMode {
    Honest = 0,
    // transfer_from delivers one unit less than requested
    ShortChange = 1,
    // transfer always fails
    RejectTransfer = 2,
}

#[derive(Clone)]
#[contracttype]
enum FaultyTokenKey {
    Mode,
    Balance(Address),
}

#[contract]
pub struct FaultyToken;

fn read_balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&FaultyTokenKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn move_balance(e: &Env, from: &Address, to: &Address, debit: i128, credit: i128) {
    let from_balance = read_balance(e, from);
    if from_balance < debit {
        panic_with_error!(e, FaultyTokenError::InsufficientBalance);
    }
    e.storage()
        .persistent()
        .set(&FaultyTokenKey::Balance(from.clone()), &(from_balance - debit));
    let to_balance = read_balance(e, to);
    e.storage()
        .persistent()
        .set(&FaultyTokenKey::Balance(to.clone()), &(to_balance + credit));
}

fn read_mode(e: &Env) -> FaultMode {
    e.storage()
        .instance()
        .get(&FaultyTokenKey::Mode)
        .unwrap_or(FaultMode::Honest)
}

#[contractimpl]
impl FaultyToken {
    pub fn set_mode(e: Env, mode: FaultMode) {
        e.storage().instance().set(&FaultyTokenKey::Mode, &mode);
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        let balance = read_balance(&e, &to);
        e.storage()
            .persistent()
            .set(&FaultyTokenKey::Balance(to), &(balance + amount));
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        if read_mode(&e) == FaultMode::RejectTransfer {
            panic_with_error!(&e, FaultyTokenError::TransferDisabled);
        }
        move_balance(&e, &from, &to, amount, amount);
    }

    pub fn transfer_from(e: Env, _spender: Address, from: Address, to: Address, amount: i128) {
        let credit = match read_mode(&e) {
            FaultMode::ShortChange => amount - 1,
            _ => amount,
        };
        move_balance(&e, &from, &to, amount, credit);
    }
}

pub(crate) fn create_faulty_token_contract<'a>(e: &Env) -> FaultyTokenClient<'a> {
    FaultyTokenClient::new(e, &e.register(FaultyToken {}, ()))
}

#[test]
fn test() {
    let setup = Setup::default();
    assert_eq!(setup.users.len(), 2);
    assert_eq!(
        setup.token_a.allowance(&setup.users[0], &setup.liq_pool.address),
        100000
    );
    assert_eq!(setup.liq_pool.get_total_supply(), 0);
}
