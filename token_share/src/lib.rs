#![no_std]

//! Pool share bookkeeping kept in the pool contract's own storage.
//!
//! Total supply lives in instance storage next to the reserves, holder balances in
//! persistent storage keyed by holder. Supply may exceed the sum of holder balances:
//! the minimum liquidity locked on the first deposit is counted in the total but
//! belongs to nobody.

use soroban_sdk::{contracttype, Address, Env};
use utils::bump::{bump_instance, bump_persistent};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    TotalShares,
    Shares(Address),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShareError {
    InsufficientShare,
    Overflow,
}

pub fn get_total_shares(e: &Env) -> u128 {
    bump_instance(e);
    e.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn put_total_shares(e: &Env, value: u128) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::TotalShares, &value)
}

pub fn get_user_balance_shares(e: &Env, user: &Address) -> u128 {
    let key = DataKey::Shares(user.clone());
    match e.storage().persistent().get::<DataKey, u128>(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => 0,
    }
}

fn put_user_balance_shares(e: &Env, user: &Address, amount: u128) {
    let key = DataKey::Shares(user.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

// Credits `amount` shares to `to`. Total supply is maintained by the caller.
pub fn mint_shares(e: &Env, to: &Address, amount: u128) -> Result<u128, ShareError> {
    let balance = get_user_balance_shares(e, to)
        .checked_add(amount)
        .ok_or(ShareError::Overflow)?;
    put_user_balance_shares(e, to, balance);
    Ok(balance)
}

// Debits `amount` shares from `from`. Total supply is maintained by the caller.
pub fn burn_shares(e: &Env, from: &Address, amount: u128) -> Result<u128, ShareError> {
    let balance = get_user_balance_shares(e, from);
    if balance < amount {
        return Err(ShareError::InsufficientShare);
    }
    put_user_balance_shares(e, from, balance - amount);
    Ok(balance - amount)
}
