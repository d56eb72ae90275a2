use crate::constants::MINIMUM_LIQUIDITY;
use crate::errors::LiquidityPoolError;
use crate::storage::{
    get_reserve_a, get_reserve_b, get_token_a, get_token_b, set_reserve_a, set_reserve_b,
};
use soroban_sdk::{Address, Env};
use token_share::{burn_shares, get_total_shares, mint_shares, put_total_shares};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Asset {
    A,
    B,
}

// In-memory view of the pool state for a single invocation.
//
// Reserves and total supply are staged here and written back together by `commit`,
// which every mutating entry point calls before any transfer out of the pool.
// Holder balances go straight to storage; a failed invocation rolls them back.
pub(crate) struct PoolLedger {
    env: Env,
    token_a: Address,
    token_b: Address,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
}

impl PoolLedger {
    pub(crate) fn load(e: &Env) -> Self {
        PoolLedger {
            env: e.clone(),
            token_a: get_token_a(e),
            token_b: get_token_b(e),
            reserve_a: get_reserve_a(e),
            reserve_b: get_reserve_b(e),
            total_shares: get_total_shares(e),
        }
    }

    pub(crate) fn token(&self, asset: Asset) -> Address {
        match asset {
            Asset::A => self.token_a.clone(),
            Asset::B => self.token_b.clone(),
        }
    }

    pub(crate) fn tokens(&self) -> (Address, Address) {
        (self.token_a.clone(), self.token_b.clone())
    }

    // Maps a (token_in, token_out) pair of addresses onto the pool's assets.
    pub(crate) fn resolve_pair(
        &self,
        token_in: &Address,
        token_out: &Address,
    ) -> Result<(Asset, Asset), LiquidityPoolError> {
        if *token_in == self.token_a && *token_out == self.token_b {
            Ok((Asset::A, Asset::B))
        } else if *token_in == self.token_b && *token_out == self.token_a {
            Ok((Asset::B, Asset::A))
        } else {
            Err(LiquidityPoolError::InvalidToken)
        }
    }

    pub(crate) fn reserve(&self, asset: Asset) -> u128 {
        match asset {
            Asset::A => self.reserve_a,
            Asset::B => self.reserve_b,
        }
    }

    pub(crate) fn reserves(&self) -> (u128, u128) {
        (self.reserve_a, self.reserve_b)
    }

    pub(crate) fn total_shares(&self) -> u128 {
        self.total_shares
    }

    fn reserve_mut(&mut self, asset: Asset) -> &mut u128 {
        match asset {
            Asset::A => &mut self.reserve_a,
            Asset::B => &mut self.reserve_b,
        }
    }

    pub(crate) fn credit_reserve(
        &mut self,
        asset: Asset,
        amount: u128,
    ) -> Result<(), LiquidityPoolError> {
        let reserve = self.reserve_mut(asset);
        *reserve = reserve
            .checked_add(amount)
            .ok_or(LiquidityPoolError::ArithmeticOverflow)?;
        Ok(())
    }

    pub(crate) fn debit_reserve(
        &mut self,
        asset: Asset,
        amount: u128,
    ) -> Result<(), LiquidityPoolError> {
        let reserve = self.reserve_mut(asset);
        *reserve = reserve
            .checked_sub(amount)
            .ok_or(LiquidityPoolError::InsufficientReserve)?;
        Ok(())
    }

    pub(crate) fn mint_share(
        &mut self,
        holder: &Address,
        amount: u128,
    ) -> Result<(), LiquidityPoolError> {
        self.total_shares = self
            .total_shares
            .checked_add(amount)
            .ok_or(LiquidityPoolError::ArithmeticOverflow)?;
        mint_shares(&self.env, holder, amount)?;
        Ok(())
    }

    // Adds MINIMUM_LIQUIDITY to supply without crediting anybody.
    pub(crate) fn lock_minimum_liquidity(&mut self) -> Result<(), LiquidityPoolError> {
        self.total_shares = self
            .total_shares
            .checked_add(MINIMUM_LIQUIDITY)
            .ok_or(LiquidityPoolError::ArithmeticOverflow)?;
        Ok(())
    }

    pub(crate) fn burn_share(
        &mut self,
        holder: &Address,
        amount: u128,
    ) -> Result<(), LiquidityPoolError> {
        burn_shares(&self.env, holder, amount)?;
        self.total_shares = self
            .total_shares
            .checked_sub(amount)
            .ok_or(LiquidityPoolError::InsufficientShare)?;
        Ok(())
    }

    pub(crate) fn commit(&self) {
        set_reserve_a(&self.env, &self.reserve_a);
        set_reserve_b(&self.env, &self.reserve_b);
        put_total_shares(&self.env, self.total_shares);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::storage::{set_token_a, set_token_b};
    use soroban_sdk::testutils::Address as _;
    use token_share::get_user_balance_shares;

    fn setup_pool(e: &Env) -> Address {
        let contract = e.register(crate::LiquidityPool, ());
        e.as_contract(&contract, || {
            set_token_a(e, &Address::generate(e));
            set_token_b(e, &Address::generate(e));
            set_reserve_a(e, &10000);
            set_reserve_b(e, &40000);
            put_total_shares(e, 20000);
        });
        contract
    }

    #[test]
    fn test_debit_reserve() {
        let e = Env::default();
        let contract = setup_pool(&e);

        e.as_contract(&contract, || {
            let mut ledger = PoolLedger::load(&e);
            assert_eq!(
                ledger.debit_reserve(Asset::A, 10001),
                Err(LiquidityPoolError::InsufficientReserve)
            );
            assert_eq!(ledger.reserve(Asset::A), 10000);
            assert_eq!(ledger.debit_reserve(Asset::A, 10000), Ok(()));
            assert_eq!(ledger.reserve(Asset::A), 0);
            assert_eq!(ledger.reserve(Asset::B), 40000);
        });
    }

    #[test]
    fn test_credit_reserve_overflow() {
        let e = Env::default();
        let contract = setup_pool(&e);

        e.as_contract(&contract, || {
            let mut ledger = PoolLedger::load(&e);
            assert_eq!(
                ledger.credit_reserve(Asset::B, u128::MAX - 39999),
                Err(LiquidityPoolError::ArithmeticOverflow)
            );
            assert_eq!(ledger.reserve(Asset::B), 40000);
            assert_eq!(ledger.credit_reserve(Asset::B, u128::MAX - 40000), Ok(()));
            assert_eq!(ledger.reserve(Asset::B), u128::MAX);
        });
    }

    #[test]
    fn test_burn_share() {
        let e = Env::default();
        let contract = setup_pool(&e);
        let user = Address::generate(&e);

        e.as_contract(&contract, || {
            let mut ledger = PoolLedger::load(&e);
            ledger.mint_share(&user, 500).unwrap();
            assert_eq!(ledger.total_shares(), 20500);

            assert_eq!(
                ledger.burn_share(&user, 501),
                Err(LiquidityPoolError::InsufficientShare)
            );
            assert_eq!(ledger.total_shares(), 20500);
            assert_eq!(get_user_balance_shares(&e, &user), 500);

            assert_eq!(ledger.burn_share(&user, 500), Ok(()));
            assert_eq!(ledger.total_shares(), 20000);
            assert_eq!(get_user_balance_shares(&e, &user), 0);
        });
    }

    #[test]
    fn test_commit() {
        let e = Env::default();
        let contract = setup_pool(&e);

        e.as_contract(&contract, || {
            let mut ledger = PoolLedger::load(&e);
            ledger.debit_reserve(Asset::A, 2500).unwrap();
            ledger.credit_reserve(Asset::B, 1000).unwrap();
            ledger.lock_minimum_liquidity().unwrap();

            // staged only
            assert_eq!(PoolLedger::load(&e).reserves(), (10000, 40000));
            assert_eq!(PoolLedger::load(&e).total_shares(), 20000);

            ledger.commit();
            let reloaded = PoolLedger::load(&e);
            assert_eq!(reloaded.reserves(), (7500, 41000));
            assert_eq!(reloaded.total_shares(), 21000);
            assert_eq!(reloaded.tokens(), ledger.tokens());
        });
    }
}
