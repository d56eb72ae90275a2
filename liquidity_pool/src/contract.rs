use crate::errors::LiquidityPoolError;
use crate::ledger::{Asset, PoolLedger};
use crate::pool;
use crate::pool_interface::LiquidityPoolTrait;
use crate::storage::{has_token_a, set_reserve_a, set_reserve_b, set_token_a, set_token_b};
use crate::token::{to_token_amount, to_token_amounts, transfer_in, transfer_out};
use liquidity_pool_events::Events as PoolEvents;
use liquidity_pool_events::LiquidityPoolEvents;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};
use token_share::{get_total_shares, get_user_balance_shares};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Two asset constant product AMM without swap fee"
);

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPoolTrait for LiquidityPool {
    // Initializes the liquidity pool.
    //
    // # Arguments
    //
    // * `token_a` - The address of the first asset contract.
    // * `token_b` - The address of the second asset contract.
    fn initialize(e: Env, token_a: Address, token_b: Address) -> Result<(), LiquidityPoolError> {
        if has_token_a(&e) {
            return Err(LiquidityPoolError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(LiquidityPoolError::InvalidToken);
        }

        set_token_a(&e, &token_a);
        set_token_b(&e, &token_b);
        set_reserve_a(&e, &0);
        set_reserve_b(&e, &0);
        Ok(())
    }

    fn get_tokens(e: Env) -> Vec<Address> {
        let (token_a, token_b) = PoolLedger::load(&e).tokens();
        Vec::from_array(&e, [token_a, token_b])
    }

    fn get_reserves(e: Env) -> Vec<u128> {
        let (reserve_a, reserve_b) = PoolLedger::load(&e).reserves();
        Vec::from_array(&e, [reserve_a, reserve_b])
    }

    fn get_total_supply(e: Env) -> u128 {
        get_total_shares(&e)
    }

    fn get_share_of(e: Env, holder: Address) -> u128 {
        get_user_balance_shares(&e, &holder)
    }

    // Calculates how much of each asset a deposit would take.
    //
    // # Arguments
    //
    // * `desired_a` - Offered amount of asset A.
    // * `desired_b` - Offered amount of asset B.
    //
    // # Returns
    //
    // The amounts of A and B matching the current reserve ratio.
    fn compute_liquidity_amount(
        e: Env,
        desired_a: u128,
        desired_b: u128,
    ) -> Result<(u128, u128), LiquidityPoolError> {
        let ledger = PoolLedger::load(&e);
        let (reserve_a, reserve_b) = ledger.reserves();
        pool::get_deposit_amounts(
            &e,
            desired_a,
            desired_b,
            reserve_a,
            reserve_b,
            ledger.total_shares(),
        )
    }

    fn compute_liquidity_provide(
        e: Env,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<u128, LiquidityPoolError> {
        let ledger = PoolLedger::load(&e);
        let (reserve_a, reserve_b) = ledger.reserves();
        pool::get_mint_amount(
            &e,
            amount_a,
            amount_b,
            reserve_a,
            reserve_b,
            ledger.total_shares(),
        )
    }

    fn compute_liquidity_withdraw(
        e: Env,
        share_amount: u128,
    ) -> Result<(u128, u128), LiquidityPoolError> {
        let ledger = PoolLedger::load(&e);
        let (reserve_a, reserve_b) = ledger.reserves();
        pool::get_withdraw_amounts(
            &e,
            share_amount,
            reserve_a,
            reserve_b,
            ledger.total_shares(),
        )
    }

    fn get_liquidity_amount_out(
        e: Env,
        in_amount: u128,
        token_in: Address,
        token_out: Address,
    ) -> Result<u128, LiquidityPoolError> {
        let ledger = PoolLedger::load(&e);
        let (asset_in, asset_out) = ledger.resolve_pair(&token_in, &token_out)?;
        pool::get_liquidity_amount_out(
            &e,
            in_amount,
            ledger.reserve(asset_in),
            ledger.reserve(asset_out),
        )
    }

    fn get_liquidity_amount_in(
        e: Env,
        out_amount: u128,
        token_in: Address,
        token_out: Address,
    ) -> Result<u128, LiquidityPoolError> {
        let ledger = PoolLedger::load(&e);
        let (asset_in, asset_out) = ledger.resolve_pair(&token_in, &token_out)?;
        pool::get_liquidity_amount_in(
            &e,
            out_amount,
            ledger.reserve(asset_in),
            ledger.reserve(asset_out),
        )
    }

    fn get_amount_out(
        e: Env,
        in_amount: u128,
        token_in: Address,
        token_out: Address,
    ) -> Result<u128, LiquidityPoolError> {
        let ledger = PoolLedger::load(&e);
        let (asset_in, asset_out) = ledger.resolve_pair(&token_in, &token_out)?;
        pool::get_amount_out(
            &e,
            in_amount,
            ledger.reserve(asset_in),
            ledger.reserve(asset_out),
        )
    }

    fn get_amount_in(
        e: Env,
        out_amount: u128,
        token_in: Address,
        token_out: Address,
    ) -> Result<u128, LiquidityPoolError> {
        let ledger = PoolLedger::load(&e);
        let (asset_in, asset_out) = ledger.resolve_pair(&token_in, &token_out)?;
        pool::get_amount_in(
            &e,
            out_amount,
            ledger.reserve(asset_in),
            ledger.reserve(asset_out),
        )
    }

    // Deposits tokens into the pool.
    //
    // # Arguments
    //
    // * `user` - The address of the depositor. Must have approved the pool for both amounts.
    // * `amount_a` - Offered amount of asset A.
    // * `amount_b` - Offered amount of asset B.
    // * `recipient` - The address credited with the minted shares.
    //
    // # Returns
    //
    // The amount of pool shares minted.
    fn provide(
        e: Env,
        user: Address,
        amount_a: u128,
        amount_b: u128,
        recipient: Address,
    ) -> Result<u128, LiquidityPoolError> {
        user.require_auth();

        if amount_a == 0 || amount_b == 0 {
            return Err(LiquidityPoolError::ZeroAmount);
        }

        let mut ledger = PoolLedger::load(&e);
        let (reserve_a, reserve_b) = ledger.reserves();
        let total_shares = ledger.total_shares();

        let (amount_a, amount_b) =
            pool::get_deposit_amounts(&e, amount_a, amount_b, reserve_a, reserve_b, total_shares)?;
        let shares_to_mint =
            pool::get_mint_amount(&e, amount_a, amount_b, reserve_a, reserve_b, total_shares)?;
        if shares_to_mint == 0 {
            return Err(LiquidityPoolError::InsufficientLiquidity);
        }

        transfer_in(&e, &ledger.token(Asset::A), &user, amount_a)?;
        transfer_in(&e, &ledger.token(Asset::B), &user, amount_b)?;

        ledger.credit_reserve(Asset::A, amount_a)?;
        ledger.credit_reserve(Asset::B, amount_b)?;
        if total_shares == 0 {
            ledger.lock_minimum_liquidity()?;
        }
        ledger.mint_share(&recipient, shares_to_mint)?;
        ledger.commit();

        let events = PoolEvents::new(&e);
        events.update_reserves(to_token_amounts(ledger.reserves())?);
        events.deposit_liquidity(
            ledger.tokens(),
            recipient,
            to_token_amounts((amount_a, amount_b))?,
            to_token_amount(shares_to_mint)?,
        );

        Ok(shares_to_mint)
    }

    // Withdraws tokens from the pool.
    //
    // # Arguments
    //
    // * `user` - The address of the share holder.
    // * `share_amount` - The amount of pool shares to burn.
    // * `recipient` - The address receiving the released assets.
    //
    // # Returns
    //
    // The amounts of A and B sent to `recipient`.
    fn withdraw(
        e: Env,
        user: Address,
        share_amount: u128,
        recipient: Address,
    ) -> Result<(u128, u128), LiquidityPoolError> {
        user.require_auth();

        if share_amount == 0 {
            return Err(LiquidityPoolError::ZeroAmount);
        }

        let mut ledger = PoolLedger::load(&e);
        let (reserve_a, reserve_b) = ledger.reserves();
        let total_shares = ledger.total_shares();

        ledger.burn_share(&user, share_amount)?;
        let (out_a, out_b) =
            pool::get_withdraw_amounts(&e, share_amount, reserve_a, reserve_b, total_shares)?;
        if out_a == 0 && out_b == 0 {
            return Err(LiquidityPoolError::InsufficientLiquidity);
        }

        ledger.debit_reserve(Asset::A, out_a)?;
        ledger.debit_reserve(Asset::B, out_b)?;
        ledger.commit();

        transfer_out(&e, &ledger.token(Asset::A), &recipient, out_a)?;
        transfer_out(&e, &ledger.token(Asset::B), &recipient, out_b)?;

        let events = PoolEvents::new(&e);
        events.update_reserves(to_token_amounts(ledger.reserves())?);
        events.withdraw_liquidity(
            ledger.tokens(),
            recipient,
            to_token_amounts((out_a, out_b))?,
            to_token_amount(share_amount)?,
        );

        Ok((out_a, out_b))
    }

    // Swaps tokens in the pool.
    //
    // # Arguments
    //
    // * `user` - The address of the trader. Must have approved the pool for `in_amount`.
    // * `token_in` - The asset sold to the pool.
    // * `token_out` - The asset bought from the pool.
    // * `in_amount` - The amount of `token_in` to sell.
    // * `recipient` - The address receiving the bought asset.
    //
    // # Returns
    //
    // The amount of `token_out` sent to `recipient`.
    fn swap(
        e: Env,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        recipient: Address,
    ) -> Result<u128, LiquidityPoolError> {
        user.require_auth();

        let mut ledger = PoolLedger::load(&e);
        let (asset_in, asset_out) = ledger.resolve_pair(&token_in, &token_out)?;
        let reserve_in = ledger.reserve(asset_in);
        let reserve_out = ledger.reserve(asset_out);

        let out_amount = pool::get_amount_out(&e, in_amount, reserve_in, reserve_out)?;
        if out_amount == 0 {
            return Err(LiquidityPoolError::ZeroAmount);
        }

        transfer_in(&e, &token_in, &user, in_amount)?;

        ledger.credit_reserve(asset_in, in_amount)?;
        ledger.debit_reserve(asset_out, out_amount)?;
        pool::check_invariant(
            &e,
            (reserve_in, reserve_out),
            (ledger.reserve(asset_in), ledger.reserve(asset_out)),
        )?;
        ledger.commit();

        transfer_out(&e, &token_out, &recipient, out_amount)?;

        let events = PoolEvents::new(&e);
        events.update_reserves(to_token_amounts(ledger.reserves())?);
        events.trade(
            user,
            token_in,
            token_out,
            to_token_amount(in_amount)?,
            to_token_amount(out_amount)?,
            0,
        );

        Ok(out_amount)
    }

    // Swaps tokens in the pool with strict amount to receive.
    //
    // # Arguments
    //
    // * `user` - The address of the trader. Must have approved the pool for `in_max`.
    // * `token_in` - The asset sold to the pool.
    // * `token_out` - The asset bought from the pool.
    // * `out_amount` - The exact amount of `token_out` to buy.
    // * `in_max` - The maximum amount of `token_in` to pay.
    // * `recipient` - The address receiving the bought asset.
    //
    // # Returns
    //
    // The amount of `token_in` taken from `user`.
    fn swap_strict_receive(
        e: Env,
        user: Address,
        token_in: Address,
        token_out: Address,
        out_amount: u128,
        in_max: u128,
        recipient: Address,
    ) -> Result<u128, LiquidityPoolError> {
        user.require_auth();

        let mut ledger = PoolLedger::load(&e);
        let (asset_in, asset_out) = ledger.resolve_pair(&token_in, &token_out)?;
        let reserve_in = ledger.reserve(asset_in);
        let reserve_out = ledger.reserve(asset_out);

        let in_amount =
            pool::get_amount_in_strict_receive(&e, out_amount, reserve_in, reserve_out)?;
        if in_amount > in_max {
            return Err(LiquidityPoolError::InMaxNotSatisfied);
        }

        transfer_in(&e, &token_in, &user, in_amount)?;

        ledger.credit_reserve(asset_in, in_amount)?;
        ledger.debit_reserve(asset_out, out_amount)?;
        pool::check_invariant(
            &e,
            (reserve_in, reserve_out),
            (ledger.reserve(asset_in), ledger.reserve(asset_out)),
        )?;
        ledger.commit();

        transfer_out(&e, &token_out, &recipient, out_amount)?;

        let events = PoolEvents::new(&e);
        events.update_reserves(to_token_amounts(ledger.reserves())?);
        events.trade(
            user,
            token_in,
            token_out,
            to_token_amount(in_amount)?,
            to_token_amount(out_amount)?,
            0,
        );

        Ok(in_amount)
    }
}
