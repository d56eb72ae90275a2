use crate::errors::LiquidityPoolError;
use soroban_sdk::{Address, Env, Vec};

pub trait LiquidityPoolTrait {
    // Binds the pool to its asset pair. Can only be called once.
    fn initialize(e: Env, token_a: Address, token_b: Address) -> Result<(), LiquidityPoolError>;

    // Pool assets, A then B.
    fn get_tokens(e: Env) -> Vec<Address>;

    // Pool reserves, A then B.
    fn get_reserves(e: Env) -> Vec<u128>;

    // Outstanding pool shares, including the permanently locked minimum liquidity.
    fn get_total_supply(e: Env) -> u128;

    // Pool shares held by `holder`.
    fn get_share_of(e: Env, holder: Address) -> u128;

    // Amounts of A and B a deposit of the desired amounts would actually take.
    fn compute_liquidity_amount(
        e: Env,
        desired_a: u128,
        desired_b: u128,
    ) -> Result<(u128, u128), LiquidityPoolError>;

    // Shares a deposit of exactly `amount_a` and `amount_b` would mint.
    fn compute_liquidity_provide(
        e: Env,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<u128, LiquidityPoolError>;

    // Amounts of A and B burning `share_amount` would release.
    fn compute_liquidity_withdraw(
        e: Env,
        share_amount: u128,
    ) -> Result<(u128, u128), LiquidityPoolError>;

    // Spot ratio quotes, no price impact.
    fn get_liquidity_amount_out(
        e: Env,
        in_amount: u128,
        token_in: Address,
        token_out: Address,
    ) -> Result<u128, LiquidityPoolError>;

    fn get_liquidity_amount_in(
        e: Env,
        out_amount: u128,
        token_in: Address,
        token_out: Address,
    ) -> Result<u128, LiquidityPoolError>;

    // Constant product curve quotes.
    fn get_amount_out(
        e: Env,
        in_amount: u128,
        token_in: Address,
        token_out: Address,
    ) -> Result<u128, LiquidityPoolError>;

    fn get_amount_in(
        e: Env,
        out_amount: u128,
        token_in: Address,
        token_out: Address,
    ) -> Result<u128, LiquidityPoolError>;

    // Takes up to `amount_a` and `amount_b` from `user` at the current ratio and mints
    // pool shares to `recipient`. The pool must be approved to spend both amounts.
    // Returns the amount of shares minted.
    fn provide(
        e: Env,
        user: Address,
        amount_a: u128,
        amount_b: u128,
        recipient: Address,
    ) -> Result<u128, LiquidityPoolError>;

    // Burns `share_amount` of `user` shares and sends the released assets to `recipient`.
    // Returns the amounts of A and B sent.
    fn withdraw(
        e: Env,
        user: Address,
        share_amount: u128,
        recipient: Address,
    ) -> Result<(u128, u128), LiquidityPoolError>;

    // Sells exactly `in_amount` of `token_in` for `token_out`, paid to `recipient`.
    // Returns the amount of `token_out` sent.
    fn swap(
        e: Env,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        recipient: Address,
    ) -> Result<u128, LiquidityPoolError>;

    // Buys exactly `out_amount` of `token_out`, paying at most `in_max` of `token_in`.
    // Returns the amount of `token_in` taken.
    fn swap_strict_receive(
        e: Env,
        user: Address,
        token_in: Address,
        token_out: Address,
        out_amount: u128,
        in_max: u128,
        recipient: Address,
    ) -> Result<u128, LiquidityPoolError>;
}
