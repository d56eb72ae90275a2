#![no_std]

use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

// Events emitted by the constant product pool on every state change.
// Amounts are published as i128 to match token contract conventions. Callers convert
// from u128 and fail on values above i128::MAX.
pub trait LiquidityPoolEvents {
    fn deposit_liquidity(
        &self,
        tokens: (Address, Address),
        recipient: Address,
        amounts: (i128, i128),
        share_amount: i128,
    );

    fn withdraw_liquidity(
        &self,
        tokens: (Address, Address),
        recipient: Address,
        amounts: (i128, i128),
        share_amount: i128,
    );

    fn trade(
        &self,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: i128,
        out_amount: i128,
        fee_amount: i128,
    );

    fn update_reserves(&self, reserves: (i128, i128));
}

impl LiquidityPoolEvents for Events {
    fn deposit_liquidity(
        &self,
        tokens: (Address, Address),
        recipient: Address,
        amounts: (i128, i128),
        share_amount: i128,
    ) {
        // topics
        // [
        //   "deposit_liquidity": Symbol, // event identifier
        //   assetA: Address,             // asset deposited to the pool
        //   assetB: Address,             // asset deposited to the pool
        //   recipient: Address           // account credited with the minted shares
        // ]
        //
        // body
        // [
        //   share_amount: i128, // pool shares minted to the recipient
        //   amountA: i128,      // assetA taken from the depositor
        //   amountB: i128       // assetB taken from the depositor
        // ]
        let e = self.env();
        e.events().publish(
            (
                Symbol::new(e, "deposit_liquidity"),
                tokens.0,
                tokens.1,
                recipient,
            ),
            (share_amount, amounts.0, amounts.1),
        );
    }

    fn withdraw_liquidity(
        &self,
        tokens: (Address, Address),
        recipient: Address,
        amounts: (i128, i128),
        share_amount: i128,
    ) {
        // topics
        // [
        //   "withdraw_liquidity": Symbol, // event identifier
        //   assetA: Address,              // asset withdrawn from the pool
        //   assetB: Address,              // asset withdrawn from the pool
        //   recipient: Address            // account receiving the released assets
        // ]
        //
        // body
        // [
        //   share_amount: i128, // pool shares burned
        //   amountA: i128,      // assetA released
        //   amountB: i128       // assetB released
        // ]
        let e = self.env();
        e.events().publish(
            (
                Symbol::new(e, "withdraw_liquidity"),
                tokens.0,
                tokens.1,
                recipient,
            ),
            (share_amount, amounts.0, amounts.1),
        );
    }

    fn trade(
        &self,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: i128,
        out_amount: i128,
        fee_amount: i128,
    ) {
        // topics
        // [
        //   "trade": Symbol,       // event identifier
        //   sold_asset: Address,   // asset sent to the pool
        //   bought_asset: Address, // asset received from the pool
        //   trader: Address        // address of account/contract that initiated the trade
        // ]
        // body
        // [
        //   sold_amount: i128,   // amount of tokens sent to the pool
        //   bought_amount: i128, // amount of tokens received from the pool
        //   fee: i128            // fee charged by the pool
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "trade"), token_in, token_out, user),
            (in_amount, out_amount, fee_amount),
        );
    }

    fn update_reserves(&self, reserves: (i128, i128)) {
        // topics
        // [
        //   "update_reserves": Symbol, // event identifier
        // ]
        //
        // body
        // [
        //   reserveA: i128, // updated reserve for assetA
        //   reserveB: i128  // updated reserve for assetB
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "update_reserves"),),
            (reserves.0, reserves.1),
        );
    }
}
