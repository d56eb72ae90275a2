//! Constant product pool arithmetic.
//!
//! Every function is pure over the reserves and supply it is given. Products are taken
//! in 256 bits, so only a result that does not fit into `u128` reports
//! `ArithmeticOverflow`. Rounding always favors the pool.

use crate::constants::MINIMUM_LIQUIDITY;
use crate::errors::LiquidityPoolError;
use soroban_sdk::{Env, U256};
use utils::u256_math::{mul_div_ceil, mul_div_floor, sqrt_of_product};

fn floor(e: &Env, x: u128, y: u128, denominator: u128) -> Result<u128, LiquidityPoolError> {
    mul_div_floor(e, x, y, denominator).ok_or(LiquidityPoolError::ArithmeticOverflow)
}

fn ceil(e: &Env, x: u128, y: u128, denominator: u128) -> Result<u128, LiquidityPoolError> {
    mul_div_ceil(e, x, y, denominator).ok_or(LiquidityPoolError::ArithmeticOverflow)
}

/// Amounts to actually take from a depositor offering `desired_a` and `desired_b`.
///
/// An empty pool accepts the offer unchanged, the first depositor sets the price.
/// Otherwise the offer is cut down on one side to the current reserve ratio.
pub fn get_deposit_amounts(
    e: &Env,
    desired_a: u128,
    desired_b: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> Result<(u128, u128), LiquidityPoolError> {
    if total_shares == 0 {
        return Ok((desired_a, desired_b));
    }
    if reserve_a == 0 || reserve_b == 0 {
        return Err(LiquidityPoolError::NoLiquidity);
    }

    let amount_b = floor(e, desired_a, reserve_b, reserve_a)?;
    if amount_b <= desired_b {
        Ok((desired_a, amount_b))
    } else {
        let amount_a = floor(e, desired_b, reserve_a, reserve_b)?;
        Ok((amount_a, desired_b))
    }
}

/// Shares minted for depositing `amount_a` and `amount_b`.
///
/// First deposit: `floor(sqrt(a * b)) - MINIMUM_LIQUIDITY`.
/// Later deposits: the smaller of the two proportional claims, each floored on its own.
pub fn get_mint_amount(
    e: &Env,
    amount_a: u128,
    amount_b: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> Result<u128, LiquidityPoolError> {
    if total_shares == 0 {
        let root = sqrt_of_product(e, amount_a, amount_b)
            .ok_or(LiquidityPoolError::ArithmeticOverflow)?;
        if root <= MINIMUM_LIQUIDITY {
            return Err(LiquidityPoolError::InsufficientInitialLiquidity);
        }
        return Ok(root - MINIMUM_LIQUIDITY);
    }
    if reserve_a == 0 || reserve_b == 0 {
        return Err(LiquidityPoolError::NoLiquidity);
    }

    let shares_a = floor(e, amount_a, total_shares, reserve_a)?;
    let shares_b = floor(e, amount_b, total_shares, reserve_b)?;
    Ok(shares_a.min(shares_b))
}

/// Reserve amounts released for burning `share_amount`, floored.
pub fn get_withdraw_amounts(
    e: &Env,
    share_amount: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> Result<(u128, u128), LiquidityPoolError> {
    if total_shares == 0 {
        return Err(LiquidityPoolError::EmptyPool);
    }
    if share_amount > total_shares {
        return Err(LiquidityPoolError::InsufficientShare);
    }

    let out_a = floor(e, share_amount, reserve_a, total_shares)?;
    let out_b = floor(e, share_amount, reserve_b, total_shares)?;
    Ok((out_a, out_b))
}

fn require_liquidity(
    amount: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<(), LiquidityPoolError> {
    if amount == 0 {
        return Err(LiquidityPoolError::ZeroAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(LiquidityPoolError::NoLiquidity);
    }
    Ok(())
}

/// Spot price quote ignoring price impact: `floor(in * reserve_out / reserve_in)`.
pub fn get_liquidity_amount_out(
    e: &Env,
    in_amount: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, LiquidityPoolError> {
    require_liquidity(in_amount, reserve_in, reserve_out)?;
    floor(e, in_amount, reserve_out, reserve_in)
}

/// Spot price quote ignoring price impact: `ceil(out * reserve_in / reserve_out)`.
pub fn get_liquidity_amount_in(
    e: &Env,
    out_amount: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, LiquidityPoolError> {
    require_liquidity(out_amount, reserve_in, reserve_out)?;
    ceil(e, out_amount, reserve_in, reserve_out)
}

/// Curve output for selling `in_amount`: `floor(in * reserve_out / (in + reserve_in))`.
pub fn get_amount_out(
    e: &Env,
    in_amount: u128,    // dx - exact tokens the trader sells
    reserve_in: u128,   // x
    reserve_out: u128,  // y
) -> Result<u128, LiquidityPoolError> {
    require_liquidity(in_amount, reserve_in, reserve_out)?;
    let denominator = in_amount
        .checked_add(reserve_in)
        .ok_or(LiquidityPoolError::ArithmeticOverflow)?;
    floor(e, in_amount, reserve_out, denominator)
}

/// Curve input needed to buy `out_amount`: `floor(reserve_in * out / (reserve_out - out))`.
///
/// This is the quote inverse of [`get_amount_out`]. Settling a trade needs the rounded up
/// figure from [`get_amount_in_strict_receive`].
pub fn get_amount_in(
    e: &Env,
    out_amount: u128,   // dy - exact tokens the trader wants to receive
    reserve_in: u128,   // x
    reserve_out: u128,  // y
) -> Result<u128, LiquidityPoolError> {
    require_liquidity(out_amount, reserve_in, reserve_out)?;
    if out_amount >= reserve_out {
        return Err(LiquidityPoolError::InsufficientLiquidity);
    }
    floor(e, reserve_in, out_amount, reserve_out - out_amount)
}

/// `ceil(reserve_in * out / (reserve_out - out))`, the smallest input that keeps the
/// product of reserves from decreasing.
pub fn get_amount_in_strict_receive(
    e: &Env,
    out_amount: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, LiquidityPoolError> {
    require_liquidity(out_amount, reserve_in, reserve_out)?;
    if out_amount >= reserve_out {
        return Err(LiquidityPoolError::InsufficientLiquidity);
    }
    ceil(e, reserve_in, out_amount, reserve_out - out_amount)
}

/// Fails unless `new_in * new_out >= old_in * old_out`.
pub fn check_invariant(
    e: &Env,
    old_reserves: (u128, u128),
    new_reserves: (u128, u128),
) -> Result<(), LiquidityPoolError> {
    let old_k = U256::from_u128(e, old_reserves.0).mul(&U256::from_u128(e, old_reserves.1));
    let new_k = U256::from_u128(e, new_reserves.0).mul(&U256::from_u128(e, new_reserves.1));
    if new_k < old_k {
        return Err(LiquidityPoolError::InvariantViolation);
    }
    Ok(())
}
