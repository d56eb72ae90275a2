use crate::errors::LiquidityPoolError;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{log, Address, Env};

pub(crate) fn to_token_amount(amount: u128) -> Result<i128, LiquidityPoolError> {
    i128::try_from(amount).map_err(|_| LiquidityPoolError::ArithmeticOverflow)
}

pub(crate) fn to_token_amounts(amounts: (u128, u128)) -> Result<(i128, i128), LiquidityPoolError> {
    Ok((to_token_amount(amounts.0)?, to_token_amount(amounts.1)?))
}

fn pool_balance(e: &Env, client: &SorobanTokenClient) -> Result<i128, LiquidityPoolError> {
    match client.try_balance(&e.current_contract_address()) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(LiquidityPoolError::TransferFailed),
    }
}

// Pulls `amount` of `token` from `from` using the allowance `from` granted to the pool.
// The pool balance must grow by exactly `amount`.
pub(crate) fn transfer_in(
    e: &Env,
    token: &Address,
    from: &Address,
    amount: u128,
) -> Result<(), LiquidityPoolError> {
    if amount == 0 {
        return Ok(());
    }
    let value = to_token_amount(amount)?;
    let client = SorobanTokenClient::new(e, token);
    let pool = e.current_contract_address();

    let balance_before = pool_balance(e, &client)?;
    if !matches!(client.try_transfer_from(&pool, from, &pool, &value), Ok(Ok(()))) {
        log!(e, "transfer_from rejected", token.clone(), amount);
        return Err(LiquidityPoolError::TransferFailed);
    }
    let balance_after = pool_balance(e, &client)?;

    if balance_after.checked_sub(balance_before) != Some(value) {
        log!(e, "transfer_from short", token.clone(), amount);
        return Err(LiquidityPoolError::TransferFailed);
    }
    Ok(())
}

// Sends `amount` of `token` from the pool to `to`.
// The pool balance must shrink by exactly `amount`.
pub(crate) fn transfer_out(
    e: &Env,
    token: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), LiquidityPoolError> {
    if amount == 0 {
        return Ok(());
    }
    let value = to_token_amount(amount)?;
    let client = SorobanTokenClient::new(e, token);
    let pool = e.current_contract_address();

    let balance_before = pool_balance(e, &client)?;
    if !matches!(client.try_transfer(&pool, to, &value), Ok(Ok(()))) {
        log!(e, "transfer rejected", token.clone(), amount);
        return Err(LiquidityPoolError::TransferFailed);
    }
    let balance_after = pool_balance(e, &client)?;

    if balance_before.checked_sub(balance_after) != Some(value) {
        log!(e, "transfer short", token.clone(), amount);
        return Err(LiquidityPoolError::TransferFailed);
    }
    Ok(())
}
