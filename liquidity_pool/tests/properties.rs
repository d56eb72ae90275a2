use proptest::prelude::*;
use soroban_constant_product_pool_contract::errors::LiquidityPoolError;
use soroban_constant_product_pool_contract::pool::{
    check_invariant, get_amount_in, get_amount_in_strict_receive, get_amount_out,
    get_deposit_amounts, get_mint_amount, get_withdraw_amounts,
};
use soroban_constant_product_pool_contract::{
    LiquidityPool, LiquidityPoolClient, MINIMUM_LIQUIDITY,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};
use utils::test_utils::isqrt;

#[cfg(feature = "slow_tests")]
const CASES: u32 = 1024;
#[cfg(not(feature = "slow_tests"))]
const CASES: u32 = 64;

fn env() -> Env {
    let e = Env::default();
    e.cost_estimate().budget().reset_unlimited();
    e
}

// Reserves as left behind by a first deposit of (reserve_a, reserve_b).
fn seeded_pool() -> impl Strategy<Value = (u128, u128, u128)> {
    (1_001..1_000_000_000_000_u128, 1_001..1_000_000_000_000_u128)
        .prop_map(|(reserve_a, reserve_b)| (reserve_a, reserve_b, isqrt(reserve_a * reserve_b)))
        .prop_filter("supply above the locked minimum", |(_, _, total)| {
            *total > MINIMUM_LIQUIDITY
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(CASES))]

    #[test]
    fn first_mint_is_root_of_product_minus_locked(
        amount_a in 1..1_000_000_000_000_u128,
        amount_b in 1..1_000_000_000_000_u128,
    ) {
        let e = env();
        let root = isqrt(amount_a * amount_b);
        let minted = get_mint_amount(&e, amount_a, amount_b, 0, 0, 0);
        if root > MINIMUM_LIQUIDITY {
            prop_assert_eq!(minted, Ok(root - MINIMUM_LIQUIDITY));
        } else {
            prop_assert_eq!(minted, Err(LiquidityPoolError::InsufficientInitialLiquidity));
        }
    }

    #[test]
    fn deposit_never_exceeds_offer(
        (reserve_a, reserve_b, total) in seeded_pool(),
        desired_a in 1..1_000_000_000_000_u128,
        desired_b in 1..1_000_000_000_000_u128,
    ) {
        let e = env();
        let (amount_a, amount_b) =
            get_deposit_amounts(&e, desired_a, desired_b, reserve_a, reserve_b, total).unwrap();
        prop_assert!(amount_a <= desired_a && amount_b <= desired_b);
        // one side is always taken in full
        prop_assert!(amount_a == desired_a || amount_b == desired_b);
    }

    #[test]
    fn provide_then_withdraw_returns_at_most_deposit(
        (reserve_a, reserve_b, total) in seeded_pool(),
        desired_a in 1..1_000_000_000_000_u128,
        desired_b in 1..1_000_000_000_000_u128,
    ) {
        let e = env();
        let (amount_a, amount_b) =
            get_deposit_amounts(&e, desired_a, desired_b, reserve_a, reserve_b, total).unwrap();
        let minted = get_mint_amount(&e, amount_a, amount_b, reserve_a, reserve_b, total).unwrap();
        prop_assume!(minted > 0);

        let (out_a, out_b) = get_withdraw_amounts(
            &e,
            minted,
            reserve_a + amount_a,
            reserve_b + amount_b,
            total + minted,
        )
        .unwrap();
        prop_assert!(out_a <= amount_a);
        prop_assert!(out_b <= amount_b);
    }

    #[test]
    fn swap_keeps_product(
        reserve_in in 1..1_000_000_000_000_000_u128,
        reserve_out in 1..1_000_000_000_000_000_u128,
        in_amount in 1..1_000_000_000_000_000_u128,
    ) {
        let e = env();
        let out_amount = get_amount_out(&e, in_amount, reserve_in, reserve_out).unwrap();
        prop_assert!(out_amount < reserve_out);
        prop_assert!(check_invariant(
            &e,
            (reserve_in, reserve_out),
            (reserve_in + in_amount, reserve_out - out_amount),
        )
        .is_ok());
    }

    #[test]
    fn quote_round_trip_never_gains(
        reserve_in in 1..1_000_000_000_000_000_u128,
        reserve_out in 1..1_000_000_000_000_000_u128,
        in_amount in 1..1_000_000_000_000_000_u128,
    ) {
        let e = env();
        let out_amount = get_amount_out(&e, in_amount, reserve_in, reserve_out).unwrap();
        prop_assume!(out_amount > 0);
        let back = get_amount_in(&e, out_amount, reserve_in, reserve_out).unwrap();
        prop_assert!(back <= in_amount);
    }

    #[test]
    fn strict_receive_keeps_product(
        reserve_in in 1..1_000_000_000_000_000_u128,
        reserve_out in 2..1_000_000_000_000_000_u128,
        share in 1..1_000_u128,
    ) {
        let e = env();
        let out_amount = (reserve_out * share / 1_000).clamp(1, reserve_out - 1);
        let in_amount =
            get_amount_in_strict_receive(&e, out_amount, reserve_in, reserve_out).unwrap();
        prop_assert!(in_amount >= get_amount_in(&e, out_amount, reserve_in, reserve_out).unwrap());
        prop_assert!(check_invariant(
            &e,
            (reserve_in, reserve_out),
            (reserve_in + in_amount, reserve_out - out_amount),
        )
        .is_ok());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(CASES / 8))]

    #[test]
    fn contract_accounting_matches_balances(
        amount_a in 1_001..1_000_000_000_i128,
        amount_b in 1_001..1_000_000_000_i128,
        swap_in in 1..1_000_000_000_i128,
    ) {
        let e = env();
        e.mock_all_auths();

        let user = Address::generate(&e);
        let admin = Address::generate(&e);
        let token_a = TokenClient::new(&e, &e.register_stellar_asset_contract_v2(admin.clone()).address());
        let token_b = TokenClient::new(&e, &e.register_stellar_asset_contract_v2(admin).address());
        let liq_pool = LiquidityPoolClient::new(&e, &e.register(LiquidityPool, ()));
        liq_pool.initialize(&token_a.address, &token_b.address);

        for token in [&token_a, &token_b] {
            StellarAssetClient::new(&e, &token.address).mint(&user, &i128::MAX);
            token.approve(&user, &liq_pool.address, &i128::MAX, &99999);
        }

        let root = isqrt((amount_a * amount_b) as u128);
        prop_assume!(root > MINIMUM_LIQUIDITY);
        let minted = liq_pool.provide(&user, &(amount_a as u128), &(amount_b as u128), &user);
        prop_assert_eq!(minted, root - MINIMUM_LIQUIDITY);
        prop_assert_eq!(liq_pool.get_total_supply(), root);

        if liq_pool.get_amount_out(&(swap_in as u128), &token_a.address, &token_b.address) > 0 {
            liq_pool.swap(&user, &token_a.address, &token_b.address, &(swap_in as u128), &user);
        }

        let reserves = liq_pool.get_reserves();
        prop_assert_eq!(reserves.get_unchecked(0), token_a.balance(&liq_pool.address) as u128);
        prop_assert_eq!(reserves.get_unchecked(1), token_b.balance(&liq_pool.address) as u128);
    }
}
