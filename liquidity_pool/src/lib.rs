#![no_std]

mod constants;
mod contract;
pub mod errors;
mod ledger;
pub mod pool;
mod pool_interface;
mod storage;
mod testutils;
mod token;

pub use constants::MINIMUM_LIQUIDITY;
pub use contract::{LiquidityPool, LiquidityPoolClient};
