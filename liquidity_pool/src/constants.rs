// Shares withheld from the first depositor and locked in total supply forever.
pub const MINIMUM_LIQUIDITY: u128 = 1000;
