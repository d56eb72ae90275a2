use soroban_sdk::contracterror;
use token_share::ShareError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolError {
    AlreadyInitialized = 201,
    InvariantViolation = 204,

    EmptyPool = 2010,
    ZeroAmount = 2018,
    InsufficientLiquidity = 2019,
    InMaxNotSatisfied = 2020,
    NoLiquidity = 2021,
    InsufficientShare = 2022,
    InsufficientReserve = 2023,
    InsufficientInitialLiquidity = 2024,
    TransferFailed = 2025,
    ArithmeticOverflow = 2026,
    InvalidToken = 2027,
}

impl From<ShareError> for LiquidityPoolError {
    fn from(error: ShareError) -> Self {
        match error {
            ShareError::InsufficientShare => LiquidityPoolError::InsufficientShare,
            ShareError::Overflow => LiquidityPoolError::ArithmeticOverflow,
        }
    }
}
