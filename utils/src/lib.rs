#![no_std]

pub mod bump;
pub mod constant;
pub mod storage;
pub mod storage_errors;
pub mod test_utils;
pub mod u256_math;
