use soroban_sdk::{Env, U256};

pub trait ExtraMath {
    fn sqrt(&self) -> Self;
}

impl ExtraMath for U256 {
    // floor of the square root, babylonian method
    fn sqrt(&self) -> U256 {
        // https://github.com/paritytech/parity-common/issues/252
        let e = self.env();
        let two = U256::from_u32(e, 2);

        let mut z = (self.add(&U256::from_u32(e, 1))).div(&two);

        let mut y = self.clone();

        while z < y {
            y = z.clone();
            z = (self.div(&z).add(&z)).div(&two);
        }

        y
    }
}

// Full precision x * y / denominator, rounded down.
// Returns None if the denominator is zero or the result does not fit into u128.
pub fn mul_div_floor(e: &Env, x: u128, y: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    U256::from_u128(e, x)
        .mul(&U256::from_u128(e, y))
        .div(&U256::from_u128(e, denominator))
        .to_u128()
}

// Same as `mul_div_floor`, rounded up.
pub fn mul_div_ceil(e: &Env, x: u128, y: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let denominator = U256::from_u128(e, denominator);
    U256::from_u128(e, x)
        .mul(&U256::from_u128(e, y))
        .add(&denominator.sub(&U256::from_u32(e, 1)))
        .div(&denominator)
        .to_u128()
}

// floor(sqrt(x * y)). The root of a product of two u128 values always fits into u128.
pub fn sqrt_of_product(e: &Env, x: u128, y: u128) -> Option<u128> {
    U256::from_u128(e, x)
        .mul(&U256::from_u128(e, y))
        .sqrt()
        .to_u128()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt() {
        let e = Env::default();
        for (value, expected) in [(0_u32, 0_u32), (1, 1), (3, 1), (4, 2), (15, 3), (16, 4)] {
            assert_eq!(
                U256::from_u32(&e, value).sqrt(),
                U256::from_u32(&e, expected)
            );
        }
        assert_eq!(sqrt_of_product(&e, 10000, 40000), Some(20000));
        assert_eq!(sqrt_of_product(&e, 1001, 1001), Some(1001));
        assert_eq!(sqrt_of_product(&e, 2, 3), Some(2));
        assert_eq!(
            sqrt_of_product(&e, u128::MAX, u128::MAX),
            Some(u128::MAX)
        );
    }

    #[test]
    fn test_mul_div_rounding() {
        let e = Env::default();
        assert_eq!(mul_div_floor(&e, 10, 10, 3), Some(33));
        assert_eq!(mul_div_ceil(&e, 10, 10, 3), Some(34));
        assert_eq!(mul_div_floor(&e, 3000, 10000, 30000), Some(1000));
        assert_eq!(mul_div_ceil(&e, 3000, 10000, 30000), Some(1000));
        assert_eq!(mul_div_floor(&e, 1, 1, 0), None);
        assert_eq!(mul_div_ceil(&e, 1, 1, 0), None);
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        let e = Env::default();
        // the product overflows u128, the quotient does not
        assert_eq!(
            mul_div_floor(&e, u128::MAX, u128::MAX, u128::MAX),
            Some(u128::MAX)
        );
        assert_eq!(mul_div_floor(&e, u128::MAX, 2, 1), None);
        assert_eq!(mul_div_ceil(&e, u128::MAX, 2, 1), None);
    }
}
