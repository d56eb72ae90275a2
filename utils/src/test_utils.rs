#![cfg(any(test, feature = "testutils"))]

pub fn assert_approx_eq_abs(a: u128, b: u128, delta: u128) {
    assert!(
        a >= b.saturating_sub(delta) && a <= b.saturating_add(delta),
        "assertion failed: `(left != right)` \
         (left: `{:?}`, right: `{:?}`, epsilon: `{:?}`)",
        a,
        b,
        delta
    );
}

// Integer square root computed without the host, for cross-checking contract math.
pub fn isqrt(value: u128) -> u128 {
    if value < 2 {
        return value;
    }
    let mut x = value;
    let mut y = x / 2 + x % 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(8), 2);
        assert_eq!(isqrt(9), 3);
        assert_eq!(isqrt(400_000_000), 20000);
        assert_eq!(isqrt(u128::MAX), u64::MAX as u128);
    }

    #[test]
    fn test_assert_approx_eq_abs() {
        assert_approx_eq_abs(10, 12, 2);
        assert_approx_eq_abs(0, 1, 1);
    }
}
