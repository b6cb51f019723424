//! Counting functions over `u64` with hard overflow caps.
//!
//! `20! = 2_432_902_008_176_640_000` is the largest factorial a `u64` holds;
//! `33!! = 6_332_659_870_762_850_625` is the double-factorial equivalent.
//! Inputs above the caps return [`Error::Overflow`](crate::Error::Overflow)
//! instead of wrapping silently.

use crate::error::{Error, Result};

/// Largest input accepted by [`factorial`], [`permutations`] and
/// [`combinations`].
pub const MAX_FACTORIAL_INPUT: u64 = 20;

/// Largest input accepted by [`double_factorial`].
pub const MAX_DOUBLE_FACTORIAL_INPUT: u64 = 33;

/// `n!`, the product of all positive integers up to `n`. `0! = 1`.
///
/// ```rust
/// use physica::math::combinatorics::factorial;
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: u64) -> Result<u64> {
    if n > MAX_FACTORIAL_INPUT {
        return Err(Error::Overflow {
            name: "n",
            value: n,
            limit: MAX_FACTORIAL_INPUT,
        });
    }
    Ok((2..=n).product())
}

/// `n!!`, the product of integers from `n` down to 1 (or 2) in steps of two.
/// `0!! = 1!! = 1`.
///
/// ```rust
/// use physica::math::combinatorics::double_factorial;
/// assert_eq!(double_factorial(6).unwrap(), 48);  // 6 · 4 · 2
/// assert_eq!(double_factorial(7).unwrap(), 105); // 7 · 5 · 3 · 1
/// ```
pub fn double_factorial(n: u64) -> Result<u64> {
    if n > MAX_DOUBLE_FACTORIAL_INPUT {
        return Err(Error::Overflow {
            name: "n",
            value: n,
            limit: MAX_DOUBLE_FACTORIAL_INPUT,
        });
    }
    let mut product: u64 = 1;
    let mut k = n;
    while k > 1 {
        product *= k;
        k -= 2;
    }
    Ok(product)
}

/// `P(n, k) = n! / (n - k)!`, ordered selections of `k` items from `n`.
///
/// Requires `k <= n <= 20`.
pub fn permutations(n: u64, k: u64) -> Result<u64> {
    if k > n {
        return Err(Error::OutOfRange {
            name: "k",
            value: k as f64,
            min: 0.0,
            max: n as f64,
        });
    }
    Ok(factorial(n)? / factorial(n - k)?)
}

/// `C(n, k) = n! / (k! (n - k)!)`, unordered selections of `k` items from
/// `n`.
///
/// Requires `k <= n <= 20`. Symmetric: `C(n, k) == C(n, n - k)`.
///
/// ```rust
/// use physica::math::combinatorics::combinations;
/// assert_eq!(combinations(5, 2).unwrap(), 10);
/// assert_eq!(combinations(20, 10).unwrap(), 184_756);
/// ```
pub fn combinations(n: u64, k: u64) -> Result<u64> {
    if k > n {
        return Err(Error::OutOfRange {
            name: "k",
            value: k as f64,
            min: 0.0,
            max: n as f64,
        });
    }
    Ok(factorial(n)? / (factorial(k)? * factorial(n - k)?))
}
