//! Fixed conversion rates.
//!
//! Converting `amount` of `from` into `to` pays
//! `amount * price_of(from) / price_of(to)`, truncated toward zero. The
//! fraction lost to truncation stays in the engine's reserves, so every
//! conversion is rounded in the engine's favour.

use crate::error::Error;
use crate::types::{Asset, RateTable};

/// Native units per native unit.
pub const NATIVE_PRICE: i128 = 1;

impl RateTable {
    /// Build a table, rejecting non-positive prices.
    pub fn new(price_a: i128, price_b: i128) -> Result<Self, Error> {
        if price_a <= 0 || price_b <= 0 {
            return Err(Error::InvalidPrice);
        }
        Ok(Self { price_a, price_b })
    }

    pub fn price_of(&self, asset: Asset) -> i128 {
        match asset {
            Asset::Native => NATIVE_PRICE,
            Asset::TokenA => self.price_a,
            Asset::TokenB => self.price_b,
        }
    }

    /// `(numerator, denominator)` applied to an input of `from` to get `to`.
    pub fn cross_rate(&self, from: Asset, to: Asset) -> (i128, i128) {
        (self.price_of(from), self.price_of(to))
    }

    pub fn convert(&self, amount_in: i128, from: Asset, to: Asset) -> Result<i128, Error> {
        let (numerator, denominator) = self.cross_rate(from, to);
        convert(amount_in, numerator, denominator)
    }

    pub fn required_input(&self, amount_out: i128, from: Asset, to: Asset) -> Result<i128, Error> {
        let (numerator, denominator) = self.cross_rate(from, to);
        required_input(amount_out, numerator, denominator)
    }
}

/// `amount_in * numerator / denominator`, truncated.
pub fn convert(amount_in: i128, numerator: i128, denominator: i128) -> Result<i128, Error> {
    if amount_in < 0 {
        return Err(Error::InvalidAmount);
    }
    let scaled = amount_in.checked_mul(numerator).ok_or(Error::Overflow)?;
    scaled.checked_div(denominator).ok_or(Error::InvalidPrice)
}

/// Smallest input whose converted output is exactly `amount_out`.
///
/// Some outputs cannot be hit exactly, e.g. one native unit when a token
/// costs three; those fail with `AmountMismatch`.
pub fn required_input(amount_out: i128, numerator: i128, denominator: i128) -> Result<i128, Error> {
    if amount_out <= 0 {
        return Err(Error::InvalidAmount);
    }
    if numerator <= 0 || denominator <= 0 {
        return Err(Error::InvalidPrice);
    }
    // ceil(amount_out * denominator / numerator)
    let scaled = amount_out.checked_mul(denominator).ok_or(Error::Overflow)?;
    let amount_in = scaled
        .checked_add(numerator - 1)
        .ok_or(Error::Overflow)?
        / numerator;
    if convert(amount_in, numerator, denominator)? != amount_out {
        return Err(Error::AmountMismatch);
    }
    Ok(amount_in)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> RateTable {
        RateTable::new(3, 2).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_prices() {
        assert_eq!(RateTable::new(0, 2), Err(Error::InvalidPrice));
        assert_eq!(RateTable::new(3, -1), Err(Error::InvalidPrice));
    }

    #[test]
    fn test_price_of_native_is_one() {
        let rates = table();
        assert_eq!(rates.price_of(Asset::Native), 1);
        assert_eq!(rates.price_of(Asset::TokenA), 3);
        assert_eq!(rates.price_of(Asset::TokenB), 2);
    }

    #[test]
    fn test_convert_every_direction() {
        let rates = table();
        assert_eq!(rates.convert(15, Asset::Native, Asset::TokenA), Ok(5));
        assert_eq!(rates.convert(10, Asset::Native, Asset::TokenB), Ok(5));
        assert_eq!(rates.convert(5, Asset::TokenA, Asset::Native), Ok(15));
        assert_eq!(rates.convert(5, Asset::TokenB, Asset::Native), Ok(10));
        assert_eq!(rates.convert(30, Asset::TokenA, Asset::TokenB), Ok(45));
        // Same formula in reverse: 30 * 2 / 3
        assert_eq!(rates.convert(30, Asset::TokenB, Asset::TokenA), Ok(20));
    }

    #[test]
    fn test_convert_truncates_toward_zero() {
        let rates = table();
        assert_eq!(rates.convert(17, Asset::Native, Asset::TokenA), Ok(5));
        assert_eq!(rates.convert(2, Asset::Native, Asset::TokenA), Ok(0));
        assert_eq!(rates.convert(1, Asset::TokenA, Asset::TokenB), Ok(1));
    }

    #[test]
    fn test_convert_overflow() {
        let rates = table();
        assert_eq!(
            rates.convert(i128::MAX, Asset::TokenA, Asset::Native),
            Err(Error::Overflow)
        );
    }

    #[test]
    fn test_required_input() {
        let rates = table();
        assert_eq!(rates.required_input(5, Asset::Native, Asset::TokenA), Ok(15));
        assert_eq!(rates.required_input(45, Asset::TokenA, Asset::TokenB), Ok(30));
        assert_eq!(rates.required_input(1, Asset::TokenB, Asset::TokenA), Ok(2));
        // Multiples of 3 only
        assert_eq!(
            rates.required_input(4, Asset::TokenA, Asset::Native),
            Err(Error::AmountMismatch)
        );
        assert_eq!(
            rates.required_input(0, Asset::TokenA, Asset::Native),
            Err(Error::InvalidAmount)
        );
    }

    proptest! {
        #[test]
        fn prop_native_round_trip_never_gains(
            amount in 0i128..1_000_000_000_000,
            price in 1i128..1_000_000,
        ) {
            let rates = RateTable::new(price, 1).unwrap();
            let tokens = rates.convert(amount, Asset::Native, Asset::TokenA).unwrap();
            let back = rates.convert(tokens, Asset::TokenA, Asset::Native).unwrap();
            prop_assert!(back <= amount);
            prop_assert_eq!(back == amount, amount % price == 0);
        }

        #[test]
        fn prop_token_round_trip_never_gains(
            amount in 0i128..1_000_000_000_000,
            price_a in 1i128..1_000_000,
            price_b in 1i128..1_000_000,
        ) {
            let rates = RateTable::new(price_a, price_b).unwrap();
            let b = rates.convert(amount, Asset::TokenA, Asset::TokenB).unwrap();
            let a = rates.convert(b, Asset::TokenB, Asset::TokenA).unwrap();
            prop_assert!(a <= amount);
        }

        #[test]
        fn prop_required_input_is_minimal(
            amount_out in 1i128..1_000_000_000,
            numerator in 1i128..1_000,
            denominator in 1i128..1_000,
        ) {
            if let Ok(amount_in) = required_input(amount_out, numerator, denominator) {
                prop_assert_eq!(convert(amount_in, numerator, denominator).unwrap(), amount_out);
                prop_assert!(convert(amount_in - 1, numerator, denominator).unwrap() < amount_out);
            }
        }
    }
}
