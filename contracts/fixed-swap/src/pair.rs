//! Pair identifiers.
//!
//! A pair identifier is the keccak-256 hash of the ASCII label
//! `Swap(<From>, <To>)`, e.g. `Swap(Native, TokenA)`. Callers and the
//! contract must hash the exact same bytes, so labels are never trimmed or
//! normalised.

use soroban_sdk::{Bytes, BytesN, Env};

use crate::error::Error;
use crate::types::Asset;

/// Every supported conversion direction as `(from, to)`.
pub const PAIRS: [(Asset, Asset); 6] = [
    (Asset::Native, Asset::TokenA),
    (Asset::Native, Asset::TokenB),
    (Asset::TokenA, Asset::Native),
    (Asset::TokenB, Asset::Native),
    (Asset::TokenA, Asset::TokenB),
    (Asset::TokenB, Asset::TokenA),
];

/// Build the label a pair identifier is hashed from.
pub fn label(env: &Env, from: Asset, to: Asset) -> Bytes {
    let mut label = Bytes::from_slice(env, b"Swap(");
    label.extend_from_slice(from.label().as_bytes());
    label.extend_from_slice(b", ");
    label.extend_from_slice(to.label().as_bytes());
    label.extend_from_slice(b")");
    label
}

/// Derive the identifier for a direction.
///
/// # Errors
/// `UnsupportedPair` when `from` and `to` are the same asset.
pub fn resolve(env: &Env, from: Asset, to: Asset) -> Result<BytesN<32>, Error> {
    if !PAIRS.contains(&(from, to)) {
        return Err(Error::UnsupportedPair);
    }
    Ok(env.crypto().keccak256(&label(env, from, to)).to_bytes())
}

/// Map an identifier back to its `(from, to)` direction.
///
/// # Errors
/// `UnsupportedPair` for any identifier outside the closed set.
pub fn direction_of(env: &Env, pair_id: &BytesN<32>) -> Result<(Asset, Asset), Error> {
    for (from, to) in PAIRS {
        if resolve(env, from, to)? == *pair_id {
            return Ok((from, to));
        }
    }
    Err(Error::UnsupportedPair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_bytes() {
        let env = Env::default();
        assert_eq!(
            label(&env, Asset::Native, Asset::TokenA),
            Bytes::from_slice(&env, b"Swap(Native, TokenA)")
        );
        assert_eq!(
            label(&env, Asset::TokenB, Asset::TokenA),
            Bytes::from_slice(&env, b"Swap(TokenB, TokenA)")
        );
    }

    #[test]
    fn test_resolve_hashes_exact_label() {
        let env = Env::default();
        let expected = env
            .crypto()
            .keccak256(&Bytes::from_slice(&env, b"Swap(TokenA, Native)"))
            .to_bytes();
        assert_eq!(resolve(&env, Asset::TokenA, Asset::Native), Ok(expected));

        // A whitespace variant is a different identifier
        let spaced = env
            .crypto()
            .keccak256(&Bytes::from_slice(&env, b"Swap(TokenA,Native)"))
            .to_bytes();
        assert_eq!(direction_of(&env, &spaced), Err(Error::UnsupportedPair));
    }

    #[test]
    fn test_identifiers_are_distinct_and_invertible() {
        let env = Env::default();
        for (i, (from, to)) in PAIRS.iter().enumerate() {
            let id = resolve(&env, *from, *to).unwrap();
            assert_eq!(direction_of(&env, &id), Ok((*from, *to)));
            for (other_from, other_to) in PAIRS.iter().skip(i + 1) {
                assert_ne!(id, resolve(&env, *other_from, *other_to).unwrap());
            }
        }
    }

    #[test]
    fn test_same_asset_is_unsupported() {
        let env = Env::default();
        for asset in [Asset::Native, Asset::TokenA, Asset::TokenB] {
            assert_eq!(resolve(&env, asset, asset), Err(Error::UnsupportedPair));
        }
    }

    #[test]
    fn test_unknown_identifier_is_unsupported() {
        let env = Env::default();
        let zero = BytesN::from_array(&env, &[0u8; 32]);
        assert_eq!(direction_of(&env, &zero), Err(Error::UnsupportedPair));
    }
}
