use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::types::{Asset, DataKey, RateTable, Reserves};

// TTL constants for storage entries
const DAY_IN_LEDGERS: u32 = 17280; // ~24 hours at 5s per ledger
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Extend the TTL of instance storage
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Get the ledger contract address for an asset
pub fn get_asset_address(env: &Env, asset: Asset) -> Address {
    env.storage()
        .instance()
        .get(&asset_key(asset))
        .expect("Asset not set")
}

/// Bind an asset to its ledger contract address
pub fn set_asset_address(env: &Env, asset: Asset, address: &Address) {
    env.storage().instance().set(&asset_key(asset), address);
}

fn asset_key(asset: Asset) -> DataKey {
    match asset {
        Asset::Native => DataKey::Native,
        Asset::TokenA => DataKey::TokenA,
        Asset::TokenB => DataKey::TokenB,
    }
}

/// Get the unit prices fixed at construction
pub fn get_rates(env: &Env) -> RateTable {
    env.storage()
        .instance()
        .get(&DataKey::Rates)
        .expect("Rates not set")
}

/// Set the unit prices
pub fn set_rates(env: &Env, rates: &RateTable) {
    env.storage().instance().set(&DataKey::Rates, rates);
}

/// Get the tracked reserves
/// Returns all zeroes before the first funding
pub fn get_reserves(env: &Env) -> Reserves {
    env.storage()
        .instance()
        .get(&DataKey::Reserves)
        .unwrap_or_default()
}

/// Set the tracked reserves
pub fn set_reserves(env: &Env, reserves: &Reserves) {
    env.storage().instance().set(&DataKey::Reserves, reserves);
}

/// Take the settlement lock
/// Fails if a settlement is already running in this invocation tree
pub fn acquire_lock(env: &Env) -> Result<(), Error> {
    let locked: bool = env
        .storage()
        .instance()
        .get(&DataKey::Lock)
        .unwrap_or(false);
    if locked {
        return Err(Error::Reentrant);
    }
    env.storage().instance().set(&DataKey::Lock, &true);
    Ok(())
}

/// Release the settlement lock
pub fn release_lock(env: &Env) {
    env.storage().instance().remove(&DataKey::Lock);
}
