#![no_std]

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env};

mod custody;
mod error;
mod events;
mod pair;
mod rates;
mod storage;
mod types;

pub use error::Error;
pub use types::{Asset, RateTable, Reserves};

#[contract]
pub struct FixedSwapContract;

#[contractimpl]
impl FixedSwapContract {
    /// Constructor: bind the three ledgers and fix the token prices.
    /// Called automatically during contract deployment.
    ///
    /// # Arguments
    /// * `native` - Ledger contract of the native asset
    /// * `token_a` - Ledger contract of token A
    /// * `token_b` - Ledger contract of token B
    /// * `price_a` - Native units per unit of token A (must be positive)
    /// * `price_b` - Native units per unit of token B (must be positive)
    ///
    /// # Panics
    /// With `InvalidPrice` if a price is not positive, or `DuplicateAsset`
    /// if two assets share a ledger address
    pub fn __constructor(
        env: Env,
        native: Address,
        token_a: Address,
        token_b: Address,
        price_a: i128,
        price_b: i128,
    ) {
        let rates = match RateTable::new(price_a, price_b) {
            Ok(rates) => rates,
            Err(err) => panic_with_error!(&env, err),
        };
        if native == token_a || native == token_b || token_a == token_b {
            panic_with_error!(&env, Error::DuplicateAsset);
        }

        storage::set_asset_address(&env, Asset::Native, &native);
        storage::set_asset_address(&env, Asset::TokenA, &token_a);
        storage::set_asset_address(&env, Asset::TokenB, &token_b);
        storage::set_rates(&env, &rates);
        storage::set_reserves(&env, &Reserves::default());
        storage::extend_instance_ttl(&env);
    }

    /// Swap `payment` of the pair's source asset for exactly `expected_out`
    /// of its destination asset.
    ///
    /// Native payment is transferred straight from the caller. Token payment
    /// is pulled against an allowance the caller must have granted this
    /// contract beforehand.
    ///
    /// # Returns
    /// The amount credited to the caller, always equal to `expected_out`
    ///
    /// # Errors
    /// * `UnsupportedPair` - `pair_id` is not a supported direction
    /// * `InvalidAmount` - `payment` or `expected_out` is not positive
    /// * `AmountMismatch` - the converted payment differs from `expected_out`
    /// * `InsufficientReserve` - the engine holds less than `expected_out`
    /// * `TransferFailed` - a ledger refused the pull or the push
    pub fn swap_in_for(
        env: Env,
        caller: Address,
        pair_id: BytesN<32>,
        payment: i128,
        expected_out: i128,
    ) -> Result<i128, Error> {
        caller.require_auth();

        let (from, to) = pair::direction_of(&env, &pair_id)?;
        if payment <= 0 || expected_out <= 0 {
            return Err(Error::InvalidAmount);
        }

        let amount_out = storage::get_rates(&env).convert(payment, from, to)?;
        if amount_out != expected_out {
            log!(&env, "amount mismatch", amount_out, expected_out);
            return Err(Error::AmountMismatch);
        }

        settle(&env, &pair_id, &caller, from, to, payment, amount_out)
    }

    /// Swap `amount_in` of a token for whatever the fixed rate pays out.
    ///
    /// The caller must have approved this contract for at least `amount_in`
    /// of the source token. Native input is only accepted by `swap_in_for`.
    ///
    /// # Errors
    /// * `UnsupportedPair` - unknown `pair_id`, or its source is the native asset
    /// * `InvalidAmount` - `amount_in` is not positive
    /// * `AmountMismatch` - `amount_in` is worth less than one output unit
    /// * `InsufficientReserve` - the engine cannot cover the output
    /// * `TransferFailed` - a ledger refused the pull or the push
    pub fn swap_out_for(
        env: Env,
        caller: Address,
        pair_id: BytesN<32>,
        amount_in: i128,
    ) -> Result<i128, Error> {
        caller.require_auth();

        let (from, to) = pair::direction_of(&env, &pair_id)?;
        if from == Asset::Native {
            return Err(Error::UnsupportedPair);
        }
        if amount_in <= 0 {
            return Err(Error::InvalidAmount);
        }

        let amount_out = storage::get_rates(&env).convert(amount_in, from, to)?;
        if amount_out == 0 {
            return Err(Error::AmountMismatch);
        }

        settle(&env, &pair_id, &caller, from, to, amount_in, amount_out)
    }

    /// Output the engine would pay for `amount_in` on `pair_id`.
    pub fn quote(env: Env, pair_id: BytesN<32>, amount_in: i128) -> Result<i128, Error> {
        let (from, to) = pair::direction_of(&env, &pair_id)?;
        if amount_in <= 0 {
            return Err(Error::InvalidAmount);
        }
        storage::extend_instance_ttl(&env);
        storage::get_rates(&env).convert(amount_in, from, to)
    }

    /// Smallest input that pays exactly `amount_out` on `pair_id`.
    ///
    /// Fails with `AmountMismatch` when no input hits `amount_out` exactly.
    pub fn quote_input(env: Env, pair_id: BytesN<32>, amount_out: i128) -> Result<i128, Error> {
        let (from, to) = pair::direction_of(&env, &pair_id)?;
        storage::extend_instance_ttl(&env);
        storage::get_rates(&env).required_input(amount_out, from, to)
    }

    /// Derive the identifier of the `from` → `to` direction.
    pub fn pair_id(env: Env, from: Asset, to: Asset) -> Result<BytesN<32>, Error> {
        pair::resolve(&env, from, to)
    }

    /// Unit price of `asset` in native units.
    pub fn price_of(env: Env, asset: Asset) -> i128 {
        storage::extend_instance_ttl(&env);
        storage::get_rates(&env).price_of(asset)
    }

    /// Tracked reserve of `asset`.
    pub fn reserve(env: Env, asset: Asset) -> i128 {
        storage::extend_instance_ttl(&env);
        storage::get_reserves(&env).of(asset)
    }

    /// Tracked reserves of all three assets.
    pub fn reserves(env: Env) -> Reserves {
        storage::extend_instance_ttl(&env);
        storage::get_reserves(&env)
    }

    /// Get the ledger contract address bound to an asset.
    pub fn asset(env: Env, asset: Asset) -> Address {
        storage::extend_instance_ttl(&env);
        storage::get_asset_address(&env, asset)
    }

    /// Deposit `amount` of `asset` into the engine's reserves.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount` is not positive
    /// * `TransferFailed` - the funder's ledger refused the transfer
    pub fn fund(env: Env, funder: Address, asset: Asset, amount: i128) -> Result<(), Error> {
        funder.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        storage::acquire_lock(&env)?;
        storage::extend_instance_ttl(&env);

        let mut reserves = storage::get_reserves(&env);
        custody::pull_direct(&env, &mut reserves, asset, &funder, amount)?;
        storage::set_reserves(&env, &reserves);

        events::emit_fund(&env, asset, &funder, amount);
        storage::release_lock(&env);
        Ok(())
    }

    /// Reset the tracked reserves to the balances the ledgers report for
    /// this contract, picking up tokens sent to it directly.
    pub fn sync_reserves(env: Env) -> Result<Reserves, Error> {
        storage::acquire_lock(&env)?;
        storage::extend_instance_ttl(&env);

        let reserves = Reserves {
            native: custody::live_balance(&env, Asset::Native),
            token_a: custody::live_balance(&env, Asset::TokenA),
            token_b: custody::live_balance(&env, Asset::TokenB),
        };
        storage::set_reserves(&env, &reserves);

        events::emit_sync(&env, &reserves);
        storage::release_lock(&env);
        Ok(reserves)
    }
}

/// Apply a validated swap: check the reserve, take the input, pay the output
/// and record the settlement. Any error unwinds the whole invocation.
fn settle(
    env: &Env,
    pair_id: &BytesN<32>,
    caller: &Address,
    from: Asset,
    to: Asset,
    amount_in: i128,
    amount_out: i128,
) -> Result<i128, Error> {
    storage::acquire_lock(env)?;
    storage::extend_instance_ttl(env);

    let mut reserves = storage::get_reserves(env);
    if reserves.of(to) < amount_out {
        log!(env, "insufficient reserve", to, reserves.of(to), amount_out);
        return Err(Error::InsufficientReserve);
    }

    custody::pull(env, &mut reserves, from, caller, amount_in)?;
    // Last external call; reserves are persisted inside before the transfer
    custody::push(env, &mut reserves, to, caller, amount_out)?;

    events::emit_swap(env, pair_id, caller, amount_in, amount_out);
    storage::release_lock(env);
    Ok(amount_out)
}

#[cfg(test)]
#[macro_use]
extern crate std;
