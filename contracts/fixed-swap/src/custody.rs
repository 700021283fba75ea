//! Reserve custody.
//!
//! All token movement in and out of the engine goes through here. Each
//! transfer updates the caller-supplied `Reserves` record, which the engine
//! owns and persists. Ledger failures surface as `TransferFailed` and are
//! never retried.

use soroban_sdk::{log, token, Address, Env};

use crate::error::Error;
use crate::storage;
use crate::types::{Asset, Reserves};

fn ledger<'a>(env: &Env, asset: Asset) -> token::Client<'a> {
    token::Client::new(env, &storage::get_asset_address(env, asset))
}

/// Move `amount` of `asset` from `from` into custody and credit the reserve.
///
/// Native input is sent directly by the caller, the way a payment is
/// attached to a call. Token input is pulled against the allowance the
/// caller granted this contract.
pub fn pull(
    env: &Env,
    reserves: &mut Reserves,
    asset: Asset,
    from: &Address,
    amount: i128,
) -> Result<(), Error> {
    match asset {
        Asset::Native => pull_direct(env, reserves, asset, from, amount),
        Asset::TokenA | Asset::TokenB => {
            let client = ledger(env, asset);
            let contract_address = env.current_contract_address();
            let result =
                client.try_transfer_from(&contract_address, from, &contract_address, &amount);
            if !matches!(result, Ok(Ok(()))) {
                log!(env, "allowance pull refused", asset, from.clone(), amount);
                return Err(Error::TransferFailed);
            }
            credit(reserves, asset, amount)
        }
    }
}

/// Move `amount` of `asset` into custody with a transfer `from` authorises
/// itself, then credit the reserve.
pub fn pull_direct(
    env: &Env,
    reserves: &mut Reserves,
    asset: Asset,
    from: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = ledger(env, asset);
    let result = client.try_transfer(from, &env.current_contract_address(), &amount);
    if !matches!(result, Ok(Ok(()))) {
        log!(env, "transfer in refused", asset, from.clone(), amount);
        return Err(Error::TransferFailed);
    }
    credit(reserves, asset, amount)
}

/// Transfer `amount` of `asset` from custody to `to`.
///
/// The reserve is debited and written to storage before the ledger is
/// called, so anything running inside the transfer sees the post-settlement
/// reserves.
pub fn push(
    env: &Env,
    reserves: &mut Reserves,
    asset: Asset,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let slot = reserves.slot_mut(asset);
    if *slot < amount {
        log!(env, "push exceeds reserve", asset, *slot, amount);
        return Err(Error::TransferFailed);
    }
    *slot -= amount;
    storage::set_reserves(env, reserves);

    let client = ledger(env, asset);
    let result = client.try_transfer(&env.current_contract_address(), to, &amount);
    if !matches!(result, Ok(Ok(()))) {
        log!(env, "push refused", asset, to.clone(), amount);
        return Err(Error::TransferFailed);
    }
    Ok(())
}

/// Balance the ledger reports for this contract.
pub fn live_balance(env: &Env, asset: Asset) -> i128 {
    ledger(env, asset).balance(&env.current_contract_address())
}

fn credit(reserves: &mut Reserves, asset: Asset, amount: i128) -> Result<(), Error> {
    let slot = reserves.slot_mut(asset);
    *slot = slot.checked_add(amount).ok_or(Error::Overflow)?;
    Ok(())
}
