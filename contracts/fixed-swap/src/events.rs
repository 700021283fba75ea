use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::types::{Asset, Reserves};

/// Emit a settlement event
/// Topics: ("swap", pair_id)
/// Data: (caller, amount_in, amount_out)
pub fn emit_swap(
    env: &Env,
    pair_id: &BytesN<32>,
    caller: &Address,
    amount_in: i128,
    amount_out: i128,
) {
    let topics = (symbol_short!("swap"), pair_id.clone());
    let data = (caller.clone(), amount_in, amount_out);
    env.events().publish(topics, data);
}

/// Emit a funding event
/// Topics: ("fund", asset)
/// Data: (funder, amount)
pub fn emit_fund(env: &Env, asset: Asset, funder: &Address, amount: i128) {
    let topics = (symbol_short!("fund"), asset);
    let data = (funder.clone(), amount);
    env.events().publish(topics, data);
}

/// Emit a reserve sync event
/// Topics: ("sync",)
/// Data: (native, token_a, token_b)
pub fn emit_sync(env: &Env, reserves: &Reserves) {
    let topics = (symbol_short!("sync"),);
    let data = (reserves.native, reserves.token_a, reserves.token_b);
    env.events().publish(topics, data);
}
