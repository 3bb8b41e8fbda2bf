use soroban_sdk::{token, Address, Env};

use crate::storage_types::{
    Campaign, DataKey, FundraiserError, PersistentKey, Round, TTL_INSTANCE,
    TTL_INSTANCE_THRESHOLD, TTL_PERSISTENT, TTL_PERSISTENT_THRESHOLD,
};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE_THRESHOLD, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT_THRESHOLD, TTL_PERSISTENT);
}

pub fn write_config(env: &Env, owner: &Address, token: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    env.storage().instance().set(&DataKey::Token, token);
    env.storage().instance().set(&DataKey::Round, &0u32);
}

pub fn read_owner(env: &Env) -> Address {
    // Set by the constructor, so always present.
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn read_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

pub fn read_round(env: &Env) -> Round {
    env.storage().instance().get(&DataKey::Round).unwrap_or(0)
}

pub fn next_round(env: &Env) -> Round {
    let round = read_round(env) + 1;
    env.storage().instance().set(&DataKey::Round, &round);
    round
}

pub fn read_campaign(env: &Env) -> Option<Campaign> {
    env.storage().instance().get(&DataKey::Campaign)
}

pub fn write_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
}

/// Returns the current campaign if one is active.
pub fn active_campaign(env: &Env) -> Result<Campaign, FundraiserError> {
    match read_campaign(env) {
        Some(campaign) if campaign.is_active() => Ok(campaign),
        _ => Err(FundraiserError::NotActive),
    }
}

pub fn read_contribution(env: &Env, round: Round, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(round, contributor.clone()))
        .unwrap_or(0)
}

pub fn write_contribution(env: &Env, round: Round, contributor: &Address, amount: i128) {
    let key = PersistentKey::Contribution(round, contributor.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent(env, &key);
    }
}

/// Authenticates `caller` and checks it is the contract owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, FundraiserError> {
    caller.require_auth();
    let owner = read_owner(env);
    if *caller != owner {
        return Err(FundraiserError::Unauthorized);
    }
    Ok(owner)
}

/// Pulls `amount` from `from` into the contract.
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), FundraiserError> {
    let token_client = token::TokenClient::new(env, &read_token(env));
    match token_client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(FundraiserError::TransferFailed),
    }
}

/// Sends `amount` out of the contract's escrow to `to`.
///
/// Callers must have committed every state change for the operation before
/// calling this; the token contract may call back into the fundraiser.
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), FundraiserError> {
    let token_client = token::TokenClient::new(env, &read_token(env));
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(FundraiserError::TransferFailed),
    }
}
