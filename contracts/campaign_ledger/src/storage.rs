//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key      | Type     | Description                              |
//! |----------|----------|------------------------------------------|
//! | `Config` | `Config` | Admin and value token, written by `init` |
//! | `Paused` | `bool`   | Emergency pause flag                     |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key              | Type             | Description                     |
//! |------------------|------------------|---------------------------------|
//! | `CampConfig(id)` | `CampaignConfig` | Immutable campaign fields       |
//! | `CampState(id)`  | `CampaignState`  | Pledge ledger and status flags  |
//! | `Escrow(id)`     | `i128`           | Tokens held for this campaign   |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! `id` is always the owner-derived address returned by [`campaign_address`],
//! so a record can be located from nothing but its owner.

use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::types::{Campaign, CampaignConfig, CampaignState, Config, CAMPAIGN_NAMESPACE};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Contract configuration (Instance).
    Config,
    /// Emergency pause flag (Instance).
    Paused,
    /// Immutable campaign configuration (Persistent).
    CampConfig(BytesN<32>),
    /// Mutable campaign state (Persistent).
    CampState(BytesN<32>),
    /// Escrowed token balance of a campaign (Persistent).
    Escrow(BytesN<32>),
}

// ── Address derivation ───────────────────────────────────────────────

/// Derive the campaign address for `owner`:
/// `sha256(CAMPAIGN_NAMESPACE ‖ xdr(owner))`.
pub fn campaign_address(env: &Env, owner: &Address) -> BytesN<32> {
    let mut bytes = Bytes::from_slice(env, CAMPAIGN_NAMESPACE);
    bytes.append(&owner.clone().to_xdr(env));
    env.crypto().sha256(&bytes).into()
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Load the contract configuration, failing with `NotInitialized` before `init`.
pub fn load_config(env: &Env) -> Result<Config, Error> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn campaign_exists(env: &Env, id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::CampConfig(id.clone()))
}

/// Write config, initial state and a zero escrow entry for a new campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig, state: &CampaignState) {
    let config_key = DataKey::CampConfig(config.id.clone());
    env.storage().persistent().set(&config_key, config);
    bump_persistent(env, &config_key);

    save_campaign_state(env, &config.id, state);
    set_escrow_balance(env, &config.id, 0);
}

pub fn load_campaign_config(env: &Env, id: &BytesN<32>) -> Result<CampaignConfig, Error> {
    let key = DataKey::CampConfig(id.clone());
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_campaign_state(env: &Env, id: &BytesN<32>) -> Result<CampaignState, Error> {
    let key = DataKey::CampState(id.clone());
    let state = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Read config and state together, bumping both TTLs.
pub fn load_campaign_pair(
    env: &Env,
    id: &BytesN<32>,
) -> Result<(CampaignConfig, CampaignState), Error> {
    let config = load_campaign_config(env, id)?;
    let state = load_campaign_state(env, id)?;
    Ok((config, state))
}

pub fn load_campaign(env: &Env, id: &BytesN<32>) -> Result<Campaign, Error> {
    let (config, state) = load_campaign_pair(env, id)?;
    Ok(Campaign::from_parts(config, state))
}

/// Rewrite only the mutable state entry.
pub fn save_campaign_state(env: &Env, id: &BytesN<32>, state: &CampaignState) {
    let key = DataKey::CampState(id.clone());
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

// ── Escrow ───────────────────────────────────────────────────────────

pub fn get_escrow_balance(env: &Env, id: &BytesN<32>) -> i128 {
    let key = DataKey::Escrow(id.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

fn set_escrow_balance(env: &Env, id: &BytesN<32>, balance: i128) {
    let key = DataKey::Escrow(id.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}

/// Credit `amount` to the campaign's escrow. Returns the new balance.
pub fn credit_escrow(env: &Env, id: &BytesN<32>, amount: i128) -> Result<i128, Error> {
    let balance = get_escrow_balance(env, id)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    set_escrow_balance(env, id, balance);
    Ok(balance)
}

/// Debit `amount` from the campaign's escrow. Returns the new balance.
pub fn debit_escrow(env: &Env, id: &BytesN<32>, amount: i128) -> Result<i128, Error> {
    let current = get_escrow_balance(env, id);
    if amount > current {
        return Err(Error::InsufficientEscrow);
    }
    let balance = current - amount;
    set_escrow_balance(env, id, balance);
    Ok(balance)
}
