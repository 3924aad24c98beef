//! # Admin: bootstrap and emergency control
//!
//! A single admin address, set by `init`, can pause and unpause the ledger
//! and hand administration to another address. The admin has **no** power
//! over campaign funds.
//!
//! ## Pause scope
//!
//! | Entry point      | Blocked while paused |
//! |------------------|----------------------|
//! | `init_campaign`  | yes                  |
//! | `send_pledge`    | yes                  |
//! | `cancel_pledge`  | no                   |
//! | `check_campaign` | no                   |
//! | `claim_funds`    | no                   |
//!
//! Exits from escrow stay open so that a pause can never strand pledged funds.

use soroban_sdk::{Address, Env};

use crate::events;
use crate::storage;
use crate::types::Config;
use crate::Error;

/// Store the initial configuration. Fails with `AlreadyInitialized` on a
/// second call.
pub fn init(env: &Env, admin: &Address, token: &Address) -> Result<(), Error> {
    if storage::has_config(env) {
        return Err(Error::AlreadyInitialized);
    }
    storage::save_config(
        env,
        &Config {
            admin: admin.clone(),
            token: token.clone(),
        },
    );
    storage::set_paused(env, false);
    Ok(())
}

/// Assert that `caller` is the configured admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<Config, Error> {
    let config = storage::load_config(env)?;
    if &config.admin != caller {
        return Err(Error::NotAuthorized);
    }
    Ok(config)
}

pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
    require_admin(env, caller)?;
    storage::set_paused(env, paused);
    if paused {
        events::emit_protocol_paused(env, caller.clone());
    } else {
        events::emit_protocol_unpaused(env, caller.clone());
    }
    Ok(())
}

/// Hand administration to `new_admin`. The previous admin loses all rights
/// immediately.
pub fn transfer_admin(env: &Env, current: &Address, new_admin: &Address) -> Result<(), Error> {
    let mut config = require_admin(env, current)?;
    config.admin = new_admin.clone();
    storage::save_config(env, &config);
    events::emit_admin_transferred(env, current.clone(), new_admin.clone());
    Ok(())
}

pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if storage::is_paused(env) {
        return Err(Error::ProtocolPaused);
    }
    Ok(())
}
