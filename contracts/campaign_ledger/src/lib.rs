//! # Campaign Ledger Contract
//!
//! Time-boxed crowdfunding campaigns whose pledges are escrowed by the
//! contract until a deadline decides between "funded" and "not funded".
//! The single Soroban contract `CampaignLedger` exposes:
//!
//! | Phase        | Entry Point(s)                                         |
//! |--------------|--------------------------------------------------------|
//! | Bootstrap    | [`CampaignLedger::init`]                               |
//! | Admin        | `pause`, `unpause`, `transfer_admin`                   |
//! | Creation     | [`CampaignLedger::init_campaign`]                      |
//! | Pledging     | [`CampaignLedger::send_pledge`], `cancel_pledge`       |
//! | Settlement   | [`CampaignLedger::check_campaign`]                     |
//! | Disbursement | [`CampaignLedger::claim_funds`]                        |
//! | Queries      | `campaign_address`, `get_campaign`, `get_escrow_balance`, `get_config`, `is_paused` |
//!
//! ## Architecture
//!
//! State transitions live in [`ledger`], persistence in [`storage`], and
//! admin gating in [`admin`]. The entry points here authenticate the caller,
//! read the ledger clock once, run the transition, move tokens, persist and
//! emit events. Every check runs before the first write or transfer, and any
//! `Err` rolls the whole invocation back.
//!
//! One campaign exists per owner, stored under
//! `sha256("solfundme" ‖ xdr(owner))`.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, BytesN, Env, String, Vec};

pub mod admin;
pub mod events;
mod ledger;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use ledger::Payout;
pub use types::{Campaign, CampaignConfig, CampaignState, Config, Pledger};
pub use types::{MAX_DESCRIPTION_LEN, MAX_DURATION, MAX_GOAL, MAX_NAME_LEN, MAX_PLEDGERS};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AccountAlreadyExists = 1,
    InvalidGoal = 2,
    InvalidDuration = 3,
    InvalidAmount = 4,
    CampaignNotActive = 5,
    CampaignExpired = 6,
    AlreadyPledged = 7,
    NoPledgeFound = 8,
    CampaignNotOver = 9,
    NotOwner = 10,
    NothingToClaim = 11,
    CampaignNotFound = 12,
    NameTooLong = 13,
    DescriptionTooLong = 14,
    TooManyPledgers = 15,
    Overflow = 16,
    InsufficientEscrow = 17,
    AlreadyInitialized = 18,
    NotInitialized = 19,
    NotAuthorized = 20,
    ProtocolPaused = 21,
}

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation & admin
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with its admin and the token pledged to campaigns.
    ///
    /// Must be called exactly once immediately after deployment; a second call
    /// fails with `Error::AlreadyInitialized`.
    pub fn init(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();
        admin::init(&env, &admin, &token)
    }

    /// Stop new campaigns and new pledges. Cancels, settlement and claims stay open.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        admin::set_paused(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        admin::set_paused(&env, &caller, false)
    }

    pub fn transfer_admin(env: Env, current: Address, new_admin: Address) -> Result<(), Error> {
        current.require_auth();
        admin::transfer_admin(&env, &current, &new_admin)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::load_config(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Create the campaign of `owner`, open for pledges for `duration` seconds.
    ///
    /// Each owner can hold one campaign; a second call fails with
    /// `Error::AccountAlreadyExists`.
    pub fn init_campaign(
        env: Env,
        owner: Address,
        name: String,
        description: String,
        goal: i128,
        duration: u64,
    ) -> Result<Campaign, Error> {
        owner.require_auth();
        storage::load_config(&env)?;
        admin::require_not_paused(&env)?;

        let id = storage::campaign_address(&env, &owner);
        if storage::campaign_exists(&env, &id) {
            return Err(Error::AccountAlreadyExists);
        }

        let now = env.ledger().timestamp();
        let timestamp_end = ledger::validate_new_campaign(&name, &description, goal, duration, now)?;

        let config = CampaignConfig {
            id: id.clone(),
            owner: owner.clone(),
            name: name.clone(),
            description,
            goal,
            timestamp_start: now,
            timestamp_end,
        };
        let state = CampaignState::new(Vec::new(&env));
        storage::save_campaign(&env, &config, &state);

        events::emit_campaign_created(&env, id, owner, name, goal, timestamp_end);

        Ok(Campaign::from_parts(config, state))
    }

    /// Pledge `amount` to `campaign`, moving it from `pledger` into escrow.
    ///
    /// An address may hold one active pledge per campaign; cancel it first to
    /// pledge a different amount.
    pub fn send_pledge(
        env: Env,
        campaign: BytesN<32>,
        pledger: Address,
        amount: i128,
    ) -> Result<(), Error> {
        pledger.require_auth();
        let config = storage::load_config(&env)?;
        admin::require_not_paused(&env)?;

        let (campaign_config, mut state) = storage::load_campaign_pair(&env, &campaign)?;
        let now = env.ledger().timestamp();
        ledger::apply_pledge(&campaign_config, &mut state, now, &pledger, amount)?;
        storage::credit_escrow(&env, &campaign, amount)?;

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&pledger, &env.current_contract_address(), &amount);

        storage::save_campaign_state(&env, &campaign, &state);
        events::emit_pledge_sent(&env, campaign, pledger, amount, state.pledged);
        Ok(())
    }

    /// Withdraw `pledger`'s pledge before the deadline. Returns the refunded amount.
    pub fn cancel_pledge(env: Env, campaign: BytesN<32>, pledger: Address) -> Result<i128, Error> {
        pledger.require_auth();
        let config = storage::load_config(&env)?;

        let (campaign_config, mut state) = storage::load_campaign_pair(&env, &campaign)?;
        let now = env.ledger().timestamp();
        let amount = ledger::apply_cancel(&campaign_config, &mut state, now, &pledger)?;
        storage::debit_escrow(&env, &campaign, amount)?;

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &pledger, &amount);

        storage::save_campaign_state(&env, &campaign, &state);
        events::emit_pledge_cancelled(&env, campaign, pledger, amount, state.pledged);
        Ok(amount)
    }

    /// Settle `campaign` once its deadline has passed.
    ///
    /// Anyone may call this, any number of times. Returns `true` on the call
    /// that settled the campaign and `false` for every no-op (deadline not yet
    /// reached, or already settled).
    pub fn check_campaign(env: Env, campaign: BytesN<32>, caller: Address) -> Result<bool, Error> {
        caller.require_auth();

        let (campaign_config, mut state) = storage::load_campaign_pair(&env, &campaign)?;
        let now = env.ledger().timestamp();
        if !ledger::settle(&campaign_config, &mut state, now) {
            return Ok(false);
        }

        storage::save_campaign_state(&env, &campaign, &state);
        events::emit_campaign_settled(
            &env,
            campaign,
            caller,
            state.pledged,
            campaign_config.goal,
            state.is_funded,
        );
        Ok(true)
    }

    /// Release escrow from a settled campaign to `caller`.
    ///
    /// Funded: the owner collects everything, once. Not funded: each pledger
    /// takes back their own pledge, once. Returns the amount transferred.
    pub fn claim_funds(env: Env, campaign: BytesN<32>, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = storage::load_config(&env)?;

        let (campaign_config, mut state) = storage::load_campaign_pair(&env, &campaign)?;
        let payout = ledger::apply_claim(&campaign_config, &mut state, &caller)?;
        let amount = payout.amount();
        storage::debit_escrow(&env, &campaign, amount)?;

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &caller, &amount);

        storage::save_campaign_state(&env, &campaign, &state);
        match payout {
            Payout::Owner(_) => events::emit_funds_claimed(&env, campaign, caller, amount),
            Payout::Refund(_) => events::emit_funds_refunded(&env, campaign, caller, amount),
        }
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Deterministic campaign address of `owner`.
    pub fn campaign_address(env: Env, owner: Address) -> BytesN<32> {
        storage::campaign_address(&env, &owner)
    }

    pub fn get_campaign(env: Env, campaign: BytesN<32>) -> Result<Campaign, Error> {
        storage::load_campaign(&env, &campaign)
    }

    /// Tokens currently escrowed for `campaign`.
    pub fn get_escrow_balance(env: Env, campaign: BytesN<32>) -> i128 {
        storage::get_escrow_balance(&env, &campaign)
    }
}
