//! # Types
//!
//! Record schema shared by every module of the campaign ledger.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`]: written once by `init_campaign`, never mutated.
//! - [`CampaignState`]: rewritten by every pledge, cancel, settlement and claim.
//!
//! The public API exposes the reconstructed [`Campaign`] struct.
//!
//! ### Lifecycle
//!
//! ```text
//! Active ──(check_campaign, now >= end)──► Settled { funded: true  }
//!                                      └─► Settled { funded: false }
//! ```
//!
//! `is_active` only ever moves from `true` to `false`, and `is_funded` is
//! computed exactly once, at that transition.
//!
//! ### Ledger invariant
//!
//! `pledged == Σ pledgers[i].amount` in every reachable state. Entries whose
//! `amount` is zero have been claimed or refunded and stay in the list.

use soroban_sdk::{contracttype, Address, BytesN, String, Vec};

// ── Bounds ───────────────────────────────────────────────────────────

/// Maximum campaign name length, in bytes.
pub const MAX_NAME_LEN: u32 = 64;

/// Maximum campaign description length, in bytes.
pub const MAX_DESCRIPTION_LEN: u32 = 512;

/// Upper bound on a campaign goal (10^30 base units).
pub const MAX_GOAL: i128 = 1_000_000_000_000_000_000_000_000_000_000;

/// Longest allowed campaign, 5 years in seconds.
pub const MAX_DURATION: u64 = 157_680_000;

/// Maximum number of entries in a campaign's pledger list.
pub const MAX_PLEDGERS: u32 = 128;

/// Namespace tag hashed together with the owner to derive a campaign address.
pub const CAMPAIGN_NAMESPACE: &[u8] = b"solfundme";

// ── Contract configuration ───────────────────────────────────────────

/// Deployment-time configuration, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Address allowed to pause, unpause and hand over administration.
    pub admin: Address,
    /// Stellar Asset Contract of the value unit pledged to campaigns.
    pub token: Address,
}

// ── Campaign records ─────────────────────────────────────────────────

/// A single pledge entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pledger {
    pub address: Address,
    /// Escrowed amount. Zero once refunded or paid out to the owner.
    pub amount: i128,
}

/// Immutable campaign configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: BytesN<32>,
    pub owner: Address,
    pub name: String,
    pub description: String,
    pub goal: i128,
    pub timestamp_start: u64,
    pub timestamp_end: u64,
}

/// Mutable campaign state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub pledged: i128,
    pub pledgers: Vec<Pledger>,
    pub is_active: bool,
    pub is_funded: bool,
}

/// Full on-chain representation of a campaign.
///
/// Reconstructed from the split [`CampaignConfig`] + [`CampaignState`] entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Deterministic address derived from `owner`; see `campaign_address`.
    pub id: BytesN<32>,
    /// Creator; the only address that can claim a funded campaign.
    pub owner: Address,
    pub name: String,
    pub description: String,
    /// Target amount in base units of the configured token.
    pub goal: i128,
    /// Sum of all pledger amounts.
    pub pledged: i128,
    /// Pledges in the order they were made.
    pub pledgers: Vec<Pledger>,
    /// Ledger timestamp at creation.
    pub timestamp_start: u64,
    /// `timestamp_start + duration`. Pledges close and settlement opens here.
    pub timestamp_end: u64,
    /// `true` until `check_campaign` settles the campaign.
    pub is_active: bool,
    /// Whether `pledged >= goal` at settlement. `false` before settlement.
    pub is_funded: bool,
}

impl Campaign {
    pub fn from_parts(config: CampaignConfig, state: CampaignState) -> Self {
        Campaign {
            id: config.id,
            owner: config.owner,
            name: config.name,
            description: config.description,
            goal: config.goal,
            pledged: state.pledged,
            pledgers: state.pledgers,
            timestamp_start: config.timestamp_start,
            timestamp_end: config.timestamp_end,
            is_active: state.is_active,
            is_funded: state.is_funded,
        }
    }

    /// Active (non-zero) pledge held by `address`, if any.
    pub fn pledge_of(&self, address: &Address) -> Option<i128> {
        active_pledge_of(&self.pledgers, address)
    }

    /// `true` once the ledger clock has reached the deadline.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.timestamp_end
    }
}

impl CampaignState {
    /// Fresh state for a newly created campaign.
    pub fn new(pledgers: Vec<Pledger>) -> Self {
        CampaignState {
            pledged: 0,
            pledgers,
            is_active: true,
            is_funded: false,
        }
    }

    /// Index of the entry for `address` that still holds a non-zero amount.
    pub fn active_index_of(&self, address: &Address) -> Option<u32> {
        self.pledgers
            .iter()
            .position(|p| &p.address == address && p.amount > 0)
            .map(|i| i as u32)
    }

    /// Index of any entry for `address`, including zeroed ones.
    pub fn index_of(&self, address: &Address) -> Option<u32> {
        self.pledgers
            .iter()
            .position(|p| &p.address == address)
            .map(|i| i as u32)
    }
}

fn active_pledge_of(pledgers: &Vec<Pledger>, address: &Address) -> Option<i128> {
    pledgers
        .iter()
        .find(|p| &p.address == address && p.amount > 0)
        .map(|p| p.amount)
}
