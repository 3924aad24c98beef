//! # Ledger
//!
//! Pure state transitions of a campaign. Every function validates first and
//! only then mutates the [`CampaignState`] it was handed, so an `Err` leaves
//! the state untouched. Token movement, persistence and events are handled by
//! the entry points in `lib.rs`.

use soroban_sdk::{Address, String};

use crate::types::{
    CampaignConfig, CampaignState, Pledger, MAX_DESCRIPTION_LEN, MAX_DURATION, MAX_GOAL,
    MAX_NAME_LEN, MAX_PLEDGERS,
};
use crate::Error;

/// Who receives the escrow released by a successful claim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payout {
    /// The owner collects the whole escrow of a funded campaign.
    Owner(i128),
    /// A pledger takes back their own pledge from an unfunded campaign.
    Refund(i128),
}

impl Payout {
    pub fn amount(&self) -> i128 {
        match self {
            Payout::Owner(amount) | Payout::Refund(amount) => *amount,
        }
    }
}

/// Validate creation parameters and return `timestamp_end`.
pub fn validate_new_campaign(
    name: &String,
    description: &String,
    goal: i128,
    duration: u64,
    now: u64,
) -> Result<u64, Error> {
    if name.len() > MAX_NAME_LEN {
        return Err(Error::NameTooLong);
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::DescriptionTooLong);
    }
    if goal <= 0 || goal > MAX_GOAL {
        return Err(Error::InvalidGoal);
    }
    if duration > MAX_DURATION {
        return Err(Error::InvalidDuration);
    }
    now.checked_add(duration).ok_or(Error::InvalidDuration)
}

/// Pledges and cancellations are only accepted while active and before the deadline.
fn require_open(config: &CampaignConfig, state: &CampaignState, now: u64) -> Result<(), Error> {
    if !state.is_active {
        return Err(Error::CampaignNotActive);
    }
    if now >= config.timestamp_end {
        return Err(Error::CampaignExpired);
    }
    Ok(())
}

/// Record a new pledge of `amount` by `pledger`.
pub fn apply_pledge(
    config: &CampaignConfig,
    state: &mut CampaignState,
    now: u64,
    pledger: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    require_open(config, state, now)?;

    if state.active_index_of(pledger).is_some() {
        return Err(Error::AlreadyPledged);
    }
    if state.pledgers.len() >= MAX_PLEDGERS {
        return Err(Error::TooManyPledgers);
    }
    let pledged = state.pledged.checked_add(amount).ok_or(Error::Overflow)?;

    state.pledgers.push_back(Pledger {
        address: pledger.clone(),
        amount,
    });
    state.pledged = pledged;
    Ok(())
}

/// Remove `pledger`'s entry and return the amount to refund.
pub fn apply_cancel(
    config: &CampaignConfig,
    state: &mut CampaignState,
    now: u64,
    pledger: &Address,
) -> Result<i128, Error> {
    require_open(config, state, now)?;

    let index = state
        .active_index_of(pledger)
        .ok_or(Error::NoPledgeFound)?;
    let entry = state.pledgers.get(index).ok_or(Error::NoPledgeFound)?;

    state.pledgers.remove(index);
    state.pledged -= entry.amount;
    Ok(entry.amount)
}

/// Settle the campaign if its deadline has passed.
///
/// Returns `true` only on the call that performs the transition; every other
/// call is a no-op.
pub fn settle(config: &CampaignConfig, state: &mut CampaignState, now: u64) -> bool {
    if !state.is_active || now < config.timestamp_end {
        return false;
    }
    state.is_active = false;
    state.is_funded = state.pledged >= config.goal;
    true
}

/// Decide and record the payout for `caller` on a settled campaign.
pub fn apply_claim(
    config: &CampaignConfig,
    state: &mut CampaignState,
    caller: &Address,
) -> Result<Payout, Error> {
    if state.is_active {
        return Err(Error::CampaignNotOver);
    }

    if state.is_funded {
        if caller != &config.owner {
            return Err(Error::NotOwner);
        }
        if state.pledged == 0 {
            return Err(Error::NothingToClaim);
        }
        let amount = state.pledged;
        // Paid out entries are kept but zeroed so `pledged` still matches their sum.
        for i in 0..state.pledgers.len() {
            if let Some(mut entry) = state.pledgers.get(i) {
                entry.amount = 0;
                state.pledgers.set(i, entry);
            }
        }
        state.pledged = 0;
        return Ok(Payout::Owner(amount));
    }

    let index = match state.active_index_of(caller) {
        Some(index) => index,
        None if state.index_of(caller).is_some() || caller == &config.owner => {
            return Err(Error::NothingToClaim)
        }
        None => return Err(Error::NoPledgeFound),
    };
    let mut entry = state.pledgers.get(index).ok_or(Error::NoPledgeFound)?;
    let amount = entry.amount;
    entry.amount = 0;
    state.pledgers.set(index, entry);
    state.pledged -= amount;
    Ok(Payout::Refund(amount))
}
